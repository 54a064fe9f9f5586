//! Yearly content growth

use serde::Serialize;
use std::collections::BTreeMap;

use crate::catalog::{ContentType, Record};

/// Titles of one kind added in one year
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TrendPoint {
    pub year: i32,
    pub content_type: ContentType,
    pub count: u64,
}

/// Group by (`year_added`, content type) and count.
///
/// Output is ordered by year, then content type.
pub fn yearly_trend<'a, I>(records: I) -> Vec<TrendPoint>
where
    I: IntoIterator<Item = &'a Record>,
{
    let mut groups: BTreeMap<(i32, &ContentType), u64> = BTreeMap::new();
    for record in records {
        *groups
            .entry((record.year_added, &record.content_type))
            .or_insert(0) += 1;
    }

    groups
        .into_iter()
        .map(|((year, content_type), count)| TrendPoint {
            year,
            content_type: content_type.clone(),
            count,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::aggregate::fixtures::three_titles;
    use crate::catalog::read_dataset;

    fn point(year: i32, content_type: ContentType, count: u64) -> TrendPoint {
        TrendPoint {
            year,
            content_type,
            count,
        }
    }

    #[test]
    fn test_trend_three_titles() {
        let ds = three_titles();
        let trend = yearly_trend(ds.records());
        assert_eq!(
            trend,
            vec![
                point(2021, ContentType::Movie, 1),
                point(2021, ContentType::TvShow, 1),
                point(2022, ContentType::Movie, 1),
            ]
        );
    }

    #[test]
    fn test_other_types_sort_by_name_within_a_year() {
        let csv = concat!(
            "type,title,date_added,rating,duration\n",
            "TV Show,A,\"May 1, 2020\",PG,1 Season\n",
            "Short,B,\"May 1, 2020\",PG,9 min\n",
            "Movie,C,\"May 1, 2020\",PG,90 min\n",
        );
        let ds = read_dataset(csv.as_bytes()).unwrap();
        let kinds: Vec<String> = yearly_trend(ds.records())
            .iter()
            .map(|p| p.content_type.to_string())
            .collect();
        assert_eq!(kinds, vec!["Movie", "Short", "TV Show"]);
    }

    #[test]
    fn test_trend_empty() {
        let trend = yearly_trend(std::iter::empty());
        assert!(trend.is_empty());
    }

    #[test]
    fn test_trend_counts_sum_to_total() {
        let ds = three_titles();
        let total: u64 = yearly_trend(ds.records()).iter().map(|p| p.count).sum();
        assert_eq!(total as usize, ds.len());
    }
}
