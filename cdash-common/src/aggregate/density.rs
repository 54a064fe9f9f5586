//! Release density: month × year count table

use chrono::Month;
use serde::Serialize;
use std::collections::{BTreeSet, HashMap};

use crate::catalog::{Record, CALENDAR_MONTHS};

/// Counts keyed by (month, year). Absent combinations read as zero.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DensityMatrix {
    years: Vec<i32>,
    counts: HashMap<(u32, i32), u64>,
}

impl DensityMatrix {
    /// Column keys, ascending
    pub fn years(&self) -> &[i32] {
        &self.years
    }

    /// Row keys, always January through December
    pub fn months(&self) -> &'static [Month; 12] {
        &CALENDAR_MONTHS
    }

    /// Count for one cell; zero when the combination never occurs
    pub fn count(&self, month: Month, year: i32) -> u64 {
        self.counts
            .get(&(month.number_from_month(), year))
            .copied()
            .unwrap_or(0)
    }

    /// Whether the combination occurs at all
    pub fn contains(&self, month: Month, year: i32) -> bool {
        self.counts.contains_key(&(month.number_from_month(), year))
    }

    /// Largest cell value, zero for an empty matrix
    pub fn max_count(&self) -> u64 {
        self.counts.values().copied().max().unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Dense rows in calendar order, one value per year column
    pub fn rows(&self) -> impl Iterator<Item = (Month, Vec<u64>)> + '_ {
        CALENDAR_MONTHS.iter().map(move |&month| {
            let row = self.years.iter().map(|&year| self.count(month, year)).collect();
            (month, row)
        })
    }
}

/// Serialized as `{ "years": [...], "months": [...], "counts": [[...], ...] }`
impl Serialize for DensityMatrix {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        use serde::ser::SerializeStruct;

        let months: Vec<&str> = CALENDAR_MONTHS.iter().map(|m| m.name()).collect();
        let counts: Vec<Vec<u64>> = self.rows().map(|(_, row)| row).collect();

        let mut state = serializer.serialize_struct("DensityMatrix", 3)?;
        state.serialize_field("years", &self.years)?;
        state.serialize_field("months", &months)?;
        state.serialize_field("counts", &counts)?;
        state.end()
    }
}

/// Group by (`year_added`, `month_added`) and count
pub fn release_density<'a, I>(records: I) -> DensityMatrix
where
    I: IntoIterator<Item = &'a Record>,
{
    let mut counts: HashMap<(u32, i32), u64> = HashMap::new();
    let mut years = BTreeSet::new();

    for record in records {
        years.insert(record.year_added);
        *counts
            .entry((record.month_added.number_from_month(), record.year_added))
            .or_insert(0) += 1;
    }

    DensityMatrix {
        years: years.into_iter().collect(),
        counts,
    }
}
