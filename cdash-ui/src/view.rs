//! Dashboard view model
//!
//! Runs filter → aggregate for one interaction and collects every result the
//! page needs. Rendering only reads from this.
//!
//! Only the "Total Titles" KPI follows the selection. Every chart and the
//! two type totals are computed over the full catalog.

use cdash_common::aggregate::{
    rating_counts, release_density, top_countries, top_genres, yearly_trend, CategoryCount,
    DensityMatrix, KpiSummary, TrendPoint, TOP_N,
};
use cdash_common::{filter, Dataset, TypeSelection};

/// Everything the dashboard renders for one selection
#[derive(Debug, Clone)]
pub struct DashboardView {
    pub selection: TypeSelection,
    pub kpis: KpiSummary,
    pub trend: Vec<TrendPoint>,
    pub density: DensityMatrix,
    pub genres: Vec<CategoryCount>,
    pub countries: Vec<CategoryCount>,
    pub ratings: Vec<CategoryCount>,
}

impl DashboardView {
    pub fn build(dataset: &Dataset, selection: TypeSelection) -> Self {
        let subset = filter(dataset, selection);
        let records = dataset.records();

        Self {
            selection,
            kpis: KpiSummary::compute(&subset, dataset),
            trend: yearly_trend(records),
            density: release_density(records),
            genres: top_genres(records, TOP_N),
            countries: top_countries(records, TOP_N),
            ratings: rating_counts(records),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cdash_common::catalog::read_dataset;

    fn sample() -> Dataset {
        let csv = concat!(
            "type,title,country,date_added,rating,duration,listed_in\n",
            "Movie,A,India,\"March 3, 2021\",PG,90 min,\"Dramas, Comedies\"\n",
            "TV Show,B,Japan,\"March 9, 2021\",TV-MA,1 Season,Anime Series\n",
            "Movie,C,India,\"July 1, 2022\",PG,100 min,Comedies\n",
        );
        read_dataset(csv.as_bytes()).unwrap()
    }

    #[test]
    fn test_trend_ignores_selection() {
        let ds = sample();
        let all = DashboardView::build(&ds, TypeSelection::All);
        let shows = DashboardView::build(&ds, TypeSelection::TvShow);
        assert_eq!(all.trend, shows.trend);
        assert_eq!(shows.trend.len(), 3);
    }

    #[test]
    fn test_charts_ignore_selection() {
        let ds = sample();
        let all = DashboardView::build(&ds, TypeSelection::All);

        for selection in [TypeSelection::Movie, TypeSelection::TvShow] {
            let view = DashboardView::build(&ds, selection);
            assert_eq!(view.density, all.density);
            assert_eq!(view.genres, all.genres);
            assert_eq!(view.countries, all.countries);
            assert_eq!(view.ratings, all.ratings);
        }

        assert_eq!(all.density.years(), &[2021, 2022]);
        assert_eq!(all.genres.len(), 3);
        assert_eq!(all.genres[0].label, "Comedies");
        assert_eq!(all.ratings.len(), 2);
    }

    #[test]
    fn test_only_total_titles_follows_selection() {
        let ds = sample();
        let shows = DashboardView::build(&ds, TypeSelection::TvShow);
        assert_eq!(shows.kpis.total_titles, 1);
        assert_eq!(shows.kpis.total_movies, 2);
        assert_eq!(shows.kpis.total_tv_shows, 1);
    }
}
