//! End-to-end tests: load → clean → filter → aggregate

use cdash_common::aggregate::{
    genre_tokens, rating_counts, release_density, top_countries, top_genres, yearly_trend,
    KpiSummary, TrendPoint, TOP_N,
};
use cdash_common::catalog::{load_dataset, NO_DIRECTOR, UNKNOWN_COUNTRY};
use cdash_common::{filter, ContentType, DatasetCache, Error, TypeSelection};
use chrono::Month;
use std::path::PathBuf;
use tempfile::TempDir;

const CATALOG: &str = "\
show_id,type,title,director,cast,country,date_added,release_year,rating,duration,listed_in,description
s1,Movie,Dick Johnson Is Dead,Kirsten Johnson,,United States,\"September 25, 2021\",2020,PG-13,90 min,Documentaries,A doc
s2,TV Show,Blood & Water,,Ama Qamata,South Africa,\"September 24, 2021\",2021,TV-MA,2 Seasons,\"International TV Shows, TV Dramas, TV Mysteries\",A drama
s3,TV Show,Ganglands,Julien Leclercq,Sami Bouajila,,\"September 24, 2021\",2021,TV-MA,1 Season,\"Crime TV Shows, International TV Shows, TV Action & Adventure\",A heist
s4,Movie,My Little Pony,Robert Cullen,Vanessa Hudgens,,\" September 24, 2021\",2021,PG,91 min,Children & Family Movies,A pony
s5,Movie,Sankofa,Haile Gerima,Kofi Ghanaba,United States,,1993,TV-MA,125 min,\"Dramas, Independent Movies, International Movies\",No date
s6,Movie,The Starling,Theodore Melfi,Melissa McCarthy,United States,someday,2021,PG-13,104 min,\"Comedies, Dramas\",Bad date
s7,TV Show,Jailbirds,,,,\"December 1, 2019\",2021,,1 Season,\"Docuseries, Reality TV\",No rating
s8,Movie,Grown Ups,Dennis Dugan,Adam Sandler,United States,\"January 1, 2020\",2010,PG-13,,Comedies,No duration
s9,Movie,Kota Factory,,,India,\"March 1, 2020\",2019,TV-14,80 min,\"Comedies, Dramas\",Kept
";

fn point(year: i32, content_type: ContentType, count: u64) -> TrendPoint {
    TrendPoint {
        year,
        content_type,
        count,
    }
}

fn write_catalog() -> (TempDir, PathBuf) {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("netflix_titles.csv");
    std::fs::write(&path, CATALOG).unwrap();
    (dir, path)
}

#[test]
fn test_cleaning_invariants() {
    let (_dir, path) = write_catalog();
    let ds = load_dataset(&path).unwrap();

    // s5 (no date), s6 (bad date), s7 (no rating), s8 (no duration) dropped
    assert_eq!(ds.len(), 5);
    for r in ds.records() {
        assert!(!r.rating.is_empty());
        assert!(!r.duration.is_empty());
        assert!(!r.director.is_empty());
        assert!(!r.cast.is_empty());
        assert!(!r.country.is_empty());
    }

    let report = ds.report();
    assert_eq!(report.rows_read, 9);
    assert_eq!(report.rows_dropped(), 4);
    assert_eq!(report.dropped_missing_date, 1);
    assert_eq!(report.dropped_unparseable_date, 1);
    assert_eq!(report.dropped_missing_rating, 1);
    assert_eq!(report.dropped_missing_duration, 1);

    let blood = ds.records().iter().find(|r| r.title == "Blood & Water").unwrap();
    assert_eq!(blood.director, NO_DIRECTOR);
}

#[test]
fn test_leading_space_date_is_kept() {
    let (_dir, path) = write_catalog();
    let ds = load_dataset(&path).unwrap();
    let pony = ds.records().iter().find(|r| r.title == "My Little Pony").unwrap();
    assert_eq!(pony.year_added, 2021);
    assert_eq!(pony.month_added, Month::September);
}

#[test]
fn test_dropped_rows_absent_from_every_aggregation() {
    let (_dir, path) = write_catalog();
    let ds = load_dataset(&path).unwrap();

    let trend_total: u64 = yearly_trend(ds.records()).iter().map(|p| p.count).sum();
    assert_eq!(trend_total, 5);

    let density = release_density(ds.records());
    assert!(!density.years().contains(&2019));
    let density_total: u64 = density.rows().flat_map(|(_, row)| row).sum();
    assert_eq!(density_total, 5);

    let genres = top_genres(ds.records(), usize::MAX);
    assert!(genres.iter().all(|g| g.label != "Independent Movies" && g.label != "Reality TV"));

    let ratings: u64 = rating_counts(ds.records()).iter().map(|c| c.count).sum();
    assert_eq!(ratings, 5);
}

#[test]
fn test_yearly_trend_over_full_catalog() {
    let (_dir, path) = write_catalog();
    let ds = load_dataset(&path).unwrap();
    assert_eq!(
        yearly_trend(ds.records()),
        vec![
            point(2020, ContentType::Movie, 1),
            point(2021, ContentType::Movie, 2),
            point(2021, ContentType::TvShow, 2),
        ]
    );
}

#[test]
fn test_filter_narrows_titles_not_type_totals() {
    let (_dir, path) = write_catalog();
    let ds = load_dataset(&path).unwrap();
    let shows = filter(&ds, TypeSelection::TvShow);

    let genre_total: u64 = top_genres(shows.iter(), usize::MAX)
        .iter()
        .map(|g| g.count)
        .sum();
    let token_total: usize = shows
        .iter()
        .filter_map(|r| r.listed_in.as_deref())
        .map(|l| genre_tokens(l).count())
        .sum();
    assert_eq!(genre_total as usize, token_total);

    let kpis = KpiSummary::compute(&shows, &ds);
    assert_eq!(kpis.total_titles, 2);
    assert_eq!(kpis.total_movies, 3);
    assert_eq!(kpis.total_tv_shows, 2);
}

#[test]
fn test_full_catalog_category_counts() {
    let (_dir, path) = write_catalog();
    let ds = load_dataset(&path).unwrap();

    let genres = top_genres(ds.records(), TOP_N);
    assert_eq!(genres[0].label, "International TV Shows");
    assert_eq!(genres[0].count, 2);
    assert!(genres.iter().any(|g| g.label == "Documentaries"));

    let countries = top_countries(ds.records(), TOP_N);
    assert_eq!(countries[0].label, UNKNOWN_COUNTRY);
    assert_eq!(countries[0].count, 2);
    assert_eq!(countries.len(), 4);
}

#[test]
fn test_ratings_ordered_by_frequency() {
    let (_dir, path) = write_catalog();
    let ds = load_dataset(&path).unwrap();
    let ratings = rating_counts(ds.records());
    assert_eq!(ratings[0].label, "TV-MA");
    assert_eq!(ratings[0].count, 2);
    assert!(ratings.windows(2).all(|w| w[0].count >= w[1].count));
}

#[test]
fn test_missing_source_through_cache() {
    let dir = tempfile::tempdir().unwrap();
    let cache = DatasetCache::new(dir.path().join("netflix_titles.csv"));
    let err = cache.get_or_load().unwrap_err();
    assert!(matches!(err, Error::DataSourceNotFound { .. }));
    assert_eq!(err.missing_file_name().as_deref(), Some("netflix_titles.csv"));
}
