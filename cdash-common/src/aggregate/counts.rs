//! Categorical frequency counts (genres, countries, ratings)

use serde::Serialize;
use std::collections::HashMap;
use std::hash::Hash;

use crate::catalog::Record;

/// Number of bars kept by the genre and country charts
pub const TOP_N: usize = 10;

/// One bar of a categorical chart
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CategoryCount {
    pub label: String,
    pub count: u64,
}

/// Count occurrences of each key.
///
/// Sorted by descending count; equal counts keep the order in which
/// each key was first seen.
pub fn value_counts<K, I>(keys: I) -> Vec<(K, u64)>
where
    K: Eq + Hash + Clone,
    I: IntoIterator<Item = K>,
{
    let mut position: HashMap<K, usize> = HashMap::new();
    let mut tallies: Vec<(K, u64)> = Vec::new();

    for key in keys {
        match position.get(&key) {
            Some(&i) => tallies[i].1 += 1,
            None => {
                position.insert(key.clone(), tallies.len());
                tallies.push((key, 1));
            }
        }
    }

    // Stable: ties stay in encounter order
    tallies.sort_by(|a, b| b.1.cmp(&a.1));
    tallies
}

/// [`value_counts`] truncated to the `n` most frequent keys
pub fn top_n<K, I>(keys: I, n: usize) -> Vec<(K, u64)>
where
    K: Eq + Hash + Clone,
    I: IntoIterator<Item = K>,
{
    let mut counts = value_counts(keys);
    counts.truncate(n);
    counts
}

/// Separator between genres in a `listed_in` cell
pub const GENRE_SEPARATOR: &str = ", ";

/// Genre tokens of a `listed_in` cell, split on `", "` and kept verbatim.
///
/// A bare comma does not separate genres. Empty tokens are skipped.
pub fn genre_tokens(listed_in: &str) -> impl Iterator<Item = &str> {
    listed_in.split(GENRE_SEPARATOR).filter(|g| !g.is_empty())
}

fn labelled(counts: Vec<(&str, u64)>) -> Vec<CategoryCount> {
    counts
        .into_iter()
        .map(|(label, count)| CategoryCount {
            label: label.to_string(),
            count,
        })
        .collect()
}

/// Most frequent genres, each listed genre of a title counting once
pub fn top_genres<'a, I>(records: I, n: usize) -> Vec<CategoryCount>
where
    I: IntoIterator<Item = &'a Record>,
{
    let tokens = records
        .into_iter()
        .filter_map(|r| r.listed_in.as_deref())
        .flat_map(|listed_in| genre_tokens(listed_in));
    labelled(top_n(tokens, n))
}

/// Most frequent `country` values, taken as whole strings
pub fn top_countries<'a, I>(records: I, n: usize) -> Vec<CategoryCount>
where
    I: IntoIterator<Item = &'a Record>,
{
    labelled(top_n(records.into_iter().map(|r| r.country.as_str()), n))
}

/// Every rating with its count, most frequent first
pub fn rating_counts<'a, I>(records: I) -> Vec<CategoryCount>
where
    I: IntoIterator<Item = &'a Record>,
{
    labelled(value_counts(records.into_iter().map(|r| r.rating.as_str())))
}
