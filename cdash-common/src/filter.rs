//! Content type filter
//!
//! Produces a borrowed view over the dataset; the dataset itself is never touched.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::catalog::{ContentType, Dataset, Record};

/// Sidebar selection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum TypeSelection {
    #[default]
    All,
    Movie,
    #[serde(rename = "TV Show")]
    TvShow,
}

impl TypeSelection {
    /// Options in the order the radio control shows them
    pub const ALL_OPTIONS: [TypeSelection; 3] =
        [TypeSelection::All, TypeSelection::Movie, TypeSelection::TvShow];

    pub fn as_str(self) -> &'static str {
        match self {
            TypeSelection::All => "All",
            TypeSelection::Movie => "Movie",
            TypeSelection::TvShow => "TV Show",
        }
    }

    /// Content type this selection keeps, `None` for `All`
    pub fn content_type(self) -> Option<ContentType> {
        match self {
            TypeSelection::All => None,
            TypeSelection::Movie => Some(ContentType::Movie),
            TypeSelection::TvShow => Some(ContentType::TvShow),
        }
    }
}

impl fmt::Display for TypeSelection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Raised only at the input boundary; `filter` itself cannot fail
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown content type selection '{0}' (expected All, Movie or TV Show)")]
pub struct UnknownSelection(pub String);

impl FromStr for TypeSelection {
    type Err = UnknownSelection;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        TypeSelection::ALL_OPTIONS
            .into_iter()
            .find(|opt| opt.as_str() == s)
            .ok_or_else(|| UnknownSelection(s.to_string()))
    }
}

/// Working subset produced by [`filter`]
#[derive(Debug, Clone)]
pub enum Subset<'a> {
    /// The whole dataset, borrowed as-is
    Full(&'a [Record]),
    /// Only the records matching a content type
    Selected(Vec<&'a Record>),
}

impl<'a> Subset<'a> {
    pub fn len(&self) -> usize {
        match self {
            Subset::Full(records) => records.len(),
            Subset::Selected(records) => records.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn iter(&self) -> Box<dyn Iterator<Item = &'a Record> + '_> {
        match self {
            Subset::Full(records) => {
                let records: &'a [Record] = *records;
                Box::new(records.iter())
            }
            Subset::Selected(records) => Box::new(records.iter().copied()),
        }
    }
}

/// Narrow `dataset` to the selected content type
pub fn filter(dataset: &Dataset, selection: TypeSelection) -> Subset<'_> {
    match selection.content_type() {
        None => Subset::Full(dataset.records()),
        Some(kind) => Subset::Selected(
            dataset
                .records()
                .iter()
                .filter(|r| r.content_type == kind)
                .collect(),
        ),
    }
}
