//! Sort State and Comparator
//!
//! Stable multi-type sort over a single active column.

use super::column::{SortColumn, TableRow};
use super::value::FieldValue;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

/// Sort direction of the active column
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SortDirection {
    #[serde(rename = "asc")]
    Ascending,
    #[serde(rename = "desc")]
    Descending,
    #[default]
    #[serde(rename = "")]
    None,
}

impl SortDirection {
    pub fn as_str(self) -> &'static str {
        match self {
            SortDirection::Ascending => "asc",
            SortDirection::Descending => "desc",
            SortDirection::None => "",
        }
    }

    fn apply(self, ordering: Ordering) -> Ordering {
        match self {
            SortDirection::Descending => ordering.reverse(),
            _ => ordering,
        }
    }
}

impl fmt::Display for SortDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SortDirection {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "asc" | "ascending" => Ok(SortDirection::Ascending),
            "desc" | "descending" => Ok(SortDirection::Descending),
            "" | "none" => Ok(SortDirection::None),
            other => Err(format!("unknown sort direction '{other}'")),
        }
    }
}

/// Active column and direction
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SortState {
    pub active: Option<String>,
    pub direction: SortDirection,
}

impl SortState {
    pub fn new(active: impl Into<String>, direction: SortDirection) -> Self {
        Self {
            active: Some(active.into()),
            direction,
        }
    }

    pub fn ascending(active: impl Into<String>) -> Self {
        Self::new(active, SortDirection::Ascending)
    }

    pub fn descending(active: impl Into<String>) -> Self {
        Self::new(active, SortDirection::Descending)
    }

    /// No active sort
    pub fn none() -> Self {
        Self::default()
    }

    /// The column to sort by, if sorting applies to rows with columns `C`
    pub fn column<C: SortColumn>(&self) -> Option<C> {
        if self.direction == SortDirection::None {
            return None;
        }
        self.active.as_deref().and_then(C::from_id)
    }
}

/// Sort `rows` by `state`.
///
/// Inactive, unknown or directionless sorts leave the order untouched. Equal
/// keys keep their relative order in both directions.
pub fn sort_rows<R: TableRow>(rows: Vec<R>, state: &SortState) -> Vec<R> {
    let Some(column) = state.column::<R::Column>() else {
        let directed = state.direction != SortDirection::None;
        if let (Some(active), true) = (state.active.as_deref(), directed) {
            tracing::debug!(column = active, "Ignoring sort on unknown column");
        }
        return rows;
    };

    let direction = state.direction;
    let mut keyed: Vec<(FieldValue, R)> = rows
        .into_iter()
        .map(|row| (row.sort_key(column), row))
        .collect();
    keyed.sort_by(|(a, _), (b, _)| direction.apply(a.compare(b)));
    keyed.into_iter().map(|(_, row)| row).collect()
}
