//! Field Values
//!
//! Typed cell values extracted from rows for filtering and sorting.

use std::cmp::Ordering;
use std::fmt;

/// A single cell value as seen by the filter and the comparator
#[derive(Clone, Debug, Default, PartialEq)]
pub enum FieldValue {
    /// Missing or undefined value
    #[default]
    Empty,
    Text(String),
    Number(f64),
    Bool(bool),
    /// Nested sequence (e.g. a product's categories)
    List(Vec<FieldValue>),
}

impl FieldValue {
    /// Build a list value from anything yielding string-like items
    pub fn list<I, S>(items: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<FieldValue>,
    {
        FieldValue::List(items.into_iter().map(Into::into).collect())
    }

    /// First element of a list, or `Empty` for an empty list or a non-list
    pub fn first(&self) -> FieldValue {
        match self {
            FieldValue::List(items) => items.first().cloned().unwrap_or_default(),
            _ => FieldValue::Empty,
        }
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, FieldValue::Empty)
    }

    /// Numeric coercion used by the comparator.
    ///
    /// Numbers pass through (NaN does not), booleans become 1/0, and text
    /// coerces when it parses as a number after trimming. Blank text is 0.
    pub fn as_number(&self) -> Option<f64> {
        match self {
            FieldValue::Number(n) if !n.is_nan() => Some(*n),
            FieldValue::Bool(b) => Some(if *b { 1.0 } else { 0.0 }),
            FieldValue::Text(s) => {
                let trimmed = s.trim();
                if trimmed.is_empty() {
                    return Some(0.0);
                }
                trimmed.parse::<f64>().ok().filter(|n| !n.is_nan())
            }
            _ => None,
        }
    }

    /// Case-insensitive substring match against an already-lowercased needle.
    ///
    /// Only text (and text nested in lists) is searchable.
    pub fn contains_text(&self, needle: &str) -> bool {
        match self {
            FieldValue::Text(s) => s.to_lowercase().contains(needle),
            FieldValue::List(items) => items.iter().any(|item| item.contains_text(needle)),
            _ => false,
        }
    }

    /// Total order used for sorting.
    ///
    /// Empty values come first, then everything that coerces to a number
    /// (compared numerically), then the rest by display string, so
    /// `"9" < "10" < "10a"`.
    pub fn compare(&self, other: &Self) -> Ordering {
        match (self.sort_class(), other.sort_class()) {
            (SortClass::Number(a), SortClass::Number(b)) => a.total_cmp(&b),
            (SortClass::Text(a), SortClass::Text(b)) => a.cmp(&b),
            (a, b) => a.rank().cmp(&b.rank()),
        }
    }

    fn sort_class(&self) -> SortClass {
        if self.is_empty() {
            return SortClass::Empty;
        }
        match self.as_number() {
            // -0.0 and 0.0 must compare equal under `total_cmp`
            Some(n) => SortClass::Number(n + 0.0),
            None => SortClass::Text(self.to_string()),
        }
    }
}

enum SortClass {
    Empty,
    Number(f64),
    Text(String),
}

impl SortClass {
    fn rank(&self) -> u8 {
        match self {
            SortClass::Empty => 0,
            SortClass::Number(_) => 1,
            SortClass::Text(_) => 2,
        }
    }
}

impl fmt::Display for FieldValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldValue::Empty => Ok(()),
            FieldValue::Text(s) => f.write_str(s),
            FieldValue::Number(n) if n.fract() == 0.0 && n.abs() < 1e15 => {
                write!(f, "{}", *n as i64)
            }
            FieldValue::Number(n) => write!(f, "{n}"),
            FieldValue::Bool(b) => write!(f, "{b}"),
            FieldValue::List(items) => {
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        f.write_str(",")?;
                    }
                    write!(f, "{item}")?;
                }
                Ok(())
            }
        }
    }
}

impl From<&str> for FieldValue {
    fn from(value: &str) -> Self {
        FieldValue::Text(value.to_string())
    }
}

impl From<String> for FieldValue {
    fn from(value: String) -> Self {
        FieldValue::Text(value)
    }
}

impl From<&String> for FieldValue {
    fn from(value: &String) -> Self {
        FieldValue::Text(value.clone())
    }
}

impl From<f64> for FieldValue {
    fn from(value: f64) -> Self {
        FieldValue::Number(value)
    }
}

impl From<u32> for FieldValue {
    fn from(value: u32) -> Self {
        FieldValue::Number(f64::from(value))
    }
}

impl From<i64> for FieldValue {
    fn from(value: i64) -> Self {
        FieldValue::Number(value as f64)
    }
}

impl From<bool> for FieldValue {
    fn from(value: bool) -> Self {
        FieldValue::Bool(value)
    }
}

impl<T: Into<FieldValue>> From<Option<T>> for FieldValue {
    fn from(value: Option<T>) -> Self {
        value.map_or(FieldValue::Empty, Into::into)
    }
}
