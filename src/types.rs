//! Core types for spark-list.
//!
//! Records expose their fields through the [`Record`] trait. Every field read
//! produces a [`FieldValue`], which is what the search stage stringifies and
//! the sort stage compares.

use std::cmp::Ordering;
use std::fmt;
use std::fmt::Debug;

use serde::{Deserialize, Serialize};

// =============================================================================
// FieldValue
// =============================================================================

/// The value of a single record field, as seen by the search and sort stages.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FieldValue {
    /// Missing value. Never matches a search and is unordered against everything.
    #[default]
    Null,
    Bool(bool),
    Int(i64),
    Float(f64),
    Text(String),
}

impl FieldValue {
    /// Check if this value is [`FieldValue::Null`].
    pub fn is_null(&self) -> bool {
        matches!(self, FieldValue::Null)
    }

    /// Case-insensitive substring match.
    ///
    /// `lowered_query` must already be lowercase. Null values never match.
    pub fn matches_query(&self, lowered_query: &str) -> bool {
        match self {
            FieldValue::Null => false,
            FieldValue::Text(s) => s.to_lowercase().contains(lowered_query),
            other => other.to_string().to_lowercase().contains(lowered_query),
        }
    }
}

impl fmt::Display for FieldValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldValue::Null => Ok(()),
            FieldValue::Bool(b) => write!(f, "{}", b),
            FieldValue::Int(i) => write!(f, "{}", i),
            FieldValue::Float(x) => write!(f, "{}", x),
            FieldValue::Text(s) => f.write_str(s),
        }
    }
}

impl PartialOrd for FieldValue {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        use FieldValue::*;
        match (self, other) {
            (Bool(a), Bool(b)) => a.partial_cmp(b),
            (Int(a), Int(b)) => a.partial_cmp(b),
            (Float(a), Float(b)) => a.partial_cmp(b),
            (Int(a), Float(b)) => (*a as f64).partial_cmp(b),
            (Float(a), Int(b)) => a.partial_cmp(&(*b as f64)),
            (Text(a), Text(b)) => a.partial_cmp(b),
            _ => None,
        }
    }
}

impl From<bool> for FieldValue {
    fn from(value: bool) -> Self {
        FieldValue::Bool(value)
    }
}

impl From<i64> for FieldValue {
    fn from(value: i64) -> Self {
        FieldValue::Int(value)
    }
}

impl From<i32> for FieldValue {
    fn from(value: i32) -> Self {
        FieldValue::Int(value as i64)
    }
}

impl From<u32> for FieldValue {
    fn from(value: u32) -> Self {
        FieldValue::Int(value as i64)
    }
}

impl From<f64> for FieldValue {
    fn from(value: f64) -> Self {
        FieldValue::Float(value)
    }
}

impl From<String> for FieldValue {
    fn from(value: String) -> Self {
        FieldValue::Text(value)
    }
}

impl From<&str> for FieldValue {
    fn from(value: &str) -> Self {
        FieldValue::Text(value.to_string())
    }
}

impl<V: Into<FieldValue>> From<Option<V>> for FieldValue {
    fn from(value: Option<V>) -> Self {
        value.map(Into::into).unwrap_or(FieldValue::Null)
    }
}

// =============================================================================
// Record
// =============================================================================

/// A record type that can flow through a list pipeline.
///
/// `Field` is usually a plain enum naming the record's searchable/sortable
/// fields, so a sort or search field that doesn't exist can't be expressed.
///
/// ```ignore
/// #[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// enum ListingField { Title, Price }
///
/// impl Record for Listing {
///     type Field = ListingField;
///
///     fn field(&self, field: ListingField) -> FieldValue {
///         match field {
///             ListingField::Title => self.title.as_str().into(),
///             ListingField::Price => self.price.into(),
///         }
///     }
/// }
/// ```
pub trait Record {
    type Field: Copy + Eq + Debug + 'static;

    /// Read one field.
    fn field(&self, field: Self::Field) -> FieldValue;
}

// =============================================================================
// SortDirection
// =============================================================================

/// Sort direction.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    #[default]
    Asc,
    Desc,
}

impl SortDirection {
    /// The opposite direction.
    pub fn toggled(self) -> Self {
        match self {
            SortDirection::Asc => SortDirection::Desc,
            SortDirection::Desc => SortDirection::Asc,
        }
    }

    /// Apply this direction to an ascending comparison result.
    pub fn apply(self, ordering: Ordering) -> Ordering {
        match self {
            SortDirection::Asc => ordering,
            SortDirection::Desc => ordering.reverse(),
        }
    }
}

// =============================================================================
// Tests
// =============================================================================
