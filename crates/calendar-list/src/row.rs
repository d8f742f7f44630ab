//! Row values handed to the rendering collaborator.

use std::rc::Rc;

use calendar_dates::CalendarMonth;

/// One entry of the month window.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Row {
    /// A month close enough to the viewport to be rendered in full.
    ///
    /// `version` changes whenever the row must be redrawn even though its
    /// month did not change.
    Materialized { month: CalendarMonth, version: u64 },

    /// A far-away month, shown as a cheap text label such as `Mar 2024`.
    Placeholder { label: Rc<str> },
}

impl Row {
    #[inline]
    pub fn is_materialized(&self) -> bool {
        matches!(self, Row::Materialized { .. })
    }

    pub fn month(&self) -> Option<CalendarMonth> {
        match self {
            Row::Materialized { month, .. } => Some(*month),
            Row::Placeholder { .. } => None,
        }
    }

    pub fn version(&self) -> Option<u64> {
        match self {
            Row::Materialized { version, .. } => Some(*version),
            Row::Placeholder { .. } => None,
        }
    }

    pub fn label(&self) -> Option<&str> {
        match self {
            Row::Materialized { .. } => None,
            Row::Placeholder { label } => Some(label),
        }
    }
}

/// Memoization key for a rendered row.
///
/// Equal keys mean the previously rendered output for the row can be reused.
/// The version is part of the key so a refreshed month never matches its
/// stale render.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct RowKey {
    pub index: usize,
    pub key: String,
    pub version: Option<u64>,
}
