//! The fixed window of month rows around an anchor date.
//!
//! Row `i` always stands for `anchor + (i - past_range)` months. Rows are
//! never inserted or removed; they only switch between a materialized month
//! and a placeholder label as the viewport moves.

use std::rc::Rc;

use calendar_dates::{diff_months, CalendarMonth};

use crate::row::Row;

/// Offsets (relative to the anchor) materialized up front.
const EAGER_BAND: std::ops::RangeInclusive<isize> = -1..=1;

/// Eager band used when there is no past range to look back into.
const EAGER_BAND_WITHOUT_PAST: std::ops::RangeInclusive<isize> = 0..=2;

#[derive(Clone, Debug)]
pub struct WindowState {
    anchor: CalendarMonth,
    past_range: usize,
    rows: Vec<Row>,
    /// Placeholder label per index, computed once.
    labels: Vec<Rc<str>>,
    current_month: CalendarMonth,
    /// Number of refresh cycles so far; the version of every materialized row
    /// is at most this value.
    generation: u64,
}

impl WindowState {
    /// Builds the window, materializing only the months next to the anchor.
    pub fn new(anchor: CalendarMonth, past_range: usize, future_range: usize) -> Self {
        let len = past_range + future_range + 1;
        let eager = if past_range == 0 {
            EAGER_BAND_WITHOUT_PAST
        } else {
            EAGER_BAND
        };

        let mut rows = Vec::with_capacity(len);
        let mut labels = Vec::with_capacity(len);
        for index in 0..len {
            let offset = index as isize - past_range as isize;
            let candidate = anchor.add_months(offset as i32);
            let label: Rc<str> = Rc::from(candidate.label());
            if eager.contains(&offset) {
                rows.push(Row::Materialized {
                    month: candidate,
                    version: 0,
                });
            } else {
                rows.push(Row::Placeholder {
                    label: Rc::clone(&label),
                });
            }
            labels.push(label);
        }

        log::debug!(
            "Built month window around {anchor}: {len} rows, {} materialized",
            rows.iter().filter(|row| row.is_materialized()).count()
        );

        Self {
            anchor,
            past_range,
            rows,
            labels,
            current_month: anchor,
            generation: 0,
        }
    }

    #[inline]
    pub fn anchor(&self) -> CalendarMonth {
        self.anchor
    }

    #[inline]
    pub fn past_range(&self) -> usize {
        self.past_range
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    pub fn row(&self, index: usize) -> Option<&Row> {
        self.rows.get(index)
    }

    pub fn label(&self, index: usize) -> Option<&str> {
        self.labels.get(index).map(|label| &**label)
    }

    #[inline]
    pub fn current_month(&self) -> CalendarMonth {
        self.current_month
    }

    pub(crate) fn set_current_month(&mut self, month: CalendarMonth) {
        self.current_month = month;
    }

    #[inline]
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Row index of `month`.
    ///
    /// Months outside the window yield an index outside `0..len()`; callers
    /// decide whether to ignore or clamp it.
    pub fn month_index(&self, month: CalendarMonth) -> isize {
        diff_months(self.anchor.date(), month.date()) as isize + self.past_range as isize
    }

    pub fn contains_index(&self, index: isize) -> bool {
        index >= 0 && (index as usize) < self.rows.len()
    }

    /// The month row `index` stands for, whether or not it is materialized.
    pub fn month_at(&self, index: usize) -> CalendarMonth {
        self.anchor
            .add_months((index as isize - self.past_range as isize) as i32)
    }

    /// Forces every materialized row to look changed to the renderer.
    ///
    /// Placeholder rows keep their label untouched.
    pub fn refresh_versions(&mut self) {
        self.generation += 1;
        let generation = self.generation;
        for row in &mut self.rows {
            if let Row::Materialized { version, .. } = row {
                *version = generation;
            }
        }
    }

    /// Turns a placeholder into its month. Returns `false` if the row was
    /// already materialized or does not exist.
    pub(crate) fn promote(&mut self, index: usize) -> bool {
        let month = self.month_at(index);
        let generation = self.generation;
        match self.rows.get_mut(index) {
            Some(row @ Row::Placeholder { .. }) => {
                *row = Row::Materialized {
                    month,
                    version: generation,
                };
                true
            }
            _ => false,
        }
    }

    /// Turns a materialized row back into its cached label. Returns `false`
    /// if the row was already a placeholder or does not exist.
    pub(crate) fn demote(&mut self, index: usize) -> bool {
        let Some(label) = self.labels.get(index).cloned() else {
            return false;
        };
        match self.rows.get_mut(index) {
            Some(row @ Row::Materialized { .. }) => {
                *row = Row::Placeholder { label };
                true
            }
            _ => false,
        }
    }
}
