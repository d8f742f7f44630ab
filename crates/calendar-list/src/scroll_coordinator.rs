//! Scroll position arithmetic for the month window.
//!
//! Every month row has the same size along the scroll axis, so a month's
//! position is its row index times that size. Day targets in a vertical list
//! are refined down to the week row that holds the day.

use calendar_dates::{truncate_to_month, week_index, CalendarMonth, NaiveDate};

use crate::axis::Axis;
use crate::host::ScrollableWindow;
use crate::item_provider::ItemLayout;
use crate::row_model::WindowState;
use crate::spec::CalendarListSpec;

/// Height of one week row inside a vertical month view.
pub const WEEK_ROW_HEIGHT: f32 = 46.0;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScrollCoordinator {
    axis: Axis,
    unit_size: f32,
    first_day: u32,
}

impl ScrollCoordinator {
    pub fn new(axis: Axis, unit_size: f32, first_day: u32) -> Self {
        Self {
            axis,
            unit_size,
            first_day,
        }
    }

    pub fn from_spec(spec: &CalendarListSpec) -> Self {
        Self::new(spec.axis(), spec.unit_size(), spec.first_day)
    }

    #[inline]
    pub fn axis(&self) -> Axis {
        self.axis
    }

    #[inline]
    pub fn unit_size(&self) -> f32 {
        self.unit_size
    }

    /// Start of row `index` along the scroll axis. Negative indices give
    /// negative offsets.
    #[inline]
    pub fn offset_for_index(&self, index: isize) -> f32 {
        self.unit_size * index as f32
    }

    /// Extra distance from the top of `day`'s month to the week row holding
    /// it. Always zero for horizontal lists, which page whole months.
    pub fn week_correction(&self, day: NaiveDate) -> f32 {
        if self.axis.is_horizontal() {
            return 0.0;
        }
        WEEK_ROW_HEIGHT * week_index(day, self.first_day) as f32
    }

    pub fn item_layout(&self, index: usize) -> ItemLayout {
        ItemLayout {
            length: self.unit_size,
            offset: self.offset_for_index(index as isize),
            index,
        }
    }

    /// Offset of the month row holding `month`.
    pub fn month_offset(&self, window: &WindowState, month: CalendarMonth) -> f32 {
        let index = window.month_index(month);
        warn_if_outside(window, index, month);
        self.offset_for_index(index)
    }

    /// Offset of the week row holding `day`, plus `extra_offset`.
    pub fn day_offset(&self, window: &WindowState, day: NaiveDate, extra_offset: f32) -> f32 {
        let month = CalendarMonth::new(truncate_to_month(day));
        self.month_offset(window, month) + self.week_correction(day) + extra_offset
    }

    /// Jumps to `month`, or to the anchor month when `None`. Returns the
    /// offset sent to the host.
    pub fn scroll_to_month<W>(
        &self,
        window: &WindowState,
        host: &mut W,
        month: Option<CalendarMonth>,
    ) -> f32
    where
        W: ScrollableWindow + ?Sized,
    {
        let target = month.unwrap_or_else(|| window.anchor());
        let offset = self.month_offset(window, target);
        log::debug!("Scrolling to month {target} at offset {offset}");
        host.scroll_to_offset(offset, false);
        offset
    }

    /// Scrolls to the week row holding `day`. Returns the offset sent to the
    /// host.
    pub fn scroll_to_day<W>(
        &self,
        window: &WindowState,
        host: &mut W,
        day: NaiveDate,
        extra_offset: f32,
        animated: bool,
    ) -> f32
    where
        W: ScrollableWindow + ?Sized,
    {
        let offset = self.day_offset(window, day, extra_offset);
        log::debug!("Scrolling to day {day} at offset {offset} (animated: {animated})");
        host.scroll_to_offset(offset, animated);
        offset
    }
}

fn warn_if_outside(window: &WindowState, index: isize, month: CalendarMonth) {
    if !window.contains_index(index) {
        log::warn!(
            "Month {month} maps to row {index}, outside the window of {} rows",
            window.len()
        );
    }
}
