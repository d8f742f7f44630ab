//! Per-render inputs of the calendar list.
//!
//! Unlike [`CalendarListSpec`](crate::CalendarListSpec) these may change on
//! every parent render; [`should_rerender`](crate::should_rerender) decides
//! which changes matter.

use std::collections::BTreeMap;
use std::rc::Rc;

use calendar_dates::NaiveDate;

/// Per-day marking flags forwarded untouched to the month renderer.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Marking {
    pub marked: bool,
    pub selected: bool,
    pub disabled: bool,
    pub disable_touch_event: bool,
}

/// Marked days. Shared by reference; a new map means new markings.
pub type MarkedDates = Rc<BTreeMap<NaiveDate, Marking>>;

/// Starting position of an expandable container hosting the list.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum InitialPosition {
    Closed,
    Open,
}

#[derive(Clone, Debug, Default)]
pub struct CalendarProps {
    pub selected: Vec<NaiveDate>,
    pub marked_dates: Option<MarkedDates>,
    pub hide_extra_days: bool,
    pub min_date: Option<NaiveDate>,
    pub max_date: Option<NaiveDate>,
    /// Month to show; moving it scrolls the list.
    pub current: Option<NaiveDate>,
    pub initial_position: Option<InitialPosition>,
    pub disable_left_arrow: bool,
    pub disable_right_arrow: bool,
    pub disabled_by_default: bool,
}

impl CalendarProps {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn current(mut self, date: NaiveDate) -> Self {
        self.current = Some(date);
        self
    }

    pub fn selected(mut self, dates: impl IntoIterator<Item = NaiveDate>) -> Self {
        self.selected = dates.into_iter().collect();
        self
    }

    pub fn marked_dates(mut self, marked: MarkedDates) -> Self {
        self.marked_dates = Some(marked);
        self
    }

    pub fn hide_extra_days(mut self, hide: bool) -> Self {
        self.hide_extra_days = hide;
        self
    }

    pub fn min_date(mut self, date: NaiveDate) -> Self {
        self.min_date = Some(date);
        self
    }

    pub fn max_date(mut self, date: NaiveDate) -> Self {
        self.max_date = Some(date);
        self
    }

    pub fn initial_position(mut self, position: InitialPosition) -> Self {
        self.initial_position = Some(position);
        self
    }

    pub fn disable_left_arrow(mut self, disabled: bool) -> Self {
        self.disable_left_arrow = disabled;
        self
    }

    pub fn disable_right_arrow(mut self, disabled: bool) -> Self {
        self.disable_right_arrow = disabled;
        self
    }

    pub fn disabled_by_default(mut self, disabled: bool) -> Self {
        self.disabled_by_default = disabled;
        self
    }
}
