//! Change detection for the windowed list.
//!
//! Parents re-render far more often than anything the month list shows
//! changes. [`should_rerender`] lets only meaningful changes through and names
//! the first one it finds.

use std::fmt;
use std::rc::Rc;

use calendar_dates::{CalendarMonth, NaiveDate};

use crate::props::CalendarProps;

/// Controller state the gate looks at.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GateState {
    pub current_month: CalendarMonth,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum UpdateReason {
    Selected,
    MarkedDates,
    HideExtraDays,
    MinDate,
    MaxDate,
    Current,
    CurrentMonth,
    InitialPosition,
    DisableLeftArrow,
    DisableRightArrow,
    DisabledByDefault,
}

impl UpdateReason {
    /// Name of the input that changed.
    ///
    /// A moved `current_month` reports as `current`, like a moved `current`
    /// prop: both mean a different month is on screen.
    pub fn field_name(self) -> &'static str {
        match self {
            UpdateReason::Selected => "selected",
            UpdateReason::MarkedDates => "markedDates",
            UpdateReason::HideExtraDays => "hideExtraDays",
            UpdateReason::MinDate => "minDate",
            UpdateReason::MaxDate => "maxDate",
            UpdateReason::Current | UpdateReason::CurrentMonth => "current",
            UpdateReason::InitialPosition => "initialPosition",
            UpdateReason::DisableLeftArrow => "disableLeftArrow",
            UpdateReason::DisableRightArrow => "disableRightArrow",
            UpdateReason::DisabledByDefault => "disabledByDefault",
        }
    }
}

impl fmt::Display for UpdateReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.field_name())
    }
}

/// Returns the first meaningful change between two render passes, or `None`
/// when the list can keep its previous output.
pub fn should_rerender(
    prev_props: &CalendarProps,
    next_props: &CalendarProps,
    prev_state: &GateState,
    next_state: &GateState,
) -> Option<UpdateReason> {
    if selection_changed(&prev_props.selected, &next_props.selected) {
        return Some(UpdateReason::Selected);
    }

    let marked_changed = match (&prev_props.marked_dates, &next_props.marked_dates) {
        (Some(prev), Some(next)) => !Rc::ptr_eq(prev, next),
        (None, None) => false,
        _ => true,
    };
    if marked_changed {
        return Some(UpdateReason::MarkedDates);
    }
    if prev_props.hide_extra_days != next_props.hide_extra_days {
        return Some(UpdateReason::HideExtraDays);
    }

    let dated = [
        (prev_props.min_date, next_props.min_date, UpdateReason::MinDate),
        (prev_props.max_date, next_props.max_date, UpdateReason::MaxDate),
        (prev_props.current, next_props.current, UpdateReason::Current),
    ];
    for (prev, next, reason) in dated {
        if day_changed(prev, next) {
            return Some(reason);
        }
    }

    if prev_state.current_month != next_state.current_month {
        return Some(UpdateReason::CurrentMonth);
    }

    let flags = [
        (
            prev_props.initial_position != next_props.initial_position,
            UpdateReason::InitialPosition,
        ),
        (
            prev_props.disable_left_arrow != next_props.disable_left_arrow,
            UpdateReason::DisableLeftArrow,
        ),
        (
            prev_props.disable_right_arrow != next_props.disable_right_arrow,
            UpdateReason::DisableRightArrow,
        ),
        (
            prev_props.disabled_by_default != next_props.disabled_by_default,
            UpdateReason::DisabledByDefault,
        ),
    ];
    flags
        .into_iter()
        .find_map(|(changed, reason)| changed.then_some(reason))
}

/// Position-wise comparison by day. An entry present on one side only is a
/// change.
fn selection_changed(prev: &[NaiveDate], next: &[NaiveDate]) -> bool {
    prev.len() != next.len() || prev.iter().zip(next).any(|(a, b)| a != b)
}

fn day_changed(prev: Option<NaiveDate>, next: Option<NaiveDate>) -> bool {
    prev != next
}
