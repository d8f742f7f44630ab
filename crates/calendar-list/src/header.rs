use calendar_dates::CalendarMonth;

/// Sticky header shown above a horizontal list.
///
/// It always describes the controller's current month; its arrows map to
/// [`CalendarList::add_month`](crate::CalendarList::add_month) with `-1` / `1`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StaticHeaderModel {
    pub month: CalendarMonth,
    pub title_text: Option<String>,
    pub disable_left_arrow: bool,
    pub disable_right_arrow: bool,
}

/// Header arrow directions.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HeaderArrow {
    Left,
    Right,
}

impl HeaderArrow {
    /// Months to move when the arrow is pressed.
    pub fn month_delta(self) -> i32 {
        match self {
            HeaderArrow::Left => -1,
            HeaderArrow::Right => 1,
        }
    }
}
