/// Direction the month list scrolls in.
///
/// The main axis decides which calendar dimension a row occupies: width for a
/// horizontal pager, height for a vertical list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Axis {
    /// Months laid out left to right.
    Horizontal,

    /// Months laid out top to bottom.
    #[default]
    Vertical,
}

impl Axis {
    #[inline]
    pub fn from_horizontal(horizontal: bool) -> Self {
        if horizontal {
            Axis::Horizontal
        } else {
            Axis::Vertical
        }
    }

    #[inline]
    pub fn is_horizontal(self) -> bool {
        matches!(self, Axis::Horizontal)
    }

    /// Picks the extent along this axis.
    #[inline]
    pub fn main_axis_size(self, width: f32, height: f32) -> f32 {
        match self {
            Axis::Horizontal => width,
            Axis::Vertical => height,
        }
    }
}
