//! Mount-time configuration of a calendar list.

use std::fmt;
use std::rc::Rc;

use crate::axis::Axis;
use crate::row::Row;

pub const DEFAULT_SCROLL_RANGE: usize = 50;
pub const DEFAULT_CALENDAR_WIDTH: f32 = 360.0;
pub const DEFAULT_CALENDAR_HEIGHT: f32 = 360.0;
/// Percentage of a row that must be on screen for the host to report it.
pub const DEFAULT_ITEM_VISIBLE_PERCENT_THRESHOLD: u8 = 20;

/// Produces the stable key of a row from the row and its index.
pub type KeyExtractor = Rc<dyn Fn(&Row, usize) -> String>;

/// Specification for the calendar list window and its host list.
///
/// Changing `past_scroll_range`, `future_scroll_range` or the calendar size
/// requires building a new [`CalendarList`](crate::CalendarList).
#[derive(Clone)]
pub struct CalendarListSpec {
    pub past_scroll_range: usize,
    pub future_scroll_range: usize,
    pub horizontal: bool,
    pub calendar_width: f32,
    pub calendar_height: f32,
    /// First weekday of a week row, 0 = Sunday .. 6 = Saturday.
    pub first_day: u32,
    pub paging_enabled: bool,
    pub scroll_enabled: bool,
    pub show_scroll_indicator: bool,
    pub scrolls_to_top: bool,
    /// Sticky month header; only honored for horizontal lists.
    pub static_header: bool,
    pub title_text: Option<String>,
    pub item_visible_percent_threshold: u8,
    pub key_extractor: KeyExtractor,
}

impl CalendarListSpec {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn past_scroll_range(mut self, months: usize) -> Self {
        self.past_scroll_range = months;
        self
    }

    pub fn future_scroll_range(mut self, months: usize) -> Self {
        self.future_scroll_range = months;
        self
    }

    pub fn horizontal(mut self, horizontal: bool) -> Self {
        self.horizontal = horizontal;
        self
    }

    pub fn calendar_width(mut self, width: f32) -> Self {
        self.calendar_width = width;
        self
    }

    pub fn calendar_height(mut self, height: f32) -> Self {
        self.calendar_height = height;
        self
    }

    pub fn first_day(mut self, first_day: u32) -> Self {
        self.first_day = first_day;
        self
    }

    pub fn paging_enabled(mut self, enabled: bool) -> Self {
        self.paging_enabled = enabled;
        self
    }

    pub fn scroll_enabled(mut self, enabled: bool) -> Self {
        self.scroll_enabled = enabled;
        self
    }

    pub fn show_scroll_indicator(mut self, show: bool) -> Self {
        self.show_scroll_indicator = show;
        self
    }

    pub fn scrolls_to_top(mut self, enabled: bool) -> Self {
        self.scrolls_to_top = enabled;
        self
    }

    pub fn static_header(mut self, enabled: bool) -> Self {
        self.static_header = enabled;
        self
    }

    pub fn title_text(mut self, title: impl Into<String>) -> Self {
        self.title_text = Some(title.into());
        self
    }

    pub fn item_visible_percent_threshold(mut self, percent: u8) -> Self {
        self.item_visible_percent_threshold = percent;
        self
    }

    pub fn key_extractor(mut self, extractor: impl Fn(&Row, usize) -> String + 'static) -> Self {
        self.key_extractor = Rc::new(extractor);
        self
    }

    #[inline]
    pub fn axis(&self) -> Axis {
        Axis::from_horizontal(self.horizontal)
    }

    /// Size of one month row along the scroll axis.
    #[inline]
    pub fn unit_size(&self) -> f32 {
        self.axis()
            .main_axis_size(self.calendar_width, self.calendar_height)
    }

    pub fn row_count(&self) -> usize {
        self.past_scroll_range + self.future_scroll_range + 1
    }

    /// Checks the values the window arithmetic depends on.
    pub fn validate(&self) -> Result<(), ConfigError> {
        check_size("calendar_width", self.calendar_width)?;
        check_size("calendar_height", self.calendar_height)?;
        if self.first_day > 6 {
            return Err(ConfigError::InvalidFirstDay {
                value: self.first_day,
            });
        }
        if self.item_visible_percent_threshold > 100 {
            return Err(ConfigError::InvalidVisibleThreshold {
                value: self.item_visible_percent_threshold,
            });
        }
        Ok(())
    }
}

fn check_size(field: &'static str, value: f32) -> Result<(), ConfigError> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(ConfigError::InvalidSize { field, value })
    }
}

impl Default for CalendarListSpec {
    fn default() -> Self {
        Self {
            past_scroll_range: DEFAULT_SCROLL_RANGE,
            future_scroll_range: DEFAULT_SCROLL_RANGE,
            horizontal: false,
            calendar_width: DEFAULT_CALENDAR_WIDTH,
            calendar_height: DEFAULT_CALENDAR_HEIGHT,
            first_day: 0,
            paging_enabled: false,
            scroll_enabled: true,
            show_scroll_indicator: false,
            scrolls_to_top: false,
            static_header: false,
            title_text: None,
            item_visible_percent_threshold: DEFAULT_ITEM_VISIBLE_PERCENT_THRESHOLD,
            key_extractor: Rc::new(|_, index| index.to_string()),
        }
    }
}

impl fmt::Debug for CalendarListSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CalendarListSpec")
            .field("past_scroll_range", &self.past_scroll_range)
            .field("future_scroll_range", &self.future_scroll_range)
            .field("horizontal", &self.horizontal)
            .field("calendar_width", &self.calendar_width)
            .field("calendar_height", &self.calendar_height)
            .field("first_day", &self.first_day)
            .field("paging_enabled", &self.paging_enabled)
            .field("scroll_enabled", &self.scroll_enabled)
            .field("show_scroll_indicator", &self.show_scroll_indicator)
            .field("scrolls_to_top", &self.scrolls_to_top)
            .field("static_header", &self.static_header)
            .field("title_text", &self.title_text)
            .field(
                "item_visible_percent_threshold",
                &self.item_visible_percent_threshold,
            )
            .finish_non_exhaustive()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum ConfigError {
    InvalidSize { field: &'static str, value: f32 },
    InvalidFirstDay { value: u32 },
    InvalidVisibleThreshold { value: u8 },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::InvalidSize { field, value } => {
                write!(f, "{field} must be a positive finite size, got {value}")
            }
            ConfigError::InvalidFirstDay { value } => {
                write!(f, "first_day must be in 0..=6, got {value}")
            }
            ConfigError::InvalidVisibleThreshold { value } => {
                write!(f, "item visibility threshold must be a percentage, got {value}")
            }
        }
    }
}

impl std::error::Error for ConfigError {}
