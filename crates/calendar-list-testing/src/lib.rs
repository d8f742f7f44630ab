//! Testing utilities and a simulated host list for the calendar list

pub mod fixtures;
pub mod recording;
pub mod robot;
pub mod viewport;

pub use fixtures::*;
pub use recording::{NotificationLog, RecordingWindow, ScrollCommand};
pub use robot::CalendarRobot;
pub use viewport::ViewportSimulator;

pub mod prelude {
    pub use crate::fixtures::*;
    pub use crate::recording::{NotificationLog, RecordingWindow, ScrollCommand};
    pub use crate::robot::CalendarRobot;
    pub use crate::viewport::ViewportSimulator;
}
