//! Robot-style driver for end-to-end calendar list tests.
//!
//! The robot plays the host list: it applies scroll commands, lets the user
//! drag, and reports visible rows back the way a real list does once a
//! scroll settles.
//!
//! # Example
//!
//! ```
//! use calendar_list::{CalendarListSpec, CalendarProps};
//! use calendar_list_testing::{ymd, CalendarRobot};
//!
//! let mut robot = CalendarRobot::new(
//!     CalendarListSpec::new().past_scroll_range(6).future_scroll_range(6),
//!     CalendarProps::new().current(ymd(2024, 3, 1)),
//!     360.0,
//! )
//! .unwrap();
//! robot.mount();
//! robot.drag_by(360.0);
//! assert_eq!(robot.list().current_month().month(), 4);
//! ```

use calendar_list::{
    CalendarList, CalendarListSpec, CalendarProps, ConfigError, RenderDecision, WindowItemProvider,
};

use crate::recording::{NotificationLog, RecordingWindow};
use crate::viewport::ViewportSimulator;

pub struct CalendarRobot {
    list: CalendarList<RecordingWindow>,
    viewport: ViewportSimulator,
    log: NotificationLog,
    position: f32,
    applied_commands: usize,
    render_count: usize,
}

impl CalendarRobot {
    /// Creates the list with a viewport of `viewport_size` along the scroll
    /// axis, positioned on the initial scroll index.
    pub fn new(
        spec: CalendarListSpec,
        props: CalendarProps,
        viewport_size: f32,
    ) -> Result<Self, ConfigError> {
        let mut list = CalendarList::new(spec, props, RecordingWindow::new())?;
        let log = NotificationLog::new();
        log.attach(&mut list);

        let descriptor = list.descriptor();
        let viewport = ViewportSimulator::new(
            viewport_size,
            list.coordinator().unit_size(),
            descriptor.item_count,
            descriptor.item_visible_percent_threshold,
        );
        let position = list.item_layout(descriptor.initial_scroll_index).offset;

        Ok(Self {
            list,
            viewport,
            log,
            position,
            applied_commands: 0,
            render_count: 0,
        })
    }

    /// First visibility report, as a host sends right after mounting.
    pub fn mount(&mut self) -> RenderDecision {
        self.report_visible()
    }

    /// Applies the latest scroll command, if any arrived, then reports the
    /// rows now on screen.
    pub fn settle(&mut self) -> RenderDecision {
        let commands = self.list.host().commands();
        if commands.len() > self.applied_commands {
            if let Some(command) = commands.last() {
                self.position = command.offset.clamp(0.0, self.viewport.max_offset());
            }
            self.applied_commands = commands.len();
        }
        self.report_visible()
    }

    /// User scroll to an absolute offset.
    pub fn drag_to(&mut self, offset: f32) -> RenderDecision {
        self.position = offset.clamp(0.0, self.viewport.max_offset());
        self.report_visible()
    }

    pub fn drag_by(&mut self, delta: f32) -> RenderDecision {
        self.drag_to(self.position + delta)
    }

    pub fn set_props(&mut self, props: CalendarProps) -> RenderDecision {
        let decision = self.list.set_props(props);
        self.count(decision)
    }

    pub fn visible_indices(&self) -> Vec<usize> {
        self.viewport.visible_indices(self.position)
    }

    pub fn position(&self) -> f32 {
        self.position
    }

    pub fn render_count(&self) -> usize {
        self.render_count
    }

    pub fn scroll_command_count(&self) -> usize {
        self.list.host().command_count()
    }

    pub fn list(&self) -> &CalendarList<RecordingWindow> {
        &self.list
    }

    pub fn list_mut(&mut self) -> &mut CalendarList<RecordingWindow> {
        &mut self.list
    }

    pub fn log(&self) -> &NotificationLog {
        &self.log
    }

    fn report_visible(&mut self) -> RenderDecision {
        let visible = self.visible_indices();
        let decision = self.list.on_viewable_items_changed(&visible);
        self.count(decision)
    }

    fn count(&mut self, decision: RenderDecision) -> RenderDecision {
        if decision.rerender() {
            self.render_count += 1;
        }
        decision
    }
}
