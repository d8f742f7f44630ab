//! Recording fakes for the host list and the outward listeners.

use std::cell::RefCell;
use std::rc::Rc;

use calendar_dates::DateData;
use calendar_list::{CalendarList, ScrollableWindow};

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScrollCommand {
    pub offset: f32,
    pub animated: bool,
}

/// Host list that remembers every scroll command it receives.
#[derive(Debug, Default)]
pub struct RecordingWindow {
    commands: Vec<ScrollCommand>,
}

impl RecordingWindow {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn commands(&self) -> &[ScrollCommand] {
        &self.commands
    }

    pub fn last_command(&self) -> Option<ScrollCommand> {
        self.commands.last().copied()
    }

    pub fn command_count(&self) -> usize {
        self.commands.len()
    }
}

impl ScrollableWindow for RecordingWindow {
    fn scroll_to_offset(&mut self, offset: f32, animated: bool) {
        self.commands.push(ScrollCommand { offset, animated });
    }
}

#[derive(Debug, Default)]
struct Notifications {
    month_changes: Vec<DateData>,
    visible_months: Vec<Vec<DateData>>,
}

/// Collects everything a calendar list announces.
///
/// Cloning shares the same log, so one clone can be attached to the list
/// while another is inspected by the test.
#[derive(Clone, Debug, Default)]
pub struct NotificationLog {
    inner: Rc<RefCell<Notifications>>,
}

impl NotificationLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Installs this log as the list's month and visible-months listeners.
    pub fn attach<W: ScrollableWindow>(&self, list: &mut CalendarList<W>) {
        let months = Rc::clone(&self.inner);
        list.set_on_month_change(move |data| months.borrow_mut().month_changes.push(data));
        let visible = Rc::clone(&self.inner);
        list.set_on_visible_months_change(move |data| {
            visible.borrow_mut().visible_months.push(data)
        });
    }

    pub fn month_changes(&self) -> Vec<DateData> {
        self.inner.borrow().month_changes.clone()
    }

    pub fn visible_months(&self) -> Vec<Vec<DateData>> {
        self.inner.borrow().visible_months.clone()
    }

    /// `yyyy-MM-dd` of every announced month change, in order.
    pub fn month_change_strings(&self) -> Vec<String> {
        self.inner
            .borrow()
            .month_changes
            .iter()
            .map(|data| data.date_string.clone())
            .collect()
    }
}
