//! The calendar list controller.
//!
//! [`CalendarList`] owns the month window and keeps it in sync with the host
//! list through two independent channels:
//!
//! - **Programmatic**: a new `current` prop, `scroll_to_*`, or the header
//!   arrows. These compute a row offset and send a scroll command.
//! - **Observed**: the host reports which rows are on screen. This
//!   materializes nearby rows and derives the current month.
//!
//! The observed channel never sends scroll commands, and a month that was
//! just requested programmatically is not announced again when the host
//! reports it on screen. Together these keep the two channels from feeding
//! each other.

use smallvec::smallvec;

use calendar_dates::{today, CalendarMonth, DateData, NaiveDate};

use crate::header::{HeaderArrow, StaticHeaderModel};
use crate::host::{LayoutEvent, ListDescriptor, ScrollableWindow};
use crate::item_provider::{ItemLayout, WindowItemProvider};
use crate::props::CalendarProps;
use crate::row::{Row, RowKey};
use crate::row_model::WindowState;
use crate::scroll_coordinator::ScrollCoordinator;
use crate::spec::{CalendarListSpec, ConfigError};
use crate::update_gate::{should_rerender, GateState, UpdateReason};
use crate::visibility::{ReconcileOutcome, VisibilityReconciler, VisibleMonths};

pub type MonthChangeListener = Box<dyn FnMut(DateData)>;
pub type VisibleMonthsListener = Box<dyn FnMut(Vec<DateData>)>;
pub type LayoutListener = Box<dyn FnMut(LayoutEvent)>;

/// Whether the host should render the list again, and why.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RenderDecision {
    /// First meaningful input change, if any.
    pub reason: Option<UpdateReason>,
    /// Rows switched between placeholder and month.
    pub rows_changed: bool,
}

impl RenderDecision {
    #[inline]
    pub fn rerender(&self) -> bool {
        self.reason.is_some() || self.rows_changed
    }
}

pub struct CalendarList<W> {
    spec: CalendarListSpec,
    props: CalendarProps,
    window: WindowState,
    coordinator: ScrollCoordinator,
    host: W,
    /// Gate state as of the last render the host performed.
    rendered_state: GateState,
    /// Last month the outside world set or was told about.
    last_reported_month: CalendarMonth,
    last_visible_months: VisibleMonths,
    on_month_change: Option<MonthChangeListener>,
    on_visible_months_change: Option<VisibleMonthsListener>,
    on_layout: Option<LayoutListener>,
}

impl<W: ScrollableWindow> CalendarList<W> {
    /// Builds the window around `props.current`, or today when unset.
    pub fn new(spec: CalendarListSpec, props: CalendarProps, host: W) -> Result<Self, ConfigError> {
        spec.validate()?;
        let anchor = CalendarMonth::new(props.current.unwrap_or_else(today));
        let window = WindowState::new(anchor, spec.past_scroll_range, spec.future_scroll_range);
        let coordinator = ScrollCoordinator::from_spec(&spec);

        Ok(Self {
            spec,
            props,
            window,
            coordinator,
            host,
            rendered_state: GateState {
                current_month: anchor,
            },
            last_reported_month: anchor,
            last_visible_months: VisibleMonths::new(),
            on_month_change: None,
            on_visible_months_change: None,
            on_layout: None,
        })
    }

    pub fn set_on_month_change(&mut self, listener: impl FnMut(DateData) + 'static) {
        self.on_month_change = Some(Box::new(listener));
    }

    pub fn set_on_visible_months_change(&mut self, listener: impl FnMut(Vec<DateData>) + 'static) {
        self.on_visible_months_change = Some(Box::new(listener));
    }

    pub fn set_on_layout(&mut self, listener: impl FnMut(LayoutEvent) + 'static) {
        self.on_layout = Some(Box::new(listener));
    }

    // ─────────────────────────────────────────────────────────────────────
    // Read access for the rendering collaborator
    // ─────────────────────────────────────────────────────────────────────

    pub fn spec(&self) -> &CalendarListSpec {
        &self.spec
    }

    pub fn props(&self) -> &CalendarProps {
        &self.props
    }

    pub fn window(&self) -> &WindowState {
        &self.window
    }

    pub fn rows(&self) -> &[Row] {
        self.window.rows()
    }

    pub fn current_month(&self) -> CalendarMonth {
        self.window.current_month()
    }

    pub fn coordinator(&self) -> &ScrollCoordinator {
        &self.coordinator
    }

    pub fn host(&self) -> &W {
        &self.host
    }

    pub fn host_mut(&mut self) -> &mut W {
        &mut self.host
    }

    /// Memoization key of row `index`.
    pub fn row_key(&self, index: usize) -> Option<RowKey> {
        let row = self.window.row(index)?;
        Some(RowKey {
            index,
            key: (self.spec.key_extractor)(row, index),
            version: row.version(),
        })
    }

    /// Row the host should start at: the anchor month.
    pub fn initial_scroll_index(&self) -> usize {
        self.window.past_range()
    }

    pub fn descriptor(&self) -> ListDescriptor {
        ListDescriptor {
            item_count: self.window.len(),
            initial_num_to_render: self.spec.row_count(),
            initial_scroll_index: self.initial_scroll_index(),
            horizontal: self.spec.horizontal,
            paging_enabled: self.spec.paging_enabled,
            scroll_enabled: self.spec.scroll_enabled,
            shows_scroll_indicator: self.spec.show_scroll_indicator,
            scrolls_to_top: self.spec.scrolls_to_top,
            item_visible_percent_threshold: self.spec.item_visible_percent_threshold,
        }
    }

    /// The sticky header, for horizontal lists that asked for one.
    pub fn static_header(&self) -> Option<StaticHeaderModel> {
        if !(self.spec.static_header && self.spec.horizontal) {
            return None;
        }
        Some(StaticHeaderModel {
            month: self.window.current_month(),
            title_text: self.spec.title_text.clone(),
            disable_left_arrow: self.props.disable_left_arrow,
            disable_right_arrow: self.props.disable_right_arrow,
        })
    }

    // ─────────────────────────────────────────────────────────────────────
    // Programmatic channel
    // ─────────────────────────────────────────────────────────────────────

    /// Applies a new set of props from the parent.
    ///
    /// Materialized rows are always refreshed, since their rendering depends
    /// on selection and markings. When `current` moves to another day the list
    /// jumps to its month.
    pub fn set_props(&mut self, next: CalendarProps) -> RenderDecision {
        self.window.refresh_versions();

        let state = self.gate_state();
        let reason = should_rerender(&self.props, &next, &self.rendered_state, &state);
        let moved_to = match (self.props.current, next.current) {
            (Some(prev), Some(current)) if prev != current => Some(current),
            _ => None,
        };
        self.props = next;

        if let Some(current) = moved_to {
            self.jump_to_month(CalendarMonth::new(current));
        }

        self.commit(reason, false)
    }

    /// Jumps to `month` without animation; `None` jumps to the anchor month.
    pub fn scroll_to_month(&mut self, month: Option<CalendarMonth>) -> f32 {
        let target = month.unwrap_or_else(|| self.window.anchor());
        self.jump_to_month(target)
    }

    /// Scrolls to the week row holding `day`, shifted by `extra_offset`.
    pub fn scroll_to_day(&mut self, day: NaiveDate, extra_offset: f32, animated: bool) -> f32 {
        self.last_reported_month = CalendarMonth::new(day);
        self.coordinator
            .scroll_to_day(&self.window, &mut self.host, day, extra_offset, animated)
    }

    /// Moves the current month by `count` months, as the header arrows do.
    pub fn add_month(&mut self, count: i32) -> RenderDecision {
        let target = self.window.current_month().add_months(count);
        self.update_month(target, false)
    }

    /// Header arrow press; ignored while that arrow is disabled.
    pub fn press_header_arrow(&mut self, arrow: HeaderArrow) -> RenderDecision {
        let disabled = match arrow {
            HeaderArrow::Left => self.props.disable_left_arrow,
            HeaderArrow::Right => self.props.disable_right_arrow,
        };
        if disabled {
            return RenderDecision::default();
        }
        self.add_month(arrow.month_delta())
    }

    /// Makes `month` the current month and scrolls to it.
    ///
    /// Does nothing when `month` is already the current month or lies outside
    /// the window. Unless
    /// `do_not_trigger_listeners` is set, listeners hear about the new month
    /// right away instead of waiting for the host to report it.
    pub fn update_month(
        &mut self,
        month: CalendarMonth,
        do_not_trigger_listeners: bool,
    ) -> RenderDecision {
        if month.same_month(&self.window.current_month()) {
            return RenderDecision::default();
        }
        if !self.window.contains_index(self.window.month_index(month)) {
            log::debug!("Ignoring move to {month}, outside the month window");
            return RenderDecision::default();
        }

        self.window.set_current_month(month);
        self.jump_to_month(month);

        if !do_not_trigger_listeners {
            let data = month.to_data();
            if let Some(listener) = self.on_month_change.as_mut() {
                listener(data.clone());
            }
            self.last_visible_months = smallvec![month];
            if let Some(listener) = self.on_visible_months_change.as_mut() {
                listener(vec![data]);
            }
        }

        let state = self.gate_state();
        let reason = should_rerender(&self.props, &self.props, &self.rendered_state, &state);
        self.commit(reason, false)
    }

    // ─────────────────────────────────────────────────────────────────────
    // Observed channel
    // ─────────────────────────────────────────────────────────────────────

    /// Host callback: `visible` are the rows currently on screen.
    pub fn on_viewable_items_changed(&mut self, visible: &[usize]) -> RenderDecision {
        let outcome = VisibilityReconciler::new(visible, self.window.len()).reconcile(&mut self.window);
        self.announce(&outcome);

        let state = self.gate_state();
        let reason = should_rerender(&self.props, &self.props, &self.rendered_state, &state);
        self.commit(reason, outcome.rows_changed())
    }

    /// Host callback: forwards the list container's layout.
    pub fn on_layout(&mut self, event: LayoutEvent) {
        if let Some(listener) = self.on_layout.as_mut() {
            listener(event);
        }
    }

    fn announce(&mut self, outcome: &ReconcileOutcome) {
        if !same_months(&outcome.visible_months, &self.last_visible_months) {
            self.last_visible_months = outcome.visible_months.clone();
            if let Some(listener) = self.on_visible_months_change.as_mut() {
                listener(outcome.visible_months.iter().map(CalendarMonth::to_data).collect());
            }
        }

        let current = self.window.current_month();
        if !current.same_month(&self.last_reported_month) {
            log::debug!("Visible month changed to {current}");
            self.last_reported_month = current;
            if let Some(listener) = self.on_month_change.as_mut() {
                listener(current.to_data());
            }
        }
    }

    // ─────────────────────────────────────────────────────────────────────
    // Helpers
    // ─────────────────────────────────────────────────────────────────────

    fn jump_to_month(&mut self, month: CalendarMonth) -> f32 {
        self.last_reported_month = month;
        self.coordinator
            .scroll_to_month(&self.window, &mut self.host, Some(month))
    }

    fn gate_state(&self) -> GateState {
        GateState {
            current_month: self.window.current_month(),
        }
    }

    fn commit(&mut self, reason: Option<UpdateReason>, rows_changed: bool) -> RenderDecision {
        let decision = RenderDecision {
            reason,
            rows_changed,
        };
        if decision.rerender() {
            log::debug!(
                "Calendar list re-render: reason={:?} rows_changed={}",
                reason.map(UpdateReason::field_name),
                rows_changed
            );
            self.rendered_state = self.gate_state();
        }
        decision
    }
}

impl<W: ScrollableWindow> WindowItemProvider for CalendarList<W> {
    fn item_count(&self) -> usize {
        self.window.len()
    }

    fn get_key(&self, index: usize) -> String {
        match self.window.row(index) {
            Some(row) => (self.spec.key_extractor)(row, index),
            None => index.to_string(),
        }
    }

    fn item_layout(&self, index: usize) -> ItemLayout {
        self.coordinator.item_layout(index)
    }
}

fn same_months(a: &[CalendarMonth], b: &[CalendarMonth]) -> bool {
    a.len() == b.len() && a.iter().zip(b).all(|(a, b)| a.same_month(b))
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::rc::Rc;

    use super::*;
    use crate::props::InitialPosition;

    #[derive(Default)]
    struct Commands(Vec<(f32, bool)>);

    impl ScrollableWindow for Commands {
        fn scroll_to_offset(&mut self, offset: f32, animated: bool) {
            self.0.push((offset, animated));
        }
    }

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn list(past: usize, future: usize, current: NaiveDate) -> CalendarList<Commands> {
        let spec = CalendarListSpec::new()
            .past_scroll_range(past)
            .future_scroll_range(future);
        CalendarList::new(spec, CalendarProps::new().current(current), Commands::default())
            .unwrap()
    }

    #[test]
    fn rejects_invalid_spec() {
        let spec = CalendarListSpec::new().first_day(9);
        let result = CalendarList::new(spec, CalendarProps::new(), Commands::default());
        assert!(matches!(result, Err(ConfigError::InvalidFirstDay { value: 9 })));
    }

    #[test]
    fn descriptor_starts_at_anchor() {
        let list = list(3, 4, ymd(2024, 3, 10));
        let descriptor = list.descriptor();
        assert_eq!(descriptor.item_count, 8);
        assert_eq!(descriptor.initial_num_to_render, 8);
        assert_eq!(descriptor.initial_scroll_index, 3);
        assert_eq!(descriptor.item_visible_percent_threshold, 20);
        assert_eq!(list.current_month().date(), ymd(2024, 3, 10));
    }

    #[test]
    fn set_props_always_refreshes_versions() {
        let mut list = list(2, 2, ymd(2024, 3, 1));
        let before = list.row_key(2).unwrap();
        let decision = list.set_props(CalendarProps::new().current(ymd(2024, 3, 1)));
        let after = list.row_key(2).unwrap();

        assert!(!decision.rerender());
        assert_eq!(before.key, after.key);
        assert_ne!(before, after);
        assert!(after.version > before.version);
        assert_eq!(list.row_key(0).unwrap().version, None);
    }

    #[test]
    fn moving_current_prop_scrolls_once() {
        let mut list = list(2, 2, ymd(2024, 3, 1));
        let decision = list.set_props(CalendarProps::new().current(ymd(2024, 4, 15)));

        assert_eq!(decision.reason, Some(UpdateReason::Current));
        assert_eq!(list.host().0, vec![(1080.0, false)]);

        // Same day again: no scroll.
        list.set_props(CalendarProps::new().current(ymd(2024, 4, 15)));
        assert_eq!(list.host().0.len(), 1);
    }

    #[test]
    fn visibility_never_scrolls() {
        let mut list = list(2, 2, ymd(2024, 3, 1));
        list.scroll_to_month(CalendarMonth::from_ymd(2024, 4, 1));
        assert_eq!(list.host().0.len(), 1);

        let decision = list.on_viewable_items_changed(&[3]);
        assert!(decision.rerender());
        assert_eq!(list.current_month().month(), 4);
        assert_eq!(list.host().0.len(), 1);
    }

    #[test]
    fn update_month_is_noop_for_same_month() {
        let mut list = list(2, 2, ymd(2024, 3, 1));
        let decision = list.update_month(CalendarMonth::from_ymd(2024, 3, 20).unwrap(), false);
        assert_eq!(decision, RenderDecision::default());
        assert!(list.host().0.is_empty());
    }

    #[test]
    fn add_month_notifies_and_scrolls() {
        let months = Rc::new(RefCell::new(Vec::new()));
        let visible = Rc::new(RefCell::new(Vec::new()));
        let mut list = list(2, 2, ymd(2024, 3, 1));
        let sink = Rc::clone(&months);
        list.set_on_month_change(move |data| sink.borrow_mut().push(data));
        let sink = Rc::clone(&visible);
        list.set_on_visible_months_change(move |data| sink.borrow_mut().push(data));

        let decision = list.add_month(1);

        assert_eq!(decision.reason, Some(UpdateReason::CurrentMonth));
        assert_eq!(list.host().0, vec![(1080.0, false)]);
        assert_eq!(months.borrow().len(), 1);
        assert_eq!(months.borrow()[0].date_string, "2024-04-01");
        assert_eq!(visible.borrow().len(), 1);
        assert_eq!(visible.borrow()[0][0].month, 4);

        // The host then reports April on screen: nothing new to announce.
        list.on_viewable_items_changed(&[3]);
        assert_eq!(months.borrow().len(), 1);
        assert_eq!(visible.borrow().len(), 1);
    }

    #[test]
    fn suppressed_update_month_stays_silent() {
        let months = Rc::new(RefCell::new(Vec::new()));
        let mut list = list(2, 2, ymd(2024, 3, 1));
        let sink = Rc::clone(&months);
        list.set_on_month_change(move |data| sink.borrow_mut().push(data));

        list.update_month(CalendarMonth::from_ymd(2024, 5, 1).unwrap(), true);
        assert!(months.borrow().is_empty());
        assert_eq!(list.host().0.len(), 1);
    }

    #[test]
    fn disabled_header_arrow_is_ignored() {
        let mut list = list(2, 2, ymd(2024, 3, 1));
        list.set_props(
            CalendarProps::new()
                .current(ymd(2024, 3, 1))
                .disable_right_arrow(true),
        );

        assert!(!list.press_header_arrow(HeaderArrow::Right).rerender());
        assert!(list.host().0.is_empty());
        assert!(list.press_header_arrow(HeaderArrow::Left).rerender());
        assert_eq!(list.current_month().month(), 2);
    }

    #[test]
    fn header_arrows_stop_at_window_edges() {
        let mut list = list(2, 2, ymd(2024, 3, 1));

        for _ in 0..3 {
            list.press_header_arrow(HeaderArrow::Right);
        }
        assert_eq!(list.current_month().month(), 5);
        assert_eq!(list.window().month_index(list.current_month()), 4);
        assert_eq!(list.host().0.last(), Some(&(1440.0, false)));
        assert_eq!(list.host().0.len(), 2);

        for _ in 0..6 {
            list.press_header_arrow(HeaderArrow::Left);
        }
        assert_eq!(list.current_month().month(), 1);
        assert_eq!(list.window().month_index(list.current_month()), 0);
        assert_eq!(list.host().0.last(), Some(&(0.0, false)));
        assert_eq!(list.host().0.len(), 6);
    }

    #[test]
    fn update_month_outside_window_is_ignored() {
        let mut list = list(1, 1, ymd(2024, 3, 1));
        let decision = list.update_month(CalendarMonth::from_ymd(2024, 9, 1).unwrap(), false);
        assert_eq!(decision, RenderDecision::default());
        assert_eq!(list.current_month().month(), 3);
        assert!(list.host().0.is_empty());
    }

    #[test]
    fn static_header_only_for_horizontal_lists() {
        let vertical = CalendarList::new(
            CalendarListSpec::new().static_header(true),
            CalendarProps::new().current(ymd(2024, 3, 1)),
            Commands::default(),
        )
        .unwrap();
        assert!(vertical.static_header().is_none());

        let horizontal = CalendarList::new(
            CalendarListSpec::new()
                .horizontal(true)
                .static_header(true)
                .title_text("Pick a day"),
            CalendarProps::new()
                .current(ymd(2024, 3, 1))
                .disable_left_arrow(true),
            Commands::default(),
        )
        .unwrap();
        let header = horizontal.static_header().unwrap();
        assert_eq!(header.month.month(), 3);
        assert_eq!(header.title_text.as_deref(), Some("Pick a day"));
        assert!(header.disable_left_arrow);
        assert!(!header.disable_right_arrow);
    }

    #[test]
    fn custom_key_extractor_feeds_row_keys() {
        let spec = CalendarListSpec::new()
            .past_scroll_range(1)
            .future_scroll_range(1)
            .key_extractor(|row, index| match row.month() {
                Some(month) => format!("month-{month}"),
                None => format!("row-{index}"),
            });
        let list = CalendarList::new(
            spec,
            CalendarProps::new().current(ymd(2024, 3, 1)),
            Commands::default(),
        )
        .unwrap();

        assert_eq!(list.get_key(1), "month-2024-03");
        assert_eq!(list.get_index("month-2024-04"), Some(2));
        assert_eq!(list.get_key(7), "7");
    }

    #[test]
    fn layout_is_forwarded() {
        let seen = Rc::new(RefCell::new(None));
        let mut list = list(1, 1, ymd(2024, 3, 1));
        let sink = Rc::clone(&seen);
        list.set_on_layout(move |event| *sink.borrow_mut() = Some(event));

        let event = LayoutEvent {
            x: 0.0,
            y: 10.0,
            width: 360.0,
            height: 720.0,
        };
        list.on_layout(event);
        assert_eq!(*seen.borrow(), Some(event));
    }

    #[test]
    fn initial_position_change_requests_render() {
        let mut list = list(1, 1, ymd(2024, 3, 1));
        let decision = list.set_props(
            CalendarProps::new()
                .current(ymd(2024, 3, 1))
                .initial_position(InitialPosition::Open),
        );
        assert_eq!(decision.reason, Some(UpdateReason::InitialPosition));
    }
}
