//! The contract with the host list that actually draws and scrolls rows.

/// Imperative handle on the host list.
///
/// Scroll commands are fire-and-forget: the host reports where it settled
/// later, through [`CalendarList::on_viewable_items_changed`](crate::CalendarList::on_viewable_items_changed).
/// A newer command supersedes any scroll still in flight.
pub trait ScrollableWindow {
    fn scroll_to_offset(&mut self, offset: f32, animated: bool);
}

impl<W: ScrollableWindow + ?Sized> ScrollableWindow for Box<W> {
    fn scroll_to_offset(&mut self, offset: f32, animated: bool) {
        (**self).scroll_to_offset(offset, animated);
    }
}

/// Layout of the list container, forwarded from the host untouched.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct LayoutEvent {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

/// What the host needs to mount the list.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ListDescriptor {
    pub item_count: usize,
    /// Rows to render in the first pass; the whole window.
    pub initial_num_to_render: usize,
    pub initial_scroll_index: usize,
    pub horizontal: bool,
    pub paging_enabled: bool,
    pub scroll_enabled: bool,
    pub shows_scroll_indicator: bool,
    pub scrolls_to_top: bool,
    pub item_visible_percent_threshold: u8,
}
