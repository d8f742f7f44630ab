//! Item provider trait for the host list.
//!
//! The host list virtualizes rows on its own; it only needs to know how many
//! rows exist, how to key them, and where each one sits so it can jump to an
//! index without measuring everything before it.

/// Placement of one row along the scroll axis.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ItemLayout {
    /// Size of the row along the scroll axis.
    pub length: f32,
    /// Distance from the start of the list content.
    pub offset: f32,
    pub index: usize,
}

/// Everything the host list asks about rows.
///
/// Every row has the same length, so layouts are answered without any
/// measurement.
pub trait WindowItemProvider {
    /// The total number of rows (visible or not).
    fn item_count(&self) -> usize;

    /// Stable key for the row at `index`.
    ///
    /// Defaults to the index itself.
    fn get_key(&self, index: usize) -> String {
        index.to_string()
    }

    fn item_layout(&self, index: usize) -> ItemLayout;

    /// Index of the row with `key`, if any.
    fn get_index(&self, key: &str) -> Option<usize> {
        (0..self.item_count()).find(|&index| self.get_key(index) == key)
    }
}
