//! Simulated viewport of the host list.
//!
//! Answers the question a real host list answers with its viewability
//! config: which rows cover enough of their own length inside the viewport
//! to count as visible at a given scroll offset.

/// Viewports larger than this are treated as unbounded.
const MAX_REASONABLE_VIEWPORT: f32 = 100_000.0;

/// Rows shown when the viewport is unbounded.
const UNBOUNDED_VIEWPORT_ROW_COUNT: f32 = 3.0;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ViewportSimulator {
    viewport_size: f32,
    unit_size: f32,
    row_count: usize,
    /// Fraction (0-1) of a row that must be inside the viewport.
    visible_fraction: f32,
}

impl ViewportSimulator {
    /// # Arguments
    /// * `viewport_size` - Extent of the viewport along the scroll axis
    /// * `unit_size` - Extent of one month row along the scroll axis
    /// * `row_count` - Rows in the list
    /// * `visible_percent_threshold` - Percentage of a row that must be on screen
    pub fn new(
        viewport_size: f32,
        unit_size: f32,
        row_count: usize,
        visible_percent_threshold: u8,
    ) -> Self {
        let unbounded = viewport_size.is_infinite() || viewport_size > MAX_REASONABLE_VIEWPORT;
        let viewport_size = if unbounded {
            let fallback = unit_size * UNBOUNDED_VIEWPORT_ROW_COUNT;
            log::warn!(
                "Simulated viewport is unbounded ({viewport_size}), using {fallback} instead"
            );
            fallback
        } else {
            viewport_size
        };

        Self {
            viewport_size,
            unit_size,
            row_count,
            visible_fraction: f32::from(visible_percent_threshold.min(100)) / 100.0,
        }
    }

    #[inline]
    pub fn viewport_size(&self) -> f32 {
        self.viewport_size
    }

    /// Largest offset the host can scroll to.
    pub fn max_offset(&self) -> f32 {
        (self.unit_size * self.row_count as f32 - self.viewport_size).max(0.0)
    }

    /// Rows counted as visible with the viewport starting at `offset`.
    ///
    /// The offset is clamped to the scrollable range first, like a real list
    /// that cannot scroll past its content.
    pub fn visible_indices(&self, offset: f32) -> Vec<usize> {
        if self.row_count == 0 || self.unit_size <= 0.0 {
            return Vec::new();
        }
        let start = offset.clamp(0.0, self.max_offset());
        let end = start + self.viewport_size;
        let first = (start / self.unit_size).floor() as usize;

        (first..self.row_count)
            .take_while(|&index| self.unit_size * (index as f32) < end)
            .filter(|&index| {
                let row_start = self.unit_size * index as f32;
                let row_end = row_start + self.unit_size;
                let covered = row_end.min(end) - row_start.max(start);
                covered / self.unit_size >= self.visible_fraction && covered > 0.0
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn aligned_offset_shows_one_row() {
        let viewport = ViewportSimulator::new(360.0, 360.0, 10, 20);
        assert_eq!(viewport.visible_indices(720.0), vec![2]);
    }

    #[test]
    fn partial_rows_need_the_threshold() {
        let viewport = ViewportSimulator::new(360.0, 360.0, 10, 20);
        // 90px of row 2 is 25% of it.
        assert_eq!(viewport.visible_indices(990.0), vec![2, 3]);
        // 36px of row 2 is 10% of it.
        assert_eq!(viewport.visible_indices(1044.0), vec![3]);
    }

    #[test]
    fn offsets_are_clamped_to_content() {
        let viewport = ViewportSimulator::new(360.0, 360.0, 3, 20);
        assert_eq!(viewport.visible_indices(-500.0), vec![0]);
        assert_eq!(viewport.visible_indices(10_000.0), vec![2]);
    }

    #[test]
    fn unbounded_viewport_falls_back() {
        let viewport = ViewportSimulator::new(f32::INFINITY, 100.0, 50, 20);
        assert_eq!(viewport.viewport_size(), 300.0);
        assert_eq!(viewport.visible_indices(0.0), vec![0, 1, 2]);
    }

    #[test]
    fn empty_list_has_nothing_visible() {
        let viewport = ViewportSimulator::new(360.0, 360.0, 0, 20);
        assert!(viewport.visible_indices(0.0).is_empty());
    }
}
