//! Reconciles the month window with what the host reports as on screen.
//!
//! Rows within [`MATERIALIZE_DISTANCE`] of a visible row are materialized so
//! neighbours are ready before they scroll in; everything further away falls
//! back to its placeholder label. Only rows that are themselves visible count
//! towards the current month.

use smallvec::SmallVec;
use web_time::Instant;

use calendar_dates::CalendarMonth;

use crate::row::Row;
use crate::row_model::WindowState;

/// Rows this close to a visible row are kept materialized.
pub const MATERIALIZE_DISTANCE: usize = 1;

/// Rows this close to a visible row are reported as visible months.
pub const VISIBLE_DISTANCE: usize = 0;

/// Hosts rarely report more than a handful of rows at once.
pub type VisibleIndices = SmallVec<[usize; 8]>;
pub type VisibleMonths = SmallVec<[CalendarMonth; 4]>;

/// Result of one reconciliation pass.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ReconcileOutcome {
    /// Months of the visible rows, in ascending row order.
    pub visible_months: VisibleMonths,
    pub promoted: usize,
    pub demoted: usize,
}

impl ReconcileOutcome {
    /// Whether any row switched between placeholder and month.
    pub fn rows_changed(&self) -> bool {
        self.promoted > 0 || self.demoted > 0
    }
}

/// One visibility observation from the host.
#[derive(Clone, Debug)]
pub struct VisibilityReconciler {
    visible: VisibleIndices,
}

impl VisibilityReconciler {
    /// Normalizes the reported indices: sorted, deduplicated, and limited to
    /// rows that exist.
    pub fn new(visible: &[usize], row_count: usize) -> Self {
        let mut visible: VisibleIndices = visible
            .iter()
            .copied()
            .filter(|&index| index < row_count)
            .collect();
        visible.sort_unstable();
        visible.dedup();
        Self { visible }
    }

    pub fn visible(&self) -> &[usize] {
        &self.visible
    }

    /// Whether any visible row lies within `distance` of `index`.
    pub fn is_close(&self, index: usize, distance: usize) -> bool {
        let low = index.saturating_sub(distance);
        let high = index.saturating_add(distance);
        let start = self.visible.partition_point(|&visible| visible < low);
        self.visible
            .get(start)
            .is_some_and(|&visible| visible <= high)
    }

    /// Promotes rows near the viewport, demotes the rest, and moves the
    /// current month to the first visible row.
    ///
    /// An empty observation demotes everything but leaves the current month
    /// alone.
    pub fn reconcile(&self, window: &mut WindowState) -> ReconcileOutcome {
        let started = Instant::now();
        let mut outcome = ReconcileOutcome::default();

        for index in 0..window.len() {
            let keep = self.is_close(index, MATERIALIZE_DISTANCE);
            if keep {
                if window.promote(index) {
                    outcome.promoted += 1;
                }
            } else if window.demote(index) {
                outcome.demoted += 1;
            }

            if self.is_close(index, VISIBLE_DISTANCE) {
                if let Some(Row::Materialized { month, .. }) = window.row(index) {
                    outcome.visible_months.push(*month);
                }
            }
        }

        if let Some(first) = outcome.visible_months.first() {
            window.set_current_month(*first);
        }

        log::trace!(
            "Reconciled {:?}: +{} -{} rows in {:?}",
            self.visible,
            outcome.promoted,
            outcome.demoted,
            started.elapsed()
        );
        outcome
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn month(year: i32, month: u32) -> CalendarMonth {
        CalendarMonth::from_ymd(year, month, 1).unwrap()
    }

    fn materialized(window: &WindowState) -> Vec<usize> {
        window
            .rows()
            .iter()
            .enumerate()
            .filter(|(_, row)| row.is_materialized())
            .map(|(index, _)| index)
            .collect()
    }

    #[test]
    fn normalizes_reported_indices() {
        let reconciler = VisibilityReconciler::new(&[4, 2, 4, 99, 3], 10);
        assert_eq!(reconciler.visible(), &[2, 3, 4]);
    }

    #[test]
    fn closeness_bands() {
        let reconciler = VisibilityReconciler::new(&[5], 10);
        assert!(reconciler.is_close(5, 0));
        assert!(!reconciler.is_close(4, 0));
        assert!(reconciler.is_close(4, 1));
        assert!(reconciler.is_close(6, 1));
        assert!(!reconciler.is_close(7, 1));
        assert!(!reconciler.is_close(0, 1));
    }

    #[test]
    fn visible_rows_define_months_in_ascending_order() {
        let mut window = WindowState::new(month(2024, 3), 2, 2);
        let outcome = VisibilityReconciler::new(&[3, 2], window.len()).reconcile(&mut window);

        assert_eq!(
            outcome.visible_months.as_slice(),
            &[month(2024, 3), month(2024, 4)]
        );
        assert_eq!(window.current_month(), month(2024, 3));
    }

    #[test]
    fn promotes_neighbours_and_demotes_far_rows() {
        let mut window = WindowState::new(month(2024, 3), 5, 5);
        assert_eq!(materialized(&window), vec![4, 5, 6]);

        let outcome = VisibilityReconciler::new(&[8], window.len()).reconcile(&mut window);
        assert_eq!(materialized(&window), vec![7, 8, 9]);
        assert_eq!(outcome.promoted, 3);
        assert_eq!(outcome.demoted, 3);
        assert_eq!(window.rows()[4].label(), Some("Feb 2024"));
        assert_eq!(window.current_month(), month(2024, 6));
    }

    #[test]
    fn second_pass_with_same_indices_changes_nothing() {
        let mut window = WindowState::new(month(2024, 3), 5, 5);
        let reconciler = VisibilityReconciler::new(&[0, 1], window.len());

        let first = reconciler.reconcile(&mut window);
        let snapshot = window.rows().to_vec();
        let second = reconciler.reconcile(&mut window);

        assert!(first.rows_changed());
        assert!(!second.rows_changed());
        assert_eq!(window.rows(), snapshot.as_slice());
        assert_eq!(first.visible_months, second.visible_months);
    }

    #[test]
    fn empty_observation_keeps_current_month() {
        let mut window = WindowState::new(month(2024, 3), 2, 2);
        VisibilityReconciler::new(&[4], window.len()).reconcile(&mut window);
        assert_eq!(window.current_month(), month(2024, 5));

        let outcome = VisibilityReconciler::new(&[], window.len()).reconcile(&mut window);
        assert!(outcome.visible_months.is_empty());
        assert_eq!(window.current_month(), month(2024, 5));
        assert!(materialized(&window).is_empty());
    }

    #[test]
    fn edges_of_the_window_do_not_wrap() {
        let mut window = WindowState::new(month(2024, 3), 3, 3);
        VisibilityReconciler::new(&[0], window.len()).reconcile(&mut window);
        assert_eq!(materialized(&window), vec![0, 1]);

        VisibilityReconciler::new(&[6], window.len()).reconcile(&mut window);
        assert_eq!(materialized(&window), vec![5, 6]);
    }
}
