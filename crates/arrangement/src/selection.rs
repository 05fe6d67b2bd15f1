//! Explicitly selected monitors.

use std::collections::BTreeSet;

use crate::catalog::Catalog;
use crate::error::{ArrangementError, ArrangementResult};
use crate::indices;

/// Set of selected catalog positions.
///
/// The state is sized for one catalog; every position is range-checked
/// and rejected calls leave the set untouched. Recomputing derived state
/// after a change is up to the caller.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SelectionState {
    selected: BTreeSet<usize>,
    count: usize,
}

/// Outcome of restoring persisted indices against a live catalog.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RestoreReport {
    /// Positions now selected.
    pub applied: BTreeSet<usize>,
    /// Parsed positions that do not name a monitor.
    pub rejected: Vec<i32>,
}

impl RestoreReport {
    pub fn is_clean(&self) -> bool {
        self.rejected.is_empty()
    }
}

impl SelectionState {
    /// Empty selection over `catalog`.
    pub fn new(catalog: &Catalog) -> Self {
        Self::with_count(catalog.len())
    }

    /// Empty selection over `count` monitors.
    pub fn with_count(count: usize) -> Self {
        Self {
            selected: BTreeSet::new(),
            count,
        }
    }

    /// Number of monitors the selection is sized for.
    pub fn count(&self) -> usize {
        self.count
    }

    fn check(&self, pos: usize) -> ArrangementResult<()> {
        if pos < self.count {
            Ok(())
        } else {
            Err(ArrangementError::IndexOutOfRange {
                index: pos,
                count: self.count,
            })
        }
    }

    /// Flip `pos`, returning whether it is now selected.
    pub fn toggle(&mut self, pos: usize) -> ArrangementResult<bool> {
        self.check(pos)?;
        let selected = !self.selected.contains(&pos);
        self.apply(pos, selected);
        Ok(selected)
    }

    pub fn set(&mut self, pos: usize, selected: bool) -> ArrangementResult<()> {
        self.check(pos)?;
        self.apply(pos, selected);
        Ok(())
    }

    fn apply(&mut self, pos: usize, selected: bool) {
        if selected {
            self.selected.insert(pos);
        } else {
            self.selected.remove(&pos);
        }
    }

    pub fn contains(&self, pos: usize) -> ArrangementResult<bool> {
        self.check(pos)?;
        Ok(self.selected.contains(&pos))
    }

    /// Replace the whole selection.
    ///
    /// Fails without changing anything if any position is out of range.
    pub fn replace(&mut self, positions: BTreeSet<usize>) -> ArrangementResult<()> {
        if let Some(&last) = positions.last() {
            self.check(last)?;
        }
        self.selected = positions;
        Ok(())
    }

    /// Every selected position, ascending.
    pub fn all(&self) -> &BTreeSet<usize> {
        &self.selected
    }

    pub fn clear(&mut self) {
        self.selected.clear();
    }

    pub fn len(&self) -> usize {
        self.selected.len()
    }

    pub fn is_empty(&self) -> bool {
        self.selected.is_empty()
    }

    /// Replace the selection with parsed 0-based positions.
    ///
    /// Positions that name a monitor are applied; the rest are logged and
    /// reported, so a stale index from a larger topology does not discard
    /// the rest of the selection.
    pub fn restore(&mut self, parsed: &BTreeSet<i32>) -> RestoreReport {
        let mut report = RestoreReport::default();

        for &index in parsed {
            match usize::try_from(index) {
                Ok(pos) if pos < self.count => {
                    report.applied.insert(pos);
                }
                _ => report.rejected.push(index),
            }
        }

        if !report.rejected.is_empty() {
            tracing::warn!(
                rejected = ?report
                    .rejected
                    .iter()
                    .map(|i| i64::from(*i) + 1)
                    .collect::<Vec<_>>(),
                monitors = self.count,
                "Ignoring configured monitors that do not exist"
            );
        }

        self.selected = report.applied.clone();
        report
    }

    /// Persisted form of the selection, e.g. `"1,3"`.
    pub fn to_config_string(&self) -> String {
        indices::serialize(&self.selected)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle_and_set() {
        let mut state = SelectionState::with_count(3);
        assert_eq!(state.toggle(1), Ok(true));
        assert_eq!(state.contains(1), Ok(true));
        assert_eq!(state.toggle(1), Ok(false));
        assert_eq!(state.contains(1), Ok(false));

        state.set(2, true).unwrap();
        state.set(2, true).unwrap();
        state.set(0, false).unwrap();
        assert_eq!(state.all(), &BTreeSet::from([2]));
        assert_eq!(state.len(), 1);

        state.clear();
        assert!(state.is_empty());
    }

    #[test]
    fn test_out_of_range_leaves_state_unchanged() {
        let mut state = SelectionState::with_count(2);
        state.set(0, true).unwrap();

        let err = ArrangementError::IndexOutOfRange { index: 2, count: 2 };
        assert_eq!(state.toggle(2), Err(err.clone()));
        assert_eq!(state.set(5, true), Err(ArrangementError::IndexOutOfRange { index: 5, count: 2 }));
        assert_eq!(state.contains(2), Err(err));
        assert_eq!(state.all(), &BTreeSet::from([0]));
    }

    #[test]
    fn test_replace_is_all_or_nothing() {
        let mut state = SelectionState::with_count(3);
        state.set(0, true).unwrap();

        assert_eq!(
            state.replace(BTreeSet::from([1, 3])),
            Err(ArrangementError::IndexOutOfRange { index: 3, count: 3 })
        );
        assert_eq!(state.all(), &BTreeSet::from([0]));

        state.replace(BTreeSet::from([1, 2])).unwrap();
        assert_eq!(state.all(), &BTreeSet::from([1, 2]));
    }

    #[test]
    fn test_empty_catalog_rejects_everything() {
        let mut state = SelectionState::new(&Catalog::default());
        assert!(state.toggle(0).is_err());
        assert!(state.contains(0).is_err());
    }

    #[test]
    fn test_restore_applies_valid_subset() {
        let mut state = SelectionState::with_count(3);
        state.set(1, true).unwrap();

        let report = state.restore(&BTreeSet::from([-1, 0, 2, 7]));
        assert_eq!(report.applied, BTreeSet::from([0, 2]));
        assert_eq!(report.rejected, vec![-1, 7]);
        assert!(!report.is_clean());
        assert_eq!(state.all(), &BTreeSet::from([0, 2]));
    }

    #[test]
    fn test_config_string() {
        let mut state = SelectionState::with_count(4);
        state.set(3, true).unwrap();
        state.set(0, true).unwrap();
        assert_eq!(state.to_config_string(), "1,4");
    }
}
