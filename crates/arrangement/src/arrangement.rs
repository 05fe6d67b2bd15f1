//! The selection delegate a presentation layer binds against.
//!
//! An [`Arrangement`] owns one catalog snapshot, the user's selection and
//! the fullscreen mode. It is rebuilt by the caller whenever the display
//! topology changes; requiredness and bounds are recomputed on each read.

use std::collections::BTreeSet;

use monspan_common::{FullscreenConfig, FullscreenMode};
use monspan_platform_core::{DisplayInfo, DisplaySource, Rect};

use crate::bounds::{self, BoundingBox, Edge};
use crate::catalog::{Catalog, Monitor};
use crate::error::{ArrangementError, ArrangementResult};
use crate::indices::{self, IndexParseError, ParsedSelection};
use crate::required;
use crate::selection::{RestoreReport, SelectionState};

/// Monitor arrangement for multi-monitor fullscreen.
#[derive(Debug, Clone)]
pub struct Arrangement {
    catalog: Catalog,
    selection: SelectionState,
    mode: FullscreenMode,
}

impl Default for Arrangement {
    /// Empty arrangement, in the same mode as [`Arrangement::new`].
    fn default() -> Self {
        Self::new(Catalog::default())
    }
}

impl Arrangement {
    /// Arrangement over `catalog` with nothing selected, in `Selected` mode.
    pub fn new(catalog: Catalog) -> Self {
        let selection = SelectionState::new(&catalog);
        Self {
            catalog,
            selection,
            mode: FullscreenMode::Selected,
        }
    }

    /// Build from raw displays.
    ///
    /// An empty topology degrades to an arrangement without monitors:
    /// every position query fails with `IndexOutOfRange` and the frame
    /// buffer is empty.
    pub fn from_displays(displays: Vec<DisplayInfo>) -> Self {
        match Catalog::build(displays) {
            Ok(catalog) => Self::new(catalog),
            Err(e) => {
                tracing::warn!("{e}; fullscreen across monitors is unavailable");
                Self::new(Catalog::default())
            }
        }
    }

    /// Snapshot a display source.
    pub fn from_source(source: &dyn DisplaySource) -> Self {
        Self::from_displays(monspan_platform_core::enumerate(source))
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn selection(&self) -> &SelectionState {
        &self.selection
    }

    pub fn mode(&self) -> FullscreenMode {
        self.mode
    }

    pub fn set_mode(&mut self, mode: FullscreenMode) {
        tracing::debug!(?mode, "Fullscreen mode changed");
        self.mode = mode;
    }

    /// Number of monitors.
    pub fn count(&self) -> usize {
        self.catalog.len()
    }

    /// Geometry of the monitor at `pos`.
    pub fn dimensions(&self, pos: usize) -> ArrangementResult<Rect> {
        self.catalog.rect(pos)
    }

    pub fn description(&self, pos: usize) -> ArrangementResult<String> {
        self.catalog.description(pos)
    }

    /// Whether `pos` is selected. Every monitor reads as selected in `All` mode.
    pub fn is_selected(&self, pos: usize) -> ArrangementResult<bool> {
        let explicit = self.selection.contains(pos)?;
        Ok(self.mode == FullscreenMode::All || explicit)
    }

    pub fn is_required(&self, pos: usize) -> ArrangementResult<bool> {
        required::is_required(&self.catalog, &self.effective_selection(), pos)
    }

    pub fn set(&mut self, pos: usize, selected: bool) -> ArrangementResult<()> {
        self.selection.set(pos, selected)?;
        tracing::debug!(pos, selected, "Monitor selection changed");
        Ok(())
    }

    /// Flip `pos`, returning whether it is now explicitly selected.
    pub fn toggle(&mut self, pos: usize) -> ArrangementResult<bool> {
        let selected = self.selection.toggle(pos)?;
        tracing::debug!(pos, selected, "Monitor selection toggled");
        Ok(selected)
    }

    /// Deselect every monitor.
    pub fn clear(&mut self) {
        self.selection.clear();
    }

    /// Positions treated as selected under the current mode.
    pub fn effective_selection(&self) -> BTreeSet<usize> {
        match self.mode {
            FullscreenMode::All => self.catalog.positions().collect(),
            _ => self.selection.all().clone(),
        }
    }

    /// Unselected positions the current selection requires.
    pub fn required(&self) -> BTreeSet<usize> {
        required::resolve(&self.catalog, &self.effective_selection())
    }

    pub fn has_required(&self) -> bool {
        !self.required().is_empty()
    }

    /// Selected and required positions.
    pub fn active(&self) -> BTreeSet<usize> {
        let mut active = self.effective_selection();
        active.extend(self.required());
        active
    }

    /// Bounds of the active set, or `None` in `Current` mode or when
    /// nothing is active.
    pub fn bounding_box(&self) -> Option<BoundingBox> {
        if !self.mode.spans_monitors() {
            return None;
        }
        let selected = self.effective_selection();
        let required = required::resolve(&self.catalog, &selected);
        bounds::compute_union(&self.catalog, &selected, &required)
    }

    /// The fullscreen frame buffer; an empty rectangle when there is none.
    pub fn frame_buffer_dimensions(&self) -> Rect {
        self.bounding_box()
            .map(|bbox| bbox.rect())
            .unwrap_or_default()
    }

    /// Platform index of the monitor limiting `edge`.
    pub fn limit(&self, edge: Edge) -> Option<u32> {
        let bbox = self.bounding_box()?;
        self.catalog
            .get(bbox.limit(edge))
            .map(|monitor| monitor.stable_index)
    }

    pub fn top(&self) -> Option<u32> {
        self.limit(Edge::Top)
    }

    pub fn bottom(&self) -> Option<u32> {
        self.limit(Edge::Bottom)
    }

    pub fn left(&self) -> Option<u32> {
        self.limit(Edge::Left)
    }

    pub fn right(&self) -> Option<u32> {
        self.limit(Edge::Right)
    }

    /// Platform index of the monitor that should act as primary.
    ///
    /// Platform index 0 when it is active, otherwise the first active
    /// monitor in catalog order. `None` in `Current` mode.
    pub fn primary(&self) -> Option<u32> {
        if !self.mode.spans_monitors() {
            return None;
        }
        let active: Vec<&Monitor> = self
            .active()
            .into_iter()
            .filter_map(|pos| self.catalog.get(pos))
            .collect();

        let primary = active
            .iter()
            .find(|monitor| monitor.stable_index == 0)
            .or_else(|| active.first())
            .map(|monitor| monitor.stable_index);

        tracing::debug!(?primary, "Resolved primary monitor");
        primary
    }

    /// Width of the whole layout from the virtual-desktop origin.
    pub fn width(&self) -> u32 {
        self.catalog.extent().0
    }

    /// Height of the whole layout from the virtual-desktop origin.
    pub fn height(&self) -> u32 {
        self.catalog.extent().1
    }

    /// Monitors selected under the current mode, in catalog order.
    pub fn selected_monitors(&self) -> Vec<&Monitor> {
        self.effective_selection()
            .into_iter()
            .filter_map(|pos| self.catalog.get(pos))
            .collect()
    }

    /// Apply a persisted selection string.
    ///
    /// A syntax error leaves the arrangement untouched. `"all"` switches to
    /// `All` mode and keeps the explicit selection. Otherwise the valid
    /// indices replace the selection and out-of-range ones are reported.
    pub fn set_indices(&mut self, text: &str) -> Result<RestoreReport, IndexParseError> {
        let parsed = indices::parse(text)?;
        Ok(self.apply_parsed(parsed))
    }

    /// Apply a persisted fullscreen configuration.
    ///
    /// Nothing changes when the selection string does not parse.
    pub fn apply_config(
        &mut self,
        config: &FullscreenConfig,
    ) -> Result<RestoreReport, IndexParseError> {
        let parsed = indices::parse(&config.selected_monitors)?;
        self.set_mode(config.mode);
        Ok(self.apply_parsed(parsed))
    }

    fn apply_parsed(&mut self, parsed: ParsedSelection) -> RestoreReport {
        match parsed {
            ParsedSelection::All => {
                self.set_mode(FullscreenMode::All);
                RestoreReport {
                    applied: self.selection.all().clone(),
                    rejected: Vec::new(),
                }
            }
            ParsedSelection::Indices(parsed) => self.selection.restore(&parsed),
        }
    }

    /// Persisted form of the explicit selection, e.g. `"1,3"`.
    pub fn save(&self) -> String {
        self.selection.to_config_string()
    }

    /// Fullscreen configuration describing the current state.
    pub fn to_config(&self) -> FullscreenConfig {
        FullscreenConfig {
            mode: self.mode,
            selected_monitors: self.save(),
        }
    }

    /// Platform indices of the explicitly selected monitors.
    pub fn selected_stable_indices(&self) -> BTreeSet<u32> {
        self.selection
            .all()
            .iter()
            .filter_map(|&pos| self.catalog.get(pos))
            .map(|monitor| monitor.stable_index)
            .collect()
    }

    /// Select exactly the monitors with the given platform indices.
    ///
    /// Returns the platform indices that match no monitor.
    pub fn set_stable_indices(&mut self, stable: &BTreeSet<u32>) -> ArrangementResult<Vec<u32>> {
        let mut unknown = Vec::new();
        let mut positions = BTreeSet::new();

        for &index in stable {
            match self.catalog.position_of_stable(index) {
                Some(pos) => {
                    positions.insert(pos);
                }
                None => unknown.push(index),
            }
        }

        if !unknown.is_empty() {
            tracing::warn!(?unknown, "Ignoring unknown platform monitor indices");
        }
        self.selection.replace(positions)?;
        Ok(unknown)
    }

    /// Fail with `IndexOutOfRange` unless `pos` names a monitor.
    pub fn check(&self, pos: usize) -> Result<(), ArrangementError> {
        self.catalog.check(pos)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row_of_three() -> Arrangement {
        Arrangement::from_displays(vec![
            DisplayInfo::new(0, Rect::new(1920, 0, 1920, 1080)).with_name("DP-1"),
            DisplayInfo::new(1, Rect::new(0, 0, 1920, 1080)).with_name("DP-2"),
            DisplayInfo::new(2, Rect::new(3840, 0, 1920, 1080)),
        ])
    }

    #[test]
    fn test_delegate_queries() {
        let arrangement = row_of_three();
        assert_eq!(arrangement.count(), 3);
        assert_eq!(arrangement.dimensions(0).unwrap(), Rect::new(0, 0, 1920, 1080));
        assert_eq!(arrangement.description(0).unwrap(), "DP-2 (1920x1080+0+0)");
        assert_eq!(arrangement.description(2).unwrap(), "1920x1080+3840+0");
        assert!(arrangement.dimensions(3).is_err());
        assert_eq!((arrangement.width(), arrangement.height()), (5760, 1080));
    }

    #[test]
    fn test_gap_is_required_and_bounds_cover_it() {
        let mut arrangement = row_of_three();
        arrangement.set(0, true).unwrap();
        arrangement.set(2, true).unwrap();

        assert_eq!(arrangement.is_required(1), Ok(true));
        assert!(arrangement.has_required());
        assert_eq!(arrangement.active(), BTreeSet::from([0, 1, 2]));
        assert_eq!(
            arrangement.frame_buffer_dimensions(),
            Rect::new(0, 0, 5760, 1080)
        );
        assert_eq!(arrangement.left(), Some(1));
        assert_eq!(arrangement.right(), Some(2));
        assert_eq!(arrangement.top(), Some(1));
        assert_eq!(arrangement.bottom(), Some(1));
    }

    #[test]
    fn test_current_mode_has_no_frame_buffer() {
        let mut arrangement = row_of_three();
        arrangement.set(0, true).unwrap();
        arrangement.set_mode(FullscreenMode::Current);

        assert_eq!(arrangement.frame_buffer_dimensions(), Rect::default());
        assert_eq!(arrangement.top(), None);
        assert_eq!(arrangement.primary(), None);
    }

    #[test]
    fn test_all_mode_selects_everything() {
        let mut arrangement = row_of_three();
        arrangement.set_mode(FullscreenMode::All);

        for pos in 0..3 {
            assert_eq!(arrangement.is_selected(pos), Ok(true));
            assert_eq!(arrangement.is_required(pos), Ok(false));
        }
        assert!(arrangement.is_selected(3).is_err());
        assert_eq!(
            arrangement.frame_buffer_dimensions(),
            Rect::new(0, 0, 5760, 1080)
        );
        assert_eq!(arrangement.save(), "");
    }

    #[test]
    fn test_primary_prefers_platform_zero() {
        let mut arrangement = row_of_three();
        assert_eq!(arrangement.primary(), None);

        arrangement.set(2, true).unwrap();
        assert_eq!(arrangement.primary(), Some(2));

        // Platform index 0 sits at catalog position 1.
        arrangement.set(1, true).unwrap();
        assert_eq!(arrangement.primary(), Some(0));

        arrangement.set(1, false).unwrap();
        arrangement.set(0, true).unwrap();
        // Position 1 is now required and still counts.
        assert_eq!(arrangement.primary(), Some(0));
    }

    #[test]
    fn test_set_indices_strategies() {
        let mut arrangement = row_of_three();

        let report = arrangement.set_indices("1, 3").unwrap();
        assert!(report.is_clean());
        assert_eq!(arrangement.save(), "1,3");

        let report = arrangement.set_indices("2,9").unwrap();
        assert_eq!(report.rejected, vec![8]);
        assert_eq!(arrangement.save(), "2");

        assert!(arrangement.set_indices("2,x").is_err());
        assert_eq!(arrangement.save(), "2");

        arrangement.set_indices("all").unwrap();
        assert_eq!(arrangement.mode(), FullscreenMode::All);
        assert_eq!(arrangement.save(), "2");
    }

    #[test]
    fn test_apply_config_is_all_or_nothing_on_syntax_errors() {
        let mut arrangement = row_of_three();
        arrangement.set(1, true).unwrap();

        let bad = FullscreenConfig {
            mode: FullscreenMode::All,
            selected_monitors: "1,a".to_string(),
        };
        assert!(arrangement.apply_config(&bad).is_err());
        assert_eq!(arrangement.mode(), FullscreenMode::Selected);
        assert_eq!(arrangement.save(), "2");

        let good = FullscreenConfig {
            mode: FullscreenMode::Current,
            selected_monitors: "3".to_string(),
        };
        arrangement.apply_config(&good).unwrap();
        assert_eq!(arrangement.to_config(), good);
    }

    #[test]
    fn test_stable_index_mapping() {
        let mut arrangement = row_of_three();
        let unknown = arrangement
            .set_stable_indices(&BTreeSet::from([0, 2, 5]))
            .unwrap();
        assert_eq!(unknown, vec![5]);
        assert_eq!(arrangement.save(), "2,3");
        assert_eq!(arrangement.selected_stable_indices(), BTreeSet::from([0, 2]));

        let names: Vec<String> = arrangement
            .selected_monitors()
            .iter()
            .map(|m| m.description())
            .collect();
        assert_eq!(names, vec!["DP-1 (1920x1080+1920+0)", "1920x1080+3840+0"]);
    }

    #[test]
    fn test_empty_topology_degrades() {
        let arrangement = Arrangement::from_displays(Vec::new());
        assert_eq!(arrangement.count(), 0);
        assert_eq!(arrangement.frame_buffer_dimensions(), Rect::default());
        assert_eq!(
            arrangement.is_required(0),
            Err(ArrangementError::IndexOutOfRange { index: 0, count: 0 })
        );
        assert_eq!(arrangement.primary(), None);
        assert_eq!(arrangement.left(), None);
    }

    #[test]
    fn test_default_matches_degraded_arrangement() {
        let default = Arrangement::default();
        let degraded = Arrangement::from_displays(Vec::new());

        assert_eq!(default.mode(), FullscreenMode::Selected);
        assert_eq!(default.mode(), degraded.mode());
        assert_eq!(default.count(), degraded.count());
        assert_eq!(default.selection(), degraded.selection());
    }
}
