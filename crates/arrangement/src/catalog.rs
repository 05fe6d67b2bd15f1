//! Monitor catalog: displays in their persisted order.
//!
//! Monitors are sorted by their top-left corner, smallest `x` first and
//! smallest `y` on a tie. Config indices refer to this order (1-based),
//! not to the platform enumeration order kept in
//! [`Monitor::stable_index`].
//!
//! ```text
//!  +---+ +---+ +---+          +---+
//!  | 1 | | 2 | | 3 |          | 2 |
//!  +---+ +---+ +---+    +---+ +---+ +---+
//!        +---+          | 1 | | 3 | | 4 |
//!        | 4 |          +---+ +---+ +---+
//!        +---+
//! ```
//!
//! The left example reads `4` last because a shared `x` falls back to `y`;
//! the right example reads `2` before `3` for the same reason.

use std::cmp::Ordering;
use std::ops::Range;

use monspan_platform_core::{describe_display, enumerate, DisplayInfo, DisplaySource, Rect};

use crate::error::{ArrangementError, ArrangementResult};

/// A display captured in a catalog snapshot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Monitor {
    /// Platform enumeration order.
    pub stable_index: u32,
    /// Geometry in virtual-desktop pixels.
    pub rect: Rect,
    /// Output name, when the platform reported one.
    pub display_name: Option<String>,
}

impl Monitor {
    pub fn description(&self) -> String {
        describe_display(&self.rect, self.display_name.as_deref())
    }
}

impl From<DisplayInfo> for Monitor {
    fn from(info: DisplayInfo) -> Self {
        Self {
            stable_index: info.stable_index,
            rect: info.rect,
            display_name: info.name,
        }
    }
}

/// Catalog ordering: `x` ascending, then `y` ascending.
///
/// Monitors at the same corner compare equal; their relative order is
/// whatever the stable sort leaves.
pub fn compare_positions(a: &Monitor, b: &Monitor) -> Ordering {
    a.rect.x.cmp(&b.rect.x).then(a.rect.y.cmp(&b.rect.y))
}

/// Sorted, immutable snapshot of the display topology.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Catalog {
    monitors: Vec<Monitor>,
}

impl Catalog {
    /// Build a catalog from displays in any order.
    pub fn build<I>(displays: I) -> ArrangementResult<Self>
    where
        I: IntoIterator<Item = DisplayInfo>,
    {
        let mut monitors: Vec<Monitor> = displays.into_iter().map(Monitor::from).collect();
        if monitors.is_empty() {
            return Err(ArrangementError::EmptyTopology);
        }

        monitors.sort_by(compare_positions);

        tracing::debug!(count = monitors.len(), "Built monitor catalog");
        Ok(Self { monitors })
    }

    /// Snapshot a display source and build a catalog from it.
    pub fn from_source(source: &dyn DisplaySource) -> ArrangementResult<Self> {
        Self::build(enumerate(source))
    }

    pub fn len(&self) -> usize {
        self.monitors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.monitors.is_empty()
    }

    /// Every valid catalog position.
    pub fn positions(&self) -> Range<usize> {
        0..self.monitors.len()
    }

    pub fn get(&self, pos: usize) -> Option<&Monitor> {
        self.monitors.get(pos)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Monitor> {
        self.monitors.iter()
    }

    /// Fail with `IndexOutOfRange` unless `pos` names a monitor.
    pub fn check(&self, pos: usize) -> ArrangementResult<()> {
        if pos < self.monitors.len() {
            Ok(())
        } else {
            Err(ArrangementError::IndexOutOfRange {
                index: pos,
                count: self.monitors.len(),
            })
        }
    }

    pub fn monitor(&self, pos: usize) -> ArrangementResult<&Monitor> {
        self.check(pos)?;
        Ok(&self.monitors[pos])
    }

    pub fn rect(&self, pos: usize) -> ArrangementResult<Rect> {
        self.monitor(pos).map(|m| m.rect)
    }

    pub fn description(&self, pos: usize) -> ArrangementResult<String> {
        self.monitor(pos).map(Monitor::description)
    }

    /// Catalog position of the monitor with the given platform index.
    pub fn position_of_stable(&self, stable_index: u32) -> Option<usize> {
        self.monitors
            .iter()
            .position(|m| m.stable_index == stable_index)
    }

    /// Size of the layout measured from the virtual-desktop origin.
    ///
    /// Returns `(max right edge, max bottom edge)`, clamped at zero.
    pub fn extent(&self) -> (u32, u32) {
        let width = self.monitors.iter().map(|m| m.rect.right()).max().unwrap_or(0);
        let height = self.monitors.iter().map(|m| m.rect.bottom()).max().unwrap_or(0);
        (
            u32::try_from(width).unwrap_or(0),
            u32::try_from(height).unwrap_or(0),
        )
    }
}

impl<'a> IntoIterator for &'a Catalog {
    type Item = &'a Monitor;
    type IntoIter = std::slice::Iter<'a, Monitor>;

    fn into_iter(self) -> Self::IntoIter {
        self.monitors.iter()
    }
}
