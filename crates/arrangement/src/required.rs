//! Monitors required to keep the selection rectangular.
//!
//! A fullscreen frame buffer spanning several monitors must be a
//! rectangle. When the selection's bounding box overlaps a monitor the
//! user did not pick, that monitor has to be captured as well, otherwise
//! the frame buffer would have a hole or a foreign overlap.

use std::collections::BTreeSet;

use crate::bounds;
use crate::catalog::Catalog;
use crate::error::ArrangementResult;

/// Unselected positions overlapping the interior of the bounding box of
/// `selected`.
///
/// Monitors that only touch the box from outside are left alone. Selected
/// monitors are never required, and nothing is required when nothing is
/// selected.
pub fn resolve(catalog: &Catalog, selected: &BTreeSet<usize>) -> BTreeSet<usize> {
    let Some(bbox) = bounds::compute(catalog, selected.iter().copied()) else {
        return BTreeSet::new();
    };

    catalog
        .iter()
        .enumerate()
        .filter(|(pos, _)| !selected.contains(pos))
        .filter(|(_, monitor)| bbox.overlaps_interior(&monitor.rect))
        .map(|(pos, _)| pos)
        .collect()
}

/// Whether the monitor at `pos` is required by `selected`.
pub fn is_required(
    catalog: &Catalog,
    selected: &BTreeSet<usize>,
    pos: usize,
) -> ArrangementResult<bool> {
    catalog.check(pos)?;
    Ok(resolve(catalog, selected).contains(&pos))
}

/// Whether `selected` requires any extra monitor.
pub fn has_required(catalog: &Catalog, selected: &BTreeSet<usize>) -> bool {
    !resolve(catalog, selected).is_empty()
}
