//! Frame-buffer bounds of a set of monitors.
//!
//! The box is seeded from the lowest catalog position in the set and
//! widened by scanning the rest in ascending order. Each edge remembers
//! which monitor pushed it furthest; comparisons are strict, so on an
//! exact tie the monitor recorded first keeps the edge.

use std::collections::BTreeSet;

use monspan_platform_core::Rect;

use crate::catalog::Catalog;

/// One side of the frame buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Edge {
    Top,
    Bottom,
    Left,
    Right,
}

impl Edge {
    pub const ALL: [Edge; 4] = [Edge::Top, Edge::Bottom, Edge::Left, Edge::Right];

    pub fn name(&self) -> &'static str {
        match self {
            Edge::Top => "top",
            Edge::Bottom => "bottom",
            Edge::Left => "left",
            Edge::Right => "right",
        }
    }
}

/// Bounding rectangle of a monitor set, with the limiting monitor per edge.
///
/// Edge values are virtual-desktop coordinates; `bottom_y` and `right_x`
/// are exclusive. Limits are catalog positions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoundingBox {
    pub top_y: i32,
    pub bottom_y: i32,
    pub left_x: i32,
    pub right_x: i32,

    pub top: usize,
    pub bottom: usize,
    pub left: usize,
    pub right: usize,
}

impl BoundingBox {
    fn seed(pos: usize, rect: &Rect) -> Self {
        Self {
            top_y: rect.y,
            bottom_y: rect.bottom(),
            left_x: rect.x,
            right_x: rect.right(),
            top: pos,
            bottom: pos,
            left: pos,
            right: pos,
        }
    }

    fn extend(&mut self, pos: usize, rect: &Rect) {
        if rect.y < self.top_y {
            self.top = pos;
            self.top_y = rect.y;
        }

        if rect.bottom() > self.bottom_y {
            self.bottom = pos;
            self.bottom_y = rect.bottom();
        }

        if rect.x < self.left_x {
            self.left = pos;
            self.left_x = rect.x;
        }

        if rect.right() > self.right_x {
            self.right = pos;
            self.right_x = rect.right();
        }
    }

    /// The box as `(x, y, width, height)`.
    pub fn rect(&self) -> Rect {
        Rect::from_edges(self.left_x, self.top_y, self.right_x, self.bottom_y)
    }

    /// Catalog position of the monitor limiting `edge`.
    pub fn limit(&self, edge: Edge) -> usize {
        match edge {
            Edge::Top => self.top,
            Edge::Bottom => self.bottom,
            Edge::Left => self.left,
            Edge::Right => self.right,
        }
    }

    /// Coordinate of `edge`.
    pub fn edge(&self, edge: Edge) -> i32 {
        match edge {
            Edge::Top => self.top_y,
            Edge::Bottom => self.bottom_y,
            Edge::Left => self.left_x,
            Edge::Right => self.right_x,
        }
    }

    /// Whether `rect` overlaps the open interior of the box.
    ///
    /// A rectangle that only touches an edge does not overlap.
    pub fn overlaps_interior(&self, rect: &Rect) -> bool {
        rect.x < self.right_x
            && rect.right() > self.left_x
            && rect.y < self.bottom_y
            && rect.bottom() > self.top_y
    }
}

/// Compute the bounding box of `active` catalog positions.
///
/// Positions are deduplicated and scanned in ascending order whatever
/// order they arrive in. Positions outside the catalog are ignored.
/// Returns `None` when no valid position remains.
pub fn compute<I>(catalog: &Catalog, active: I) -> Option<BoundingBox>
where
    I: IntoIterator<Item = usize>,
{
    let ordered: BTreeSet<usize> = active.into_iter().collect();
    let mut monitors = ordered
        .into_iter()
        .filter_map(|pos| catalog.get(pos).map(|m| (pos, m.rect)));

    let (first, rect) = monitors.next()?;
    let mut bbox = BoundingBox::seed(first, &rect);
    for (pos, rect) in monitors {
        bbox.extend(pos, &rect);
    }

    Some(bbox)
}

/// Bounding box of `selected ∪ required`.
pub fn compute_union(
    catalog: &Catalog,
    selected: &BTreeSet<usize>,
    required: &BTreeSet<usize>,
) -> Option<BoundingBox> {
    compute(catalog, selected.union(required).copied())
}

#[cfg(test)]
mod tests {
    use super::*;
    use monspan_platform_core::DisplayInfo;

    fn catalog(rects: &[Rect]) -> Catalog {
        Catalog::build(
            rects
                .iter()
                .enumerate()
                .map(|(i, r)| DisplayInfo::new(i as u32, *r)),
        )
        .unwrap()
    }

    #[test]
    fn test_empty_active_set() {
        let cat = catalog(&[Rect::new(0, 0, 100, 100)]);
        assert_eq!(compute(&cat, Vec::new()), None);
        assert_eq!(compute(&cat, vec![5]), None);
    }

    #[test]
    fn test_single_monitor_limits_every_edge() {
        let cat = catalog(&[Rect::new(10, 20, 100, 50)]);
        let bbox = compute(&cat, [0]).unwrap();
        assert_eq!(bbox.rect(), Rect::new(10, 20, 100, 50));
        for edge in Edge::ALL {
            assert_eq!(bbox.limit(edge), 0);
        }
    }

    #[test]
    fn test_edges_track_limiting_monitor() {
        // Positions: 0 = tall left, 1 = short top-right, 2 = low right.
        let cat = catalog(&[
            Rect::new(0, 100, 1000, 800),
            Rect::new(1000, 0, 1000, 500),
            Rect::new(1000, 500, 1200, 600),
        ]);
        let bbox = compute(&cat, [0, 1, 2]).unwrap();

        assert_eq!(bbox.rect(), Rect::new(0, 0, 2200, 1100));
        assert_eq!(bbox.limit(Edge::Top), 1);
        assert_eq!(bbox.limit(Edge::Bottom), 2);
        assert_eq!(bbox.limit(Edge::Left), 0);
        assert_eq!(bbox.limit(Edge::Right), 2);
        assert_eq!(bbox.edge(Edge::Bottom), 1100);
    }

    #[test]
    fn test_first_writer_wins_on_ties() {
        let cat = catalog(&[Rect::new(0, 0, 100, 100), Rect::new(100, 0, 100, 100)]);
        let forward = compute(&cat, [0, 1]).unwrap();
        let backward = compute(&cat, [1, 0]).unwrap();

        assert_eq!(forward, backward);
        assert_eq!(forward.limit(Edge::Top), 0);
        assert_eq!(forward.limit(Edge::Bottom), 0);
        assert_eq!(forward.limit(Edge::Right), 1);
    }

    #[test]
    fn test_interior_overlap() {
        let cat = catalog(&[Rect::new(0, 0, 100, 100)]);
        let bbox = compute(&cat, [0]).unwrap();
        assert!(bbox.overlaps_interior(&Rect::new(40, 40, 10, 10)));
        assert!(bbox.overlaps_interior(&Rect::new(90, 90, 50, 50)));
        // Sharing an edge span without covering a corner still overlaps.
        assert!(bbox.overlaps_interior(&Rect::new(20, 0, 50, 100)));

        assert!(!bbox.overlaps_interior(&Rect::new(100, 0, 50, 100)));
        assert!(!bbox.overlaps_interior(&Rect::new(0, 100, 100, 50)));
        assert!(!bbox.overlaps_interior(&Rect::new(-50, -50, 50, 50)));
    }

    #[test]
    fn test_union_includes_required() {
        let cat = catalog(&[
            Rect::new(0, 0, 100, 100),
            Rect::new(100, 0, 100, 200),
            Rect::new(200, 0, 100, 100),
        ]);
        let selected = BTreeSet::from([0, 2]);
        let required = BTreeSet::from([1]);
        let bbox = compute_union(&cat, &selected, &required).unwrap();
        assert_eq!(bbox.rect(), Rect::new(0, 0, 300, 200));
        assert_eq!(bbox.limit(Edge::Bottom), 1);
    }
}
