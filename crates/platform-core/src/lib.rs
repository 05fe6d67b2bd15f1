//! Monspan platform core contracts.
//!
//! This crate contains the display geometry types shared by the
//! arrangement engine and its front-ends, without coupling to a concrete
//! display server. Display enumeration itself lives behind
//! [`DisplaySource`].

use serde::{Deserialize, Serialize};

pub mod source;

pub use source::*;

/// An axis-aligned rectangle in virtual-desktop pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Rect {
    /// Left edge.
    pub x: i32,
    /// Top edge.
    pub y: i32,
    pub width: u32,
    pub height: u32,
}

impl Rect {
    pub const fn new(x: i32, y: i32, width: u32, height: u32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Build a rectangle from its four edges. Inverted edges collapse to zero size.
    pub fn from_edges(left: i32, top: i32, right: i32, bottom: i32) -> Self {
        Self {
            x: left,
            y: top,
            width: span(left, right),
            height: span(top, bottom),
        }
    }

    /// Exclusive right edge, clamped to `i32::MAX`.
    pub fn right(&self) -> i32 {
        far_edge(self.x, self.width)
    }

    /// Exclusive bottom edge, clamped to `i32::MAX`.
    pub fn bottom(&self) -> i32 {
        far_edge(self.y, self.height)
    }

    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }
}

fn far_edge(origin: i32, extent: u32) -> i32 {
    let edge = i64::from(origin) + i64::from(extent);
    i32::try_from(edge).unwrap_or(i32::MAX)
}

fn span(from: i32, to: i32) -> u32 {
    // An i32 difference always fits in u32 once negatives are clamped.
    u32::try_from((i64::from(to) - i64::from(from)).max(0)).unwrap_or(u32::MAX)
}

impl std::fmt::Display for Rect {
    /// X geometry notation, `WxH+X+Y`.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}x{}+{}+{}", self.width, self.height, self.x, self.y)
    }
}

/// A display as reported by the platform.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DisplayInfo {
    /// Platform enumeration order.
    pub stable_index: u32,
    /// Geometry in the virtual desktop.
    pub rect: Rect,
    /// Output name (for example "DP-1"), when the platform exposes one.
    #[serde(default)]
    pub name: Option<String>,
}

impl DisplayInfo {
    pub fn new(stable_index: u32, rect: Rect) -> Self {
        Self {
            stable_index,
            rect,
            name: None,
        }
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn description(&self) -> String {
        describe_display(&self.rect, self.name.as_deref())
    }
}

/// Human-readable display description.
///
/// `"DP-1 (1920x1080+0+0)"` when a name is known, otherwise the bare
/// geometry `"1920x1080+0+0"`.
pub fn describe_display(rect: &Rect, name: Option<&str>) -> String {
    match name {
        Some(name) if !name.is_empty() => format!("{name} ({rect})"),
        _ => rect.to_string(),
    }
}

/// Compute virtual desktop bounds that include all given displays.
/// Returns `None` when there are no displays.
pub fn virtual_desktop_bounds(displays: &[DisplayInfo]) -> Option<Rect> {
    let min_x = displays.iter().map(|d| d.rect.x).min()?;
    let min_y = displays.iter().map(|d| d.rect.y).min()?;
    let max_x = displays.iter().map(|d| d.rect.right()).max()?;
    let max_y = displays.iter().map(|d| d.rect.bottom()).max()?;

    Some(Rect::from_edges(min_x, min_y, max_x, max_y))
}
