//! Display enumeration seam.
//!
//! The arrangement engine never talks to a display server. Platform
//! back-ends implement [`DisplaySource`]; [`StaticLayout`] is a fixed
//! layout loaded from JSON, used by the CLI and by tests.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::{DisplayInfo, Rect};

/// Something that can report the connected displays.
pub trait DisplaySource {
    /// Number of connected displays.
    fn display_count(&self) -> usize;

    /// Geometry of the display with the given platform index.
    fn display_rect(&self, index: usize) -> Option<Rect>;

    /// Output name for a display with exactly this geometry.
    fn display_name(&self, _rect: &Rect) -> Option<String> {
        None
    }
}

/// Snapshot every display of `source` in platform order.
///
/// Indices the source cannot resolve are skipped.
pub fn enumerate(source: &dyn DisplaySource) -> Vec<DisplayInfo> {
    (0..source.display_count())
        .filter_map(|index| {
            let Some(rect) = source.display_rect(index) else {
                tracing::warn!(index, "Display vanished during enumeration");
                return None;
            };
            let stable_index = u32::try_from(index).ok()?;
            Some(DisplayInfo {
                stable_index,
                rect,
                name: source.display_name(&rect),
            })
        })
        .collect()
}

/// One display entry in a layout file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LayoutDisplay {
    pub x: i32,
    pub y: i32,
    pub width: u32,
    pub height: u32,
    #[serde(default)]
    pub name: Option<String>,
}

impl LayoutDisplay {
    pub fn rect(&self) -> Rect {
        Rect::new(self.x, self.y, self.width, self.height)
    }
}

/// A fixed display layout, in platform enumeration order.
///
/// ```json
/// { "displays": [ { "x": 0, "y": 0, "width": 1920, "height": 1080, "name": "DP-1" } ] }
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StaticLayout {
    pub displays: Vec<LayoutDisplay>,
}

impl StaticLayout {
    /// Layout of unnamed displays.
    pub fn from_rects(rects: impl IntoIterator<Item = Rect>) -> Self {
        Self {
            displays: rects
                .into_iter()
                .map(|r| LayoutDisplay {
                    x: r.x,
                    y: r.y,
                    width: r.width,
                    height: r.height,
                    name: None,
                })
                .collect(),
        }
    }

    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Load a layout file.
    pub fn load(path: &Path) -> Result<Self, LayoutError> {
        let content = std::fs::read_to_string(path).map_err(|e| LayoutError::Io {
            path: path.to_path_buf(),
            source: e,
        })?;
        let layout = Self::from_json(&content).map_err(|e| LayoutError::Parse {
            path: path.to_path_buf(),
            source: e,
        })?;
        tracing::debug!(
            path = %path.display(),
            displays = layout.displays.len(),
            "Loaded display layout"
        );
        Ok(layout)
    }
}

impl DisplaySource for StaticLayout {
    fn display_count(&self) -> usize {
        self.displays.len()
    }

    fn display_rect(&self, index: usize) -> Option<Rect> {
        self.displays.get(index).map(LayoutDisplay::rect)
    }

    fn display_name(&self, rect: &Rect) -> Option<String> {
        self.displays
            .iter()
            .find(|d| d.rect() == *rect)
            .and_then(|d| d.name.clone())
    }
}

/// Errors that can occur when loading a layout file.
#[derive(Debug, thiserror::Error)]
pub enum LayoutError {
    #[error("I/O error at {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Parse error in {path}: {source}")]
    Parse {
        path: PathBuf,
        source: serde_json::Error,
    },
}
