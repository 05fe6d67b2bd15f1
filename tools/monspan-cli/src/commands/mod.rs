pub mod check;
pub mod layout;
pub mod parse;
pub mod resolve;
pub mod select;

use std::path::PathBuf;

use monspan_arrangement::Arrangement;
use monspan_common::config::AppConfig;
use monspan_common::error::{MonspanError, MonspanResult};
use monspan_platform_core::StaticLayout;

/// Load the layout named on the command line or in the config.
pub fn load_layout(config: &AppConfig, file: Option<PathBuf>) -> MonspanResult<StaticLayout> {
    let path = file
        .or_else(|| config.layout_file.clone())
        .ok_or_else(|| MonspanError::config("No layout file given and none configured"))?;

    if !path.exists() {
        return Err(MonspanError::FileNotFound { path });
    }

    StaticLayout::load(&path)
        .map_err(|e| MonspanError::layout(format!("Failed to load layout: {e}")))
}

/// Build an arrangement with the saved fullscreen settings applied.
///
/// The configured mode holds even when the saved selection string does
/// not parse.
pub fn load_arrangement(config: &AppConfig, file: Option<PathBuf>) -> MonspanResult<Arrangement> {
    let layout = load_layout(config, file)?;
    let mut arrangement = Arrangement::from_source(&layout);
    arrangement.set_mode(config.fullscreen.mode);

    if let Err(e) = arrangement.apply_config(&config.fullscreen) {
        tracing::warn!(
            selection = %config.fullscreen.selected_monitors,
            "Ignoring saved monitor selection: {e}"
        );
    }

    Ok(arrangement)
}

/// Render a platform index for display.
pub fn stable_label(index: Option<u32>) -> String {
    index.map_or_else(|| "-".to_string(), |i| format!("#{i}"))
}
