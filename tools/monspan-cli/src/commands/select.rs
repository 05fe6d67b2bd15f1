//! Edit the persisted monitor selection.

use std::path::{Path, PathBuf};

use monspan_arrangement::Arrangement;
use monspan_common::config::{AppConfig, FullscreenMode};
use monspan_common::error::{MonspanError, MonspanResult};

/// Requested changes to the saved selection.
#[derive(Debug, Default)]
pub struct Edit {
    /// 1-based positions to toggle, in order.
    pub toggle: Vec<usize>,
    pub all: bool,
    pub clear: bool,
    /// Mode to store, overriding the one implied by the other edits.
    pub mode: Option<FullscreenMode>,
}

pub fn run(
    mut config: AppConfig,
    config_path: &Path,
    file: Option<PathBuf>,
    edit: Edit,
    dry_run: bool,
) -> anyhow::Result<()> {
    let mut arrangement = super::load_arrangement(&config, file)?;
    apply_edit(&mut arrangement, &edit)?;

    config.fullscreen = arrangement.to_config();
    println!("Mode: {}", config.fullscreen.mode.name());
    println!("Selection: {:?}", config.fullscreen.selected_monitors);
    if arrangement.has_required() {
        let required: Vec<String> = arrangement
            .required()
            .iter()
            .map(|pos| (pos + 1).to_string())
            .collect();
        println!("Also required: {}", required.join(","));
    }

    if dry_run {
        println!("\nDry run; configuration not saved.");
        return Ok(());
    }

    config.save_to(config_path)?;
    tracing::info!(path = %config_path.display(), "Saved monitor selection");
    println!("\nSaved to {}", config_path.display());

    Ok(())
}

/// Apply `edit` on top of the arrangement's current selection.
pub fn apply_edit(arrangement: &mut Arrangement, edit: &Edit) -> MonspanResult<()> {
    if edit.all {
        arrangement.set_mode(FullscreenMode::All);
        return Ok(());
    }

    if edit.clear {
        arrangement.clear();
    }

    for &position in &edit.toggle {
        let pos = position
            .checked_sub(1)
            .ok_or_else(|| MonspanError::selection("Monitor positions start at 1"))?;
        arrangement.toggle(pos)?;
    }

    if let Some(mode) = edit.mode {
        arrangement.set_mode(mode);
    } else if edit.clear || !edit.toggle.is_empty() {
        arrangement.set_mode(FullscreenMode::Selected);
    }

    Ok(())
}
