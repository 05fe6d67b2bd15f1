//! Resolve required monitors and the frame buffer for a selection.

use std::path::PathBuf;

use monspan_arrangement::{Arrangement, Edge};
use monspan_common::config::{AppConfig, FullscreenMode};
use monspan_common::error::MonspanError;

use super::stable_label;

pub fn run(
    config: &AppConfig,
    file: Option<PathBuf>,
    select: Option<String>,
) -> anyhow::Result<()> {
    let mut arrangement = super::load_arrangement(config, file)?;

    if let Some(text) = select {
        arrangement.set_mode(FullscreenMode::Selected);
        let report = arrangement.set_indices(&text).map_err(MonspanError::from)?;
        for index in &report.rejected {
            println!(
                "  warning: position {} does not name a monitor",
                i64::from(*index) + 1
            );
        }
    }

    print_resolution(&arrangement);
    Ok(())
}

fn print_resolution(arrangement: &Arrangement) {
    println!("Mode: {}", arrangement.mode().name());
    if arrangement.mode() == FullscreenMode::Current {
        println!("Fullscreen follows the viewer window; no monitors are combined.");
        return;
    }

    let selected = arrangement.effective_selection();
    let required = arrangement.required();

    println!("Selected:");
    for pos in &selected {
        print_monitor(arrangement, *pos);
    }
    if selected.is_empty() {
        println!("  (none)");
    }

    if !required.is_empty() {
        println!("Required:");
        for pos in &required {
            print_monitor(arrangement, *pos);
        }
    }

    println!("Frame buffer: {}", arrangement.frame_buffer_dimensions());
    for edge in Edge::ALL {
        println!("  {:<6} {}", edge.name(), stable_label(arrangement.limit(edge)));
    }
    println!("Primary: {}", stable_label(arrangement.primary()));
}

fn print_monitor(arrangement: &Arrangement, pos: usize) {
    if let Some(monitor) = arrangement.catalog().get(pos) {
        println!(
            "  {:>2}. [#{}] {}",
            pos + 1,
            monitor.stable_index,
            monitor.description()
        );
    }
}
