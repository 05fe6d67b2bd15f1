//! List monitors in catalog order.

use std::path::PathBuf;

use monspan_arrangement::Catalog;
use monspan_common::config::AppConfig;
use monspan_common::error::MonspanError;
use monspan_platform_core::{enumerate, virtual_desktop_bounds};

pub fn run(config: &AppConfig, file: Option<PathBuf>) -> anyhow::Result<()> {
    let layout = super::load_layout(config, file)?;
    let displays = enumerate(&layout);

    let Some(bounds) = virtual_desktop_bounds(&displays) else {
        println!("No monitors in layout.");
        return Ok(());
    };

    let catalog = Catalog::build(displays).map_err(MonspanError::from)?;
    println!("Monitors: {}", catalog.len());
    for (pos, monitor) in catalog.iter().enumerate() {
        println!(
            "  {:>2}. [#{}] {}",
            pos + 1,
            monitor.stable_index,
            monitor.description()
        );
    }

    let (width, height) = catalog.extent();
    println!();
    println!("Virtual desktop: {bounds}");
    println!("Extent from origin: {width}x{height}");

    Ok(())
}
