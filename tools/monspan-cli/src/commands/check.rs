//! Show the configuration in use.

use std::path::Path;

use monspan_common::config::AppConfig;

pub fn run(config: &AppConfig, config_path: &Path) -> anyhow::Result<()> {
    println!("Monspan Configuration");
    println!("{}", "=".repeat(50));

    if config_path.exists() {
        println!("[OK] Config file: {}", config_path.display());
    } else {
        println!("[--] Config file: {} (not found, using defaults)", config_path.display());
    }

    match &config.layout_file {
        Some(path) if path.exists() => println!("[OK] Layout file: {}", path.display()),
        Some(path) => println!("[WARN] Layout file: {} (missing)", path.display()),
        None => println!("[--] Layout file: not configured"),
    }

    let selection = &config.fullscreen.selected_monitors;
    match monspan_arrangement::indices::parse(selection) {
        Ok(parsed) => println!("[OK] Selected monitors: \"{parsed}\""),
        Err(e) => println!("[WARN] Selected monitors {selection:?}: {e}"),
    }

    println!();
    println!("{}", serde_json::to_string_pretty(config)?);

    Ok(())
}
