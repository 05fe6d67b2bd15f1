//! Validate a selection string.

use monspan_arrangement::indices::{self, ParsedSelection};
use monspan_common::error::MonspanError;

pub fn run(text: &str) -> anyhow::Result<()> {
    let parsed = indices::parse(text).map_err(MonspanError::from)?;

    match &parsed {
        ParsedSelection::All => println!("Selection: every monitor"),
        ParsedSelection::Indices(values) => {
            println!("Selection: {} monitor(s)", values.len());
            if values.iter().any(|&v| v < 0) {
                println!("  warning: position 0 never names a monitor");
            }
        }
    }
    println!("Canonical: {parsed}");

    Ok(())
}
