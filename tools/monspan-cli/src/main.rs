//! Monspan CLI: inspect monitor layouts and edit the fullscreen selection.
//!
//! Usage:
//!   monspan layout [FILE]      List monitors in catalog order
//!   monspan resolve [FILE]     Show the frame buffer for a selection
//!   monspan parse <TEXT>       Validate a selection string
//!   monspan select [FILE]      Edit and save the persisted selection
//!   monspan check              Show the configuration in use

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use monspan_common::config::{config_file_path, AppConfig, FullscreenMode};

mod commands;

#[derive(Parser)]
#[command(
    name = "monspan",
    about = "Multi-monitor fullscreen arrangement and selection",
    version,
    author
)]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Configuration file (defaults to $XDG_CONFIG_HOME/monspan/config.json)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List monitors in catalog order
    Layout {
        /// Layout JSON file (defaults to `layout_file` from the config)
        file: Option<PathBuf>,
    },

    /// Resolve required monitors and the frame buffer for a selection
    Resolve {
        /// Layout JSON file (defaults to `layout_file` from the config)
        file: Option<PathBuf>,

        /// Selection string such as "1,3" or "all" (defaults to the saved one)
        #[arg(short, long)]
        select: Option<String>,
    },

    /// Validate a selection string and print its canonical form
    Parse {
        /// Selection string
        text: String,
    },

    /// Edit the persisted monitor selection
    Select {
        /// Layout JSON file (defaults to `layout_file` from the config)
        file: Option<PathBuf>,

        /// Toggle the monitor at this 1-based position (repeatable)
        #[arg(short, long)]
        toggle: Vec<usize>,

        /// Use every monitor
        #[arg(long, conflicts_with_all = ["toggle", "clear"])]
        all: bool,

        /// Start from an empty selection
        #[arg(long)]
        clear: bool,

        /// Fullscreen mode to store: current, selected or all
        #[arg(short, long, conflicts_with = "all")]
        mode: Option<FullscreenMode>,

        /// Print the result without saving it
        #[arg(long)]
        dry_run: bool,
    },

    /// Show the configuration file and fullscreen settings
    Check,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let config_path = cli.config.unwrap_or_else(config_file_path);
    let config = AppConfig::load_from(&config_path);

    let mut logging = config.logging.clone();
    if cli.verbose {
        logging.level = "debug".to_string();
    }
    monspan_common::logging::init_logging(&logging);

    match cli.command {
        Commands::Layout { file } => commands::layout::run(&config, file),
        Commands::Resolve { file, select } => commands::resolve::run(&config, file, select),
        Commands::Parse { text } => commands::parse::run(&text),
        Commands::Select {
            file,
            toggle,
            all,
            clear,
            mode,
            dry_run,
        } => commands::select::run(
            config,
            &config_path,
            file,
            commands::select::Edit {
                toggle,
                all,
                clear,
                mode,
            },
            dry_run,
        ),
        Commands::Check => commands::check::run(&config, &config_path),
    }
}
