use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "watchcover")]
#[command(author, version, about = "Resolve playback telemetry into watched coverage")]
pub struct Cli {
    /// Path to config file
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Resolve a telemetry timeline into valid and invalid coverage
    Resolve {
        /// JSON file holding an array of {position, received_at} events
        #[arg(required = true)]
        timeline: PathBuf,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Resolve a timeline and decide whether the viewing is complete
    Check {
        /// JSON file holding an array of {position, received_at} events
        #[arg(required = true)]
        timeline: PathBuf,

        /// Total duration of the video in seconds
        #[arg(short, long)]
        duration: f64,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Validate configuration file
    Validate {
        /// Config file to validate (uses default if not specified)
        config: Option<PathBuf>,
    },

    /// Write a config file populated with the default settings
    InitConfig {
        /// Where to write the config
        #[arg(default_value = "watchcover.toml")]
        path: PathBuf,

        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },

    /// Display version information
    Version,
}
