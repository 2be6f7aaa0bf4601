use std::path::PathBuf;

use clap::{Parser, Subcommand};
use pb_core::TargetPlatform;

/// Inspect pickled clipboard format names and drive the live clipboard
/// through the resolution engine.
#[derive(Debug, Parser)]
#[command(name = "pickleboard", version, about)]
pub struct Cli {
    /// TOML configuration file
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Naming platform (macos, ios, windows, linux, chromeos, android,
    /// fuchsia, test, headless); overrides the configuration
    #[arg(long, global = true)]
    pub platform: Option<TargetPlatform>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Print the pickled native format name for a content type
    Encode { content_type: String },

    /// Print the content type behind a pickled native format name
    Decode { name: String },

    /// Read the clipboard and print the resolved item as JSON
    Read {
        /// Content type to read in pickled form (repeatable)
        #[arg(long = "unsanitize", value_name = "TYPE")]
        unsanitize: Vec<String>,

        /// Run without a user gesture
        #[arg(long)]
        no_gesture: bool,
    },

    /// Replace the clipboard with one item of `type=text` representations
    Write {
        #[arg(value_name = "TYPE=TEXT", required = true)]
        representations: Vec<String>,

        /// Content type to write in pickled form (repeatable)
        #[arg(long = "unsanitize", value_name = "TYPE")]
        unsanitize: Vec<String>,

        /// Run without a user gesture
        #[arg(long)]
        no_gesture: bool,
    },
}
