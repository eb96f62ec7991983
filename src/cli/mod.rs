//! CLI interface using clap.
//!
//! Provides command-line arguments and subcommands for the tool.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Issue Exporter - persist CI-triggered issue reports as JSON and Excel.
///
/// The CI trigger sets ISSUE_TITLE and ISSUE_BODY; `issue-exporter export`
/// writes both output files under the data directory.
#[derive(Parser, Debug)]
#[command(name = "issue-exporter")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose logging (use multiple times for more verbosity).
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Capture the issue from the environment and write the output files.
    Export {
        /// Issue title (overrides ISSUE_TITLE).
        #[arg(short, long)]
        title: Option<String>,

        /// Issue body (overrides ISSUE_BODY).
        #[arg(short, long)]
        body: Option<String>,

        /// Output directory (overrides the configured directory).
        #[arg(short, long)]
        dir: Option<PathBuf>,

        /// Which outputs to write: json, excel, or both.
        #[arg(short, long, default_value = "both")]
        format: String,
    },

    /// List previously exported records (summary table).
    List {
        /// Output directory to scan.
        #[arg(short, long)]
        dir: Option<PathBuf>,

        /// Maximum number of records to show.
        #[arg(short, long, default_value = "20")]
        limit: usize,
    },

    /// Show a stored record in detail.
    Show {
        /// Record stem (full or partial), e.g. 2024-03-09_Bug_Report.
        stem: String,

        /// Output directory to scan.
        #[arg(short, long)]
        dir: Option<PathBuf>,

        /// Display format: markdown, json, or table.
        #[arg(short, long, default_value = "markdown")]
        format: String,
    },

    /// Show the config file path and resolved output directory.
    Paths {
        /// Output directory override to resolve against.
        #[arg(short, long)]
        dir: Option<PathBuf>,
    },
}
