//! Issue Exporter - persist CI-triggered issue reports as files.
//!
//! The CI trigger hands an issue over as `ISSUE_TITLE` / `ISSUE_BODY`
//! environment variables; this tool captures them as a record and writes it
//! twice under a timestamped name: a JSON document and a one-row spreadsheet.
//!
//! QUICK START:
//!   issue-exporter export                    # Read env vars, write both files
//!   issue-exporter export -t "Bug" -b "..."  # Explicit title/body
//!   issue-exporter list                      # See exported records
//!   issue-exporter show 2024-03-09_Bug       # View one record
//!   issue-exporter paths                     # Show config + output locations

mod application;
mod cli;
mod domain;
mod infrastructure;

use clap::Parser;
use colored::Colorize;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use application::{
    export_record, format_list_summary, format_record_json, format_record_markdown,
    format_records_table, ExportOptions, FormatSelection, OutputFormat,
};
use cli::{Cli, Commands};
use infrastructure::{
    config_file_path, ensure_config_exists, find_stored_record, list_stored_records, load_config,
    resolve_issue_input, resolve_output_dir,
};

fn main() {
    let cli = Cli::parse();

    // Setup logging based on verbosity
    setup_logging(cli.verbose);

    if let Err(e) = run(cli) {
        eprintln!("{} {}", "Error:".red().bold(), e);
        std::process::exit(1);
    }
}

/// Main application logic.
fn run(cli: Cli) -> domain::Result<()> {
    match cli.command {
        Commands::Export {
            title,
            body,
            dir,
            format,
        } => {
            cmd_export(title, body, dir, &format)?;
        }
        Commands::List { dir, limit } => {
            cmd_list(dir, limit)?;
        }
        Commands::Show { stem, dir, format } => {
            cmd_show(&stem, dir, &format)?;
        }
        Commands::Paths { dir } => {
            cmd_paths(dir)?;
        }
    }

    Ok(())
}

/// Capture the issue and write the output files.
fn cmd_export(
    title: Option<String>,
    body: Option<String>,
    dir: Option<std::path::PathBuf>,
    format: &str,
) -> domain::Result<()> {
    let formats: FormatSelection = format
        .parse()
        .map_err(|e| domain::AppError::Config { message: e })?;

    // First run materializes the default config file
    ensure_config_exists()?;
    let config = load_config()?;
    let record = resolve_issue_input(title, body);
    let output_dir = resolve_output_dir(dir.as_deref(), &config);

    let options = ExportOptions {
        output_dir,
        formats,
        settings: config.export,
    };

    let outcome = export_record(&record, &options)?;

    for path in &outcome.written {
        println!("{} {} → {}", "✓".green(), record.title.cyan(), path.display());
    }

    Ok(())
}

/// List exported records command.
fn cmd_list(dir: Option<std::path::PathBuf>, limit: usize) -> domain::Result<()> {
    let config = load_config()?;
    let output_dir = resolve_output_dir(dir.as_deref(), &config);

    let mut records = list_stored_records(&output_dir)?;
    let total = records.len();
    records.truncate(limit);

    println!("{}", format_records_table(&records));
    println!();
    println!("{}", format_list_summary(total, &output_dir));

    Ok(())
}

/// Show a single stored record.
fn cmd_show(stem: &str, dir: Option<std::path::PathBuf>, format: &str) -> domain::Result<()> {
    let format: OutputFormat = format
        .parse()
        .map_err(|e| domain::AppError::Config { message: e })?;

    let config = load_config()?;
    let output_dir = resolve_output_dir(dir.as_deref(), &config);

    let stored = find_stored_record(&output_dir, stem)?;

    let output = match format {
        OutputFormat::Markdown => format_record_markdown(&stored),
        OutputFormat::Json => {
            format_record_json(&stored.record).map_err(domain::AppError::json)?
        }
        OutputFormat::Table => format_records_table(std::slice::from_ref(&stored)),
    };

    println!("{output}");
    Ok(())
}

/// Show config and output paths command.
fn cmd_paths(dir: Option<std::path::PathBuf>) -> domain::Result<()> {
    let config = load_config()?;
    let output_dir = resolve_output_dir(dir.as_deref(), &config);
    let config_path = config_file_path();

    println!("{}", "📂 Issue Exporter Paths".bold());
    println!();

    let config_label = if config_path.exists() {
        "present".green()
    } else {
        "defaults".yellow()
    };
    println!("  [{}] config: {}", config_label, config_path.display());

    let output_label = if output_dir.exists() {
        "present".green()
    } else {
        "missing".yellow()
    };
    println!("  [{}] output: {}", output_label, output_dir.display());

    Ok(())
}

/// Setup tracing/logging based on verbosity level.
fn setup_logging(verbosity: u8) {
    let filter = match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter));

    tracing_subscriber::registry()
        .with(fmt::layer().with_target(false).without_time())
        .with(filter)
        .init();
}
