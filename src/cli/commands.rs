//! Command implementations for WQX processor CLI
//!
//! This module contains the main command execution logic, progress
//! reporting, and summary output for the CLI interface.

use std::path::{Path, PathBuf};
use std::time::Instant;

use chrono::Local;
use colored::Colorize;
use futures::{StreamExt, stream};
use indicatif::{HumanDuration, ProgressBar, ProgressStyle};
use tracing::{debug, info, warn};

use crate::app::adapters::filesystem;
use crate::app::services::param_validator;
use crate::app::services::wqp_client::{HttpVerb, WqpClient};
use crate::cli::args::{Args, Commands, ConvertArgs, FetchArgs, ResourceArg};
use crate::{BuildStrategy, Config, Error, Result, TableType, WqxMapper};

/// Processing statistics for reporting
#[derive(Debug, Clone, Default)]
pub struct RunStats {
    /// Number of documents converted to tables
    pub documents_converted: usize,
    /// Number of table rows written
    pub rows_written: usize,
    /// Number of files that failed to convert
    pub files_failed: usize,
    /// Number of raw responses stashed
    pub responses_stashed: usize,
    /// Output file sizes in bytes
    pub output_sizes: Vec<(String, u64)>,
    /// Total processing time
    pub processing_time: std::time::Duration,
}

impl RunStats {
    /// Calculate total output size in bytes
    pub fn total_output_size(&self) -> u64 {
        self.output_sizes.iter().map(|(_, size)| size).sum()
    }

    /// Format output size in human-readable format
    pub fn format_size(bytes: u64) -> String {
        const UNITS: &[&str] = &["B", "KB", "MB", "GB", "TB"];
        let mut size = bytes as f64;
        let mut unit_index = 0;

        while size >= 1024.0 && unit_index < UNITS.len() - 1 {
            size /= 1024.0;
            unit_index += 1;
        }

        if unit_index == 0 {
            format!("{} {}", bytes, UNITS[unit_index])
        } else {
            format!("{:.2} {}", size, UNITS[unit_index])
        }
    }
}

/// Main command runner for the WQX processor
///
/// Dispatches to the fetch or convert workflow:
/// 1. Set up logging and configuration
/// 2. Validate inputs and query parameters
/// 3. Fetch/convert with progress reporting
/// 4. Generate summary statistics
pub async fn run(args: Args) -> Result<RunStats> {
    match args.get_command() {
        Commands::Fetch(fetch_args) => run_fetch(fetch_args).await,
        Commands::Convert(convert_args) => run_convert(convert_args).await,
    }
}

/// Set up tracing output for the chosen verbosity
fn setup_logging(level: &str) {
    let max_level = match level {
        "error" => tracing::Level::ERROR,
        "warn" => tracing::Level::WARN,
        "info" => tracing::Level::INFO,
        "debug" => tracing::Level::DEBUG,
        _ => tracing::Level::TRACE,
    };

    // try_init: the subscriber may already be installed in tests
    let _ = tracing_subscriber::fmt()
        .with_max_level(max_level)
        .with_target(false)
        .try_init();
}

// =============================================================================
// Fetch Command
// =============================================================================

async fn run_fetch(args: FetchArgs) -> Result<RunStats> {
    let start_time = Instant::now();
    setup_logging(args.get_log_level());

    info!("Starting WQX processor fetch");
    debug!("Fetch arguments: {:?}", args);

    args.validate()?;
    let config = fetch_config(&args);
    config.validate()?;

    // Parse and validate query parameters before any request goes out
    let params = args
        .params
        .iter()
        .map(|expr| param_validator::parse_param_expr(expr))
        .collect::<Result<Vec<_>>>()?;
    param_validator::validate(&params)?;

    let client = WqpClient::new(&config)?;
    let resource = args.resource.to_label();
    let verb = if args.head {
        HttpVerb::Head
    } else {
        HttpVerb::Get
    };

    let response = client.request(verb, resource, &params).await?;
    info!(
        "Portal responded {} {} from {}",
        response.status_code, response.reason, response.url
    );

    let mut stats = RunStats::default();

    if args.head {
        // Head requests only report the replicated message head
        println!("{}", response.serialize_head());
        stats.processing_time = start_time.elapsed();
        return Ok(stats);
    }

    if args.stash {
        let stamp = Local::now().format("%Y%m%d-%H%M%S");
        let target = config
            .stash_dir
            .join(format!("{}-{}", resource.as_str(), stamp));
        let written = filesystem::stash_response(&response, &target)?;
        stats
            .output_sizes
            .push((written.display().to_string(), response.body.len() as u64));
        stats.responses_stashed += 1;
    }

    // Only station and result responses have a tabular schema
    if matches!(args.resource, ResourceArg::Station | ResourceArg::Result) {
        let mapper = WqxMapper::new()?;
        let table = mapper.table_from_response(&response, args.strategy.to_strategy())?;
        let mut df = table.to_dataframe()?;

        let output_path = fetch_output_path(&args, &config, response.table_type()?);
        let bytes = filesystem::write_dataframe_csv(&mut df, &output_path)?;

        stats.documents_converted += 1;
        stats.rows_written += table.num_rows();
        stats
            .output_sizes
            .push((output_path.display().to_string(), bytes));

        if args.show_progress() {
            println!(
                "{} {} rows -> {}",
                "Converted".green().bold(),
                table.num_rows(),
                output_path.display()
            );
        }
    }

    stats.processing_time = start_time.elapsed();
    print_summary(&stats, args.show_progress());
    Ok(stats)
}

/// Build the effective fetch configuration from defaults and CLI overrides
fn fetch_config(args: &FetchArgs) -> Config {
    let mut config = Config::default();
    if let Some(host) = &args.host {
        config.host_url = host.clone();
    }
    if let Some(output_dir) = &args.output_dir {
        config.output_dir = output_dir.clone();
    }
    if let Some(stash_dir) = &args.stash_dir {
        config.stash_dir = stash_dir.clone();
    }
    if let Some(timeout) = args.timeout_secs {
        config.http_timeout_secs = timeout;
    }
    config
}

/// Output CSV path for a fetch: explicit file, or a timestamped name in the
/// output directory
fn fetch_output_path(args: &FetchArgs, config: &Config, table_type: TableType) -> PathBuf {
    if let Some(output_file) = &args.output_file {
        return output_file.clone();
    }
    let stamp = Local::now().format("%Y%m%d-%H%M%S");
    config
        .output_dir
        .join(format!("{}-{}.csv", table_type, stamp))
}

// =============================================================================
// Convert Command
// =============================================================================

async fn run_convert(args: ConvertArgs) -> Result<RunStats> {
    let start_time = Instant::now();
    setup_logging(args.get_log_level());

    info!("Starting WQX processor convert");
    debug!("Convert arguments: {:?}", args);

    args.validate()?;
    let table_type = args.get_table_type()?;
    let strategy = args.strategy.to_strategy();
    let output_dir = args
        .output_dir
        .clone()
        .unwrap_or_else(|| PathBuf::from("output"));

    // Building the mapper up front surfaces registry errors before any file work
    let mapper = WqxMapper::new()?;

    let mut stats = RunStats::default();

    if args.input.is_file() {
        let (rows, bytes, output_path) =
            convert_file(mapper, &args.input, table_type, strategy, &output_dir)?;
        stats.documents_converted += 1;
        stats.rows_written += rows;
        stats
            .output_sizes
            .push((output_path.display().to_string(), bytes));

        stats.processing_time = start_time.elapsed();
        print_summary(&stats, args.show_progress());
        return Ok(stats);
    }

    let files = filesystem::discover_xml_files(&args.input)?;
    if files.is_empty() {
        warn!("No .xml files found under {}", args.input.display());
        stats.processing_time = start_time.elapsed();
        return Ok(stats);
    }

    info!(
        "Converting {} files with {} workers",
        files.len(),
        args.workers
    );

    let progress_bar = if args.show_progress() {
        let pb = ProgressBar::new(files.len() as u64);
        pb.set_style(
            ProgressStyle::default_bar()
                .template(
                    "{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} {msg}",
                )
                .unwrap()
                .progress_chars("#>-"),
        );
        pb.set_message("Converting...");
        Some(pb)
    } else {
        None
    };

    // Conversion is CPU-bound; run each file on the blocking pool with
    // bounded concurrency
    let outcomes: Vec<(PathBuf, Result<(usize, u64, PathBuf)>)> = stream::iter(files)
        .map(|path| {
            let output_dir = output_dir.clone();
            async move {
                let task_path = path.clone();
                let outcome = tokio::task::spawn_blocking(move || {
                    convert_file(mapper, &task_path, table_type, strategy, &output_dir)
                })
                .await
                .map_err(|e| Error::io_error(format!("Conversion task failed: {}", e)))
                .and_then(|inner| inner);
                (path, outcome)
            }
        })
        .buffer_unordered(args.workers)
        .collect()
        .await;

    for (path, outcome) in outcomes {
        match outcome {
            Ok((rows, bytes, output_path)) => {
                stats.documents_converted += 1;
                stats.rows_written += rows;
                stats
                    .output_sizes
                    .push((output_path.display().to_string(), bytes));
            }
            Err(error) => {
                stats.files_failed += 1;
                warn!("Failed to convert {}: {}", path.display(), error);
            }
        }
        if let Some(pb) = &progress_bar {
            pb.inc(1);
        }
    }

    if let Some(pb) = &progress_bar {
        pb.finish_with_message("done");
    }

    stats.processing_time = start_time.elapsed();
    print_summary(&stats, args.show_progress());
    Ok(stats)
}

/// Convert one payload file to CSV; returns (rows, bytes written, output path)
fn convert_file(
    mapper: WqxMapper,
    input: &Path,
    table_type: TableType,
    strategy: BuildStrategy,
    output_dir: &Path,
) -> Result<(usize, u64, PathBuf)> {
    let payload = filesystem::read_payload(input)?;
    let doc = roxmltree::Document::parse(&payload)
        .map_err(|e| Error::xml_parsing(format!("Invalid WQX payload {}", input.display()), e))?;

    let table = mapper.table_from_xml(table_type, &doc, strategy);
    let mut df = table.to_dataframe()?;

    let stem = input
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or("converted");
    let output_path = output_dir.join(format!("{}.csv", stem));
    let bytes = filesystem::write_dataframe_csv(&mut df, &output_path)?;

    debug!(
        "Converted {} -> {} ({} rows)",
        input.display(),
        output_path.display(),
        table.num_rows()
    );
    Ok((table.num_rows(), bytes, output_path))
}

// =============================================================================
// Summary Output
// =============================================================================

fn print_summary(stats: &RunStats, show: bool) {
    if !show {
        return;
    }

    println!();
    println!("{}", "Summary".bold());
    println!(
        "  {} documents converted, {} rows written",
        stats.documents_converted.to_string().cyan(),
        stats.rows_written.to_string().cyan()
    );
    if stats.responses_stashed > 0 {
        println!(
            "  {} responses stashed",
            stats.responses_stashed.to_string().cyan()
        );
    }
    if stats.files_failed > 0 {
        println!(
            "  {} files failed",
            stats.files_failed.to_string().red().bold()
        );
    }
    for (path, size) in &stats.output_sizes {
        println!("  {} ({})", path, RunStats::format_size(*size));
    }
    println!(
        "  finished in {}",
        HumanDuration(stats.processing_time).to_string().green()
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_size() {
        assert_eq!(RunStats::format_size(512), "512 B");
        assert_eq!(RunStats::format_size(2048), "2.00 KB");
        assert_eq!(RunStats::format_size(5 * 1024 * 1024), "5.00 MB");
    }

    #[test]
    fn test_total_output_size() {
        let stats = RunStats {
            output_sizes: vec![
                ("a.csv".to_string(), 100),
                ("b.csv".to_string(), 250),
            ],
            ..RunStats::default()
        };
        assert_eq!(stats.total_output_size(), 350);
    }
}
