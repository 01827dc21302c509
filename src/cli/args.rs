//! Command-line argument definitions for WQX processor
//!
//! This module defines the complete CLI interface using the clap derive API.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

use crate::app::services::wqp_client::ResourceLabel;
use crate::app::services::wqx_mapper::BuildStrategy;
use crate::constants::DEFAULT_CONVERT_WORKERS;
use crate::{Error, Result, TableType};

/// CLI arguments for the WQX water quality data processor
///
/// Converts USGS/EPA Water Quality XML documents into their canonical
/// tabular CSV form, either fetched live from the Water Quality Portal or
/// from previously downloaded payload files.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "wqx-processor",
    version,
    about = "Convert Water Quality XML (WQX) documents to canonical tabular CSV",
    long_about = "A tool that queries the Water Quality Portal or reads local WQX documents \
                  and converts the nested XML into the sparse, column-ordered tabular form \
                  used by CSV downloads and dataframe analysis. Station and result tables \
                  reproduce the portal's column names and order exactly."
)]
pub struct Args {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available subcommands for the WQX processor
#[derive(Debug, Clone, Subcommand)]
pub enum Commands {
    /// Query the Water Quality Portal and convert the response to CSV
    Fetch(FetchArgs),
    /// Convert local WQX payload files to CSV
    Convert(ConvertArgs),
}

/// Arguments for the fetch command (live portal queries)
#[derive(Debug, Clone, Parser)]
pub struct FetchArgs {
    /// Portal resource to search
    ///
    /// station and result responses convert to tabular CSV; simplestation
    /// and bio responses can only be stashed as raw XML.
    #[arg(
        short = 'r',
        long = "resource",
        value_enum,
        default_value = "station",
        help = "Portal resource to search"
    )]
    pub resource: ResourceArg,

    /// Query parameter as name=value (repeatable)
    ///
    /// Parameters are validated against the documented WQP parameter names
    /// and value forms before the request is issued, e.g.
    /// --param countrycode=US --param statecode=US:19
    #[arg(
        short = 'p',
        long = "param",
        value_name = "NAME=VALUE",
        help = "WQP query parameter (repeatable)"
    )]
    pub params: Vec<String>,

    /// Water Quality Portal host URL
    ///
    /// If not specified, defaults to https://www.waterqualitydata.us
    #[arg(long = "host", value_name = "URL", help = "Water Quality Portal host URL")]
    pub host: Option<String>,

    /// Output CSV file
    ///
    /// If not specified, a file named <resource>-<timestamp>.csv is written
    /// to the output directory.
    #[arg(
        short = 'o',
        long = "output",
        value_name = "FILE",
        help = "Output CSV file"
    )]
    pub output_file: Option<PathBuf>,

    /// Output directory for generated CSV files
    #[arg(
        long = "output-dir",
        value_name = "PATH",
        help = "Output directory for generated CSV files"
    )]
    pub output_dir: Option<PathBuf>,

    /// Stash the raw portal response to disk
    ///
    /// The response is replicated as an HTTP message (status line, headers,
    /// blank line, body) with an .xml.http suffix.
    #[arg(long = "stash", help = "Stash the raw portal response to disk")]
    pub stash: bool,

    /// Directory stashed responses are written to
    #[arg(
        long = "stash-dir",
        value_name = "PATH",
        help = "Directory stashed responses are written to"
    )]
    pub stash_dir: Option<PathBuf>,

    /// Only fetch and print the response head (HTTP HEAD request)
    #[arg(long = "head", help = "Issue a HEAD request and print the response head")]
    pub head: bool,

    /// Table construction strategy
    #[arg(
        long = "strategy",
        value_enum,
        default_value = "column-major",
        help = "Table construction strategy"
    )]
    pub strategy: StrategyArg,

    /// HTTP request timeout in seconds
    #[arg(
        long = "timeout",
        value_name = "SECS",
        help = "HTTP request timeout in seconds"
    )]
    pub timeout_secs: Option<u64>,

    /// Logging verbosity level
    #[arg(
        short = 'v',
        long = "verbose",
        action = clap::ArgAction::Count,
        help = "Increase logging verbosity (-v: info, -vv: debug, -vvv: trace)"
    )]
    pub verbose: u8,

    /// Suppress output (quiet mode)
    #[arg(
        short = 'q',
        long = "quiet",
        help = "Suppress output except errors",
        conflicts_with = "verbose"
    )]
    pub quiet: bool,
}

/// Arguments for the convert command (local payload conversion)
#[derive(Debug, Clone, Parser)]
pub struct ConvertArgs {
    /// Input WQX payload file, or a directory searched for .xml files
    #[arg(
        short = 'i',
        long = "input",
        value_name = "PATH",
        help = "Input WQX file or directory of .xml files"
    )]
    pub input: PathBuf,

    /// Table type of the input payloads
    ///
    /// Local files carry no response URL, so the table type cannot be
    /// resolved automatically. Valid values: station, result
    #[arg(
        short = 't',
        long = "table-type",
        value_name = "TYPE",
        help = "Table type of the input payloads (station or result)"
    )]
    pub table_type: String,

    /// Output directory for generated CSV files
    ///
    /// Each payload file produces a CSV of the same stem. Defaults to ./output
    #[arg(
        long = "output-dir",
        value_name = "PATH",
        help = "Output directory for generated CSV files"
    )]
    pub output_dir: Option<PathBuf>,

    /// Number of concurrent workers for directory conversion
    #[arg(
        short = 'j',
        long = "workers",
        value_name = "COUNT",
        default_value_t = DEFAULT_CONVERT_WORKERS,
        help = "Number of concurrent workers for directory conversion"
    )]
    pub workers: usize,

    /// Table construction strategy
    #[arg(
        long = "strategy",
        value_enum,
        default_value = "column-major",
        help = "Table construction strategy"
    )]
    pub strategy: StrategyArg,

    /// Logging verbosity level
    #[arg(
        short = 'v',
        long = "verbose",
        action = clap::ArgAction::Count,
        help = "Increase logging verbosity (-v: info, -vv: debug, -vvv: trace)"
    )]
    pub verbose: u8,

    /// Suppress output (quiet mode)
    #[arg(
        short = 'q',
        long = "quiet",
        help = "Suppress output except errors",
        conflicts_with = "verbose"
    )]
    pub quiet: bool,
}

/// Portal resource options
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ResourceArg {
    /// /Station/search
    Station,
    /// /Result/search
    Result,
    /// /simplestation/search (stash only)
    Simplestation,
    /// /biologicalresult/search (stash only)
    Bio,
}

impl ResourceArg {
    /// The client resource label this option maps to
    pub fn to_label(self) -> ResourceLabel {
        match self {
            ResourceArg::Station => ResourceLabel::Station,
            ResourceArg::Result => ResourceLabel::Result,
            ResourceArg::Simplestation => ResourceLabel::SimpleStation,
            ResourceArg::Bio => ResourceLabel::Bio,
        }
    }
}

/// Table construction strategy options
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum StrategyArg {
    /// Build per-column value vectors directly
    ColumnMajor,
    /// Collect complete rows, then project columns
    RowMajor,
}

impl StrategyArg {
    /// The mapper strategy this option maps to
    pub fn to_strategy(self) -> BuildStrategy {
        match self {
            StrategyArg::ColumnMajor => BuildStrategy::ColumnMajor,
            StrategyArg::RowMajor => BuildStrategy::RowMajor,
        }
    }
}

impl Args {
    /// Get the command if one was specified
    pub fn get_command(&self) -> Commands {
        self.command
            .clone()
            .expect("Command should be present when get_command() is called")
    }
}

impl FetchArgs {
    /// Validate the fetch command arguments for consistency
    pub fn validate(&self) -> Result<()> {
        if let Some(host) = &self.host {
            if !host.starts_with("http://") && !host.starts_with("https://") {
                return Err(Error::configuration(format!(
                    "Host URL must include a scheme: {}",
                    host
                )));
            }
        }

        if let Some(timeout) = self.timeout_secs {
            if timeout == 0 {
                return Err(Error::configuration(
                    "Timeout must be greater than 0 seconds".to_string(),
                ));
            }
        }

        // simplestation and bio responses have no tabular schema
        if !matches!(self.resource, ResourceArg::Station | ResourceArg::Result)
            && !self.stash
            && !self.head
        {
            return Err(Error::configuration(format!(
                "Resource '{}' has no tabular schema; use --stash or --head",
                self.resource.to_label().as_str()
            )));
        }

        Ok(())
    }

    /// Determine the appropriate log level based on verbosity flags
    pub fn get_log_level(&self) -> &'static str {
        log_level(self.verbose, self.quiet)
    }

    /// Check if we should show progress output (not in quiet mode)
    pub fn show_progress(&self) -> bool {
        !self.quiet
    }
}

impl ConvertArgs {
    /// Validate the convert command arguments for consistency
    pub fn validate(&self) -> Result<()> {
        if !self.input.exists() {
            return Err(Error::configuration(format!(
                "Input path does not exist: {}",
                self.input.display()
            )));
        }

        // Surfaces UnknownTableType for anything but station/result
        TableType::parse(&self.table_type)?;

        if self.workers == 0 {
            return Err(Error::configuration(
                "Number of workers must be greater than 0".to_string(),
            ));
        }

        if self.workers > 64 {
            return Err(Error::configuration(
                "Number of workers cannot exceed 64".to_string(),
            ));
        }

        Ok(())
    }

    /// The parsed table type (validate() must have succeeded)
    pub fn get_table_type(&self) -> Result<TableType> {
        TableType::parse(&self.table_type)
    }

    /// Determine the appropriate log level based on verbosity flags
    pub fn get_log_level(&self) -> &'static str {
        log_level(self.verbose, self.quiet)
    }

    /// Check if we should show progress bars (not in quiet mode)
    pub fn show_progress(&self) -> bool {
        !self.quiet
    }
}

fn log_level(verbose: u8, quiet: bool) -> &'static str {
    if quiet {
        "error"
    } else {
        match verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        }
    }
}
