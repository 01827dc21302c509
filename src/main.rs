use clap::Parser;
use std::process;
use wqx_processor::cli::{args::Args, commands};

fn main() {
    // Parse command line arguments
    let args = Args::parse();

    // If no subcommand was provided, show help and available commands
    if args.command.is_none() {
        show_help_and_commands();
        process::exit(0);
    }

    // Create async runtime and run the main command logic
    let runtime = tokio::runtime::Runtime::new().unwrap_or_else(|e| {
        eprintln!("Failed to create async runtime: {}", e);
        process::exit(1);
    });

    let result = runtime.block_on(commands::run(args));

    match result {
        Ok(_stats) => {
            // Success - stats have already been reported by the command
            process::exit(0);
        }
        Err(error) => {
            // Error occurred - print to stderr and exit with error code
            eprintln!("Error: {:#}", error);
            process::exit(1);
        }
    }
}

/// Show help information and available commands when no subcommand is provided
fn show_help_and_commands() {
    println!("WQX Processor - Water Quality Data Converter");
    println!("============================================");
    println!();
    println!("Convert USGS/EPA Water Quality XML documents into their canonical");
    println!("tabular CSV form for dataframe analysis.");
    println!();
    println!("USAGE:");
    println!("    wqx-processor <COMMAND> [OPTIONS]");
    println!();
    println!("COMMANDS:");
    println!("    fetch       Query the Water Quality Portal and convert the response");
    println!("    convert     Convert local WQX payload files to CSV");
    println!("    help        Show this help message or help for specific commands");
    println!();
    println!("OPTIONS:");
    println!("    -h, --help       Show help information");
    println!("    -V, --version    Show version information");
    println!();
    println!("EXAMPLES:");
    println!("    # Fetch stations for Boone County, IA:");
    println!("    wqx-processor fetch --resource station \\");
    println!("                        --param countrycode=US --param statecode=US:19 \\");
    println!("                        --param countycode=US:19:015");
    println!();
    println!("    # Convert a downloaded result payload:");
    println!("    wqx-processor convert --input results.xml --table-type result");
    println!();
    println!("    # Convert every .xml file under a directory:");
    println!("    wqx-processor convert --input ./stash --table-type station --workers 8");
    println!();
    println!("For detailed help on any command, use:");
    println!("    wqx-processor <COMMAND> --help");
}
