//! Rust Sales Analyzer CLI
//!
//! Command-line interface for computing sales reports from CSV files.
//!
//! # Usage
//!
//! ```bash
//! cargo run -- sales.csv
//! cargo run -- --generate-sample sales_data.csv
//! cargo run -- --report top-products --top 3 sales.csv
//! cargo run -- --report high-value --threshold 500 --format csv sales.csv > high_value.csv
//! ```
//!
//! The program loads every record from the input CSV file, computes the
//! selected reports and writes them to stdout. Logs go to stderr.
//!
//! # Exit Codes
//!
//! - 0: Success
//! - 1: Error (file not found, missing column, malformed row, etc.)

use rust_sales_analyzer::cli;
use rust_sales_analyzer::io::write_sample_csv;
use rust_sales_analyzer::report::generate_report;
use std::process;
use tracing::debug;

fn main() {
    let args = cli::parse_args();
    cli::init_logging(args.verbose);
    debug!("sales analyzer started with verbosity level {}", args.verbose);

    let config = args.to_report_config();

    if args.generate_sample {
        if let Err(e) = write_sample_csv(&args.input_file) {
            eprintln!("Error: {}", e);
            process::exit(1);
        }
    }

    let mut output = std::io::stdout();
    if let Err(e) = generate_report(&args.input_file, &config, &mut output) {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}
