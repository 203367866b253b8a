//! CLI tool that prints every matching sequence, grouped by issue.
//!
//! Usage:
//!   credits-report <jsondir> (-s|-p|-i|-c) <name>

use clap::Parser;
use comics_credits::{CreditArgs, JsonDatabase, init_tracing, report_matching_sequences};
use std::io::{self, Write};
use std::process;
use tracing::info;

/// Print the sequences crediting a creator, grouped by issue and ordered
/// by sequence number.
#[derive(Parser)]
#[command(name = "credits-report")]
struct Cli {
    /// Directory holding the *issues.json and *sequences.json files
    jsondir: String,

    #[command(flatten)]
    credit: CreditArgs,

    /// Log loading progress and match counts on stderr
    #[arg(short, long)]
    verbose: bool,
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let db = match JsonDatabase::open(&cli.jsondir) {
        Ok(db) => db,
        Err(e) => {
            eprintln!("Error loading '{}': {e}", cli.jsondir);
            process::exit(1);
        }
    };

    let query = cli.credit.query();
    match report_matching_sequences(&db, query.field, &query.name) {
        Ok((report, count)) => {
            if let Err(e) = io::stdout().write_all(report.as_bytes()) {
                eprintln!("Error writing output: {e}");
                process::exit(1);
            }
            info!(field = %query.field, name = %query.name, matches = count, "query complete");
        }
        Err(e) => {
            eprintln!("Query error: {e}");
            process::exit(1);
        }
    }
}
