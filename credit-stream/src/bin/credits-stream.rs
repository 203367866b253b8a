//! CLI tool that prints matching sequences as the scan finds them.

use clap::Parser;
use comics_credits::{CreditArgs, JsonDatabase, init_tracing};
use credit_stream::{MatchGenerator, MatchPrinter};
use std::io::{self, Write};
use std::process;
use tracing::info;

/// Print the sequences crediting a creator in source order, one match at a
/// time. An issue title is repeated only when the issue changes.
#[derive(Parser)]
#[command(name = "credits-stream")]
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
    let mut generator = MatchGenerator::new(Some(&db), query.field, query.name.as_str());
    let mut printer = MatchPrinter::new();
    let mut stdout = io::stdout().lock();

    loop {
        match generator.resume() {
            Ok(true) => {}
            Ok(false) => break,
            Err(e) => {
                eprintln!("Query error: {e}");
                process::exit(1);
            }
        }
        let Some(found) = generator.take_match() else {
            continue;
        };
        let mut chunk = String::new();
        if let Err(e) = printer.print(&mut chunk, found) {
            eprintln!("Query error: {e}");
            process::exit(1);
        }
        if let Err(e) = stdout.write_all(chunk.as_bytes()) {
            eprintln!("Error writing output: {e}");
            process::exit(1);
        }
    }

    info!(field = %query.field, name = %query.name, matches = printer.printed(), "query complete");
}
