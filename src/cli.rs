//! Command-line pieces shared by the report and stream binaries.

use clap::Args;
use tracing_subscriber::EnvFilter;

use crate::field::{CreditField, Query};

/// The credit to search: exactly one role, with the name to look for.
#[derive(Debug, Clone, Args)]
#[group(required = true, multiple = false)]
pub struct CreditArgs {
    /// Find sequences scripted by NAME
    #[arg(short, long, value_name = "NAME")]
    pub script: Option<String>,

    /// Find sequences pencilled by NAME
    #[arg(short, long, value_name = "NAME")]
    pub pencils: Option<String>,

    /// Find sequences inked by NAME
    #[arg(short, long, value_name = "NAME")]
    pub inks: Option<String>,

    /// Find sequences colored by NAME
    #[arg(short, long, value_name = "NAME")]
    pub colors: Option<String>,
}

impl CreditArgs {
    pub fn query(&self) -> Query {
        let selected = [
            (CreditField::Script, &self.script),
            (CreditField::Pencils, &self.pencils),
            (CreditField::Inks, &self.inks),
            (CreditField::Colors, &self.colors),
        ]
        .into_iter()
        .find_map(|(field, name)| name.as_ref().map(|n| Query::new(field, n.as_str())));
        selected.unwrap_or_else(|| Query::new(CreditField::None, ""))
    }
}

/// Initialize tracing on stderr, filtered by `RUST_LOG` when set.
pub fn init_tracing(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .compact()
        .init();
}
