use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use serde::{Deserialize, Serialize};

const HELP_EPILOG: &str = r#"Config resolution order:
  1) --config/-c PATH
  2) $LMS_ROLES_CONFIG
  3) XDG default: ~/.config/lms-roles/config.yaml

Exit status: 0 when every value is a known role, 1 when any is not,
2 on config, I/O or parse errors.
"#;

#[derive(Debug, Parser)]
#[command(
    name = "lms-roles",
    version,
    about = "Inspect and validate LMS role identifiers",
    long_about = None,
    after_long_help = HELP_EPILOG,
)]
pub struct Cli {
    /// Path to YAML config file
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Print every known role and its wire value
    List {
        /// Output format (overrides config)
        #[arg(long, value_enum)]
        format: Option<OutputFormat>,
    },
    /// Check that each value is a known role
    Check {
        #[arg(required = true)]
        values: Vec<String>,
    },
    /// Validate the `role` field of every account in a YAML or JSON file
    Audit { file: PathBuf },
    /// Write the TypeScript `Role` union for the web client
    ExportTs {
        /// Destination file (overrides config `ts_out`)
        #[arg(long)]
        out: Option<PathBuf>,
    },
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}
