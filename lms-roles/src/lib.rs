use std::io::Write;
use std::path::Path;

use lms_shared::auth::{self, Role};
use serde::Serialize;
use tracing::{debug, error, info, warn};

pub mod audit;
pub mod cli;
pub mod config;

pub use cli::{Cli, Command, OutputFormat};
pub use config::RolesConfig;

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("config error: {0}")]
    Config(String),
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("parse error: {0}")]
    Parse(String),
}

/// Whether every value a command looked at was a known role.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Clean,
    Rejected,
}

impl Outcome {
    pub fn exit_code(self) -> i32 {
        match self {
            Outcome::Clean => 0,
            Outcome::Rejected => 1,
        }
    }
}

#[derive(Debug, Serialize)]
struct RoleEntry {
    name: &'static str,
    value: &'static str,
}

pub fn init_tracing() {
    let env_filter = std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string());
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .compact()
        .init();
}

pub fn run<W: Write>(cli: Cli, out: &mut W) -> Result<Outcome, AppError> {
    let (cfg_path, cfg) = RolesConfig::find_and_load(cli.config)?;
    debug!(path=?cfg_path, "loaded config");

    match cli.command {
        Command::List { format } => {
            list_roles(format.unwrap_or(cfg.format), out)?;
            Ok(Outcome::Clean)
        }
        Command::Check { values } => check_values(&values, out),
        Command::Audit { file } => {
            let report = audit::audit_file(&file)?;
            for finding in &report.findings {
                writeln!(out, "{}: {}", finding.username, finding.error)?;
            }
            info!(
                file = %file.display(),
                checked = report.checked,
                invalid = report.findings.len(),
                "audit finished"
            );
            Ok(if report.is_clean() {
                Outcome::Clean
            } else {
                Outcome::Rejected
            })
        }
        Command::ExportTs { out: dest } => {
            let dest = dest.unwrap_or_else(|| cfg.ts_out_or_default());
            export_ts(&dest)?;
            writeln!(out, "wrote {}", dest.display())?;
            Ok(Outcome::Clean)
        }
    }
}

/// Runs the command and flushes `out`; a failed flush counts as an error.
pub fn run_to_exit_code<W: Write>(cli: Cli, out: &mut W) -> i32 {
    let code = match run(cli, out) {
        Ok(outcome) => outcome.exit_code(),
        Err(e) => {
            error!(error=%e, "lms-roles failed");
            2
        }
    };
    if let Err(e) = out.flush() {
        error!(error=%e, "failed to flush output");
        return 2;
    }
    code
}

pub fn list_roles<W: Write>(format: OutputFormat, out: &mut W) -> Result<(), AppError> {
    match format {
        OutputFormat::Text => {
            for role in Role::all() {
                writeln!(out, "{}\t{}", role.name(), role.as_str())?;
            }
        }
        OutputFormat::Json => {
            let entries: Vec<RoleEntry> = Role::all()
                .iter()
                .map(|role| RoleEntry {
                    name: role.name(),
                    value: role.as_str(),
                })
                .collect();
            serde_json::to_writer_pretty(&mut *out, &entries).map_err(std::io::Error::from)?;
            writeln!(out)?;
        }
    }
    Ok(())
}

pub fn check_values<W: Write>(values: &[String], out: &mut W) -> Result<Outcome, AppError> {
    let mut outcome = Outcome::Clean;
    for value in values {
        match Role::parse(value) {
            Ok(_) => writeln!(out, "ok {value}")?,
            Err(e) => {
                warn!(error=%e, "rejected role value");
                writeln!(out, "invalid {value}")?;
                outcome = Outcome::Rejected;
            }
        }
    }
    Ok(outcome)
}

pub fn export_ts(dest: &Path) -> Result<(), AppError> {
    if let Some(parent) = dest.parent()
        && !parent.as_os_str().is_empty()
    {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(dest, auth::typescript_decl())?;
    info!(path = %dest.display(), "exported TypeScript role union");
    Ok(())
}
