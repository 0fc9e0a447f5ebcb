use std::path::Path;

use lms_shared::auth::{Role, RoleError};
use serde::Deserialize;
use tracing::{debug, warn};

use crate::AppError;

/// Account export as found in fixtures and dumps. Roles are read as plain
/// strings so one bad entry does not hide the others.
#[derive(Debug, Deserialize)]
pub struct AccountFile {
    #[serde(default)]
    pub accounts: Vec<AccountEntry>,
}

#[derive(Debug, Deserialize)]
pub struct AccountEntry {
    pub username: String,
    pub role: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Finding {
    pub username: String,
    pub error: RoleError,
}

#[derive(Debug, Default)]
pub struct AuditReport {
    pub checked: usize,
    pub findings: Vec<Finding>,
}

impl AuditReport {
    pub fn is_clean(&self) -> bool {
        self.findings.is_empty()
    }
}

pub fn audit_accounts(file: &AccountFile) -> AuditReport {
    let mut report = AuditReport {
        checked: file.accounts.len(),
        findings: Vec::new(),
    };
    for acct in &file.accounts {
        match Role::parse(&acct.role) {
            Ok(role) => debug!(username = %acct.username, %role, "account role ok"),
            Err(error) => {
                warn!(username = %acct.username, role = %acct.role, "account has unknown role");
                report.findings.push(Finding {
                    username: acct.username.clone(),
                    error,
                });
            }
        }
    }
    report
}

/// JSON parses as YAML, so one reader covers both.
pub fn audit_str(text: &str) -> Result<AuditReport, AppError> {
    let file: AccountFile =
        serde_yaml::from_str(text).map_err(|e| AppError::Parse(e.to_string()))?;
    Ok(audit_accounts(&file))
}

pub fn audit_file(path: &Path) -> Result<AuditReport, AppError> {
    let text = std::fs::read_to_string(path)?;
    audit_str(&text).map_err(|e| match e {
        AppError::Parse(msg) => AppError::Parse(format!("{}: {msg}", path.display())),
        other => other,
    })
}
