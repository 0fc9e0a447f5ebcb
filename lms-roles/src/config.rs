use std::path::{Path, PathBuf};

use directories::ProjectDirs;
use serde::{Deserialize, Serialize};

use crate::AppError;
use crate::cli::OutputFormat;

pub const ENV_CONFIG: &str = "LMS_ROLES_CONFIG";
pub const DEFAULT_TS_OUT: &str = "src/generated/roles.ts";

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RolesConfig {
    #[serde(default)]
    pub format: OutputFormat,
    /// Where `export-ts` writes when `--out` is not given.
    #[serde(default)]
    pub ts_out: Option<PathBuf>,
}

impl RolesConfig {
    pub fn ts_out_or_default(&self) -> PathBuf {
        self.ts_out
            .clone()
            .unwrap_or_else(|| PathBuf::from(DEFAULT_TS_OUT))
    }

    /// Loads config following the resolution order. Only a path the user
    /// named explicitly has to exist.
    pub fn find_and_load(cli_value: Option<PathBuf>) -> Result<(Option<PathBuf>, Self), AppError> {
        let (path, explicit) = match resolve_config_path(cli_value) {
            Some(found) => found,
            None => return Ok((None, Self::default())),
        };
        if !explicit && !path.exists() {
            return Ok((None, Self::default()));
        }
        let cfg = load_config(&path)?;
        Ok((Some(path), cfg))
    }
}

/// Returns the config path and whether the user asked for it explicitly.
pub fn resolve_config_path(cli_value: Option<PathBuf>) -> Option<(PathBuf, bool)> {
    resolve_config_path_from(cli_value, std::env::var(ENV_CONFIG).ok())
}

/// An empty env value counts as unset.
fn resolve_config_path_from(
    cli_value: Option<PathBuf>,
    env_value: Option<String>,
) -> Option<(PathBuf, bool)> {
    if let Some(p) = cli_value {
        return Some((p, true));
    }
    if let Some(p) = env_value.filter(|p| !p.is_empty()) {
        return Some((PathBuf::from(p), true));
    }
    default_config_path().map(|p| (p, false))
}

pub fn default_config_path() -> Option<PathBuf> {
    let pd = ProjectDirs::from("dev", "lms", "lms-roles")?;
    Some(pd.config_dir().join("config.yaml"))
}

pub fn load_config(path: &Path) -> Result<RolesConfig, AppError> {
    let data = std::fs::read_to_string(path)
        .map_err(|e| AppError::Config(format!("read {} failed: {e}", path.display())))?;
    let cfg: RolesConfig = serde_yaml::from_str(&data)
        .map_err(|e| AppError::Config(format!("parse {} failed: {e}", path.display())))?;
    Ok(cfg)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_file_gives_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.yaml");
        std::fs::write(&path, "{}\n").unwrap();
        let cfg = load_config(&path).unwrap();
        assert_eq!(cfg.format, OutputFormat::Text);
        assert_eq!(cfg.ts_out_or_default(), PathBuf::from(DEFAULT_TS_OUT));
    }

    #[test]
    fn reads_format_and_ts_out() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.yaml");
        std::fs::write(&path, "format: json\nts_out: web/roles.ts\n").unwrap();
        let cfg = load_config(&path).unwrap();
        assert_eq!(cfg.format, OutputFormat::Json);
        assert_eq!(cfg.ts_out_or_default(), PathBuf::from("web/roles.ts"));
    }

    #[test]
    fn rejects_unknown_format() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.yaml");
        std::fs::write(&path, "format: xml\n").unwrap();
        assert!(matches!(load_config(&path), Err(AppError::Config(_))));
    }

    #[test]
    fn empty_env_value_falls_through_to_default() {
        let resolved = resolve_config_path_from(None, Some(String::new()));
        assert_eq!(resolved, default_config_path().map(|p| (p, false)));

        let resolved = resolve_config_path_from(None, Some("roles.yaml".into()));
        assert_eq!(resolved, Some((PathBuf::from("roles.yaml"), true)));

        let resolved = resolve_config_path_from(Some("cli.yaml".into()), Some("env.yaml".into()));
        assert_eq!(resolved, Some((PathBuf::from("cli.yaml"), true)));
    }

    #[test]
    fn explicit_missing_path_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("nope.yaml");
        let res = RolesConfig::find_and_load(Some(missing));
        assert!(matches!(res, Err(AppError::Config(_))));
    }
}
