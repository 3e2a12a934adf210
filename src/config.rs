use crate::user::PREFERENCES_FILE_NAME;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Runtime configuration for the stylist binaries, optionally read from a
/// TOML file. Everything has a sensible default.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct StylistConfig {
    /// Where the single preference blob lives.
    pub preferences_path: PathBuf,
    /// Default tracing filter, overridable via RUST_LOG.
    pub log_filter: String,
}

impl Default for StylistConfig {
    fn default() -> Self {
        StylistConfig {
            preferences_path: PathBuf::from(PREFERENCES_FILE_NAME),
            log_filter: "info".to_owned(),
        }
    }
}

impl StylistConfig {
    pub fn load(path: &Path) -> Result<StylistConfig> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Could not read config file {}", path.display()))?;
        toml::from_str(&content)
            .with_context(|| format!("Could not parse config file {}", path.display()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_points_at_the_fixed_storage_key() {
        let config = StylistConfig::default();
        assert_eq!(
            config.preferences_path,
            PathBuf::from(PREFERENCES_FILE_NAME)
        );
        assert_eq!(config.log_filter, "info");
    }

    #[test]
    fn partial_toml_falls_back_to_defaults() {
        let parsed: StylistConfig =
            toml::from_str("preferences_path = \"/tmp/prefs.json\"").unwrap();
        assert_eq!(parsed.preferences_path, PathBuf::from("/tmp/prefs.json"));
        assert_eq!(parsed.log_filter, "info");
    }

    #[test]
    fn load_reports_missing_file() {
        assert!(StylistConfig::load(Path::new("/definitely/not/here.toml")).is_err());
    }
}
