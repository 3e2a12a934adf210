use super::preferences::UserPreferences;
use anyhow::{Context, Result};
use std::fs;
use std::path::PathBuf;
use thiserror::Error;
use tracing::warn;

/// Default file name for the preference blob, the storage key of the
/// original web version.
pub const PREFERENCES_FILE_NAME: &str = "personal_stylist_prefs.json";

#[derive(Debug, Error)]
pub enum PreferencesError {
    #[error("could not read preferences: {0}")]
    Io(#[from] std::io::Error),
    #[error("malformed preferences blob: {0}")]
    Malformed(String),
}

/// Persistence seam for the single preference blob. Malformed blobs are
/// discarded on load, never repaired.
pub trait PreferencesStore: Send + Sync {
    /// Returns the stored preferences, or None if nothing valid is stored.
    fn load(&self) -> Result<Option<UserPreferences>, PreferencesError>;

    /// Replaces the stored preferences wholesale.
    fn save(&self, preferences: &UserPreferences) -> Result<()>;

    /// Removes the stored preferences.
    fn clear(&self) -> Result<()>;
}

pub struct FilePreferencesStore {
    file_path: PathBuf,
}

impl FilePreferencesStore {
    pub fn new(file_path: PathBuf) -> FilePreferencesStore {
        FilePreferencesStore { file_path }
    }

    /// A blob without a `sliders` field is from an older version and gets
    /// discarded, same as one that does not parse at all.
    fn parse_blob(content: &str) -> Result<UserPreferences, PreferencesError> {
        let value: serde_json::Value = serde_json::from_str(content)
            .map_err(|e| PreferencesError::Malformed(e.to_string()))?;
        if value.get("sliders").is_none() {
            return Err(PreferencesError::Malformed(
                "missing sliders field".to_owned(),
            ));
        }
        serde_json::from_value(value).map_err(|e| PreferencesError::Malformed(e.to_string()))
    }
}

impl PreferencesStore for FilePreferencesStore {
    fn load(&self) -> Result<Option<UserPreferences>, PreferencesError> {
        let content = match fs::read_to_string(&self.file_path) {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(e.into()),
        };

        match Self::parse_blob(&content) {
            Ok(preferences) => Ok(Some(preferences)),
            Err(e) => {
                warn!("Discarding stored preferences: {e}");
                let _ = fs::remove_file(&self.file_path);
                Ok(None)
            }
        }
    }

    fn save(&self, preferences: &UserPreferences) -> Result<()> {
        let json_string = serde_json::to_string_pretty(preferences)?;
        fs::write(&self.file_path, json_string)
            .with_context(|| format!("Could not write {}", self.file_path.display()))
    }

    fn clear(&self) -> Result<()> {
        match fs::remove_file(&self.file_path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::user::preferences::{AgeGroup, GenderIdentity, Sliders};

    fn store_in(dir: &tempfile::TempDir) -> FilePreferencesStore {
        FilePreferencesStore::new(dir.path().join(PREFERENCES_FILE_NAME))
    }

    #[test]
    fn missing_file_loads_as_none() {
        let dir = tempfile::tempdir().unwrap();
        assert!(store_in(&dir).load().unwrap().is_none());
    }

    #[test]
    fn saved_preferences_load_back() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_in(&dir);
        let prefs = UserPreferences {
            sliders: Sliders {
                safe_experimental: 90,
                ..Sliders::default()
            },
            age: AgeGroup::GenX,
            gender: GenderIdentity::Masculine,
        };
        store.save(&prefs).unwrap();
        assert_eq!(store.load().unwrap(), Some(prefs));
    }

    #[test]
    fn malformed_blob_is_discarded_and_removed() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(PREFERENCES_FILE_NAME);
        fs::write(&path, "{ not json").unwrap();

        let store = FilePreferencesStore::new(path.clone());
        assert!(store.load().unwrap().is_none());
        assert!(!path.exists());
    }

    #[test]
    fn blob_without_sliders_is_discarded() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(PREFERENCES_FILE_NAME);
        fs::write(&path, r#"{"age":"Millennial","gender":"Feminine"}"#).unwrap();

        let store = FilePreferencesStore::new(path.clone());
        assert!(store.load().unwrap().is_none());
        assert!(!path.exists());
    }

    #[test]
    fn clear_removes_the_blob() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_in(&dir);
        store.save(&UserPreferences::default()).unwrap();
        store.clear().unwrap();
        assert!(store.load().unwrap().is_none());
        // Clearing twice is fine.
        store.clear().unwrap();
    }
}
