mod preferences;
mod store;

pub use preferences::{AgeGroup, GenderIdentity, Sliders, UserPreferences};
pub use store::{
    FilePreferencesStore, PreferencesError, PreferencesStore, PREFERENCES_FILE_NAME,
};
