use serde::{Deserialize, Serialize};

/// Slider positions from the preference setup, 0 to 100 each. The ids mirror
/// the setup form, not the style axes; only the gender choice feeds the
/// recommendation filter.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Sliders {
    pub minimal_loud: u8,
    pub fitted_oversized: u8,
    pub classic_trendy: u8,
    pub sporty_polished: u8,
    pub safe_experimental: u8,
}

impl Default for Sliders {
    fn default() -> Self {
        Sliders {
            minimal_loud: 50,
            fitted_oversized: 50,
            classic_trendy: 50,
            sporty_polished: 50,
            safe_experimental: 50,
        }
    }
}

#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub enum AgeGroup {
    #[serde(rename = "Gen Z")]
    GenZ,
    Millennial,
    #[serde(rename = "Gen X")]
    GenX,
    Boomer,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub enum GenderIdentity {
    Feminine,
    Masculine,
    #[serde(rename = "Non-binary/Unisex")]
    NonBinary,
}

/// A user's style profile. Created by the setup step and only ever replaced
/// wholesale, never patched field by field.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct UserPreferences {
    pub sliders: Sliders,
    pub age: AgeGroup,
    pub gender: GenderIdentity,
}

impl Default for UserPreferences {
    fn default() -> Self {
        UserPreferences {
            sliders: Sliders::default(),
            age: AgeGroup::Millennial,
            gender: GenderIdentity::Feminine,
        }
    }
}
