use serde_derive::{Deserialize, Serialize};
use strum_macros::{Display, EnumIter, EnumString};

/// Herbaceous state of the vegetation
#[derive(
    Debug,
    Default,
    PartialEq,
    Eq,
    Hash,
    Copy,
    Clone,
    EnumString,
    EnumIter,
    Display,
    Serialize,
    Deserialize,
)]
#[strum(ascii_case_insensitive, serialize_all = "UPPERCASE")]
#[serde(rename_all = "UPPERCASE")]
pub enum HerbStage {
    /// cured vegetation, no moisture adjustment
    #[default]
    Cured,
    /// vegetation in transition, +5% fine fuel moisture
    Transition,
    /// green vegetation, +10% fine fuel moisture
    Green,
}

/// ForestConditions represents the weather and fuel state observed for one day.
/// Units are the ones expected by the model, no conversion is applied.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ForestConditions {
    /// dry bulb temperature [°F]
    pub dry_bulb_temp: f64,
    /// wet bulb temperature [°F]
    pub wet_bulb_temp: f64,
    /// precipitation of the last 24 hours [in]
    #[serde(default)]
    pub precipitation: f64,
    /// snow on the ground
    #[serde(default)]
    pub snow: bool,
    /// wind speed [mph]
    pub wind_speed: f64,
    /// build up index of the previous day [-]
    #[serde(default)]
    pub prev_build_up_index: f64,
    /// herbaceous stage of the vegetation
    #[serde(default)]
    pub herb_stage: HerbStage,
}

impl ForestConditions {
    pub fn new(
        dry_bulb_temp: f64,
        wet_bulb_temp: f64,
        precipitation: f64,
        snow: bool,
        wind_speed: f64,
        prev_build_up_index: f64,
        herb_stage: HerbStage,
    ) -> Self {
        Self {
            dry_bulb_temp,
            wet_bulb_temp,
            precipitation,
            snow,
            wind_speed,
            prev_build_up_index,
            herb_stage,
        }
    }

    /// wet/dry bulb depression [°F]
    pub fn depression(&self) -> f64 {
        self.dry_bulb_temp - self.wet_bulb_temp
    }
}
