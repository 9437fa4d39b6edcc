use serde_derive::{Deserialize, Serialize};
use strum_macros::{Display, EnumIter, EnumProperty, EnumString};

use crate::modules::nfdrs::constants::{
    DF_INIT, FFM_INIT, FLR_INIT, LAG_FFM_INIT, SPREAD_INDEX_SNOW,
};

/// Indices computed for a single observation.
/// Under snow cover only the build up index is updated, the other moisture
/// related fields keep the placeholders of `DangerIndices::default()`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DangerIndices {
    /// Drying factor [0..7]
    pub drying_factor: f64,
    /// Fine fuel moisture [%]
    pub fuel_moisture: f64,
    /// Adjusted (10-day lag) fuel moisture [%]
    pub lag_fuel_moisture: f64,
    /// Build up index of the day
    pub build_up_index: f64,
    /// Timber spread index [1..99]
    pub timber_spread_index: f64,
    /// Grass spread index [1..99]
    pub grass_spread_index: f64,
    /// Fire load rating
    pub fire_load_rating: f64,
}

impl Default for DangerIndices {
    fn default() -> Self {
        Self {
            drying_factor: DF_INIT,
            fuel_moisture: FFM_INIT,
            lag_fuel_moisture: LAG_FFM_INIT,
            build_up_index: 0.0,
            timber_spread_index: SPREAD_INDEX_SNOW,
            grass_spread_index: SPREAD_INDEX_SNOW,
            fire_load_rating: FLR_INIT,
        }
    }
}

#[allow(non_camel_case_types, clippy::upper_case_acronyms)]
#[derive(
    Debug,
    PartialEq,
    Eq,
    Hash,
    Copy,
    Clone,
    EnumString,
    EnumProperty,
    EnumIter,
    Display,
    Serialize,
    Deserialize,
)]
#[strum(ascii_case_insensitive)]
pub enum OutputVariableName {
    /// Drying Factor
    #[strum(props(long_name = "Drying Factor", units = "-"))]
    df,
    /// Fine Fuel Moisture
    #[strum(props(long_name = "Fine Fuel Moisture", units = "%"))]
    ffm,
    /// Adjusted (10-day lag) Fuel Moisture
    #[strum(props(long_name = "Adjusted Fuel Moisture", units = "%"))]
    adfm,
    /// Build Up Index
    #[strum(props(long_name = "Build Up Index", units = "-"))]
    bui,
    /// Timber Spread Index
    #[strum(props(long_name = "Timber Spread Index", units = "-"))]
    timber,
    /// Grass Spread Index
    #[strum(props(long_name = "Grass Spread Index", units = "-"))]
    grass,
    /// Fire Load Rating
    #[strum(props(long_name = "Fire Load Rating", units = "-"))]
    fload,
}

impl DangerIndices {
    pub fn get(&self, variable: &OutputVariableName) -> f64 {
        use OutputVariableName::*;
        match variable {
            df => self.drying_factor,
            ffm => self.fuel_moisture,
            adfm => self.lag_fuel_moisture,
            bui => self.build_up_index,
            timber => self.timber_spread_index,
            grass => self.grass_spread_index,
            fload => self.fire_load_rating,
        }
    }
}
