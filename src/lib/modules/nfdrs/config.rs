use super::functions::{
    drying_factor, fine_fuel_moisture, fire_load_rating, grass_spread_index, lag_fuel_moisture,
    timber_spread_index, update_bui, update_bui_snow,
};

/// configuration structure for model config
/// can be used to store functions and constants
#[derive(Debug, Clone)]
pub struct NFDRSModelConfig {
    pub model_version: String,

    ffm_fn: fn(f64) -> f64,
    df_fn: fn(f64) -> f64,
    bui_fn: fn(f64, f64, f64) -> f64,
    snow_bui_fn: fn(f64, f64) -> f64,
    lag_ffm_fn: fn(f64, f64) -> f64,
    timber_fn: fn(f64, f64) -> f64,
    grass_fn: fn(f64, f64, f64) -> f64,
    fload_fn: fn(f64, f64, f64) -> f64,
}

impl NFDRSModelConfig {
    pub fn new(model_version_str: &str) -> Self {
        let ffm_fn: fn(f64) -> f64;
        let df_fn: fn(f64) -> f64;
        let bui_fn: fn(f64, f64, f64) -> f64;
        let snow_bui_fn: fn(f64, f64) -> f64;
        let lag_ffm_fn: fn(f64, f64) -> f64;
        let timber_fn: fn(f64, f64) -> f64;
        let grass_fn: fn(f64, f64, f64) -> f64;
        let fload_fn: fn(f64, f64, f64) -> f64;

        match model_version_str {
            "legacy" => {
                ffm_fn = fine_fuel_moisture;
                df_fn = drying_factor;
                bui_fn = update_bui;
                snow_bui_fn = update_bui_snow;
                lag_ffm_fn = lag_fuel_moisture;
                timber_fn = timber_spread_index;
                grass_fn = grass_spread_index;
                fload_fn = fire_load_rating;
            }
            _ => {
                ffm_fn = fine_fuel_moisture;
                df_fn = drying_factor;
                bui_fn = update_bui;
                snow_bui_fn = update_bui_snow;
                lag_ffm_fn = lag_fuel_moisture;
                timber_fn = timber_spread_index;
                grass_fn = grass_spread_index;
                fload_fn = fire_load_rating;
            }
        }

        NFDRSModelConfig {
            model_version: model_version_str.to_owned(),
            ffm_fn,
            df_fn,
            bui_fn,
            snow_bui_fn,
            lag_ffm_fn,
            timber_fn,
            grass_fn,
            fload_fn,
        }
    }

    /// fine fuel moisture from the wet/dry bulb depression
    pub fn ffm(&self, depression: f64) -> f64 {
        (self.ffm_fn)(depression)
    }

    pub fn df(&self, ffm: f64) -> f64 {
        (self.df_fn)(ffm)
    }

    pub fn bui(&self, bui: f64, rain: f64, drying_factor: f64) -> f64 {
        (self.bui_fn)(bui, rain, drying_factor)
    }

    pub fn snow_bui(&self, bui: f64, rain: f64) -> f64 {
        (self.snow_bui_fn)(bui, rain)
    }

    pub fn lag_ffm(&self, ffm: f64, bui: f64) -> f64 {
        (self.lag_ffm_fn)(ffm, bui)
    }

    pub fn timber(&self, lag_ffm: f64, wind_speed: f64) -> f64 {
        (self.timber_fn)(lag_ffm, wind_speed)
    }

    pub fn grass(&self, ffm: f64, lag_ffm: f64, wind_speed: f64) -> f64 {
        (self.grass_fn)(ffm, lag_ffm, wind_speed)
    }

    pub fn fload(&self, timber_index: f64, grass_index: f64, bui: f64) -> f64 {
        (self.fload_fn)(timber_index, grass_index, bui)
    }
}

impl Default for NFDRSModelConfig {
    fn default() -> Self {
        NFDRSModelConfig::new("legacy")
    }
}
