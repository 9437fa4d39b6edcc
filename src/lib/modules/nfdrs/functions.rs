use crate::models::{
    input::{ForestConditions, HerbStage},
    output::DangerIndices,
};

use super::{config::NFDRSModelConfig, constants::*};

// FINE FUEL MOISTURE MODULE
/// Band of the wet/dry bulb depression table (0-based): the first band whose
/// breakpoint is not exceeded, or the last band.
pub fn fine_fuel_moisture_band(depression: f64) -> usize {
    let mut band = 0;
    while band < FFM_C.len() && depression > FFM_C[band] {
        band += 1;
    }
    band
}

/// Fine fuel moisture [%] from the wet/dry bulb depression [°F], before the
/// lower bound and the herb stage adjustment are applied.
pub fn fine_fuel_moisture(depression: f64) -> f64 {
    let band = fine_fuel_moisture_band(depression);
    FFM_B[band] * f64::exp(FFM_A[band] * depression)
}

/// Lower bound of 1% followed by the herb stage adjustment
pub fn adjust_fuel_moisture(ffm: f64, herb_stage: HerbStage) -> f64 {
    let ffm = f64::max(ffm, FFM_MIN);
    match herb_stage {
        HerbStage::Cured => ffm,
        HerbStage::Transition => ffm + HERB_TRANSITION,
        HerbStage::Green => ffm + HERB_GREEN,
    }
}

// DRYING FACTOR MODULE
/// Band search over the drying factor table: the scan advances while the fuel
/// moisture exceeds the current breakpoint and stops after the last one.
pub fn drying_factor(ffm: f64) -> f64 {
    let mut band = 1;
    while band < 7 && ffm > DF_D[band - 1] {
        band += 1;
    }
    if band == 7 {
        DF_MAX
    } else {
        (band - 1) as f64
    }
}

// BUILD UP INDEX MODULE
fn rain_decay(rain: f64) -> f64 {
    f64::exp(-BUI_R2 * (rain - BUI_MIN_RAIN))
}

/// Precipitation effect on the build up index without snow on the ground
pub fn bui_rain_effect(bui: f64, rain: f64) -> f64 {
    let bui_new = -BUI_R1 * f64::ln(1.0 - (1.0 - f64::exp(-bui / BUI_R1)) * rain_decay(rain));
    f64::max(bui_new, 0.0)
}

/// Precipitation effect on the build up index with snow on the ground.
/// A build up index of zero has nothing left to decay: the logarithm argument
/// vanishes there, so the result is pinned to zero. The formula itself grows
/// without bound as the index approaches zero, so the pinned value is not
/// continuous with the values just above it.
pub fn bui_snow_rain_effect(bui: f64, rain: f64) -> f64 {
    let arg = 1.0 - f64::exp(-bui / BUI_R1);
    if arg <= 0.0 {
        return 0.0;
    }
    let bui_new = -BUI_R1 * f64::ln(arg) * rain_decay(rain);
    f64::max(bui_new, 0.0)
}

pub fn update_bui(bui: f64, rain: f64, drying_factor: f64) -> f64 {
    let mut bui_new = bui;
    if rain > BUI_MIN_RAIN {
        // rain effect
        bui_new = bui_rain_effect(bui_new, rain);
    }
    bui_new + drying_factor
}

pub fn update_bui_snow(bui: f64, rain: f64) -> f64 {
    if rain > BUI_MIN_RAIN {
        bui_snow_rain_effect(bui, rain)
    } else {
        bui
    }
}

// LAG FUEL MOISTURE MODULE
pub fn lag_fuel_moisture(ffm: f64, bui: f64) -> f64 {
    LAG_A1 * ffm + LAG_A2 + LAG_A3 * f64::exp(-bui / BUI_R1)
}

// SPREAD INDICES MODULE
/// Spread index for a fuel moisture [%] and a wind speed [mph], clipped to [1, 99]
pub fn spread_index(moisture: f64, wind_speed: f64) -> f64 {
    let wind_effect = if wind_speed < SPREAD_WIND_THRESHOLD {
        SPREAD_LW1 * (wind_speed + SPREAD_LW2)
    } else {
        SPREAD_SW1 * (wind_speed + SPREAD_SW2)
    };
    let index = wind_effect * f64::powf(SPREAD_S0 - moisture, SPREAD_S1) - SPREAD_S2;
    f64::max(f64::min(index, SPREAD_MAX), SPREAD_MIN)
}

pub fn timber_spread_index(lag_ffm: f64, wind_speed: f64) -> f64 {
    if lag_ffm >= SPREAD_MAX_MOISTURE {
        return SPREAD_MIN;
    }
    spread_index(lag_ffm, wind_speed)
}

pub fn grass_spread_index(ffm: f64, lag_ffm: f64, wind_speed: f64) -> f64 {
    if lag_ffm >= SPREAD_MAX_MOISTURE && ffm >= SPREAD_MAX_MOISTURE {
        return SPREAD_MIN;
    }
    spread_index(ffm, wind_speed)
}

// FIRE LOAD RATING MODULE
pub fn fire_load_rating(timber_index: f64, grass_index: f64, bui: f64) -> f64 {
    if timber_index <= 0.0 || grass_index <= 0.0 {
        return FLR_INIT;
    }
    let bui = f64::max(bui, FLR_MIN_BUI);
    let r = FLR_A1 * f64::log10(timber_index) + FLR_A2 * f64::log10(bui) - FLR_A3;
    f64::powf(10.0, f64::max(r, 0.0))
}

// COMPUTE OUTPUTS
pub fn get_output_fn(conditions: &ForestConditions, config: &NFDRSModelConfig) -> DangerIndices {
    let rain = conditions.precipitation;
    let wind_speed = conditions.wind_speed;
    let bui = conditions.prev_build_up_index;

    if conditions.snow {
        // only the build up index moves under snow cover
        return DangerIndices {
            build_up_index: config.snow_bui(bui, rain),
            timber_spread_index: SPREAD_INDEX_SNOW,
            grass_spread_index: SPREAD_INDEX_SNOW,
            ..DangerIndices::default()
        };
    }

    let ffm = config.ffm(conditions.depression());
    let df = config.df(ffm);
    let ffm = adjust_fuel_moisture(ffm, conditions.herb_stage);

    let bui = config.bui(bui, rain, df);
    let lag_ffm = config.lag_ffm(ffm, bui);

    let timber = config.timber(lag_ffm, wind_speed);
    let grass = config.grass(ffm, lag_ffm, wind_speed);
    let fload = config.fload(timber, grass, bui);

    DangerIndices {
        drying_factor: df,
        fuel_moisture: ffm,
        lag_fuel_moisture: lag_ffm,
        build_up_index: bui,
        timber_spread_index: timber,
        grass_spread_index: grass,
        fire_load_rating: fload,
    }
}
