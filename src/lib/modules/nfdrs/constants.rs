// Placeholders kept by the indices that are not computed under snow cover
pub const DF_INIT: f64 = 0.0;
pub const FFM_INIT: f64 = 99.0; // [%]
pub const LAG_FFM_INIT: f64 = 99.0; // [%]
pub const FLR_INIT: f64 = 0.0;
pub const SPREAD_INDEX_SNOW: f64 = 0.0;

// FINE FUEL MOISTURE
// wet/dry bulb depression breakpoints [°F], one less than the bands
pub const FFM_C: [f64; 3] = [4.5, 12.5, 27.5];
// per band: ffm = B * exp(A * depression)
pub const FFM_A: [f64; 4] = [-0.185900, -0.8590, -0.059660, -0.077373];
pub const FFM_B: [f64; 4] = [30.0, 19.2, 13.8, 22.5];
pub const FFM_MIN: f64 = 1.0; // [%]

// herb stage adjustment [%]
pub const HERB_TRANSITION: f64 = 5.0;
pub const HERB_GREEN: f64 = 10.0;

// DRYING FACTOR
pub const DF_D: [f64; 6] = [16.0, 10.0, 7.0, 5.0, 4.0, 3.0];
pub const DF_MAX: f64 = 7.0;

// BUILD UP INDEX
pub const BUI_MIN_RAIN: f64 = 0.1; // [in]
pub const BUI_R1: f64 = 50.0;
pub const BUI_R2: f64 = 1.175;

// LAG FUEL MOISTURE
pub const LAG_A1: f64 = 0.9;
pub const LAG_A2: f64 = 0.5;
pub const LAG_A3: f64 = 9.5;

// SPREAD INDICES
pub const SPREAD_MAX_MOISTURE: f64 = 30.0; // [%]
pub const SPREAD_WIND_THRESHOLD: f64 = 14.0; // [mph]
pub const SPREAD_S0: f64 = 33.0;
pub const SPREAD_S1: f64 = 1.65;
pub const SPREAD_S2: f64 = 3.0;
// light wind
pub const SPREAD_LW1: f64 = 0.1312;
pub const SPREAD_LW2: f64 = 6.0;
// strong wind
pub const SPREAD_SW1: f64 = 0.00918;
pub const SPREAD_SW2: f64 = 14.0;
pub const SPREAD_MIN: f64 = 1.0;
pub const SPREAD_MAX: f64 = 99.0;

// FIRE LOAD RATING
pub const FLR_A1: f64 = 1.75;
pub const FLR_A2: f64 = 0.32;
pub const FLR_A3: f64 = 1.64;
// lower bound of the build up index inside log10
pub const FLR_MIN_BUI: f64 = 1e-6;
