use std::collections::HashMap;
use std::fs::File;
use std::io::Read;
use std::str::FromStr;

use log::debug;
use nfdrs::models::input::{ForestConditions, HerbStage};

use crate::common::helpers::NFDRSError;

pub type ConditionsMap = HashMap<String, String>;

const DRY_BULB_KEY: &str = "DRYBULB";
const WET_BULB_KEY: &str = "WETBULB";
const PRECIPITATION_KEY: &str = "PRECIP";
const SNOW_KEY: &str = "SNOW";
const WIND_SPEED_KEY: &str = "WIND";
const BUILD_UP_INDEX_KEY: &str = "BUI";
const HERB_STAGE_KEY: &str = "HERB";

const KNOWN_KEYS: [&str; 7] = [
    DRY_BULB_KEY,
    WET_BULB_KEY,
    PRECIPITATION_KEY,
    SNOW_KEY,
    WIND_SPEED_KEY,
    BUILD_UP_INDEX_KEY,
    HERB_STAGE_KEY,
];

/// Read the conditions of the day, the format is chosen from the file extension
pub fn read_conditions(file_name: &str) -> Result<ForestConditions, NFDRSError> {
    let mut file = File::open(file_name)
        .map_err(|err| format!("Cannot open input file {}: {}", file_name, err))?;

    let mut contents = String::new();
    file.read_to_string(&mut contents)
        .map_err(|err| format!("Cannot read input file {}: {}", file_name, err))?;

    if file_name.ends_with(".yaml") || file_name.ends_with(".yml") {
        serde_yaml::from_str(&contents)
            .map_err(|err| format!("Cannot parse input file {}: {}", file_name, err).into())
    } else if file_name.ends_with(".json") {
        serde_json::from_str(&contents)
            .map_err(|err| format!("Cannot parse input file {}: {}", file_name, err).into())
    } else if file_name.ends_with(".txt") {
        let map = parse_txt(&contents)
            .map_err(|err| format!("Cannot parse input file {}: {}", file_name, err))?;
        conditions_from_map(&map)
    } else {
        Err(NFDRSError::from(format!(
            "Unsupported input file format: {}",
            file_name
        )))
    }
}

/// Parse the legacy `KEY=VALUE` format. `%` and `#` start a comment line.
pub fn parse_txt(contents: &str) -> Result<ConditionsMap, NFDRSError> {
    let mut map = ConditionsMap::new();

    for (i, line) in contents.lines().enumerate() {
        let line = line.trim();
        if line.starts_with('%') || line.starts_with('#') || line.is_empty() {
            // skip comments and empty lines
            continue;
        }
        let (key, value) = line
            .split_once('=')
            .ok_or(format!("error parsing line[{i}] {line}."))?;
        let key = key.trim().to_uppercase();
        if !KNOWN_KEYS.contains(&key.as_str()) {
            return Err(format!("unknown key {key}: line[{i}] {line}.").into());
        }
        if map.contains_key(&key) {
            return Err(format!("duplicated key {key}: line[{i}] {line}.").into());
        }
        debug!("{} = {}", key, value.trim());
        map.insert(key, value.trim().to_string());
    }
    Ok(map)
}

fn parse_number(map: &ConditionsMap, key: &str, default: Option<f64>) -> Result<f64, NFDRSError> {
    match (map.get(key), default) {
        (Some(value), _) => value
            .parse::<f64>()
            .map_err(|_| format!("invalid value for {key}: {value}").into()),
        (None, Some(default)) => Ok(default),
        (None, None) => Err(format!("missing key {key}").into()),
    }
}

fn parse_flag(value: &str) -> Result<bool, NFDRSError> {
    match value.to_lowercase().as_str() {
        "1" | "y" | "yes" | "true" => Ok(true),
        "0" | "n" | "no" | "false" => Ok(false),
        _ => Err(format!("invalid value for {SNOW_KEY}: {value}").into()),
    }
}

pub fn conditions_from_map(map: &ConditionsMap) -> Result<ForestConditions, NFDRSError> {
    let snow = match map.get(SNOW_KEY) {
        Some(value) => parse_flag(value)?,
        None => false,
    };
    let herb_stage = match map.get(HERB_STAGE_KEY) {
        Some(value) => HerbStage::from_str(value)
            .map_err(|_| format!("invalid value for {HERB_STAGE_KEY}: {value}"))?,
        None => HerbStage::default(),
    };

    Ok(ForestConditions {
        dry_bulb_temp: parse_number(map, DRY_BULB_KEY, None)?,
        wet_bulb_temp: parse_number(map, WET_BULB_KEY, None)?,
        precipitation: parse_number(map, PRECIPITATION_KEY, Some(0.0))?,
        snow,
        wind_speed: parse_number(map, WIND_SPEED_KEY, None)?,
        prev_build_up_index: parse_number(map, BUILD_UP_INDEX_KEY, Some(0.0))?,
        herb_stage,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    const INPUT: &str = "\
# station observation
DRYBULB = 80
WETBULB = 60
% rain of the last 24 hours
PRECIP=0.0
SNOW=no
WIND=10
BUI=30
HERB=transition
";

    #[test]
    fn parse_txt_ok() {
        let map = parse_txt(INPUT).expect("should parse");
        assert_eq!(map.len(), 7);
        let conditions = conditions_from_map(&map).expect("should convert");
        assert_eq!(
            conditions,
            ForestConditions::new(80.0, 60.0, 0.0, false, 10.0, 30.0, HerbStage::Transition)
        );
    }

    #[test]
    fn optional_keys_take_defaults() {
        let map = parse_txt("DRYBULB=70\nWETBULB=65\nWIND=3\n").expect("should parse");
        let conditions = conditions_from_map(&map).expect("should convert");
        assert_eq!(conditions.precipitation, 0.0);
        assert!(!conditions.snow);
        assert_eq!(conditions.prev_build_up_index, 0.0);
        assert_eq!(conditions.herb_stage, HerbStage::Cured);
    }

    #[test]
    fn parse_txt_fails_for_malformed_line() {
        assert!(parse_txt("DRYBULB 80").is_err());
        assert!(parse_txt("HUMIDITY=20").is_err());
        assert!(parse_txt("WIND=3\nWIND=4").is_err());
    }

    #[test]
    fn conversion_fails_for_bad_values() {
        let map = parse_txt("DRYBULB=70\nWETBULB=65\nWIND=3\nHERB=dormant").expect("should parse");
        assert!(conditions_from_map(&map).is_err());
        let map = parse_txt("DRYBULB=warm\nWETBULB=65\nWIND=3").expect("should parse");
        assert!(conditions_from_map(&map).is_err());
        let map = parse_txt("DRYBULB=70\nWETBULB=65").expect("should parse");
        assert!(conditions_from_map(&map).is_err());
        let map = parse_txt("DRYBULB=70\nWETBULB=65\nWIND=3\nSNOW=maybe").expect("should parse");
        assert!(conditions_from_map(&map).is_err());
    }

    fn demo_path(name: &str) -> String {
        format!("{}/demos/{}", env!("CARGO_MANIFEST_DIR"), name)
    }

    #[test]
    fn read_conditions_rejects_unknown_extension() {
        let path = std::env::temp_dir().join(format!("nfdrs_conditions_{}.csv", std::process::id()));
        std::fs::write(&path, "DRYBULB,WETBULB,WIND\n80,60,10\n").expect("should write");
        let path_str = path.to_str().expect("should be utf-8").to_string();

        let result = read_conditions(&path_str);
        std::fs::remove_file(&path).ok();

        let err: String = result.expect_err("should reject csv").into();
        assert!(err.starts_with("Unsupported input file format"), "{err}");
    }

    #[test]
    fn read_conditions_fails_for_missing_file() {
        let err: String = read_conditions(&demo_path("missing.yml"))
            .expect_err("should fail")
            .into();
        assert!(err.starts_with("Cannot open input file"), "{err}");
    }

    #[test]
    fn read_conditions_from_yaml() {
        let conditions = read_conditions(&demo_path("conditions.yml")).expect("should read");
        assert_eq!(
            conditions,
            ForestConditions::new(80.0, 60.0, 0.0, false, 10.0, 30.0, HerbStage::Cured)
        );
    }

    #[test]
    fn read_conditions_from_json() {
        let conditions = read_conditions(&demo_path("conditions.json")).expect("should read");
        assert_eq!(
            conditions,
            ForestConditions::new(62.0, 60.0, 0.6, false, 20.0, 50.0, HerbStage::Transition)
        );
    }

    #[test]
    fn read_conditions_from_txt() {
        let conditions = read_conditions(&demo_path("conditions.txt")).expect("should read");
        assert_eq!(
            conditions,
            ForestConditions::new(80.0, 60.0, 0.0, false, 10.0, 30.0, HerbStage::Cured)
        );
    }
}
