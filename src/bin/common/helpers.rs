use std::{error::Error, fmt::Display};

use log::warn;
use nfdrs::models::input::ForestConditions;

/// Check the observed conditions for values the model accepts but that are
/// not physically meaningful. Returns the messages that were logged.
pub fn check_conditions(conditions: &ForestConditions) -> Vec<String> {
    let mut issues: Vec<String> = Vec::new();

    if conditions.wet_bulb_temp > conditions.dry_bulb_temp {
        issues.push(format!(
            "wet bulb temperature {}°F is above dry bulb temperature {}°F",
            conditions.wet_bulb_temp, conditions.dry_bulb_temp
        ));
    }
    if conditions.precipitation < 0.0 {
        issues.push(format!("negative precipitation {} in", conditions.precipitation));
    }
    if conditions.wind_speed < 0.0 {
        issues.push(format!("negative wind speed {} mph", conditions.wind_speed));
    }
    if conditions.prev_build_up_index < 0.0 {
        issues.push(format!(
            "negative build up index of the previous day {}",
            conditions.prev_build_up_index
        ));
    }

    for issue in &issues {
        warn!("Implausible input: {}", issue);
    }
    issues
}

#[derive(Debug)]
pub struct NFDRSError {
    msg: String,
}

impl From<String> for NFDRSError {
    fn from(msg: String) -> Self {
        NFDRSError { msg }
    }
}

impl From<NFDRSError> for String {
    fn from(value: NFDRSError) -> String {
        value.msg
    }
}

impl From<&str> for NFDRSError {
    fn from(msg: &str) -> Self {
        NFDRSError { msg: msg.into() }
    }
}

impl Display for NFDRSError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.msg)
    }
}

impl Error for NFDRSError {}
