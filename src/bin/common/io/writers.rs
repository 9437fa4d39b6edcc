use chrono::{DateTime, Utc};
use clap::ValueEnum;
use itertools::Itertools;
use nfdrs::models::{
    input::ForestConditions,
    output::{DangerIndices, OutputVariableName},
};
use serde_derive::Serialize;
use strum::{EnumProperty, IntoEnumIterator};
use strum_macros::Display;

use crate::common::helpers::NFDRSError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum, Display)]
#[strum(serialize_all = "lowercase")]
pub enum OutputFormat {
    /// one labelled line per index
    Text,
    /// a single JSON document
    Json,
}

#[derive(Serialize)]
struct OutputRecord<'a> {
    date: DateTime<Utc>,
    model_version: &'a str,
    conditions: &'a ForestConditions,
    indices: &'a DangerIndices,
}

/// `<long name>: <value> <units>`
fn format_variable(indices: &DangerIndices, variable: &OutputVariableName) -> String {
    let long_name = variable.get_str("long_name").unwrap_or("unknown");
    let units = variable.get_str("units").unwrap_or("-");
    let value = indices.get(variable);
    if units == "-" {
        format!("{}: {:.2}", long_name, value)
    } else {
        format!("{}: {:.2} {}", long_name, value, units)
    }
}

pub fn render_text(date: &DateTime<Utc>, indices: &DangerIndices) -> String {
    let header = format!("National Fire Danger Rating, {}", date.format("%Y-%m-%d %H:%M"));
    let lines = OutputVariableName::iter()
        .map(|variable| format_variable(indices, &variable))
        .join("\n");
    format!("{}\n{}", header, lines)
}

pub fn render_json(
    date: &DateTime<Utc>,
    model_version: &str,
    conditions: &ForestConditions,
    indices: &DangerIndices,
) -> Result<String, NFDRSError> {
    let record = OutputRecord {
        date: *date,
        model_version,
        conditions,
        indices,
    };
    serde_json::to_string_pretty(&record)
        .map_err(|err| format!("Cannot serialize output: {}", err).into())
}

pub fn render(
    format: OutputFormat,
    date: &DateTime<Utc>,
    model_version: &str,
    conditions: &ForestConditions,
    indices: &DangerIndices,
) -> Result<String, NFDRSError> {
    match format {
        OutputFormat::Text => Ok(render_text(date, indices)),
        OutputFormat::Json => render_json(date, model_version, conditions, indices),
    }
}
