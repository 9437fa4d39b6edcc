mod common;
use std::env::{set_var, var};
use std::error::Error;
use std::path::Path;

use chrono::prelude::*;
use clap::Parser;

use common::helpers::check_conditions;
use common::io::readers::read_conditions;
use common::io::writers::{render, OutputFormat};
use log::{debug, info};
use nfdrs::modules::nfdrs::{config::NFDRSModelConfig, models::DangerCalculator};
use nfdrs::version::LONG_VERSION;

#[derive(Parser, Debug)]
#[command(
    version,
    long_version=LONG_VERSION,
    about="National Fire Danger Rating System daily indices",
    long_about="Computes the U.S. National Fire Danger Rating System indices for one observation:
fine fuel moisture, drying factor, adjusted fuel moisture, build up index, timber and grass
spread indices and fire load rating. Inputs are expected in °F, mph and inches."
)]
struct Args {
    #[arg(
        required = true,
        help = "Observation date in the format YYYYMMDDHHMM",
        index = 1
    )]
    date: String,

    #[arg(
        required = true,
        help = "Path to the conditions file (.yml, .yaml, .json or .txt)",
        index = 2
    )]
    input_path: String,

    #[arg(long, default_value = "legacy", help = "Model version")]
    model_version: String,

    #[arg(long, value_enum, default_value_t = OutputFormat::Text, help = "Output format")]
    format: OutputFormat,
}

/// main function
fn main() -> Result<(), Box<dyn Error>> {
    let args = Args::parse();
    let date_str = args.date;
    let input_path_str = args.input_path;

    if var("RUST_LOG").is_err() {
        set_var("RUST_LOG", "info")
    }
    pretty_env_logger::init();

    if !Path::new(&input_path_str).is_file() {
        return Err(format!("Input file {} is not a file", input_path_str).into());
    }

    let date = NaiveDateTime::parse_from_str(&date_str, "%Y%m%d%H%M")
        .map_err(|_| format!("Could not parse observation date '{}'", date_str))?;
    let date = DateTime::from_naive_utc_and_offset(date, Utc);

    info!("Loading conditions from {}", input_path_str);
    let conditions = read_conditions(&input_path_str)?;
    debug!("{:?}", conditions);
    check_conditions(&conditions);

    let calculator = DangerCalculator::new(NFDRSModelConfig::new(&args.model_version));
    info!(
        "Computing indices for {} with model version {}",
        date.format("%Y-%m-%d %H:%M"),
        calculator.model_version()
    );
    if conditions.snow {
        info!("Snow on the ground: only the build up index is updated");
    }
    let indices = calculator.compute(&conditions);

    let rendered = render(
        args.format,
        &date,
        calculator.model_version(),
        &conditions,
        &indices,
    )?;
    println!("{}", rendered);
    Ok(())
}
