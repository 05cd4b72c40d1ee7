//! Utility to normalize a nutrition profile JSON document
//!
//! Usage:
//! ```bash
//! normalize_profile profile.json
//! normalize_profile --weight-unit lbs --height-unit in < profile.json
//! ```

use std::io::Read;
use std::path::{Path, PathBuf};

use clap::Parser;
use tracing_subscriber::EnvFilter;

use fittrack::config::Config;
use fittrack::models::ProfileInput;
use fittrack::profile::{convert_profile_units, normalize_profile, parse_height_unit, parse_weight_unit};
use fittrack::Result;

#[derive(Debug, Default, Parser)]
#[command(
    name = "normalize_profile",
    about = "Normalize a nutrition profile JSON document",
    long_about = "Read a profile from PATH (or stdin), optionally convert its units, and print the normalized profile"
)]
struct Args {
    /// Profile JSON file; stdin when omitted or "-"
    path: Option<PathBuf>,

    /// User id to use when the profile has none
    #[arg(long)]
    fallback_user_id: Option<String>,

    /// Convert weights to this unit first (kg, lbs)
    #[arg(long)]
    weight_unit: Option<String>,

    /// Convert height to this unit first (cm, in)
    #[arg(long)]
    height_unit: Option<String>,
}

fn read_input(path: Option<&Path>) -> Result<String> {
    match path {
        None => read_stdin(),
        Some(p) if p == Path::new("-") => read_stdin(),
        Some(p) => Ok(std::fs::read_to_string(p)?),
    }
}

fn read_stdin() -> Result<String> {
    let mut buf = String::new();
    std::io::stdin().read_to_string(&mut buf)?;
    Ok(buf)
}

fn run(args: Args, config: &Config) -> Result<String> {
    let mut profile: ProfileInput = serde_json::from_str(&read_input(args.path.as_deref())?)?;

    if args.weight_unit.is_some() || args.height_unit.is_some() {
        let weight_unit = match args.weight_unit.as_deref() {
            Some(u) => parse_weight_unit(u)?,
            None => profile.preferences.weight_unit,
        };
        let height_unit = match args.height_unit.as_deref() {
            Some(u) => parse_height_unit(u)?,
            None => profile.preferences.height_unit,
        };
        tracing::info!(
            "Converting profile to {}/{}",
            weight_unit.as_str(),
            height_unit.as_str()
        );
        profile = convert_profile_units(&profile, weight_unit, height_unit);
    }

    let fallback = args
        .fallback_user_id
        .as_deref()
        .filter(|id| !id.is_empty())
        .unwrap_or(&config.fallback_user_id);
    let normalized = normalize_profile(&profile, fallback);

    Ok(serde_json::to_string_pretty(&normalized)?)
}

fn main() -> std::result::Result<(), Box<dyn std::error::Error>> {
    let config = Config::from_env();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive(config.log_directive.parse()?))
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();
    let output = run(args, &config)?;
    println!("{}", output);

    Ok(())
}
