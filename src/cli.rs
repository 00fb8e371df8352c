use clap::{Args, Parser, Subcommand};
use cropguard::RawReading;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "cropguard", version, about = "Crop disease risk estimation")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Path to config.yaml
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Increase log verbosity (-v for debug, -vv for trace)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Predict disease and risk for a crop
    Predict {
        /// Crop name (rice, tomato, corn, maize)
        #[arg(long)]
        crop: String,

        /// Observed symptoms, free text
        #[arg(long)]
        symptoms: String,

        #[command(flatten)]
        reading: ReadingArgs,

        /// Model artifact, overrides config
        #[arg(long)]
        model: Option<PathBuf>,
    },
    /// Run the risk classifier alone
    Classify {
        #[command(flatten)]
        reading: ReadingArgs,

        /// Model artifact, overrides config
        #[arg(long)]
        model: Option<PathBuf>,
    },
    /// List the expert rule table
    Rules,
    /// Validate config and report classifier status
    Check {
        /// Model artifact, overrides config
        #[arg(long)]
        model: Option<PathBuf>,
    },
}

#[derive(Args)]
pub struct ReadingArgs {
    /// Air temperature in °C
    #[arg(long, allow_negative_numbers = true)]
    pub temperature: f64,

    /// Relative humidity in %
    #[arg(long)]
    pub humidity: f64,

    /// Rainfall in mm (default 0)
    #[arg(long)]
    pub rainfall: Option<f64>,

    /// Soil pH (default 6.5)
    #[arg(long = "soil-ph")]
    pub soil_ph: Option<f64>,
}

impl ReadingArgs {
    pub fn to_raw(&self) -> RawReading {
        RawReading {
            temperature_c: self.temperature,
            humidity_percent: self.humidity,
            rainfall_mm: self.rainfall,
            soil_ph: self.soil_ph,
        }
    }
}
