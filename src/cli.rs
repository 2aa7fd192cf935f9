use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "cropwise",
    version,
    about = "Crop suitability scoring and fertilizer advisory CLI"
)]
pub struct Cli {
    /// Increase verbosity (-v for info, -vv for debug)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress all output except errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Rank crops for a field and attach yield, profit, and fertilizer advice
    Suggest(SuggestCommand),
    /// Fertilizer amounts for one crop, adjusted for soil and pH
    Fertilizer(FertilizerCommand),
    /// Rebuild the merged reference datasets from the raw files
    Reprocess(ReprocessCommand),
}

#[derive(Clone, Copy, Debug, ValueEnum)]
pub enum ReportFormat {
    Json,
    Md,
}

#[derive(Args)]
pub struct SuggestCommand {
    /// Field soil type, e.g. loamy, sandy, clay
    #[arg(long)]
    pub soil: String,

    /// Water availability: low, medium, or high
    #[arg(long)]
    pub water: String,

    /// Free-text field location, e.g. "Ludhiana, Punjab"
    #[arg(long)]
    pub location: String,

    /// Comma-separated crops grown recently on this field
    #[arg(long, default_value = "")]
    pub past_crops: String,

    /// Soil pH used for fertilizer adjustment
    #[arg(long)]
    pub ph: Option<f64>,

    /// Number of crops to recommend
    #[arg(long)]
    pub top: Option<usize>,

    /// Seed for the yield/profit perturbation, for reproducible output
    #[arg(long)]
    pub seed: Option<u64>,

    /// JSON file with a current weather observation
    #[arg(long)]
    pub weather_file: Option<PathBuf>,

    /// JSON file with live land-cover percentages
    #[arg(long)]
    pub land_use_file: Option<PathBuf>,

    /// JSON file with a laboratory soil sample
    #[arg(long)]
    pub soil_sample_file: Option<PathBuf>,

    /// Directory holding the reference datasets
    #[arg(long)]
    pub data_dir: Option<PathBuf>,

    #[arg(short, long, value_enum, default_value = "json")]
    pub format: ReportFormat,
}

#[derive(Args)]
pub struct FertilizerCommand {
    /// Crop to advise on
    #[arg(long)]
    pub crop: String,

    /// Field soil type
    #[arg(long)]
    pub soil: String,

    /// Soil pH
    #[arg(long)]
    pub ph: Option<f64>,

    /// Directory holding the reference datasets
    #[arg(long)]
    pub data_dir: Option<PathBuf>,

    #[arg(short, long, value_enum, default_value = "json")]
    pub format: ReportFormat,
}

#[derive(Args)]
pub struct ReprocessCommand {
    /// Directory holding the reference datasets
    #[arg(long)]
    pub data_dir: Option<PathBuf>,
}
