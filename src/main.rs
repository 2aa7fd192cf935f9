mod cli;
mod config;
mod dataset;
mod engine;
mod enrich;
mod error;
mod registry;
mod report;
mod types;

use crate::enrich::weather::{ObservationFileProvider, WeatherCache, WeatherProvider};
use crate::error::CropwiseError;
use crate::registry::AdvisoryRegistry;
use crate::types::report::FertilizerReport;
use crate::types::signals::FieldConditions;
use chrono::Utc;
use clap::Parser;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::path::{Path, PathBuf};

pub mod exit_code {
    pub const SUCCESS: i32 = 0;
    pub const WARNINGS: i32 = 1;
    pub const RUNTIME_FAILURE: i32 = 3;
}

fn init_tracing(verbose: u8, quiet: bool) {
    let level = if quiet {
        "error"
    } else {
        match verbose {
            0 => "warn",
            1 => "info",
            _ => "debug",
        }
    };
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(level));
    // Logs go to stderr so stdout stays machine-readable.
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn output_format(format: cli::ReportFormat) -> report::OutputFormat {
    match format {
        cli::ReportFormat::Json => report::OutputFormat::Json,
        cli::ReportFormat::Md => report::OutputFormat::Md,
    }
}

fn run() -> Result<i32, CropwiseError> {
    let cli = cli::Cli::parse();
    init_tracing(cli.verbose, cli.quiet);

    let cfg = config::load_config(Path::new("."))?.unwrap_or_default();

    match cli.command {
        cli::Commands::Suggest(cmd) => {
            let data_dir = cmd.data_dir.clone().unwrap_or_else(|| cfg.data_dir());
            let (fertilizer_table, synthesized) = dataset::load_fertilizer_table(&data_dir)?;
            tracing::debug!(crops = fertilizer_table.len(), "fertilizer table loaded");
            let registry = AdvisoryRegistry::builtin();

            let conditions = FieldConditions {
                soil_type: cmd.soil.clone(),
                water_availability: cmd.water.clone(),
                location: cmd.location.clone(),
                past_crops: cmd.past_crops.clone(),
                ph_level: cmd.ph.unwrap_or_else(|| cfg.default_ph()),
            };

            let observations_file = cmd
                .weather_file
                .clone()
                .or_else(|| cfg.observations_file());
            let provider = match observations_file {
                Some(path) if cfg.weather_enabled() => {
                    Some(ObservationFileProvider::new(path))
                }
                _ => None,
            };
            let mut cache = WeatherCache::new(cfg.cache_ttl_secs());
            let sources = enrich::EnrichmentSources {
                placeholder_land_use: cfg.placeholder_land_use(),
                land_use_file: cmd.land_use_file.as_deref(),
                weather_provider: provider
                    .as_ref()
                    .map(|provider| provider as &dyn WeatherProvider),
                soil_sample_file: cmd.soil_sample_file.as_deref(),
            };
            let enrichment = enrich::gather(
                &registry,
                &conditions.location,
                &sources,
                &mut cache,
                Utc::now(),
            );

            let mut rng = match cmd.seed {
                Some(seed) => StdRng::seed_from_u64(seed),
                None => StdRng::from_entropy(),
            };
            let top_k = cmd.top.unwrap_or_else(|| cfg.top_k());
            let advisory = engine::recommend(
                &registry,
                &fertilizer_table,
                &conditions,
                &enrichment,
                top_k,
                &mut rng,
            );

            let rendered = report::render_advisory(&advisory, output_format(cmd.format))?;
            println!("{rendered}");

            if synthesized {
                eprintln!("warning: reference datasets were regenerated from sample data");
                Ok(exit_code::WARNINGS)
            } else {
                Ok(exit_code::SUCCESS)
            }
        }
        cli::Commands::Fertilizer(cmd) => {
            let data_dir = cmd.data_dir.clone().unwrap_or_else(|| cfg.data_dir());
            let (fertilizer_table, synthesized) = dataset::load_fertilizer_table(&data_dir)?;

            let ph_level = cmd.ph.unwrap_or_else(|| cfg.default_ph());
            let plan =
                engine::fertilizer::recommend(&fertilizer_table, &cmd.crop, &cmd.soil, ph_level);
            let advice = engine::fertilizer::advice(&plan);
            let fertilizer_report = FertilizerReport {
                crop_name: cmd.crop.clone(),
                soil_type: cmd.soil.clone(),
                ph_level,
                source: plan.source,
                fertilizer_advice: advice,
                recommendations: plan,
            };

            let rendered =
                report::render_fertilizer(&fertilizer_report, output_format(cmd.format))?;
            println!("{rendered}");

            if synthesized {
                eprintln!("warning: reference datasets were regenerated from sample data");
                Ok(exit_code::WARNINGS)
            } else {
                Ok(exit_code::SUCCESS)
            }
        }
        cli::Commands::Reprocess(cmd) => {
            let data_dir: PathBuf = cmd.data_dir.clone().unwrap_or_else(|| cfg.data_dir());
            let summary = dataset::reprocess(&data_dir)?;

            println!("processed {} common crops:", summary.common_crops.len());
            for crop in &summary.common_crops {
                println!("- {crop}");
            }
            println!(
                "rows kept: {} crop / {} fertilizer",
                summary.crop_rows, summary.fertilizer_rows
            );

            if summary.synthesized {
                eprintln!("warning: raw datasets missing, sample data was generated");
                Ok(exit_code::WARNINGS)
            } else {
                Ok(exit_code::SUCCESS)
            }
        }
    }
}

fn main() {
    match run() {
        Ok(code) => {
            if code != 0 {
                std::process::exit(code);
            }
        }
        Err(e) => {
            eprintln!("error: {}", e);
            std::process::exit(exit_code::RUNTIME_FAILURE);
        }
    }
}
