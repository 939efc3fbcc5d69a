use anyhow::{Context, Result};
use clap::Parser;
use nested_settings::settings::{parse_assignment, SettingsBuilder};
use nested_settings::storage;
use serde_json::Map;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[clap(
    name = "nested-settings",
    about = "Resolve and validate nested-sampling settings for the sampling engine"
)]
struct Cli {
    /// Number of physical parameters
    #[clap(long)]
    n_dims: usize,

    /// Number of derived parameters
    #[clap(long, default_value = "0")]
    n_derived: usize,

    /// JSON file with option overrides
    #[clap(long)]
    overrides: Option<PathBuf>,

    /// Single override as key=value, applied after the overrides file
    #[clap(long = "set", value_name = "KEY=VALUE")]
    set: Vec<String>,

    /// Write the resolved settings here instead of stdout
    #[clap(long)]
    output: Option<PathBuf>,

    /// Verbose logging
    #[clap(long, short)]
    verbose: bool,
}

fn main() -> Result<()> {
    let args = Cli::parse();

    let log_level = if args.verbose {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Info
    };

    env_logger::Builder::new()
        .filter_level(log_level)
        .format_timestamp_millis()
        .init();

    let mut builder = SettingsBuilder::new(args.n_dims, args.n_derived);

    if let Some(path) = &args.overrides {
        let options = storage::load_overrides(path)?;
        builder = builder
            .apply_map(options)
            .with_context(|| format!("invalid overrides in {}", path.display()))?;
    }

    let mut assignments = Map::new();
    for pair in &args.set {
        let (key, value) = parse_assignment(pair)?;
        assignments.insert(key, value);
    }
    builder = builder
        .apply_map(assignments)
        .context("invalid --set override")?;

    let settings = builder.build()?;
    log::info!(
        "Settings ready: nlive={}, num_repeats={}, output under {}",
        settings.nlive,
        settings.num_repeats,
        settings.base_dir.display()
    );

    match &args.output {
        Some(path) => storage::save_settings(&settings, path)?,
        None => {
            let json = storage::settings_to_json(&settings)?;
            println!("{}", serde_json::to_string_pretty(&json)?);
        }
    }

    Ok(())
}
