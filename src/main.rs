mod app;
mod audio;
mod config;
mod dictionary;
mod error;
mod messages;
mod stats;
mod trainer;

use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;

use app::App;
use config::AppSettings;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Settings file to use instead of the per-user config
    #[arg(long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Tone frequency in Hz
    #[arg(long)]
    frequency: Option<f32>,

    /// Dot duration in seconds
    #[arg(long)]
    unit: Option<f32>,

    /// Word list for the listening drill, one word per line
    #[arg(long, value_name = "FILE")]
    dictionary: Option<PathBuf>,
}

fn main() -> Result<()> {
    // Set up logging. Use `RUST_LOG=info` or `RUST_LOG=debug` to see output.
    env_logger::init();
    let cli = Cli::parse();

    let mut settings = AppSettings::load_or_default(cli.config.as_deref());
    if let Some(frequency) = cli.frequency {
        settings.audio.tone_frequency_hz = frequency;
    }
    if let Some(unit) = cli.unit {
        settings.audio.unit_seconds = unit;
    }
    if let Some(dictionary) = cli.dictionary {
        settings.training.dictionary_path = dictionary;
    }

    let app = App::new(settings)?;
    app.run()?;
    Ok(())
}
