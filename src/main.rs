use std::path::PathBuf;

use clap::Parser;
use color_eyre::eyre::Result;

mod convert;
mod settings;

use settings::{Format, Mode, Settings};

/// Convert CircleMUD area files into JSON.
#[derive(Debug, Parser)]
#[command(author, version, about)]
pub struct Cli {
    /// Directory holding the area files.
    #[arg(long, value_name = "DIR")]
    pub from: Option<PathBuf>,
    /// Directory the JSON files are written to.
    #[arg(long, value_name = "DIR")]
    pub to: Option<PathBuf>,
    /// File name pattern inside the input directory, e.g. `*.wld`.
    #[arg(long)]
    pub pattern: Option<String>,
    /// Which kind of area file to read.
    #[arg(long, value_enum)]
    pub mode: Option<Mode>,
    /// Area file dialect.
    #[arg(long, value_enum)]
    pub format: Option<Format>,
    /// Settings file, `circle2json.toml` by default.
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,
    /// Log every record parsed.
    #[arg(short, long)]
    pub verbose: bool,
}

fn main() -> Result<()> {
    color_eyre::install()?;

    let cli = Cli::parse();
    let settings = Settings::load(&cli)?;

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(&settings.log_level))
        .init();
    log::debug!("{settings:?}");

    let summary = convert::convert_all(&settings)?;
    log::info!(
        "converted {} {} files from {} into {}",
        summary.converted,
        settings.pattern(),
        settings.from.display(),
        settings.to.display()
    );
    Ok(())
}
