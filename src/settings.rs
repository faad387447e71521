//! Layered settings: built-in defaults, then the settings file, then
//! `CIRCLE2JSON_*` environment variables, then command-line flags.

use std::path::{Path, PathBuf};

use circle_data::Dialect;
use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;

use crate::Cli;

const DEFAULT_CONFIG_FILE: &str = "circle2json.toml";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, clap::ValueEnum, strum::IntoStaticStr)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum Mode {
    Rooms,
    Mobs,
    Zones,
}

impl Mode {
    fn default_pattern(self) -> &'static str {
        match self {
            Self::Rooms => "*.wld",
            Self::Mobs => "*.mob",
            Self::Zones => "*.zon",
        }
    }
}

impl From<Mode> for circle_data::Mode {
    fn from(mode: Mode) -> Self {
        match mode {
            Mode::Rooms => Self::Rooms,
            Mode::Mobs => Self::Mobs,
            Mode::Zones => Self::Zones,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, clap::ValueEnum, strum::IntoStaticStr)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum Format {
    /// Zone numbers on rooms, bitvector door flags, diagonal exits.
    Modern,
    /// Single-line names and keywords, enumerated door flags.
    Legacy,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub from: PathBuf,
    pub to: PathBuf,
    #[serde(default)]
    pub pattern: Option<String>,
    pub mode: Mode,
    pub format: Format,
    pub log_level: String,
}

impl Settings {
    pub fn load(cli: &Cli) -> Result<Self, ConfigError> {
        let file = match &cli.config {
            Some(path) => File::from(path.as_path()).required(true),
            None => File::from(Path::new(DEFAULT_CONFIG_FILE)).required(false),
        };
        let name = |value: Option<&'static str>| value.map(str::to_string);

        Config::builder()
            .set_default("from", ".")?
            .set_default("to", "./json")?
            .set_default("mode", <&str>::from(Mode::Rooms))?
            .set_default("format", <&str>::from(Format::Modern))?
            .set_default("log_level", "info")?
            .add_source(file)
            .add_source(Environment::with_prefix("CIRCLE2JSON"))
            .set_override_option("from", path_value(cli.from.as_deref()))?
            .set_override_option("to", path_value(cli.to.as_deref()))?
            .set_override_option("pattern", cli.pattern.clone())?
            .set_override_option("mode", name(cli.mode.map(<&str>::from)))?
            .set_override_option("format", name(cli.format.map(<&str>::from)))?
            .set_override_option("log_level", cli.verbose.then_some("debug"))?
            .build()?
            .try_deserialize()
    }

    /// The configured pattern, or the usual extension for the mode.
    pub fn pattern(&self) -> &str {
        self.pattern
            .as_deref()
            .unwrap_or_else(|| self.mode.default_pattern())
    }

    pub fn dialect(&self) -> Dialect {
        match self.format {
            Format::Modern => Dialect::modern(),
            Format::Legacy => Dialect::legacy(),
        }
    }
}

fn path_value(path: Option<&Path>) -> Option<String> {
    path.map(|p| p.to_string_lossy().into_owned())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;
    use pretty_assertions::assert_eq;

    fn cli(args: &[&str]) -> Cli {
        Cli::parse_from(std::iter::once("circle2json").chain(args.iter().copied()))
    }

    #[test]
    fn settings_file_then_flags() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.toml");
        std::fs::write(&path, "from = \"lib/world\"\nformat = \"legacy\"\nmode = \"mobs\"\n").unwrap();
        let config = path.to_str().unwrap();

        let settings = Settings::load(&cli(&["--config", config])).unwrap();
        assert_eq!(settings.from, PathBuf::from("lib/world"));
        assert_eq!(settings.to, PathBuf::from("./json"));
        assert_eq!(settings.format, Format::Legacy);
        assert_eq!(settings.mode, Mode::Mobs);
        assert_eq!(settings.pattern(), "*.mob");
        assert_eq!(settings.dialect(), Dialect::legacy());

        let settings = Settings::load(&cli(&[
            "--config", config, "--mode", "zones", "--to", "out", "--verbose",
        ]))
        .unwrap();
        assert_eq!(settings.from, PathBuf::from("lib/world"));
        assert_eq!(settings.to, PathBuf::from("out"));
        assert_eq!(settings.mode, Mode::Zones);
        assert_eq!(settings.pattern(), "*.zon");
        assert_eq!(settings.log_level, "debug");
    }

    #[test]
    fn explicit_pattern_wins() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.toml");
        std::fs::write(&path, "pattern = \"3*.wld\"\n").unwrap();
        let settings =
            Settings::load(&cli(&["--config", path.to_str().unwrap(), "--format", "modern"]))
                .unwrap();
        assert_eq!(settings.pattern(), "3*.wld");
        assert_eq!(settings.mode, Mode::Rooms);
        assert_eq!(settings.dialect(), Dialect::modern());
    }

    #[test]
    fn missing_explicit_settings_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("absent.toml");
        assert!(Settings::load(&cli(&["--config", path.to_str().unwrap()])).is_err());
    }

    #[test]
    fn unknown_mode_in_settings_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.toml");
        std::fs::write(&path, "mode = \"objects\"\n").unwrap();
        assert!(Settings::load(&cli(&["--config", path.to_str().unwrap()])).is_err());
    }

    #[test]
    fn mode_maps_to_record_kind() {
        assert_eq!(circle_data::Mode::from(Mode::Mobs), circle_data::Mode::Mobs);
        assert_eq!(<&str>::from(Mode::Zones), "zones");
    }
}
