//! Batch conversion of every matching file in the input directory.

use std::fs;
use std::path::{Path, PathBuf};

use circle_data::{Dialect, Mode, parse_file};
use color_eyre::eyre::{Result, WrapErr, bail, eyre};

use crate::settings::Settings;

#[derive(Debug, Default, PartialEq, Eq)]
pub struct Summary {
    pub converted: usize,
    pub failed: usize,
}

/// Convert every file matching the settings' pattern. A file that fails is
/// reported and skipped; the run fails afterwards if any file did.
pub fn convert_all(settings: &Settings) -> Result<Summary> {
    let files = matching_files(&settings.from, settings.pattern())?;
    if files.is_empty() {
        log::warn!(
            "no files match {} in {}",
            settings.pattern(),
            settings.from.display()
        );
    }
    fs::create_dir_all(&settings.to)
        .wrap_err_with(|| format!("creating {}", settings.to.display()))?;

    let mode = settings.mode.into();
    let dialect = settings.dialect();
    let mut summary = Summary::default();
    for path in &files {
        match convert_file(path, &settings.to, mode, &dialect) {
            Ok(out) => {
                log::debug!("wrote {}", out.display());
                summary.converted += 1;
            }
            Err(err) => {
                log::error!("{err:#}");
                summary.failed += 1;
            }
        }
    }

    if summary.failed > 0 {
        bail!(
            "{} of {} files failed to convert",
            summary.failed,
            files.len()
        );
    }
    Ok(summary)
}

fn matching_files(dir: &Path, pattern: &str) -> Result<Vec<PathBuf>> {
    let full = dir.join(pattern);
    let full = full
        .to_str()
        .ok_or_else(|| eyre!("path is not valid UTF-8: {}", full.display()))?;
    let mut files = glob::glob(full)
        .wrap_err_with(|| format!("bad file pattern {pattern:?}"))?
        .collect::<Result<Vec<_>, _>>()?;
    files.retain(|path| path.is_file());
    files.sort();
    Ok(files)
}

/// Parse one file and write `<to>/<stem>.json`, returning the output path.
fn convert_file(path: &Path, to: &Path, mode: Mode, dialect: &Dialect) -> Result<PathBuf> {
    let records = parse_file(path, mode, dialect)?;
    let stem = path
        .file_stem()
        .ok_or_else(|| eyre!("no file name in {}", path.display()))?;
    let out = to.join(format!("{}.json", stem.to_string_lossy()));
    let json = serde_json::to_string_pretty(&records)?;
    fs::write(&out, json).wrap_err_with(|| format!("writing {}", out.display()))?;
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::settings::{Format, Mode as SettingsMode};
    use pretty_assertions::assert_eq;

    const WORLD: &str = "#3001\nThe Temple~\nA temple.\n~\n30 8 0\n0d0+0 0 0\nD0\n~\n~\n0 -1 3054\nS\n$\n";
    const ZONE: &str = "#30\nMidgaard~\n3000 3099 15 2 0\nM 0 3000 1 3033\nS\n$\n";

    fn settings(from: &Path, to: &Path, mode: SettingsMode) -> Settings {
        Settings {
            from: from.to_path_buf(),
            to: to.to_path_buf(),
            pattern: None,
            mode,
            format: Format::Modern,
            log_level: "info".into(),
        }
    }

    #[test]
    fn writes_one_json_file_per_input() {
        let input = tempfile::tempdir().unwrap();
        let output = tempfile::tempdir().unwrap();
        fs::write(input.path().join("30.wld"), WORLD).unwrap();
        fs::write(input.path().join("31.wld"), "$\n").unwrap();
        fs::write(input.path().join("30.zon"), ZONE).unwrap();
        let to = output.path().join("json");

        let summary = convert_all(&settings(input.path(), &to, SettingsMode::Rooms)).unwrap();
        assert_eq!(
            summary,
            Summary {
                converted: 2,
                failed: 0
            }
        );

        let json: serde_json::Value =
            serde_json::from_str(&fs::read_to_string(to.join("30.json")).unwrap()).unwrap();
        assert_eq!(json["rooms"][0]["number"], 3001);
        assert_eq!(json["rooms"][0]["zone"], 30);
        assert_eq!(json["rooms"][0]["flags"], serde_json::json!(["INDOORS"]));
        assert_eq!(json["rooms"][0]["sector"], "INSIDE");
        assert_eq!(json["rooms"][0]["exits"][0]["direction"], "North");
        assert_eq!(json["rooms"][0]["exits"][0]["destination"], 3054);

        let empty: serde_json::Value =
            serde_json::from_str(&fs::read_to_string(to.join("31.json")).unwrap()).unwrap();
        assert_eq!(empty, serde_json::json!({ "rooms": [] }));
    }

    #[test]
    fn zones_mode_picks_zone_files() {
        let input = tempfile::tempdir().unwrap();
        let output = tempfile::tempdir().unwrap();
        fs::write(input.path().join("30.wld"), WORLD).unwrap();
        fs::write(input.path().join("30.zon"), ZONE).unwrap();

        let summary =
            convert_all(&settings(input.path(), output.path(), SettingsMode::Zones)).unwrap();
        assert_eq!(summary.converted, 1);
        let json: serde_json::Value =
            serde_json::from_str(&fs::read_to_string(output.path().join("30.json")).unwrap())
                .unwrap();
        assert_eq!(json["zones"][0]["name"], "Midgaard");
    }

    #[test]
    fn failing_file_is_skipped_and_counted() {
        let input = tempfile::tempdir().unwrap();
        let output = tempfile::tempdir().unwrap();
        fs::write(input.path().join("30.wld"), WORLD).unwrap();
        fs::write(input.path().join("40.wld"), "#4000\nBroken~\n").unwrap();

        let err = convert_all(&settings(input.path(), output.path(), SettingsMode::Rooms))
            .unwrap_err();
        assert_eq!(err.to_string(), "1 of 2 files failed to convert");
        assert!(output.path().join("30.json").is_file());
        assert!(!output.path().join("40.json").exists());
    }

    #[test]
    fn no_matching_files() {
        let input = tempfile::tempdir().unwrap();
        let output = tempfile::tempdir().unwrap();
        let summary =
            convert_all(&settings(input.path(), output.path(), SettingsMode::Mobs)).unwrap();
        assert_eq!(summary, Summary::default());
    }
}
