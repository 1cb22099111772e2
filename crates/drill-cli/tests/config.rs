use std::path::{Path, PathBuf};

use drill_cli::config::{ConfigError, DatasetFiles, RunFile, RunOverrides, RunSettings};
use drill_model::{DatasetKind, HoleId};

const RUN_FILE: &str = r#"
hole = "PE-101"
output_dir = "out"

[datasets]
geology = "geology.csv"
sample = "/data/sample.csv"
"#;

#[test]
fn parses_run_file() {
    let file = RunFile::from_toml_str(RUN_FILE, Path::new("run.toml")).expect("parse");
    assert_eq!(file.hole.as_deref(), Some("PE-101"));
    assert_eq!(file.datasets.get(DatasetKind::Geology), Some(Path::new("geology.csv")));
    assert_eq!(file.datasets.get(DatasetKind::Major), None);
}

#[test]
fn unknown_keys_are_rejected() {
    let err = RunFile::from_toml_str("[datasets]\nassays = \"a.csv\"\n", Path::new("run.toml"))
        .unwrap_err();
    assert!(matches!(err, ConfigError::Parse { .. }));
}

#[test]
fn load_resolves_relative_paths_against_file() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("run.toml");
    std::fs::write(&path, RUN_FILE).expect("write");

    let file = RunFile::load(&path).expect("load");
    assert_eq!(
        file.datasets.get(DatasetKind::Geology),
        Some(dir.path().join("geology.csv").as_path())
    );
    assert_eq!(file.datasets.get(DatasetKind::Sample), Some(Path::new("/data/sample.csv")));
    assert_eq!(file.output_dir, Some(dir.path().join("out")));
}

#[test]
fn missing_run_file_is_a_read_error() {
    let err = RunFile::load(Path::new("/nonexistent/run.toml")).unwrap_err();
    assert!(matches!(err, ConfigError::Read { .. }));
}

#[test]
fn command_line_wins_over_run_file() {
    let file = RunFile::from_toml_str(RUN_FILE, Path::new("run.toml")).expect("parse");
    let overrides = RunOverrides {
        hole: Some(" PE-202 ".to_string()),
        datasets: DatasetFiles {
            geology: Some(PathBuf::from("other/geology.csv")),
            major: Some(PathBuf::from("major.csv")),
            ..DatasetFiles::default()
        },
        ..RunOverrides::default()
    };

    let settings = RunSettings::resolve(Some(file), overrides).expect("resolve");
    assert_eq!(settings.hole, HoleId::new("PE-202"));
    assert_eq!(
        settings.datasets.get(DatasetKind::Geology),
        Some(Path::new("other/geology.csv"))
    );
    assert_eq!(settings.datasets.get(DatasetKind::Sample), Some(Path::new("/data/sample.csv")));
    assert_eq!(settings.datasets.get(DatasetKind::Major), Some(Path::new("major.csv")));
    assert_eq!(settings.output_dir, Some(PathBuf::from("out")));
}

#[test]
fn hole_is_required() {
    let err = RunSettings::resolve(None, RunOverrides::default()).unwrap_err();
    assert!(matches!(err, ConfigError::MissingHole));

    let overrides = RunOverrides {
        hole: Some("   ".to_string()),
        ..RunOverrides::default()
    };
    assert!(RunSettings::resolve(None, overrides).is_err());
}
