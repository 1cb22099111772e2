//! Run configuration: an optional TOML run file overlaid by command-line values.
//!
//! ```toml
//! hole = "PE-101"
//! output_dir = "out"
//!
//! [datasets]
//! geology = "data/geology.csv"
//! sample = "data/sample.csv"
//! standards = "data/standards.csv"
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use drill_model::{DatasetKind, HoleId};
use serde::Deserialize;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read run file {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid run file {}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("no hole id given (use --hole or set `hole` in the run file)")]
    MissingHole,
}

/// One optional path per dataset kind.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct DatasetFiles {
    pub geology: Option<PathBuf>,
    pub sample: Option<PathBuf>,
    pub standards: Option<PathBuf>,
    pub alteration: Option<PathBuf>,
    pub mine: Option<PathBuf>,
    pub major: Option<PathBuf>,
}

impl DatasetFiles {
    pub fn get(&self, kind: DatasetKind) -> Option<&Path> {
        let path = match kind {
            DatasetKind::Geology => &self.geology,
            DatasetKind::Sample => &self.sample,
            DatasetKind::Standards => &self.standards,
            DatasetKind::Alteration => &self.alteration,
            DatasetKind::Mine => &self.mine,
            DatasetKind::Major => &self.major,
        };
        path.as_deref()
    }

    fn slot(&mut self, kind: DatasetKind) -> &mut Option<PathBuf> {
        match kind {
            DatasetKind::Geology => &mut self.geology,
            DatasetKind::Sample => &mut self.sample,
            DatasetKind::Standards => &mut self.standards,
            DatasetKind::Alteration => &mut self.alteration,
            DatasetKind::Mine => &mut self.mine,
            DatasetKind::Major => &mut self.major,
        }
    }

    /// Paths from `overrides` replace ours kind by kind.
    pub fn overlay(mut self, overrides: DatasetFiles) -> Self {
        for kind in DatasetKind::ALL {
            if let Some(path) = overrides.get(kind) {
                *self.slot(kind) = Some(path.to_path_buf());
            }
        }
        self
    }

    /// Relative paths are taken relative to `base`.
    fn rebase(mut self, base: &Path) -> Self {
        for kind in DatasetKind::ALL {
            if let Some(path) = self.slot(kind).as_mut()
                && path.is_relative()
            {
                *path = base.join(&*path);
            }
        }
        self
    }
}

/// Contents of a run file.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RunFile {
    pub hole: Option<String>,
    pub output_dir: Option<PathBuf>,
    pub datasets: DatasetFiles,
}

impl RunFile {
    pub fn from_toml_str(text: &str, path: &Path) -> Result<Self, ConfigError> {
        toml::from_str(text).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Loads a run file; relative paths inside it resolve against its directory.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let text = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let mut file = Self::from_toml_str(&text, path)?;
        let base = path.parent().unwrap_or(Path::new("."));
        file.datasets = file.datasets.rebase(base);
        file.output_dir = file.output_dir.map(|dir| {
            if dir.is_relative() { base.join(dir) } else { dir }
        });
        Ok(file)
    }
}

/// Values given on the command line; each one wins over the run file.
#[derive(Debug, Clone, Default)]
pub struct RunOverrides {
    pub hole: Option<String>,
    pub output_dir: Option<PathBuf>,
    pub datasets: DatasetFiles,
    pub json_summary: bool,
}

/// Fully resolved settings for a rule run.
#[derive(Debug, Clone)]
pub struct RunSettings {
    pub hole: HoleId,
    pub datasets: DatasetFiles,
    pub output_dir: Option<PathBuf>,
    pub json_summary: bool,
}

impl RunSettings {
    pub fn resolve(file: Option<RunFile>, overrides: RunOverrides) -> Result<Self, ConfigError> {
        let file = file.unwrap_or_default();
        let hole = overrides
            .hole
            .or(file.hole)
            .map(HoleId::new)
            .filter(|hole| !hole.is_empty())
            .ok_or(ConfigError::MissingHole)?;
        Ok(Self {
            hole,
            datasets: file.datasets.overlay(overrides.datasets),
            output_dir: overrides.output_dir.or(file.output_dir),
            json_summary: overrides.json_summary,
        })
    }
}
