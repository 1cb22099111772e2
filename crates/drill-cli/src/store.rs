//! Datasets loaded for one run.

use std::collections::BTreeMap;

use drill_ingest::read_csv_table;
use drill_model::{CheckError, DatasetKind};
use polars::prelude::DataFrame;
use tracing::{debug, warn};

use crate::config::DatasetFiles;

/// Every supplied dataset, decoded once.
///
/// A dataset that fails to load keeps its error so each rule that needs it
/// can report the failure without aborting the others.
#[derive(Debug, Default)]
pub struct DatasetStore {
    entries: BTreeMap<DatasetKind, Result<DataFrame, CheckError>>,
}

impl DatasetStore {
    pub fn load(files: &DatasetFiles) -> Self {
        let mut store = Self::default();
        for kind in DatasetKind::ALL {
            let Some(path) = files.get(kind) else {
                continue;
            };
            let entry = match read_csv_table(path) {
                Ok(loaded) => {
                    debug!(
                        dataset = %kind,
                        rows = loaded.frame.height(),
                        columns = loaded.frame.width(),
                        skipped = loaded.skipped_rows,
                        encoding = loaded.encoding.label(),
                        "dataset loaded"
                    );
                    Ok(loaded.frame)
                }
                Err(error) => {
                    let error = error.into_check_error(kind);
                    warn!(dataset = %kind, error = %error, "dataset unavailable");
                    Err(error)
                }
            };
            store.entries.insert(kind, entry);
        }
        store
    }

    /// Builds a store from frames already in memory.
    pub fn from_frames(frames: impl IntoIterator<Item = (DatasetKind, DataFrame)>) -> Self {
        Self {
            entries: frames
                .into_iter()
                .map(|(kind, frame)| (kind, Ok(frame)))
                .collect(),
        }
    }

    /// True when a source was given for `kind`, whether or not it loaded.
    pub fn is_supplied(&self, kind: DatasetKind) -> bool {
        self.entries.contains_key(&kind)
    }

    pub fn get(&self, kind: DatasetKind) -> Result<&DataFrame, CheckError> {
        match self.entries.get(&kind) {
            Some(Ok(frame)) => Ok(frame),
            Some(Err(error)) => Err(error.clone()),
            None => Err(CheckError::MissingInput { dataset: kind }),
        }
    }
}
