//! JSON files for the position and applicant books.
//!
//! The adapter only translates between records and domain values. Uniqueness and
//! cross-book references are checked by [`TrackerModel`] when the loaded records
//! are handed to `reset_positions` and `reset_applicants`.

mod records;

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde::{de::DeserializeOwned, Deserialize, Serialize};
use tracing::{debug, info};

use crate::config::StorageConfig;
use crate::tracker::{Memento, RecordKind, TrackerError, TrackerModel};

use records::{ApplicantRecord, PositionRecord};

#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    #[error("failed to access {}: {source}", .path.display())]
    Io { path: PathBuf, source: io::Error },
    #[error("malformed JSON in {}: {source}", .path.display())]
    Json {
        path: PathBuf,
        source: serde_json::Error,
    },
    #[error("{kind}'s {field} field is missing")]
    MissingField {
        kind: RecordKind,
        field: &'static str,
    },
    #[error(transparent)]
    Tracker(#[from] TrackerError),
}

#[derive(Debug, Default, Serialize, Deserialize)]
struct PositionBookFile {
    #[serde(default)]
    positions: Vec<PositionRecord>,
}

#[derive(Debug, Default, Serialize, Deserialize)]
struct ApplicantBookFile {
    #[serde(default)]
    applicants: Vec<ApplicantRecord>,
}

/// Pending undo snapshot: both books as they were before the last change.
#[derive(Debug, Serialize, Deserialize)]
struct HistoryFile {
    description: String,
    #[serde(default)]
    positions: Vec<PositionRecord>,
    #[serde(default)]
    applicants: Vec<ApplicantRecord>,
}

/// Reads and writes both books, plus the pending undo snapshot, as pretty-printed JSON.
#[derive(Debug, Clone)]
pub struct JsonTrackerStorage {
    config: StorageConfig,
}

impl JsonTrackerStorage {
    pub fn new(config: StorageConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &StorageConfig {
        &self.config
    }

    /// Build a model from disk. Positions load first so every applicant can be
    /// resolved against them. Missing files count as empty books; a missing
    /// history file means there is nothing to undo.
    pub fn load(&self) -> Result<TrackerModel, StorageError> {
        let positions = read_file::<PositionBookFile>(&self.config.position_book)?.positions;
        let applicants = read_file::<ApplicantBookFile>(&self.config.applicant_book)?.applicants;
        let mut model = build_model(&positions, &applicants)?;

        if let Some(history) = read_optional::<HistoryFile>(&self.config.history)? {
            let snapshot = build_model(&history.positions, &history.applicants)?;
            model.restore_snapshot(Memento::capture(
                snapshot.position_book(),
                snapshot.applicant_book(),
                history.description,
            ));
        }

        info!(
            positions = model.position_book().len(),
            applicants = model.applicant_book().len(),
            undo_available = model.has_undo_available(),
            "loaded tracker data"
        );
        Ok(model)
    }

    /// Write both books, creating parent directories as needed. The history file
    /// mirrors the model's pending snapshot and is removed once there is none.
    pub fn save(&self, model: &TrackerModel) -> Result<(), StorageError> {
        let positions = PositionBookFile {
            positions: model
                .position_book()
                .iter()
                .map(PositionRecord::from_model)
                .collect(),
        };
        let applicants = ApplicantBookFile {
            applicants: model
                .applicant_book()
                .iter()
                .map(ApplicantRecord::from_model)
                .collect(),
        };

        write_file(&self.config.position_book, &positions)?;
        write_file(&self.config.applicant_book, &applicants)?;
        match model.pending_snapshot() {
            Some(memento) => write_file(&self.config.history, &HistoryFile::from_memento(memento))?,
            None => remove_file(&self.config.history)?,
        }
        debug!(
            positions = %self.config.position_book.display(),
            applicants = %self.config.applicant_book.display(),
            "saved tracker data"
        );
        Ok(())
    }
}

impl HistoryFile {
    fn from_memento(memento: &Memento) -> Self {
        Self {
            description: memento.description.clone(),
            positions: memento
                .positions
                .iter()
                .map(PositionRecord::from_model)
                .collect(),
            applicants: memento
                .applicants
                .iter()
                .map(ApplicantRecord::from_model)
                .collect(),
        }
    }
}

fn build_model(
    positions: &[PositionRecord],
    applicants: &[ApplicantRecord],
) -> Result<TrackerModel, StorageError> {
    let mut model = TrackerModel::new();

    let positions = positions
        .iter()
        .map(PositionRecord::to_model)
        .collect::<Result<Vec<_>, _>>()?;
    model.reset_positions(positions)?;

    let applicants = applicants
        .iter()
        .map(|record| record.to_model(model.position_book()))
        .collect::<Result<Vec<_>, _>>()?;
    model.reset_applicants(applicants)?;

    Ok(model)
}

fn read_file<T>(path: &Path) -> Result<T, StorageError>
where
    T: DeserializeOwned + Default,
{
    Ok(read_optional(path)?.unwrap_or_default())
}

fn read_optional<T: DeserializeOwned>(path: &Path) -> Result<Option<T>, StorageError> {
    let raw = match fs::read_to_string(path) {
        Ok(raw) => raw,
        Err(source) if source.kind() == io::ErrorKind::NotFound => {
            debug!(path = %path.display(), "data file missing");
            return Ok(None);
        }
        Err(source) => {
            return Err(StorageError::Io {
                path: path.to_path_buf(),
                source,
            })
        }
    };

    serde_json::from_str(&raw)
        .map(Some)
        .map_err(|source| StorageError::Json {
            path: path.to_path_buf(),
            source,
        })
}

fn remove_file(path: &Path) -> Result<(), StorageError> {
    match fs::remove_file(path) {
        Ok(()) => Ok(()),
        Err(source) if source.kind() == io::ErrorKind::NotFound => Ok(()),
        Err(source) => Err(StorageError::Io {
            path: path.to_path_buf(),
            source,
        }),
    }
}

fn write_file<T: Serialize>(path: &Path, value: &T) -> Result<(), StorageError> {
    let io_error = |source: io::Error| StorageError::Io {
        path: path.to_path_buf(),
        source,
    };

    if let Some(parent) = path.parent().filter(|parent| !parent.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(io_error)?;
    }

    let json = serde_json::to_string_pretty(value).map_err(|source| StorageError::Json {
        path: path.to_path_buf(),
        source,
    })?;
    fs::write(path, json).map_err(io_error)
}
