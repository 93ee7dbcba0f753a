use super::domain::RecordKind;
use super::fields::ValidationError;

/// Failures raised by the stores and the model facade.
///
/// Every variant is raised before any store is touched, so a failed call leaves
/// the tracker exactly as it was.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TrackerError {
    #[error("{kind} '{key}' already exists")]
    DuplicateKey { kind: RecordKind, key: String },
    #[error("{kind} '{key}' not found")]
    NotFound { kind: RecordKind, key: String },
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error("applicant '{applicant}' references missing position '{title}'")]
    MissingReference { applicant: String, title: String },
    #[error("no previous command to undo")]
    NoHistory,
}

impl TrackerError {
    pub(crate) fn duplicate(kind: RecordKind, key: impl Into<String>) -> Self {
        Self::DuplicateKey {
            kind,
            key: key.into(),
        }
    }

    pub(crate) fn not_found(kind: RecordKind, key: impl Into<String>) -> Self {
        Self::NotFound {
            kind,
            key: key.into(),
        }
    }
}

pub type TrackerResult<T> = Result<T, TrackerError>;
