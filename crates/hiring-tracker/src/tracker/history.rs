use tracing::debug;

use super::applicants::ApplicantBook;
use super::error::{TrackerError, TrackerResult};
use super::positions::PositionBook;

/// Independent copy of both books plus a description of the change about to happen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Memento {
    pub positions: PositionBook,
    pub applicants: ApplicantBook,
    pub description: String,
}

impl Memento {
    /// Clone both books. Every record owns its data, so the copy shares nothing
    /// with the live books.
    pub fn capture(
        positions: &PositionBook,
        applicants: &ApplicantBook,
        description: impl Into<String>,
    ) -> Self {
        Self {
            positions: positions.clone(),
            applicants: applicants.clone(),
            description: description.into(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum HistoryState {
    #[default]
    Empty,
    HasSnapshot(Memento),
}

/// Single-level undo.
///
/// Recording overwrites whatever was held before, so two mutations without an
/// undo in between lose the older state for good. Multi-step undo is not offered.
#[derive(Debug, Clone, Default)]
pub struct CommandHistory {
    state: HistoryState,
}

impl CommandHistory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record_before_mutation(
        &mut self,
        positions: &PositionBook,
        applicants: &ApplicantBook,
        description: impl Into<String>,
    ) {
        let memento = Memento::capture(positions, applicants, description);
        debug!(description = %memento.description, "recorded undo snapshot");
        self.state = HistoryState::HasSnapshot(memento);
    }

    /// Hold `memento` as the undo target, as if it had just been recorded.
    pub fn restore(&mut self, memento: Memento) {
        self.state = HistoryState::HasSnapshot(memento);
    }

    pub fn snapshot(&self) -> Option<&Memento> {
        match &self.state {
            HistoryState::HasSnapshot(memento) => Some(memento),
            HistoryState::Empty => None,
        }
    }

    pub fn has_undo_available(&self) -> bool {
        matches!(self.state, HistoryState::HasSnapshot(_))
    }

    pub fn state(&self) -> &HistoryState {
        &self.state
    }

    /// Hand back the held snapshot and return to `Empty`.
    pub fn take(&mut self) -> TrackerResult<Memento> {
        match std::mem::take(&mut self.state) {
            HistoryState::HasSnapshot(memento) => Ok(memento),
            HistoryState::Empty => Err(TrackerError::NoHistory),
        }
    }

    /// Restore both books from the snapshot and return its description.
    pub fn undo(
        &mut self,
        positions: &mut PositionBook,
        applicants: &mut ApplicantBook,
    ) -> TrackerResult<String> {
        let memento = self.take()?;
        *positions = memento.positions;
        *applicants = memento.applicants;
        Ok(memento.description)
    }
}
