use tracing::info;

use super::applicants::ApplicantBook;
use super::domain::{Applicant, Position};
use super::error::TrackerResult;
use super::fields::Title;
use super::positions::PositionBook;

/// The only place allowed to push position changes into applicant records.
///
/// Borrowing both books for the duration of one cascade keeps a position change
/// and its applicant fallout inside a single call.
pub struct IntegrityCoordinator<'a> {
    positions: &'a PositionBook,
    applicants: &'a mut ApplicantBook,
}

impl<'a> IntegrityCoordinator<'a> {
    pub fn new(positions: &'a PositionBook, applicants: &'a mut ApplicantBook) -> Self {
        Self {
            positions,
            applicants,
        }
    }

    /// Remove every applicant of a deleted position. Applicants without a
    /// position are not representable, so dependants go rather than dangle.
    pub fn on_position_deleted(&mut self, position: &Position) -> Vec<Applicant> {
        let removed = self
            .applicants
            .remove_where(|applicant| applicant.is_applying_to(position));
        info!(
            title = %position.title,
            removed = removed.len(),
            "cascaded position deletion to applicants"
        );
        removed
    }

    /// Rewrite applicants of `old` to carry `new`. Must run after the position
    /// book has committed the replacement.
    pub fn on_position_edited(&mut self, old: &Position, new: &Position) -> TrackerResult<usize> {
        debug_assert!(self.positions.contains(new));
        let rewritten = self
            .applicants
            .replace_applications_for_position(old, new)?;
        info!(
            from = %old.title,
            to = %new.title,
            rewritten,
            "cascaded position edit to applicants"
        );
        Ok(rewritten)
    }

    /// Resolve a title into the position snapshot an applicant should embed.
    pub fn resolve_title(&self, title: &Title) -> TrackerResult<Position> {
        resolve_title(self.positions, title)
    }
}

pub(crate) fn resolve_title(positions: &PositionBook, title: &Title) -> TrackerResult<Position> {
    positions.get_by_title(title).cloned()
}
