use tracing::{debug, info};

use super::applicants::ApplicantBook;
use super::descriptor::{EditApplicantDescriptor, EditPositionDescriptor};
use super::domain::{Applicant, ApplicantParticulars, Position};
use super::error::{TrackerError, TrackerResult};
use super::fields::{ApplicationStatus, Name, Title};
use super::history::{CommandHistory, Memento};
use super::integrity::{resolve_title, IntegrityCoordinator};
use super::positions::PositionBook;
use super::statistics::RejectionRate;
use super::view::{FilteredView, Predicate, Projection};

/// Read-only export of both books, independent of the live model.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TrackerSnapshot {
    pub positions: PositionBook,
    pub applicants: ApplicantBook,
}

/// Entry point composing the books, their filtered views and the undo history.
///
/// Every public operation either commits completely or fails without touching
/// any state.
#[derive(Debug, Default)]
pub struct TrackerModel {
    positions: PositionBook,
    applicants: ApplicantBook,
    position_view: FilteredView<Position>,
    applicant_view: FilteredView<Applicant>,
    history: CommandHistory,
}

impl TrackerModel {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a model from already loaded records, validating every invariant.
    pub fn with_records(
        positions: Vec<Position>,
        applicants: Vec<Applicant>,
    ) -> TrackerResult<Self> {
        let mut model = Self::new();
        model.reset_positions(positions)?;
        model.reset_applicants(applicants)?;
        Ok(model)
    }

    // ---------------------------------------------------------------- positions

    pub fn add_position(&mut self, position: Position) -> TrackerResult<()> {
        let title = position.title.clone();
        self.positions.add(position)?;
        self.position_view.show_all();
        debug!(%title, "added position");
        Ok(())
    }

    /// Replace `target` and carry the new data into every dependent applicant.
    pub fn set_position(&mut self, target: &Position, replacement: Position) -> TrackerResult<()> {
        let mut positions = self.positions.clone();
        positions.set(target, replacement.clone())?;
        let mut applicants = self.applicants.clone();
        IntegrityCoordinator::new(&positions, &mut applicants)
            .on_position_edited(target, &replacement)?;

        self.positions = positions;
        self.applicants = applicants;
        debug!(from = %target.title, to = %replacement.title, "updated position");
        Ok(())
    }

    /// Remove `position` along with every applicant applying to it.
    pub fn remove_position(&mut self, position: &Position) -> TrackerResult<Vec<Applicant>> {
        let removed = self.positions.remove(position)?;
        let dropped = IntegrityCoordinator::new(&self.positions, &mut self.applicants)
            .on_position_deleted(&removed);
        debug!(title = %removed.title, "removed position");
        Ok(dropped)
    }

    pub fn edit_position(
        &mut self,
        title: &Title,
        descriptor: &EditPositionDescriptor,
    ) -> TrackerResult<Position> {
        let target = self.positions.get_by_title(title)?.clone();
        let edited = descriptor.apply(&target)?;
        self.set_position(&target, edited.clone())?;
        Ok(edited)
    }

    pub fn delete_position_by_title(
        &mut self,
        title: &Title,
    ) -> TrackerResult<(Position, Vec<Applicant>)> {
        let target = self.positions.get_by_title(title)?.clone();
        let dropped = self.remove_position(&target)?;
        Ok((target, dropped))
    }

    pub fn has_position(&self, position: &Position) -> bool {
        self.positions.contains(position)
    }

    pub fn has_position_with_title(&self, title: &Title) -> bool {
        self.positions.contains_title(title)
    }

    pub fn get_position_by_title(&self, title: &Title) -> TrackerResult<&Position> {
        self.positions.get_by_title(title)
    }

    pub fn list_positions<P>(&self, predicate: P) -> Vec<&Position>
    where
        P: Fn(&Position) -> bool,
    {
        self.positions
            .iter()
            .filter(|position| predicate(position))
            .collect()
    }

    pub fn update_filtered_positions(&mut self, predicate: Predicate<Position>) {
        self.position_view.set_shared_predicate(predicate);
    }

    pub fn show_all_positions(&mut self) {
        self.position_view.show_all();
    }

    pub fn filtered_positions(&self) -> Projection<'_, Position> {
        self.position_view.project(self.positions.as_slice())
    }

    pub fn position_book(&self) -> &PositionBook {
        &self.positions
    }

    // --------------------------------------------------------------- applicants

    /// Add an applicant whose embedded position is refreshed from the position book.
    pub fn add_applicant(&mut self, applicant: Applicant) -> TrackerResult<()> {
        let applicant = self.with_current_position(applicant)?;
        let name = applicant.name.clone();
        self.applicants.add(applicant)?;
        self.applicant_view.show_all();
        debug!(%name, "added applicant");
        Ok(())
    }

    /// Create an applicant from raw particulars, resolving the position by title.
    pub fn add_applicant_from_fields(
        &mut self,
        particulars: ApplicantParticulars,
    ) -> TrackerResult<Applicant> {
        let position = IntegrityCoordinator::new(&self.positions, &mut self.applicants)
            .resolve_title(&particulars.position_title)?;
        let applicant = particulars.into_applicant(position);
        self.applicants.add(applicant.clone())?;
        self.applicant_view.show_all();
        debug!(name = %applicant.name, title = %applicant.title(), "added applicant");
        Ok(applicant)
    }

    pub fn set_applicant(
        &mut self,
        target: &Applicant,
        replacement: Applicant,
    ) -> TrackerResult<()> {
        let replacement = self.with_current_position(replacement)?;
        let name = replacement.name.clone();
        self.applicants.set(target, replacement)?;
        debug!(from = %target.name, to = %name, "updated applicant");
        Ok(())
    }

    pub fn remove_applicant(&mut self, applicant: &Applicant) -> TrackerResult<Applicant> {
        let removed = self.applicants.remove(applicant)?;
        debug!(name = %removed.name, "removed applicant");
        Ok(removed)
    }

    pub fn edit_applicant(
        &mut self,
        name: &Name,
        descriptor: &EditApplicantDescriptor,
    ) -> TrackerResult<Applicant> {
        let target = self.applicants.find_by_name_ignore_case(name)?.clone();
        let positions = &self.positions;
        let edited = descriptor.apply(&target, |title| resolve_title(positions, title))?;
        self.set_applicant(&target, edited.clone())?;
        Ok(edited)
    }

    pub fn mark_applicant(
        &mut self,
        name: &Name,
        status: ApplicationStatus,
    ) -> TrackerResult<Applicant> {
        let descriptor = EditApplicantDescriptor {
            status: Some(status),
            ..EditApplicantDescriptor::default()
        };
        self.edit_applicant(name, &descriptor)
    }

    pub fn delete_applicant_by_name(&mut self, name: &Name) -> TrackerResult<Applicant> {
        let target = self.applicants.find_by_name_ignore_case(name)?.clone();
        self.remove_applicant(&target)
    }

    pub fn has_applicant(&self, applicant: &Applicant) -> bool {
        self.applicants.contains(applicant)
    }

    pub fn has_applicant_with_name(&self, name: &Name) -> bool {
        self.applicants.contains_name(name)
    }

    pub fn get_applicant_by_name_ignore_case(&self, name: &Name) -> TrackerResult<&Applicant> {
        self.applicants.find_by_name_ignore_case(name)
    }

    pub fn list_applicants<P>(&self, predicate: P) -> Vec<&Applicant>
    where
        P: Fn(&Applicant) -> bool,
    {
        self.applicants
            .iter()
            .filter(|applicant| predicate(applicant))
            .collect()
    }

    pub fn update_filtered_applicants(&mut self, predicate: Predicate<Applicant>) {
        self.applicant_view.set_shared_predicate(predicate);
    }

    pub fn show_all_applicants(&mut self) {
        self.applicant_view.show_all();
    }

    pub fn filtered_applicants(&self) -> Projection<'_, Applicant> {
        self.applicant_view.project(self.applicants.as_slice())
    }

    pub fn applicant_book(&self) -> &ApplicantBook {
        &self.applicants
    }

    // --------------------------------------------------------------- statistics

    /// Rejected applicants over all applicants of the titled position; 0 with no applicants.
    pub fn calculate_rejection_rate(&self, title: &Title) -> TrackerResult<f64> {
        let position = self.positions.get_by_title(title)?;
        Ok(RejectionRate::for_position(position, &self.applicants).rate)
    }

    /// One entry per position, in position order.
    pub fn rejection_rates(&self) -> Vec<RejectionRate> {
        self.positions
            .iter()
            .map(|position| RejectionRate::for_position(position, &self.applicants))
            .collect()
    }

    // ------------------------------------------------------------------ history

    /// Snapshot both books ahead of a mutation, replacing any earlier snapshot.
    pub fn record_snapshot(&mut self, description: impl Into<String>) {
        self.history
            .record_before_mutation(&self.positions, &self.applicants, description);
    }

    pub fn has_undo_available(&self) -> bool {
        self.history.has_undo_available()
    }

    /// The snapshot `undo` would restore, if any.
    pub fn pending_snapshot(&self) -> Option<&Memento> {
        self.history.snapshot()
    }

    /// Re-arm undo with a snapshot kept outside the model, such as one read back
    /// from disk.
    pub fn restore_snapshot(&mut self, memento: Memento) {
        debug!(description = %memento.description, "restored undo snapshot");
        self.history.restore(memento);
    }

    /// Restore the last snapshot and return its description.
    pub fn undo(&mut self) -> TrackerResult<String> {
        let description = self
            .history
            .undo(&mut self.positions, &mut self.applicants)?;
        info!(%description, "restored snapshot");
        Ok(description)
    }

    // --------------------------------------------------------------------- bulk

    /// Replace every position. Applicants must all still resolve to a title in
    /// `positions`; their embedded copies are refreshed to the new data.
    pub fn reset_positions(&mut self, positions: Vec<Position>) -> TrackerResult<()> {
        let mut book = PositionBook::new();
        book.reset(positions)?;
        let applicants = refreshed_applicants(&book, self.applicants.iter().cloned())?;

        let mut applicant_book = ApplicantBook::new();
        applicant_book.reset(applicants)?;

        self.positions = book;
        self.applicants = applicant_book;
        info!(positions = self.positions.len(), "reset position book");
        Ok(())
    }

    /// Replace every applicant; each must name a position present in the book.
    pub fn reset_applicants(&mut self, applicants: Vec<Applicant>) -> TrackerResult<()> {
        let applicants = refreshed_applicants(&self.positions, applicants)?;
        let mut book = ApplicantBook::new();
        book.reset(applicants)?;

        self.applicants = book;
        info!(applicants = self.applicants.len(), "reset applicant book");
        Ok(())
    }

    pub fn export_snapshot(&self) -> TrackerSnapshot {
        TrackerSnapshot {
            positions: self.positions.clone(),
            applicants: self.applicants.clone(),
        }
    }

    fn with_current_position(&self, applicant: Applicant) -> TrackerResult<Applicant> {
        let position = resolve_title(&self.positions, applicant.title())?;
        let application = applicant.application.for_position(position);
        Ok(Applicant {
            application,
            ..applicant
        })
    }
}

fn refreshed_applicants<I>(positions: &PositionBook, applicants: I) -> TrackerResult<Vec<Applicant>>
where
    I: IntoIterator<Item = Applicant>,
{
    applicants
        .into_iter()
        .map(|applicant| match positions.find_by_title(applicant.title()) {
            Some(position) => {
                let application = applicant.application.for_position(position.clone());
                Ok(Applicant {
                    application,
                    ..applicant
                })
            }
            None => Err(TrackerError::MissingReference {
                applicant: applicant.name.to_string(),
                title: applicant.title().to_string(),
            }),
        })
        .collect()
}
