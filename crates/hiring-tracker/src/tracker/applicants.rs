use super::domain::{Applicant, Position, RecordKind};
use super::error::{TrackerError, TrackerResult};
use super::fields::Name;

/// Ordered set of applicants, unique by case-insensitive name.
///
/// Adding and replacing use [`Applicant::is_same_applicant`]; removal requires an
/// applicant with exactly the same fields.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ApplicantBook {
    applicants: Vec<Applicant>,
}

impl ApplicantBook {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contains(&self, applicant: &Applicant) -> bool {
        self.applicants
            .iter()
            .any(|existing| existing.is_same_applicant(applicant))
    }

    pub fn contains_name(&self, name: &Name) -> bool {
        self.applicants.iter().any(|existing| existing.has_name(name))
    }

    pub fn find_by_name_ignore_case(&self, name: &Name) -> TrackerResult<&Applicant> {
        self.applicants
            .iter()
            .find(|existing| existing.has_name_ignore_case(name))
            .ok_or_else(|| TrackerError::not_found(RecordKind::Applicant, name.as_str()))
    }

    pub fn add(&mut self, applicant: Applicant) -> TrackerResult<()> {
        if self.contains(&applicant) {
            return Err(TrackerError::duplicate(
                RecordKind::Applicant,
                applicant.name.as_str(),
            ));
        }
        self.applicants.push(applicant);
        Ok(())
    }

    pub fn set(&mut self, target: &Applicant, replacement: Applicant) -> TrackerResult<()> {
        let index = self.index_of(target)?;

        if !target.is_same_applicant(&replacement) && self.contains(&replacement) {
            return Err(TrackerError::duplicate(
                RecordKind::Applicant,
                replacement.name.as_str(),
            ));
        }

        self.applicants[index] = replacement;
        Ok(())
    }

    pub fn remove(&mut self, applicant: &Applicant) -> TrackerResult<Applicant> {
        let index = self.index_of(applicant)?;
        Ok(self.applicants.remove(index))
    }

    /// Drop every applicant matching `predicate`, returning the removed records in order.
    pub fn remove_where<P>(&mut self, mut predicate: P) -> Vec<Applicant>
    where
        P: FnMut(&Applicant) -> bool,
    {
        let (removed, kept): (Vec<Applicant>, Vec<Applicant>) =
            std::mem::take(&mut self.applicants)
                .into_iter()
                .partition(|applicant| predicate(applicant));
        self.applicants = kept;
        removed
    }

    /// Point every applicant of `old` at `new`, keeping each applicant's status and slot.
    ///
    /// Rewrites are collected first and swapped in through [`ApplicantBook::set`]
    /// in a second pass, so the ordering never shifts while the book is walked.
    /// Returns how many applicants were rewritten. An error can leave earlier
    /// rewrites applied; callers needing all-or-nothing run this on a copy.
    pub fn replace_applications_for_position(
        &mut self,
        old: &Position,
        new: &Position,
    ) -> TrackerResult<usize> {
        let replacements: Vec<(Applicant, Applicant)> = self
            .applicants
            .iter()
            .filter(|applicant| applicant.is_applying_to(old))
            .map(|current| {
                let updated = Applicant {
                    application: current.application.for_position(new.clone()),
                    ..current.clone()
                };
                (current.clone(), updated)
            })
            .collect();

        let count = replacements.len();
        for (current, updated) in replacements {
            self.set(&current, updated)?;
        }
        Ok(count)
    }

    /// Replace the whole book; fails without changes if two applicants share an identity.
    pub fn reset(&mut self, applicants: Vec<Applicant>) -> TrackerResult<()> {
        if let Some(duplicate) = first_duplicate(&applicants) {
            return Err(TrackerError::duplicate(
                RecordKind::Applicant,
                duplicate.name.as_str(),
            ));
        }
        self.applicants = applicants;
        Ok(())
    }

    pub fn as_slice(&self) -> &[Applicant] {
        &self.applicants
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Applicant> {
        self.applicants.iter()
    }

    pub fn len(&self) -> usize {
        self.applicants.len()
    }

    pub fn is_empty(&self) -> bool {
        self.applicants.is_empty()
    }

    fn index_of(&self, applicant: &Applicant) -> TrackerResult<usize> {
        self.applicants
            .iter()
            .position(|existing| existing == applicant)
            .ok_or_else(|| TrackerError::not_found(RecordKind::Applicant, applicant.name.as_str()))
    }
}

impl<'a> IntoIterator for &'a ApplicantBook {
    type Item = &'a Applicant;
    type IntoIter = std::slice::Iter<'a, Applicant>;

    fn into_iter(self) -> Self::IntoIter {
        self.applicants.iter()
    }
}

fn first_duplicate(applicants: &[Applicant]) -> Option<&Applicant> {
    applicants.iter().enumerate().find_map(|(index, applicant)| {
        applicants[index + 1..]
            .iter()
            .find(|other| other.is_same_applicant(applicant))
    })
}
