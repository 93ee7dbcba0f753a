use super::domain::{Applicant, Position};
use super::error::TrackerResult;
use super::fields::{
    Address, ApplicationStatus, Description, Email, Name, Phone, PositionStatus, ProfileUrl,
    Title, ValidationError,
};

const NOTHING_EDITED: ValidationError =
    ValidationError::new("edit", "at least one field to edit must be provided");

/// Partial update for a position. Each present field replaces the base value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EditPositionDescriptor {
    pub title: Option<Title>,
    pub description: Option<Description>,
    pub status: Option<PositionStatus>,
}

impl EditPositionDescriptor {
    pub fn is_any_field_edited(&self) -> bool {
        self.title.is_some() || self.description.is_some() || self.status.is_some()
    }

    pub fn apply(&self, base: &Position) -> Result<Position, ValidationError> {
        if !self.is_any_field_edited() {
            return Err(NOTHING_EDITED);
        }

        Ok(Position {
            title: self.title.clone().unwrap_or_else(|| base.title.clone()),
            description: self
                .description
                .clone()
                .unwrap_or_else(|| base.description.clone()),
            status: self.status.unwrap_or(base.status),
        })
    }
}

/// Partial update for an applicant.
///
/// `title` names the position to move the applicant to; it is resolved by the
/// caller-supplied lookup so the descriptor never needs a live position handle.
/// Moving to another position keeps the current status unless `status` is also set.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EditApplicantDescriptor {
    pub name: Option<Name>,
    pub phone: Option<Phone>,
    pub email: Option<Email>,
    pub address: Option<Address>,
    pub title: Option<Title>,
    pub status: Option<ApplicationStatus>,
    pub profile_url: Option<ProfileUrl>,
}

impl EditApplicantDescriptor {
    pub fn is_any_field_edited(&self) -> bool {
        self.name.is_some()
            || self.phone.is_some()
            || self.email.is_some()
            || self.address.is_some()
            || self.title.is_some()
            || self.status.is_some()
            || self.profile_url.is_some()
    }

    pub fn apply<F>(&self, base: &Applicant, resolve_title: F) -> TrackerResult<Applicant>
    where
        F: FnOnce(&Title) -> TrackerResult<Position>,
    {
        if !self.is_any_field_edited() {
            return Err(NOTHING_EDITED.into());
        }

        let position = match &self.title {
            Some(title) => resolve_title(title)?,
            None => base.application.position.clone(),
        };
        let mut application = base.application.for_position(position);
        if let Some(status) = self.status {
            application.status = status;
        }

        Ok(Applicant {
            name: self.name.clone().unwrap_or_else(|| base.name.clone()),
            phone: self.phone.clone().unwrap_or_else(|| base.phone.clone()),
            email: self.email.clone().unwrap_or_else(|| base.email.clone()),
            address: self.address.clone().unwrap_or_else(|| base.address.clone()),
            application,
            profile_url: self
                .profile_url
                .clone()
                .unwrap_or_else(|| base.profile_url.clone()),
        })
    }
}
