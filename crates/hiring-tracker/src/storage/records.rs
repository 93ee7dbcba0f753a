use serde::{Deserialize, Serialize};
use tracing::warn;

use super::StorageError;
use crate::tracker::{
    Address, Applicant, ApplicationStatus, Description, Email, Name, Phone, Position,
    PositionBook, PositionStatus, ProfileUrl, RecordKind, Title, TrackerError,
};

/// On-disk shape of a position. Every field is optional so a missing one can be
/// reported by name instead of as a generic decode error.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub(crate) struct PositionRecord {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
}

impl PositionRecord {
    pub fn from_model(position: &Position) -> Self {
        Self {
            title: Some(position.title.to_string()),
            description: Some(position.description.to_string()),
            status: Some(position.status.name().to_string()),
        }
    }

    pub fn to_model(&self) -> Result<Position, StorageError> {
        let title = Title::parse(required(RecordKind::Position, "title", &self.title)?)
            .map_err(TrackerError::from)?;
        let description =
            Description::parse(required(RecordKind::Position, "description", &self.description)?)
                .map_err(TrackerError::from)?;
        let status = match self.status.as_deref() {
            Some(raw) => PositionStatus::parse(raw).map_err(TrackerError::from)?,
            None => PositionStatus::default(),
        };

        Ok(Position::new(title, description).with_status(status))
    }
}

/// On-disk shape of an applicant; the position is stored by title only.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct ApplicantRecord {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub position_applying_to: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub application_status: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub git_hub_url: Option<String>,
}

impl ApplicantRecord {
    pub fn from_model(applicant: &Applicant) -> Self {
        Self {
            name: Some(applicant.name.to_string()),
            phone: Some(applicant.phone.to_string()),
            email: Some(applicant.email.to_string()),
            address: Some(applicant.address.to_string()),
            position_applying_to: Some(applicant.title().to_string()),
            application_status: Some(applicant.status().name().to_string()),
            git_hub_url: Some(applicant.profile_url.to_string()),
        }
    }

    /// Rebuild the applicant, resolving its position against the loaded book.
    pub fn to_model(&self, positions: &PositionBook) -> Result<Applicant, StorageError> {
        const KIND: RecordKind = RecordKind::Applicant;

        let name = Name::parse(required(KIND, "name", &self.name)?).map_err(TrackerError::from)?;
        let phone =
            Phone::parse(required(KIND, "phone", &self.phone)?).map_err(TrackerError::from)?;
        let email =
            Email::parse(required(KIND, "email", &self.email)?).map_err(TrackerError::from)?;
        let address = Address::parse(required(KIND, "address", &self.address)?)
            .map_err(TrackerError::from)?;

        let raw_title = required(KIND, "positionApplyingTo", &self.position_applying_to)?;
        let title = Title::parse(raw_title).map_err(TrackerError::from)?;
        let position = positions
            .find_by_title(&title)
            .cloned()
            .ok_or_else(|| {
                warn!(applicant = %name, title = raw_title, "unknown position reference");
                TrackerError::MissingReference {
                    applicant: name.to_string(),
                    title: raw_title.to_string(),
                }
            })?;

        let status = ApplicationStatus::parse(required(
            KIND,
            "applicationStatus",
            &self.application_status,
        )?)
        .map_err(TrackerError::from)?;
        let profile_url = ProfileUrl::parse(required(KIND, "gitHubUrl", &self.git_hub_url)?)
            .map_err(TrackerError::from)?;

        Ok(Applicant::new(name, phone, email, address, position, profile_url).mark_as(status))
    }
}

fn required<'a>(
    kind: RecordKind,
    field: &'static str,
    value: &'a Option<String>,
) -> Result<&'a str, StorageError> {
    value.as_deref().ok_or_else(|| {
        warn!(%kind, field, "stored record is missing a field");
        StorageError::MissingField { kind, field }
    })
}
