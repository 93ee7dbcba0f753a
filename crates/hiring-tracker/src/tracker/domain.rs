use std::fmt;

use serde::Serialize;

use super::fields::{
    Address, ApplicationStatus, Description, Email, Name, Phone, PositionStatus, ProfileUrl, Title,
};

/// The two kinds of record held by the tracker, used to label errors and log events.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RecordKind {
    Position,
    Applicant,
}

impl RecordKind {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Position => "position",
            Self::Applicant => "applicant",
        }
    }
}

impl fmt::Display for RecordKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A hiring role. Two positions are the same position when their titles match.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Position {
    pub title: Title,
    pub description: Description,
    pub status: PositionStatus,
}

impl Position {
    pub fn new(title: Title, description: Description) -> Self {
        Self {
            title,
            description,
            status: PositionStatus::Open,
        }
    }

    pub fn with_status(mut self, status: PositionStatus) -> Self {
        self.status = status;
        self
    }

    pub fn has_title(&self, title: &Title) -> bool {
        &self.title == title
    }

    pub fn is_same_position(&self, other: &Position) -> bool {
        self.has_title(&other.title)
    }
}

/// Value object pairing a copy of the applied-to position with the applicant's status.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Application {
    pub position: Position,
    pub status: ApplicationStatus,
}

impl Application {
    pub fn new(position: Position) -> Self {
        Self {
            position,
            status: ApplicationStatus::Pending,
        }
    }

    /// Same status, different position snapshot.
    pub fn for_position(&self, position: Position) -> Self {
        Self {
            position,
            status: self.status,
        }
    }
}

/// A candidate applying to exactly one position.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Applicant {
    pub name: Name,
    pub phone: Phone,
    pub email: Email,
    pub address: Address,
    pub application: Application,
    pub profile_url: ProfileUrl,
}

impl Applicant {
    pub fn new(
        name: Name,
        phone: Phone,
        email: Email,
        address: Address,
        position: Position,
        profile_url: ProfileUrl,
    ) -> Self {
        Self {
            name,
            phone,
            email,
            address,
            application: Application::new(position),
            profile_url,
        }
    }

    pub fn is_same_applicant(&self, other: &Applicant) -> bool {
        self.name.same_identity(&other.name)
    }

    /// Exact, case-sensitive name match.
    pub fn has_name(&self, name: &Name) -> bool {
        &self.name == name
    }

    pub fn has_name_ignore_case(&self, name: &Name) -> bool {
        self.name.same_identity(name)
    }

    pub fn is_applying_to(&self, position: &Position) -> bool {
        self.application.position.is_same_position(position)
    }

    pub fn is_applying_to_title(&self, title: &Title) -> bool {
        self.application.position.has_title(title)
    }

    pub fn status(&self) -> ApplicationStatus {
        self.application.status
    }

    pub fn title(&self) -> &Title {
        &self.application.position.title
    }

    pub fn mark_as(mut self, status: ApplicationStatus) -> Self {
        self.application.status = status;
        self
    }
}

/// Raw applicant fields naming the position by title instead of carrying a position copy.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApplicantParticulars {
    pub name: Name,
    pub phone: Phone,
    pub email: Email,
    pub address: Address,
    pub position_title: Title,
    pub profile_url: ProfileUrl,
}

impl ApplicantParticulars {
    /// Validate the raw strings a caller collected into typed fields.
    pub fn parse(
        name: &str,
        phone: &str,
        email: &str,
        address: &str,
        position_title: &str,
        profile_url: &str,
    ) -> Result<Self, super::fields::ValidationError> {
        Ok(Self {
            name: Name::parse(name)?,
            phone: Phone::parse(phone)?,
            email: Email::parse(email)?,
            address: Address::parse(address)?,
            position_title: Title::parse(position_title)?,
            profile_url: ProfileUrl::parse(profile_url)?,
        })
    }

    pub fn into_applicant(self, position: Position) -> Applicant {
        Applicant::new(
            self.name,
            self.phone,
            self.email,
            self.address,
            position,
            self.profile_url,
        )
    }
}
