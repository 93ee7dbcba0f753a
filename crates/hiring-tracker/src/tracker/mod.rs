//! Position and applicant books, the cascades between them, filtered views and
//! single-level undo, composed behind [`TrackerModel`].

pub mod applicants;
pub mod descriptor;
pub mod domain;
mod error;
pub mod fields;
pub mod history;
pub(crate) mod integrity;
mod model;
pub mod positions;
pub mod statistics;
pub mod view;

#[cfg(test)]
mod tests;

pub use applicants::ApplicantBook;
pub use descriptor::{EditApplicantDescriptor, EditPositionDescriptor};
pub use domain::{Applicant, ApplicantParticulars, Application, Position, RecordKind};
pub use error::{TrackerError, TrackerResult};
pub use fields::{
    Address, ApplicationStatus, Description, Email, Name, Phone, PositionStatus, ProfileUrl,
    Title, ValidationError,
};
pub use history::{CommandHistory, HistoryState, Memento};
pub use model::{TrackerModel, TrackerSnapshot};
pub use positions::PositionBook;
pub use statistics::RejectionRate;
pub use view::{FilteredView, Predicate, Projection};
