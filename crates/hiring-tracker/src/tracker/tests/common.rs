use crate::tracker::domain::{Applicant, ApplicantParticulars, Position};
use crate::tracker::fields::{
    Address, ApplicationStatus, Description, Email, Name, Phone, ProfileUrl, Title,
};
use crate::tracker::TrackerModel;

pub(super) fn title(raw: &str) -> Title {
    Title::parse(raw).expect("valid title")
}

pub(super) fn name(raw: &str) -> Name {
    Name::parse(raw).expect("valid name")
}

pub(super) fn position(raw_title: &str, description: &str) -> Position {
    Position::new(
        title(raw_title),
        Description::parse(description).expect("valid description"),
    )
}

pub(super) fn data_engineer() -> Position {
    position("Data Engineer", "Builds and maintains data pipelines")
}

pub(super) fn data_scientist() -> Position {
    position("Data Scientist", "Models customer behaviour")
}

pub(super) fn software_architect() -> Position {
    position("Software Architect", "Owns the platform architecture")
}

pub(super) fn typical_positions() -> Vec<Position> {
    vec![data_scientist(), software_architect(), data_engineer()]
}

pub(super) fn applicant(raw_name: &str, phone: &str, email: &str, position: Position) -> Applicant {
    Applicant::new(
        name(raw_name),
        Phone::parse(phone).expect("valid phone"),
        Email::parse(email).expect("valid email"),
        Address::parse("311, Clementi Ave 2, #02-25").expect("valid address"),
        position,
        ProfileUrl::parse("https://github.com/empty").expect("valid url"),
    )
}

pub(super) fn alice() -> Applicant {
    applicant("Alice Pauline", "94351253", "alice@example.com", data_scientist())
}

pub(super) fn benson() -> Applicant {
    applicant("Benson Meier", "98765432", "johnd@example.com", software_architect())
}

pub(super) fn carl() -> Applicant {
    applicant("Carl Kurz", "95352563", "heinz@example.com", data_scientist())
}

pub(super) fn daniel() -> Applicant {
    applicant("Daniel Meier", "87652533", "cornelia@example.com", data_engineer())
}

pub(super) fn george() -> Applicant {
    applicant("George Best", "9482442", "anna@example.com", data_engineer())
}

pub(super) fn hoon() -> Applicant {
    applicant("Hoon Meier", "8482424", "stefan@example.com", data_engineer())
}

pub(super) fn typical_applicants() -> Vec<Applicant> {
    vec![alice(), benson(), carl(), daniel(), george()]
}

pub(super) fn particulars(raw_name: &str, raw_title: &str) -> ApplicantParticulars {
    ApplicantParticulars::parse(
        raw_name,
        "93121534",
        "amy@example.com",
        "Block 312, Amy Street 1",
        raw_title,
        "",
    )
    .expect("valid particulars")
}

pub(super) fn typical_model() -> TrackerModel {
    TrackerModel::with_records(typical_positions(), typical_applicants())
        .expect("typical records are consistent")
}

pub(super) fn statuses_for(model: &TrackerModel, raw_title: &str) -> Vec<ApplicationStatus> {
    let title = title(raw_title);
    model
        .applicant_book()
        .iter()
        .filter(|applicant| applicant.is_applying_to_title(&title))
        .map(Applicant::status)
        .collect()
}
