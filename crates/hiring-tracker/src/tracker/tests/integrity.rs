use super::common::*;
use crate::tracker::integrity::IntegrityCoordinator;
use crate::tracker::{ApplicantBook, PositionBook, TrackerError};

fn books() -> (PositionBook, ApplicantBook) {
    let mut positions = PositionBook::new();
    positions.reset(typical_positions()).expect("unique");
    let mut applicants = ApplicantBook::new();
    applicants.reset(typical_applicants()).expect("unique");
    (positions, applicants)
}

#[test]
fn deletion_removes_only_dependants() {
    let (mut positions, mut applicants) = books();
    let removed_position = positions.remove(&data_engineer()).expect("present");

    let dropped = IntegrityCoordinator::new(&positions, &mut applicants)
        .on_position_deleted(&removed_position);

    assert_eq!(dropped, vec![daniel(), george()]);
    assert_eq!(applicants.as_slice(), &[alice(), benson(), carl()]);
}

#[test]
fn edit_rewrites_dependants_after_commit() {
    let (mut positions, mut applicants) = books();
    let senior = position("Senior Data Engineer", "Builds and maintains data pipelines");
    positions
        .set(&data_engineer(), senior.clone())
        .expect("rename commits first");

    let rewritten = IntegrityCoordinator::new(&positions, &mut applicants)
        .on_position_edited(&data_engineer(), &senior)
        .expect("rewrites keep applicant identity");

    assert_eq!(rewritten, 2);
    for applicant in applicants.iter() {
        match applicant.name.as_str() {
            "Daniel Meier" | "George Best" => {
                assert_eq!(applicant.application.position, senior)
            }
            _ => assert_ne!(applicant.application.position, senior),
        }
    }
}

#[test]
fn resolve_title_returns_a_copy_or_not_found() {
    let (positions, mut applicants) = books();
    let coordinator = IntegrityCoordinator::new(&positions, &mut applicants);

    let resolved = coordinator
        .resolve_title(&title("Software Architect"))
        .expect("present");
    assert_eq!(resolved, software_architect());

    assert!(matches!(
        coordinator.resolve_title(&title("Chef")),
        Err(TrackerError::NotFound { .. })
    ));
}
