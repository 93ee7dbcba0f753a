//! Property-based tests for the tracker invariants.
//!
//! Arbitrary operation sequences over a small pool of titles and names, so that
//! collisions, renames onto taken titles and case-only name clashes come up often.

use std::collections::HashSet;

use hiring_tracker::tracker::{
    ApplicantParticulars, ApplicationStatus, Description, EditApplicantDescriptor,
    EditPositionDescriptor, Name, Position, Title, TrackerModel,
};
use proptest::prelude::*;

const TITLES: [&str; 3] = ["Analyst", "Designer", "Engineer"];
const NAMES: [&str; 4] = ["Ann Lee", "ann lee", "Bo Chan", "Cy Tan"];

#[derive(Debug, Clone)]
enum Op {
    AddPosition(usize),
    DeletePosition(usize),
    RenamePosition(usize, usize),
    AddApplicant(usize, usize),
    DeleteApplicant(usize),
    MarkApplicant(usize, ApplicationStatus),
    MoveApplicant(usize, usize),
}

fn op_strategy() -> impl Strategy<Value = Op> {
    let title = 0..TITLES.len();
    let name = 0..NAMES.len();
    let status = prop_oneof![
        Just(ApplicationStatus::Pending),
        Just(ApplicationStatus::Accepted),
        Just(ApplicationStatus::Rejected),
    ];
    prop_oneof![
        title.clone().prop_map(Op::AddPosition),
        title.clone().prop_map(Op::DeletePosition),
        (title.clone(), title.clone()).prop_map(|(from, to)| Op::RenamePosition(from, to)),
        (name.clone(), title.clone()).prop_map(|(n, t)| Op::AddApplicant(n, t)),
        name.clone().prop_map(Op::DeleteApplicant),
        (name.clone(), status).prop_map(|(n, s)| Op::MarkApplicant(n, s)),
        (name, title).prop_map(|(n, t)| Op::MoveApplicant(n, t)),
    ]
}

fn title(index: usize) -> Title {
    Title::parse(TITLES[index]).expect("valid title")
}

fn name(index: usize) -> Name {
    Name::parse(NAMES[index]).expect("valid name")
}

fn apply(model: &mut TrackerModel, op: &Op) -> bool {
    match *op {
        Op::AddPosition(t) => {
            let description = Description::parse("Open role").expect("valid description");
            model.add_position(Position::new(title(t), description)).is_ok()
        }
        Op::DeletePosition(t) => model.delete_position_by_title(&title(t)).is_ok(),
        Op::RenamePosition(from, to) => {
            let descriptor = EditPositionDescriptor {
                title: Some(title(to)),
                ..EditPositionDescriptor::default()
            };
            model.edit_position(&title(from), &descriptor).is_ok()
        }
        Op::AddApplicant(n, t) => {
            let particulars = ApplicantParticulars::parse(
                NAMES[n],
                "9876",
                "x@example.com",
                "Here",
                TITLES[t],
                "",
            )
            .expect("valid particulars");
            model.add_applicant_from_fields(particulars).is_ok()
        }
        Op::DeleteApplicant(n) => model.delete_applicant_by_name(&name(n)).is_ok(),
        Op::MarkApplicant(n, status) => model.mark_applicant(&name(n), status).is_ok(),
        Op::MoveApplicant(n, t) => {
            let descriptor = EditApplicantDescriptor {
                title: Some(title(t)),
                ..EditApplicantDescriptor::default()
            };
            model.edit_applicant(&name(n), &descriptor).is_ok()
        }
    }
}

fn assert_invariants(model: &TrackerModel) -> Result<(), TestCaseError> {
    let mut titles = HashSet::new();
    for position in model.position_book() {
        prop_assert!(titles.insert(position.title.as_str()), "duplicate title");
    }

    let mut names = HashSet::new();
    for applicant in model.applicant_book() {
        prop_assert!(
            names.insert(applicant.name.as_str().to_lowercase()),
            "duplicate applicant identity"
        );
        let stored = model.get_position_by_title(applicant.title());
        prop_assert_eq!(stored.ok(), Some(&applicant.application.position));
    }
    Ok(())
}

#[test]
fn prop_invariants_hold_after_any_operation_sequence() {
    proptest!(|(ops in prop::collection::vec(op_strategy(), 1..40))| {
        let mut model = TrackerModel::new();
        for op in &ops {
            let before = model.export_snapshot();
            if !apply(&mut model, op) {
                prop_assert_eq!(model.export_snapshot(), before, "failed {:?} changed state", op);
            }
            assert_invariants(&model)?;
        }
    });
}

#[test]
fn prop_undo_restores_the_recorded_state() {
    proptest!(|(
        setup in prop::collection::vec(op_strategy(), 0..20),
        mutation in op_strategy()
    )| {
        let mut model = TrackerModel::new();
        for op in &setup {
            apply(&mut model, op);
        }
        let before = model.export_snapshot();

        model.record_snapshot(format!("{mutation:?}"));
        apply(&mut model, &mutation);
        let description = model.undo().expect("snapshot was recorded");

        prop_assert_eq!(description, format!("{mutation:?}"));
        prop_assert_eq!(model.export_snapshot(), before);
        prop_assert!(!model.has_undo_available());
    });
}
