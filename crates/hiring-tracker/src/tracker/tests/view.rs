use super::common::*;
use crate::tracker::view::{
    applicant_applying_to, applicant_has_status, applicant_name_contains_keywords,
    position_title_contains_keywords,
};
use crate::tracker::{ApplicationStatus, FilteredView};

#[test]
fn default_view_shows_everything_in_order() {
    let applicants = typical_applicants();
    let view = FilteredView::new();

    let projection = view.project(&applicants);
    assert_eq!(projection.len(), applicants.len());
    assert_eq!(projection.to_vec(), applicants);
}

#[test]
fn name_keyword_filter_is_stable_and_clearable() {
    let applicants = vec![alice(), benson(), daniel(), hoon()];
    let mut view = FilteredView::new();

    view.set_shared_predicate(applicant_name_contains_keywords(["Meier"]));
    let names: Vec<&str> = view
        .project(&applicants)
        .iter()
        .map(|applicant| applicant.name.as_str())
        .collect();
    assert_eq!(names, ["Benson Meier", "Daniel Meier", "Hoon Meier"]);

    view.show_all();
    assert_eq!(view.project(&applicants).len(), 4);
}

#[test]
fn keyword_matching_is_whole_word_and_case_insensitive() {
    let applicants = typical_applicants();
    let mut view = FilteredView::new();

    view.set_shared_predicate(applicant_name_contains_keywords(["alice", "kurz"]));
    assert_eq!(view.project(&applicants).to_vec(), vec![alice(), carl()]);

    view.set_shared_predicate(applicant_name_contains_keywords(["Ali"]));
    assert!(view.project(&applicants).is_empty());
}

#[test]
fn setting_a_predicate_replaces_the_previous_one() {
    let applicants = vec![
        alice().mark_as(ApplicationStatus::Rejected),
        daniel(),
        george().mark_as(ApplicationStatus::Rejected),
    ];
    let mut view = FilteredView::new();

    view.set_shared_predicate(applicant_has_status(ApplicationStatus::Rejected));
    assert_eq!(view.project(&applicants).len(), 2);

    view.set_shared_predicate(applicant_applying_to(title("Data Engineer")));
    let projection = view.project(&applicants);
    assert_eq!(projection.len(), 2);
    assert_eq!(projection[0].name.as_str(), "Daniel Meier");
}

#[test]
fn position_titles_filter_by_keyword() {
    let positions = typical_positions();
    let mut view = FilteredView::new();

    view.set_shared_predicate(position_title_contains_keywords(["data"]));
    assert_eq!(
        view.project(&positions).to_vec(),
        vec![data_scientist(), data_engineer()]
    );

    view.set_predicate(|position: &crate::tracker::Position| {
        position.title.as_str().starts_with("Software")
    });
    assert_eq!(view.project(&positions).to_vec(), vec![software_architect()]);
}
