use hiring_tracker::error::AppError;
use hiring_tracker::tracker::view::{applicant_has_status, applicant_name_contains_keywords};
use hiring_tracker::tracker::{
    ApplicantParticulars, ApplicationStatus, Description, EditApplicantDescriptor,
    EditPositionDescriptor, Name, Position, PositionStatus, Title, TrackerModel,
};

use crate::report;

const DEMO_POSITIONS: [(&str, &str); 3] = [
    ("Data Engineer", "Builds and maintains data pipelines"),
    ("Data Scientist", "Models customer behaviour"),
    ("Software Architect", "Owns the platform architecture"),
];

const DEMO_APPLICANTS: [(&str, &str, &str, &str); 5] = [
    ("Alice Pauline", "94351253", "alice@example.com", "Data Scientist"),
    ("Benson Meier", "98765432", "johnd@example.com", "Software Architect"),
    ("Carl Kurz", "95352563", "heinz@example.com", "Data Scientist"),
    ("Daniel Meier", "87652533", "cornelia@example.com", "Data Engineer"),
    ("George Best", "94824420", "anna@example.com", "Data Engineer"),
];

pub(crate) fn run_demo() -> Result<(), AppError> {
    println!("Hiring tracker demo (in memory, nothing is saved)");
    let mut model = seeded_model()?;
    report::render_positions(model.filtered_positions());
    report::render_applicants(model.filtered_applicants());

    println!("\nDecisions");
    let alice = Name::parse("Alice Pauline")?;
    let daniel = Name::parse("daniel meier")?;
    model.mark_applicant(&alice, ApplicationStatus::Accepted)?;
    let marked = model.mark_applicant(&daniel, ApplicationStatus::Rejected)?;
    println!("- {}", report::applicant_line(&marked));
    report::render_rejection_rates(&model.rejection_rates());

    println!("\nCarl moves to Software Architect, George withdraws");
    let move_carl = EditApplicantDescriptor {
        title: Some(Title::parse("Software Architect")?),
        ..EditApplicantDescriptor::default()
    };
    let carl = model.edit_applicant(&Name::parse("Carl Kurz")?, &move_carl)?;
    println!("- {}", report::applicant_line(&carl));
    let george = model.delete_applicant_by_name(&Name::parse("George Best")?)?;
    println!("- removed {}", george.name);

    println!("\nRename Data Engineer to Senior Data Engineer");
    let rename = EditPositionDescriptor {
        title: Some(Title::parse("Senior Data Engineer")?),
        status: Some(PositionStatus::Closed),
        ..EditPositionDescriptor::default()
    };
    let renamed = model.edit_position(&Title::parse("Data Engineer")?, &rename)?;
    println!("- {}", report::position_line(&renamed));
    let daniel_now = model.get_applicant_by_name_ignore_case(&daniel)?;
    println!("- {}", report::applicant_line(daniel_now));

    println!("\nApplicants named Meier");
    model.update_filtered_applicants(applicant_name_contains_keywords(["Meier"]));
    report::render_applicants(model.filtered_applicants());
    println!("Rejected applicants");
    model.update_filtered_applicants(applicant_has_status(ApplicationStatus::Rejected));
    report::render_applicants(model.filtered_applicants());
    model.show_all_applicants();

    println!("\nDelete Senior Data Engineer, then undo");
    let before = model.export_snapshot();
    model.record_snapshot("delete position Senior Data Engineer");
    let (removed, dropped) = model.delete_position_by_title(&renamed.title)?;
    println!(
        "- removed {} and {} applicant(s); {} applicant(s) remain",
        removed.title,
        dropped.len(),
        model.applicant_book().len()
    );
    let undone = model.undo()?;
    println!("- undid: {undone}");
    println!(
        "- state restored: {} | undo still available: {}",
        model.export_snapshot() == before,
        model.has_undo_available()
    );
    if let Err(err) = model.undo() {
        println!("- second undo refused: {err}");
    }

    println!("\nRejected requests leave the books untouched");
    let duplicate = ApplicantParticulars::parse(
        "alice pauline",
        "90000000",
        "other@example.com",
        "Elsewhere",
        "Data Scientist",
        "",
    )?;
    if let Err(err) = model.add_applicant_from_fields(duplicate) {
        println!("- {err}");
    }
    if let Err(err) = model.calculate_rejection_rate(&Title::parse("Chef")?) {
        println!("- {err}");
    }

    Ok(())
}

fn seeded_model() -> Result<TrackerModel, AppError> {
    let mut model = TrackerModel::new();
    for (title, description) in DEMO_POSITIONS {
        model.add_position(Position::new(
            Title::parse(title)?,
            Description::parse(description)?,
        ))?;
    }
    for (name, phone, email, title) in DEMO_APPLICANTS {
        let particulars = ApplicantParticulars::parse(
            name,
            phone,
            email,
            "311, Clementi Ave 2, #02-25",
            title,
            "https://github.com/example",
        )?;
        model.add_applicant_from_fields(particulars)?;
    }
    Ok(model)
}
