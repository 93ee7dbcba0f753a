use std::path::PathBuf;
use std::sync::Arc;

use clap::{Args, Parser, Subcommand};
use hiring_tracker::config::{AppConfig, StorageConfig};
use hiring_tracker::error::AppError;
use hiring_tracker::telemetry;
use hiring_tracker::tracker::view::{
    applicant_applying_to, applicant_has_status, applicant_name_contains_keywords,
    position_title_contains_keywords,
};
use hiring_tracker::tracker::{
    Address, Applicant, ApplicantParticulars, ApplicationStatus, Description,
    EditApplicantDescriptor, EditPositionDescriptor, Email, Name, Phone, Position, PositionStatus,
    Predicate, ProfileUrl, Title,
};

use crate::demo::run_demo;
use crate::report;
use crate::session::Session;

#[derive(Parser, Debug)]
#[command(
    name = "hiring-tracker",
    about = "Track open positions and the applicants applying to them",
    version
)]
struct Cli {
    /// Directory holding positionbook.json and applicantbook.json
    #[arg(long, global = true)]
    data_dir: Option<PathBuf>,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Manage positions
    Position {
        #[command(subcommand)]
        command: PositionCommand,
    },
    /// Manage applicants
    Applicant {
        #[command(subcommand)]
        command: ApplicantCommand,
    },
    /// Rejection rate per position
    Report,
    /// Revert the most recent change
    Undo,
    /// Scripted in-memory walkthrough; nothing is written to disk
    Demo,
}

#[derive(Subcommand, Debug)]
enum PositionCommand {
    /// Add a new position
    Add(AddPositionArgs),
    /// Edit the position with the given title; applicants follow the change
    Edit(EditPositionArgs),
    /// Delete a position together with everyone applying to it
    Delete {
        #[arg(value_parser = Title::parse)]
        title: Title,
    },
    /// List positions, optionally only those whose title contains a keyword
    List { keywords: Vec<String> },
}

#[derive(Subcommand, Debug)]
enum ApplicantCommand {
    /// Add a new applicant for an existing position
    Add(AddApplicantArgs),
    /// Edit the applicant with the given name
    Edit(EditApplicantArgs),
    /// Set an applicant's application status
    Mark {
        #[arg(value_parser = Name::parse)]
        name: Name,
        #[arg(value_parser = ApplicationStatus::parse)]
        status: ApplicationStatus,
    },
    /// Delete an applicant
    Delete {
        #[arg(value_parser = Name::parse)]
        name: Name,
    },
    /// List applicants, optionally filtered
    List(ListApplicantsArgs),
}

#[derive(Args, Debug)]
pub(crate) struct AddPositionArgs {
    #[arg(long, value_parser = Title::parse)]
    pub(crate) title: Title,
    #[arg(long, value_parser = Description::parse)]
    pub(crate) description: Description,
    #[arg(long, value_parser = PositionStatus::parse, default_value = "open")]
    pub(crate) status: PositionStatus,
}

#[derive(Args, Debug)]
pub(crate) struct EditPositionArgs {
    /// Current title of the position
    #[arg(value_parser = Title::parse)]
    pub(crate) target: Title,
    #[arg(long, value_parser = Title::parse)]
    pub(crate) title: Option<Title>,
    #[arg(long, value_parser = Description::parse)]
    pub(crate) description: Option<Description>,
    #[arg(long, value_parser = PositionStatus::parse)]
    pub(crate) status: Option<PositionStatus>,
}

#[derive(Args, Debug)]
pub(crate) struct AddApplicantArgs {
    #[arg(long, value_parser = Name::parse)]
    pub(crate) name: Name,
    #[arg(long, value_parser = Phone::parse)]
    pub(crate) phone: Phone,
    #[arg(long, value_parser = Email::parse)]
    pub(crate) email: Email,
    #[arg(long, value_parser = Address::parse)]
    pub(crate) address: Address,
    /// Title of the position applied to
    #[arg(long, value_parser = Title::parse)]
    pub(crate) position: Title,
    /// Public profile link
    #[arg(long, value_parser = ProfileUrl::parse, default_value = "")]
    pub(crate) github: ProfileUrl,
}

#[derive(Args, Debug)]
pub(crate) struct EditApplicantArgs {
    /// Current name of the applicant, matched ignoring case
    #[arg(value_parser = Name::parse)]
    pub(crate) target: Name,
    #[arg(long, value_parser = Name::parse)]
    pub(crate) name: Option<Name>,
    #[arg(long, value_parser = Phone::parse)]
    pub(crate) phone: Option<Phone>,
    #[arg(long, value_parser = Email::parse)]
    pub(crate) email: Option<Email>,
    #[arg(long, value_parser = Address::parse)]
    pub(crate) address: Option<Address>,
    #[arg(long, value_parser = Title::parse)]
    pub(crate) position: Option<Title>,
    #[arg(long, value_parser = ApplicationStatus::parse)]
    pub(crate) status: Option<ApplicationStatus>,
    /// New profile link; an empty value removes it
    #[arg(long, value_parser = ProfileUrl::parse)]
    pub(crate) github: Option<ProfileUrl>,
}

#[derive(Args, Debug, Default)]
pub(crate) struct ListApplicantsArgs {
    /// Keep applicants whose name contains any of these words
    pub(crate) keywords: Vec<String>,
    /// Keep applicants with this status
    #[arg(long, value_parser = ApplicationStatus::parse)]
    pub(crate) status: Option<ApplicationStatus>,
    /// Keep applicants applying to this position
    #[arg(long, value_parser = Title::parse)]
    pub(crate) position: Option<Title>,
}

impl EditPositionArgs {
    pub(crate) fn into_descriptor(self) -> (Title, EditPositionDescriptor) {
        let descriptor = EditPositionDescriptor {
            title: self.title,
            description: self.description,
            status: self.status,
        };
        (self.target, descriptor)
    }
}

impl EditApplicantArgs {
    pub(crate) fn into_descriptor(self) -> (Name, EditApplicantDescriptor) {
        let descriptor = EditApplicantDescriptor {
            name: self.name,
            phone: self.phone,
            email: self.email,
            address: self.address,
            title: self.position,
            status: self.status,
            profile_url: self.github,
        };
        (self.target, descriptor)
    }
}

impl From<AddApplicantArgs> for ApplicantParticulars {
    fn from(args: AddApplicantArgs) -> Self {
        Self {
            name: args.name,
            phone: args.phone,
            email: args.email,
            address: args.address,
            position_title: args.position,
            profile_url: args.github,
        }
    }
}

impl ListApplicantsArgs {
    /// Every given filter must match; no filters means everyone.
    pub(crate) fn predicate(self) -> Option<Predicate<Applicant>> {
        let mut filters = Vec::new();
        if !self.keywords.is_empty() {
            filters.push(applicant_name_contains_keywords(self.keywords));
        }
        if let Some(status) = self.status {
            filters.push(applicant_has_status(status));
        }
        if let Some(title) = self.position {
            filters.push(applicant_applying_to(title));
        }

        match filters.len() {
            0 => None,
            1 => filters.pop(),
            _ => {
                let combined: Predicate<Applicant> = Arc::new(move |applicant: &Applicant| {
                    filters.iter().all(|filter| filter(applicant))
                });
                Some(combined)
            }
        }
    }
}

pub(crate) fn run() -> Result<(), AppError> {
    let cli = Cli::parse();

    let mut config = AppConfig::load()?;
    if let Some(dir) = cli.data_dir {
        config.storage = StorageConfig::in_dir(dir);
    }
    telemetry::init(&config.telemetry)?;

    match cli.command {
        Command::Demo => run_demo(),
        Command::Report => {
            let session = Session::open(&config)?;
            report::render_rejection_rates(&session.model().rejection_rates());
            Ok(())
        }
        Command::Undo => {
            let mut session = Session::open(&config)?;
            let description = session.undo()?;
            println!("Undid: {description}");
            Ok(())
        }
        Command::Position { command } => run_position(&config, command),
        Command::Applicant { command } => run_applicant(&config, command),
    }
}

fn run_position(config: &AppConfig, command: PositionCommand) -> Result<(), AppError> {
    let mut session = Session::open(config)?;

    match command {
        PositionCommand::Add(args) => {
            let position = Position::new(args.title, args.description).with_status(args.status);
            let description = format!("add position {}", position.title);
            session.mutate(description, |model| model.add_position(position.clone()))?;
            println!("New position added: {}", report::position_line(&position));
        }
        PositionCommand::Edit(args) => {
            let (target, descriptor) = args.into_descriptor();
            let edited = session.mutate(format!("edit position {target}"), |model| {
                model.edit_position(&target, &descriptor)
            })?;
            println!("Edited position: {}", report::position_line(&edited));
        }
        PositionCommand::Delete { title } => {
            let (removed, dropped) = session.mutate(format!("delete position {title}"), |model| {
                model.delete_position_by_title(&title)
            })?;
            println!("Deleted position: {}", report::position_line(&removed));
            if !dropped.is_empty() {
                println!("Also removed {} applicant(s):", dropped.len());
                for applicant in &dropped {
                    println!("- {}", applicant.name);
                }
            }
        }
        PositionCommand::List { keywords } => {
            let model = session.model_mut();
            if !keywords.is_empty() {
                model.update_filtered_positions(position_title_contains_keywords(keywords));
            }
            report::render_positions(model.filtered_positions());
        }
    }

    Ok(())
}

fn run_applicant(config: &AppConfig, command: ApplicantCommand) -> Result<(), AppError> {
    let mut session = Session::open(config)?;

    match command {
        ApplicantCommand::Add(args) => {
            let particulars = ApplicantParticulars::from(args);
            let description = format!("add applicant {}", particulars.name);
            let added = session.mutate(description, |model| {
                model.add_applicant_from_fields(particulars.clone())
            })?;
            println!("New applicant added: {}", report::applicant_line(&added));
        }
        ApplicantCommand::Edit(args) => {
            let (target, descriptor) = args.into_descriptor();
            let edited = session.mutate(format!("edit applicant {target}"), |model| {
                model.edit_applicant(&target, &descriptor)
            })?;
            println!("Edited applicant: {}", report::applicant_line(&edited));
        }
        ApplicantCommand::Mark { name, status } => {
            let marked = session.mutate(format!("mark {name} as {status}"), |model| {
                model.mark_applicant(&name, status)
            })?;
            println!("Marked applicant: {}", report::applicant_line(&marked));
        }
        ApplicantCommand::Delete { name } => {
            let removed = session.mutate(format!("delete applicant {name}"), |model| {
                model.delete_applicant_by_name(&name)
            })?;
            println!("Deleted applicant: {}", report::applicant_line(&removed));
        }
        ApplicantCommand::List(args) => {
            let model = session.model_mut();
            if let Some(predicate) = args.predicate() {
                model.update_filtered_applicants(predicate);
            }
            report::render_applicants(model.filtered_applicants());
        }
    }

    Ok(())
}
