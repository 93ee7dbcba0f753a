use hiring_tracker::config::AppConfig;
use hiring_tracker::error::AppError;
use hiring_tracker::storage::JsonTrackerStorage;
use hiring_tracker::tracker::{TrackerModel, TrackerResult};
use tracing::info;

/// One command's view of the books: load, apply, persist.
pub(crate) struct Session {
    storage: JsonTrackerStorage,
    model: TrackerModel,
}

impl Session {
    pub(crate) fn open(config: &AppConfig) -> Result<Self, AppError> {
        let storage = JsonTrackerStorage::new(config.storage.clone());
        let model = storage.load()?;
        Ok(Self { storage, model })
    }

    pub(crate) fn model(&self) -> &TrackerModel {
        &self.model
    }

    /// For read-only commands that still set a filter.
    pub(crate) fn model_mut(&mut self) -> &mut TrackerModel {
        &mut self.model
    }

    /// Snapshot, apply `operation`, then save both books. Nothing is written
    /// when the operation fails.
    pub(crate) fn mutate<T, F>(&mut self, description: String, operation: F) -> Result<T, AppError>
    where
        F: FnOnce(&mut TrackerModel) -> TrackerResult<T>,
    {
        self.model.record_snapshot(description.as_str());
        let outcome = operation(&mut self.model)?;
        self.storage.save(&self.model)?;
        info!(%description, "saved change");
        Ok(outcome)
    }

    /// Restore the books saved before the last change, then save them.
    pub(crate) fn undo(&mut self) -> Result<String, AppError> {
        let description = self.model.undo()?;
        self.storage.save(&self.model)?;
        info!(%description, "undid change");
        Ok(description)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use hiring_tracker::config::{AppEnvironment, StorageConfig, TelemetryConfig};
    use hiring_tracker::tracker::{Description, Position, Title, TrackerError};
    use tempfile::TempDir;

    fn config_in(dir: &TempDir) -> AppConfig {
        AppConfig {
            environment: AppEnvironment::Test,
            storage: StorageConfig::in_dir(dir.path()),
            telemetry: TelemetryConfig {
                log_level: "warn".to_string(),
            },
        }
    }

    fn analyst() -> Position {
        Position::new(
            Title::parse("Analyst").expect("title"),
            Description::parse("Numbers").expect("description"),
        )
    }

    #[test]
    fn successful_mutations_are_persisted() {
        let dir = TempDir::new().expect("tempdir");
        let config = config_in(&dir);

        let mut session = Session::open(&config).expect("empty books");
        session
            .mutate("add Analyst".to_string(), |model| model.add_position(analyst()))
            .expect("new title");

        let reopened = Session::open(&config).expect("books load");
        assert!(reopened.model().has_position(&analyst()));
    }

    #[test]
    fn failed_mutations_write_nothing() {
        let dir = TempDir::new().expect("tempdir");
        let config = config_in(&dir);

        let mut session = Session::open(&config).expect("empty books");
        let result = session.mutate("delete Analyst".to_string(), |model| {
            model.delete_position_by_title(&analyst().title)
        });

        assert!(result.is_err());
        assert!(!config.storage.position_book.exists());
    }

    #[test]
    fn undo_survives_between_sessions_once() {
        let dir = TempDir::new().expect("tempdir");
        let config = config_in(&dir);

        let mut session = Session::open(&config).expect("empty books");
        session
            .mutate("add Analyst".to_string(), |model| model.add_position(analyst()))
            .expect("new title");

        let mut reopened = Session::open(&config).expect("books load");
        assert!(reopened.model().has_undo_available());
        assert_eq!(reopened.undo().expect("snapshot saved"), "add Analyst");
        assert!(!reopened.model().has_position(&analyst()));

        let mut third = Session::open(&config).expect("books load");
        assert!(third.model().position_book().is_empty());
        assert!(matches!(
            third.undo(),
            Err(AppError::Tracker(TrackerError::NoHistory))
        ));
    }
}
