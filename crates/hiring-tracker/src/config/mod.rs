use std::env;
use std::fmt;
use std::path::{Path, PathBuf};

const POSITION_BOOK_FILE: &str = "positionbook.json";
const APPLICANT_BOOK_FILE: &str = "applicantbook.json";
const HISTORY_FILE: &str = "history.json";

/// Distinguishes runtime behavior for different stages of the tool.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppEnvironment {
    Development,
    Test,
    Production,
}

impl AppEnvironment {
    fn from_str(value: &str) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "prod" | "production" => Self::Production,
            "test" | "ci" => Self::Test,
            _ => Self::Development,
        }
    }
}

/// Top-level configuration for the application.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub environment: AppEnvironment,
    pub storage: StorageConfig,
    pub telemetry: TelemetryConfig,
}

impl AppConfig {
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let environment = AppEnvironment::from_str(
            &env::var("APP_ENV").unwrap_or_else(|_| "development".to_string()),
        );

        let data_dir = path_var("APP_DATA_DIR")?.unwrap_or_else(|| PathBuf::from("data"));
        let mut storage = StorageConfig::in_dir(data_dir);
        if let Some(path) = path_var("APP_POSITION_BOOK")? {
            storage.position_book = path;
        }
        if let Some(path) = path_var("APP_APPLICANT_BOOK")? {
            storage.applicant_book = path;
        }
        if let Some(path) = path_var("APP_HISTORY")? {
            storage.history = path;
        }

        let log_level = env::var("APP_LOG_LEVEL").unwrap_or_else(|_| "info".to_string());

        Ok(Self {
            environment,
            storage,
            telemetry: TelemetryConfig { log_level },
        })
    }
}

fn path_var(name: &'static str) -> Result<Option<PathBuf>, ConfigError> {
    match env::var(name) {
        Ok(value) if value.trim().is_empty() => Err(ConfigError::EmptyPath { variable: name }),
        Ok(value) => Ok(Some(PathBuf::from(value))),
        Err(env::VarError::NotPresent) => Ok(None),
        Err(env::VarError::NotUnicode(_)) => Err(ConfigError::InvalidPath { variable: name }),
    }
}

/// Locations of the two JSON books and of the pending undo snapshot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StorageConfig {
    pub position_book: PathBuf,
    pub applicant_book: PathBuf,
    pub history: PathBuf,
}

impl StorageConfig {
    /// Default file names inside `dir`.
    pub fn in_dir(dir: impl AsRef<Path>) -> Self {
        let dir = dir.as_ref();
        Self {
            position_book: dir.join(POSITION_BOOK_FILE),
            applicant_book: dir.join(APPLICANT_BOOK_FILE),
            history: dir.join(HISTORY_FILE),
        }
    }
}

/// Tracing controls.
#[derive(Debug, Clone)]
pub struct TelemetryConfig {
    pub log_level: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    EmptyPath { variable: &'static str },
    InvalidPath { variable: &'static str },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::EmptyPath { variable } => {
                write!(f, "{variable} must not be empty when set")
            }
            ConfigError::InvalidPath { variable } => {
                write!(f, "{variable} must be valid unicode")
            }
        }
    }
}

impl std::error::Error for ConfigError {}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;
    use std::sync::{Mutex, OnceLock};

    fn env_guard() -> &'static Mutex<()> {
        static GUARD: OnceLock<Mutex<()>> = OnceLock::new();
        GUARD.get_or_init(|| Mutex::new(()))
    }

    fn reset_env() {
        env::remove_var("APP_ENV");
        env::remove_var("APP_LOG_LEVEL");
        env::remove_var("APP_DATA_DIR");
        env::remove_var("APP_POSITION_BOOK");
        env::remove_var("APP_APPLICANT_BOOK");
        env::remove_var("APP_HISTORY");
    }

    #[test]
    fn load_uses_defaults_when_env_missing() {
        let _lock = env_guard().lock().expect("env mutex poisoned");
        reset_env();
        let config = AppConfig::load().expect("config loads with defaults");
        assert_eq!(config.environment, AppEnvironment::Development);
        assert_eq!(config.storage, StorageConfig::in_dir("data"));
        assert_eq!(
            config.storage.applicant_book,
            Path::new("data").join("applicantbook.json")
        );
        assert_eq!(config.storage.history, Path::new("data").join("history.json"));
        assert_eq!(config.telemetry.log_level, "info");
    }

    #[test]
    fn explicit_book_paths_override_data_dir() {
        let _lock = env_guard().lock().expect("env mutex poisoned");
        reset_env();
        env::set_var("APP_ENV", "ci");
        env::set_var("APP_DATA_DIR", "/var/lib/hiring");
        env::set_var("APP_POSITION_BOOK", "/tmp/positions.json");
        let config = AppConfig::load().expect("config loads");
        reset_env();

        assert_eq!(config.environment, AppEnvironment::Test);
        assert_eq!(
            config.storage.position_book,
            PathBuf::from("/tmp/positions.json")
        );
        assert_eq!(
            config.storage.applicant_book,
            Path::new("/var/lib/hiring").join("applicantbook.json")
        );
    }

    #[test]
    fn blank_paths_are_rejected() {
        let _lock = env_guard().lock().expect("env mutex poisoned");
        reset_env();
        env::set_var("APP_APPLICANT_BOOK", "   ");
        let err = AppConfig::load().expect_err("blank path fails");
        reset_env();

        assert_eq!(
            err,
            ConfigError::EmptyPath {
                variable: "APP_APPLICANT_BOOK"
            }
        );
    }
}
