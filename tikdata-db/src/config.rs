use config::{Config, ConfigError, File};
use serde::Deserialize;
use std::path::PathBuf;

use tikdata_types::JournalMode;

use crate::provision::ProvisionOptions;

#[derive(Debug, Deserialize)]
pub struct Database {
    pub path: String,
    pub journal_mode: String,
}

#[derive(Debug, Default, Deserialize)]
pub struct Export {
    #[serde(default)]
    pub dir: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct Settings {
    pub database: Database,
    #[serde(default)]
    pub export: Export,
}

impl Settings {
    pub fn new() -> Result<Self, ConfigError> {
        let mut builder = Config::builder();

        // 1. Optional settings.toml
        let config_file_name = "settings.toml";

        // Check in current directory
        let current_dir_path = PathBuf::from(config_file_name);
        if current_dir_path.exists() {
            builder = builder.add_source(File::from(current_dir_path).required(false));
        }

        // Check in tikdata-cli directory (for development)
        let dev_path = PathBuf::from("tikdata-cli").join(config_file_name);
        if dev_path.exists() {
            builder = builder.add_source(File::from(dev_path).required(false));
        }

        builder = builder
            .set_default("database.path", "tikData.db")?
            .set_default("database.journal_mode", JournalMode::default().as_str())?;

        // 2. Environment variables (highest priority)
        if let Ok(db_path) = std::env::var("TIKDATA_DATABASE_PATH") {
            builder = builder.set_override("database.path", db_path)?;
        }
        if let Ok(mode) = std::env::var("TIKDATA_JOURNAL_MODE") {
            builder = builder.set_override("database.journal_mode", mode)?;
        }
        if let Ok(dir) = std::env::var("TIKDATA_EXPORT_DIR") {
            builder = builder.set_override("export.dir", dir)?;
        }

        let s = builder.build()?;
        s.try_deserialize()
    }

    pub fn journal_mode(&self) -> Result<JournalMode, ConfigError> {
        JournalMode::parse(&self.database.journal_mode).ok_or_else(|| {
            ConfigError::Message(format!(
                "unsupported journal mode '{}'",
                self.database.journal_mode
            ))
        })
    }

    pub fn provision_options(&self) -> Result<ProvisionOptions, ConfigError> {
        Ok(ProvisionOptions {
            database: PathBuf::from(&self.database.path),
            journal_mode: self.journal_mode()?,
            export_dir: self.export.dir.as_ref().map(PathBuf::from),
        })
    }
}
