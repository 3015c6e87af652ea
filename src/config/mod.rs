use crate::errors::{AppError, AppResult};
use crate::models::update_interval::UpdateInterval;
use crate::ui::messages::warning;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

pub mod migrate;

pub const MIN_OPACITY: i64 = 20;
pub const MAX_OPACITY: i64 = 255;

pub const CONFIG_FILE_NAME: &str = "timekeeper.conf";
pub const DATABASE_FILE_NAME: &str = "timekeeper.db";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "default_database")]
    pub database: String,
    #[serde(default = "default_opacity")]
    pub opacity: i64,
    #[serde(default)]
    pub update_interval: UpdateInterval,
    #[serde(default)]
    pub read_only: bool,
}

fn default_database() -> String {
    Config::database_file().to_string_lossy().to_string()
}

fn default_opacity() -> i64 {
    MAX_OPACITY
}

impl Default for Config {
    fn default() -> Self {
        Self {
            database: default_database(),
            opacity: default_opacity(),
            update_interval: UpdateInterval::default(),
            read_only: false,
        }
    }
}

impl Config {
    /// `~/.timekeeper` (falls back to the working directory without a home).
    pub fn config_dir() -> PathBuf {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".timekeeper")
    }

    pub fn config_file() -> PathBuf {
        Self::config_dir().join(CONFIG_FILE_NAME)
    }

    pub fn database_file() -> PathBuf {
        Self::config_dir().join(DATABASE_FILE_NAME)
    }

    /// Load `path`, falling back to defaults when it is missing or corrupt.
    pub fn load_from(path: &Path) -> Self {
        if !path.exists() {
            return Self::default();
        }

        match Self::try_load_from(path) {
            Ok(cfg) => cfg,
            Err(e) => {
                warning(format!("{} ({:?}), using defaults", e, path));
                Self::default()
            }
        }
    }

    pub fn try_load_from(path: &Path) -> AppResult<Self> {
        let content = fs::read_to_string(path).map_err(|_| AppError::ConfigLoad)?;
        let mut cfg: Config = serde_yaml::from_str(&content).map_err(|_| AppError::ConfigLoad)?;
        cfg.opacity = cfg.opacity.clamp(MIN_OPACITY, MAX_OPACITY);
        Ok(cfg)
    }

    pub fn save_to(&self, path: &Path) -> AppResult<()> {
        if let Some(dir) = path.parent()
            && !dir.as_os_str().is_empty()
        {
            fs::create_dir_all(dir)?;
        }

        let yaml = serde_yaml::to_string(self).map_err(|_| AppError::ConfigSave)?;
        fs::write(path, yaml).map_err(|_| AppError::ConfigSave)?;
        Ok(())
    }

    pub fn set_opacity(&mut self, opacity: i64) -> AppResult<()> {
        if !(MIN_OPACITY..=MAX_OPACITY).contains(&opacity) {
            return Err(AppError::Config(format!(
                "opacity must be between {} and {}, got {}",
                MIN_OPACITY, MAX_OPACITY, opacity
            )));
        }
        self.opacity = opacity;
        Ok(())
    }

    pub fn set_update_interval(&mut self, value: &str) -> AppResult<()> {
        self.update_interval = value.parse().map_err(AppError::Config)?;
        Ok(())
    }

    /// Create the configuration file (unless `is_test`) pointing at
    /// `custom_db` or the default database, and return that database path.
    pub fn init_all(custom_db: Option<&str>, config_path: &Path, is_test: bool) -> AppResult<PathBuf> {
        let dir = config_path
            .parent()
            .map(Path::to_path_buf)
            .unwrap_or_else(Self::config_dir);

        let db_path = match custom_db {
            Some(name) => {
                let p = Path::new(name);
                if p.is_absolute() {
                    p.to_path_buf()
                } else {
                    dir.join(p)
                }
            }
            None => dir.join(DATABASE_FILE_NAME),
        };

        if !is_test {
            let mut cfg = if config_path.exists() {
                Self::load_from(config_path)
            } else {
                Self::default()
            };
            cfg.database = db_path.to_string_lossy().to_string();
            cfg.save_to(config_path)?;
        }

        Ok(db_path)
    }
}
