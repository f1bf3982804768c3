use crate::core::availability::DEFAULT_SLOT_INTERVAL;
use crate::core::calendar::{DEFAULT_HORIZON_DAYS, MAX_HORIZON_DAYS};
use crate::errors::{AppError, AppResult};
use crate::models::session::{Session, SessionUser};
use crate::utils::path::{app_dir, expand_tilde};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

pub mod migrate;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "default_database")]
    pub database: String,
    #[serde(default = "default_shop_name")]
    pub shop_name: String,
    #[serde(default = "default_interval")]
    pub slot_interval_minutes: u32,
    #[serde(default = "default_horizon")]
    pub booking_horizon_days: u32,
    #[serde(default = "default_currency")]
    pub currency_symbol: String,
    /// Identity provided by the authentication collaborator
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user: Option<SessionUser>,
}

fn default_database() -> String {
    Config::database_file().to_string_lossy().to_string()
}
fn default_shop_name() -> String {
    "BarberShop".to_string()
}
fn default_interval() -> u32 {
    DEFAULT_SLOT_INTERVAL
}
fn default_horizon() -> u32 {
    DEFAULT_HORIZON_DAYS
}
fn default_currency() -> String {
    "$".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            database: default_database(),
            shop_name: default_shop_name(),
            slot_interval_minutes: default_interval(),
            booking_horizon_days: default_horizon(),
            currency_symbol: default_currency(),
            user: None,
        }
    }
}

impl Config {
    pub fn config_dir() -> PathBuf {
        app_dir()
    }

    pub fn config_file() -> PathBuf {
        Self::config_dir().join("barberbook.conf")
    }

    pub fn database_file() -> PathBuf {
        Self::config_dir().join("barberbook.sqlite")
    }

    /// Load the configuration file, or defaults when it does not exist.
    pub fn load() -> AppResult<Self> {
        let path = Self::config_file();
        let mut cfg = if path.exists() {
            let content = fs::read_to_string(&path)?;
            serde_yaml::from_str::<Config>(&content)?
        } else {
            Config::default()
        };
        cfg.database = expand_tilde(&cfg.database).to_string_lossy().to_string();
        cfg.validate()?;
        Ok(cfg)
    }

    /// `--db` value: `~` expanded, relative names placed in the config dir.
    pub fn resolve_db(name: &str) -> PathBuf {
        let p = expand_tilde(name);
        if p.is_absolute() {
            p
        } else {
            Self::config_dir().join(p)
        }
    }

    pub fn validate(&self) -> AppResult<()> {
        if self.slot_interval_minutes == 0 || self.slot_interval_minutes >= 24 * 60 {
            return Err(AppError::Config(format!(
                "slot_interval_minutes must be between 1 and 1439, got {}",
                self.slot_interval_minutes
            )));
        }
        if self.booking_horizon_days == 0 || self.booking_horizon_days > MAX_HORIZON_DAYS {
            return Err(AppError::Config(format!(
                "booking_horizon_days must be between 1 and {}, got {}",
                MAX_HORIZON_DAYS, self.booking_horizon_days
            )));
        }
        if self.database.trim().is_empty() {
            return Err(AppError::Config("database path is empty".into()));
        }
        Ok(())
    }

    pub fn session(&self) -> Session {
        Session {
            user: self.user.clone(),
        }
    }

    pub fn to_yaml(&self) -> AppResult<String> {
        Ok(serde_yaml::to_string(self)?)
    }

    /// Create the config directory, the config file (unless `is_test`) and an
    /// empty database file. Returns the database path.
    pub fn init_all(custom_db: Option<&str>, is_test: bool) -> AppResult<PathBuf> {
        let dir = Self::config_dir();
        fs::create_dir_all(&dir)?;

        let db_path = match custom_db {
            Some(name) => Self::resolve_db(name),
            None => Self::database_file(),
        };

        if !is_test {
            let config = Config {
                database: db_path.to_string_lossy().to_string(),
                ..Config::default()
            };
            fs::write(Self::config_file(), config.to_yaml()?)?;
            println!("✅ Config file: {}", Self::config_file().display());
        }

        if let Some(parent) = db_path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent)?;
        }

        Ok(db_path)
    }
}
