use crate::core::derive::InputPolicy;
use crate::errors::{AppError, AppResult};
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub database: String,
    #[serde(default = "default_currency")]
    pub currency: String,
    #[serde(default)]
    pub input_policy: InputPolicy,
    #[serde(default = "default_date_format")]
    pub date_format: String,
}

fn default_currency() -> String {
    "R$".to_string()
}
fn default_date_format() -> String {
    "%d/%m/%Y".to_string()
}

impl Default for Config {
    fn default() -> Self {
        let db_path = Self::database_file();
        Self {
            database: db_path.to_string_lossy().to_string(),
            currency: default_currency(),
            input_policy: InputPolicy::default(),
            date_format: default_date_format(),
        }
    }
}

impl Config {
    /// Return the standard configuration directory depending on the platform
    pub fn config_dir() -> PathBuf {
        if cfg!(target_os = "windows") {
            let appdata = env::var("APPDATA").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(appdata).join("rideledger")
        } else {
            let home = env::var("HOME").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(home).join(".rideledger")
        }
    }

    /// Return the full path of the config file
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("rideledger.conf")
    }

    /// Return the full path of the SQLite database
    pub fn database_file() -> PathBuf {
        Self::config_dir().join("rideledger.sqlite")
    }

    /// `--db` value as a path: `~/` expanded, relative names under the config dir.
    pub fn resolve_db_path(name: &str) -> PathBuf {
        let p = crate::utils::path::expand_tilde(name);
        if p.is_absolute() {
            p
        } else {
            Self::config_dir().join(p)
        }
    }

    /// Load configuration from file, or return defaults if not found
    pub fn load() -> AppResult<Self> {
        Self::load_from(&Self::config_file())
    }

    pub fn load_from(path: &Path) -> AppResult<Self> {
        if !path.exists() {
            return Ok(Config::default());
        }
        let content = fs::read_to_string(path).map_err(|_| AppError::ConfigLoad)?;
        Self::from_yaml(&content)
    }

    pub fn from_yaml(content: &str) -> AppResult<Self> {
        Ok(serde_yaml::from_str(content)?)
    }

    pub fn to_yaml(&self) -> AppResult<String> {
        Ok(serde_yaml::to_string(self)?)
    }

    /// Initialize configuration and database files.
    /// Returns the database path written into the configuration.
    pub fn init_all(custom_db: Option<String>, is_test: bool) -> AppResult<String> {
        let dir = Self::config_dir();
        fs::create_dir_all(&dir)?;

        // DB name: user provided or default
        let db_path = match custom_db {
            Some(name) => Self::resolve_db_path(&name),
            None => Self::database_file(),
        };

        let config = Config {
            database: db_path.to_string_lossy().to_string(),
            ..Config::default()
        };

        // Write config file
        if !is_test {
            let yaml = config.to_yaml()?;
            let mut file = fs::File::create(Self::config_file()).map_err(|_| AppError::ConfigSave)?;
            file.write_all(yaml.as_bytes())
                .map_err(|_| AppError::ConfigSave)?;
        }

        if let Some(parent) = db_path.parent() {
            fs::create_dir_all(parent)?;
        }

        Ok(config.database)
    }

    /// Names of the optional fields missing from a raw YAML config.
    pub fn missing_fields(content: &str) -> AppResult<Vec<&'static str>> {
        let value: serde_yaml::Value = serde_yaml::from_str(content)?;
        let map = value
            .as_mapping()
            .ok_or_else(|| AppError::Config("configuration is not a mapping".into()))?;

        Ok(["database", "currency", "input_policy", "date_format"]
            .into_iter()
            .filter(|k| !map.contains_key(*k))
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_fields_fall_back_to_defaults() {
        let cfg = Config::from_yaml("database: /tmp/x.sqlite\n").unwrap();
        assert_eq!(cfg.database, "/tmp/x.sqlite");
        assert_eq!(cfg.currency, "R$");
        assert_eq!(cfg.input_policy, InputPolicy::Strict);
        assert_eq!(cfg.date_format, "%d/%m/%Y");
    }

    #[test]
    fn lenient_policy_is_read_from_yaml() {
        let cfg = Config::from_yaml("database: a.sqlite\ninput_policy: lenient\ncurrency: $\n")
            .unwrap();
        assert_eq!(cfg.input_policy, InputPolicy::Lenient);
        assert_eq!(cfg.currency, "$");
    }

    #[test]
    fn yaml_round_trip() {
        let cfg = Config {
            database: "/data/rides.sqlite".into(),
            currency: "€".into(),
            input_policy: InputPolicy::Lenient,
            date_format: "%Y-%m-%d".into(),
        };
        let back = Config::from_yaml(&cfg.to_yaml().unwrap()).unwrap();
        assert_eq!(back.database, cfg.database);
        assert_eq!(back.currency, cfg.currency);
        assert_eq!(back.input_policy, cfg.input_policy);
    }

    #[test]
    fn reports_missing_fields() {
        let missing = Config::missing_fields("database: a.sqlite\ncurrency: R$\n").unwrap();
        assert_eq!(missing, vec!["input_policy", "date_format"]);
    }

    #[test]
    fn relative_db_names_live_in_config_dir() {
        assert_eq!(
            Config::resolve_db_path("rides.sqlite"),
            Config::config_dir().join("rides.sqlite")
        );
        assert_eq!(
            Config::resolve_db_path("/tmp/rides.sqlite"),
            PathBuf::from("/tmp/rides.sqlite")
        );
    }
}
