use crate::config::Config;
use crate::errors::{AppError, AppResult};
use crate::ui::messages::{success, warning};
use std::fs;
use std::path::Path;
use std::process::Command;

pub struct ConfigLogic;

impl ConfigLogic {
    /// Effective configuration as YAML (file values plus defaults).
    pub fn print(cfg: &Config) -> AppResult<()> {
        println!("📄 Current configuration:\n");
        println!("{}", cfg.to_yaml()?);
        Ok(())
    }

    /// Warn about fields the file does not set explicitly.
    pub fn check(path: &Path) -> AppResult<()> {
        if !path.exists() {
            warning(format!(
                "No configuration file at {} (defaults in use, run `init`).",
                path.display()
            ));
            return Ok(());
        }

        let content = fs::read_to_string(path).map_err(|_| AppError::ConfigLoad)?;
        let missing = Config::missing_fields(&content)?;
        if missing.is_empty() {
            success("Configuration file is complete.");
        } else {
            warning(format!(
                "Missing fields (defaults in use): {}",
                missing.join(", ")
            ));
        }
        Ok(())
    }

    pub fn edit(path: &Path, editor: &Option<String>) -> AppResult<()> {
        let default_editor = std::env::var("EDITOR")
            .or_else(|_| std::env::var("VISUAL"))
            .unwrap_or_else(|_| {
                if cfg!(target_os = "windows") {
                    "notepad".to_string()
                } else {
                    "nano".to_string()
                }
            });
        let ed = editor.clone().unwrap_or_else(|| default_editor.clone());

        let status = Command::new(&ed).arg(path).status();
        match status {
            Ok(s) if s.success() => {
                success(format!("Configuration file edited using '{}'", ed));
                Ok(())
            }
            _ if ed != default_editor => {
                warning(format!(
                    "Editor '{}' not available, falling back to '{}'",
                    ed, default_editor
                ));
                Command::new(&default_editor)
                    .arg(path)
                    .status()
                    .map_err(|e| AppError::Config(e.to_string()))?;
                Ok(())
            }
            Ok(_) => Err(AppError::Config(format!("editor '{}' exited with an error", ed))),
            Err(e) => Err(AppError::Config(e.to_string())),
        }
    }
}
