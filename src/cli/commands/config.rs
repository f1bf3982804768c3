use crate::cli::parser::Commands;
use crate::config::{Config, migrate};
use crate::errors::AppResult;
use crate::ui::messages::{error, info, success, warning};
use std::process::Command;

/// Handle the `config` subcommand
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Config {
        print_config,
        check,
        migrate: run_migrate,
        edit_config,
        editor,
    } = cmd
    {
        let path = Config::config_file();

        if *print_config {
            println!("📄 Current configuration:\n");
            println!("{}", cfg.to_yaml()?);
        }

        if *check || *run_migrate {
            if !path.exists() {
                warning(format!(
                    "No configuration file at {} (defaults in use). Run `barberbook init`.",
                    path.display()
                ));
                return Ok(());
            }

            if *check {
                let missing = migrate::missing_keys(&path)?;
                if missing.is_empty() {
                    success("Configuration file is complete.");
                } else {
                    warning(format!("Missing fields: {}", missing.join(", ")));
                }
            }

            if *run_migrate {
                let added = migrate::fill_missing(&path)?;
                if added.is_empty() {
                    info("Nothing to migrate.");
                } else {
                    success(format!("Added fields: {}", added.join(", ")));
                }
            }
        }

        if *edit_config {
            let default_editor = std::env::var("EDITOR")
                .or_else(|_| std::env::var("VISUAL"))
                .unwrap_or_else(|_| {
                    if cfg!(target_os = "windows") {
                        "notepad".to_string()
                    } else {
                        "nano".to_string()
                    }
                });
            let editor_to_use = editor.clone().unwrap_or_else(|| default_editor.clone());

            let ok = Command::new(&editor_to_use)
                .arg(&path)
                .status()
                .map(|s| s.success())
                .unwrap_or(false);

            if ok {
                success(format!("Configuration edited with '{}'", editor_to_use));
            } else if editor_to_use != default_editor {
                warning(format!(
                    "Editor '{}' not available, falling back to '{}'",
                    editor_to_use, default_editor
                ));
                let fallback_ok = Command::new(&default_editor)
                    .arg(&path)
                    .status()
                    .map(|s| s.success())
                    .unwrap_or(false);
                if fallback_ok {
                    success(format!("Configuration edited with '{}'", default_editor));
                } else {
                    error(format!("Failed to edit configuration with '{}'", default_editor));
                }
            } else {
                error(format!("Failed to edit configuration with '{}'", editor_to_use));
            }
        }
    }

    Ok(())
}
