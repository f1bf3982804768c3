//! Path utilities: expand ~ and resolve the platform configuration directory.

use std::path::PathBuf;

pub fn expand_tilde(path: &str) -> PathBuf {
    if path.starts_with("~/")
        && let Some(home) = dirs::home_dir()
    {
        return home.join(path.trim_start_matches("~/"));
    }
    PathBuf::from(path)
}

/// `$BARBERBOOK_HOME` when set, else `%APPDATA%\barberbook` on Windows
/// and `~/.barberbook` elsewhere.
pub fn app_dir() -> PathBuf {
    if let Some(custom) = std::env::var_os("BARBERBOOK_HOME") {
        return PathBuf::from(custom);
    }
    if cfg!(target_os = "windows") {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("barberbook")
    } else {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".barberbook")
    }
}
