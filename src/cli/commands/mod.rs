pub mod appointments;
pub mod book;
pub mod config;
pub mod dashboard;
pub mod hours;
pub mod init;
pub mod log;
pub mod pro;
pub mod service;
pub mod slots;

use crate::ui::messages::{info, warning};
use std::io::{self, Write};

/// Ask a yes/no confirmation from the user
pub(crate) fn ask_confirmation(prompt: &str) -> bool {
    warning(prompt);
    print!("Confirm [y/N]: ");
    let _ = io::stdout().flush();

    let mut s = String::new();
    if io::stdin().read_line(&mut s).is_ok() {
        matches!(s.trim().to_lowercase().as_str(), "y" | "yes")
    } else {
        false
    }
}

/// `true` when the user confirmed or `force` was given.
pub(crate) fn confirmed(prompt: &str, force: bool) -> bool {
    if force || ask_confirmation(prompt) {
        return true;
    }
    info("Operation cancelled.");
    false
}
