use std::fmt;

const RESET: &str = "\x1b[0m";
const BOLD: &str = "\x1b[1m";

#[derive(Clone, Copy)]
enum Tone {
    Info,
    Success,
    Warning,
    Error,
}

impl Tone {
    fn style(self) -> (&'static str, &'static str) {
        match self {
            Tone::Info => ("\x1b[34m", "ℹ️"),
            Tone::Success => ("\x1b[32m", "✅"),
            Tone::Warning => ("\x1b[33m", "⚠️"),
            Tone::Error => ("\x1b[31m", "❌"),
        }
    }

    fn line<T: fmt::Display>(self, msg: T) -> String {
        let (color, icon) = self.style();
        format!("{color}{BOLD}{icon}{RESET} {msg}")
    }
}

pub fn info<T: fmt::Display>(msg: T) {
    println!("{}", Tone::Info.line(msg));
}

pub fn success<T: fmt::Display>(msg: T) {
    println!("{}", Tone::Success.line(msg));
}

pub fn warning<T: fmt::Display>(msg: T) {
    println!("{}", Tone::Warning.line(msg));
}

pub fn error<T: fmt::Display>(msg: T) {
    eprintln!("{}", Tone::Error.line(msg));
}

/// Bold section title followed by a blank line.
pub fn header<T: fmt::Display>(msg: T) {
    println!("{BOLD}{msg}{RESET}\n");
}
