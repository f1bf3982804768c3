//! Formatting utilities used for CLI and email outputs.

/// 12500 → "12.500" (thousands separated with dots, as the shop prints prices).
pub fn thousands(value: i64) -> String {
    let digits = value.abs().to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push('.');
        }
        out.push(ch);
    }
    if value < 0 { format!("-{out}") } else { out }
}

pub fn money(symbol: &str, value: i64) -> String {
    format!("{}{}", symbol, thousands(value))
}

pub fn minutes_label(mins: u32) -> String {
    format!("{mins} min")
}

/// Shorten free text for a table cell, keeping whole words.
pub fn ellipsize(s: &str, width: usize) -> String {
    let lines = textwrap::wrap(s, width.max(4));
    match lines.len() {
        0 => String::new(),
        1 => lines[0].to_string(),
        _ => format!("{}…", lines[0]),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn groups_thousands() {
        assert_eq!(thousands(0), "0");
        assert_eq!(thousands(950), "950");
        assert_eq!(thousands(12500), "12.500");
        assert_eq!(thousands(1234567), "1.234.567");
        assert_eq!(money("$", -1500), "$-1.500");
    }

    #[test]
    fn ellipsize_keeps_short_text() {
        assert_eq!(ellipsize("fade", 10), "fade");
        assert_eq!(ellipsize("classic fade with beard trim", 10), "classic…");
    }
}
