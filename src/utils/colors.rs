/// ANSI color helper utilities for terminal output.
use crate::models::appointment::{AppointmentStatus, PaymentStatus};

pub const RESET: &str = "\x1b[0m";
pub const GREY: &str = "\x1b[90m";
pub const RED: &str = "\x1b[31m";
pub const GREEN: &str = "\x1b[32m";
pub const YELLOW: &str = "\x1b[33m";
pub const BLUE: &str = "\x1b[34m";
pub const CYAN: &str = "\x1b[36m";

/// pending → yellow, confirmed → green, completed → blue, cancelled → red
pub fn color_for_status(status: AppointmentStatus) -> &'static str {
    match status {
        AppointmentStatus::Pending => YELLOW,
        AppointmentStatus::Confirmed => GREEN,
        AppointmentStatus::Completed => BLUE,
        AppointmentStatus::Cancelled => RED,
    }
}

pub fn color_for_payment(status: PaymentStatus) -> &'static str {
    match status {
        PaymentStatus::Pending => YELLOW,
        PaymentStatus::Paid => GREEN,
        PaymentStatus::Refunded => GREY,
    }
}

/// Active entries print normally, inactive ones greyed out.
pub fn color_for_active(active: bool) -> &'static str {
    if active { RESET } else { GREY }
}

pub fn paint(value: &str, color: &str) -> String {
    format!("{color}{value}{RESET}")
}
