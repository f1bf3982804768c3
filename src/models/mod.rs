pub mod appointment;
pub mod day_hours;
pub mod professional;
pub mod service;
pub mod session;
pub mod weekday;
