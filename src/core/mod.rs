pub mod appointments;
pub mod availability;
pub mod booking;
pub mod calendar;
pub mod clients;
pub mod dashboard;
pub mod hours;
pub mod log;
pub mod notify;
