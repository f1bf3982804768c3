//! Unified application error type.
//! Every module (db, core, cli, utils) returns AppError so the CLI can report
//! failures in a single place.

use std::io;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    // ---------------------------
    // IO / serialization
    // ---------------------------
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    // ---------------------------
    // Database-related
    // ---------------------------
    #[error("Database error: {0}")]
    Db(#[from] rusqlite::Error),

    // ---------------------------
    // Parsing errors
    // ---------------------------
    #[error("Invalid date format: {0}")]
    InvalidDate(String),

    #[error("Invalid time format: {0}")]
    InvalidTime(String),

    #[error("Invalid day of week: {0}")]
    InvalidWeekday(String),

    #[error("Invalid service category: {0}")]
    InvalidCategory(String),

    #[error("Invalid appointment status: {0}")]
    InvalidStatus(String),

    #[error("Invalid role: {0}")]
    InvalidRole(String),

    #[error("Invalid email address: {0}")]
    InvalidEmail(String),

    #[error("Missing required field: {0}")]
    MissingField(&'static str),

    // ---------------------------
    // Domain errors
    // ---------------------------
    #[error("Invalid business hours for {day}: {reason}")]
    InvalidHours { day: String, reason: String },

    #[error("{entity} #{id} not found")]
    NotFound { entity: &'static str, id: i64 },

    #[error("{0} is not available for booking")]
    Inactive(String),

    #[error("Date {0} cannot be booked")]
    DateNotBookable(String),

    #[error("Slot {time} on {date} is not available")]
    SlotUnavailable { date: String, time: String },

    #[error("Appointment #{id} cannot move from {from} to {to}")]
    InvalidTransition { id: i64, from: String, to: String },

    // ---------------------------
    // Session
    // ---------------------------
    #[error("Login required: run with --user <EMAIL> or set `user` in the configuration")]
    LoginRequired,

    #[error("Admin role required for this command")]
    AdminRequired,

    #[error("Appointment #{0} does not belong to the current user")]
    NotOwner(i64),

    // ---------------------------
    // Config errors
    // ---------------------------
    #[error("Configuration error: {0}")]
    Config(String),
}

pub type AppResult<T> = Result<T, AppError>;
