use crate::errors::{AppError, AppResult};
use crate::utils::date::format_date;
use crate::utils::time::format_time;
use chrono::{NaiveDate, NaiveTime};
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum AppointmentStatus {
    Pending,
    Confirmed,
    Completed,
    Cancelled,
}

impl AppointmentStatus {
    /// Convert enum → DB string
    pub fn to_db_str(self) -> &'static str {
        match self {
            AppointmentStatus::Pending => "pending",
            AppointmentStatus::Confirmed => "confirmed",
            AppointmentStatus::Completed => "completed",
            AppointmentStatus::Cancelled => "cancelled",
        }
    }

    /// Convert DB string → enum
    pub fn from_db_str(s: &str) -> Option<Self> {
        match s {
            "pending" => Some(AppointmentStatus::Pending),
            "confirmed" => Some(AppointmentStatus::Confirmed),
            "completed" => Some(AppointmentStatus::Completed),
            "cancelled" => Some(AppointmentStatus::Cancelled),
            _ => None,
        }
    }

    /// Helper for CLI input (any case)
    pub fn from_code(code: &str) -> AppResult<Self> {
        Self::from_db_str(&code.trim().to_lowercase())
            .ok_or_else(|| AppError::InvalidStatus(code.to_string()))
    }

    pub fn label(self) -> &'static str {
        match self {
            AppointmentStatus::Pending => "Pending",
            AppointmentStatus::Confirmed => "Confirmed",
            AppointmentStatus::Completed => "Completed",
            AppointmentStatus::Cancelled => "Cancelled",
        }
    }

    /// Cancelled and completed appointments never change again.
    pub fn is_final(self) -> bool {
        matches!(
            self,
            AppointmentStatus::Completed | AppointmentStatus::Cancelled
        )
    }

    pub fn is_active(self) -> bool {
        matches!(
            self,
            AppointmentStatus::Pending | AppointmentStatus::Confirmed
        )
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum PaymentStatus {
    Pending,
    Paid,
    Refunded,
}

impl PaymentStatus {
    pub fn to_db_str(self) -> &'static str {
        match self {
            PaymentStatus::Pending => "pending",
            PaymentStatus::Paid => "paid",
            PaymentStatus::Refunded => "refunded",
        }
    }

    pub fn from_db_str(s: &str) -> Option<Self> {
        match s {
            "pending" => Some(PaymentStatus::Pending),
            "paid" => Some(PaymentStatus::Paid),
            "refunded" => Some(PaymentStatus::Refunded),
            _ => None,
        }
    }

    pub fn from_code(code: &str) -> AppResult<Self> {
        Self::from_db_str(&code.trim().to_lowercase())
            .ok_or_else(|| AppError::InvalidStatus(code.to_string()))
    }

    pub fn label(self) -> &'static str {
        match self {
            PaymentStatus::Pending => "Payment pending",
            PaymentStatus::Paid => "Paid",
            PaymentStatus::Refunded => "Refunded",
        }
    }
}

/// Appointment as persisted in the `appointments` table.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Appointment {
    pub id: i64,
    pub client_name: String,
    pub client_email: String,
    pub client_phone: String,
    pub service_id: i64,
    pub service_name: String,
    pub professional_id: i64,
    pub professional_name: String,
    pub date: NaiveDate,
    #[serde(serialize_with = "ser_hhmm")]
    pub time: NaiveTime,
    pub duration: u32,
    pub price: i64,
    pub status: AppointmentStatus,
    pub payment_status: PaymentStatus,
    pub notes: String,
}

fn ser_hhmm<S: serde::Serializer>(t: &NaiveTime, s: S) -> Result<S::Ok, S::Error> {
    s.serialize_str(&format_time(*t))
}

impl Appointment {
    pub fn date_str(&self) -> String {
        format_date(self.date)
    }

    pub fn time_str(&self) -> String {
        format_time(self.time)
    }

    /// Past, cancelled and completed appointments are read-only.
    pub fn can_modify(&self, today: NaiveDate) -> bool {
        self.date >= today && !self.status.is_final()
    }
}

/// Fields supplied when creating an appointment (id assigned by the store).
#[derive(Debug, Clone)]
pub struct NewAppointment {
    pub client_name: String,
    pub client_email: String,
    pub client_phone: String,
    pub service_id: i64,
    pub service_name: String,
    pub professional_id: i64,
    pub professional_name: String,
    pub date: NaiveDate,
    pub time: NaiveTime,
    pub duration: u32,
    pub price: i64,
    pub status: AppointmentStatus,
    pub payment_status: PaymentStatus,
    pub notes: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_round_trips_through_db_strings() {
        for s in [
            AppointmentStatus::Pending,
            AppointmentStatus::Confirmed,
            AppointmentStatus::Completed,
            AppointmentStatus::Cancelled,
        ] {
            assert_eq!(AppointmentStatus::from_db_str(s.to_db_str()), Some(s));
        }
        assert!(AppointmentStatus::from_code("Confirmed").is_ok());
        assert!(AppointmentStatus::from_code("booked").is_err());
    }
}
