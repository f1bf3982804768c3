use crate::models::appointment::{Appointment, AppointmentStatus, PaymentStatus};
use crate::models::professional::Professional;
use crate::models::service::Service;
use crate::utils::date::week_bounds;
use chrono::NaiveDate;
use serde::Serialize;

/// Figures shown on the admin dashboard.
#[derive(Debug, Default, Serialize, PartialEq, Eq)]
pub struct DashboardStats {
    /// Today's appointments that are not cancelled
    pub today: usize,
    /// Pending or confirmed, any date
    pub active: usize,
    pub completed: usize,
    /// Monday–Sunday of the current week, not cancelled
    pub week: usize,
    /// Sum of prices of paid appointments in `week`
    pub week_revenue: i64,
    pub active_services: usize,
    pub active_professionals: usize,
}

impl DashboardStats {
    pub fn compute(
        appts: &[Appointment],
        services: &[Service],
        pros: &[Professional],
        today: NaiveDate,
    ) -> Self {
        let (week_start, week_end) = week_bounds(today);
        let not_cancelled = |a: &&Appointment| a.status != AppointmentStatus::Cancelled;

        let this_week: Vec<&Appointment> = appts
            .iter()
            .filter(not_cancelled)
            .filter(|a| a.date >= week_start && a.date <= week_end)
            .collect();

        Self {
            today: appts
                .iter()
                .filter(not_cancelled)
                .filter(|a| a.date == today)
                .count(),
            active: appts.iter().filter(|a| a.status.is_active()).count(),
            completed: appts
                .iter()
                .filter(|a| a.status == AppointmentStatus::Completed)
                .count(),
            week: this_week.len(),
            week_revenue: this_week
                .iter()
                .filter(|a| a.payment_status == PaymentStatus::Paid)
                .map(|a| a.price)
                .sum(),
            active_services: services.iter().filter(|s| s.is_active).count(),
            active_professionals: pros.iter().filter(|p| p.is_active).count(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::date::parse_date;
    use crate::utils::time::parse_time;

    fn appt(date: &str, status: AppointmentStatus, paid: bool, price: i64) -> Appointment {
        Appointment {
            id: 0,
            client_name: "Ana".into(),
            client_email: "ana@example.com".into(),
            client_phone: String::new(),
            service_id: 1,
            service_name: "Corte".into(),
            professional_id: 1,
            professional_name: "Pablo".into(),
            date: parse_date(date).unwrap(),
            time: parse_time("10:00").unwrap(),
            duration: 30,
            price,
            status,
            payment_status: if paid {
                PaymentStatus::Paid
            } else {
                PaymentStatus::Pending
            },
            notes: String::new(),
        }
    }

    #[test]
    fn counts_and_revenue() {
        // Wednesday; the week runs 2025-06-16..=2025-06-22
        let today = parse_date("2025-06-18").unwrap();
        let appts = vec![
            appt("2025-06-18", AppointmentStatus::Confirmed, false, 5000),
            appt("2025-06-18", AppointmentStatus::Cancelled, true, 9000),
            appt("2025-06-16", AppointmentStatus::Completed, true, 7000),
            appt("2025-06-22", AppointmentStatus::Pending, true, 3000),
            appt("2025-06-23", AppointmentStatus::Confirmed, true, 4000),
        ];
        let stats = DashboardStats::compute(&appts, &[], &[], today);
        assert_eq!(stats.today, 1);
        assert_eq!(stats.active, 3);
        assert_eq!(stats.completed, 1);
        assert_eq!(stats.week, 3);
        assert_eq!(stats.week_revenue, 10000);
    }
}
