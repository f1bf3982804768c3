use crate::models::appointment::{Appointment, AppointmentStatus};
use serde::Serialize;
use std::collections::BTreeMap;

/// Per-client totals derived from appointments.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct ClientStats {
    pub email: String,
    pub name: String,
    pub phone: String,
    pub appointments: usize,
    pub completed: usize,
    pub total_spent: i64,
}

/// Group by lower-cased email; the name and phone of the most recent
/// appointment win. `search` matches name or email, case-insensitive.
pub fn client_stats(appts: &[Appointment], search: Option<&str>) -> Vec<ClientStats> {
    let mut by_email: BTreeMap<String, (ClientStats, chrono::NaiveDate)> = BTreeMap::new();

    for a in appts {
        let key = a.client_email.to_lowercase();
        let entry = by_email.entry(key.clone()).or_insert_with(|| {
            (
                ClientStats {
                    email: key,
                    name: a.client_name.clone(),
                    phone: a.client_phone.clone(),
                    appointments: 0,
                    completed: 0,
                    total_spent: 0,
                },
                a.date,
            )
        });

        let (stats, last_seen) = entry;
        stats.appointments += 1;
        stats.total_spent += a.price;
        if a.status == AppointmentStatus::Completed {
            stats.completed += 1;
        }
        if a.date > *last_seen {
            *last_seen = a.date;
            stats.name = a.client_name.clone();
            if !a.client_phone.is_empty() {
                stats.phone = a.client_phone.clone();
            }
        }
    }

    let needle = search.map(|s| s.trim().to_lowercase()).filter(|s| !s.is_empty());

    by_email
        .into_values()
        .map(|(s, _)| s)
        .filter(|s| match &needle {
            Some(n) => s.email.contains(n.as_str()) || s.name.to_lowercase().contains(n.as_str()),
            None => true,
        })
        .collect()
}
