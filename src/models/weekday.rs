use crate::errors::{AppError, AppResult};
use serde::{Deserialize, Serialize};

/// Day of week as stored in `business_hours.day_of_week` (0 = Sunday).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum Weekday {
    Sunday = 0,
    Monday = 1,
    Tuesday = 2,
    Wednesday = 3,
    Thursday = 4,
    Friday = 5,
    Saturday = 6,
}

/// (day, english, spanish): the only lookup table for day names.
const DAYS: [(Weekday, &str, &str); 7] = [
    (Weekday::Sunday, "Sunday", "Domingo"),
    (Weekday::Monday, "Monday", "Lunes"),
    (Weekday::Tuesday, "Tuesday", "Martes"),
    (Weekday::Wednesday, "Wednesday", "Miércoles"),
    (Weekday::Thursday, "Thursday", "Jueves"),
    (Weekday::Friday, "Friday", "Viernes"),
    (Weekday::Saturday, "Saturday", "Sábado"),
];

impl Weekday {
    pub const ALL: [Weekday; 7] = [
        Weekday::Sunday,
        Weekday::Monday,
        Weekday::Tuesday,
        Weekday::Wednesday,
        Weekday::Thursday,
        Weekday::Friday,
        Weekday::Saturday,
    ];

    pub fn index(self) -> u8 {
        self as u8
    }

    pub fn from_index(i: u8) -> AppResult<Self> {
        Self::ALL
            .get(i as usize)
            .copied()
            .ok_or_else(|| AppError::InvalidWeekday(i.to_string()))
    }

    /// Accepts an index ("0".."6") or an English/Spanish name, case-insensitive.
    pub fn from_code(code: &str) -> AppResult<Self> {
        let code = code.trim();
        if let Ok(i) = code.parse::<u8>() {
            return Self::from_index(i);
        }
        let lower = code.to_lowercase();
        DAYS.iter()
            .find(|(_, en, es)| en.to_lowercase() == lower || es.to_lowercase() == lower)
            .map(|(d, _, _)| *d)
            .ok_or_else(|| AppError::InvalidWeekday(code.to_string()))
    }

    pub fn name(self) -> &'static str {
        DAYS[self as usize].1
    }

    pub fn name_es(self) -> &'static str {
        DAYS[self as usize].2
    }
}

impl From<chrono::Weekday> for Weekday {
    fn from(w: chrono::Weekday) -> Self {
        // chrono counts from Sunday = 0 with this accessor
        Self::ALL[w.num_days_from_sunday() as usize]
    }
}

impl From<Weekday> for u8 {
    fn from(w: Weekday) -> u8 {
        w.index()
    }
}

impl TryFrom<u8> for Weekday {
    type Error = AppError;

    fn try_from(i: u8) -> AppResult<Self> {
        Weekday::from_index(i)
    }
}
