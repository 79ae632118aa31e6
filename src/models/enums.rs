//! Shared domain enums

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

// ---------------------------------------------------------------------------
// Weekday
// ---------------------------------------------------------------------------

/// Day of week as stored in weekly availability rows (0 = Sunday)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[repr(i16)]
pub enum Weekday {
    Sunday = 0,
    Monday = 1,
    Tuesday = 2,
    Wednesday = 3,
    Thursday = 4,
    Friday = 5,
    Saturday = 6,
}

impl Weekday {
    /// Parse a stored day-of-week value, rejecting anything outside 0-6
    pub fn from_i16(v: i16) -> Option<Self> {
        match v {
            0 => Some(Weekday::Sunday),
            1 => Some(Weekday::Monday),
            2 => Some(Weekday::Tuesday),
            3 => Some(Weekday::Wednesday),
            4 => Some(Weekday::Thursday),
            5 => Some(Weekday::Friday),
            6 => Some(Weekday::Saturday),
            _ => None,
        }
    }

    /// Weekday of a calendar date
    pub fn of(date: NaiveDate) -> Self {
        match date.weekday().num_days_from_sunday() {
            0 => Weekday::Sunday,
            1 => Weekday::Monday,
            2 => Weekday::Tuesday,
            3 => Weekday::Wednesday,
            4 => Weekday::Thursday,
            5 => Weekday::Friday,
            _ => Weekday::Saturday,
        }
    }

    /// True for Monday through Friday
    pub fn is_weekday(self) -> bool {
        !matches!(self, Weekday::Saturday | Weekday::Sunday)
    }
}

impl From<Weekday> for i16 {
    fn from(d: Weekday) -> Self {
        d as i16
    }
}

impl std::fmt::Display for Weekday {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            Weekday::Sunday => "Sunday",
            Weekday::Monday => "Monday",
            Weekday::Tuesday => "Tuesday",
            Weekday::Wednesday => "Wednesday",
            Weekday::Thursday => "Thursday",
            Weekday::Friday => "Friday",
            Weekday::Saturday => "Saturday",
        };
        write!(f, "{}", label)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn weekday_of_known_dates() {
        // 2026-08-02 is a Sunday
        let sunday = NaiveDate::from_ymd_opt(2026, 8, 2).unwrap();
        assert_eq!(Weekday::of(sunday), Weekday::Sunday);
        assert_eq!(Weekday::of(sunday.succ_opt().unwrap()), Weekday::Monday);
    }

    #[test]
    fn from_i16_rejects_out_of_range() {
        assert_eq!(Weekday::from_i16(6), Some(Weekday::Saturday));
        assert_eq!(Weekday::from_i16(7), None);
        assert_eq!(Weekday::from_i16(-1), None);
    }
}
