//! Time-of-day greeting shown at the top of the main page.

use chrono::{NaiveDateTime, Timelike};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum Greeting {
    Morning,
    Day,
    Evening,
    Night,
}

impl Greeting {
    /// [05:00, 12:00) morning, [12:00, 18:00) day, [18:00, 23:00) evening,
    /// night otherwise.
    pub fn at(dt: NaiveDateTime) -> Self {
        match dt.hour() {
            5..=11 => Greeting::Morning,
            12..=17 => Greeting::Day,
            18..=22 => Greeting::Evening,
            _ => Greeting::Night,
        }
    }

    pub fn text(&self) -> &'static str {
        match self {
            Greeting::Morning => "Доброе утро",
            Greeting::Day => "Добрый день",
            Greeting::Evening => "Добрый вечер",
            Greeting::Night => "Доброй ночи",
        }
    }
}

impl std::fmt::Display for Greeting {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.text())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn hms(h: u32, m: u32, s: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2025, 10, 8).unwrap().and_hms_opt(h, m, s).unwrap()
    }

    #[test]
    fn test_greeting_buckets() {
        assert_eq!(Greeting::at(hms(8, 0, 0)).text(), "Доброе утро");
        assert_eq!(Greeting::at(hms(14, 0, 0)).text(), "Добрый день");
        assert_eq!(Greeting::at(hms(19, 0, 0)).text(), "Добрый вечер");
        assert_eq!(Greeting::at(hms(2, 0, 0)).text(), "Доброй ночи");
    }

    #[test]
    fn test_greeting_edges() {
        assert_eq!(Greeting::at(hms(4, 59, 59)), Greeting::Night);
        assert_eq!(Greeting::at(hms(5, 0, 0)), Greeting::Morning);
        assert_eq!(Greeting::at(hms(11, 59, 59)), Greeting::Morning);
        assert_eq!(Greeting::at(hms(12, 0, 0)), Greeting::Day);
        assert_eq!(Greeting::at(hms(17, 59, 59)), Greeting::Day);
        assert_eq!(Greeting::at(hms(18, 0, 0)), Greeting::Evening);
        assert_eq!(Greeting::at(hms(22, 59, 59)), Greeting::Evening);
        assert_eq!(Greeting::at(hms(23, 0, 0)), Greeting::Night);
        assert_eq!(Greeting::at(hms(0, 0, 0)), Greeting::Night);
    }

    #[test]
    fn test_display_matches_text() {
        assert_eq!(Greeting::Evening.to_string(), "Добрый вечер");
    }
}
