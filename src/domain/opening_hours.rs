//! Opening-hours windows.
//!
//! A window belongs to one weekday. When `close <= open` it runs past midnight: `Fri 20:00-02:00`
//! is open Friday night and keeps serving until 02:00 on Saturday.

use super::DomainError;
use chrono::{NaiveTime, Weekday};
use serde::{Deserialize, Serialize};
use std::fmt::Display;

const TIME_FORMAT: &str = "%H:%M";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct OpeningHours {
    pub day: Weekday,
    pub open: NaiveTime,
    pub close: NaiveTime,
}

impl OpeningHours {
    pub fn new(day: Weekday, open: NaiveTime, close: NaiveTime) -> Self {
        Self { day, open, close }
    }

    /// Parses a window such as `("viernes", "20:00", "02:00")`.
    ///
    /// Day names are accepted in Spanish (with or without accents) and English, full or
    /// abbreviated. Times use 24-hour `HH:MM`.
    pub fn parse(day: &str, open: &str, close: &str) -> Result<Self, DomainError> {
        Ok(Self {
            day: parse_weekday(day)?,
            open: parse_time(open)?,
            close: parse_time(close)?,
        })
    }

    /// True when the window wraps past midnight. `open == close` counts as a 24-hour window.
    pub fn is_overnight(&self) -> bool {
        self.open >= self.close
    }

    /// Checks `time` against this window on its own weekday only.
    ///
    /// Returns false for any other `day`, including the morning after an overnight window; use
    /// [`OpeningHours::covers`] to include that spill-over.
    pub fn is_open_at(&self, day: Weekday, time: NaiveTime) -> bool {
        if day != self.day {
            return false;
        }
        if self.is_overnight() {
            time >= self.open || time < self.close
        } else {
            self.open <= time && time < self.close
        }
    }

    /// Like [`OpeningHours::is_open_at`], but an overnight window also covers the early hours of
    /// the following day up to `close`.
    pub fn covers(&self, day: Weekday, time: NaiveTime) -> bool {
        self.is_open_at(day, time)
            || (self.is_overnight() && day == self.day.succ() && time < self.close)
    }
}

impl Display for OpeningHours {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} {}-{}",
            self.day,
            self.open.format(TIME_FORMAT),
            self.close.format(TIME_FORMAT)
        )
    }
}

pub fn parse_weekday(name: &str) -> Result<Weekday, DomainError> {
    let normalized = name.trim().to_lowercase();
    let day = match normalized.as_str() {
        "lunes" => Weekday::Mon,
        "martes" => Weekday::Tue,
        "miercoles" | "miércoles" => Weekday::Wed,
        "jueves" => Weekday::Thu,
        "viernes" => Weekday::Fri,
        "sabado" | "sábado" => Weekday::Sat,
        "domingo" => Weekday::Sun,
        other => other
            .parse::<Weekday>()
            .map_err(|_| DomainError::invalid_argument(format!("unknown day of week: {}", name)))?,
    };
    Ok(day)
}

pub fn parse_time(value: &str) -> Result<NaiveTime, DomainError> {
    NaiveTime::parse_from_str(value.trim(), TIME_FORMAT)
        .map_err(|_| DomainError::invalid_argument(format!("invalid time (expected HH:MM): {}", value)))
}
