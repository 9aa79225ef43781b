use chrono::{Datelike, NaiveDate};

/// What the calendar card shows for one day.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CalendarDay {
    pub date: NaiveDate,
    pub weekday: String,
    pub day: u32,
    pub month_year: String,
}

impl CalendarDay {
    pub fn from_date(date: NaiveDate) -> Self {
        Self {
            date,
            weekday: date.format("%A").to_string(),
            day: date.day(),
            month_year: date.format("%B %Y").to_string(),
        }
    }

    /// Replace the shown day when the date has moved on. Returns true if it changed.
    pub fn roll_to(&mut self, today: NaiveDate) -> bool {
        if today == self.date {
            return false;
        }
        *self = Self::from_date(today);
        true
    }
}
