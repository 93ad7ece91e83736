use crate::{
    calendar::{self, iso_weekday, normalize_ordinal},
    codec,
    error::WeekDateError,
};

use std::fmt::{Display, Formatter, Result as FmtResult};

use time::{Date, Month, OffsetDateTime, Weekday};

/// ISO 8601 の週日付 (`YYYY-Www`)。
///
/// 値は常に検証済みで、`week` は `1..=weeks_in_year(year)` に収まる。
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct WeekDate {
    year: i32,
    week: u8,
}

impl WeekDate {
    pub fn new(year: i32, week: u8) -> Result<WeekDate, WeekDateError> {
        calendar::validate(year, week)?;
        Ok(WeekDate { year, week })
    }

    /// 検証を済ませた値からのみ呼ぶこと。
    pub(crate) fn new_unchecked(year: i32, week: u8) -> WeekDate {
        debug_assert!(calendar::validate(year, week).is_ok());
        WeekDate { year, week }
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    pub fn week(&self) -> u8 {
        self.week
    }

    /// この週が属する ISO 週年の週数。
    pub fn weeks_in_year(&self) -> u8 {
        calendar::weeks_in_year(self.year)
    }

    /// 暦日付が属する ISO 週を求める。
    pub fn from_calendar_date(date: Date) -> Result<WeekDate, WeekDateError> {
        let (year, week, _) = date.to_iso_week_date();
        WeekDate::new(year, week)
    }

    /// この週の指定曜日の日付。
    pub fn to_date(&self, weekday: Weekday) -> Result<Date, WeekDateError> {
        let jan_4th = Date::from_calendar_date(self.year, Month::January, 4)?;
        let correction = i32::from(iso_weekday(jan_4th.weekday())) + 3;

        let ordinal = i32::from(self.week) * 7 + i32::from(iso_weekday(weekday)) - correction;
        let (year, ordinal) = normalize_ordinal(self.year, ordinal);

        Ok(Date::from_ordinal_date(year, ordinal)?)
    }

    /// この週の指定曜日の 00:00:00 UTC。
    pub fn to_calendar_date(&self, weekday: Weekday) -> Result<OffsetDateTime, WeekDateError> {
        let date = self.to_date(weekday)?;
        Ok(date.midnight().assume_utc())
    }

    /// `YYYY-Www` の 8 バイト表現。
    pub fn to_token(&self) -> [u8; codec::TOKEN_LENGTH] {
        codec::write_token(self.year, self.week)
    }
}

impl TryFrom<Date> for WeekDate {
    type Error = WeekDateError;

    fn try_from(value: Date) -> Result<WeekDate, WeekDateError> {
        WeekDate::from_calendar_date(value)
    }
}

impl Display for WeekDate {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(f, "{:04}-W{:02}", self.year, self.week)
    }
}
