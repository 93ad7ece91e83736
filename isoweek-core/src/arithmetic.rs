use crate::{
    calendar::{YEAR_RANGE, weeks_in_year},
    error::WeekDateError,
    week_date::WeekDate,
};

use std::{cmp::Ordering, ops::Sub};

use tracing::debug;

impl WeekDate {
    pub fn next(&self) -> Result<WeekDate, WeekDateError> {
        self.add(1)
    }

    pub fn previous(&self) -> Result<WeekDate, WeekDateError> {
        self.add(-1)
    }

    /// `weeks` 週後 (負なら前) の週。年の範囲を出る場合はエラー。
    pub fn add(&self, weeks: i32) -> Result<WeekDate, WeekDateError> {
        let mut year = self.year();
        let mut week = i64::from(self.week()) + i64::from(weeks);

        loop {
            let max_weeks = i64::from(weeks_in_year(year));
            if week > max_weeks {
                week -= max_weeks;
                year += 1;
                if year > *YEAR_RANGE.end() {
                    debug!("adding {weeks} weeks to {} overflowed", self);
                    return Err(WeekDateError::RangeOverflow { year: year - 1 });
                }
            } else if week < 1 {
                // 前年に戻ってからその年の週数を足す。week == 0 は前年の最終週になる
                year -= 1;
                if year < *YEAR_RANGE.start() {
                    debug!("adding {weeks} weeks to {} underflowed", self);
                    return Err(WeekDateError::RangeUnderflow { year: year + 1 });
                }
                week += i64::from(weeks_in_year(year));
            } else {
                break;
            }
        }

        Ok(WeekDate::new_unchecked(year, week as u8))
    }

    /// `self` から `other` までの週数。`other` の方が後なら正。
    pub fn difference(&self, other: &WeekDate) -> i32 {
        let (earlier, later, sign) = match self.year().cmp(&other.year()) {
            Ordering::Greater => (other, self, -1),
            Ordering::Equal | Ordering::Less => (self, other, 1),
        };

        let mut year = earlier.year();
        let mut weeks = 0;
        loop {
            assert!(year <= later.year(), "week date walk passed the later year");
            if year == later.year() {
                weeks += i32::from(later.week()) - i32::from(earlier.week());
                break;
            }
            weeks += i32::from(weeks_in_year(year));
            year += 1;
        }

        weeks * sign
    }
}

/// `a - b` は `b` から `a` までの週数。
impl Sub for WeekDate {
    type Output = i32;

    fn sub(self, rhs: WeekDate) -> i32 {
        rhs.difference(&self)
    }
}
