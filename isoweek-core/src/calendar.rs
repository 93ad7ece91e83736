use crate::error::WeekDateError;

use std::ops::RangeInclusive;

use time::Weekday;

pub use time::util::{days_in_year, is_leap_year};

/// 扱える ISO 週年の範囲。`YYYY` の 4 桁に収まるもの。
pub const YEAR_RANGE: RangeInclusive<i32> = 0..=9999;

/// `year` と `week` の組が ISO 週日付として正しいか検査する。
pub fn validate(year: i32, week: u8) -> Result<(), WeekDateError> {
    if !YEAR_RANGE.contains(&year) {
        return Err(WeekDateError::InvalidYear { year });
    }
    if !(1..=weeks_in_year(year)).contains(&week) {
        return Err(WeekDateError::InvalidWeek { year, week });
    }
    Ok(())
}

/// ISO 週年 `year` に含まれる週の数 (52 か 53)。
///
/// 1/1 か 12/31 が木曜日の年だけが 53 週ある。
pub fn weeks_in_year(year: i32) -> u8 {
    if december_31_weekday(year) == 4 || december_31_weekday(year - 1) == 3 {
        53
    } else {
        52
    }
}

/// その年の 12/31 の曜日。日曜日が 0。
fn december_31_weekday(year: i32) -> i32 {
    (year + year.div_euclid(4) - year.div_euclid(100) + year.div_euclid(400)).rem_euclid(7)
}

/// 曜日の ISO 番号 (月曜日 1 〜 日曜日 7)。
pub fn iso_weekday(weekday: Weekday) -> u8 {
    weekday.number_from_monday()
}

/// 番号から曜日を得る。日曜日始まりの 0 も 7 と同じく日曜日として扱う。
pub fn iso_weekday_from_number(number: u8) -> Option<Weekday> {
    let weekday = match number {
        1 => Weekday::Monday,
        2 => Weekday::Tuesday,
        3 => Weekday::Wednesday,
        4 => Weekday::Thursday,
        5 => Weekday::Friday,
        6 => Weekday::Saturday,
        0 | 7 => Weekday::Sunday,
        _ => return None,
    };
    Some(weekday)
}

/// 年をまたいだ通日を正規化する。
/// 1 未満なら前年、その年の日数を超えていれば翌年に繰る。
pub(crate) fn normalize_ordinal(year: i32, ordinal: i32) -> (i32, u16) {
    if ordinal < 1 {
        let previous = year - 1;
        return (previous, (i32::from(days_in_year(previous)) + ordinal) as u16);
    }

    let days = i32::from(days_in_year(year));
    if ordinal > days {
        (year + 1, (ordinal - days) as u16)
    } else {
        (year, ordinal as u16)
    }
}
