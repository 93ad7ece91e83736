mod arithmetic;
mod calendar;
pub mod codec;
mod error;
mod serialization;
mod storage;
mod week_date;

pub use calendar::{
    YEAR_RANGE, days_in_year, is_leap_year, iso_weekday, iso_weekday_from_number, validate, weeks_in_year,
};
pub use error::{FormatError, Surface, SurfaceError, WeekDateError};
pub use storage::StorageValue;
pub use week_date::WeekDate;

/// CLI などで使う暦日付の書式。
/// 9999-W52 の週末は 10000 年に入るので、5 桁の年は `+10000` のように符号付きで書く。
pub const CALENDAR_DATE_FORMAT: &[time::format_description::BorrowedFormatItem<'static>] =
    time::macros::format_description!("[year range:extended]-[month]-[day]");
