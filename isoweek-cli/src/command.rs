use crate::{cli::Command, config::Config, report::Report};

use anyhow::{Context, Result};
use isoweek_core::{CALENDAR_DATE_FORMAT, WeekDate, validate, weeks_in_year};
use time::{Date, OffsetDateTime, format_description::BorrowedFormatItem, macros::format_description};
use tracing::debug;

/// UTC の 0 時を表す書式。RFC3339 と違って 10000 年以降も書ける。
const MIDNIGHT_UTC_FORMAT: &[BorrowedFormatItem<'static>] =
    format_description!("[year range:extended]-[month]-[day]T[hour]:[minute]:[second]Z");

pub fn execute(command: &Command, config: &Config) -> Result<Report> {
    execute_at(command, config, local_today)
}

fn local_today() -> Date {
    OffsetDateTime::now_local()
        .unwrap_or_else(|_| OffsetDateTime::now_utc())
        .date()
}

/// コマンドを実行する。基準日は日付を省略した from-date でだけ `today` から得る。
pub fn execute_at(command: &Command, config: &Config, today: impl FnOnce() -> Date) -> Result<Report> {
    let report = match command {
        Command::Parse { week } => Report::Week {
            week: *week,
            weeks_in_year: week.weeks_in_year(),
        },

        Command::FromDate { date } => {
            let date = date.unwrap_or_else(today);
            let week = WeekDate::from_calendar_date(date).with_context(|| format!("no ISO week for {date}"))?;
            Report::Week {
                week,
                weeks_in_year: week.weeks_in_year(),
            }
        }

        Command::ToDate { week, weekday } => {
            let weekday = weekday.unwrap_or_else(|| config.default_weekday.into());
            let midnight = week.to_calendar_date(weekday)?;
            debug!("{week} {weekday} resolved to {midnight}");
            Report::Date {
                week: *week,
                weekday: weekday.to_string(),
                date: midnight.date().format(CALENDAR_DATE_FORMAT)?,
                midnight_utc: midnight.format(MIDNIGHT_UTC_FORMAT)?,
            }
        }

        Command::Add { week, weeks } => {
            let moved = week
                .add(*weeks)
                .with_context(|| format!("cannot move {week} by {weeks} weeks"))?;
            Report::Week {
                week: moved,
                weeks_in_year: moved.weeks_in_year(),
            }
        }

        Command::Diff { from, to } => Report::Difference {
            from: *from,
            to: *to,
            weeks: from.difference(to),
        },

        Command::WeeksInYear { year } => {
            validate(*year, 1)?;
            Report::WeeksInYear {
                year: *year,
                weeks: weeks_in_year(*year),
            }
        }
    };
    Ok(report)
}
