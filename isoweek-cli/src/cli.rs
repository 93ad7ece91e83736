use crate::config::OutputFormat;

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use isoweek_core::{CALENDAR_DATE_FORMAT, WeekDate, iso_weekday_from_number};
use thiserror::Error as ThisError;
use time::{Date, Weekday, error::Parse as ParseError};

#[derive(Debug, Clone, Parser)]
#[clap(author, version)]
pub struct Arguments {
    /// Specify path for config file.
    #[clap(short, long)]
    pub config: Option<PathBuf>,

    /// Override output format.
    #[clap(short, long, value_enum)]
    pub output: Option<OutputFormat>,

    /// Print debug logs to stderr.
    #[clap(short, long)]
    pub verbose: bool,

    #[clap(subcommand)]
    pub command: Command,
}

#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// Validate an ISO week date such as 2021-W52.
    Parse { week: WeekDate },

    /// Show the ISO week containing a calendar date (defaults to today).
    FromDate {
        #[clap(value_parser = parse_calendar_date)]
        date: Option<Date>,
    },

    /// Show the calendar date of a weekday in the week.
    ToDate {
        week: WeekDate,

        /// Weekday name or number (1 = Monday, 7 or 0 = Sunday).
        #[clap(short, long, value_parser = parse_weekday)]
        weekday: Option<Weekday>,
    },

    /// Move the week by signed number of weeks.
    Add {
        week: WeekDate,

        #[clap(allow_negative_numbers = true)]
        weeks: i32,
    },

    /// Count weeks from one week date to another.
    Diff { from: WeekDate, to: WeekDate },

    /// Show how many ISO weeks the year has.
    WeeksInYear {
        #[clap(allow_negative_numbers = true)]
        year: i32,
    },
}

pub fn parse_calendar_date(s: &str) -> Result<Date, ParseError> {
    Date::parse(s, CALENDAR_DATE_FORMAT)
}

pub fn parse_weekday(s: &str) -> Result<Weekday, InvalidWeekday> {
    if let Ok(number) = s.parse::<u8>() {
        return iso_weekday_from_number(number).ok_or_else(|| InvalidWeekday(s.to_string()));
    }

    let weekday = match s.to_ascii_lowercase().as_str() {
        "mon" | "monday" => Weekday::Monday,
        "tue" | "tuesday" => Weekday::Tuesday,
        "wed" | "wednesday" => Weekday::Wednesday,
        "thu" | "thursday" => Weekday::Thursday,
        "fri" | "friday" => Weekday::Friday,
        "sat" | "saturday" => Weekday::Saturday,
        "sun" | "sunday" => Weekday::Sunday,
        _ => return Err(InvalidWeekday(s.to_string())),
    };
    Ok(weekday)
}

#[derive(Debug, Clone, ThisError)]
#[error("invalid weekday, name or number in 0..=7 expected: {0}")]
pub struct InvalidWeekday(String);

#[cfg(test)]
mod tests {
    use super::*;

    use time::macros::date;

    #[test]
    fn parses_weekdays() {
        assert_eq!(parse_weekday("1").expect("valid"), Weekday::Monday);
        assert_eq!(parse_weekday("0").expect("valid"), Weekday::Sunday);
        assert_eq!(parse_weekday("7").expect("valid"), Weekday::Sunday);
        assert_eq!(parse_weekday("Thu").expect("valid"), Weekday::Thursday);
        assert_eq!(parse_weekday("saturday").expect("valid"), Weekday::Saturday);
        assert!(parse_weekday("8").is_err());
        assert!(parse_weekday("someday").is_err());
    }

    #[test]
    fn parses_calendar_dates() {
        assert_eq!(parse_calendar_date("2021-12-27").expect("valid"), date!(2021 - 12 - 27));
        assert!(parse_calendar_date("2021-W52").is_err());
    }

    #[test]
    fn parses_arguments() {
        let args = Arguments::try_parse_from(["isoweek", "-o", "json", "add", "2016-W01", "-1"]).expect("valid");
        assert_eq!(args.output, Some(OutputFormat::Json));
        let Command::Add { week, weeks } = args.command else {
            panic!("add expected");
        };
        assert_eq!(week, WeekDate::new(2016, 1).expect("valid"));
        assert_eq!(weeks, -1);

        let args = Arguments::try_parse_from(["isoweek", "to-date", "2021-W52", "--weekday", "sun"]).expect("valid");
        let Command::ToDate { weekday, .. } = args.command else {
            panic!("to-date expected");
        };
        assert_eq!(weekday, Some(Weekday::Sunday));
    }

    #[test]
    fn accepts_negative_years() {
        let args = Arguments::try_parse_from(["isoweek", "weeks-in-year", "-1"]).expect("valid");
        let Command::WeeksInYear { year } = args.command else {
            panic!("weeks-in-year expected");
        };
        assert_eq!(year, -1);
    }

    #[test]
    fn rejects_malformed_week_arguments() {
        let err = Arguments::try_parse_from(["isoweek", "parse", "2021W52"]).expect_err("malformed");
        assert!(err.to_string().contains("unable to unmarshal text"));
    }
}
