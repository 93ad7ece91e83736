use crate::config::OutputFormat;

use std::fmt::{Display, Formatter, Result as FmtResult};

use isoweek_core::WeekDate;
use serde::Serialize;

/// コマンドの実行結果。
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case", tag = "kind")]
pub enum Report {
    Week {
        week: WeekDate,
        weeks_in_year: u8,
    },
    Date {
        week: WeekDate,
        weekday: String,
        date: String,
        midnight_utc: String,
    },
    Difference {
        from: WeekDate,
        to: WeekDate,
        weeks: i32,
    },
    WeeksInYear {
        year: i32,
        weeks: u8,
    },
}

impl Report {
    pub fn render(&self, format: OutputFormat) -> Result<String, serde_json::Error> {
        match format {
            OutputFormat::Text => Ok(self.to_string()),
            OutputFormat::Json => serde_json::to_string(self),
        }
    }
}

impl Display for Report {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match self {
            Report::Week { week, weeks_in_year } => {
                write!(f, "{week} (year {} has {weeks_in_year} weeks)", week.year())
            }
            Report::Date { week, weekday, date, .. } => write!(f, "{date} ({weekday} of {week})"),
            Report::Difference { from, to, weeks } => write!(f, "{weeks} weeks from {from} to {to}"),
            Report::WeeksInYear { year, weeks } => write!(f, "{year:04} has {weeks} weeks"),
        }
    }
}
