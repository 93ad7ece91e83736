use std::fmt::{Display, Formatter, Result as FmtResult};

use thiserror::Error as ThisError;
use time::error::ComponentRange;

#[derive(Debug, Clone, PartialEq, Eq, ThisError)]
pub enum WeekDateError {
    #[error("invalid year {year}, must be in 0..=9999")]
    InvalidYear { year: i32 },

    #[error("invalid week {week} for year {year}")]
    InvalidWeek { year: i32, week: u8 },

    #[error("malformed ISO week date: {0}")]
    Format(#[from] FormatError),

    #[error("incompatible type: {found}")]
    UnsupportedSourceType { found: &'static str },

    #[error("week date overflowed after year {year}")]
    RangeOverflow { year: i32 },

    #[error("week date underflowed before year {year}")]
    RangeUnderflow { year: i32 },

    #[error("calendar date out of range: {0}")]
    DateOutOfRange(#[from] ComponentRange),
}

/// `YYYY-Www` 形式として読めなかった理由。
#[derive(Debug, Clone, Copy, PartialEq, Eq, ThisError)]
pub enum FormatError {
    #[error("expected 8 bytes, got {0}")]
    Length(usize),

    #[error("expected {expected:?} at offset {offset}, found {found:?}")]
    Separator { offset: usize, expected: char, found: char },

    #[error("expected ASCII digit at offset {offset}, found {found:?}")]
    NonDigit { offset: usize, found: char },
}

/// シリアライズ経路ごとの文脈。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Surface {
    Json,
    Text,
    StorageValue,
}

impl Display for Surface {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match self {
            Surface::Json => f.write_str("unable to unmarshal json"),
            Surface::Text => f.write_str("unable to unmarshal text"),
            Surface::StorageValue => f.write_str("unable to scan value"),
        }
    }
}

/// 外部表現からの変換失敗。元の [`WeekDateError`] を `source` として保持する。
#[derive(Debug, Clone, PartialEq, Eq, ThisError)]
#[error("{surface}: {source}")]
pub struct SurfaceError {
    surface: Surface,

    #[source]
    source: WeekDateError,
}

impl SurfaceError {
    pub fn new(surface: Surface, source: WeekDateError) -> SurfaceError {
        SurfaceError { surface, source }
    }

    pub fn by_json(source: impl Into<WeekDateError>) -> SurfaceError {
        SurfaceError::new(Surface::Json, source.into())
    }

    pub fn by_text(source: impl Into<WeekDateError>) -> SurfaceError {
        SurfaceError::new(Surface::Text, source.into())
    }

    pub fn by_storage_value(source: impl Into<WeekDateError>) -> SurfaceError {
        SurfaceError::new(Surface::StorageValue, source.into())
    }

    pub fn surface(&self) -> Surface {
        self.surface
    }

    pub fn cause(&self) -> &WeekDateError {
        &self.source
    }

    pub fn into_cause(self) -> WeekDateError {
        self.source
    }
}
