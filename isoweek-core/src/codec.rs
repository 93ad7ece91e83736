//! `YYYY-Www` 形式の固定長トークン。JSON・テキスト・ストレージの各表現はすべてここを通る。

use crate::{
    calendar,
    error::{FormatError, WeekDateError},
    week_date::WeekDate,
};

use tracing::trace;

pub const TOKEN_LENGTH: usize = 8;

const YEAR_DIGITS: usize = 4;
const WEEK_OFFSET: usize = 6;
const SEPARATORS: [(usize, u8); 2] = [(4, b'-'), (5, b'W')];

/// `year` と `week` を検証してトークンにする。
pub fn encode(year: i32, week: u8) -> Result<[u8; TOKEN_LENGTH], WeekDateError> {
    calendar::validate(year, week)?;
    Ok(write_token(year, week))
}

/// トークンを読んで検証済みの [`WeekDate`] にする。
pub fn decode(bytes: &[u8]) -> Result<WeekDate, WeekDateError> {
    if bytes.len() != TOKEN_LENGTH {
        trace!("rejected week date token of length {}", bytes.len());
        return Err(FormatError::Length(bytes.len()).into());
    }

    for (offset, expected) in SEPARATORS {
        if bytes[offset] != expected {
            return Err(FormatError::Separator {
                offset,
                expected: char::from(expected),
                found: char::from(bytes[offset]),
            }
            .into());
        }
    }

    let year = parse_digits(&bytes[..YEAR_DIGITS], 0)?;
    let week = parse_digits(&bytes[WEEK_OFFSET..], WEEK_OFFSET)?;

    // 2 桁なので u8 に収まる
    WeekDate::new(year as i32, week as u8)
}

/// 検証済みの値を前提に書き出す。
pub(crate) fn write_token(year: i32, week: u8) -> [u8; TOKEN_LENGTH] {
    let year = year as u32;
    [
        ascii_digit(year / 1000),
        ascii_digit(year / 100),
        ascii_digit(year / 10),
        ascii_digit(year),
        b'-',
        b'W',
        ascii_digit(u32::from(week) / 10),
        ascii_digit(u32::from(week)),
    ]
}

fn ascii_digit(value: u32) -> u8 {
    b'0' + (value % 10) as u8
}

fn parse_digits(digits: &[u8], base_offset: usize) -> Result<u32, FormatError> {
    digits.iter().enumerate().try_fold(0, |acc, (i, &b)| {
        if b.is_ascii_digit() {
            Ok(acc * 10 + u32::from(b - b'0'))
        } else {
            Err(FormatError::NonDigit {
                offset: base_offset + i,
                found: char::from(b),
            })
        }
    })
}
