use crate::{codec, error::SurfaceError, week_date::WeekDate};

use std::{
    fmt::{Formatter, Result as FmtResult},
    str::FromStr,
};

use serde::{
    Deserialize, Serialize,
    de::{Error as DeError, Visitor},
};

impl FromStr for WeekDate {
    type Err = SurfaceError;

    fn from_str(s: &str) -> Result<WeekDate, SurfaceError> {
        codec::decode(s.as_bytes()).map_err(SurfaceError::by_text)
    }
}

impl Serialize for WeekDate {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for WeekDate {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        deserializer.deserialize_str(WeekDateVisitor)
    }
}

struct WeekDateVisitor;

impl<'de> Visitor<'de> for WeekDateVisitor {
    type Value = WeekDate;

    fn expecting(&self, formatter: &mut Formatter) -> FmtResult {
        formatter.write_str("ISO week date string like \"2021-W52\"")
    }

    fn visit_str<E>(self, v: &str) -> Result<WeekDate, E>
    where
        E: DeError,
    {
        self.visit_bytes(v.as_bytes())
    }

    fn visit_bytes<E>(self, v: &[u8]) -> Result<WeekDate, E>
    where
        E: DeError,
    {
        codec::decode(v).map_err(|e| E::custom(SurfaceError::by_json(e)))
    }
}
