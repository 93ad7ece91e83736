use crate::{
    codec,
    error::{SurfaceError, WeekDateError},
    week_date::WeekDate,
};

use sqlx::{
    Database, Decode, Encode, Sqlite, Type, TypeInfo, ValueRef,
    encode::IsNull,
    error::BoxDynError,
    sqlite::{SqliteTypeInfo, SqliteValueRef},
};
use tracing::debug;

/// ストレージから読み出した生の値。
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum StorageValue<'a> {
    Null,
    Integer(i64),
    Real(f64),
    Text(&'a str),
    Bytes(&'a [u8]),
}

impl StorageValue<'_> {
    pub fn type_name(&self) -> &'static str {
        match self {
            StorageValue::Null => "NULL",
            StorageValue::Integer(_) => "INTEGER",
            StorageValue::Real(_) => "REAL",
            StorageValue::Text(_) => "TEXT",
            StorageValue::Bytes(_) => "BLOB",
        }
    }
}

impl<'a> From<&'a str> for StorageValue<'a> {
    fn from(value: &'a str) -> StorageValue<'a> {
        StorageValue::Text(value)
    }
}

impl<'a> From<&'a [u8]> for StorageValue<'a> {
    fn from(value: &'a [u8]) -> StorageValue<'a> {
        StorageValue::Bytes(value)
    }
}

impl From<i64> for StorageValue<'_> {
    fn from(value: i64) -> Self {
        StorageValue::Integer(value)
    }
}

impl From<f64> for StorageValue<'_> {
    fn from(value: f64) -> Self {
        StorageValue::Real(value)
    }
}

impl WeekDate {
    /// ストレージに書き込む値。常に `YYYY-Www`。
    pub fn to_storage_value(&self) -> String {
        self.to_string()
    }

    /// ストレージの値を読む。文字列とバイト列のみ受け付ける。
    pub fn scan(source: StorageValue<'_>) -> Result<WeekDate, SurfaceError> {
        let bytes = match source {
            StorageValue::Text(text) => text.as_bytes(),
            StorageValue::Bytes(bytes) => bytes,
            otherwise => {
                debug!("cannot scan week date from {}", otherwise.type_name());
                return Err(SurfaceError::by_storage_value(WeekDateError::UnsupportedSourceType {
                    found: otherwise.type_name(),
                }));
            }
        };
        codec::decode(bytes).map_err(SurfaceError::by_storage_value)
    }
}

impl Type<Sqlite> for WeekDate {
    fn type_info() -> SqliteTypeInfo {
        <str as Type<Sqlite>>::type_info()
    }

    fn compatible(ty: &SqliteTypeInfo) -> bool {
        <str as Type<Sqlite>>::compatible(ty) || <[u8] as Type<Sqlite>>::compatible(ty)
    }
}

impl<'q> Encode<'q, Sqlite> for WeekDate {
    fn encode_by_ref(&self, buf: &mut <Sqlite as Database>::ArgumentBuffer<'q>) -> Result<IsNull, BoxDynError> {
        <String as Encode<'q, Sqlite>>::encode(self.to_storage_value(), buf)
    }
}

impl<'r> Decode<'r, Sqlite> for WeekDate {
    fn decode(value: SqliteValueRef<'r>) -> Result<WeekDate, BoxDynError> {
        if value.is_null() {
            return Ok(WeekDate::scan(StorageValue::Null)?);
        }

        let type_info = value.type_info().into_owned();
        let source = match type_info.name() {
            "TEXT" => StorageValue::Text(<&str as Decode<Sqlite>>::decode(value)?),
            "BLOB" => StorageValue::Bytes(<&[u8] as Decode<Sqlite>>::decode(value)?),
            "INTEGER" => StorageValue::Integer(<i64 as Decode<Sqlite>>::decode(value)?),
            "REAL" => StorageValue::Real(<f64 as Decode<Sqlite>>::decode(value)?),
            _ => StorageValue::Null,
        };
        Ok(WeekDate::scan(source)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::error::{FormatError, Surface};

    use sqlx::{Connection, Row, SqliteConnection};

    fn week(year: i32, week: u8) -> WeekDate {
        WeekDate::new(year, week).expect("valid week")
    }

    async fn connect() -> SqliteConnection {
        let mut conn = SqliteConnection::connect("sqlite::memory:").await.expect("in-memory database");
        sqlx::query(r#"CREATE TABLE schedules (id INTEGER PRIMARY KEY, week TEXT, raw BLOB);"#)
            .execute(&mut conn)
            .await
            .expect("table created");
        conn
    }

    #[test]
    fn scans_text_and_bytes() {
        assert_eq!(WeekDate::scan("2021-W52".into()), Ok(week(2021, 52)));
        assert_eq!(WeekDate::scan(b"2020-W53".as_slice().into()), Ok(week(2020, 53)));
        assert_eq!(week(2015, 3).to_storage_value(), "2015-W03");
    }

    #[test]
    fn rejects_unsupported_sources() {
        for source in [StorageValue::Null, 2021i64.into(), 2021.52f64.into()] {
            let err = WeekDate::scan(source).expect_err("unsupported source");
            assert_eq!(err.surface(), Surface::StorageValue);
            assert_eq!(
                err.cause(),
                &WeekDateError::UnsupportedSourceType {
                    found: source.type_name()
                }
            );
            assert!(err.to_string().starts_with("unable to scan value: incompatible type"));
        }
    }

    #[test]
    fn scan_errors_keep_format_cause() {
        let err = WeekDate::scan("2021W52".into()).expect_err("missing separator");
        assert_eq!(err.cause(), &WeekDateError::Format(FormatError::Length(7)));
        assert_eq!(
            err.to_string(),
            "unable to scan value: malformed ISO week date: expected 8 bytes, got 7"
        );
    }

    #[tokio::test]
    async fn round_trips_through_sqlite() {
        let mut conn = connect().await;
        let stored = week(2020, 53);

        sqlx::query(r#"INSERT INTO schedules (id, week) VALUES (?, ?);"#)
            .bind(1i64)
            .bind(stored)
            .execute(&mut conn)
            .await
            .expect("inserted");

        let (fetched,): (WeekDate,) = sqlx::query_as(r#"SELECT week FROM schedules WHERE id = ?;"#)
            .bind(1i64)
            .fetch_one(&mut conn)
            .await
            .expect("fetched");
        assert_eq!(fetched, stored);

        let (raw,): (String,) = sqlx::query_as(r#"SELECT week FROM schedules WHERE id = 1;"#)
            .fetch_one(&mut conn)
            .await
            .expect("fetched");
        assert_eq!(raw, "2020-W53");
    }

    #[tokio::test]
    async fn decodes_blob_and_null() {
        let mut conn = connect().await;
        sqlx::query(r#"INSERT INTO schedules (id, week, raw) VALUES (1, NULL, CAST('2004-W53' AS BLOB));"#)
            .execute(&mut conn)
            .await
            .expect("inserted");

        let (week_column, raw_column): (Option<WeekDate>, WeekDate) =
            sqlx::query_as(r#"SELECT week, raw FROM schedules WHERE id = 1;"#)
                .fetch_one(&mut conn)
                .await
                .expect("fetched");
        assert_eq!(week_column, None);
        assert_eq!(raw_column, week(2004, 53));
    }

    #[tokio::test]
    async fn malformed_rows_are_reported() {
        let mut conn = connect().await;
        sqlx::query(r#"INSERT INTO schedules (id, week) VALUES (1, '2021-W53');"#)
            .execute(&mut conn)
            .await
            .expect("inserted");

        let err = sqlx::query_as::<_, (WeekDate,)>(r#"SELECT week FROM schedules WHERE id = 1;"#)
            .fetch_one(&mut conn)
            .await
            .expect_err("2021 has 52 weeks");
        let source = match err {
            sqlx::Error::ColumnDecode { source, .. } => source,
            otherwise => panic!("unexpected error: {otherwise}"),
        };
        let surface_error = source.downcast_ref::<SurfaceError>().expect("surface error");
        assert_eq!(surface_error.cause(), &WeekDateError::InvalidWeek { year: 2021, week: 53 });
    }

    #[tokio::test]
    async fn integer_values_are_unsupported() {
        let mut conn = connect().await;
        let row = sqlx::query(r#"SELECT 202152 AS week;"#)
            .fetch_one(&mut conn)
            .await
            .expect("fetched");

        let err = row.try_get_unchecked::<WeekDate, _>(0).expect_err("integer column");
        let source = match err {
            sqlx::Error::ColumnDecode { source, .. } => source,
            otherwise => panic!("unexpected error: {otherwise}"),
        };
        let surface_error = source.downcast_ref::<SurfaceError>().expect("surface error");
        assert_eq!(
            surface_error.cause(),
            &WeekDateError::UnsupportedSourceType { found: "INTEGER" }
        );
    }
}
