use chrono::{DateTime, Duration, NaiveDate, NaiveDateTime, Utc};
use sea_orm::DbErr;
use serde::de::DeserializeOwned;

use crate::server::error::AppError;

/// Parses a stored enum column back into its domain type.
///
/// # Arguments
/// - `column` - `table.column` name used in the error message
/// - `value` - Raw value read from the database
/// - `parse` - The enum's `parse` constructor
///
/// # Returns
/// - `Ok(T)` - Known value
/// - `Err(DbErr::Custom)` - The row holds a value the application never writes
pub fn parse_stored<T>(
    column: &str,
    value: &str,
    parse: fn(&str) -> Option<T>,
) -> Result<T, DbErr> {
    parse(value).ok_or_else(|| DbErr::Custom(format!("Unknown {} value '{}'", column, value)))
}

/// Parses a query-string value with the same names and aliases its JSON form accepts.
///
/// # Returns
/// - `Ok(T)` - Value matched one of the enum's names or aliases
/// - `Err(AppError::BadRequest)` - Unknown value
pub fn parse_wire_enum<T: DeserializeOwned>(label: &str, value: &str) -> Result<T, AppError> {
    serde_json::from_value(serde_json::Value::String(value.to_lowercase()))
        .map_err(|_| AppError::BadRequest(format!("Unknown {} '{}'", label, value)))
}

/// Parses a `YYYY-MM-DD` day into the UTC instant it starts at.
pub fn parse_date_start(value: &str) -> Result<DateTime<Utc>, AppError> {
    let date = parse_date(value)?;

    Ok(date.and_time(chrono::NaiveTime::MIN).and_utc())
}

/// Parses a `YYYY-MM-DD` day into the UTC instant the next day starts at, so
/// the whole day is included by an exclusive upper bound.
///
/// # Returns
/// - `Ok(DateTime<Utc>)` - Start of the following day
/// - `Err(AppError::BadRequest)` - Malformed date, or the last representable day
pub fn parse_date_end(value: &str) -> Result<DateTime<Utc>, AppError> {
    parse_date_start(value)?
        .checked_add_signed(Duration::days(1))
        .ok_or_else(|| AppError::BadRequest(format!("Date '{}' is out of range", value)))
}

fn parse_date(value: &str) -> Result<NaiveDate, AppError> {
    NaiveDate::parse_from_str(value.trim(), "%Y-%m-%d").map_err(|_| {
        AppError::BadRequest(format!("Invalid date '{}', expected YYYY-MM-DD", value))
    })
}

/// Parses an RFC 3339 timestamp, or a zone-less `YYYY-MM-DDTHH:MM[:SS]` read as UTC.
///
/// # Returns
/// - `Ok(DateTime<Utc>)` - Parsed timestamp
/// - `Err(AppError::BadRequest)` - Neither format matched
pub fn parse_datetime(field: &str, value: &str) -> Result<DateTime<Utc>, AppError> {
    let value = value.trim();

    if let Ok(parsed) = DateTime::parse_from_rfc3339(value) {
        return Ok(parsed.with_timezone(&Utc));
    }

    ["%Y-%m-%dT%H:%M:%S", "%Y-%m-%dT%H:%M", "%Y-%m-%d %H:%M:%S", "%Y-%m-%d %H:%M"]
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(value, format).ok())
        .map(|naive| naive.and_utc())
        .ok_or_else(|| {
            AppError::BadRequest(format!("Invalid {} timestamp '{}'", field, value))
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{auth::Role, vehicle::VehicleKind};
    use chrono::TimeZone;

    #[test]
    fn reports_unknown_stored_values() {
        assert_eq!(parse_stored("user.role", "admin", Role::parse).unwrap(), Role::Admin);
        assert!(matches!(
            parse_stored("user.role", "root", Role::parse),
            Err(DbErr::Custom(_))
        ));
    }

    #[test]
    fn accepts_wire_aliases() {
        let kind: VehicleKind = parse_wire_enum("vehicle kind", "Camion").unwrap();
        assert_eq!(kind, VehicleKind::Truck);
        assert!(parse_wire_enum::<VehicleKind>("vehicle kind", "boat").is_err());
    }

    #[test]
    fn parses_naive_timestamps_as_utc() {
        let expected = Utc.with_ymd_and_hms(2025, 5, 1, 8, 30, 0).unwrap();

        assert_eq!(parse_datetime("start", "2025-05-01T08:30").unwrap(), expected);
        assert_eq!(parse_datetime("start", "2025-05-01T08:30:00").unwrap(), expected);
        assert_eq!(
            parse_datetime("start", "2025-05-01T10:30:00+02:00").unwrap(),
            expected
        );
        assert!(parse_datetime("start", "yesterday").is_err());
    }

    #[test]
    fn rejects_malformed_dates() {
        assert!(parse_date_start("2025-13-01").is_err());
        assert!(parse_date_start("01/05/2025").is_err());
    }

    #[test]
    fn end_of_range_day_is_rejected() {
        assert!(matches!(
            parse_date_end("+262142-12-31"),
            Err(AppError::BadRequest(_))
        ));
        assert!(parse_date_end("2025-12-31").is_ok());
    }
}
