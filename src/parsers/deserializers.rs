use chrono::{Local, NaiveDateTime, TimeZone};
use serde_json::Value;

use crate::error::{TranscriptError, TranscriptResult};

/// Decode an extended-JSON `{"$date": {"$numberLong": "<ms>"}}` value into local time
///
/// The long may be encoded as a string or as a plain integer. A value of exactly
/// zero always maps to 1970-01-01 00:00:00, whatever the local offset.
pub fn decode_timestamp(value: &Value) -> TranscriptResult<NaiveDateTime> {
    decode_timestamp_in(value, &Local)
}

/// Same as [`decode_timestamp`] but converting into an explicit time zone
pub fn decode_timestamp_in<Tz: TimeZone>(value: &Value, tz: &Tz) -> TranscriptResult<NaiveDateTime> {
    let millis = epoch_millis(value)?;
    if millis == 0 {
        return Ok(NaiveDateTime::UNIX_EPOCH);
    }

    tz.timestamp_millis_opt(millis)
        .single()
        .map(|dt| dt.naive_local())
        .ok_or_else(|| TranscriptError::MalformedTimestamp(value.to_string()))
}

fn epoch_millis(value: &Value) -> TranscriptResult<i64> {
    let millis = match value.get("$date").and_then(|date| date.get("$numberLong")) {
        Some(Value::String(s)) => s.trim().parse::<i64>().ok(),
        Some(Value::Number(n)) => n.as_i64(),
        _ => None,
    };
    millis.ok_or_else(|| TranscriptError::MalformedTimestamp(value.to_string()))
}

#[cfg(test)]
mod tests {
    use chrono::{FixedOffset, NaiveDate, Utc};
    use serde_json::json;

    use super::*;

    fn epoch() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(1970, 1, 1).unwrap().and_hms_opt(0, 0, 0).unwrap()
    }

    #[test]
    fn test_zero_maps_to_epoch_start_in_any_zone() {
        let value = json!({"$date": {"$numberLong": "0"}});

        assert_eq!(decode_timestamp(&value).unwrap(), epoch());
        assert_eq!(decode_timestamp_in(&value, &Utc).unwrap(), epoch());

        let east = FixedOffset::east_opt(9 * 3600).unwrap();
        let west = FixedOffset::west_opt(8 * 3600).unwrap();
        assert_eq!(decode_timestamp_in(&value, &east).unwrap(), epoch());
        assert_eq!(decode_timestamp_in(&value, &west).unwrap(), epoch());
    }

    #[test]
    fn test_string_long_in_utc() {
        // 2024-01-15 10:30:00 UTC
        let value = json!({"$date": {"$numberLong": "1705314600000"}});
        let ts = decode_timestamp_in(&value, &Utc).unwrap();
        assert_eq!(ts, NaiveDate::from_ymd_opt(2024, 1, 15).unwrap().and_hms_opt(10, 30, 0).unwrap());
    }

    #[test]
    fn test_integer_long_is_accepted() {
        let value = json!({"$date": {"$numberLong": 1705314600000_i64}});
        let ts = decode_timestamp_in(&value, &Utc).unwrap();
        assert_eq!(ts.format("%Y-%m-%d %H:%M:%S").to_string(), "2024-01-15 10:30:00");
    }

    #[test]
    fn test_offset_is_applied() {
        let value = json!({"$date": {"$numberLong": "1705314600000"}});
        let east = FixedOffset::east_opt(2 * 3600).unwrap();
        let ts = decode_timestamp_in(&value, &east).unwrap();
        assert_eq!(ts.format("%Y-%m-%d %H:%M:%S").to_string(), "2024-01-15 12:30:00");
    }

    #[test]
    fn test_local_matches_chrono_local() {
        let value = json!({"$date": {"$numberLong": "1705314600000"}});
        let expected = Local.timestamp_millis_opt(1705314600000).unwrap().naive_local();
        assert_eq!(decode_timestamp(&value).unwrap(), expected);
    }

    #[test]
    fn test_malformed_structures() {
        let cases = [
            json!(1705314600000_i64),
            json!("2024-01-15T10:30:00Z"),
            json!({"$date": "2024-01-15T10:30:00Z"}),
            json!({"$date": {}}),
            json!({"$date": {"$numberLong": "not a number"}}),
            json!({"$date": {"$numberLong": 1.5}}),
            json!(null),
        ];

        for value in cases {
            let result = decode_timestamp(&value);
            assert!(
                matches!(result, Err(TranscriptError::MalformedTimestamp(_))),
                "expected MalformedTimestamp for {}",
                value
            );
        }
    }

    #[test]
    fn test_out_of_range_is_malformed() {
        let value = json!({"$date": {"$numberLong": i64::MAX.to_string()}});
        assert!(matches!(
            decode_timestamp_in(&value, &Utc),
            Err(TranscriptError::MalformedTimestamp(_))
        ));
    }
}
