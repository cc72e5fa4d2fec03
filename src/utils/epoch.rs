//! UNIX epoch seconds on the wire, `DateTime<Utc>` in memory.
//!
//! 整數秒序列化為整數，帶小數的時間序列化為浮點數；反序列化兩者皆接受。

use chrono::{DateTime, TimeZone, Utc};
use serde::{de, Deserialize, Deserializer, Serializer};

fn to_wire<S: Serializer>(value: &DateTime<Utc>, serializer: S) -> Result<S::Ok, S::Error> {
    if value.timestamp_subsec_nanos() == 0 {
        serializer.serialize_i64(value.timestamp())
    } else {
        let secs = value.timestamp() as f64 + f64::from(value.timestamp_subsec_nanos()) / 1e9;
        serializer.serialize_f64(secs)
    }
}

fn from_seconds<E: de::Error>(secs: f64) -> Result<DateTime<Utc>, E> {
    if !secs.is_finite() {
        return Err(E::custom("epoch seconds must be finite"));
    }
    let whole = secs.floor();
    let nanos = ((secs - whole) * 1e9).round() as u32;
    let (whole, nanos) = if nanos >= 1_000_000_000 {
        (whole as i64 + 1, 0)
    } else {
        (whole as i64, nanos)
    };
    Utc.timestamp_opt(whole, nanos)
        .single()
        .ok_or_else(|| E::custom(format!("epoch seconds out of range: {}", secs)))
}

pub fn serialize<S: Serializer>(value: &DateTime<Utc>, serializer: S) -> Result<S::Ok, S::Error> {
    to_wire(value, serializer)
}

pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<DateTime<Utc>, D::Error> {
    let secs = f64::deserialize(deserializer)?;
    from_seconds(secs)
}

pub mod option {
    use super::*;

    pub fn serialize<S: Serializer>(
        value: &Option<DateTime<Utc>>,
        serializer: S,
    ) -> Result<S::Ok, S::Error> {
        match value {
            Some(v) => to_wire(v, serializer),
            None => serializer.serialize_none(),
        }
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<Option<DateTime<Utc>>, D::Error> {
        match Option::<f64>::deserialize(deserializer)? {
            Some(secs) => from_seconds(secs).map(Some),
            None => Ok(None),
        }
    }
}

#[cfg(test)]
mod tests {
    use chrono::{DateTime, TimeZone, Utc};
    use serde::{Deserialize, Serialize};

    #[derive(Debug, Serialize, Deserialize, PartialEq)]
    struct Stamp {
        #[serde(with = "super")]
        at: DateTime<Utc>,
        #[serde(default, with = "super::option", skip_serializing_if = "Option::is_none")]
        maybe: Option<DateTime<Utc>>,
    }

    #[test]
    fn test_whole_seconds_are_integers() {
        let stamp = Stamp {
            at: Utc.timestamp_opt(1_700_000_000, 0).unwrap(),
            maybe: None,
        };
        assert_eq!(serde_json::to_string(&stamp).unwrap(), r#"{"at":1700000000}"#);
    }

    #[test]
    fn test_fractional_seconds_parse() {
        let stamp: Stamp = serde_json::from_str(r#"{"at":1700000000.5,"maybe":12}"#).unwrap();
        assert_eq!(stamp.at.timestamp(), 1_700_000_000);
        assert_eq!(stamp.at.timestamp_subsec_millis(), 500);
        assert_eq!(stamp.maybe.unwrap().timestamp(), 12);
    }

    #[test]
    fn test_missing_optional_is_none() {
        let stamp: Stamp = serde_json::from_str(r#"{"at":0}"#).unwrap();
        assert!(stamp.maybe.is_none());
    }
}
