//! Serde helpers for request payloads
//!
//! - Ids arrive either as JSON numbers or as numeric strings (`"3"`).
//! - Patch fields keep "absent" and "explicit null" apart via
//!   `Option<Option<T>>`: absent = `None`, null = `Some(None)`.

use serde::{Deserialize, Deserializer};

/// Internal helper: accepts both integer and numeric-string ids
#[derive(Debug, Clone, Copy)]
struct FlexibleId(i64);

impl<'de> Deserialize<'de> for FlexibleId {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        use serde::de::{self, Visitor};
        use std::fmt;

        struct FlexibleVisitor;

        impl<'de> Visitor<'de> for FlexibleVisitor {
            type Value = FlexibleId;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                formatter.write_str("an integer id or a numeric string")
            }

            fn visit_i64<E>(self, value: i64) -> Result<Self::Value, E>
            where
                E: de::Error,
            {
                Ok(FlexibleId(value))
            }

            fn visit_u64<E>(self, value: u64) -> Result<Self::Value, E>
            where
                E: de::Error,
            {
                i64::try_from(value)
                    .map(FlexibleId)
                    .map_err(|_| de::Error::custom(format!("id out of range: {}", value)))
            }

            fn visit_str<E>(self, value: &str) -> Result<Self::Value, E>
            where
                E: de::Error,
            {
                value
                    .trim()
                    .parse::<i64>()
                    .map(FlexibleId)
                    .map_err(|_| de::Error::custom(format!("invalid id: {:?}", value)))
            }
        }

        deserializer.deserialize_any(FlexibleVisitor)
    }
}

/// Deserialize a required id (number or numeric string)
pub fn id<'de, D>(deserializer: D) -> Result<i64, D::Error>
where
    D: Deserializer<'de>,
{
    FlexibleId::deserialize(deserializer).map(|id| id.0)
}

/// Deserialize a patch id; pair with `#[serde(default)]`
pub fn patch_id<'de, D>(deserializer: D) -> Result<Option<Option<i64>>, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<FlexibleId>::deserialize(deserializer).map(|opt| Some(opt.map(|id| id.0)))
}

/// Deserialize a patch value; pair with `#[serde(default)]`
pub fn patch<'de, D, T>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Some)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;

    #[derive(Deserialize)]
    struct Probe {
        #[serde(deserialize_with = "id")]
        id: i64,
        #[serde(default, deserialize_with = "patch_id")]
        other: Option<Option<i64>>,
        #[serde(default, deserialize_with = "patch")]
        label: Option<Option<String>>,
    }

    #[test]
    fn test_id_accepts_number_and_string() {
        let a: Probe = serde_json::from_str(r#"{"id": 7}"#).unwrap();
        let b: Probe = serde_json::from_str(r#"{"id": "7"}"#).unwrap();
        assert_eq!(a.id, 7);
        assert_eq!(b.id, 7);
    }

    #[test]
    fn test_id_rejects_garbage() {
        assert!(serde_json::from_str::<Probe>(r#"{"id": "seven"}"#).is_err());
        assert!(serde_json::from_str::<Probe>(r#"{"id": true}"#).is_err());
    }

    #[test]
    fn test_patch_distinguishes_absent_from_null() {
        let absent: Probe = serde_json::from_str(r#"{"id": 1}"#).unwrap();
        assert_eq!(absent.other, None);
        assert_eq!(absent.label, None);

        let nulls: Probe =
            serde_json::from_str(r#"{"id": 1, "other": null, "label": null}"#).unwrap();
        assert_eq!(nulls.other, Some(None));
        assert_eq!(nulls.label, Some(None));

        let set: Probe =
            serde_json::from_str(r#"{"id": 1, "other": "4", "label": "x"}"#).unwrap();
        assert_eq!(set.other, Some(Some(4)));
        assert_eq!(set.label, Some(Some("x".to_string())));
    }
}
