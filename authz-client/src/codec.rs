//! Identifier wire codec
//!
//! The service does not accept `.` inside identifiers, so `org.1224` travels
//! as `org_1224` and is restored on the way back. The rewrite is applied by
//! serde field adapters, which keeps it invisible to callers: model values
//! always hold the decoded form.
//!
//! An id that already contains `_` would come back with `.` in its place,
//! so validation rejects such ids before they are sent.

use serde::{Deserialize, Deserializer, Serializer};

pub const DECODED_SEPARATOR: &str = ".";
pub const ENCODED_SEPARATOR: &str = "_";

pub fn encode_id(id: &str) -> String {
    id.replace(DECODED_SEPARATOR, ENCODED_SEPARATOR)
}

pub fn decode_id(id: &str) -> String {
    id.replace(ENCODED_SEPARATOR, DECODED_SEPARATOR)
}

pub fn encode_ids(ids: &[String]) -> Vec<String> {
    ids.iter().map(|id| encode_id(id)).collect()
}

pub fn decode_ids(ids: &[String]) -> Vec<String> {
    ids.iter().map(|id| decode_id(id)).collect()
}

/// Whether `decode_id(encode_id(id)) == id` holds
pub fn round_trips(id: &str) -> bool {
    !id.contains(ENCODED_SEPARATOR)
}

/// `#[serde(with = "codec::id")]` for a single identifier
pub mod id {
    use super::*;

    pub fn serialize<S>(id: &str, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&encode_id(id))
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<String, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        Ok(decode_id(&raw))
    }
}

/// `#[serde(with = "codec::ids")]` for identifier lists. `null` reads as empty.
pub mod ids {
    use super::*;

    pub fn serialize<S>(ids: &[String], serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_seq(ids.iter().map(|id| encode_id(id)))
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = Option::<Vec<String>>::deserialize(deserializer)?.unwrap_or_default();
        Ok(decode_ids(&raw))
    }
}
