//! Item status and its two string encodings.
//!
//! # Design
//! `ItemStatus` crosses two boundaries: JSON on the wire and a TEXT column in
//! storage. Each boundary gets its own pair of plain functions
//! (`from_wire` / `as_str` and `from_sql_bytes` / `to_sql`) so the mapping is
//! visible at the call site. The serde impls below only delegate to them.

use std::fmt;
use std::str::FromStr;

use serde::de::{self, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::StatusError;

/// Lifecycle state of a todo item. `Deleted` is a soft-delete marker.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ItemStatus {
    #[default]
    Doing,
    Done,
    Deleted,
}

impl ItemStatus {
    pub const ALL: [ItemStatus; 3] = [ItemStatus::Doing, ItemStatus::Done, ItemStatus::Deleted];

    /// Canonical string form, shared by the JSON and SQL encodings.
    pub fn as_str(&self) -> &'static str {
        match self {
            ItemStatus::Doing => "Doing",
            ItemStatus::Done => "Done",
            ItemStatus::Deleted => "Deleted",
        }
    }

    /// Decode a wire value. Quote characters are stripped before matching, so
    /// both `Done` and `"Done"` are accepted.
    pub fn from_wire(raw: &str) -> Result<Self, StatusError> {
        raw.replace('"', "").parse()
    }

    /// Decode the raw bytes a SQLite driver hands back for a text column.
    pub fn from_sql_bytes(bytes: &[u8]) -> Result<Self, StatusError> {
        let s = std::str::from_utf8(bytes)
            .map_err(|_| StatusError::Invalid(String::from_utf8_lossy(bytes).into_owned()))?;
        s.parse()
    }

    /// Encode for a SQL parameter. An absent status binds as NULL.
    pub fn to_sql(status: Option<ItemStatus>) -> Option<&'static str> {
        status.map(|s| s.as_str())
    }
}

impl fmt::Display for ItemStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ItemStatus {
    type Err = StatusError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ItemStatus::ALL
            .into_iter()
            .find(|status| status.as_str() == s)
            .ok_or_else(|| StatusError::Invalid(s.to_string()))
    }
}

impl Serialize for ItemStatus {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for ItemStatus {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct StatusVisitor;

        impl Visitor<'_> for StatusVisitor {
            type Value = ItemStatus;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("one of \"Doing\", \"Done\" or \"Deleted\"")
            }

            fn visit_str<E: de::Error>(self, v: &str) -> Result<ItemStatus, E> {
                ItemStatus::from_wire(v).map_err(E::custom)
            }
        }

        deserializer.deserialize_str(StatusVisitor)
    }
}
