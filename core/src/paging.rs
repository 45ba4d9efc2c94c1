use std::fmt;

use serde::de::{self, Deserializer, Visitor};
use serde::{Deserialize, Serialize};

const DEFAULT_LIMIT: i64 = 10;
const MAX_LIMIT_EXCLUSIVE: i64 = 100;

/// Page/limit request parameters plus the total row count returned with a
/// list response.
///
/// Binds both from a query string (`?page=2&limit=20`) and from the JSON
/// paging block. An empty query value (`?page=`) binds as 0.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Paging {
    #[serde(default, deserialize_with = "int_or_empty")]
    pub page: i64,
    #[serde(default, deserialize_with = "int_or_empty")]
    pub limit: i64,
    /// Filled in by the caller after running the count query.
    #[serde(default)]
    pub total: i64,
}

impl Paging {
    pub fn new(page: i64, limit: i64) -> Self {
        Self {
            page,
            limit,
            total: 0,
        }
    }

    /// Clamp caller input: pages start at 1 and the limit falls back to 10
    /// when it is non-positive or 100 and above.
    pub fn normalize(&mut self) {
        if self.page <= 0 {
            self.page = 1;
        }
        if self.limit <= 0 || self.limit >= MAX_LIMIT_EXCLUSIVE {
            self.limit = DEFAULT_LIMIT;
        }
    }

    /// Row offset for the current page. Assumes `normalize` has run.
    pub fn offset(&self) -> i64 {
        (self.page - 1).saturating_mul(self.limit)
    }
}

/// Accepts a JSON integer, or a string holding an integer or nothing.
fn int_or_empty<'de, D: Deserializer<'de>>(deserializer: D) -> Result<i64, D::Error> {
    struct IntVisitor;

    impl Visitor<'_> for IntVisitor {
        type Value = i64;

        fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            f.write_str("an integer")
        }

        fn visit_i64<E: de::Error>(self, v: i64) -> Result<i64, E> {
            Ok(v)
        }

        fn visit_u64<E: de::Error>(self, v: u64) -> Result<i64, E> {
            i64::try_from(v).map_err(E::custom)
        }

        fn visit_str<E: de::Error>(self, v: &str) -> Result<i64, E> {
            let v = v.trim();
            if v.is_empty() {
                return Ok(0);
            }
            v.parse().map_err(E::custom)
        }
    }

    deserializer.deserialize_any(IntVisitor)
}
