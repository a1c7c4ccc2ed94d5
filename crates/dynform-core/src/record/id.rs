use super::Value;

use serde::{Deserialize, Serialize};
use std::fmt;

/// Key of a record within a list, assigned by the record store.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RecordId(pub u64);

impl RecordId {
    /// Reads a record id out of a stored value.
    ///
    /// Stores hand numeric columns back either as integers or as their
    /// decimal text, so both are accepted.
    pub fn from_value(value: &Value) -> Option<RecordId> {
        match value {
            Value::I64(v) => u64::try_from(*v).ok().map(RecordId),
            Value::String(v) => v.trim().parse().ok().map(RecordId),
            _ => None,
        }
    }
}

impl From<u64> for RecordId {
    fn from(value: u64) -> Self {
        RecordId(value)
    }
}

impl TryFrom<RecordId> for Value {
    type Error = crate::Error;

    fn try_from(value: RecordId) -> crate::Result<Self> {
        i64::try_from(value.0)
            .map(Value::I64)
            .map_err(|_| crate::err!("record id {value} does not fit a stored integer"))
    }
}

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}
