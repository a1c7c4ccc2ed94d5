use super::*;

use crate::{Record, RecordId};

#[derive(Debug, Clone, PartialEq)]
pub struct Insert {
    /// Which list to create the record in
    pub list: String,

    /// Key to store the record under. When `None` the store assigns the next
    /// free key of the list.
    pub key: Option<RecordId>,

    /// The record to store
    pub record: Record,
}

impl Insert {
    pub fn new(list: impl Into<String>, record: Record) -> Insert {
        Insert {
            list: list.into(),
            key: None,
            record,
        }
    }

    pub fn with_key(mut self, key: RecordId) -> Insert {
        self.key = Some(key);
        self
    }
}

impl From<Insert> for Operation {
    fn from(value: Insert) -> Self {
        Self::Insert(value)
    }
}
