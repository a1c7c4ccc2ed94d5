use crate::{Error, Record, RecordId, Result};

#[derive(Debug, Clone, PartialEq)]
pub enum Response {
    /// Key of the record an insert created
    Created(RecordId),

    /// The record a lookup found
    Record(Record),
}

impl Response {
    pub fn created(key: RecordId) -> Self {
        Self::Created(key)
    }

    pub fn record(record: Record) -> Self {
        Self::Record(record)
    }

    pub fn into_created(self) -> Result<RecordId> {
        match self {
            Self::Created(key) => Ok(key),
            Self::Record(_) => Err(Error::invalid_result(
                "expected the key of a created record, got a record",
            )),
        }
    }

    pub fn into_record(self) -> Result<Record> {
        match self {
            Self::Record(record) => Ok(record),
            Self::Created(key) => Err(Error::invalid_result(format!(
                "expected a record, got created key {key}"
            ))),
        }
    }
}
