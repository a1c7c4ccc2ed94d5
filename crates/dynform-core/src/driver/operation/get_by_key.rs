use super::*;

use crate::RecordId;

#[derive(Debug, Clone, PartialEq)]
pub struct GetByKey {
    /// Which list to get from
    pub list: String,

    /// Which key to fetch
    pub key: RecordId,
}

impl GetByKey {
    pub fn new(list: impl Into<String>, key: RecordId) -> GetByKey {
        GetByKey {
            list: list.into(),
            key,
        }
    }
}

impl From<GetByKey> for Operation {
    fn from(value: GetByKey) -> Self {
        Self::GetByKey(value)
    }
}
