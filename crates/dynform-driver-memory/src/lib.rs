use dynform_core::{
    async_trait,
    driver::{
        operation::{GetByKey, Insert, Operation},
        Driver, Response,
    },
    err, Error, Record, RecordId, Result,
};
use indexmap::IndexMap;

use std::{
    borrow::Cow,
    collections::HashMap,
    sync::{Mutex, MutexGuard, PoisonError},
};

/// A record store that lives in process memory.
///
/// Keys are assigned per list, starting at 1 and continuing after the
/// highest key in use.
#[derive(Debug, Default)]
pub struct Memory {
    store: Mutex<Store>,
}

#[derive(Debug, Default)]
struct Store {
    lists: HashMap<String, IndexMap<RecordId, Record>>,
}

impl Memory {
    pub fn new() -> Memory {
        Memory::default()
    }

    fn store(&self) -> MutexGuard<'_, Store> {
        self.store.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl Store {
    fn insert(&mut self, op: Insert) -> Result<RecordId> {
        let rows = self.lists.entry(op.list.clone()).or_default();

        let key = match op.key {
            Some(key) if rows.contains_key(&key) => {
                return Err(err!("record {key} already exists"));
            }
            Some(key) => key,
            None => {
                let last = rows.keys().map(|key| key.0).max().unwrap_or(0);
                let next = last
                    .checked_add(1)
                    .ok_or_else(|| err!("no keys left in list `{}`", op.list))?;
                RecordId(next)
            }
        };

        rows.insert(key, op.record);
        Ok(key)
    }

    fn get_by_key(&self, op: &GetByKey) -> Result<Record> {
        self.lists
            .get(&op.list)
            .and_then(|rows| rows.get(&op.key))
            .cloned()
            .ok_or_else(|| {
                Error::record_not_found(format!("list={} key={}", op.list, op.key))
            })
    }
}

#[async_trait]
impl Driver for Memory {
    fn url(&self) -> Cow<'_, str> {
        Cow::Borrowed("memory:")
    }

    async fn exec(&self, op: Operation) -> Result<Response> {
        log::trace!(target: "dynform::memory", "exec list={}", op.list());

        let mut store = self.store();
        match op {
            Operation::Insert(op) => store.insert(op).map(Response::created),
            Operation::GetByKey(op) => store.get_by_key(&op).map(Response::record),
        }
    }

    async fn reset_db(&self) -> Result<()> {
        self.store().lists.clear();
        Ok(())
    }
}
