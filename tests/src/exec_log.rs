use crate::logging_driver::DriverOp;
use dynform::{
    driver::{
        operation::{Insert, Operation},
        Response,
    },
    Result,
};
use std::sync::{Arc, Mutex};

/// A wrapper around the operations log that provides a clean API for tests
pub struct ExecLog {
    ops: Arc<Mutex<Vec<DriverOp>>>,
}

impl ExecLog {
    pub(crate) fn new(ops: Arc<Mutex<Vec<DriverOp>>>) -> Self {
        Self { ops }
    }

    /// Get the number of logged operations
    pub fn len(&self) -> usize {
        self.ops.lock().unwrap().len()
    }

    /// Check if the log is empty
    pub fn is_empty(&self) -> bool {
        self.ops.lock().unwrap().is_empty()
    }

    /// Check if any operation matches the given predicate
    pub fn any<F>(&self, predicate: F) -> bool
    where
        F: Fn(&Operation) -> bool,
    {
        self.ops
            .lock()
            .unwrap()
            .iter()
            .any(|op| predicate(&op.operation))
    }

    /// Count operations matching the given predicate
    pub fn count<F>(&self, predicate: F) -> usize
    where
        F: Fn(&Operation) -> bool,
    {
        self.ops
            .lock()
            .unwrap()
            .iter()
            .filter(|op| predicate(&op.operation))
            .count()
    }

    /// Check if there's an Insert operation
    pub fn has_insert(&self) -> bool {
        self.any(|op| matches!(op, Operation::Insert(_)))
    }

    /// Check if there's a GetByKey operation
    pub fn has_get_by_key(&self) -> bool {
        self.any(|op| matches!(op, Operation::GetByKey(_)))
    }

    /// Every logged insert, in order
    pub fn inserts(&self) -> Vec<Insert> {
        self.ops
            .lock()
            .unwrap()
            .iter()
            .filter_map(|op| op.operation.as_insert().cloned())
            .collect()
    }

    /// Clear the log
    pub fn clear(&mut self) {
        self.ops.lock().unwrap().clear();
    }

    /// Remove and return the first operation from the log
    /// Returns None if the log is empty
    pub fn pop(&mut self) -> Option<(Operation, Result<Response>)> {
        let mut ops = self.ops.lock().unwrap();
        if ops.is_empty() {
            None
        } else {
            let driver_op = ops.remove(0);
            Some((driver_op.operation, driver_op.response))
        }
    }
}
