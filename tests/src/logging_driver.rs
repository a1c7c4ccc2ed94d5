use dynform::{
    driver::{operation::Operation, Driver, Response},
    Result,
};
use std::{
    borrow::Cow,
    sync::{Arc, Mutex},
};

/// A driver wrapper that logs all operations for testing purposes
#[derive(Debug)]
pub struct LoggingDriver {
    /// The underlying driver that actually executes operations
    inner: Box<dyn Driver>,

    /// Log of all operations executed through this driver
    /// Using Arc<Mutex> for thread-safe access from tests
    ops_log: Arc<Mutex<Vec<DriverOp>>>,
}

impl LoggingDriver {
    pub fn new(driver: Box<dyn Driver>) -> Self {
        Self {
            inner: driver,
            ops_log: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Get a handle to access the operations log
    pub fn ops_log_handle(&self) -> Arc<Mutex<Vec<DriverOp>>> {
        self.ops_log.clone()
    }
}

#[derive(Debug, Clone)]
pub struct DriverOp {
    pub operation: Operation,
    pub response: Result<Response>,
}

#[async_trait::async_trait]
impl Driver for LoggingDriver {
    fn url(&self) -> Cow<'_, str> {
        self.inner.url()
    }

    async fn exec(&self, operation: Operation) -> Result<Response> {
        let response = self.inner.exec(operation.clone()).await;

        self.ops_log
            .lock()
            .expect("Failed to acquire ops log lock")
            .push(DriverOp {
                operation,
                response: response.clone(),
            });

        response
    }

    async fn reset_db(&self) -> Result<()> {
        self.inner.reset_db().await
    }
}
