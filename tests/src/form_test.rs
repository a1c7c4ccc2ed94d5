use crate::{
    logging_driver::{DriverOp, LoggingDriver},
    ExecLog, Setup,
};
use dynform::Forms;
use std::{
    future::Future,
    pin::Pin,
    sync::{Arc, Mutex},
};

/// Per-test state: the store under test and the log of every operation sent
/// to it.
///
/// Tests are plain `#[test]` functions that drive their async body on a
/// current-thread runtime created by [`FormTest::run`].
pub struct FormTest {
    setup: Box<dyn Setup>,
    ops_log: Arc<Mutex<Vec<DriverOp>>>,
}

impl FormTest {
    pub fn new(setup: Box<dyn Setup>) -> Self {
        Self {
            setup,
            ops_log: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Run a test function against `setup` on a fresh runtime.
    pub fn run<F>(setup: Box<dyn Setup>, test_fn: F)
    where
        F: for<'a> FnOnce(&'a mut FormTest) -> Pin<Box<dyn Future<Output = ()> + 'a>>,
    {
        let _ = env_logger::builder().is_test(true).try_init();

        let runtime = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
            .expect("Failed to create Tokio runtime");

        let mut test = FormTest::new(setup);
        runtime.block_on(test_fn(&mut test));
    }

    /// Opens an empty store, always with logging enabled
    pub async fn setup_forms(&mut self) -> Forms {
        let driver = self.setup.connect().await.unwrap();
        driver.reset_db().await.unwrap();

        let logging_driver = LoggingDriver::new(driver);
        self.ops_log = logging_driver.ops_log_handle();
        Forms::new(logging_driver)
    }

    /// Get the operations log for assertions
    pub fn log(&mut self) -> ExecLog {
        ExecLog::new(self.ops_log.clone())
    }
}
