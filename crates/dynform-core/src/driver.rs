mod response;
pub use response::Response;

pub mod operation;
pub use operation::Operation;

use crate::async_trait;

use std::{borrow::Cow, fmt::Debug};

/// A key-value record store holding named lists of records.
///
/// Templates and submitted records both live in lists of the same store; the
/// host context decides which list is which.
#[async_trait]
pub trait Driver: Debug + Send + Sync + 'static {
    /// Location of the store, for diagnostics.
    fn url(&self) -> Cow<'_, str>;

    /// Execute a store operation
    async fn exec(&self, op: Operation) -> crate::Result<Response>;

    /// Drops every stored record. Used by test harnesses.
    async fn reset_db(&self) -> crate::Result<()>;
}
