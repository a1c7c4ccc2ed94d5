#[macro_use]
mod macros;

pub mod driver;
pub use driver::Driver;

mod error;
pub use error::{Error, IntoError, PersistenceTarget, ResolutionStage};

pub mod record;
pub use record::{Record, RecordId, Value};

pub mod schema;
pub use schema::Schema;

pub mod template;
pub use template::Template;

/// A Result type alias that uses dynform's [`Error`] type.
pub type Result<T> = core::result::Result<T, Error>;

pub use async_trait::async_trait;
