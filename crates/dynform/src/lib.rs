pub mod forms;
pub use forms::{Forms, SaveOutcome};

pub mod host;
pub use host::{DisplayMode, Host, HostContext, Lists, Mode, Notice};

pub mod render;
pub use render::{FormRenderer, FormState};

pub mod resolve;
pub use resolve::{TemplateResolver, TwoHopResolver};

mod session;
pub use session::{FormSession, Outcome};

pub mod submit;
pub use submit::FormData;

pub use dynform_core::{
    async_trait,
    driver::{self, Driver},
    err, record,
    schema::{self, FieldDef, FieldId, FieldKind, FieldUpdate, Schema},
    Error, PersistenceTarget, Record, RecordId, ResolutionStage, Result, Template, Value,
};
