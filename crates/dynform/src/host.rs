mod context;
pub use context::{HostContext, Lists};

mod mode;
pub use mode::{DisplayMode, Mode};

use dynform_core::RecordId;

/// What the form tells its host about finished work.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notice {
    TemplateSaved { id: RecordId },
    FormSubmitted { id: RecordId },
    Failed { message: String },
}

/// The environment a form session runs in.
///
/// The host owns the user-facing surface: it asks the designer for a
/// template name, shows notices, and decides what "save" and "close" mean.
/// A session only signals intent through [`Host::on_save`] and
/// [`Host::on_close`].
pub trait Host {
    /// Asks for the name of the template being saved. `None` or an empty
    /// string cancels the save.
    fn prompt_template_name(&mut self) -> Option<String>;

    /// Shows the outcome of a save or submit.
    fn notify(&mut self, notice: Notice) {
        log::info!(target: "dynform", "{notice:?}");
    }

    /// The form finished storing something.
    fn on_save(&mut self);

    /// The user asked to leave the form.
    fn on_close(&mut self);
}
