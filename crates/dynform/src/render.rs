mod designer;
pub use designer::Designer;

mod fill;
pub use fill::FillForm;

mod view;
pub use view::{Action, Binding, Control, SelectOption, View};

use crate::{FormData, Mode};

use dynform_core::{Result, Schema};

/// Where a form is in its lifecycle.
///
/// Design-mode forms start and stay [`FormState::Idle`]. Fill-mode forms
/// start [`FormState::Loading`] and move to `Ready` or `Error` once template
/// resolution settles. `Error` goes back to `Loading` on retry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormState {
    Loading,
    Ready(FillForm),
    Idle(Designer),
    Error(String),
}

impl FormState {
    pub fn is_loading(&self) -> bool {
        matches!(self, FormState::Loading)
    }

    pub fn is_ready(&self) -> bool {
        matches!(self, FormState::Ready(_))
    }

    pub fn is_error(&self) -> bool {
        matches!(self, FormState::Error(_))
    }
}

/// Turns a schema into controls and tracks the edits made through them.
#[derive(Debug, Clone)]
pub struct FormRenderer {
    state: FormState,
}

impl FormRenderer {
    /// A renderer in the initial state for `mode`.
    pub fn for_mode(mode: Mode) -> FormRenderer {
        match mode {
            Mode::Design => FormRenderer::designer(Schema::new()),
            Mode::Fill => FormRenderer {
                state: FormState::Loading,
            },
        }
    }

    /// A design-mode renderer editing `schema`.
    pub fn designer(schema: Schema) -> FormRenderer {
        FormRenderer {
            state: FormState::Idle(Designer::new(schema)),
        }
    }

    pub fn state(&self) -> &FormState {
        &self.state
    }

    /// The schema currently on screen, if any.
    pub fn schema(&self) -> Option<&Schema> {
        match &self.state {
            FormState::Idle(designer) => Some(designer.schema()),
            FormState::Ready(form) => Some(form.schema()),
            FormState::Loading | FormState::Error(_) => None,
        }
    }

    /// The pairs a submit would send right now. `None` unless a resolved
    /// form is on screen.
    pub fn form_data(&self) -> Option<FormData> {
        match &self.state {
            FormState::Ready(form) => Some(form.form_data()),
            _ => None,
        }
    }

    pub fn render(&self) -> View {
        match &self.state {
            FormState::Idle(designer) => designer.view(),
            FormState::Ready(form) => form.view(),
            FormState::Loading => View {
                controls: vec![Control::Text("Loading template...".to_string())],
            },
            FormState::Error(message) => View {
                controls: vec![
                    Control::Text(message.clone()),
                    Control::button("Retry", Action::Retry),
                ],
            },
        }
    }

    /// Applies the outcome of template resolution.
    ///
    /// Only a renderer that is still loading takes the result; anything
    /// arriving later is dropped and `false` is returned.
    pub fn resolved(&mut self, result: Result<Schema>) -> bool {
        if !self.state.is_loading() {
            log::debug!(target: "dynform", "dropping late template resolution");
            return false;
        }

        self.state = match result {
            Ok(schema) => {
                log::debug!(target: "dynform", "template resolved with {} fields", schema.len());
                FormState::Ready(FillForm::new(schema))
            }
            Err(err) => {
                log::error!(target: "dynform", "{err}");
                FormState::Error(err.to_string())
            }
        };
        true
    }

    /// Moves a failed form back to loading so resolution can run again.
    pub fn retry(&mut self) -> bool {
        if !self.state.is_error() {
            return false;
        }
        self.state = FormState::Loading;
        true
    }

    /// Feeds a user edit into the control bound to `binding`. Edits that do
    /// not match a control the current view renders are ignored.
    pub fn change(&mut self, binding: Binding, value: String) -> bool {
        match (&mut self.state, binding) {
            (FormState::Idle(designer), Binding::Name(id)) => designer.set_name(id, value),
            (FormState::Idle(designer), Binding::Options(id)) => {
                designer.set_raw_options(id, value)
            }
            (FormState::Ready(form), Binding::Value(id)) => form.set_value(id, value),
            _ => false,
        }
    }

    /// Applies the schema-editing actions. Everything else is left to the
    /// caller and returns `false`.
    pub fn apply(&mut self, action: &Action) -> bool {
        let FormState::Idle(designer) = &mut self.state else {
            return false;
        };

        match action {
            Action::AddField(kind) => {
                designer.add_field(kind.clone());
                true
            }
            Action::RemoveField(id) => designer.remove_field(*id),
            Action::MoveField { id, to } => designer.move_field(*id, *to),
            _ => false,
        }
    }
}
