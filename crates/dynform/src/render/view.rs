use dynform_core::schema::{FieldId, FieldKind};

/// What a control edits when the user changes it.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Binding {
    /// The name of a field being designed
    Name(FieldId),

    /// The comma-delimited options of a field being designed
    Options(FieldId),

    /// The value entered for a field while filling
    Value(FieldId),
}

/// Something a button asks the form to do.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    AddField(FieldKind),
    RemoveField(FieldId),
    MoveField { id: FieldId, to: usize },
    SaveTemplate,
    Submit,
    Retry,
    /// Issued by the host rather than rendered.
    Close,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectOption {
    pub value: String,
    pub label: String,
}

impl SelectOption {
    /// An option whose value and label are both `text`.
    pub fn plain(text: &str) -> SelectOption {
        SelectOption {
            value: text.to_string(),
            label: text.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Control {
    /// Static text: the loading placeholder or an error message
    Text(String),

    /// The controls of one field, keyed by the field's id
    Row { key: FieldId, controls: Vec<Control> },

    TextInput {
        binding: Binding,
        /// Name the value is submitted under; `None` for design controls
        name: Option<String>,
        placeholder: String,
        value: String,
    },

    TextArea {
        binding: Binding,
        placeholder: String,
        value: String,
    },

    Select {
        binding: Binding,
        name: String,
        options: Vec<SelectOption>,
        selected: Option<String>,
    },

    Button { label: String, action: Action },
}

impl Control {
    pub(crate) fn button(label: &str, action: Action) -> Control {
        Control::Button {
            label: label.to_string(),
            action,
        }
    }
}

/// A rendered form: controls in display order.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct View {
    pub controls: Vec<Control>,
}

impl View {
    /// Every control, with rows expanded in place after the row itself.
    pub fn walk(&self) -> impl Iterator<Item = &Control> {
        let mut stack: Vec<&Control> = self.controls.iter().rev().collect();
        std::iter::from_fn(move || {
            let control = stack.pop()?;
            if let Control::Row { controls, .. } = control {
                stack.extend(controls.iter().rev());
            }
            Some(control)
        })
    }

    /// Keys of the rendered rows, in order.
    pub fn row_keys(&self) -> Vec<FieldId> {
        self.walk()
            .filter_map(|control| match control {
                Control::Row { key, .. } => Some(*key),
                _ => None,
            })
            .collect()
    }

    /// Actions offered by the buttons in the view.
    pub fn actions(&self) -> impl Iterator<Item = &Action> {
        self.walk().filter_map(|control| match control {
            Control::Button { action, .. } => Some(action),
            _ => None,
        })
    }

    pub fn offers(&self, action: &Action) -> bool {
        self.actions().any(|offered| offered == action)
    }

    /// Static text shown by the view.
    pub fn texts(&self) -> impl Iterator<Item = &str> {
        self.walk().filter_map(|control| match control {
            Control::Text(text) => Some(text.as_str()),
            _ => None,
        })
    }
}
