use super::view::{Action, Binding, Control, SelectOption, View};
use crate::FormData;

use dynform_core::schema::{FieldDef, FieldId, Schema};

use std::collections::HashMap;

/// Fill-mode state: a resolved, read-only schema and the values entered so
/// far, keyed by field id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FillForm {
    schema: Schema,
    values: HashMap<FieldId, String>,
}

impl FillForm {
    /// Text inputs start empty; selection controls start on their first
    /// option, as a browser select does.
    pub fn new(schema: Schema) -> FillForm {
        let values = schema
            .iter()
            .filter_map(|field| {
                let initial = if field.kind.is_text() {
                    String::new()
                } else {
                    field.options.first()?.clone()
                };
                Some((field.id(), initial))
            })
            .collect();

        FillForm { schema, values }
    }

    pub fn schema(&self) -> &Schema {
        &self.schema
    }

    pub fn value(&self, id: FieldId) -> Option<&str> {
        self.values.get(&id).map(String::as_str)
    }

    /// Enters a value for a field. Selection controls only take one of their
    /// options.
    pub fn set_value(&mut self, id: FieldId, value: String) -> bool {
        let Some(field) = self.schema.field(id) else {
            return false;
        };

        if !field.kind.is_text() && !field.options.contains(&value) {
            return false;
        }

        self.values.insert(id, value);
        true
    }

    /// The pairs a submit sends, in schema order. Unnamed fields and
    /// selection controls without options contribute nothing.
    pub fn form_data(&self) -> FormData {
        let mut form = FormData::new();
        for field in &self.schema {
            if field.name.is_empty() {
                continue;
            }
            if let Some(value) = self.values.get(&field.id()) {
                form.append(&field.name, value.as_str());
            }
        }
        form
    }

    pub fn view(&self) -> View {
        let mut controls: Vec<_> = self
            .schema
            .iter()
            .map(|field| Control::Row {
                key: field.id(),
                controls: vec![self.input(field)],
            })
            .collect();

        controls.push(Control::button("Submit", Action::Submit));
        View { controls }
    }

    fn input(&self, field: &FieldDef) -> Control {
        let id = field.id();
        if field.kind.is_text() {
            Control::TextInput {
                binding: Binding::Value(id),
                name: Some(field.name.clone()),
                placeholder: field.name.clone(),
                value: self.value(id).unwrap_or_default().to_string(),
            }
        } else {
            Control::Select {
                binding: Binding::Value(id),
                name: field.name.clone(),
                options: field
                    .options
                    .iter()
                    .map(|option| SelectOption::plain(option))
                    .collect(),
                selected: self.value(id).map(str::to_string),
            }
        }
    }
}
