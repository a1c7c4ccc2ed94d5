use super::view::{Action, Binding, Control, View};

use dynform_core::schema::{FieldId, FieldKind, FieldUpdate, Schema};

use std::collections::HashMap;

/// Design-mode state: the schema being built plus the options text exactly
/// as the designer typed it.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Designer {
    schema: Schema,
    raw_options: HashMap<FieldId, String>,
}

impl Designer {
    pub fn new(schema: Schema) -> Designer {
        Designer {
            schema,
            raw_options: HashMap::new(),
        }
    }

    pub fn schema(&self) -> &Schema {
        &self.schema
    }

    pub fn add_field(&mut self, kind: FieldKind) -> FieldId {
        self.schema.add_field(kind).id()
    }

    pub fn set_name(&mut self, id: FieldId, name: String) -> bool {
        self.schema.update_field(id, FieldUpdate::Name(name))
    }

    /// Sets the options of a field that has them; other kinds keep none.
    pub fn set_raw_options(&mut self, id: FieldId, raw: String) -> bool {
        let takes_options = self
            .schema
            .field(id)
            .is_some_and(|field| field.kind.has_options());
        if !takes_options || !self.schema.update_field(id, FieldUpdate::raw_options(&raw)) {
            return false;
        }
        self.raw_options.insert(id, raw);
        true
    }

    pub fn remove_field(&mut self, id: FieldId) -> bool {
        self.raw_options.remove(&id);
        self.schema.remove_field(id).is_some()
    }

    pub fn move_field(&mut self, id: FieldId, to: usize) -> bool {
        self.schema.move_field(id, to)
    }

    pub fn view(&self) -> View {
        let mut controls = vec![
            Control::button("Add Text Field", Action::AddField(FieldKind::Text)),
            Control::button("Add Choice Field", Action::AddField(FieldKind::Choice)),
        ];

        let last = self.schema.len().saturating_sub(1);
        for (index, field) in self.schema.iter().enumerate() {
            let id = field.id();
            let mut row = vec![Control::TextInput {
                binding: Binding::Name(id),
                name: None,
                placeholder: "Field Name".to_string(),
                value: field.name.clone(),
            }];

            if field.kind.has_options() {
                let value = self
                    .raw_options
                    .get(&id)
                    .cloned()
                    .unwrap_or_else(|| field.raw_options());
                row.push(Control::TextArea {
                    binding: Binding::Options(id),
                    placeholder: "Options (comma separated)".to_string(),
                    value,
                });
            }

            if index > 0 {
                row.push(Control::button(
                    "Move Up",
                    Action::MoveField { id, to: index - 1 },
                ));
            }
            if index < last {
                row.push(Control::button(
                    "Move Down",
                    Action::MoveField { id, to: index + 1 },
                ));
            }
            row.push(Control::button("Remove", Action::RemoveField(id)));

            controls.push(Control::Row {
                key: id,
                controls: row,
            });
        }

        controls.push(Control::button("Save Template", Action::SaveTemplate));
        View { controls }
    }
}
