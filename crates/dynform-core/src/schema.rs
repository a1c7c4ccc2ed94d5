mod codec;

mod field;
pub use field::{FieldDef, FieldId};

mod kind;
pub use kind::FieldKind;

mod options;
pub use options::split_options;

use crate::{Error, Result};

use std::collections::HashSet;

/// An ordered list of field definitions.
///
/// Order is insertion order (adjusted only by [`Schema::move_field`]) and is
/// the order fields render in. Field ids are unique within a schema.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Schema {
    fields: Vec<FieldDef>,
}

/// A change to one property of a field while designing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldUpdate {
    Name(String),
    Options(Vec<String>),
}

impl FieldUpdate {
    /// An options update from the comma-delimited text the designer typed.
    pub fn raw_options(raw: &str) -> FieldUpdate {
        FieldUpdate::Options(split_options(raw))
    }
}

impl Schema {
    pub fn new() -> Schema {
        Schema::default()
    }

    /// Builds a schema from existing definitions, e.g. decoded from a
    /// template. Fields sharing an id after the first get a fresh one.
    pub fn from_fields(fields: impl IntoIterator<Item = FieldDef>) -> Schema {
        let mut schema = Schema::new();
        for field in fields {
            let field = if schema.field(field.id()).is_some() {
                let id = schema.fresh_id();
                log::debug!(target: "dynform", "re-keying duplicate field id {}", field.id());
                FieldDef::with_id(id, field.kind)
                    .name(field.name)
                    .options(field.options)
            } else {
                field
            };
            schema.fields.push(field);
        }
        schema
    }

    pub fn fields(&self) -> &[FieldDef] {
        &self.fields
    }

    pub fn iter(&self) -> impl Iterator<Item = &FieldDef> {
        self.fields.iter()
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Get a field by id
    pub fn field(&self, id: FieldId) -> Option<&FieldDef> {
        self.fields.iter().find(|field| field.id() == id)
    }

    /// Current position of a field.
    pub fn position(&self, id: FieldId) -> Option<usize> {
        self.fields.iter().position(|field| field.id() == id)
    }

    /// Appends an unnamed field of the given kind with a fresh id. Unknown
    /// kinds are accepted.
    pub fn add_field(&mut self, kind: impl Into<FieldKind>) -> &FieldDef {
        let field = FieldDef::with_id(self.fresh_id(), kind);
        self.fields.push(field);
        &self.fields[self.fields.len() - 1]
    }

    /// Applies `update` to the field with `id`. Every other field is left
    /// untouched; an unknown id changes nothing and returns `false`.
    pub fn update_field(&mut self, id: FieldId, update: FieldUpdate) -> bool {
        let Some(field) = self.fields.iter_mut().find(|field| field.id() == id) else {
            return false;
        };

        match update {
            FieldUpdate::Name(name) => field.name = name,
            FieldUpdate::Options(options) => field.options = options,
        }
        true
    }

    /// Removes the field with `id`, keeping the order of the rest.
    pub fn remove_field(&mut self, id: FieldId) -> Option<FieldDef> {
        let index = self.position(id)?;
        Some(self.fields.remove(index))
    }

    /// Moves the field with `id` to `index`, shifting the fields in between.
    /// Indices past the end move the field last.
    pub fn move_field(&mut self, id: FieldId, index: usize) -> bool {
        let Some(from) = self.position(id) else {
            return false;
        };

        let field = self.fields.remove(from);
        let to = index.min(self.fields.len());
        self.fields.insert(to, field);
        true
    }

    /// Checks that every field can be filled in and submitted unambiguously:
    /// names are non-empty and unique.
    ///
    /// Nothing in the save or submit path calls this; it is a lint for hosts
    /// that want to warn the designer.
    pub fn validate(&self) -> Result<()> {
        let mut seen = HashSet::new();

        for (index, field) in self.fields.iter().enumerate() {
            if field.name.is_empty() {
                return Err(Error::validation_empty_name(index + 1));
            }

            if !seen.insert(field.name.as_str()) {
                return Err(Error::validation_duplicate_name(&field.name));
            }
        }

        Ok(())
    }

    fn fresh_id(&self) -> FieldId {
        loop {
            let id = FieldId::generate();
            if self.field(id).is_none() {
                return id;
            }
        }
    }
}

impl<'a> IntoIterator for &'a Schema {
    type Item = &'a FieldDef;
    type IntoIter = std::slice::Iter<'a, FieldDef>;

    fn into_iter(self) -> Self::IntoIter {
        self.fields.iter()
    }
}
