use crate::{record::Value, Error, Record, Result, Schema};

/// A named, persisted schema.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Template {
    pub name: String,
    pub fields: Schema,
}

impl Template {
    /// Record key holding the template name.
    pub const TITLE: &'static str = "Title";

    /// Record key holding the encoded schema.
    pub const FIELDS: &'static str = "fields";

    pub fn new(name: impl Into<String>, fields: Schema) -> Template {
        Template {
            name: name.into(),
            fields,
        }
    }

    /// The record created when the template is saved:
    /// `{ Title: name, fields: [...] }`.
    pub fn to_record(&self) -> Result<Record> {
        let mut record = Record::new();
        record.insert(Self::TITLE, &self.name);
        record.insert(Self::FIELDS, self.fields.to_value()?);
        Ok(record)
    }

    /// Reads a stored template. Only `fields` is required; a missing title
    /// reads as an empty name.
    pub fn from_record(record: &Record) -> Result<Template> {
        let fields = Self::fields_of(record)?;

        let name = match record.get(Self::TITLE) {
            None | Some(Value::Null) => String::new(),
            Some(Value::String(name)) => name.clone(),
            Some(other) => {
                return Err(Error::invalid_result(format!(
                    "`{}` must be a string, got {}",
                    Self::TITLE,
                    other.kind_name()
                )))
            }
        };

        Ok(Template { name, fields })
    }

    /// Decodes just the schema stored in a template record.
    pub fn fields_of(record: &Record) -> Result<Schema> {
        let Some(value) = record.get(Self::FIELDS) else {
            return Err(Error::invalid_result(format!(
                "template has no `{}`",
                Self::FIELDS
            )));
        };

        Schema::from_value(value)
    }
}
