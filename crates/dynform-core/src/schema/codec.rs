//! Stored shape of a schema: a list of `{ id, name, type, options }` records.

use super::{FieldDef, FieldId, FieldKind, Schema};
use crate::{record::Value, Error, Record, Result};

const ID: &str = "id";
const NAME: &str = "name";
const TYPE: &str = "type";
const OPTIONS: &str = "options";

impl Schema {
    /// Encodes the schema as the list stored under a template's `fields`.
    pub fn to_value(&self) -> Result<Value> {
        self.fields
            .iter()
            .map(|field| field.to_record().map(Value::Record))
            .collect::<Result<Vec<_>>>()
            .map(Value::List)
    }

    /// Decodes a stored `fields` list.
    ///
    /// Entries written by other tools are read leniently. A missing `id` gets
    /// a fresh one and a missing `name` is empty. Missing `options` are an
    /// empty list. A `type` that is missing or not a string decodes to an
    /// empty [`FieldKind::Other`] tag, so the field still renders as a
    /// selection over its options.
    pub fn from_value(value: &Value) -> Result<Schema> {
        let Some(entries) = value.as_list() else {
            return Err(Error::invalid_result(format!(
                "expected a list of fields, got {}",
                value.kind_name()
            )));
        };

        let fields = entries
            .iter()
            .enumerate()
            .map(|(index, entry)| {
                let record = entry.as_record().ok_or_else(|| {
                    Error::invalid_result(format!(
                        "field #{} is a {}, not a record",
                        index + 1,
                        entry.kind_name()
                    ))
                })?;
                FieldDef::from_record(record)
                    .map_err(|err| err.context(crate::err!("field #{}", index + 1)))
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(Schema::from_fields(fields))
    }
}

impl FieldDef {
    /// Encodes the field. Ids above `i64::MAX` are not representable as a
    /// stored integer and are rejected.
    pub fn to_record(&self) -> Result<Record> {
        let id = i64::try_from(self.id().0)
            .map_err(|_| crate::err!("field id {} is out of range", self.id()))?;

        let mut record = Record::new();
        record.insert(ID, Value::I64(id));
        record.insert(NAME, &self.name);
        record.insert(TYPE, self.kind.as_str());
        record.insert(OPTIONS, self.options.clone());
        Ok(record)
    }

    pub fn from_record(record: &Record) -> Result<FieldDef> {
        let kind = match record.get(TYPE) {
            Some(Value::String(tag)) => FieldKind::from_tag(tag),
            _ => FieldKind::Other(String::new()),
        };

        let id = match record.get(ID) {
            None | Some(Value::Null) => FieldId::generate(),
            Some(Value::I64(id)) => u64::try_from(*id).map(FieldId).map_err(|_| {
                Error::invalid_result(format!("`{ID}` must be a non-negative integer, got {id}"))
            })?,
            Some(Value::String(id)) => id
                .parse()
                .map(FieldId)
                .map_err(|_| Error::invalid_result(format!("`{ID}` {id:?} is not a number")))?,
            Some(other) => {
                return Err(Error::invalid_result(format!(
                    "`{ID}` must be an integer, got {}",
                    other.kind_name()
                )))
            }
        };

        let name = match record.get(NAME) {
            None | Some(Value::Null) => String::new(),
            Some(Value::String(name)) => name.clone(),
            Some(other) => {
                return Err(Error::invalid_result(format!(
                    "`{NAME}` must be a string, got {}",
                    other.kind_name()
                )))
            }
        };

        let options = match record.get(OPTIONS) {
            None | Some(Value::Null) => Vec::new(),
            Some(Value::List(options)) => options
                .iter()
                .map(|option| match option {
                    Value::String(option) => Ok(option.clone()),
                    other => Err(Error::invalid_result(format!(
                        "`{OPTIONS}` entries must be strings, got {}",
                        other.kind_name()
                    ))),
                })
                .collect::<Result<Vec<_>>>()?,
            Some(other) => {
                return Err(Error::invalid_result(format!(
                    "`{OPTIONS}` must be a list, got {}",
                    other.kind_name()
                )))
            }
        };

        Ok(FieldDef::with_id(id, kind).name(name).options(options))
    }
}
