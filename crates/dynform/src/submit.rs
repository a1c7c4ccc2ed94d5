use dynform_core::{Record, Value};

/// The name → value pairs a filled form submits, in form order.
///
/// Names may repeat; when mapped onto a record the last value for a name
/// wins.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct FormData {
    entries: Vec<(String, Value)>,
}

impl FormData {
    pub fn new() -> FormData {
        FormData::default()
    }

    pub fn append(&mut self, name: impl Into<String>, value: impl Into<Value>) {
        self.entries.push((name.into(), value.into()));
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.entries
            .iter()
            .map(|(name, value)| (name.as_str(), value))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Maps the pairs onto a flat record.
    pub fn to_record(&self) -> Record {
        self.entries.iter().cloned().collect()
    }
}

impl<K, V> FromIterator<(K, V)> for FormData
where
    K: Into<String>,
    V: Into<Value>,
{
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        let mut form = FormData::new();
        for (name, value) in iter {
            form.append(name, value);
        }
        form
    }
}
