use super::FieldKind;

use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::{SystemTime, UNIX_EPOCH};

/// Local reconciliation key of a field.
///
/// Ids are seeded from the wall clock (milliseconds) and forced to increase
/// within a process, so they are unique per session but not globally.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct FieldId(pub u64);

impl FieldId {
    pub fn generate() -> FieldId {
        static LAST: AtomicU64 = AtomicU64::new(0);

        let now = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|elapsed| elapsed.as_millis() as u64)
            .unwrap_or(0);

        let mut prev = LAST.load(Ordering::Relaxed);
        loop {
            let next = now.max(prev + 1);
            match LAST.compare_exchange_weak(prev, next, Ordering::Relaxed, Ordering::Relaxed) {
                Ok(_) => return FieldId(next),
                Err(actual) => prev = actual,
            }
        }
    }
}

impl fmt::Display for FieldId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

/// A single schema entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldDef {
    id: FieldId,

    /// Input name while filling, record key on submit. May be empty while the
    /// designer is still typing.
    pub name: String,

    /// Text, choice, or a kind this version does not know.
    pub kind: FieldKind,

    /// Choices offered by selection controls, in order.
    pub options: Vec<String>,
}

impl FieldDef {
    /// A new, unnamed field with a fresh id.
    pub fn new(kind: impl Into<FieldKind>) -> FieldDef {
        FieldDef::with_id(FieldId::generate(), kind)
    }

    pub fn with_id(id: FieldId, kind: impl Into<FieldKind>) -> FieldDef {
        FieldDef {
            id,
            name: String::new(),
            kind: kind.into(),
            options: Vec::new(),
        }
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn options<I, S>(mut self, options: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.options = options.into_iter().map(Into::into).collect();
        self
    }

    /// Gets the id.
    pub fn id(&self) -> FieldId {
        self.id
    }

    /// The options joined back into the comma-delimited form they are edited in.
    pub fn raw_options(&self) -> String {
        self.options.join(",")
    }
}
