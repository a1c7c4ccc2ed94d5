use super::{DisplayMode, Mode};

use dynform_core::RecordId;
use serde::{Deserialize, Serialize};

/// Names of the lists a form reads and writes.
///
/// Host items, submitted records and templates are addressed by name. By
/// default all of them live in the same `Business` list, and a host item
/// points at its template through `templateId`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Lists {
    /// Host items and submitted records
    pub records: String,

    /// Saved templates
    pub templates: String,

    /// Key of the host item field that holds the template id
    pub template_id_field: String,
}

impl Default for Lists {
    fn default() -> Self {
        Lists {
            records: "Business".to_string(),
            templates: "Business".to_string(),
            template_id_field: "templateId".to_string(),
        }
    }
}

impl Lists {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn records(mut self, list: impl Into<String>) -> Self {
        self.records = list.into();
        self
    }

    pub fn templates(mut self, list: impl Into<String>) -> Self {
        self.templates = list.into();
        self
    }

    pub fn template_id_field(mut self, field: impl Into<String>) -> Self {
        self.template_id_field = field.into();
        self
    }
}

/// Everything a form operation needs to know about where it runs.
///
/// Passed explicitly into every operation that touches the store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HostContext {
    pub display_mode: DisplayMode,

    /// The host item the form was opened for, if any
    pub item: Option<RecordId>,

    pub lists: Lists,
}

impl HostContext {
    pub fn new(display_mode: DisplayMode) -> Self {
        HostContext {
            display_mode,
            item: None,
            lists: Lists::default(),
        }
    }

    pub fn item(mut self, item: impl Into<RecordId>) -> Self {
        self.item = Some(item.into());
        self
    }

    pub fn lists(mut self, lists: Lists) -> Self {
        self.lists = lists;
        self
    }

    pub fn mode(&self) -> Mode {
        self.display_mode.mode()
    }
}
