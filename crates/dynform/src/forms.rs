use crate::{resolve::TwoHopResolver, FormData, Host, HostContext, TemplateResolver};

use dynform_core::{
    driver::{
        operation::{GetByKey, Insert},
        Driver,
    },
    Error, PersistenceTarget, Record, RecordId, Result, Schema, Template,
};

use std::sync::Arc;

/// Result of a template save that did not fail.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum SaveOutcome {
    /// The template was created under this key.
    Saved(RecordId),

    /// The designer gave no name; nothing was stored.
    Cancelled,
}

/// Handle to the record store shared by templates and submitted records.
///
/// Cloning is cheap; every clone talks to the same driver.
#[derive(Debug, Clone)]
pub struct Forms {
    driver: Arc<dyn Driver>,
}

impl Forms {
    pub fn new(driver: impl Driver) -> Forms {
        Forms {
            driver: Arc::new(driver),
        }
    }

    pub fn from_arc(driver: Arc<dyn Driver>) -> Forms {
        Forms { driver }
    }

    pub fn driver(&self) -> &dyn Driver {
        &*self.driver
    }

    /// Creates a record in `list`, returning the key the store assigned.
    pub async fn create(&self, list: &str, record: Record) -> Result<RecordId> {
        log::debug!(target: "dynform", "create list={list} keys={:?}", record.keys().collect::<Vec<_>>());
        self.driver
            .exec(Insert::new(list, record).into())
            .await?
            .into_created()
    }

    /// Fetches one record from `list`.
    pub async fn get(&self, list: &str, key: RecordId) -> Result<Record> {
        log::debug!(target: "dynform", "get list={list} key={key}");
        self.driver
            .exec(GetByKey::new(list, key).into())
            .await?
            .into_record()
    }

    /// Saves `schema` as a new template.
    ///
    /// The name comes from the host's prompt; an empty or cancelled prompt
    /// stores nothing. Failures are logged and returned as persistence
    /// errors.
    pub async fn save_template<H>(
        &self,
        ctx: &HostContext,
        host: &mut H,
        schema: &Schema,
    ) -> Result<SaveOutcome>
    where
        H: Host + ?Sized,
    {
        let name = match host.prompt_template_name() {
            Some(name) if !name.is_empty() => name,
            _ => {
                log::debug!(target: "dynform", "template save cancelled");
                return Ok(SaveOutcome::Cancelled);
            }
        };

        let template = Template::new(name, schema.clone());
        let created = match template.to_record() {
            Ok(record) => self.create(&ctx.lists.templates, record).await,
            Err(err) => Err(err),
        };
        match created {
            Ok(id) => {
                log::info!(target: "dynform", "saved template `{}` as {id}", template.name);
                Ok(SaveOutcome::Saved(id))
            }
            Err(err) => {
                let err = err.context(Error::persistence(PersistenceTarget::Template));
                log::error!(target: "dynform", "{err}");
                Err(err)
            }
        }
    }

    /// Resolves the schema of the host item in `ctx` with the two-hop
    /// item → template lookup.
    pub async fn resolve_template(&self, ctx: &HostContext) -> Result<Schema> {
        TwoHopResolver.resolve(self, ctx).await
    }

    /// Stores a filled form as a new record in the record list.
    pub async fn submit(&self, ctx: &HostContext, form: &FormData) -> Result<RecordId> {
        let record = form.to_record();
        match self.create(&ctx.lists.records, record).await {
            Ok(id) => {
                log::info!(target: "dynform", "submitted record {id}");
                Ok(id)
            }
            Err(err) => {
                let err = err.context(Error::persistence(PersistenceTarget::Record));
                log::error!(target: "dynform", "{err}");
                Err(err)
            }
        }
    }
}
