use crate::{Forms, HostContext};

use async_trait::async_trait;
use dynform_core::{Error, RecordId, ResolutionStage, Result, Schema, Template};

/// Finds the schema a fill-mode form renders.
///
/// Resolution is two separate calls so the link between a host item and its
/// template can be swapped without touching how templates are read.
#[async_trait]
pub trait TemplateResolver: Send + Sync {
    /// First hop: which template the host item uses.
    async fn template_ref(&self, forms: &Forms, ctx: &HostContext) -> Result<RecordId>;

    /// Second hop: the schema stored in that template.
    async fn template(&self, forms: &Forms, ctx: &HostContext, id: RecordId) -> Result<Schema>;

    async fn resolve(&self, forms: &Forms, ctx: &HostContext) -> Result<Schema> {
        let id = self.template_ref(forms, ctx).await?;
        self.template(forms, ctx, id).await
    }
}

/// Reads the template id from the host item in the record list, then the
/// template from the template list.
#[derive(Debug, Default, Clone, Copy)]
pub struct TwoHopResolver;

#[async_trait]
impl TemplateResolver for TwoHopResolver {
    async fn template_ref(&self, forms: &Forms, ctx: &HostContext) -> Result<RecordId> {
        let Some(item) = ctx.item else {
            return Err(Error::resolution(
                ResolutionStage::MissingItemReference,
                "",
            ));
        };

        let lists = &ctx.lists;
        let record = forms.get(&lists.records, item).await.map_err(|err| {
            err.context(Error::resolution(
                ResolutionStage::FetchItem,
                format!("item {item} in `{}`", lists.records),
            ))
        })?;

        let field = &lists.template_id_field;
        match record.get(field) {
            Some(value) => RecordId::from_value(value).ok_or_else(|| {
                Error::resolution(
                    ResolutionStage::TemplateId,
                    format!("`{field}` of item {item} is not a record id: {value:?}"),
                )
            }),
            None => Err(Error::resolution(
                ResolutionStage::TemplateId,
                format!("item {item} has no `{field}`"),
            )),
        }
    }

    async fn template(&self, forms: &Forms, ctx: &HostContext, id: RecordId) -> Result<Schema> {
        let templates = &ctx.lists.templates;
        let record = forms.get(templates, id).await.map_err(|err| {
            err.context(Error::resolution(
                ResolutionStage::FetchTemplate,
                format!("template {id} in `{templates}`"),
            ))
        })?;

        Template::fields_of(&record).map_err(|err| {
            err.context(Error::resolution(
                ResolutionStage::Fields,
                format!("template {id}"),
            ))
        })
    }
}
