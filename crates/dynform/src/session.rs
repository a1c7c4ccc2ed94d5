use crate::{
    render::{Action, Binding, View},
    FormRenderer, FormState, Forms, Host, HostContext, Notice, SaveOutcome, TemplateResolver,
    TwoHopResolver,
};

use dynform_core::{RecordId, Result};

/// What a dispatched action did.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// The form changed and should be rendered again.
    Updated,

    /// The action does not apply in the current state.
    Ignored,

    TemplateSaved(RecordId),

    /// The designer declined to name the template.
    SaveCancelled,

    Submitted(RecordId),

    /// Template resolution ran again after a failure and the form is ready.
    /// A retry that fails again leaves the form in its error state and
    /// reports [`Outcome::Updated`] with the new message.
    Reloaded,

    Closed,
}

/// One open form: the renderer, the store it saves to, and the host it
/// reports back to.
pub struct FormSession<H> {
    forms: Forms,
    ctx: HostContext,
    host: H,
    renderer: FormRenderer,
    resolver: Box<dyn TemplateResolver>,
}

impl<H: Host> FormSession<H> {
    /// Opens a form in the mode the host's display mode maps to.
    pub fn new(forms: Forms, ctx: HostContext, host: H) -> FormSession<H> {
        FormSession::with_resolver(forms, ctx, host, TwoHopResolver)
    }

    pub fn with_resolver(
        forms: Forms,
        ctx: HostContext,
        host: H,
        resolver: impl TemplateResolver + 'static,
    ) -> FormSession<H> {
        let renderer = FormRenderer::for_mode(ctx.mode());
        FormSession {
            forms,
            ctx,
            host,
            renderer,
            resolver: Box::new(resolver),
        }
    }

    pub fn context(&self) -> &HostContext {
        &self.ctx
    }

    pub fn host(&self) -> &H {
        &self.host
    }

    pub fn host_mut(&mut self) -> &mut H {
        &mut self.host
    }

    pub fn renderer(&self) -> &FormRenderer {
        &self.renderer
    }

    pub fn into_host(self) -> H {
        self.host
    }

    /// Resolves the template of a loading form. Returns `false` when the form
    /// was not waiting for one.
    pub async fn load(&mut self) -> bool {
        if !self.renderer.state().is_loading() {
            return false;
        }
        let result = self.resolver.resolve(&self.forms, &self.ctx).await;
        self.renderer.resolved(result)
    }

    pub fn view(&self) -> View {
        self.renderer.render()
    }

    pub fn change(&mut self, binding: Binding, value: impl Into<String>) -> bool {
        self.renderer.change(binding, value.into())
    }

    /// Runs an action from the rendered view, or [`Action::Close`] from the
    /// host.
    ///
    /// A failed save or submit is reported to the host as
    /// [`Notice::Failed`] and returned.
    pub async fn dispatch(&mut self, action: Action) -> Result<Outcome> {
        match action {
            Action::AddField(_) | Action::RemoveField(_) | Action::MoveField { .. } => {
                if self.renderer.apply(&action) {
                    Ok(Outcome::Updated)
                } else {
                    Ok(Outcome::Ignored)
                }
            }
            Action::SaveTemplate => self.save_template().await,
            Action::Submit => self.submit().await,
            Action::Retry => {
                if !self.renderer.retry() {
                    return Ok(Outcome::Ignored);
                }
                self.load().await;
                if self.renderer.state().is_ready() {
                    Ok(Outcome::Reloaded)
                } else {
                    Ok(Outcome::Updated)
                }
            }
            Action::Close => {
                self.host.on_close();
                Ok(Outcome::Closed)
            }
        }
    }

    async fn save_template(&mut self) -> Result<Outcome> {
        let FormState::Idle(designer) = self.renderer.state() else {
            return Ok(Outcome::Ignored);
        };

        let result = self
            .forms
            .save_template(&self.ctx, &mut self.host, designer.schema())
            .await;

        match self.report(result)? {
            SaveOutcome::Saved(id) => {
                self.host.notify(Notice::TemplateSaved { id });
                self.host.on_save();
                Ok(Outcome::TemplateSaved(id))
            }
            SaveOutcome::Cancelled => Ok(Outcome::SaveCancelled),
        }
    }

    async fn submit(&mut self) -> Result<Outcome> {
        let Some(form) = self.renderer.form_data() else {
            return Ok(Outcome::Ignored);
        };

        let result = self.forms.submit(&self.ctx, &form).await;
        let id = self.report(result)?;
        self.host.notify(Notice::FormSubmitted { id });
        self.host.on_save();
        Ok(Outcome::Submitted(id))
    }

    fn report<T>(&mut self, result: Result<T>) -> Result<T> {
        if let Err(err) = &result {
            self.host.notify(Notice::Failed {
                message: err.to_string(),
            });
        }
        result
    }
}

impl<H: std::fmt::Debug> std::fmt::Debug for FormSession<H> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FormSession")
            .field("ctx", &self.ctx)
            .field("host", &self.host)
            .field("state", self.renderer.state())
            .finish()
    }
}
