use crate::{term, theme::heading, Config, TerminalHost};
use anyhow::Result;
use clap::Parser;
use dynform::{DisplayMode, FormSession, Forms, HostContext};

#[derive(Parser, Debug)]
pub struct DesignCommand {}

impl DesignCommand {
    pub(crate) async fn run(self, forms: &Forms, config: &Config) -> Result<()> {
        heading(
            "Design Template",
            &format!(
                "Templates are saved to `{}` in {}",
                config.lists.templates,
                forms.driver().url()
            ),
        );

        let ctx = HostContext::new(DisplayMode::View).lists(config.lists.clone());
        let mut session = FormSession::new(forms.clone(), ctx, TerminalHost::new());
        term::run(&mut session).await
    }
}
