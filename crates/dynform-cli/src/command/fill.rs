use crate::{term, theme::heading, Config, TerminalHost};
use anyhow::Result;
use clap::Parser;
use dynform::{DisplayMode, FormSession, Forms, HostContext};

#[derive(Parser, Debug)]
pub struct FillCommand {
    /// Key of the host item whose template is filled in
    #[arg(long)]
    item: Option<u64>,

    /// Display mode the host opens the form in; `view` and `display` open
    /// the designer
    #[arg(long, default_value = "new")]
    mode: DisplayMode,
}

impl FillCommand {
    pub(crate) async fn run(self, forms: &Forms, config: &Config) -> Result<()> {
        let item = match self.item {
            Some(item) => format!("item {item}"),
            None => "no item".to_string(),
        };
        heading(
            "Fill Form",
            &format!("{item} of `{}` in {}", config.lists.records, forms.driver().url()),
        );

        let mut ctx = HostContext::new(self.mode).lists(config.lists.clone());
        ctx.item = self.item.map(Into::into);

        let mut session = FormSession::new(forms.clone(), ctx, TerminalHost::new());
        term::run(&mut session).await
    }
}
