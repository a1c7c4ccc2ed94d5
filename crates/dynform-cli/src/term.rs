mod host;
pub use host::TerminalHost;

mod menu;
use menu::Entry;

use crate::theme::dialoguer_theme;
use anyhow::Result;
use console::style;
use dialoguer::Select;
use dynform::{render::Action, FormSession};

/// Runs a form session in the terminal until the host is told to save or
/// close.
pub(crate) async fn run(session: &mut FormSession<TerminalHost>) -> Result<()> {
    let theme = dialoguer_theme();
    session.load().await;

    while !session.host().finished() {
        let view = session.view();
        for text in view.texts() {
            println!("  {}", style(text).yellow());
        }

        let entries = menu::entries(&view);
        let labels: Vec<_> = entries.iter().map(Entry::label).collect();
        let selected = Select::with_theme(&theme)
            .with_prompt("Choose")
            .items(&labels)
            .default(0)
            .interact()?;

        let action = match &entries[selected] {
            Entry::Edit { control, .. } => {
                if let Some((binding, value)) = menu::edit(&theme, control)? {
                    session.change(binding, value);
                }
                continue;
            }
            Entry::Press { action, .. } => (*action).clone(),
            Entry::Close => Action::Close,
        };

        if action == Action::SaveTemplate {
            if let Some(Err(err)) = session.renderer().schema().map(|schema| schema.validate()) {
                println!("  {} {err}", style("!").yellow().bold());
            }
        }

        match session.dispatch(action).await {
            Ok(outcome) => log::debug!(target: "dynform", "{outcome:?}"),
            // Already shown to the user through the host
            Err(err) => log::debug!(target: "dynform", "action failed: {err}"),
        }
    }

    Ok(())
}
