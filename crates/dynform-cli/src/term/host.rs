use crate::theme::dialoguer_theme;
use console::style;
use dialoguer::{theme::ColorfulTheme, Input};
use dynform::{Host, Notice};

/// A [`Host`] that talks to the user on the terminal.
pub struct TerminalHost {
    theme: ColorfulTheme,
    saved: bool,
    closed: bool,
}

impl TerminalHost {
    pub fn new() -> Self {
        Self {
            theme: dialoguer_theme(),
            saved: false,
            closed: false,
        }
    }

    /// Whether the form asked to be saved or closed.
    pub fn finished(&self) -> bool {
        self.saved || self.closed
    }
}

impl Default for TerminalHost {
    fn default() -> Self {
        Self::new()
    }
}

impl Host for TerminalHost {
    fn prompt_template_name(&mut self) -> Option<String> {
        let name = Input::<String>::with_theme(&self.theme)
            .with_prompt("Template name")
            .allow_empty(true)
            .interact_text();

        match name {
            Ok(name) => Some(name),
            Err(err) => {
                log::warn!(target: "dynform", "template name prompt failed: {err}");
                None
            }
        }
    }

    fn notify(&mut self, notice: Notice) {
        match notice {
            Notice::TemplateSaved { id } => println!(
                "  {} {}",
                style("✓").green().bold(),
                style(format!("Template saved as {id}")).dim()
            ),
            Notice::FormSubmitted { id } => println!(
                "  {} {}",
                style("✓").green().bold(),
                style(format!("Record {id} created")).dim()
            ),
            Notice::Failed { message } => {
                println!("  {} {}", style("✖").red().bold(), message)
            }
        }
    }

    fn on_save(&mut self) {
        self.saved = true;
    }

    fn on_close(&mut self) {
        self.closed = true;
    }
}
