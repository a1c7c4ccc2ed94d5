use anyhow::Result;
use dialoguer::{theme::ColorfulTheme, Input, Select};
use dynform::render::{Action, Binding, Control, View};

/// One choice in the terminal menu built from a rendered view.
pub(crate) enum Entry<'a> {
    /// An input control, edited through a prompt
    Edit { row: Option<usize>, control: &'a Control },

    /// A button
    Press { row: Option<usize>, label: &'a str, action: &'a Action },

    Close,
}

impl Entry<'_> {
    pub(crate) fn label(&self) -> String {
        let (row, text) = match self {
            Entry::Edit { row, control } => (*row, describe(control)),
            Entry::Press { row, label, .. } => (*row, label.to_string()),
            Entry::Close => (None, "Close".to_string()),
        };

        match row {
            Some(row) => format!("#{} {text}", row + 1),
            None => text,
        }
    }
}

/// Flattens the view into menu entries, numbering the controls of each row.
pub(crate) fn entries(view: &View) -> Vec<Entry<'_>> {
    let mut entries = vec![];
    let mut rows = 0;

    for control in &view.controls {
        match control {
            Control::Row { controls, .. } => {
                for control in controls {
                    push(&mut entries, Some(rows), control);
                }
                rows += 1;
            }
            control => push(&mut entries, None, control),
        }
    }

    entries.push(Entry::Close);
    entries
}

fn push<'a>(entries: &mut Vec<Entry<'a>>, row: Option<usize>, control: &'a Control) {
    match control {
        Control::TextInput { .. } | Control::TextArea { .. } | Control::Select { .. } => {
            entries.push(Entry::Edit { row, control })
        }
        Control::Button { label, action } => entries.push(Entry::Press { row, label, action }),
        Control::Text(_) | Control::Row { .. } => {}
    }
}

fn describe(control: &Control) -> String {
    match control {
        Control::TextInput { name: Some(name), value, .. } => format!("{name}: {value}"),
        Control::TextInput { placeholder, value, .. }
        | Control::TextArea { placeholder, value, .. } => format!("{placeholder}: {value}"),
        Control::Select { name, selected, .. } => {
            format!("{name}: {}", selected.as_deref().unwrap_or_default())
        }
        Control::Text(text) => text.clone(),
        Control::Button { label, .. } => label.clone(),
        Control::Row { .. } => String::new(),
    }
}

/// Prompts for a new value of an input control.
pub(crate) fn edit(theme: &ColorfulTheme, control: &Control) -> Result<Option<(Binding, String)>> {
    let edited = match control {
        Control::TextInput { binding, placeholder, value, .. }
        | Control::TextArea { binding, placeholder, value } => {
            let value = Input::<String>::with_theme(theme)
                .with_prompt(placeholder)
                .with_initial_text(value)
                .allow_empty(true)
                .interact_text()?;
            Some((*binding, value))
        }
        Control::Select { binding, name, options, selected } => {
            if options.is_empty() {
                return Ok(None);
            }
            let labels: Vec<_> = options.iter().map(|option| option.label.as_str()).collect();
            let current = options
                .iter()
                .position(|option| Some(&option.value) == selected.as_ref())
                .unwrap_or(0);
            let index = Select::with_theme(theme)
                .with_prompt(name)
                .items(&labels)
                .default(current)
                .interact()?;
            Some((*binding, options[index].value.clone()))
        }
        _ => None,
    };

    Ok(edited)
}
