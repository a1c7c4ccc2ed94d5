use console::style;
use dialoguer::theme::ColorfulTheme;

/// Returns the standard theme used for interactive prompts
pub fn dialoguer_theme() -> ColorfulTheme {
    ColorfulTheme {
        active_item_style: console::Style::new().cyan().bold(),
        active_item_prefix: style("❯".to_string()).cyan().bold(),
        inactive_item_prefix: style(" ".to_string()),
        prompt_style: console::Style::new().bold(),
        prompt_prefix: style("?".to_string()).yellow().bold(),
        success_prefix: style("✔".to_string()).green().bold(),
        error_prefix: style("✖".to_string()).red().bold(),
        hint_style: console::Style::new().dim(),
        values_style: console::Style::new().cyan(),
        ..Default::default()
    }
}

/// Prints a section heading the way every command opens
pub fn heading(title: &str, detail: &str) {
    println!();
    println!("  {}", style(title).cyan().bold().underlined());
    println!();
    println!("  {}", style(detail).dim());
    println!();
}
