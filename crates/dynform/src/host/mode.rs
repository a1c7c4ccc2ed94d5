/// Display mode the host opened the form in.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum DisplayMode {
    New,
    Edit,
    View,
    Display,
}

/// What the form does in a display mode.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Mode {
    /// Build a schema and save it as a template.
    Design,

    /// Resolve the item's template and collect a record.
    Fill,
}

impl DisplayMode {
    /// New and edit forms collect data; view and display forms host the
    /// template designer.
    pub fn mode(self) -> Mode {
        match self {
            DisplayMode::New | DisplayMode::Edit => Mode::Fill,
            DisplayMode::View | DisplayMode::Display => Mode::Design,
        }
    }
}

impl std::str::FromStr for DisplayMode {
    type Err = dynform_core::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "new" => Ok(DisplayMode::New),
            "edit" => Ok(DisplayMode::Edit),
            "view" => Ok(DisplayMode::View),
            "display" => Ok(DisplayMode::Display),
            _ => Err(dynform_core::err!("unknown display mode `{s}`")),
        }
    }
}
