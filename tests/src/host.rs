use dynform::{Host, Notice};

/// A [`Host`] that answers prompts from a script and remembers everything it
/// was told.
#[derive(Debug, Default)]
pub struct TestHost {
    /// Answer for the next template name prompt
    pub template_name: Option<String>,

    pub prompts: usize,
    pub notices: Vec<Notice>,
    pub saves: usize,
    pub closes: usize,
}

impl TestHost {
    pub fn new() -> Self {
        Self::default()
    }

    /// A host whose template name prompt answers `name`.
    pub fn naming(name: &str) -> Self {
        Self {
            template_name: Some(name.to_string()),
            ..Self::default()
        }
    }
}

impl Host for TestHost {
    fn prompt_template_name(&mut self) -> Option<String> {
        self.prompts += 1;
        self.template_name.clone()
    }

    fn notify(&mut self, notice: Notice) {
        self.notices.push(notice);
    }

    fn on_save(&mut self) {
        self.saves += 1;
    }

    fn on_close(&mut self) {
        self.closes += 1;
    }
}
