pub const DEFAULT_MAX_ENTRIES: usize = 500;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
    Markdown,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum FailOn {
    /// Any invalid address fails the run.
    #[default]
    Invalid,
    /// Always exit zero on a completed run.
    Never,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EffectiveConfig {
    pub output: OutputFormat,
    pub fail_on: FailOn,
    pub max_entries: usize,
}

impl Default for EffectiveConfig {
    fn default() -> Self {
        Self {
            output: OutputFormat::default(),
            fail_on: FailOn::default(),
            max_entries: DEFAULT_MAX_ENTRIES,
        }
    }
}
