//! Options for compiling record accessor templates.

/// Options for [`RecordAccessor::with_options`](crate::RecordAccessor::with_options).
#[derive(Debug, Clone, Default)]
pub struct AccessorOptions {
    /// Replace `${NAME}` with the value of environment variable `NAME`
    /// before splitting the template (default: false)
    pub translate_env: bool,
}

impl AccessorOptions {
    /// Create new default options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Enable or disable environment variable translation.
    pub fn translate_env(mut self, translate: bool) -> Self {
        self.translate_env = translate;
        self
    }
}
