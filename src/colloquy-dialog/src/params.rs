//! Parameters handed to the presentation surface for one dialog.

/// Timeout value meaning "wait forever".
pub const NO_TIMEOUT: u64 = 0;

/// Everything a presentation surface needs to render one dialog.
/// Immutable once constructed; one instance per tool call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DialogParameters {
    /// Label shown in the dialog chrome, typically the project name.
    pub context_label: String,
    /// The question itself. Markdown is permitted; rendering is the
    /// surface's concern.
    pub prompt_text: String,
    /// Canned answers offered to the user, in order. May be empty.
    pub options: Vec<String>,
    /// Seconds before the surface gives up, [`NO_TIMEOUT`] to wait forever.
    pub timeout_secs: u64,
    /// Requested height of the free-text response area, if any.
    pub response_area_height: Option<u32>,
}

impl DialogParameters {
    pub fn new(context_label: impl Into<String>, prompt_text: impl Into<String>) -> Self {
        Self {
            context_label: context_label.into(),
            prompt_text: prompt_text.into(),
            options: Vec::new(),
            timeout_secs: NO_TIMEOUT,
            response_area_height: None,
        }
    }

    pub fn with_options(mut self, options: Vec<String>) -> Self {
        self.options = options;
        self
    }

    pub fn with_timeout_secs(mut self, timeout_secs: u64) -> Self {
        self.timeout_secs = timeout_secs;
        self
    }

    pub fn with_response_area_height(mut self, height: u32) -> Self {
        self.response_area_height = Some(height);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builder_defaults() {
        let params = DialogParameters::new("proj", "Pick one");

        assert_eq!(params.context_label, "proj");
        assert_eq!(params.prompt_text, "Pick one");
        assert!(params.options.is_empty());
        assert_eq!(params.timeout_secs, NO_TIMEOUT);
        assert_eq!(params.response_area_height, None);
    }

    #[test]
    fn builder_overrides() {
        let params = DialogParameters::new("proj", "Confirm?")
            .with_options(vec!["yes".into(), "no".into()])
            .with_timeout_secs(60)
            .with_response_area_height(300);

        assert_eq!(params.options.len(), 2);
        assert_eq!(params.timeout_secs, 60);
        assert_eq!(params.response_area_height, Some(300));
    }
}
