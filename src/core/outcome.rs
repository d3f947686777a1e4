/// What a finished job reports back to the UI.
///
/// Pass/fail is binary: individual steps may have logged warnings, but the
/// job either carries an error or it doesn't.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Outcome {
    pub lines: Vec<String>,
    pub error: Option<String>,
}

impl Outcome {
    pub fn success(lines: Vec<String>) -> Self {
        Self { lines, error: None }
    }

    pub fn failure(lines: Vec<String>, error: impl Into<String>) -> Self {
        Self {
            lines,
            error: Some(error.into()),
        }
    }

    /// Single-line failure where the message is also the log text.
    pub fn fail(message: impl Into<String>) -> Self {
        let message = message.into();
        Self::failure(vec![message.clone()], message)
    }

    pub fn is_ok(&self) -> bool {
        self.error.is_none()
    }
}
