//! Validation outcomes surfaced to the player.

/// Result category of a rule evaluation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Verdict {
    Success,
    Error,
    /// Not enough placements yet to judge.
    Incomplete,
}

/// A verdict plus an optional message to display alongside it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Feedback {
    pub verdict: Verdict,
    pub message: Option<String>,
}

impl Feedback {
    pub fn success() -> Self {
        Self { verdict: Verdict::Success, message: None }
    }

    pub fn error() -> Self {
        Self { verdict: Verdict::Error, message: None }
    }

    pub fn incomplete() -> Self {
        Self { verdict: Verdict::Incomplete, message: None }
    }

    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }

    pub fn is_success(&self) -> bool {
        self.verdict == Verdict::Success
    }

    pub fn is_error(&self) -> bool {
        self.verdict == Verdict::Error
    }
}
