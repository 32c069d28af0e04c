use crate::{StatusEvent, StatusLog};

/// Accumulated `! <url>` lines naming every configured source.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Attribution {
    block: String,
}

impl Attribution {
    /// Appends `! {url}\n`.
    pub fn record(&mut self, url: &str) {
        self.block.push_str("! ");
        self.block.push_str(url);
        self.block.push('\n');
    }

    pub fn as_str(&self) -> &str {
        &self.block
    }

    pub fn is_empty(&self) -> bool {
        self.block.is_empty()
    }
}

/// Mutable per-run state threaded through every pipeline step.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct RunContext {
    pub status: StatusLog,
    pub attribution: Attribution,
}

impl RunContext {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a status event.
    pub fn report(&mut self, event: StatusEvent) {
        self.status.push(event);
    }
}
