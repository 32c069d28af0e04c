use std::sync::Arc;

use chrono::TimeDelta;
use rulesplit_core::{default_window, is_within_window};
use rulesplit_logging::{rules_debug, rules_warn};

use crate::{ArtifactStore, Clock};

/// Answers whether a named artifact was written within the validity window.
#[derive(Clone)]
pub struct FreshnessChecker {
    clock: Arc<dyn Clock>,
    window: TimeDelta,
}

impl FreshnessChecker {
    pub fn new(clock: Arc<dyn Clock>, window: TimeDelta) -> Self {
        Self { clock, window }
    }

    pub fn with_default_window(clock: Arc<dyn Clock>) -> Self {
        Self::new(clock, default_window())
    }

    pub fn clock(&self) -> &dyn Clock {
        self.clock.as_ref()
    }

    /// Missing artifacts and unreadable metadata are simply not fresh.
    pub fn is_fresh(&self, store: &dyn ArtifactStore, name: &str) -> bool {
        match store.modified(name) {
            Ok(Some(modified)) => {
                let fresh = is_within_window(modified, self.clock.now(), self.window);
                rules_debug!("{} modified {} fresh={}", name, modified.to_rfc3339(), fresh);
                fresh
            }
            Ok(None) => {
                rules_debug!("{} does not exist", name);
                false
            }
            Err(err) => {
                rules_warn!("Could not read modification time of {}: {}", name, err);
                false
            }
        }
    }
}
