use rulesplit_core::{normalize_lines, split_lines, RunContext, StatusEvent};
use rulesplit_logging::{rules_debug, rules_warn};

use crate::report::report;
use crate::{ArtifactStore, FreshnessChecker, StoreError};

/// Rebuilds the normalized cache from a full read of the raw cache.
pub struct Normalizer<'a> {
    pub store: &'a dyn ArtifactStore,
    pub freshness: &'a FreshnessChecker,
    pub raw_cache: &'a str,
    pub normalized_cache: &'a str,
}

impl Normalizer<'_> {
    /// True when the normalized cache is ready to split.
    pub fn run(&self, ctx: &mut RunContext) -> bool {
        if self.freshness.is_fresh(self.store, self.normalized_cache) {
            rules_debug!("{} is fresh, not normalizing", self.normalized_cache);
            return true;
        }

        let lines = read_lines(self.store, self.raw_cache);
        if lines.is_empty() {
            return false;
        }
        let total = lines.len();

        let kept = normalize_lines(lines);
        rules_debug!("Normalized {} raw lines into {} rules", total, kept.len());

        let content: String = kept.concat();
        if let Err(err) = self.store.write(self.normalized_cache, content.as_bytes()) {
            report(
                ctx,
                StatusEvent::StoreFailure {
                    name: self.normalized_cache.to_string(),
                    reason: err.to_string(),
                },
            );
            return false;
        }

        report(ctx, StatusEvent::NormalizedCacheUpdated);
        true
    }
}

/// Lines of an artifact with their newlines; empty when it is missing or unreadable.
pub(crate) fn read_lines(store: &dyn ArtifactStore, name: &str) -> Vec<String> {
    match store.read(name) {
        Ok(bytes) => split_lines(&String::from_utf8_lossy(&bytes)),
        Err(StoreError::NotFound(_)) => {
            rules_debug!("{} does not exist", name);
            Vec::new()
        }
        Err(err) => {
            rules_warn!("Could not read {}: {}", name, err);
            Vec::new()
        }
    }
}
