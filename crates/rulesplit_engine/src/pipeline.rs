use std::sync::Arc;

use chrono::TimeDelta;
use rulesplit_core::{default_window, GateOutcome, RunContext, StatusLog};

use crate::{
    ArtifactStore, Clock, Fetcher, FreshnessChecker, Normalizer, OutputGate, Pacer,
    SourceAggregator, Splitter,
};

/// Artifact names and the validity window shared by every step.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PipelineSettings {
    pub raw_cache: String,
    pub normalized_cache: String,
    pub window: TimeDelta,
}

impl Default for PipelineSettings {
    fn default() -> Self {
        Self {
            raw_cache: "raw_cache.txt".to_string(),
            normalized_cache: "normalized_cache.txt".to_string(),
            window: default_window(),
        }
    }
}

/// External services the pipeline talks to.
pub struct Collaborators {
    pub fetcher: Arc<dyn Fetcher>,
    pub pacer: Arc<dyn Pacer>,
    /// Holds the raw and normalized caches.
    pub cache: Arc<dyn ArtifactStore>,
    /// Receives the output parts.
    pub output: Arc<dyn ArtifactStore>,
    pub clock: Arc<dyn Clock>,
}

/// Fetch, normalize and split pipeline for one run.
///
/// Building one aggregates the sources; [`RuleSplitter::split`] then produces
/// the output parts. Status accumulates in the [`RunContext`] across calls.
pub struct RuleSplitter {
    settings: PipelineSettings,
    collaborators: Collaborators,
    freshness: FreshnessChecker,
    ctx: RunContext,
}

impl RuleSplitter {
    /// Aggregates `sources` into the raw cache (when stale) and returns the
    /// pipeline ready for [`RuleSplitter::split`].
    pub async fn build(
        sources: &[String],
        settings: PipelineSettings,
        collaborators: Collaborators,
    ) -> Self {
        let freshness = FreshnessChecker::new(collaborators.clock.clone(), settings.window);
        let mut splitter = Self {
            settings,
            collaborators,
            freshness,
            ctx: RunContext::new(),
        };
        splitter.aggregate(sources).await;
        splitter
    }

    async fn aggregate(&mut self, sources: &[String]) {
        let aggregator = SourceAggregator {
            fetcher: self.collaborators.fetcher.as_ref(),
            pacer: self.collaborators.pacer.as_ref(),
            store: self.collaborators.cache.as_ref(),
            freshness: &self.freshness,
            raw_cache: &self.settings.raw_cache,
        };
        aggregator.run(&mut self.ctx, sources).await;
    }

    pub fn is_fresh_cache(&self, name: &str) -> bool {
        self.freshness
            .is_fresh(self.collaborators.cache.as_ref(), name)
    }

    pub fn is_fresh_output(&self, name: &str) -> bool {
        self.freshness
            .is_fresh(self.collaborators.output.as_ref(), name)
    }

    pub fn normalize(&mut self) -> bool {
        normalizer(&self.collaborators, &self.freshness, &self.settings).run(&mut self.ctx)
    }

    pub fn ensure_outputs(&mut self, base: &str) -> bool {
        gate(&self.collaborators, &self.freshness, &self.settings)
            .ensure_outputs(&mut self.ctx, base)
    }

    pub fn check_outputs(&mut self, base: &str) -> GateOutcome {
        gate(&self.collaborators, &self.freshness, &self.settings).check(&mut self.ctx, base)
    }

    pub fn split(&mut self, base: &str) -> bool {
        let splitter = Splitter {
            gate: gate(&self.collaborators, &self.freshness, &self.settings),
            cache: self.collaborators.cache.as_ref(),
            normalized_cache: &self.settings.normalized_cache,
        };
        splitter.run(&mut self.ctx, base)
    }

    pub fn context(&self) -> &RunContext {
        &self.ctx
    }

    pub fn status(&self) -> &StatusLog {
        &self.ctx.status
    }

    pub fn into_status(self) -> StatusLog {
        self.ctx.status
    }
}

fn normalizer<'a>(
    collaborators: &'a Collaborators,
    freshness: &'a FreshnessChecker,
    settings: &'a PipelineSettings,
) -> Normalizer<'a> {
    Normalizer {
        store: collaborators.cache.as_ref(),
        freshness,
        raw_cache: &settings.raw_cache,
        normalized_cache: &settings.normalized_cache,
    }
}

fn gate<'a>(
    collaborators: &'a Collaborators,
    freshness: &'a FreshnessChecker,
    settings: &'a PipelineSettings,
) -> OutputGate<'a> {
    OutputGate {
        output: collaborators.output.as_ref(),
        freshness,
        normalizer: normalizer(collaborators, freshness, settings),
    }
}
