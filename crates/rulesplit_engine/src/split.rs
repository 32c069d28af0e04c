use chrono::Local;
use rulesplit_core::{
    decide_outputs, part_name, partition, render_part, GateOutcome, RunContext, StatusEvent,
    PART_COUNT,
};
use rulesplit_logging::rules_info;

use crate::normalize::read_lines;
use crate::report::report;
use crate::{ArtifactStore, FreshnessChecker, Normalizer};

/// Decides whether the output parts have to be rebuilt.
pub struct OutputGate<'a> {
    pub output: &'a dyn ArtifactStore,
    pub freshness: &'a FreshnessChecker,
    pub normalizer: Normalizer<'a>,
}

impl OutputGate<'_> {
    pub fn check(&self, ctx: &mut RunContext, base: &str) -> GateOutcome {
        if base.is_empty() {
            report(ctx, StatusEvent::EmptyBaseName);
            return GateOutcome::Unavailable;
        }

        let mut fresh = [false; PART_COUNT];
        for (index, slot) in fresh.iter_mut().enumerate() {
            let name = part_name(base, index);
            *slot = self.freshness.is_fresh(self.output, &name);
            if *slot {
                report(ctx, StatusEvent::OutputFresh { name });
            }
        }
        if let Some(outcome) = decide_outputs(&fresh) {
            return outcome;
        }

        if self.normalizer.run(ctx) {
            report(ctx, StatusEvent::CacheUpdated);
            GateOutcome::Regenerate
        } else {
            report(ctx, StatusEvent::NoRules);
            GateOutcome::Unavailable
        }
    }

    /// Two-valued form of [`OutputGate::check`].
    pub fn ensure_outputs(&self, ctx: &mut RunContext, base: &str) -> bool {
        self.check(ctx, base).is_ready()
    }
}

/// Writes the normalized rules as `PART_COUNT` labelled output parts.
pub struct Splitter<'a> {
    pub gate: OutputGate<'a>,
    pub cache: &'a dyn ArtifactStore,
    pub normalized_cache: &'a str,
}

impl Splitter<'_> {
    /// True when all parts are fresh or were written.
    pub fn run(&self, ctx: &mut RunContext, base: &str) -> bool {
        match self.gate.check(ctx, base) {
            GateOutcome::Unavailable => return false,
            GateOutcome::AlreadyFresh => {
                rules_info!("All {} parts of {} are fresh", PART_COUNT, base);
                return true;
            }
            GateOutcome::Regenerate => {}
        }

        let lines = read_lines(self.cache, self.normalized_cache);
        if lines.is_empty() {
            report(ctx, StatusEvent::NoRules);
            return false;
        }

        let date = self
            .gate
            .freshness
            .clock()
            .now()
            .with_timezone(&Local)
            .date_naive();
        let mut all_written = true;
        for (index, rules) in partition(&lines).iter().enumerate() {
            let name = part_name(base, index);
            let text = render_part(date, index, &ctx.attribution, rules);
            match self.gate.output.write(&name, text.as_bytes()) {
                Ok(()) => report(ctx, StatusEvent::OutputCreated { name }),
                Err(err) => {
                    all_written = false;
                    report(
                        ctx,
                        StatusEvent::StoreFailure {
                            name,
                            reason: err.to_string(),
                        },
                    );
                }
            }
        }
        all_written
    }
}
