use crate::PART_COUNT;

/// What the output gate decided for a set of output artifacts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GateOutcome {
    /// Every output is fresh; nothing needs to be rebuilt.
    AlreadyFresh,
    /// Outputs are stale and the normalized cache is ready to split.
    Regenerate,
    /// Outputs cannot be produced (bad base name or no rules).
    Unavailable,
}

impl GateOutcome {
    /// Two-valued view: outputs are (or can be made) ready.
    pub fn is_ready(self) -> bool {
        !matches!(self, GateOutcome::Unavailable)
    }
}

/// Decides from per-part freshness whether the pipeline must run.
///
/// Returns `None` when at least one part is stale; the caller then has to
/// normalize before it knows whether regeneration is possible.
pub fn decide_outputs(fresh: &[bool; PART_COUNT]) -> Option<GateOutcome> {
    if fresh.iter().all(|f| *f) {
        Some(GateOutcome::AlreadyFresh)
    } else {
        None
    }
}
