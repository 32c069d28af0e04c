//! Rulesplit core: pure freshness, normalization and partitioning logic.
mod context;
mod freshness;
mod gate;
mod header;
mod normalize;
mod partition;
mod status;

pub use context::{Attribution, RunContext};
pub use freshness::{default_window, is_within_window, FRESHNESS_WINDOW_SECS};
pub use gate::{decide_outputs, GateOutcome};
pub use header::{render_part, FORMAT_LINE};
pub use normalize::{normalize_lines, should_skip, split_lines, HEADER_MARKER, MIN_LINE_CHARS};
pub use partition::{chunk_size, part_name, partition, PART_COUNT};
pub use status::{StatusEvent, StatusLog};
