//! Rulesplit engine: fetching, artifact storage and the normalize/split pipeline.
mod aggregate;
mod clock;
mod decode;
mod fetch;
mod freshness;
mod normalize;
mod pacer;
mod pipeline;
mod report;
mod split;
mod store;
mod types;

pub use aggregate::SourceAggregator;
pub use clock::{Clock, ManualClock, SystemClock};
pub use decode::{decode_body, DecodedText};
pub use fetch::{FetchSettings, Fetcher, ReqwestFetcher};
pub use freshness::FreshnessChecker;
pub use normalize::Normalizer;
pub use pacer::{NoPacer, Pacer, TokioPacer};
pub use pipeline::{Collaborators, PipelineSettings, RuleSplitter};
pub use split::{OutputGate, Splitter};
pub use store::{ensure_dir, ArtifactStore, FsArtifactStore, MemoryArtifactStore, StoreError};
pub use types::{FailureKind, FetchError, FetchMetadata, FetchOutput};
