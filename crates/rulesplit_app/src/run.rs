use std::sync::Arc;

use rulesplit_core::StatusLog;
use rulesplit_engine::{
    Collaborators, FsArtifactStore, ReqwestFetcher, RuleSplitter, SystemClock, TokioPacer,
};
use rulesplit_logging::rules_info;

use crate::config::AppConfig;

#[derive(Debug)]
pub struct RunReport {
    pub success: bool,
    pub status: StatusLog,
}

/// Runs the full fetch, normalize and split pipeline for `config`.
pub async fn run(config: &AppConfig) -> RunReport {
    rules_info!(
        "Processing {} sources into {:?} (base name {:?})",
        config.sources.len(),
        config.output_dir,
        config.base_name
    );

    let collaborators = Collaborators {
        fetcher: Arc::new(ReqwestFetcher::new(config.fetch_settings())),
        pacer: Arc::new(TokioPacer::new(config.courtesy_delay())),
        cache: Arc::new(FsArtifactStore::new(&config.cache_dir)),
        output: Arc::new(FsArtifactStore::new(&config.output_dir)),
        clock: Arc::new(SystemClock),
    };

    let mut splitter =
        RuleSplitter::build(&config.sources, config.pipeline_settings(), collaborators).await;
    let success = splitter.split(&config.base_name);

    RunReport {
        success,
        status: splitter.into_status(),
    }
}
