use rulesplit_core::{RunContext, StatusEvent};
use rulesplit_logging::rules_info;

use crate::report::report;
use crate::{decode_body, ArtifactStore, Fetcher, FreshnessChecker, Pacer};

/// Fetches every source into the raw cache unless the cache is still fresh.
pub struct SourceAggregator<'a> {
    pub fetcher: &'a dyn Fetcher,
    pub pacer: &'a dyn Pacer,
    pub store: &'a dyn ArtifactStore,
    pub freshness: &'a FreshnessChecker,
    pub raw_cache: &'a str,
}

impl SourceAggregator<'_> {
    /// Every configured source is attributed, fetched or not. Failures are
    /// reported and otherwise ignored.
    pub async fn run(&self, ctx: &mut RunContext, sources: &[String]) {
        if sources.is_empty() {
            return;
        }

        if self.freshness.is_fresh(self.store, self.raw_cache) {
            rules_info!("{} is fresh, skipping {} sources", self.raw_cache, sources.len());
            for url in sources {
                ctx.attribution.record(url);
            }
            return;
        }

        let mut cache = String::new();
        for (index, url) in sources.iter().enumerate() {
            match self.fetcher.fetch(url).await {
                Ok(output) => {
                    let decoded =
                        decode_body(&output.bytes, output.metadata.content_type.as_deref());
                    cache.push_str(&decoded.text);
                    cache.push('\n');
                    report(ctx, StatusEvent::Fetched { url: url.clone() });
                }
                Err(err) => report(
                    ctx,
                    StatusEvent::Skipped {
                        url: url.clone(),
                        reason: err.to_string(),
                    },
                ),
            }
            ctx.attribution.record(url);

            if index + 1 < sources.len() {
                self.pacer.pause().await;
            }
        }

        match self.store.write(self.raw_cache, cache.as_bytes()) {
            Ok(()) => report(ctx, StatusEvent::CacheUpdated),
            Err(err) => report(
                ctx,
                StatusEvent::StoreFailure {
                    name: self.raw_cache.to_string(),
                    reason: err.to_string(),
                },
            ),
        }
    }
}
