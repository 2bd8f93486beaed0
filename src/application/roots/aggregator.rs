use super::resolver::RootResolver;
use super::types::{RootMap, SharedRootMap};
use crate::application::tokenizer::Word;
use crate::infrastructure::http::FetchError;
use crate::infrastructure::morphology::MorphologyService;
use futures::{TryStreamExt, stream};
use std::time::Instant;

/// Resolves one word at a time, in corpus order.
pub async fn aggregate(
    resolver: &RootResolver,
    words: &[Word],
    service: MorphologyService,
) -> Result<RootMap, FetchError> {
    let t0 = Instant::now();
    let mut roots = RootMap::new();

    for word in words {
        let root = resolver.resolve_root(word, service).await?;
        log::debug!("Root: {} Word {}", root, word);
        roots.push(root, word.clone());
    }

    log::info!(
        "aggregate.sequential service={} words={} roots={} cache.roots={} cache.stems={} perf.aggregate_ms={}",
        service,
        words.len(),
        roots.len(),
        resolver.cached_roots(),
        resolver.cached_stems(),
        t0.elapsed().as_millis()
    );
    Ok(roots)
}

/// Starts every lookup at once (or at most `limit` at a time) and returns
/// after all of them have finished. Group order follows completion order.
/// The first failed lookup fails the whole aggregation.
pub async fn aggregate_concurrent(
    resolver: &RootResolver,
    words: &[Word],
    service: MorphologyService,
    limit: Option<usize>,
) -> Result<RootMap, FetchError> {
    let t0 = Instant::now();
    log::info!("Total words count: {}", words.len());

    let roots = SharedRootMap::default();
    let target = &roots;

    stream::iter(words.iter().map(Ok::<&Word, FetchError>))
        .try_for_each_concurrent(limit, move |word| {
            resolver.resolve_into(word, target, service)
        })
        .await?;

    let roots = roots.into_inner();
    log::info!(
        "aggregate.concurrent service={} words={} roots={} cache.roots={} cache.stems={} perf.aggregate_ms={}",
        service,
        words.len(),
        roots.len(),
        resolver.cached_roots(),
        resolver.cached_stems(),
        t0.elapsed().as_millis()
    );
    Ok(roots)
}
