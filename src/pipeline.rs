//! The staged concurrent dataflow: enumerate, generate, dedup, enrich,
//! filter, output.
//!
//! Six stages connected by bounded `tokio::sync::mpsc` channels, each
//! stage closing its outbound channel once every upstream producer has
//! finished. Cancellation is a single `tokio::sync::watch::Receiver<bool>`
//! token threaded through every stage (kept dependency-light: plain
//! `tokio`, no extra cancellation crate).

use std::collections::BTreeMap;
use std::sync::Arc;

use rand::Rng;
use tokio::sync::{mpsc, watch, Mutex};
use tracing::{debug, info, instrument};

use crate::config::Config;
use crate::domain::{Target, Variant};

pub struct PipelineReport {
    pub variants: Vec<Variant>,
    pub total: usize,
}

/// Runs every stage for one target and returns the surviving, enriched
/// variants. `progress` is ticked once per variant traversing Stage 6.
#[instrument(level = "info", skip(config, cancel, progress), fields(target = %target.canonical()))]
pub async fn run(
    config: Arc<Config>,
    target: Target,
    cancel: watch::Receiver<bool>,
    progress: Option<Arc<indicatif::ProgressBar>>,
) -> PipelineReport {
    let target = Arc::new(target);

    // Stage 1 — Enumerate. One seed per active algorithm code; each
    // generator is itself handed the full active language/keyboard sets
    // (the cross-product happens inside the generator, which needs every
    // active language/keyboard available at once rather than one pair at
    // a time).
    let algorithm_ids: Vec<String> = config.active_algorithms().iter().map(|a| a.id().to_string()).collect();
    let (seed_tx, seed_rx) = mpsc::channel::<String>(algorithm_ids.len().max(1));
    for id in &algorithm_ids {
        if seed_tx.send(id.clone()).await.is_err() {
            break;
        }
    }
    drop(seed_tx);

    // Stage 2 — Generate.
    let (gen_tx, mut gen_rx) = mpsc::channel::<Variant>(config.concurrency);
    let generate_done = spawn_generate_workers(Arc::clone(&config), Arc::clone(&target), seed_rx, gen_tx, cancel.clone());

    // Stage 3 — Deduplicate. Single consumer, owns the map exclusively.
    let mut dedup: BTreeMap<String, Variant> = BTreeMap::new();
    while let Some(variant) = gen_rx.recv().await {
        dedup.entry(variant.fqdn()).or_insert(variant);
    }
    generate_done.await.ok();

    let total = dedup.len();
    debug!(total, "deduplicated candidate set");
    let mut variants: Vec<Variant> = Vec::with_capacity(total);
    for (id, (_, mut variant)) in dedup.into_iter().enumerate() {
        variant.id = (id + 1) as u64;
        variants.push(variant);
    }

    // Stage 4 — Enrich.
    let (input_tx, input_rx) = mpsc::channel::<Variant>(config.concurrency);
    for variant in variants {
        if input_tx.send(variant).await.is_err() {
            break;
        }
    }
    drop(input_tx);

    let (enrich_tx, mut enrich_rx) = mpsc::channel::<Variant>(config.concurrency);
    let enrich_done =
        spawn_enrich_workers(Arc::clone(&config), Arc::clone(&target), input_rx, enrich_tx, cancel.clone());

    let mut enriched = Vec::with_capacity(total);
    while let Some(variant) = enrich_rx.recv().await {
        // Stage 5 — Filter, applied per variant as it arrives.
        if config.online_only && !variant.live {
            continue;
        }

        // Stage 6 — Progress, ticked once per variant as it traverses
        // this stage rather than in one batch after enrichment finishes.
        if let Some(bar) = &progress {
            bar.inc(1);
        }

        enriched.push(variant);
    }
    enrich_done.await.ok();

    info!(survivors = enriched.len(), total, "pipeline run complete");
    PipelineReport { variants: enriched, total }
}

fn spawn_generate_workers(
    config: Arc<Config>,
    target: Arc<Target>,
    seed_rx: mpsc::Receiver<String>,
    gen_tx: mpsc::Sender<Variant>,
    cancel: watch::Receiver<bool>,
) -> tokio::task::JoinHandle<()> {
    let seed_rx = Arc::new(Mutex::new(seed_rx));
    let languages = Arc::new(config.active_languages());
    let keyboards = Arc::new(config.active_keyboards());
    let mut handles = Vec::with_capacity(config.concurrency);

    for _ in 0..config.concurrency.max(1) {
        let seed_rx = Arc::clone(&seed_rx);
        let gen_tx = gen_tx.clone();
        let target = Arc::clone(&target);
        let languages = Arc::clone(&languages);
        let keyboards = Arc::clone(&keyboards);
        let config = Arc::clone(&config);
        let mut cancel = cancel.clone();

        handles.push(tokio::spawn(async move {
            loop {
                if *cancel.borrow() {
                    break;
                }
                let id = {
                    let mut rx = seed_rx.lock().await;
                    rx.recv().await
                };
                let Some(id) = id else { break };
                let Some(algo) = config.algorithm(&id) else { continue };

                for variant in algo.exec(&target, &languages, &keyboards) {
                    if gen_tx.send(variant).await.is_err() {
                        return;
                    }
                }
            }
        }));
    }

    drop(gen_tx);
    tokio::spawn(async move {
        for h in handles {
            let _ = h.await;
        }
    })
}

fn spawn_enrich_workers(
    config: Arc<Config>,
    target: Arc<Target>,
    input_rx: mpsc::Receiver<Variant>,
    enrich_tx: mpsc::Sender<Variant>,
    cancel: watch::Receiver<bool>,
) -> tokio::task::JoinHandle<()> {
    let input_rx = Arc::new(Mutex::new(input_rx));
    let collector_ids: Vec<String> = config.active_collectors().iter().map(|c| c.id().to_string()).collect();
    let mut handles = Vec::with_capacity(config.concurrency);

    for _ in 0..config.concurrency.max(1) {
        let input_rx = Arc::clone(&input_rx);
        let enrich_tx = enrich_tx.clone();
        let collector_ids = collector_ids.clone();
        let config = Arc::clone(&config);
        let target = Arc::clone(&target);
        let mut cancel = cancel.clone();

        handles.push(tokio::spawn(async move {
            let ctx = config.collector_context((*target).clone());

            loop {
                if *cancel.borrow() {
                    break;
                }
                let variant = {
                    let mut rx = input_rx.lock().await;
                    rx.recv().await
                };
                let Some(mut variant) = variant else { break };

                for id in &collector_ids {
                    let Some(collector) = config.collector(id) else { continue };
                    let key = (variant.fqdn(), collector.id().to_string());

                    if !config.no_cache {
                        match config.cache.read(&key) {
                            Ok(Some(cached)) => {
                                variant.meta.extend(cached.meta.clone());
                                variant.data.extend(cached.data.clone());
                                variant.live = variant.live || cached.live;
                                variant.cached = true;
                                continue;
                            }
                            Ok(None) => {}
                            Err(err) => {
                                tracing::warn!(collector = collector.id(), %err, "cache read failed, treating as a miss");
                            }
                        }
                    }

                    variant = collector.exec(variant, &ctx).await;

                    if !config.no_cache {
                        if let Err(err) = config.cache.write(key, variant.clone()) {
                            tracing::warn!(collector = collector.id(), %err, "cache write failed");
                        }
                    }

                    if !config.delay.is_zero() {
                        let factor: f64 = rand::thread_rng().gen_range(0.0..1.0);
                        tokio::time::sleep(config.delay.mul_f64(factor)).await;
                    }
                }

                if enrich_tx.send(variant).await.is_err() {
                    return;
                }
            }
        }));
    }

    drop(enrich_tx);
    tokio::spawn(async move {
        for h in handles {
            let _ = h.await;
        }
    })
}
