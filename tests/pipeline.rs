//! End-to-end pipeline coverage: a real `Config` built from parsed CLI
//! args, driving `pipeline::run` against the live registries. Network
//! collectors are excluded (`-i ld`) so this stays hermetic.

use std::sync::Arc;

use clap::Parser;
use domtypo::cli::Cli;
use domtypo::config::Config;
use domtypo::pipeline::run;
use tokio::sync::watch;

fn build(args: &[&str]) -> Arc<Config> {
    let mut full = vec!["domtypo"];
    full.extend_from_slice(args);
    Arc::new(Config::build(&Cli::parse_from(full)).unwrap())
}

#[tokio::test]
async fn pipeline_determinism_with_single_worker() {
    let config = build(&["-t", "co,cs", "-i", "ld", "-c", "1", "google.com"]);
    let (_tx, rx) = watch::channel(false);

    let a = run(Arc::clone(&config), domtypo::domain::parse("google.com").unwrap(), rx.clone(), None).await;
    let b = run(config, domtypo::domain::parse("google.com").unwrap(), rx, None).await;

    let mut a_set: Vec<String> = a.variants.iter().map(|v| v.fqdn()).collect();
    let mut b_set: Vec<String> = b.variants.iter().map(|v| v.fqdn()).collect();
    a_set.sort();
    b_set.sort();
    assert_eq!(a_set, b_set);
}

#[tokio::test]
async fn online_only_filters_to_live_variants() {
    let config = build(&["-t", "co", "-i", "ld", "--online", "google.com"]);
    let (_tx, rx) = watch::channel(false);
    let report = run(config, domtypo::domain::parse("google.com").unwrap(), rx, None).await;
    assert!(report.variants.iter().all(|v| v.live), "online-only run emitted a non-live variant");
}

#[tokio::test]
async fn every_surviving_variant_has_a_unique_sequential_id() {
    let config = build(&["-t", "co,cs,vs", "-i", "ld", "google.com"]);
    let (_tx, rx) = watch::channel(false);
    let report = run(config, domtypo::domain::parse("google.com").unwrap(), rx, None).await;

    let mut ids: Vec<u64> = report.variants.iter().map(|v| v.id).collect();
    ids.sort_unstable();
    let expected: Vec<u64> = (1..=ids.len() as u64).collect();
    assert_eq!(ids, expected);
}

#[tokio::test]
async fn cancelling_mid_run_bounds_the_enriched_count() {
    // One worker, a per-collector delay, and a label that explodes into a
    // few thousand candidates under `-t all`: enrichment can only get
    // through a handful of variants before the cancel fires.
    let config = build(&[
        "-t",
        "all",
        "-i",
        "ld",
        "-c",
        "1",
        "--delay",
        "20",
        "internationalization.com",
    ]);
    let (tx, rx) = watch::channel(false);
    let target = domtypo::domain::parse("internationalization.com").unwrap();

    let handle = tokio::spawn(run(Arc::clone(&config), target, rx, None));
    tokio::time::sleep(std::time::Duration::from_millis(30)).await;
    tx.send(true).unwrap();

    let report = handle.await.unwrap();
    assert!(
        report.variants.len() < report.total,
        "cancellation did not bound the enriched count: {} of {} variants enriched",
        report.variants.len(),
        report.total
    );
}
