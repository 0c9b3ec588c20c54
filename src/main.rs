use std::process::ExitCode;
use std::sync::Arc;

use clap::Parser;
use tracing::info;
use tracing_subscriber::prelude::*;

use domtypo::cli::Cli;
use domtypo::config::Config;
use domtypo::error::Error;
use domtypo::{domain, output, pipeline};

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    let filter = if cli.verbose {
        tracing_subscriber::EnvFilter::new("debug")
    } else {
        tracing_subscriber::EnvFilter::from_default_env()
            .add_directive(tracing_subscriber::filter::LevelFilter::INFO.into())
    };
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_target(false))
        .with(filter)
        .init();

    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("domtypo: {e}");
            ExitCode::from(e.exit_code() as u8)
        }
    }
}

async fn run(cli: Cli) -> Result<(), Error> {
    let config = Arc::new(Config::build(&cli)?);
    let sink = output::build(&cli.format)?;
    let writer = output::destination(&cli.file)?;

    let progress = if cli.progress {
        let bar = indicatif::ProgressBar::new_spinner();
        bar.set_style(
            indicatif::ProgressStyle::default_spinner()
                .template("{spinner} {msg} ({pos} variants)")
                .expect("valid progress template"),
        );
        Some(Arc::new(bar))
    } else {
        None
    };

    let (cancel_tx, cancel_rx) = tokio::sync::watch::channel(false);
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            info!("ctrl-c received, cancelling");
            let _ = cancel_tx.send(true);
        }
    });

    let mut all_variants = Vec::new();
    for raw_target in &cli.targets {
        if *cancel_rx.borrow() {
            break;
        }
        let target = domain::parse(raw_target)?;
        info!(target = %target.canonical(), "starting run");
        if let Some(bar) = &progress {
            bar.set_message(target.canonical());
        }
        let report = pipeline::run(Arc::clone(&config), target, cancel_rx.clone(), progress.clone()).await;
        all_variants.extend(report.variants);
    }

    if let Some(bar) = &progress {
        bar.finish_and_clear();
    }

    output::emit(sink, writer, &all_variants)
}
