use std::sync::Arc;
use std::time::Instant;

use anyhow::Context;
use tracing::{Instrument, info_span};

use hacknet_common::config::Config;
use hacknet_core::runtime::DockerRuntime;
use hacknet_core::{PipelineService, RunReport};

use crate::terminal::{print, sink::TerminalSink};

/// Connects to the local daemon and runs one pipeline.
///
/// Only set-up problems are errors here; everything that happens once the
/// pipeline starts is part of the returned report.
pub async fn run(targets: u32, cfg: &Config, quiet: bool) -> anyhow::Result<RunReport> {
    let span = info_span!("run", network = %cfg.network_name);
    execute(targets, cfg, quiet).instrument(span).await
}

async fn execute(targets: u32, cfg: &Config, quiet: bool) -> anyhow::Result<RunReport> {
    print::header("preparing runtime", quiet);
    let runtime =
        DockerRuntime::connect(cfg).context("Failed to connect to the container daemon")?;
    runtime
        .prepare()
        .await
        .with_context(|| format!("Container daemon is not ready to run {}", cfg.image))?;

    let service = PipelineService::new(
        Arc::new(runtime),
        Arc::new(TerminalSink::new(quiet)),
        cfg.clone(),
    );

    let start_time = Instant::now();
    let report = service.run(targets as usize).await;
    print::summary(&report, start_time.elapsed(), quiet);

    Ok(report)
}
