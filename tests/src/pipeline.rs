
use std::sync::Arc;

use hacknet_common::config::Config;
use hacknet_core::{PipelineService, RunReport};

use crate::support::{FakeRuntime, RecordingSink, quick_config};

/// Runs one pipeline against `runtime`, handing back the runtime and sink for inspection.
async fn run_with(
    runtime: FakeRuntime,
    cfg: Config,
    targets: usize,
) -> (RunReport, Arc<FakeRuntime>, Arc<RecordingSink>) {
    let runtime = Arc::new(runtime);
    let sink = Arc::new(RecordingSink::new());
    let service = PipelineService::new(runtime.clone(), sink.clone(), cfg);

    let report = service.run(targets).await;
    (report, runtime, sink)
}

async fn run(runtime: FakeRuntime, targets: usize) -> (RunReport, Arc<FakeRuntime>, Arc<RecordingSink>) {
    run_with(runtime, quick_config(), targets).await
}
