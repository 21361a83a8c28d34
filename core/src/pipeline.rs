//! # Connectivity Pipeline
//!
//! Implements the single use case of `hacknet`: one run from network creation
//! to teardown.
//!
//! ```text
//! Init -> NetworkCreated -> FleetProvisioned -> Probed -> Aggregated -> Teardown -> Done
//!                 \__________________ Failed ___________________________/
//! ```
//!
//! Once the network exists it is owned by a [`RunScope`](scope::RunScope) that
//! every created container joins. The scope is moved into teardown after the
//! body finishes, fails or panics, so release happens exactly once and the
//! verdict is settled before any cleanup step can fail.

use std::any::Any;
use std::panic::AssertUnwindSafe;
use std::sync::Arc;

use futures_util::FutureExt;

use hacknet_common::config::Config;
use hacknet_common::events::{EventSink, PipelineEvent, Stage};
use hacknet_common::resources::container::{ATTACKER_NAME, target_name};
use hacknet_common::runtime::ContainerRuntime;

use crate::error::PipelineError;
use crate::probe;

mod report;
mod scope;
mod teardown;

pub use report::{CleanupReport, ProvisionFailure, RunReport};
use scope::RunScope;

/// Application service running the connectivity pipeline.
///
/// Holds the runtime and the event sink it reports through. A service may run
/// any number of pipelines, one after the other.
pub struct PipelineService {
    runtime: Arc<dyn ContainerRuntime>,
    sink: Arc<dyn EventSink>,
    cfg: Config,
}

impl PipelineService {
    pub fn new(runtime: Arc<dyn ContainerRuntime>, sink: Arc<dyn EventSink>, cfg: Config) -> Self {
        Self { runtime, sink, cfg }
    }

    /// Runs the whole pipeline for `targets_count` targets.
    ///
    /// Never fails: every error ends up in the returned [`RunReport`], and
    /// everything created along the way has been released by the time it
    /// returns.
    pub async fn run(&self, targets_count: usize) -> RunReport {
        let mut report = RunReport::new(targets_count);
        self.enter(Stage::Init);

        let network = match self.runtime.create_network(&self.cfg.network_name).await {
            Ok(network) => network,
            Err(err) => {
                self.emit(PipelineEvent::NetworkFailed {
                    name: self.cfg.network_name.clone(),
                    reason: err.to_string(),
                });
                report.error = Some(PipelineError::Network(err));
                self.enter(Stage::Failed);
                self.enter(Stage::Done);
                return report;
            }
        };

        self.emit(PipelineEvent::NetworkCreated(network.clone()));
        report.network = Some(network.clone());
        self.enter(Stage::NetworkCreated);

        let mut scope = RunScope::new(network);
        let body = AssertUnwindSafe(self.execute(&mut scope, &mut report))
            .catch_unwind()
            .await;

        report.success = match body {
            Ok(Ok(success)) => success,
            Ok(Err(err)) => {
                self.abort(&mut report, err);
                false
            }
            Err(panic) => {
                self.abort(&mut report, PipelineError::Panicked(panic_message(&*panic)));
                false
            }
        };

        self.enter(Stage::Teardown);
        report.cleanup = self.teardown(scope).await;
        self.enter(Stage::Done);
        report
    }

    /// Provisions the fleet, probes it and computes the verdict.
    async fn execute(
        &self,
        scope: &mut RunScope,
        report: &mut RunReport,
    ) -> Result<bool, PipelineError> {
        let network_name = scope.network().name.clone();

        let attacker = match self.runtime.run_container(ATTACKER_NAME, &network_name, None).await {
            Ok(attacker) => attacker,
            Err(err) => {
                self.emit(PipelineEvent::ContainerFailed {
                    name: ATTACKER_NAME.to_string(),
                    reason: err.to_string(),
                });
                return Err(PipelineError::Attacker(err));
            }
        };
        self.emit(PipelineEvent::ContainerStarted(attacker.clone()));
        scope.adopt(attacker.clone());

        for index in 0..report.requested {
            let name = target_name(index);
            match self.runtime.run_container(&name, &network_name, None).await {
                Ok(target) => {
                    self.emit(PipelineEvent::ContainerStarted(target.clone()));
                    scope.adopt(target.clone());
                    report.targets.push(target);
                }
                Err(err) => {
                    self.emit(PipelineEvent::ContainerFailed {
                        name: name.clone(),
                        reason: err.to_string(),
                    });
                    report.failures.push(ProvisionFailure {
                        name,
                        reason: err.to_string(),
                    });
                }
            }
        }
        self.enter(Stage::FleetProvisioned);

        for target in &report.targets {
            let result = match probe::probe(self.runtime.as_ref(), &attacker, target).await {
                Ok(result) => result,
                Err(err) => {
                    self.emit(PipelineEvent::ProbeErrored {
                        target: target.probe_address().to_string(),
                        reason: err.to_string(),
                    });
                    return Err(PipelineError::Probe(err));
                }
            };
            self.emit(PipelineEvent::ProbeFinished(result.clone()));
            report.probes.push(result);
        }
        self.enter(Stage::Probed);

        // An empty fleet is vacuously reachable.
        let success = report.probes.iter().all(|probe| probe.reachable);
        self.enter(Stage::Aggregated);
        self.emit(PipelineEvent::Verdict {
            success,
            probed: report.probes.len(),
        });
        Ok(success)
    }

    fn abort(&self, report: &mut RunReport, err: PipelineError) {
        self.emit(PipelineEvent::PipelineAborted {
            reason: err.to_string(),
        });
        report.error = Some(err);
        self.enter(Stage::Failed);
    }

    fn enter(&self, stage: Stage) {
        self.emit(PipelineEvent::StageEntered(stage));
    }

    fn emit(&self, event: PipelineEvent) {
        self.sink.emit(&event);
    }
}

fn panic_message(panic: &(dyn Any + Send)) -> String {
    if let Some(msg) = panic.downcast_ref::<&str>() {
        msg.to_string()
    } else if let Some(msg) = panic.downcast_ref::<String>() {
        msg.clone()
    } else {
        "unknown panic payload".to_string()
    }
}
