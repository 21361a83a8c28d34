//! Release of everything a run created.
//!
//! Containers go first, then the network once the daemon reports no attached
//! endpoints. Failures are collected, never propagated.

use std::collections::HashSet;
use std::time::Duration;

use tokio::time::{Instant, sleep};

use hacknet_common::events::PipelineEvent;
use hacknet_common::resources::{Container, Network};

use super::PipelineService;
use super::report::CleanupReport;
use super::scope::RunScope;
use crate::error::CleanupError;

impl PipelineService {
    pub(super) async fn teardown(&self, scope: RunScope) -> CleanupReport {
        let (network, owned) = scope.into_parts();
        let mut cleanup = CleanupReport::default();

        let attached = match self.runtime.list_containers(&network).await {
            Ok(attached) => attached,
            Err(err) => {
                self.emit(PipelineEvent::CleanupFailed {
                    reason: err.to_string(),
                });
                Vec::new()
            }
        };

        for container in members(owned, attached) {
            if let Err(err) = self.runtime.stop_container(&container).await {
                self.emit(PipelineEvent::CleanupFailed {
                    reason: err.to_string(),
                });
            }
            match self.runtime.remove_container(Some(&container)).await {
                Ok(()) => {
                    cleanup.removed.push(container.probe_address().to_string());
                    self.emit(PipelineEvent::ContainerRemoved(container));
                }
                Err(err) => {
                    self.emit(PipelineEvent::CleanupFailed {
                        reason: err.to_string(),
                    });
                    cleanup.errors.push(CleanupError::ContainerRemove(err));
                }
            }
        }

        match self.await_endpoints_cleared(&network).await {
            Ok(waited) => {
                self.emit(PipelineEvent::EndpointsCleared {
                    network: network.name.clone(),
                    waited,
                });
                match self.runtime.remove_network(&network).await {
                    Ok(()) => {
                        cleanup.network_removed = true;
                        self.emit(PipelineEvent::NetworkRemoved(network));
                    }
                    Err(err) => {
                        self.emit(PipelineEvent::CleanupFailed {
                            reason: err.to_string(),
                        });
                        cleanup.errors.push(CleanupError::NetworkRemove(err));
                    }
                }
            }
            Err(err) => {
                self.emit(PipelineEvent::NetworkKept {
                    network: network.name.clone(),
                    reason: err.to_string(),
                });
                cleanup.errors.push(err);
            }
        }

        cleanup
    }

    /// Polls the network until no endpoint is attached.
    ///
    /// A failed inspection counts as "not cleared yet". Nothing but the
    /// timeout ends the wait early.
    async fn await_endpoints_cleared(&self, network: &Network) -> Result<Duration, CleanupError> {
        let started = Instant::now();
        let deadline = started + self.cfg.endpoint_timeout;

        while Instant::now() < deadline {
            match self.runtime.list_containers(network).await {
                Ok(attached) if attached.is_empty() => return Ok(started.elapsed()),
                Ok(attached) => self.emit(PipelineEvent::AwaitingEndpoints {
                    network: network.name.clone(),
                    remaining: attached.len(),
                }),
                Err(err) => self.emit(PipelineEvent::CleanupFailed {
                    reason: err.to_string(),
                }),
            }
            sleep(self.cfg.poll_interval).await;
        }

        Err(CleanupError::EndpointTimeout {
            network: network.name.clone(),
            waited: self.cfg.endpoint_timeout,
        })
    }
}

/// Containers the run created plus whatever else is attached, each once.
fn members(owned: Vec<Container>, attached: Vec<Container>) -> Vec<Container> {
    let mut seen = HashSet::new();
    owned
        .into_iter()
        .chain(attached)
        .filter(|container| seen.insert(container.id.clone()))
        .collect()
}
