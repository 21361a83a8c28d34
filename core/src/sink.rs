//! Default [`EventSink`]: turns pipeline events into structured `tracing` events.

use tracing::{debug, error, info, warn};

use hacknet_common::events::{EventSink, PipelineEvent};
use hacknet_common::success;

#[derive(Clone, Copy, Debug, Default)]
pub struct TracingSink;

impl EventSink for TracingSink {
    fn emit(&self, event: &PipelineEvent) {
        match event {
            PipelineEvent::StageEntered(stage) => debug!(%stage, "Entered stage"),
            PipelineEvent::NetworkCreated(network) => success!(
                network = %network.name,
                id = network.short_id(),
                driver = %network.driver,
                "Created network"
            ),
            PipelineEvent::NetworkFailed { name, reason } => {
                error!(network = %name, "Failed to create network: {reason}")
            }
            PipelineEvent::ContainerStarted(container) => info!(
                container = container.probe_address(),
                hostname = %container.hostname,
                id = container.short_id(),
                "Started running container"
            ),
            PipelineEvent::ContainerFailed { name, reason } => {
                error!(container = %name, "Failed to run container: {reason}")
            }
            PipelineEvent::ProbeFinished(probe) if probe.reachable => {
                success!(host = %probe.target, "Ping from attacker to {} succeeded", probe.target)
            }
            PipelineEvent::ProbeFinished(probe) => {
                warn!(host = %probe.target, "Ping from attacker to {} failed", probe.target)
            }
            PipelineEvent::ProbeErrored { target, reason } => {
                error!(host = %target, "Failed to ping {target}: {reason}")
            }
            PipelineEvent::PipelineAborted { reason } => {
                error!("Error encountered while running pipeline: {reason}")
            }
            PipelineEvent::Verdict { success, probed } => info!(
                probed,
                "Ping Test Results: {}",
                if *success { "Successful" } else { "Failed" }
            ),
            PipelineEvent::ContainerRemoved(container) => info!(
                container = container.probe_address(),
                "Successfully removed container"
            ),
            PipelineEvent::CleanupFailed { reason } => warn!("Cleanup step failed: {reason}"),
            PipelineEvent::AwaitingEndpoints { network, remaining } => info!(
                network = %network,
                remaining,
                "Waiting for network to clear active endpoints..."
            ),
            PipelineEvent::EndpointsCleared { network, waited } => {
                debug!(network = %network, ?waited, "Network has no active endpoints")
            }
            PipelineEvent::NetworkRemoved(network) => {
                info!(network = %network.name, "Removed network")
            }
            PipelineEvent::NetworkKept { network, reason } => {
                error!(network = %network, "Network could not be removed: {reason}")
            }
        }
    }
}
