//! # Pipeline Events
//!
//! Everything the orchestrator reports goes through an [`EventSink`] handed to
//! it at construction, never through a global logger directly.

use std::fmt;
use std::time::Duration;

use crate::resources::{Container, Network, ProbeResult};

/// Stages of a single run, in the order they are entered.
///
/// `Failed` may be entered from any stage. It is followed by `Teardown` once the
/// network exists, and straight by `Done` when network creation failed.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Stage {
    Init,
    NetworkCreated,
    FleetProvisioned,
    Probed,
    Aggregated,
    Failed,
    Teardown,
    Done,
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Stage::Init => "init",
            Stage::NetworkCreated => "network created",
            Stage::FleetProvisioned => "fleet provisioned",
            Stage::Probed => "probed",
            Stage::Aggregated => "aggregated",
            Stage::Failed => "failed",
            Stage::Teardown => "teardown",
            Stage::Done => "done",
        };
        f.write_str(name)
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum PipelineEvent {
    StageEntered(Stage),
    NetworkCreated(Network),
    NetworkFailed { name: String, reason: String },
    ContainerStarted(Container),
    ContainerFailed { name: String, reason: String },
    ProbeFinished(ProbeResult),
    ProbeErrored { target: String, reason: String },
    /// The run body failed or panicked; teardown follows.
    PipelineAborted { reason: String },
    Verdict { success: bool, probed: usize },
    ContainerRemoved(Container),
    /// A teardown step failed. Never changes the verdict.
    CleanupFailed { reason: String },
    AwaitingEndpoints { network: String, remaining: usize },
    EndpointsCleared { network: String, waited: Duration },
    NetworkRemoved(Network),
    NetworkKept { network: String, reason: String },
}

/// Receiver for pipeline events.
pub trait EventSink: Send + Sync {
    fn emit(&self, event: &PipelineEvent);
}
