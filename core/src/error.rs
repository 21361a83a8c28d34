use std::time::Duration;

use hacknet_common::error::RuntimeError;
use thiserror::Error;

/// Failures that end the body of a run early.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum PipelineError {
    #[error(transparent)]
    Network(RuntimeError),

    #[error("attacker unavailable: {0}")]
    Attacker(RuntimeError),

    #[error("probe failed: {0}")]
    Probe(RuntimeError),

    #[error("pipeline panicked: {0}")]
    Panicked(String),
}

/// Failures during teardown. Reported, never folded into the verdict.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CleanupError {
    #[error("network {network} still had active endpoints after {waited:?}, removal skipped")]
    EndpointTimeout { network: String, waited: Duration },

    #[error(transparent)]
    NetworkRemove(RuntimeError),

    #[error(transparent)]
    ContainerRemove(RuntimeError),
}
