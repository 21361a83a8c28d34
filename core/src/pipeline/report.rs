use hacknet_common::resources::{Container, Network, ProbeResult};

use crate::error::{CleanupError, PipelineError};

/// A target that could not be started.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ProvisionFailure {
    pub name: String,
    pub reason: String,
}

/// What teardown managed to release.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct CleanupReport {
    /// Names of the containers removed.
    pub removed: Vec<String>,
    pub network_removed: bool,
    pub errors: Vec<CleanupError>,
}

impl CleanupReport {
    pub fn is_clean(&self) -> bool {
        self.errors.is_empty()
    }
}

/// Everything a run produced.
///
/// `success` is settled before teardown starts; cleanup problems only ever
/// show up in `cleanup`.
#[derive(Clone, Debug, PartialEq)]
pub struct RunReport {
    /// Number of targets asked for.
    pub requested: usize,
    pub network: Option<Network>,
    /// Targets that were started, in index order.
    pub targets: Vec<Container>,
    pub failures: Vec<ProvisionFailure>,
    pub probes: Vec<ProbeResult>,
    pub error: Option<PipelineError>,
    pub success: bool,
    pub cleanup: CleanupReport,
}

impl RunReport {
    pub(crate) fn new(requested: usize) -> Self {
        Self {
            requested,
            network: None,
            targets: Vec::new(),
            failures: Vec::new(),
            probes: Vec::new(),
            error: None,
            success: false,
            cleanup: CleanupReport::default(),
        }
    }

    pub fn reachable(&self) -> usize {
        self.probes.iter().filter(|probe| probe.reachable).count()
    }

    /// Process exit code for this run: 0 on success, 1 otherwise.
    pub fn exit_code(&self) -> u8 {
        if self.success { 0 } else { 1 }
    }
}
