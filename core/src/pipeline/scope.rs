use hacknet_common::resources::{Container, Network};

/// Resources owned by one run.
///
/// Created as soon as the network exists and consumed by teardown. Holding it
/// by value is what guarantees release happens once per run.
pub(crate) struct RunScope {
    network: Network,
    containers: Vec<Container>,
}

impl RunScope {
    pub(crate) fn new(network: Network) -> Self {
        Self {
            network,
            containers: Vec::new(),
        }
    }

    pub(crate) fn network(&self) -> &Network {
        &self.network
    }

    /// Records a container created during the run.
    pub(crate) fn adopt(&mut self, container: Container) {
        self.containers.push(container);
    }

    pub(crate) fn into_parts(self) -> (Network, Vec<Container>) {
        (self.network, self.containers)
    }
}
