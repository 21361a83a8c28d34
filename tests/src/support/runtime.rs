//! In-memory stand-in for a container daemon.
//!
//! Behaves like the Docker engine where the pipeline can tell the difference:
//! names come back with a leading `/`, a network refuses removal while
//! endpoints are attached, and exec needs a running container.

use std::collections::{BTreeMap, HashSet};
use std::sync::{Mutex, MutexGuard, PoisonError};

use async_trait::async_trait;

use hacknet_common::error::{Result, RuntimeError};
use hacknet_common::resources::{Container, Network};
use hacknet_common::runtime::ContainerRuntime;

/// One call received by the runtime, in arrival order.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Call {
    CreateNetwork(String),
    RemoveNetwork(String),
    RunContainer(String),
    StopContainer(String),
    RemoveContainer(Option<String>),
    ListContainers(String),
    Exec { container: String, command: Vec<String> },
}

#[derive(Default)]
struct State {
    next_id: u64,
    /// Networks by id.
    networks: BTreeMap<String, Network>,
    /// Containers by id.
    containers: BTreeMap<String, Container>,
    /// Attached container ids by network id.
    endpoints: BTreeMap<String, Vec<String>>,
    calls: Vec<Call>,
    warnings: Vec<String>,
}

impl State {
    fn next_id(&mut self, kind: &str) -> String {
        self.next_id += 1;
        format!("{kind}{:012x}", self.next_id)
    }
}

#[derive(Default)]
pub struct FakeRuntime {
    state: Mutex<State>,
    fail_network_create: bool,
    fail_network_remove: bool,
    failing_containers: HashSet<String>,
    stopped_containers: HashSet<String>,
    lossy_hosts: HashSet<String>,
    exec_errors: HashSet<String>,
    sticky_endpoints: bool,
    panic_on_exec: bool,
}

impl FakeRuntime {
    pub fn new() -> Self {
        Self::default()
    }

    /// Network creation fails as if the daemon were unreachable.
    pub fn failing_network(mut self) -> Self {
        self.fail_network_create = true;
        self
    }

    /// Network removal is rejected by the daemon.
    pub fn failing_network_removal(mut self) -> Self {
        self.fail_network_remove = true;
        self
    }

    /// Containers named `name` fail to start.
    pub fn failing_container(mut self, name: &str) -> Self {
        self.failing_containers.insert(name.to_string());
        self
    }

    /// Containers named `name` exit right after starting.
    pub fn stopped(mut self, name: &str) -> Self {
        self.stopped_containers.insert(name.to_string());
        self
    }

    /// Pings to `host` lose every packet.
    pub fn lossy(mut self, host: &str) -> Self {
        self.lossy_hosts.insert(host.to_string());
        self
    }

    /// Exec calls pinging `host` fail at the daemon.
    pub fn exec_error(mut self, host: &str) -> Self {
        self.exec_errors.insert(host.to_string());
        self
    }

    /// Removed containers stay attached to their network forever.
    pub fn sticky_endpoints(mut self) -> Self {
        self.sticky_endpoints = true;
        self
    }

    pub fn panic_on_exec(mut self) -> Self {
        self.panic_on_exec = true;
        self
    }

    fn state(&self) -> MutexGuard<'_, State> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn calls(&self) -> Vec<Call> {
        self.state().calls.clone()
    }

    pub fn count(&self, predicate: impl Fn(&Call) -> bool) -> usize {
        self.state().calls.iter().filter(|call| predicate(call)).count()
    }

    /// Hosts pinged, in order.
    pub fn pinged(&self) -> Vec<String> {
        self.state()
            .calls
            .iter()
            .filter_map(|call| match call {
                Call::Exec { command, .. } => command.last().cloned(),
                _ => None,
            })
            .collect()
    }

    /// Warnings the runtime logged instead of failing.
    pub fn warnings(&self) -> Vec<String> {
        self.state().warnings.clone()
    }

    pub fn live_containers(&self) -> usize {
        self.state().containers.len()
    }

    pub fn live_networks(&self) -> usize {
        self.state().networks.len()
    }
}

#[async_trait]
impl ContainerRuntime for FakeRuntime {
    async fn create_network(&self, name: &str) -> Result<Network> {
        let mut state = self.state();
        state.calls.push(Call::CreateNetwork(name.to_string()));

        if self.fail_network_create {
            return Err(RuntimeError::NetworkCreate {
                name: name.to_string(),
                reason: "daemon unreachable".to_string(),
            });
        }
        if state.networks.values().any(|net| net.name == name) {
            return Err(RuntimeError::NetworkCreate {
                name: name.to_string(),
                reason: "network with name already exists".to_string(),
            });
        }

        let id = state.next_id("net");
        let network = Network::new(id.clone(), name);
        state.networks.insert(id.clone(), network.clone());
        state.endpoints.insert(id, Vec::new());
        Ok(network)
    }

    async fn remove_network(&self, network: &Network) -> Result<()> {
        let mut state = self.state();
        state.calls.push(Call::RemoveNetwork(network.name.clone()));

        if self.fail_network_remove {
            return Err(RuntimeError::NetworkRemove {
                network: network.name.clone(),
                reason: "rejected by daemon".to_string(),
            });
        }
        let attached = state.endpoints.get(&network.id).map_or(0, Vec::len);
        if attached > 0 {
            return Err(RuntimeError::NetworkRemove {
                network: network.name.clone(),
                reason: format!("network has {attached} active endpoints"),
            });
        }

        state.networks.remove(&network.id);
        state.endpoints.remove(&network.id);
        Ok(())
    }

    async fn run_container(
        &self,
        name: &str,
        network_name: &str,
        hostname: Option<&str>,
    ) -> Result<Container> {
        let mut state = self.state();
        state.calls.push(Call::RunContainer(name.to_string()));

        if self.failing_containers.contains(name) {
            return Err(RuntimeError::ContainerCreate {
                name: name.to_string(),
                reason: "image not found".to_string(),
            });
        }
        let Some(network_id) = state
            .networks
            .values()
            .find(|net| net.name == network_name)
            .map(|net| net.id.clone())
        else {
            return Err(RuntimeError::ContainerCreate {
                name: name.to_string(),
                reason: format!("network {network_name} not found"),
            });
        };

        let id = state.next_id("ctr");
        let container = Container {
            id: id.clone(),
            name: format!("/{name}"),
            hostname: hostname.unwrap_or(name).to_string(),
            network: network_name.to_string(),
            running: !self.stopped_containers.contains(name),
        };
        state.containers.insert(id.clone(), container.clone());
        state.endpoints.entry(network_id).or_default().push(id);
        Ok(container)
    }

    async fn stop_container(&self, container: &Container) -> Result<()> {
        let mut state = self.state();
        state
            .calls
            .push(Call::StopContainer(container.probe_address().to_string()));

        if let Some(existing) = state.containers.get_mut(&container.id) {
            existing.running = false;
        }
        Ok(())
    }

    async fn remove_container(&self, container: Option<&Container>) -> Result<()> {
        let mut state = self.state();
        state.calls.push(Call::RemoveContainer(
            container.map(|c| c.probe_address().to_string()),
        ));

        let Some(container) = container else {
            state
                .warnings
                .push("no container given for removal".to_string());
            return Ok(());
        };
        state.containers.remove(&container.id);
        if !self.sticky_endpoints {
            for attached in state.endpoints.values_mut() {
                attached.retain(|id| *id != container.id);
            }
        }
        Ok(())
    }

    async fn list_containers(&self, network: &Network) -> Result<Vec<Container>> {
        let mut state = self.state();
        state.calls.push(Call::ListContainers(network.name.clone()));

        let Some(attached) = state.endpoints.get(&network.id) else {
            return Err(RuntimeError::Inspect {
                subject: format!("network {}", network.name),
                reason: "no such network".to_string(),
            });
        };

        // Sticky endpoints may outlive their container, like a stuck veth.
        Ok(attached
            .iter()
            .map(|id| {
                state.containers.get(id).cloned().unwrap_or_else(|| Container {
                    id: id.clone(),
                    name: id.clone(),
                    hostname: id.clone(),
                    network: network.name.clone(),
                    running: false,
                })
            })
            .collect())
    }

    async fn exec_probe(&self, container: &Container, command: &[String]) -> Result<String> {
        if self.panic_on_exec {
            panic!("exec exploded");
        }

        let mut state = self.state();
        state.calls.push(Call::Exec {
            container: container.probe_address().to_string(),
            command: command.to_vec(),
        });

        let exec_failed = |reason: &str| RuntimeError::Exec {
            container: container.probe_address().to_string(),
            reason: reason.to_string(),
        };

        let running = state
            .containers
            .get(&container.id)
            .is_some_and(|c| c.running);
        if !running {
            return Err(exec_failed("container is not running"));
        }

        let host = command.last().cloned().unwrap_or_default();
        if self.exec_errors.contains(&host) {
            return Err(exec_failed("exec create failed"));
        }

        let resolvable = state
            .containers
            .values()
            .any(|c| c.probe_address() == host && c.network == container.network);

        let output = if !resolvable {
            format!("ping: bad address '{host}'\n")
        } else if self.lossy_hosts.contains(&host) {
            format!(
                "PING {host} (172.18.0.9): 56 data bytes\n\n--- {host} ping statistics ---\n\
                 3 packets transmitted, 0 packets received, 100% packet loss\n"
            )
        } else {
            format!(
                "PING {host} (172.18.0.9): 56 data bytes\n\
                 64 bytes from 172.18.0.9: seq=0 ttl=64 time=0.090 ms\n\
                 64 bytes from 172.18.0.9: seq=1 ttl=64 time=0.112 ms\n\
                 64 bytes from 172.18.0.9: seq=2 ttl=64 time=0.087 ms\n\n\
                 --- {host} ping statistics ---\n\
                 3 packets transmitted, 3 packets received, 0% packet loss\n"
            )
        };
        Ok(output)
    }
}
