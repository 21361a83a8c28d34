//! A [`ContainerRuntime`] backed by the Docker engine API.
//!
//! Connects through the local defaults (`DOCKER_HOST`, or the unix socket).
//! Every call is a single request; retries and cleanup are the caller's job.

use async_trait::async_trait;
use bollard::Docker;
use bollard::errors::Error as DockerError;
use bollard::exec::{CreateExecOptions, StartExecOptions, StartExecResults};
use bollard::models::{ContainerCreateBody, HostConfig, NetworkContainer, NetworkCreateRequest};
use bollard::query_parameters::{
    CreateContainerOptionsBuilder, CreateImageOptionsBuilder, InspectContainerOptions,
    InspectNetworkOptions, RemoveContainerOptionsBuilder, StartContainerOptions,
    StopContainerOptionsBuilder,
};
use futures_util::StreamExt;
use tracing::{debug, info, warn};

use hacknet_common::config::Config;
use hacknet_common::error::{Result, RuntimeError};
use hacknet_common::resources::{Container, Network, NetworkDriver};
use hacknet_common::runtime::ContainerRuntime;

/// Placeholder workload: keeps the container alive until it is removed.
const KEEPALIVE_CMD: [&str; 3] = ["/bin/sh", "-c", "while true; do sleep 1; done"];

const NOT_MODIFIED: u16 = 304;
const NOT_FOUND: u16 = 404;

/// Whether the daemon answered `err` with one of `codes`.
fn is_status(err: &DockerError, codes: &[u16]) -> bool {
    matches!(
        err,
        DockerError::DockerResponseServerError { status_code, .. } if codes.contains(status_code)
    )
}

/// Member of `network` as reported by a network inspect.
///
/// Endpoints only exist for started containers.
fn endpoint_member(id: String, endpoint: NetworkContainer, network: &str) -> Container {
    let name = endpoint.name.unwrap_or_else(|| id.clone());
    Container {
        hostname: name.strip_prefix('/').unwrap_or(&name).to_string(),
        name,
        id,
        network: network.to_string(),
        running: true,
    }
}

/// Reason for a failed start, naming the container if it could not be discarded.
fn start_failure(err: &DockerError, id: &str, leftover: Option<&DockerError>) -> String {
    match leftover {
        None => err.to_string(),
        Some(discard) => format!("{err}; container {id} outlives the run: {discard}"),
    }
}

pub struct DockerRuntime {
    docker: Docker,
    image: String,
    stop_grace_secs: i32,
}

impl DockerRuntime {
    pub fn connect(cfg: &Config) -> Result<Self> {
        let docker = Docker::connect_with_local_defaults()
            .map_err(|e| RuntimeError::Connect(e.to_string()))?;

        Ok(Self {
            docker,
            image: cfg.image.clone(),
            stop_grace_secs: i32::try_from(cfg.stop_grace.as_secs()).unwrap_or(i32::MAX),
        })
    }

    /// Checks the daemon answers and pulls the workload image when it is missing.
    pub async fn prepare(&self) -> Result<()> {
        self.docker
            .ping()
            .await
            .map_err(|e| RuntimeError::Connect(e.to_string()))?;

        match self.docker.inspect_image(&self.image).await {
            Ok(_) => Ok(()),
            Err(e) if is_status(&e, &[NOT_FOUND]) => self.pull_image().await,
            Err(e) => Err(RuntimeError::Inspect {
                subject: format!("image {}", self.image),
                reason: e.to_string(),
            }),
        }
    }

    async fn pull_image(&self) -> Result<()> {
        info!(image = %self.image, "Pulling workload image");
        let options = CreateImageOptionsBuilder::default()
            .from_image(&self.image)
            .build();

        let mut progress = self.docker.create_image(Some(options), None, None);
        while let Some(update) = progress.next().await {
            let update = update.map_err(|e| RuntimeError::ImagePull {
                image: self.image.clone(),
                reason: e.to_string(),
            })?;
            if let Some(status) = update.status {
                debug!(image = %self.image, "{status}");
            }
        }
        Ok(())
    }

    /// Removes a container that was created but never started.
    async fn discard(&self, id: &str) -> std::result::Result<(), DockerError> {
        let options = RemoveContainerOptionsBuilder::default().force(true).build();
        self.docker.remove_container(id, Some(options)).await
    }

    async fn is_running(&self, id: &str) -> std::result::Result<bool, DockerError> {
        let inspected = self
            .docker
            .inspect_container(id, None::<InspectContainerOptions>)
            .await?;
        Ok(inspected.state.and_then(|s| s.running).unwrap_or(false))
    }
}

#[async_trait]
impl ContainerRuntime for DockerRuntime {
    async fn create_network(&self, name: &str) -> Result<Network> {
        let request = NetworkCreateRequest {
            name: name.to_string(),
            driver: Some(NetworkDriver::Bridge.as_str().to_string()),
            ..Default::default()
        };

        let created = self
            .docker
            .create_network(request)
            .await
            .map_err(|e| RuntimeError::NetworkCreate {
                name: name.to_string(),
                reason: e.to_string(),
            })?;

        if created.id.is_empty() {
            return Err(RuntimeError::NetworkCreate {
                name: name.to_string(),
                reason: "daemon returned no network id".to_string(),
            });
        }
        Ok(Network::new(created.id, name))
    }

    async fn remove_network(&self, network: &Network) -> Result<()> {
        match self.docker.remove_network(&network.id).await {
            Ok(()) => Ok(()),
            Err(e) if is_status(&e, &[NOT_FOUND]) => {
                debug!(network = %network.name, "Network already gone");
                Ok(())
            }
            Err(e) => Err(RuntimeError::NetworkRemove {
                network: network.name.clone(),
                reason: e.to_string(),
            }),
        }
    }

    async fn run_container(
        &self,
        name: &str,
        network_name: &str,
        hostname: Option<&str>,
    ) -> Result<Container> {
        let hostname = hostname.unwrap_or(name);
        let failed = |e: DockerError| RuntimeError::ContainerCreate {
            name: name.to_string(),
            reason: e.to_string(),
        };

        let options = CreateContainerOptionsBuilder::default().name(name).build();
        let body = ContainerCreateBody {
            image: Some(self.image.clone()),
            hostname: Some(hostname.to_string()),
            cmd: Some(KEEPALIVE_CMD.iter().map(|s| s.to_string()).collect()),
            host_config: Some(HostConfig {
                network_mode: Some(network_name.to_string()),
                ..Default::default()
            }),
            ..Default::default()
        };

        let id = self
            .docker
            .create_container(Some(options), body)
            .await
            .map_err(failed)?
            .id;

        if let Err(e) = self
            .docker
            .start_container(&id, None::<StartContainerOptions>)
            .await
        {
            let leftover = self.discard(&id).await.err();
            if let Some(discard) = &leftover {
                warn!(id = %id, "Failed to discard half-created container: {discard}");
            }
            return Err(RuntimeError::ContainerCreate {
                name: name.to_string(),
                reason: start_failure(&e, &id, leftover.as_ref()),
            });
        }

        let (name, running) = match self
            .docker
            .inspect_container(&id, None::<InspectContainerOptions>)
            .await
        {
            Ok(inspected) => (
                inspected.name.unwrap_or_else(|| name.to_string()),
                inspected.state.and_then(|s| s.running).unwrap_or(false),
            ),
            // Started successfully, so report it as running under the requested name.
            Err(e) => {
                debug!(container = name, "Inspect after start failed: {e}");
                (name.to_string(), true)
            }
        };

        debug!(container = %name, id = %id, "Started running container");
        Ok(Container {
            id,
            name,
            hostname: hostname.to_string(),
            network: network_name.to_string(),
            running,
        })
    }

    async fn stop_container(&self, container: &Container) -> Result<()> {
        let options = StopContainerOptionsBuilder::default()
            .t(self.stop_grace_secs)
            .build();

        match self.docker.stop_container(&container.id, Some(options)).await {
            Ok(()) => Ok(()),
            // 304: already stopped
            Err(e) if is_status(&e, &[NOT_MODIFIED, NOT_FOUND]) => Ok(()),
            Err(e) => Err(RuntimeError::ContainerStop {
                container: container.probe_address().to_string(),
                reason: e.to_string(),
            }),
        }
    }

    async fn remove_container(&self, container: Option<&Container>) -> Result<()> {
        let Some(container) = container else {
            warn!("No container given for removal, nothing to do");
            return Ok(());
        };

        let options = RemoveContainerOptionsBuilder::default().force(true).build();
        match self
            .docker
            .remove_container(&container.id, Some(options))
            .await
        {
            Ok(()) => Ok(()),
            Err(e) if is_status(&e, &[NOT_FOUND]) => Ok(()),
            Err(e) => Err(RuntimeError::ContainerRemove {
                container: container.probe_address().to_string(),
                reason: e.to_string(),
            }),
        }
    }

    async fn list_containers(&self, network: &Network) -> Result<Vec<Container>> {
        let inspected = self
            .docker
            .inspect_network(&network.id, None::<InspectNetworkOptions>)
            .await
            .map_err(|e| RuntimeError::Inspect {
                subject: format!("network {}", network.name),
                reason: e.to_string(),
            })?;

        let members = inspected
            .containers
            .unwrap_or_default()
            .into_iter()
            .map(|(id, endpoint)| endpoint_member(id, endpoint, &network.name))
            .collect();
        Ok(members)
    }

    async fn exec_probe(&self, container: &Container, command: &[String]) -> Result<String> {
        let exec_failed = |reason: String| RuntimeError::Exec {
            container: container.probe_address().to_string(),
            reason,
        };

        let running = self
            .is_running(&container.id)
            .await
            .map_err(|e| exec_failed(e.to_string()))?;
        if !running {
            return Err(exec_failed("container is not running".to_string()));
        }

        let options = CreateExecOptions {
            attach_stdout: Some(true),
            attach_stderr: Some(true),
            cmd: Some(command.to_vec()),
            ..Default::default()
        };
        let exec = self
            .docker
            .create_exec(&container.id, options)
            .await
            .map_err(|e| exec_failed(e.to_string()))?;

        let mut captured = String::new();
        match self
            .docker
            .start_exec(&exec.id, None::<StartExecOptions>)
            .await
            .map_err(|e| exec_failed(e.to_string()))?
        {
            StartExecResults::Attached { mut output, .. } => {
                while let Some(chunk) = output.next().await {
                    let chunk = chunk.map_err(|e| exec_failed(e.to_string()))?;
                    captured.push_str(&chunk.to_string());
                }
            }
            StartExecResults::Detached => {
                return Err(exec_failed("exec started detached, no output".to_string()));
            }
        }

        debug!(container = %container.probe_address(), command = ?command, "Exec finished");
        Ok(captured)
    }
}
