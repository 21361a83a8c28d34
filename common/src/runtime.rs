//! # Runtime Port
//!
//! The contract for talking to a container daemon. The orchestrator depends on
//! this trait only; `hacknet-core` ships the Docker implementation and the
//! integration tests ship an in-memory one.
//!
//! Implementations carry no retry or cleanup policy and keep no references to
//! the resources they hand out.

use async_trait::async_trait;

use crate::error::Result;
use crate::resources::{Container, Network};

#[async_trait]
pub trait ContainerRuntime: Send + Sync {
    /// Creates a bridge network called `name`.
    ///
    /// Fails when the name is already taken or the daemon is unreachable.
    async fn create_network(&self, name: &str) -> Result<Network>;

    /// Deletes `network`. Fails while endpoints are still attached.
    async fn remove_network(&self, network: &Network) -> Result<()>;

    /// Starts a long-lived placeholder container attached to `network_name`.
    ///
    /// `hostname` defaults to `name`. A failure concerns this container only;
    /// callers are expected to carry on with the rest of the fleet.
    async fn run_container(
        &self,
        name: &str,
        network_name: &str,
        hostname: Option<&str>,
    ) -> Result<Container>;

    /// Asks a running container to stop.
    async fn stop_container(&self, container: &Container) -> Result<()>;

    /// Force-removes `container`. `None` is logged and treated as done.
    async fn remove_container(&self, container: Option<&Container>) -> Result<()>;

    /// Containers currently attached to `network`.
    async fn list_containers(&self, network: &Network) -> Result<Vec<Container>>;

    /// Runs `command` inside a running `container` and returns its captured output.
    async fn exec_probe(&self, container: &Container, command: &[String]) -> Result<String>;
}
