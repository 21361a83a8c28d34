//! Implementations of the [`ContainerRuntime`](hacknet_common::runtime::ContainerRuntime) port.
//!
//! Only the Docker engine is supported. Anything speaking the Docker API
//! (Podman with its compatibility socket, for instance) works through the same
//! adapter.

mod docker;

pub use docker::DockerRuntime;
