//! Failures surfaced by a [`crate::runtime::ContainerRuntime`].
//!
//! Daemon errors are flattened into a `reason` string so this crate stays free
//! of any particular client library.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RuntimeError {
    #[error("cannot reach the container daemon: {0}")]
    Connect(String),

    #[error("failed to pull image {image}: {reason}")]
    ImagePull { image: String, reason: String },

    #[error("failed to create network {name}: {reason}")]
    NetworkCreate { name: String, reason: String },

    #[error("failed to remove network {network}: {reason}")]
    NetworkRemove { network: String, reason: String },

    #[error("failed to run container {name}: {reason}")]
    ContainerCreate { name: String, reason: String },

    #[error("failed to stop container {container}: {reason}")]
    ContainerStop { container: String, reason: String },

    #[error("failed to remove container {container}: {reason}")]
    ContainerRemove { container: String, reason: String },

    #[error("failed to inspect {subject}: {reason}")]
    Inspect { subject: String, reason: String },

    #[error("failed to execute in container {container}: {reason}")]
    Exec { container: String, reason: String },
}

pub type Result<T> = std::result::Result<T, RuntimeError>;
