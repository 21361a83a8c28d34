//! # Hacknet Core
//!
//! Drives one connectivity run end to end: create a network, start an attacker
//! and a fleet of targets on it, ping every target from the attacker, and tear
//! everything down again.
//!
//! * **[`runtime`]**: Concrete [`hacknet_common::runtime::ContainerRuntime`] implementations.
//! * **[`pipeline`]**: The [`pipeline::PipelineService`] orchestrating a run.
//! * **[`probe`]**: The reachability check issued from the attacker.
//! * **[`sink`]**: The default, `tracing`-backed event sink.

pub mod error;
pub mod pipeline;
pub mod probe;
pub mod runtime;
pub mod sink;

pub use error::{CleanupError, PipelineError};
pub use pipeline::{PipelineService, RunReport};
