//! # Hacknet Common
//!
//! Types shared by every layer of `hacknet`.
//!
//! * **[`resources`]**: The entities a run creates and inspects (networks, containers, probe results).
//! * **[`runtime`]**: The [`runtime::ContainerRuntime`] port the orchestrator drives.
//! * **[`events`]**: Pipeline stages and the [`events::EventSink`] port used for reporting.
//! * **[`error`]**: Typed failures raised at the runtime boundary.
//! * **[`config`]**: Run-wide settings.

pub mod config;
pub mod error;
pub mod events;
pub mod resources;
pub mod runtime;

mod macros;

pub use macros::SUCCESS_TARGET;

#[doc(hidden)]
pub use tracing;
