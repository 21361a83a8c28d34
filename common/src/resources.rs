//! # Run Resources
//!
//! The entities one pipeline run creates, inspects and finally destroys.
//!
//! * [`network::Network`]: the isolated bridge every container of a run joins.
//! * [`container::Container`]: one workload, either the attacker or a target.
//! * [`probe::ProbeResult`]: the outcome of one reachability check.

pub mod container;
pub mod network;
pub mod probe;

pub use container::Container;
pub use network::{Network, NetworkDriver};
pub use probe::ProbeResult;
