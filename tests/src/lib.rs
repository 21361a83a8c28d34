//! End-to-end pipeline scenarios, run against an in-memory container runtime
//! so they need neither a daemon nor network access.

pub mod support;

#[cfg(test)]
mod pipeline;
