//! Reachability probe between two containers of the same network.

use hacknet_common::error::Result;
use hacknet_common::resources::probe::ECHO_COUNT;
use hacknet_common::resources::{Container, ProbeResult};
use hacknet_common::runtime::ContainerRuntime;

/// `ping -c 3 <host>`
pub fn ping_command(host: &str) -> Vec<String> {
    vec![
        "ping".to_string(),
        "-c".to_string(),
        ECHO_COUNT.to_string(),
        host.to_string(),
    ]
}

/// Pings `target` from inside `attacker`.
///
/// An unreachable target is an `Ok` result; only a failure to execute the
/// command at all is an error.
pub async fn probe(
    runtime: &dyn ContainerRuntime,
    attacker: &Container,
    target: &Container,
) -> Result<ProbeResult> {
    let host = target.probe_address();
    let output = runtime.exec_probe(attacker, &ping_command(host)).await?;
    Ok(ProbeResult::from_output(host, &output))
}
