use std::time::Duration;

pub const DEFAULT_NETWORK_NAME: &str = "hack-net";
pub const DEFAULT_IMAGE: &str = "alpine:latest";

/// How long teardown waits for the network to report zero endpoints.
pub const ENDPOINT_TIMEOUT: Duration = Duration::from_secs(30);
/// Delay between two endpoint checks.
pub const POLL_INTERVAL: Duration = Duration::from_secs(2);
/// Grace period given to a container before it is killed on stop.
pub const STOP_GRACE: Duration = Duration::from_secs(1);

#[derive(Clone, Debug)]
pub struct Config {
    /// Name of the bridge network created for the run.
    pub network_name: String,
    /// Image every container of the run is started from.
    pub image: String,
    pub endpoint_timeout: Duration,
    pub poll_interval: Duration,
    pub stop_grace: Duration,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            network_name: DEFAULT_NETWORK_NAME.to_string(),
            image: DEFAULT_IMAGE.to_string(),
            endpoint_timeout: ENDPOINT_TIMEOUT,
            poll_interval: POLL_INTERVAL,
            stop_grace: STOP_GRACE,
        }
    }
}
