pub mod runtime;

use std::time::Duration;

use hacknet_common::config::Config;

pub use runtime::{Call, FakeRuntime};
pub use sink::RecordingSink;

/// Default config with waits short enough for tests.
pub fn quick_config() -> Config {
    Config {
        endpoint_timeout: Duration::from_millis(60),
        poll_interval: Duration::from_millis(5),
        ..Config::default()
    }
}
