use std::fmt;

/// Name of the container every probe originates from.
pub const ATTACKER_NAME: &str = "attacker";

/// Name of the `index`-th target container.
pub fn target_name(index: usize) -> String {
    format!("target-{index}")
}

/// A container started for one run.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Container {
    /// Identifier assigned by the runtime.
    pub id: String,
    /// Name as reported by the runtime, which may carry a leading `/`.
    pub name: String,
    pub hostname: String,
    /// Name of the network the container was attached to.
    pub network: String,
    pub running: bool,
}

impl Container {
    /// Address other members of the network reach this container by.
    ///
    /// The daemon reports names as `/target-0`; the resolvable name is `target-0`.
    pub fn probe_address(&self) -> &str {
        self.name.strip_prefix('/').unwrap_or(&self.name)
    }

    pub fn short_id(&self) -> &str {
        self.id.get(..12).unwrap_or(&self.id)
    }
}

impl fmt::Display for Container {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.probe_address(), self.short_id())
    }
}
