use std::fmt;

/// Isolation driver of a network. Runs only ever use a bridge.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum NetworkDriver {
    #[default]
    Bridge,
}

impl NetworkDriver {
    pub fn as_str(&self) -> &'static str {
        match self {
            NetworkDriver::Bridge => "bridge",
        }
    }
}

impl fmt::Display for NetworkDriver {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A network created by the runtime for one run.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Network {
    /// Identifier assigned by the runtime.
    pub id: String,
    pub name: String,
    pub driver: NetworkDriver,
}

impl Network {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            driver: NetworkDriver::Bridge,
        }
    }

    /// First twelve characters of the id, the way the docker CLI prints it.
    pub fn short_id(&self) -> &str {
        self.id.get(..12).unwrap_or(&self.id)
    }
}

impl fmt::Display for Network {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.name, self.short_id())
    }
}
