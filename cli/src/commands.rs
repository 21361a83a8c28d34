pub mod run;

use clap::{ArgAction, Parser};
use hacknet_common::config::{Config, DEFAULT_IMAGE, DEFAULT_NETWORK_NAME};

#[derive(Parser, Debug)]
#[command(name = "hacknet")]
#[command(about = "Manages Docker containers on a network: provision, ping, tear down.")]
pub struct CommandLine {
    /// Number of target containers to create
    #[arg(long, value_parser = clap::value_parser!(u32).range(1..))]
    pub targets: u32,

    /// Name of the bridge network created for the run
    #[arg(long, default_value = DEFAULT_NETWORK_NAME)]
    pub network: String,

    /// Image the attacker and targets are started from
    #[arg(long, default_value = DEFAULT_IMAGE)]
    pub image: String,

    /// Increase log verbosity (-v, -vv)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,

    /// Hide banner and section headers
    #[arg(short, long)]
    pub quiet: bool,
}

impl CommandLine {
    pub fn parse_args() -> Self {
        Self::parse()
    }

    pub fn config(&self) -> Config {
        Config {
            network_name: self.network.clone(),
            image: self.image.clone(),
            ..Config::default()
        }
    }
}
