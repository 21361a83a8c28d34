mod commands;
mod terminal;

use std::process::ExitCode;

use commands::CommandLine;
use terminal::{logging, print};
use tracing::error;

#[tokio::main]
async fn main() -> ExitCode {
    let commands = CommandLine::parse_args();

    logging::init(commands.verbose);
    print::banner(commands.quiet);

    let cfg = commands.config();

    match commands::run::run(commands.targets, &cfg, commands.quiet).await {
        Ok(report) => ExitCode::from(report.exit_code()),
        Err(e) => {
            error!("{e:#}");
            ExitCode::FAILURE
        }
    }
}
