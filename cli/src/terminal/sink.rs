use colored::*;

use hacknet_common::events::{EventSink, PipelineEvent, Stage};
use hacknet_core::sink::TracingSink;

use crate::terminal::{colors, print, spinner};

/// Event sink for an interactive terminal.
///
/// Logs through [`TracingSink`], adds section headers, and replaces the
/// repeated endpoint-wait lines with a spinner.
pub struct TerminalSink {
    inner: TracingSink,
    quiet: bool,
}

impl TerminalSink {
    pub fn new(quiet: bool) -> Self {
        Self {
            inner: TracingSink,
            quiet,
        }
    }
}

impl EventSink for TerminalSink {
    fn emit(&self, event: &PipelineEvent) {
        match event {
            PipelineEvent::StageEntered(Stage::Init) => print::header("provisioning", self.quiet),
            PipelineEvent::StageEntered(Stage::FleetProvisioned) => {
                print::header("probing fleet", self.quiet)
            }
            PipelineEvent::StageEntered(Stage::Teardown) => print::header("teardown", self.quiet),
            PipelineEvent::AwaitingEndpoints { network, remaining } => {
                spinner::show(format!(
                    "Waiting for {} to clear {} active endpoint(s)...",
                    network.color(colors::ACCENT),
                    remaining.to_string().bold()
                ));
                return;
            }
            PipelineEvent::EndpointsCleared { .. }
            | PipelineEvent::NetworkKept { .. }
            | PipelineEvent::StageEntered(Stage::Done) => spinner::hide(),
            _ => {}
        }

        self.inner.emit(event);
    }
}
