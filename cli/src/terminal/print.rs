use std::time::Duration;

use colored::*;
use tracing::info;
use unicode_width::UnicodeWidthStr;

use hacknet_core::RunReport;

use crate::terminal::colors;

pub const TOTAL_WIDTH: usize = 64;
pub const PRINT_TARGET: &str = "hacknet::print";
const KEY_WIDTH: usize = 12;

pub fn print(msg: &str) {
    info!(target: PRINT_TARGET, raw_msg = msg);
}

pub fn banner(quiet: bool) {
    if quiet {
        return;
    }

    let text_content: String = format!("⟦ HACKNET v{} ⟧ ", env!("CARGO_PKG_VERSION"));
    let text_width: usize = UnicodeWidthStr::width(text_content.as_str());
    let text: ColoredString = text_content.bright_green().bold();
    let sep: ColoredString = "═".repeat(TOTAL_WIDTH.saturating_sub(text_width) / 2).bright_black();

    print(&format!("{}{}{}", sep, text, sep));
}

pub fn header(msg: &str, quiet: bool) {
    if quiet {
        return;
    }

    let formatted: String = format!("⟦ {} ⟧", msg);
    let msg_len: usize = formatted.chars().count();

    let dash_count: usize = TOTAL_WIDTH.saturating_sub(msg_len);
    let left: usize = dash_count / 2;
    let right: usize = dash_count - left;

    let line: ColoredString = format!(
        "{}{}{}",
        "─".repeat(left),
        formatted.to_uppercase().bright_green(),
        "─".repeat(right)
    )
    .bright_black();

    print(&format!("{}", line));
}

pub fn fat_separator() {
    let sep: ColoredString = "═".repeat(TOTAL_WIDTH).color(colors::SEPARATOR);
    print(&format!("{}", sep));
}

pub fn centerln(msg: &str) {
    let space = " ".repeat(TOTAL_WIDTH.saturating_sub(console::measure_text_width(msg)) / 2);
    print(&format!("{}{}{}", space, msg, space));
}

pub fn aligned_line(key: &str, value: ColoredString) {
    let dots: String = ".".repeat((KEY_WIDTH + 1).saturating_sub(key.len()));
    let colon: String = format!(
        "{}{}",
        dots.color(colors::SEPARATOR),
        ":".color(colors::SEPARATOR)
    );
    let prefix: ColoredString = ">".color(colors::SEPARATOR);
    print(&format!("{} {}{} {}", prefix, key.color(colors::PRIMARY), colon, value));
}

pub fn as_tree_one_level(key_value_pair: &[(String, ColoredString)]) {
    for (i, (key, value)) in key_value_pair.iter().enumerate() {
        let last: bool = i + 1 == key_value_pair.len();
        let branch: ColoredString = if !last {
            "├─".bright_black()
        } else {
            "└─".bright_black()
        };
        print(&format!(
            " {} {}{} {}",
            branch,
            key.color(colors::TEXT_DEFAULT),
            ":".color(colors::SEPARATOR),
            value
        ));
    }
}

/// Final block of a run: verdict line, counts, cleanup health.
pub fn summary(report: &RunReport, total_time: Duration, quiet: bool) {
    let verdict: ColoredString = if report.success {
        "Successful".bold().color(colors::SUCCESS)
    } else {
        "Failed".bold().color(colors::FAILURE)
    };
    let output: String = format!("Ping Test Results: {verdict}");

    if quiet {
        print(&output);
        return;
    }

    header("summary", quiet);

    let provisioned = format!("{} of {}", report.targets.len(), report.requested);
    aligned_line("Targets", provisioned.color(colors::TEXT_DEFAULT));

    let reachable = format!("{} of {}", report.reachable(), report.probes.len());
    aligned_line("Reachable", reachable.color(colors::TEXT_DEFAULT));

    if !report.failures.is_empty() {
        aligned_line("Not started", report.failures.len().to_string().color(colors::FAILURE));
        let failures: Vec<(String, ColoredString)> = report
            .failures
            .iter()
            .map(|failure| (failure.name.clone(), failure.reason.normal()))
            .collect();
        as_tree_one_level(&failures);
    }

    let unreachable: Vec<(String, ColoredString)> = report
        .probes
        .iter()
        .filter(|probe| !probe.reachable)
        .map(|probe| (probe.target.clone(), "unreachable".color(colors::FAILURE)))
        .collect();
    if !unreachable.is_empty() {
        as_tree_one_level(&unreachable);
    }

    if let Some(err) = &report.error {
        aligned_line("Aborted", err.to_string().color(colors::FAILURE));
    }

    let cleanup: ColoredString = if report.cleanup.is_clean() {
        "clean".color(colors::SUCCESS)
    } else {
        format!("{} issue(s)", report.cleanup.errors.len()).color(colors::FAILURE)
    };
    aligned_line("Cleanup", cleanup);

    let elapsed = format!("{:.2}s", total_time.as_secs_f64()).bold().yellow();
    aligned_line("Elapsed", elapsed);

    fat_separator();
    centerln(&output);
}
