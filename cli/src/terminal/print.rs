use std::path::Path;

use colored::*;
use tracing::info;

use lansweep_core::sweep::ProbeOutcome;

pub const TOTAL_WIDTH: usize = 64;

// The target literal must match logging::RAW_TARGET so the formatter
// passes these lines through without a level symbol.
fn print(msg: &str) {
    info!(target: "lansweep::print", "{msg}");
}

pub fn banner() {
    let text_content: String = format!("⟦ LANSWEEP v{} ⟧", env!("CARGO_PKG_VERSION"));
    let text_width: usize = text_content.chars().count();
    let text: ColoredString = text_content.bright_green().bold();
    let sep: ColoredString = "═"
        .repeat(TOTAL_WIDTH.saturating_sub(text_width) / 2)
        .bright_black();

    print(&format!("{}{}{}", sep, text, sep));
}

pub fn header(msg: &str) {
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
    let sep: ColoredString = "═".repeat(TOTAL_WIDTH).bright_black();
    print(&format!("{}", sep));
}

pub fn print_status<T: AsRef<str>>(msg: T) {
    let prefix: ColoredString = ">".bright_black();
    print(&format!("{} {}", prefix, msg.as_ref()));
}

/// The per-address status line: `[ALIVE] ip  MAC=..  NAME=..` with `-`
/// standing in for unresolved fields, or a dimmed `[down ]` line.
pub fn outcome_line(outcome: &ProbeOutcome) {
    if outcome.alive {
        let mac: &str = outcome.mac.as_deref().unwrap_or("-");
        let name: &str = outcome.hostname.as_deref().unwrap_or("-");
        print(&format!(
            "{} {}  MAC={}  NAME={}",
            "[ALIVE]".green().bold(),
            outcome.target.bold(),
            mac,
            name
        ));
    } else {
        print(&format!("{} {}", "[down ]".bright_black(), outcome.target.dimmed()));
    }
}

/// Pre-scan notes: what the sweep does and where findings land.
pub fn scan_notes(log_path: &Path) {
    print_status("This sweep is liveness checks (ping) and neighbor-table reads only");
    print_status(format!("Log file: {}", log_path.display()));
    print_status("Scanning hosts .1 through .254");
}

pub fn completion(alive_count: usize, log_path: &Path) {
    let hosts: ColoredString = format!("{alive_count} live hosts").bold().green();
    let output: String = format!(
        "Sweep complete: {} logged to {}",
        hosts,
        log_path.display().to_string().bold()
    );

    fat_separator();
    centerln(&output);
}

pub fn centerln(msg: &str) {
    let space = " ".repeat(TOTAL_WIDTH.saturating_sub(msg.chars().count()) / 2);
    print(&format!("{}{}", space, msg));
}
