// SPDX-FileCopyrightText: 2026 Mattia Egloff <mattia.egloff@pm.me>
//
// SPDX-License-Identifier: GPL-3.0-or-later

//! Display Helpers
//!
//! Terminal output formatting and styling.

use console::style;
use contactshare_core::{ContactRecord, DecodeError, DiscoveryOutcome};

/// Prints a success message.
pub fn success(msg: &str) {
    println!("{} {}", style("✓").green().bold(), msg);
}

/// Prints an error message.
pub fn error(msg: &str) {
    eprintln!("{} {}", style("✗").red().bold(), msg);
}

/// Prints a warning message to stderr.
pub fn warning(msg: &str) {
    eprintln!("{} {}", style("⚠").yellow().bold(), msg);
}

/// Prints an info message to stderr.
pub fn info(msg: &str) {
    eprintln!("{} {}", style("ℹ").blue().bold(), msg);
}

/// Displays a received contact in a formatted box.
pub fn display_contact(record: &ContactRecord) {
    let width = 40;

    println!("{}", "─".repeat(width));
    println!("  {}", style("Contact Information").bold().cyan());
    println!("{}", "─".repeat(width));
    for line in record.display_text().lines() {
        println!("  {}", line);
    }
    println!("{}", "─".repeat(width));
}

/// Reports the results of one tap on the receiving side.
pub fn display_outcome(
    outcome: DiscoveryOutcome,
    received: &[ContactRecord],
    malformed: &[DecodeError],
) {
    for record in received {
        display_contact(record);
    }
    for err in malformed {
        error(&err.to_string());
    }
    if outcome != DiscoveryOutcome::Displayed {
        warning(&format!("Nothing displayed: {}", describe_outcome(outcome)));
    }
}

/// Describes why a tap did or did not show a contact.
pub fn describe_outcome(outcome: DiscoveryOutcome) -> &'static str {
    match outcome {
        DiscoveryOutcome::Displayed => "contact displayed",
        DiscoveryOutcome::NotListening => "receiver is in the background",
        DiscoveryOutcome::NoRecord => "message carries no record",
        DiscoveryOutcome::Unreadable => "not a valid NDEF message",
        DiscoveryOutcome::Foreign => "payload belongs to another application",
        DiscoveryOutcome::Malformed => "contact payload is malformed",
    }
}
