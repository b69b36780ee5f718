// SPDX-FileCopyrightText: 2026 Mattia Egloff <mattia.egloff@pm.me>
//
// SPDX-License-Identifier: GPL-3.0-or-later

//! Tap Command
//!
//! Runs a sharing and a receiving session against each other.

use anyhow::Result;
use contactshare_core::ContactRecord;

use crate::config::CliConfig;
use crate::display;

/// Simulates one tap from sender to receiver.
pub fn run(config: &CliConfig, record: ContactRecord, receiver_backgrounded: bool) -> Result<()> {
    let (mut sender, _) = config.session();
    let (mut receiver, received) = config.session();

    sender.on_foreground();
    sender.request_advertise(record);
    if !receiver_backgrounded {
        receiver.on_foreground();
    }

    let Some(message) = sender.provide_advertise_message() else {
        display::warning("Sender had nothing to advertise");
        return Ok(());
    };
    let bytes = message.to_bytes();
    display::info(&format!("Sender pushed {} bytes", bytes.len()));

    let outcome = receiver.on_raw_messages_discovered(&[bytes]);
    display::display_outcome(outcome, &received.received(), &received.malformed());
    if outcome == contactshare_core::DiscoveryOutcome::Displayed {
        display::success("Contact received");
    }

    Ok(())
}
