// SPDX-FileCopyrightText: 2026 Mattia Egloff <mattia.egloff@pm.me>
//
// SPDX-License-Identifier: GPL-3.0-or-later

//! Decode Command
//!
//! Feeds captured NDEF bytes to a receiving session.

use anyhow::{Context, Result};

use crate::config::CliConfig;
use crate::display;

/// Delivers one hex-encoded message as a tap.
pub fn run(config: &CliConfig, input: &str, background: bool) -> Result<()> {
    let bytes = hex::decode(input.trim()).context("Invalid hex input")?;

    let (mut session, received) = config.session();
    if !background {
        session.on_foreground();
    }

    let outcome = session.on_raw_messages_discovered(&[bytes]);
    display::display_outcome(outcome, &received.received(), &received.malformed());

    Ok(())
}
