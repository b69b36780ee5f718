// SPDX-FileCopyrightText: 2026 Mattia Egloff <mattia.egloff@pm.me>
//
// SPDX-License-Identifier: GPL-3.0-or-later

//! Encode Command
//!
//! Prints the NDEF message a sharing device pushes on the next tap.

use anyhow::{Context, Result};
use contactshare_core::ContactRecord;

use crate::config::CliConfig;

/// Prints the advertised message as hex on stdout.
pub fn run(config: &CliConfig, record: ContactRecord) -> Result<()> {
    let (mut session, _display) = config.session();
    session.request_advertise(record);

    let message = session
        .provide_advertise_message()
        .context("Contact does not fit in a single NDEF record")?;

    println!("{}", hex::encode(message.to_bytes()));
    Ok(())
}
