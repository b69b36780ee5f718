// SPDX-FileCopyrightText: 2026 Mattia Egloff <mattia.egloff@pm.me>
//
// SPDX-License-Identifier: GPL-3.0-or-later

//! CLI Configuration

use std::sync::Arc;

use contactshare_core::{ExchangeConfig, ExchangeSession, RecordingDisplay};

/// CLI configuration.
#[derive(Debug, Clone)]
pub struct CliConfig {
    /// MIME identifier for both advertising and accepting.
    pub mime_type: String,
    /// Whether malformed payloads are reported.
    pub report_malformed: bool,
}

impl CliConfig {
    /// Returns the session configuration.
    pub fn exchange_config(&self) -> ExchangeConfig {
        ExchangeConfig::default()
            .with_mime_type(self.mime_type.clone())
            .with_malformed_reporting(self.report_malformed)
    }

    /// Creates a session whose display the caller can inspect afterwards.
    pub fn session(&self) -> (ExchangeSession<Arc<RecordingDisplay>>, Arc<RecordingDisplay>) {
        let display = Arc::new(RecordingDisplay::new());
        let session = ExchangeSession::with_config(self.exchange_config(), Arc::clone(&display));
        (session, display)
    }
}
