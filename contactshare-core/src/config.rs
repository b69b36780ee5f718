// SPDX-FileCopyrightText: 2026 Mattia Egloff <mattia.egloff@pm.me>
//
// SPDX-License-Identifier: GPL-3.0-or-later

//! Configuration for exchange sessions

use crate::exchange::{normalize_mime_type, CONTACT_MIME_TYPE};

/// Configuration for an [`ExchangeSession`](crate::ExchangeSession).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExchangeConfig {
    /// MIME identifier claimed by this application.
    ///
    /// Payloads tagged with anything else are treated as foreign.
    pub mime_type: String,

    /// Notify the display collaborator when a payload carries our MIME
    /// identifier but cannot be parsed. Off by default: malformed payloads
    /// are dropped without any user-visible effect.
    pub report_malformed: bool,
}

impl Default for ExchangeConfig {
    fn default() -> Self {
        Self {
            mime_type: CONTACT_MIME_TYPE.to_string(),
            report_malformed: false,
        }
    }
}

impl ExchangeConfig {
    /// Use a different MIME identifier (normalized like an NDEF record type)
    pub fn with_mime_type(mut self, mime_type: impl AsRef<str>) -> Self {
        self.mime_type = normalize_mime_type(mime_type.as_ref());
        self
    }

    /// Surface malformed payloads to the display collaborator
    pub fn with_malformed_reporting(mut self, enabled: bool) -> Self {
        self.report_malformed = enabled;
        self
    }
}
