// SPDX-FileCopyrightText: 2026 Mattia Egloff <mattia.egloff@pm.me>
//
// SPDX-License-Identifier: GPL-3.0-or-later

//! Exchange Error Types

use thiserror::Error;

/// Errors that can occur while decoding a received payload.
///
/// Neither variant is fatal. `UnrecognizedFormat` is the normal outcome for
/// any tag or peer that is not running this application.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DecodeError {
    #[error("Unrecognized payload format: {0}")]
    UnrecognizedFormat(String),

    #[error("Malformed contact record: {0}")]
    MalformedRecord(String),
}

impl DecodeError {
    /// True for payloads that belong to some other application.
    pub fn is_foreign(&self) -> bool {
        matches!(self, DecodeError::UnrecognizedFormat(_))
    }
}
