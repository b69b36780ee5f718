// SPDX-FileCopyrightText: 2026 Mattia Egloff <mattia.egloff@pm.me>
//
// SPDX-License-Identifier: GPL-3.0-or-later

//! Mobile-friendly error types.

use contactshare_core::DecodeError;

/// Mobile-friendly error type.
#[derive(Debug, thiserror::Error, uniffi::Error)]
pub enum MobileError {
    #[error("Unrecognized payload format: {0}")]
    UnrecognizedFormat(String),

    #[error("Malformed contact record: {0}")]
    MalformedRecord(String),
}

impl From<DecodeError> for MobileError {
    fn from(err: DecodeError) -> Self {
        match err {
            DecodeError::UnrecognizedFormat(mime_type) => MobileError::UnrecognizedFormat(mime_type),
            DecodeError::MalformedRecord(reason) => MobileError::MalformedRecord(reason),
        }
    }
}
