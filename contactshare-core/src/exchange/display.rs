// SPDX-FileCopyrightText: 2026 Mattia Egloff <mattia.egloff@pm.me>
//
// SPDX-License-Identifier: GPL-3.0-or-later

//! Display Collaborator
//!
//! The host side that renders a received contact to the user.

use std::sync::Mutex;

use super::DecodeError;
use crate::record::ContactRecord;

/// Receives contacts decoded from a tap.
///
/// Implement this trait on the host to show the received record (the
/// Android shell opens a dialog).
pub trait ContactDisplay: Send + Sync {
    /// Called once per successfully decoded contact.
    fn display_received_contact(&self, record: ContactRecord);

    /// Called for payloads that carry our MIME identifier but fail to parse,
    /// only when malformed reporting is enabled in the session config.
    fn on_malformed_record(&self, _error: &DecodeError) {}
}

/// Display that records everything it is handed.
///
/// Useful for tests and for hosts that poll instead of reacting.
#[derive(Default)]
pub struct RecordingDisplay {
    received: Mutex<Vec<ContactRecord>>,
    malformed: Mutex<Vec<DecodeError>>,
}

impl RecordingDisplay {
    /// Creates an empty recording display.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the contacts displayed so far.
    pub fn received(&self) -> Vec<ContactRecord> {
        self.received
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .clone()
    }

    /// Returns the malformed-record notifications so far.
    pub fn malformed(&self) -> Vec<DecodeError> {
        self.malformed
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .clone()
    }
}

impl ContactDisplay for RecordingDisplay {
    fn display_received_contact(&self, record: ContactRecord) {
        self.received
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .push(record);
    }

    fn on_malformed_record(&self, error: &DecodeError) {
        self.malformed
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .push(error.clone());
    }
}

impl<T: ContactDisplay + ?Sized> ContactDisplay for std::sync::Arc<T> {
    fn display_received_contact(&self, record: ContactRecord) {
        (**self).display_received_contact(record);
    }

    fn on_malformed_record(&self, error: &DecodeError) {
        (**self).on_malformed_record(error);
    }
}

/// Simple callback-based display.
///
/// Wraps a closure for easy contact handling.
pub struct CallbackDisplay<F>
where
    F: Fn(ContactRecord) + Send + Sync,
{
    callback: F,
}

impl<F> CallbackDisplay<F>
where
    F: Fn(ContactRecord) + Send + Sync,
{
    /// Creates a new callback display.
    pub fn new(callback: F) -> Self {
        CallbackDisplay { callback }
    }
}

impl<F> ContactDisplay for CallbackDisplay<F>
where
    F: Fn(ContactRecord) + Send + Sync,
{
    fn display_received_contact(&self, record: ContactRecord) {
        (self.callback)(record);
    }
}
