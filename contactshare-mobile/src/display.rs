// SPDX-FileCopyrightText: 2026 Mattia Egloff <mattia.egloff@pm.me>
//
// SPDX-License-Identifier: GPL-3.0-or-later

//! Mobile Contact Display
//!
//! Provides a callback interface for the platform UI that shows received
//! contacts. Android opens an alert dialog, iOS a sheet.

use contactshare_core::{ContactDisplay, ContactRecord, DecodeError};
use parking_lot::Mutex;

use crate::types::MobileContactRecord;

/// Callback interface for platform-specific contact display.
///
/// Implement this trait in Kotlin (Android) or Swift (iOS). Callbacks run on
/// the thread that delivered the tap, after the session lock is released,
/// so they may call back into the session.
#[uniffi::export(callback_interface)]
pub trait PlatformContactDisplay: Send + Sync {
    /// Show a contact received from a tap.
    fn display_received_contact(&self, record: MobileContactRecord);

    /// A payload claimed our MIME type but was not a valid contact record.
    ///
    /// Only called when the session was created with malformed reporting.
    fn on_malformed_record(&self, reason: String);
}

/// Display handed to the core session.
///
/// Buffers what the session produces so the platform callbacks can be
/// invoked once the session lock is no longer held.
#[derive(Default)]
pub(crate) struct DeferredDisplay {
    received: Mutex<Vec<ContactRecord>>,
    malformed: Mutex<Vec<String>>,
}

impl DeferredDisplay {
    /// Takes everything buffered since the last drain.
    pub(crate) fn drain(&self) -> (Vec<ContactRecord>, Vec<String>) {
        let received = std::mem::take(&mut *self.received.lock());
        let malformed = std::mem::take(&mut *self.malformed.lock());
        (received, malformed)
    }
}

impl ContactDisplay for DeferredDisplay {
    fn display_received_contact(&self, record: ContactRecord) {
        self.received.lock().push(record);
    }

    fn on_malformed_record(&self, error: &DecodeError) {
        self.malformed.lock().push(error.to_string());
    }
}
