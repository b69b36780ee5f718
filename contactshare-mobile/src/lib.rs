// SPDX-FileCopyrightText: 2026 Mattia Egloff <mattia.egloff@pm.me>
//
// SPDX-License-Identifier: GPL-3.0-or-later

//! ContactShare Mobile Bindings
//!
//! UniFFI bindings for Android and iOS platforms.
//! Exposes a mobile-friendly tap-to-share session on top of contactshare-core.
//!
//! The platform shell keeps the NFC plumbing: it forwards lifecycle edges,
//! answers the link layer's push callback with
//! [`ContactShareSession::provide_advertise_payload`] and hands discovered
//! NDEF messages to [`ContactShareSession::tap_discovered`].

use std::sync::Arc;

use parking_lot::Mutex;
use tracing::debug;

use contactshare_core::{
    ContactRecord, ExchangeConfig, ExchangeSession, RecordCodec, TaggedPayload, CONTACT_MIME_TYPE,
};

// === Modules ===

mod display;
mod error;
mod types;

// Re-export public types
pub use display::PlatformContactDisplay;
pub use error::MobileError;
pub use types::{MobileContactRecord, MobileDiscoveryOutcome, MobileExchangeState};

use display::DeferredDisplay;

uniffi::setup_scaffolding!();

// === Codec Functions ===

/// MIME identifier the application tags its records with.
#[uniffi::export]
pub fn contact_mime_type() -> String {
    CONTACT_MIME_TYPE.to_string()
}

/// Encode a contact into the payload body of a single NDEF record.
#[uniffi::export]
pub fn encode_contact(record: MobileContactRecord) -> Vec<u8> {
    RecordCodec::default()
        .encode(&ContactRecord::from(record))
        .into_bytes()
}

/// Decode a payload body that arrived tagged with `mime_type`.
#[uniffi::export]
pub fn decode_contact(
    mime_type: String,
    body: Vec<u8>,
) -> Result<MobileContactRecord, MobileError> {
    let payload = TaggedPayload::new(mime_type, body);
    let record = RecordCodec::default().decode(&payload)?;
    Ok(record.into())
}

// === Session ===

/// Tap-to-share session for one activity.
///
/// Display callbacks are invoked after the internal lock is released.
#[derive(uniffi::Object)]
pub struct ContactShareSession {
    session: Mutex<ExchangeSession<Arc<DeferredDisplay>>>,
    pending: Arc<DeferredDisplay>,
    display: Arc<dyn PlatformContactDisplay>,
}

impl ContactShareSession {
    fn create(config: ExchangeConfig, display: Box<dyn PlatformContactDisplay>) -> Arc<Self> {
        let pending = Arc::new(DeferredDisplay::default());
        Arc::new(ContactShareSession {
            session: Mutex::new(ExchangeSession::with_config(config, Arc::clone(&pending))),
            pending,
            display: Arc::from(display),
        })
    }

    /// Forward everything the core session produced to the platform.
    fn flush_display(&self) {
        let (received, malformed) = self.pending.drain();
        for record in received {
            self.display.display_received_contact(record.into());
        }
        for reason in malformed {
            self.display.on_malformed_record(reason);
        }
    }
}

#[uniffi::export]
impl ContactShareSession {
    /// Create a session using the application's MIME identifier.
    #[uniffi::constructor]
    pub fn new(display: Box<dyn PlatformContactDisplay>) -> Arc<Self> {
        Self::create(ExchangeConfig::default(), display)
    }

    /// Create a session with a custom MIME identifier and malformed reporting.
    #[uniffi::constructor]
    pub fn with_options(
        display: Box<dyn PlatformContactDisplay>,
        mime_type: String,
        report_malformed: bool,
    ) -> Arc<Self> {
        let config = ExchangeConfig::default()
            .with_mime_type(mime_type)
            .with_malformed_reporting(report_malformed);
        Self::create(config, display)
    }

    /// The user pressed "share" with the current field values.
    pub fn share_requested(&self, record: MobileContactRecord) {
        self.session.lock().request_advertise(record.into());
    }

    /// Stop advertising on later taps.
    pub fn cancel_share(&self) {
        self.session.lock().cancel_advertise();
    }

    /// Activity resumed.
    pub fn foregrounded(&self) {
        self.session.lock().on_foreground();
    }

    /// Activity paused.
    pub fn backgrounded(&self) {
        self.session.lock().on_background();
    }

    pub fn state(&self) -> MobileExchangeState {
        self.session.lock().state().into()
    }

    pub fn has_pending_share(&self) -> bool {
        self.session.lock().has_pending_advertise()
    }

    /// Push callback: NDEF message bytes to send, or `None` to send nothing.
    pub fn provide_advertise_payload(&self) -> Option<Vec<u8>> {
        self.session
            .lock()
            .provide_advertise_message()
            .map(|message| message.to_bytes())
    }

    /// Raw NDEF messages discovered during a tap, in delivery order.
    pub fn tap_discovered(&self, raw_messages: Vec<Vec<u8>>) -> MobileDiscoveryOutcome {
        let outcome = self.session.lock().on_raw_messages_discovered(&raw_messages);
        debug!("Tap handled: {:?}", outcome);
        self.flush_display();
        outcome.into()
    }
}
