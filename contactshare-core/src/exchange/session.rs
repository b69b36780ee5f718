// SPDX-FileCopyrightText: 2026 Mattia Egloff <mattia.egloff@pm.me>
//
// SPDX-License-Identifier: GPL-3.0-or-later

//! Exchange Session State Machine
//!
//! Owns the advertise/discover lifecycle of one device. The host drives it
//! with lifecycle edges (foreground/background), share requests and tap
//! events; the session answers the link layer's advertise callback and hands
//! decoded contacts to the display collaborator.
//!
//! Calls are serialized by the platform, so every operation takes
//! `&mut self` and nothing here blocks.

use tracing::{debug, trace, warn};

use super::{ContactDisplay, DecodeError, NdefMessage, RecordCodec, TaggedPayload};
use crate::config::ExchangeConfig;
use crate::record::ContactRecord;

/// State of an exchange session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExchangeState {
    /// Host is in the background; taps are ignored
    Idle,
    /// Answering the link layer's advertise callback
    Advertising,
    /// Host is in the foreground; taps are dispatched
    Listening,
}

/// What happened to a discovered tap.
///
/// Informational only: every variant other than `Displayed` means the tap
/// was dropped without any user-visible effect.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DiscoveryOutcome {
    /// A contact was decoded and handed to the display
    Displayed,
    /// The session was not listening
    NotListening,
    /// The first message had no records, or there was no message
    NoRecord,
    /// The first message could not be parsed as NDEF
    Unreadable,
    /// The first record belongs to another application
    Foreign,
    /// The first record carries our MIME identifier but failed to parse
    Malformed,
}

/// A tap-to-share session for one device.
pub struct ExchangeSession<D: ContactDisplay> {
    /// Current state
    state: ExchangeState,
    /// Latest fields the user asked to share, encoded only at tap time
    pending_advertise: Option<ContactRecord>,
    /// Codec bound to the configured MIME identifier
    codec: RecordCodec,
    config: ExchangeConfig,
    display: D,
}

impl<D: ContactDisplay> ExchangeSession<D> {
    /// Creates a session with the default configuration.
    pub fn new(display: D) -> Self {
        Self::with_config(ExchangeConfig::default(), display)
    }

    /// Creates a session with the given configuration.
    pub fn with_config(config: ExchangeConfig, display: D) -> Self {
        ExchangeSession {
            state: ExchangeState::Idle,
            pending_advertise: None,
            codec: RecordCodec::new(config.mime_type.clone()),
            config,
            display,
        }
    }

    /// Returns the current state.
    pub fn state(&self) -> ExchangeState {
        self.state
    }

    /// Checks if taps are currently dispatched.
    pub fn is_listening(&self) -> bool {
        self.state == ExchangeState::Listening
    }

    /// Checks if a share request is registered.
    pub fn has_pending_advertise(&self) -> bool {
        self.pending_advertise.is_some()
    }

    /// Returns the session configuration.
    pub fn config(&self) -> &ExchangeConfig {
        &self.config
    }

    /// Returns the display collaborator.
    pub fn display(&self) -> &D {
        &self.display
    }

    /// Registers the fields to advertise on the next tap.
    ///
    /// Nothing is encoded yet. Calling again replaces the pending fields, so
    /// the payload always reflects the latest request at tap time.
    pub fn request_advertise(&mut self, fields: ContactRecord) {
        if self.pending_advertise.replace(fields).is_some() {
            trace!("Replaced pending advertise request");
        } else {
            trace!("Registered advertise request");
        }
    }

    /// Drops any pending share request.
    pub fn cancel_advertise(&mut self) {
        if self.pending_advertise.take().is_some() {
            trace!("Cancelled advertise request");
        }
    }

    /// Link-layer callback: produce the payload to push during a tap.
    ///
    /// Returns `None` when nothing was requested. The request stays
    /// registered, so every later tap advertises again.
    pub fn provide_advertise_payload(&mut self) -> Option<TaggedPayload> {
        if self.pending_advertise.is_none() {
            debug!("Tap without a pending share request");
            return None;
        }

        let resume = self.transition(ExchangeState::Advertising);
        let payload = self
            .pending_advertise
            .as_ref()
            .map(|record| self.codec.encode(record));
        self.transition(resume);

        payload
    }

    /// Same as [`provide_advertise_payload`](Self::provide_advertise_payload),
    /// framed as a single-record NDEF message.
    pub fn provide_advertise_message(&mut self) -> Option<NdefMessage> {
        let payload = self.provide_advertise_payload()?;
        match payload.into_ndef_message() {
            Ok(message) => Some(message),
            Err(e) => {
                warn!("Cannot frame advertise payload: {}", e);
                None
            }
        }
    }

    /// Host came to the foreground: start listening for taps.
    pub fn on_foreground(&mut self) {
        if self.state == ExchangeState::Listening {
            trace!("Already listening");
            return;
        }
        self.transition(ExchangeState::Listening);
    }

    /// Host went to the background: stop listening for taps.
    pub fn on_background(&mut self) {
        if self.state == ExchangeState::Idle {
            trace!("Already idle");
            return;
        }
        self.transition(ExchangeState::Idle);
    }

    /// Link-layer callback: messages were discovered during a tap.
    ///
    /// Only the first record of the first message is considered. Foreign and
    /// malformed payloads are dropped; nothing is queued while not listening.
    pub fn on_message_discovered(&mut self, messages: &[NdefMessage]) -> DiscoveryOutcome {
        if !self.is_listening() {
            debug!("Ignoring tap while not listening");
            return DiscoveryOutcome::NotListening;
        }

        let Some(record) = messages.first().and_then(NdefMessage::first_record) else {
            debug!("Ignoring tap without records");
            return DiscoveryOutcome::NoRecord;
        };

        let payload = TaggedPayload::from(record);
        self.dispatch(&payload)
    }

    /// Like [`on_message_discovered`](Self::on_message_discovered) for raw
    /// NDEF message bytes as handed over by a host.
    pub fn on_raw_messages_discovered<B: AsRef<[u8]>>(
        &mut self,
        raw_messages: &[B],
    ) -> DiscoveryOutcome {
        if !self.is_listening() {
            debug!("Ignoring tap while not listening");
            return DiscoveryOutcome::NotListening;
        }

        let Some(raw) = raw_messages.first() else {
            debug!("Ignoring tap without messages");
            return DiscoveryOutcome::NoRecord;
        };

        match NdefMessage::parse(raw.as_ref()) {
            Ok(message) => self.on_message_discovered(std::slice::from_ref(&message)),
            Err(e) => {
                debug!("Ignoring unreadable NDEF message: {}", e);
                DiscoveryOutcome::Unreadable
            }
        }
    }

    fn dispatch(&self, payload: &TaggedPayload) -> DiscoveryOutcome {
        match self.codec.decode(payload) {
            Ok(contact) => {
                debug!("Received contact");
                self.display.display_received_contact(contact);
                DiscoveryOutcome::Displayed
            }
            Err(DecodeError::UnrecognizedFormat(mime_type)) => {
                debug!("Ignoring foreign payload ({:?})", mime_type);
                DiscoveryOutcome::Foreign
            }
            Err(err @ DecodeError::MalformedRecord(_)) => {
                warn!("Dropping contact payload: {}", err);
                if self.config.report_malformed {
                    self.display.on_malformed_record(&err);
                }
                DiscoveryOutcome::Malformed
            }
        }
    }

    /// Moves to `next` and returns the previous state.
    fn transition(&mut self, next: ExchangeState) -> ExchangeState {
        let previous = std::mem::replace(&mut self.state, next);
        trace!("Exchange state {:?} -> {:?}", previous, next);
        previous
    }
}
