// SPDX-FileCopyrightText: 2026 Mattia Egloff <mattia.egloff@pm.me>
//
// SPDX-License-Identifier: GPL-3.0-or-later

//! Contact Exchange Module
//!
//! Handles tap-to-share contact exchange: record encoding, NDEF framing and
//! the advertise/discover session lifecycle.

mod codec;
mod display;
mod error;
mod ndef;
mod session;

pub use codec::{
    decode_record, encode_record, RecordCodec, TaggedPayload, CONTACT_MIME_TYPE, FIELD_COUNT,
    FIELD_DELIMITER,
};
pub use display::{CallbackDisplay, ContactDisplay, RecordingDisplay};
pub use error::DecodeError;
pub use ndef::{NdefError, NdefMessage, NdefRecord, TypeNameFormat, MAX_PAYLOAD_LENGTH};

pub(crate) use ndef::normalize_mime_type;
pub use session::{DiscoveryOutcome, ExchangeSession, ExchangeState};
