// SPDX-FileCopyrightText: 2026 Mattia Egloff <mattia.egloff@pm.me>
//
// SPDX-License-Identifier: GPL-3.0-or-later

//! ContactShare Core Library
//!
//! Tap-to-share contact exchange over NFC.
//! Two devices exchange a four-field contact record as a single MIME-typed
//! NDEF record; everything platform specific (widgets, activity lifecycle,
//! the NFC adapter itself) stays on the host side and drives the
//! [`ExchangeSession`] through plain method calls.

pub mod config;
pub mod exchange;
pub mod record;

pub use config::ExchangeConfig;
pub use exchange::{
    decode_record, encode_record, CallbackDisplay, ContactDisplay, DecodeError,
    DiscoveryOutcome, ExchangeSession, ExchangeState, NdefError, NdefMessage, NdefRecord,
    RecordCodec, RecordingDisplay, TaggedPayload, TypeNameFormat, CONTACT_MIME_TYPE,
    FIELD_COUNT, FIELD_DELIMITER, MAX_PAYLOAD_LENGTH,
};
pub use record::ContactRecord;
