// SPDX-FileCopyrightText: 2026 Mattia Egloff <mattia.egloff@pm.me>
//
// SPDX-License-Identifier: GPL-3.0-or-later

//! Property-Based Tests
//!
//! Uses proptest to verify properties that should hold for all inputs,
//! not just specific test cases.

use proptest::prelude::*;

use contactshare_core::{
    decode_record, encode_record, ContactRecord, DecodeError, ExchangeSession, NdefMessage,
    RecordingDisplay, TaggedPayload, CONTACT_MIME_TYPE, FIELD_DELIMITER,
};

// ============================================================
// Custom Strategies for generating test data
// ============================================================

/// Strategy for field values that never contain the delimiter
fn field_value_strategy() -> impl Strategy<Value = String> {
    ".{0,40}".prop_filter("no delimiter", |s| !s.contains(FIELD_DELIMITER))
}

/// Strategy for generating contact records
fn record_strategy() -> impl Strategy<Value = ContactRecord> {
    (
        field_value_strategy(),
        field_value_strategy(),
        field_value_strategy(),
        field_value_strategy(),
    )
        .prop_map(|(name, phone, email, address)| ContactRecord::new(name, phone, email, address))
}

/// Strategy for MIME identifiers other than ours
fn foreign_mime_strategy() -> impl Strategy<Value = String> {
    "[a-z]{1,10}/[a-z0-9.+-]{0,30}".prop_filter("not ours", |s| s != CONTACT_MIME_TYPE)
}

// ============================================================
// Codec Properties
// ============================================================

proptest! {
    /// Property: decode(encode(r)) == r for delimiter-free fields
    #[test]
    fn prop_codec_roundtrip(record in record_strategy()) {
        let payload = encode_record(&record);
        prop_assert_eq!(decode_record(&payload).unwrap(), record);
    }

    /// Property: any foreign MIME identifier is unrecognized whatever the bytes
    #[test]
    fn prop_foreign_mime_always_unrecognized(
        mime_type in foreign_mime_strategy(),
        bytes in prop::collection::vec(any::<u8>(), 0..200)
    ) {
        let payload = TaggedPayload::new(mime_type.clone(), bytes);
        prop_assert_eq!(decode_record(&payload), Err(DecodeError::UnrecognizedFormat(mime_type)));
    }

    /// Property: a body with a segment count other than 4 is malformed
    #[test]
    fn prop_wrong_segment_count_is_malformed(
        segments in prop::collection::vec("[a-zA-Z0-9@.]{0,10}", 1..10usize)
            .prop_filter("not four", |s| s.len() != 4)
    ) {
        let body = segments.join(FIELD_DELIMITER);
        let payload = TaggedPayload::new(CONTACT_MIME_TYPE, body.into_bytes());
        prop_assert!(matches!(decode_record(&payload), Err(DecodeError::MalformedRecord(_))));
    }

    /// Property: the advertised NDEF message delivers the same record to a peer
    #[test]
    fn prop_tap_delivers_record(record in record_strategy()) {
        let mut sender = ExchangeSession::new(RecordingDisplay::new());
        let mut receiver = ExchangeSession::new(RecordingDisplay::new());
        receiver.on_foreground();

        sender.request_advertise(record.clone());
        let raw = sender.provide_advertise_message().unwrap().to_bytes();
        receiver.on_raw_messages_discovered(&[raw]);

        prop_assert_eq!(receiver.display().received(), vec![record]);
    }
}

// ============================================================
// Parser Robustness
// ============================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(1000))]

    /// Random bytes should not cause panics when parsing NDEF
    #[test]
    fn fuzz_ndef_parse_no_panic(data in prop::collection::vec(any::<u8>(), 0..512)) {
        let _ = NdefMessage::parse(&data);
    }

    /// Random raw taps never panic a listening session
    #[test]
    fn fuzz_raw_tap_no_panic(data in prop::collection::vec(any::<u8>(), 0..512)) {
        let mut session = ExchangeSession::new(RecordingDisplay::new());
        session.on_foreground();
        let _ = session.on_raw_messages_discovered(&[data]);
    }
}
