// SPDX-FileCopyrightText: 2026 Mattia Egloff <mattia.egloff@pm.me>
//
// SPDX-License-Identifier: GPL-3.0-or-later

//! FFI Boundary Tests
//!
//! Tests the FFI boundary between Rust and mobile platforms.
//! Focuses on type conversions, error mapping and the byte-level contract
//! between two sessions, the way a platform shell drives them.

use std::sync::{Arc, Mutex};

use contactshare_core::{NdefMessage, TaggedPayload};
use contactshare_mobile::{
    contact_mime_type, decode_contact, encode_contact, ContactShareSession, MobileContactRecord,
    MobileDiscoveryOutcome, MobileError, MobileExchangeState, PlatformContactDisplay,
};

#[derive(Default)]
struct Shown {
    received: Mutex<Vec<MobileContactRecord>>,
    malformed: Mutex<Vec<String>>,
}

struct HostDisplay(Arc<Shown>);

impl PlatformContactDisplay for HostDisplay {
    fn display_received_contact(&self, record: MobileContactRecord) {
        self.0.received.lock().unwrap().push(record);
    }

    fn on_malformed_record(&self, reason: String) {
        self.0.malformed.lock().unwrap().push(reason);
    }
}

fn session() -> (Arc<ContactShareSession>, Arc<Shown>) {
    let shown = Arc::new(Shown::default());
    let session = ContactShareSession::new(Box::new(HostDisplay(Arc::clone(&shown))));
    (session, shown)
}

fn contact(name: &str, phone: &str, email: &str, address: &str) -> MobileContactRecord {
    MobileContactRecord {
        name: name.to_string(),
        phone: phone.to_string(),
        email: email.to_string(),
        address: address.to_string(),
    }
}

fn raw_message(mime_type: &str, body: &[u8]) -> Vec<u8> {
    TaggedPayload::new(mime_type, body.to_vec())
        .into_ndef_message()
        .unwrap()
        .to_bytes()
}

// ============================================================================
// Codec Function Tests
// ============================================================================

#[test]
fn test_contact_mime_type() {
    assert_eq!(contact_mime_type(), "application/com.seif.nfccontactshare");
}

#[test]
fn test_encode_contact_body() {
    let body = encode_contact(contact("Ana", "555-1", "a@x.com", "1 Rd"));
    assert_eq!(body, b"Ana, 555-1, a@x.com, 1 Rd".to_vec());
}

#[test]
fn test_decode_contact_roundtrip() {
    let record = contact("Bo", "", "b@y.org", "");
    let body = encode_contact(record.clone());
    assert_eq!(decode_contact(contact_mime_type(), body).unwrap(), record);
}

#[test]
fn test_decode_contact_foreign_mime() {
    let result = decode_contact("text/plain".to_string(), b"A, B, C, D".to_vec());
    match result {
        Err(MobileError::UnrecognizedFormat(mime_type)) => assert_eq!(mime_type, "text/plain"),
        other => panic!("expected UnrecognizedFormat, got {:?}", other),
    }
}

#[test]
fn test_decode_contact_wrong_field_count() {
    let result = decode_contact(contact_mime_type(), b"A, B, C".to_vec());
    assert!(matches!(result, Err(MobileError::MalformedRecord(_))));
}

#[test]
fn test_error_messages() {
    let err = decode_contact(contact_mime_type(), b"A, B, C, D, E".to_vec()).unwrap_err();
    assert_eq!(
        err.to_string(),
        "Malformed contact record: expected 4 fields, got 5"
    );
}

// ============================================================================
// Session Boundary Tests
// ============================================================================

#[test]
fn test_advertise_bytes_are_single_ndef_record() {
    let (sender, _) = session();
    sender.share_requested(contact("Ana", "555-1", "a@x.com", "1 Rd"));

    let bytes = sender.provide_advertise_payload().unwrap();
    let message = NdefMessage::parse(&bytes).unwrap();

    assert_eq!(message.records().len(), 1);
    let record = message.first_record().unwrap();
    assert_eq!(record.mime_type(), Some(contact_mime_type()));
    assert_eq!(record.payload(), b"Ana, 555-1, a@x.com, 1 Rd");
}

#[test]
fn test_latest_share_request_wins() {
    let (sender, _) = session();
    let (receiver, shown) = session();
    receiver.foregrounded();

    sender.share_requested(contact("Old", "1", "o@x.com", "Here"));
    sender.share_requested(contact("New", "2", "n@x.com", "There"));
    let bytes = sender.provide_advertise_payload().unwrap();

    assert_eq!(receiver.tap_discovered(vec![bytes]), MobileDiscoveryOutcome::Displayed);
    assert_eq!(
        *shown.received.lock().unwrap(),
        vec![contact("New", "2", "n@x.com", "There")]
    );
}

#[test]
fn test_backgrounded_receiver_drops_tap() {
    let (sender, _) = session();
    let (receiver, shown) = session();
    sender.share_requested(contact("Ana", "555-1", "a@x.com", "1 Rd"));

    let bytes = sender.provide_advertise_payload().unwrap();
    assert_eq!(
        receiver.tap_discovered(vec![bytes.clone()]),
        MobileDiscoveryOutcome::NotListening
    );

    // Nothing is queued for later.
    receiver.foregrounded();
    assert!(shown.received.lock().unwrap().is_empty());
    assert_eq!(receiver.state(), MobileExchangeState::Listening);
}

#[test]
fn test_foreign_tap_is_silent() {
    let (receiver, shown) = session();
    receiver.foregrounded();

    let outcome = receiver.tap_discovered(vec![raw_message("text/plain", b"A, B, C, D")]);
    assert_eq!(outcome, MobileDiscoveryOutcome::Foreign);
    assert!(shown.received.lock().unwrap().is_empty());
    assert!(shown.malformed.lock().unwrap().is_empty());
}

#[test]
fn test_empty_and_garbage_taps() {
    let (receiver, _) = session();
    receiver.foregrounded();

    assert_eq!(receiver.tap_discovered(Vec::new()), MobileDiscoveryOutcome::NoRecord);
    assert_eq!(
        receiver.tap_discovered(vec![vec![0xff, 0x00]]),
        MobileDiscoveryOutcome::Unreadable
    );
}

#[test]
fn test_only_first_message_is_considered() {
    let (receiver, shown) = session();
    receiver.foregrounded();

    let outcome = receiver.tap_discovered(vec![
        raw_message("application/other", b"x"),
        raw_message(&contact_mime_type(), b"A, B, C, D"),
    ]);

    assert_eq!(outcome, MobileDiscoveryOutcome::Foreign);
    assert!(shown.received.lock().unwrap().is_empty());
}

#[test]
fn test_custom_mime_sessions_interoperate() {
    let shown = Arc::new(Shown::default());
    let receiver = ContactShareSession::with_options(
        Box::new(HostDisplay(Arc::clone(&shown))),
        "application/x-test".to_string(),
        false,
    );
    receiver.foregrounded();

    let foreign = raw_message(&contact_mime_type(), b"A, B, C, D");
    assert_eq!(receiver.tap_discovered(vec![foreign]), MobileDiscoveryOutcome::Foreign);

    let ours = raw_message("application/x-test", b"A, B, C, D");
    assert_eq!(receiver.tap_discovered(vec![ours]), MobileDiscoveryOutcome::Displayed);
    assert_eq!(
        *shown.received.lock().unwrap(),
        vec![contact("A", "B", "C", "D")]
    );
}

#[test]
fn test_mixed_case_custom_mime_sessions_interoperate() {
    let sender = ContactShareSession::with_options(
        Box::new(HostDisplay(Arc::new(Shown::default()))),
        "application/X-Test".to_string(),
        false,
    );
    let shown = Arc::new(Shown::default());
    let receiver = ContactShareSession::with_options(
        Box::new(HostDisplay(Arc::clone(&shown))),
        "application/X-Test".to_string(),
        false,
    );
    receiver.foregrounded();
    sender.share_requested(contact("Ana", "555-1", "a@x.com", "1 Rd"));

    let bytes = sender.provide_advertise_payload().unwrap();
    assert_eq!(receiver.tap_discovered(vec![bytes]), MobileDiscoveryOutcome::Displayed);
    assert_eq!(
        *shown.received.lock().unwrap(),
        vec![contact("Ana", "555-1", "a@x.com", "1 Rd")]
    );
}
