// SPDX-FileCopyrightText: 2026 Mattia Egloff <mattia.egloff@pm.me>
//
// SPDX-License-Identifier: GPL-3.0-or-later

//! Record Codec
//!
//! Converts a [`ContactRecord`] to and from the MIME-tagged payload carried
//! in a single NDEF record.
//!
//! Wire body: `name, phone, email, address` as UTF-8. There is no version
//! field, no length prefix and no escaping, so a field that itself contains
//! `", "` produces a payload the receiver rejects as malformed.

use tracing::warn;

use super::{normalize_mime_type, DecodeError};
use crate::record::ContactRecord;

/// MIME identifier claimed by the application.
pub const CONTACT_MIME_TYPE: &str = "application/com.seif.nfccontactshare";

/// Separator between fields in the payload body.
pub const FIELD_DELIMITER: &str = ", ";

/// Number of fields in an encoded record.
pub const FIELD_COUNT: usize = 4;

/// A payload body paired with the MIME identifier it was tagged with.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaggedPayload {
    mime_type: String,
    bytes: Vec<u8>,
}

impl TaggedPayload {
    /// Creates a tagged payload.
    pub fn new(mime_type: impl Into<String>, bytes: Vec<u8>) -> Self {
        TaggedPayload {
            mime_type: mime_type.into(),
            bytes,
        }
    }

    /// Get the MIME identifier.
    pub fn mime_type(&self) -> &str {
        &self.mime_type
    }

    /// Get the payload body.
    pub fn bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// Consume and return the payload body.
    pub fn into_bytes(self) -> Vec<u8> {
        self.bytes
    }
}

/// Encoder/decoder bound to one MIME identifier.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordCodec {
    mime_type: String,
}

impl Default for RecordCodec {
    fn default() -> Self {
        RecordCodec::new(CONTACT_MIME_TYPE)
    }
}

impl RecordCodec {
    /// Creates a codec that tags and accepts the given MIME identifier.
    ///
    /// The identifier is normalized the way NDEF record types are read, so
    /// what this codec tags is exactly what it accepts after framing.
    pub fn new(mime_type: impl AsRef<str>) -> Self {
        RecordCodec {
            mime_type: normalize_mime_type(mime_type.as_ref()),
        }
    }

    /// Get the MIME identifier this codec accepts.
    pub fn mime_type(&self) -> &str {
        &self.mime_type
    }

    /// Encodes a record into a tagged payload.
    pub fn encode(&self, record: &ContactRecord) -> TaggedPayload {
        let fields = record.fields();

        if fields.iter().any(|field| field.contains(FIELD_DELIMITER)) {
            warn!(
                "Contact field contains {:?}; the receiving device will reject this record",
                FIELD_DELIMITER
            );
        }

        let body = fields.join(FIELD_DELIMITER);
        TaggedPayload::new(self.mime_type.clone(), body.into_bytes())
    }

    /// Decodes a tagged payload into a record.
    ///
    /// The MIME identifier is checked before the body is looked at, so a
    /// foreign payload is always `UnrecognizedFormat` whatever its bytes.
    pub fn decode(&self, payload: &TaggedPayload) -> Result<ContactRecord, DecodeError> {
        if payload.mime_type() != self.mime_type {
            return Err(DecodeError::UnrecognizedFormat(
                payload.mime_type().to_string(),
            ));
        }

        let body = std::str::from_utf8(payload.bytes())
            .map_err(|e| DecodeError::MalformedRecord(format!("body is not UTF-8: {}", e)))?;

        let segments: Vec<&str> = body.split(FIELD_DELIMITER).collect();
        match segments.as_slice() {
            [name, phone, email, address] => Ok(ContactRecord::new(*name, *phone, *email, *address)),
            _ => Err(DecodeError::MalformedRecord(format!(
                "expected {} fields, got {}",
                FIELD_COUNT,
                segments.len()
            ))),
        }
    }
}

/// Encodes a record tagged with [`CONTACT_MIME_TYPE`].
pub fn encode_record(record: &ContactRecord) -> TaggedPayload {
    RecordCodec::default().encode(record)
}

/// Decodes a payload, accepting only [`CONTACT_MIME_TYPE`].
pub fn decode_record(payload: &TaggedPayload) -> Result<ContactRecord, DecodeError> {
    RecordCodec::default().decode(payload)
}
