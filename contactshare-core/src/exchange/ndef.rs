// SPDX-FileCopyrightText: 2026 Mattia Egloff <mattia.egloff@pm.me>
//
// SPDX-License-Identifier: GPL-3.0-or-later

//! NDEF Framing
//!
//! NFC Data Exchange Format messages as delivered by the link layer.
//! Only what the exchange needs is modelled: short and normal records,
//! optional record ids, and MIME type resolution. Chunked records are
//! rejected.
//!
//! Record layout:
//!
//! ```text
//! header(1) type_len(1) payload_len(1 | 4, BE) [id_len(1)] type id payload
//! header = MB(0x80) | ME(0x40) | CF(0x20) | SR(0x10) | IL(0x08) | TNF(0x07)
//! ```

use thiserror::Error;

use super::TaggedPayload;

const FLAG_MESSAGE_BEGIN: u8 = 0x80;
const FLAG_MESSAGE_END: u8 = 0x40;
const FLAG_CHUNKED: u8 = 0x20;
const FLAG_SHORT_RECORD: u8 = 0x10;
const FLAG_ID_LENGTH: u8 = 0x08;
const TNF_MASK: u8 = 0x07;

/// Largest payload accepted in a single record (1 MiB).
pub const MAX_PAYLOAD_LENGTH: usize = 1024 * 1024;

/// Well-known record type for text records.
const RTD_TEXT: &[u8] = b"T";

/// NDEF framing errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum NdefError {
    #[error("Empty NDEF message")]
    Empty,

    #[error("Truncated NDEF record")]
    Truncated,

    #[error("First record is missing the message-begin flag")]
    MissingMessageBegin,

    #[error("Unexpected message-begin flag on record {0}")]
    UnexpectedMessageBegin(usize),

    #[error("Last record is missing the message-end flag")]
    MissingMessageEnd,

    #[error("Data after the message-end record")]
    TrailingData,

    #[error("Chunked records are not supported")]
    ChunkedRecord,

    #[error("Record type or id too long: {0} bytes")]
    FieldTooLong(usize),

    #[error("Payload too large: {0} bytes")]
    PayloadTooLarge(usize),
}

/// The 3-bit Type Name Format field of a record header.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TypeNameFormat {
    Empty,
    WellKnown,
    MimeMedia,
    AbsoluteUri,
    External,
    Unknown,
    Unchanged,
    Reserved,
}

impl TypeNameFormat {
    fn from_bits(bits: u8) -> Self {
        match bits & TNF_MASK {
            0 => TypeNameFormat::Empty,
            1 => TypeNameFormat::WellKnown,
            2 => TypeNameFormat::MimeMedia,
            3 => TypeNameFormat::AbsoluteUri,
            4 => TypeNameFormat::External,
            5 => TypeNameFormat::Unknown,
            6 => TypeNameFormat::Unchanged,
            _ => TypeNameFormat::Reserved,
        }
    }

    fn bits(self) -> u8 {
        match self {
            TypeNameFormat::Empty => 0,
            TypeNameFormat::WellKnown => 1,
            TypeNameFormat::MimeMedia => 2,
            TypeNameFormat::AbsoluteUri => 3,
            TypeNameFormat::External => 4,
            TypeNameFormat::Unknown => 5,
            TypeNameFormat::Unchanged => 6,
            TypeNameFormat::Reserved => 7,
        }
    }
}

/// A single NDEF record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NdefRecord {
    tnf: TypeNameFormat,
    record_type: Vec<u8>,
    id: Vec<u8>,
    payload: Vec<u8>,
}

impl NdefRecord {
    /// Creates a record, checking the length limits of the wire format.
    pub fn new(
        tnf: TypeNameFormat,
        record_type: Vec<u8>,
        id: Vec<u8>,
        payload: Vec<u8>,
    ) -> Result<Self, NdefError> {
        if record_type.len() > u8::MAX as usize {
            return Err(NdefError::FieldTooLong(record_type.len()));
        }
        if id.len() > u8::MAX as usize {
            return Err(NdefError::FieldTooLong(id.len()));
        }
        if payload.len() > MAX_PAYLOAD_LENGTH {
            return Err(NdefError::PayloadTooLarge(payload.len()));
        }

        Ok(NdefRecord {
            tnf,
            record_type,
            id,
            payload,
        })
    }

    /// Creates a MIME media record. The type is normalized first.
    pub fn mime(mime_type: &str, payload: Vec<u8>) -> Result<Self, NdefError> {
        let normalized = normalize_mime_type(mime_type);
        NdefRecord::new(
            TypeNameFormat::MimeMedia,
            normalized.into_bytes(),
            Vec::new(),
            payload,
        )
    }

    pub fn tnf(&self) -> TypeNameFormat {
        self.tnf
    }

    pub fn record_type(&self) -> &[u8] {
        &self.record_type
    }

    pub fn id(&self) -> &[u8] {
        &self.id
    }

    pub fn payload(&self) -> &[u8] {
        &self.payload
    }

    /// Resolves the MIME type this record carries, if any.
    ///
    /// MIME media records yield their normalized type and well-known text
    /// records yield `text/plain`. Everything else has no MIME type.
    pub fn mime_type(&self) -> Option<String> {
        match self.tnf {
            TypeNameFormat::MimeMedia => std::str::from_utf8(&self.record_type)
                .ok()
                .map(normalize_mime_type),
            TypeNameFormat::WellKnown if self.record_type == RTD_TEXT => {
                Some("text/plain".to_string())
            }
            _ => None,
        }
    }

    /// Serialized size of this record in bytes.
    fn encoded_len(&self) -> usize {
        let length_field = if self.is_short() { 1 } else { 4 };
        let id_field = if self.id.is_empty() { 0 } else { 1 };
        2 + length_field
            + id_field
            + self.record_type.len()
            + self.id.len()
            + self.payload.len()
    }

    /// The placeholder record that encodes an empty message.
    fn is_empty_record(&self) -> bool {
        self.tnf == TypeNameFormat::Empty
            && self.record_type.is_empty()
            && self.id.is_empty()
            && self.payload.is_empty()
    }

    fn is_short(&self) -> bool {
        self.payload.len() <= u8::MAX as usize
    }
}

/// Trims, drops parameters and lowercases a MIME type.
pub(crate) fn normalize_mime_type(mime_type: &str) -> String {
    let without_params = match mime_type.find(';') {
        Some(index) => &mime_type[..index],
        None => mime_type,
    };
    without_params.trim().to_ascii_lowercase()
}

/// An ordered list of NDEF records.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NdefMessage {
    records: Vec<NdefRecord>,
}

impl NdefMessage {
    /// Creates a message from records.
    pub fn new(records: Vec<NdefRecord>) -> Self {
        NdefMessage { records }
    }

    /// Get all records.
    pub fn records(&self) -> &[NdefRecord] {
        &self.records
    }

    /// Get the first record, if the message has any.
    pub fn first_record(&self) -> Option<&NdefRecord> {
        self.records.first()
    }

    /// Serialize to bytes.
    ///
    /// A message without records is written as a single empty record,
    /// which is how an empty NDEF message appears on the wire.
    pub fn to_bytes(&self) -> Vec<u8> {
        if self.records.is_empty() {
            return vec![FLAG_MESSAGE_BEGIN | FLAG_MESSAGE_END | FLAG_SHORT_RECORD, 0, 0];
        }

        let total = self.records.iter().map(NdefRecord::encoded_len).sum();
        let mut bytes = Vec::with_capacity(total);
        let last = self.records.len() - 1;

        for (index, record) in self.records.iter().enumerate() {
            let mut header = record.tnf.bits();
            if index == 0 {
                header |= FLAG_MESSAGE_BEGIN;
            }
            if index == last {
                header |= FLAG_MESSAGE_END;
            }
            if record.is_short() {
                header |= FLAG_SHORT_RECORD;
            }
            if !record.id.is_empty() {
                header |= FLAG_ID_LENGTH;
            }

            bytes.push(header);
            // Lengths were bounded in NdefRecord::new
            bytes.push(record.record_type.len() as u8);
            if record.is_short() {
                bytes.push(record.payload.len() as u8);
            } else {
                bytes.extend_from_slice(&(record.payload.len() as u32).to_be_bytes());
            }
            if !record.id.is_empty() {
                bytes.push(record.id.len() as u8);
            }
            bytes.extend_from_slice(&record.record_type);
            bytes.extend_from_slice(&record.id);
            bytes.extend_from_slice(&record.payload);
        }

        bytes
    }

    /// Parse an NDEF message from bytes.
    ///
    /// A lone empty record parses back to a message without records.
    pub fn parse(bytes: &[u8]) -> Result<Self, NdefError> {
        if bytes.is_empty() {
            return Err(NdefError::Empty);
        }

        let mut reader = Reader::new(bytes);
        let mut records = Vec::new();

        loop {
            let index = records.len();
            let header = reader.byte()?;

            if header & FLAG_CHUNKED != 0 {
                return Err(NdefError::ChunkedRecord);
            }
            let begins = header & FLAG_MESSAGE_BEGIN != 0;
            if index == 0 && !begins {
                return Err(NdefError::MissingMessageBegin);
            }
            if index > 0 && begins {
                return Err(NdefError::UnexpectedMessageBegin(index));
            }

            let type_len = reader.byte()? as usize;
            let payload_len = if header & FLAG_SHORT_RECORD != 0 {
                reader.byte()? as usize
            } else {
                let len = reader.take(4)?;
                u32::from_be_bytes([len[0], len[1], len[2], len[3]]) as usize
            };
            if payload_len > MAX_PAYLOAD_LENGTH {
                return Err(NdefError::PayloadTooLarge(payload_len));
            }
            let id_len = if header & FLAG_ID_LENGTH != 0 {
                reader.byte()? as usize
            } else {
                0
            };

            let record_type = reader.take(type_len)?.to_vec();
            let id = reader.take(id_len)?.to_vec();
            let payload = reader.take(payload_len)?.to_vec();

            records.push(NdefRecord {
                tnf: TypeNameFormat::from_bits(header),
                record_type,
                id,
                payload,
            });

            if header & FLAG_MESSAGE_END != 0 {
                if !reader.is_empty() {
                    return Err(NdefError::TrailingData);
                }
                if let [only] = records.as_slice() {
                    if only.is_empty_record() {
                        return Ok(NdefMessage::default());
                    }
                }
                return Ok(NdefMessage { records });
            }
            if reader.is_empty() {
                return Err(NdefError::MissingMessageEnd);
            }
        }
    }
}

/// Bounds-checked cursor over a byte slice.
struct Reader<'a> {
    bytes: &'a [u8],
    pos: usize,
}

impl<'a> Reader<'a> {
    fn new(bytes: &'a [u8]) -> Self {
        Reader { bytes, pos: 0 }
    }

    fn byte(&mut self) -> Result<u8, NdefError> {
        Ok(self.take(1)?[0])
    }

    fn take(&mut self, len: usize) -> Result<&'a [u8], NdefError> {
        let end = self.pos.checked_add(len).ok_or(NdefError::Truncated)?;
        let slice = self.bytes.get(self.pos..end).ok_or(NdefError::Truncated)?;
        self.pos = end;
        Ok(slice)
    }

    fn is_empty(&self) -> bool {
        self.pos >= self.bytes.len()
    }
}

impl From<&NdefRecord> for TaggedPayload {
    /// Records without a MIME type get an empty tag and are therefore foreign.
    fn from(record: &NdefRecord) -> Self {
        TaggedPayload::new(record.mime_type().unwrap_or_default(), record.payload.clone())
    }
}

impl TaggedPayload {
    /// Wraps the payload in a single-record MIME message.
    pub fn into_ndef_message(self) -> Result<NdefMessage, NdefError> {
        let mime_type = self.mime_type().to_owned();
        let record = NdefRecord::mime(&mime_type, self.into_bytes())?;
        Ok(NdefMessage::new(vec![record]))
    }
}
