// SPDX-FileCopyrightText: 2026 Mattia Egloff <mattia.egloff@pm.me>
//
// SPDX-License-Identifier: GPL-3.0-or-later

//! Mobile-friendly data types.
//!
//! These types are wrappers around contactshare-core types that are
//! compatible with UniFFI for cross-language bindings.

use contactshare_core::{ContactRecord, DiscoveryOutcome, ExchangeState};

/// Mobile-friendly contact record.
#[derive(Debug, Clone, PartialEq, Eq, uniffi::Record)]
pub struct MobileContactRecord {
    pub name: String,
    pub phone: String,
    pub email: String,
    pub address: String,
}

impl From<ContactRecord> for MobileContactRecord {
    fn from(record: ContactRecord) -> Self {
        let (name, phone, email, address) = record.into_parts();
        MobileContactRecord {
            name,
            phone,
            email,
            address,
        }
    }
}

impl From<MobileContactRecord> for ContactRecord {
    fn from(record: MobileContactRecord) -> Self {
        ContactRecord::new(record.name, record.phone, record.email, record.address)
    }
}

/// Exchange session state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, uniffi::Enum)]
pub enum MobileExchangeState {
    Idle,
    Advertising,
    Listening,
}

impl From<ExchangeState> for MobileExchangeState {
    fn from(state: ExchangeState) -> Self {
        match state {
            ExchangeState::Idle => MobileExchangeState::Idle,
            ExchangeState::Advertising => MobileExchangeState::Advertising,
            ExchangeState::Listening => MobileExchangeState::Listening,
        }
    }
}

/// What happened to a discovered tap.
#[derive(Debug, Clone, Copy, PartialEq, Eq, uniffi::Enum)]
pub enum MobileDiscoveryOutcome {
    /// Contact handed to the display callback
    Displayed,
    /// Session was backgrounded
    NotListening,
    /// No message or no record
    NoRecord,
    /// Not a valid NDEF message
    Unreadable,
    /// Another application's payload
    Foreign,
    /// Our MIME type but not a contact record
    Malformed,
}

impl From<DiscoveryOutcome> for MobileDiscoveryOutcome {
    fn from(outcome: DiscoveryOutcome) -> Self {
        match outcome {
            DiscoveryOutcome::Displayed => MobileDiscoveryOutcome::Displayed,
            DiscoveryOutcome::NotListening => MobileDiscoveryOutcome::NotListening,
            DiscoveryOutcome::NoRecord => MobileDiscoveryOutcome::NoRecord,
            DiscoveryOutcome::Unreadable => MobileDiscoveryOutcome::Unreadable,
            DiscoveryOutcome::Foreign => MobileDiscoveryOutcome::Foreign,
            DiscoveryOutcome::Malformed => MobileDiscoveryOutcome::Malformed,
        }
    }
}
