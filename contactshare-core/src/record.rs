// SPDX-FileCopyrightText: 2026 Mattia Egloff <mattia.egloff@pm.me>
//
// SPDX-License-Identifier: GPL-3.0-or-later

//! Contact Record
//!
//! The four-field contact record exchanged between devices.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A contact record as entered by the user.
///
/// Fields are ordered (name, phone, email, address) and immutable once
/// constructed. Values are free text: nothing here checks that a phone
/// number or e-mail address is well formed.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ContactRecord {
    name: String,
    phone: String,
    email: String,
    address: String,
}

impl ContactRecord {
    /// Creates a record from the four field values.
    pub fn new(
        name: impl Into<String>,
        phone: impl Into<String>,
        email: impl Into<String>,
        address: impl Into<String>,
    ) -> Self {
        ContactRecord {
            name: name.into(),
            phone: phone.into(),
            email: email.into(),
            address: address.into(),
        }
    }

    /// Returns the contact's name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the phone number.
    pub fn phone(&self) -> &str {
        &self.phone
    }

    /// Returns the e-mail address.
    pub fn email(&self) -> &str {
        &self.email
    }

    /// Returns the postal address.
    pub fn address(&self) -> &str {
        &self.address
    }

    /// Returns the fields in wire order.
    pub fn fields(&self) -> [&str; 4] {
        [&self.name, &self.phone, &self.email, &self.address]
    }

    /// Consumes the record and returns (name, phone, email, address).
    pub fn into_parts(self) -> (String, String, String, String) {
        (self.name, self.phone, self.email, self.address)
    }

    /// Multi-line text shown to the user when a contact is received.
    pub fn display_text(&self) -> String {
        format!(
            "Name: {}\nPhone Number: {}\nEmail: {}\nAddress: {}",
            self.name, self.phone, self.email, self.address
        )
    }
}

impl fmt::Display for ContactRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} <{}>", self.name, self.email)
    }
}
