// Author: dWallet Labs, Ltd.
// SPDX-License-Identifier: BSD-3-Clause-Clear

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::SendableDataError;

/// Separates the two serialized elements of a ciphertext row.
pub const DELIMITER: char = ':';

/// The wire/storage form of keys, plaintexts and ciphertexts.
///
/// Every field holds the canonical string form of a group element (or, for private keys, of
/// the exponent), as produced by the group.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum SendableData {
    PublicKey { h: String },
    PrivateKey { x: String },
    Plaintext { element: String },
    Ciphertext { c1: String, c2: String },
}

impl SendableData {
    pub fn kind(&self) -> &'static str {
        match self {
            SendableData::PublicKey { .. } => "public key",
            SendableData::PrivateKey { .. } => "private key",
            SendableData::Plaintext { .. } => "plaintext",
            SendableData::Ciphertext { .. } => "ciphertext",
        }
    }

    /// Parses a `<c1>:<c2>` row into ciphertext sendable data.
    pub fn ciphertext_from_row(row: &str) -> Result<Self, SendableDataError> {
        let fields: Vec<&str> = row.split(DELIMITER).collect();

        match fields.as_slice() {
            [c1, c2] => Ok(SendableData::Ciphertext {
                c1: c1.to_string(),
                c2: c2.to_string(),
            }),
            _ => Err(SendableDataError::FieldCount(fields.len())),
        }
    }

    /// The single-string form: the field itself for keys and plaintexts, `<c1>:<c2>` for
    /// ciphertexts.
    pub fn to_row(&self) -> String {
        self.to_string()
    }

    pub(crate) fn unexpected(&self, expected: &'static str) -> SendableDataError {
        SendableDataError::UnexpectedKind {
            expected,
            actual: self.kind(),
        }
    }
}

impl fmt::Display for SendableData {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SendableData::PublicKey { h } => write!(f, "{h}"),
            SendableData::PrivateKey { x } => write!(f, "{x}"),
            SendableData::Plaintext { element } => write!(f, "{element}"),
            SendableData::Ciphertext { c1, c2 } => write!(f, "{c1}{DELIMITER}{c2}"),
        }
    }
}
