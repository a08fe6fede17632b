// Author: dWallet Labs, Ltd.
// SPDX-License-Identifier: BSD-3-Clause-Clear

use std::fmt;

use crate::group;

#[derive(thiserror::Error, Clone, Debug, PartialEq, Eq)]
pub enum Error {
    #[error("the underlying dlog group must have DDH security level")]
    SecurityLevelUnmet,
    #[error("the key is not an ElGamal key of this scheme's group")]
    InvalidKeyKind,
    #[error("the plaintext is not a group-element plaintext of this scheme's group")]
    InvalidPlaintextKind,
    #[error("the ciphertext is not an ElGamal ciphertext of this scheme's group")]
    InvalidCiphertextKind,
    #[error("in order to encrypt a message this object must be initialized with a public key")]
    NoPublicKeyInstalled,
    #[error("in order to decrypt a message this object must be initialized with a private key")]
    NoPrivateKeyInstalled,
    #[error("the random value must be in Zq")]
    InvalidRandomness,
    #[error("group elements of the {operand} ciphertext are not members of the {group_type} group")]
    ForeignGroupElement {
        operand: Operand,
        group_type: &'static str,
    },
    #[error("a plaintext of {length} bytes exceeds the maximum of {max_length} bytes")]
    PlaintextTooLarge { length: usize, max_length: usize },
    #[error("malformed sendable data: {0}")]
    MalformedSendableData(SendableDataError),
    #[error("group error")]
    Group(#[from] group::Error),
}

/// Which of the two ciphertexts passed to a binary operation was rejected.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Operand {
    First,
    Second,
}

impl fmt::Display for Operand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Operand::First => write!(f, "first"),
            Operand::Second => write!(f, "second"),
        }
    }
}

#[derive(thiserror::Error, Clone, Debug, PartialEq, Eq)]
pub enum SendableDataError {
    #[error("expected sendable data of kind {expected}, got {actual}")]
    UnexpectedKind {
        expected: &'static str,
        actual: &'static str,
    },
    #[error("expected exactly 2 delimited fields, got {0}")]
    FieldCount(usize),
    #[error("invalid field encoding")]
    InvalidField(#[from] group::Error),
    #[error("the private exponent is not in Zq")]
    ExponentOutOfRange,
}

impl From<SendableDataError> for Error {
    fn from(error: SendableDataError) -> Self {
        Error::MalformedSendableData(error)
    }
}

pub type Result<T> = std::result::Result<T, Error>;
