// Author: dWallet Labs, Ltd.
// SPDX-License-Identifier: BSD-3-Clause-Clear

//! ElGamal encryption over any prime-order group in which DDH is believed to hold.
//!
//! Plaintexts are group elements; byte payloads are mapped in and out of the group with
//! [`ElGamal::generate_plaintext()`] and [`ElGamal::plaintext_to_bytes()`]. Two groups are
//! provided: the quadratic residues modulo a safe prime ([`group::ZpSafePrimeGroup`]) and
//! Ristretto255 ([`group::Ristretto255`]).

pub use ciphertext::Ciphertext;
pub use elgamal::{ElGamal, ALGORITHM_NAME};
pub use error::{Error, Operand, Result, SendableDataError};
pub use keys::{PrivateKey, PublicKey};
pub use plaintext::Plaintext;
pub use sendable::{SendableData, DELIMITER};

mod ciphertext;
mod elgamal;
mod error;
pub mod group;
mod keys;
mod plaintext;
mod sendable;

#[cfg(any(test, feature = "test_exports"))]
pub mod test_exports;
