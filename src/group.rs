// Author: dWallet Labs, Ltd.
// SPDX-License-Identifier: BSD-3-Clause-Clear

use std::fmt::Debug;

use crypto_bigint::Uint;

mod ristretto;
mod zp_safe_prime;

pub use ristretto::{Ristretto255, RISTRETTO_MAX_ENCODABLE_BYTES, RISTRETTO_SCALAR_LIMBS};
pub use zp_safe_prime::{PublicParameters, ZpElement, ZpSafePrimeGroup};

/// An error in group instantiation or element (de)serialization.
#[derive(thiserror::Error, Clone, Debug, PartialEq, Eq)]
pub enum Error {
    #[error("invalid group element")]
    InvalidGroupElement,
    #[error("unsupported public parameters")]
    UnsupportedPublicParameters,
    #[error("invalid serialization")]
    InvalidSerialization,
    #[error("a message of {length} bytes cannot be encoded, the maximum is {max_length} bytes")]
    MessageTooLong { length: usize, max_length: usize },
    #[error("the group element is not an encoding of a byte array")]
    NotAnEncoding,
}

pub type Result<T> = std::result::Result<T, Error>;

/// A cyclic group of prime order `q` in which discrete-log based schemes are instantiated.
///
/// Exponents are natural numbers of `SCALAR_LIMBS` limbs, taken mod `q` by
/// [`Self::exponentiate()`]. The group operation is written multiplicatively regardless of how
/// the backend notates it.
pub trait DlogGroup<const SCALAR_LIMBS: usize>: Clone + Debug {
    type Element: Clone + Debug + PartialEq + Eq;

    /// A human-readable name of the group, used in error reporting.
    fn group_type(&self) -> &'static str;

    /// The prime order $q$ of the group.
    fn order(&self) -> Uint<SCALAR_LIMBS>;

    fn generator(&self) -> Self::Element;

    /// Whether the Decisional Diffie-Hellman assumption is believed to hold in this group.
    fn is_ddh_secure(&self) -> bool;

    /// $ base^{exponent} $
    fn exponentiate(&self, base: &Self::Element, exponent: &Uint<SCALAR_LIMBS>) -> Self::Element;

    /// $ a \cdot b $
    fn multiply_elements(&self, a: &Self::Element, b: &Self::Element) -> Self::Element;

    /// Checks that `element` belongs to this group instance.
    ///
    /// Not constant-time; only meant for validating externally supplied elements.
    fn is_member(&self, element: &Self::Element) -> bool;

    /// The maximal length of a byte array accepted by [`Self::encode_bytes_to_element()`].
    fn max_encodable_byte_length(&self) -> usize;

    /// Injectively maps `bytes` to a group element, inverted by
    /// [`Self::decode_element_to_bytes()`].
    fn encode_bytes_to_element(&self, bytes: &[u8]) -> Result<Self::Element>;

    fn decode_element_to_bytes(&self, element: &Self::Element) -> Result<Vec<u8>>;

    /// The canonical string form of `element`. Never contains the `:` character.
    fn serialize_element(&self, element: &Self::Element) -> String;

    /// Reconstructs an element from its canonical string form, verifying it is a member of
    /// this group.
    fn deserialize_element(&self, serialized: &str) -> Result<Self::Element>;
}

/// Fixed-width, big-endian lowercase hex encoding of `value`.
pub(crate) fn uint_to_hex<const LIMBS: usize>(value: &Uint<LIMBS>) -> String {
    hex::encode(uint_to_be_bytes(value))
}

pub(crate) fn uint_from_hex<const LIMBS: usize>(serialized: &str) -> Result<Uint<LIMBS>> {
    let bytes = hex::decode(serialized).map_err(|_| Error::InvalidSerialization)?;
    if bytes.len() != Uint::<LIMBS>::BYTES {
        return Err(Error::InvalidSerialization);
    }

    uint_from_be_slice(&bytes)
}

pub(crate) fn uint_to_be_bytes<const LIMBS: usize>(value: &Uint<LIMBS>) -> Vec<u8> {
    value
        .as_words()
        .iter()
        .rev()
        .flat_map(|word| word.to_be_bytes())
        .collect()
}

/// Reads a big-endian natural number of at most `Uint::<LIMBS>::BYTES` bytes.
pub(crate) fn uint_from_be_slice<const LIMBS: usize>(bytes: &[u8]) -> Result<Uint<LIMBS>> {
    let width = Uint::<LIMBS>::BYTES;
    if bytes.len() > width {
        return Err(Error::InvalidSerialization);
    }

    let mut padded = vec![0u8; width];
    padded[width - bytes.len()..].copy_from_slice(bytes);

    Ok(Uint::<LIMBS>::from_be_slice(&padded))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crypto_bigint::U256;

    #[test]
    fn uint_hex_circles_correctly() {
        let x = U256::from_be_hex("1000000000000000000000000000000014def9dea2f79cd65812631a5cf5d3ed");

        let serialized = uint_to_hex(&x);
        assert_eq!(serialized.len(), 64);
        assert!(!serialized.contains(':'));
        assert_eq!(uint_from_hex::<{ U256::LIMBS }>(&serialized), Ok(x));
    }

    #[test]
    fn uint_from_hex_rejects_wrong_width_and_garbage() {
        assert_eq!(
            uint_from_hex::<{ U256::LIMBS }>("0b"),
            Err(Error::InvalidSerialization)
        );
        assert_eq!(
            uint_from_hex::<{ U256::LIMBS }>(&"zz".repeat(32)),
            Err(Error::InvalidSerialization)
        );
    }

    #[test]
    fn uint_from_be_slice_left_pads() {
        assert_eq!(
            uint_from_be_slice::<{ U256::LIMBS }>(&[0x01, 0x00]),
            Ok(U256::from(256u64))
        );
        assert!(uint_from_be_slice::<{ U256::LIMBS }>(&[0u8; 33]).is_err());
    }
}
