// Author: dWallet Labs, Ltd.
// SPDX-License-Identifier: BSD-3-Clause-Clear

use crypto_bigint::{Encoding, U256};
use curve25519_dalek::{
    constants::RISTRETTO_BASEPOINT_POINT,
    ristretto::{CompressedRistretto, RistrettoPoint},
    Scalar,
};

use super::{DlogGroup, Error, Result};

pub const RISTRETTO_SCALAR_LIMBS: usize = U256::LIMBS;

/// A compressed point holds a length byte and up to 29 payload bytes in positions `1..31`;
/// byte 0 and byte 31 are used to search for a valid encoding.
pub const RISTRETTO_MAX_ENCODABLE_BYTES: usize = 29;

/// $ \ell = 2^{252} + 27742317777372353535851937790883648493 $
const ORDER: U256 =
    U256::from_be_hex("1000000000000000000000000000000014def9dea2f79cd65812631a5cf5d3ed");

/// The prime-order Ristretto group over Curve25519, backed by `curve25519-dalek`.
#[derive(PartialEq, Eq, Clone, Copy, Debug, Default)]
pub struct Ristretto255;

impl Ristretto255 {
    fn scalar(exponent: &U256) -> Scalar {
        Scalar::from_bytes_mod_order(exponent.to_le_bytes())
    }
}

impl DlogGroup<RISTRETTO_SCALAR_LIMBS> for Ristretto255 {
    type Element = RistrettoPoint;

    fn group_type(&self) -> &'static str {
        "ristretto255"
    }

    fn order(&self) -> U256 {
        ORDER
    }

    fn generator(&self) -> Self::Element {
        RISTRETTO_BASEPOINT_POINT
    }

    fn is_ddh_secure(&self) -> bool {
        true
    }

    fn exponentiate(&self, base: &Self::Element, exponent: &U256) -> Self::Element {
        let scalar = Self::scalar(exponent);
        if *base == RISTRETTO_BASEPOINT_POINT {
            RistrettoPoint::mul_base(&scalar)
        } else {
            base * scalar
        }
    }

    fn multiply_elements(&self, a: &Self::Element, b: &Self::Element) -> Self::Element {
        // The group operation is written additively in `curve25519-dalek`.
        a + b
    }

    fn is_member(&self, _element: &Self::Element) -> bool {
        // A `RistrettoPoint` can only ever hold a valid group element.
        true
    }

    fn max_encodable_byte_length(&self) -> usize {
        RISTRETTO_MAX_ENCODABLE_BYTES
    }

    // see https://github.com/dalek-cryptography/curve25519-dalek/issues/322
    fn encode_bytes_to_element(&self, bytes: &[u8]) -> Result<Self::Element> {
        if bytes.len() > RISTRETTO_MAX_ENCODABLE_BYTES {
            return Err(Error::MessageTooLong {
                length: bytes.len(),
                max_length: RISTRETTO_MAX_ENCODABLE_BYTES,
            });
        }

        let mut encoding = [0u8; 32];
        encoding[1] = bytes.len() as u8;
        encoding[2..2 + bytes.len()].copy_from_slice(bytes);

        // Byte 31 stays below 64 so the encoding is a canonical field element, and byte 0 stays
        // even so it is non-negative.
        for j in 0..64u8 {
            encoding[31] = j;
            for i in 0..128u8 {
                encoding[0] = 2 * i;
                if let Some(point) = CompressedRistretto(encoding).decompress() {
                    return Ok(point);
                }
            }
        }

        Err(Error::NotAnEncoding)
    }

    fn decode_element_to_bytes(&self, element: &Self::Element) -> Result<Vec<u8>> {
        let compressed = element.compress();
        let encoding = compressed.as_bytes();

        let length = usize::from(encoding[1]);
        if length > RISTRETTO_MAX_ENCODABLE_BYTES
            || encoding[2 + length..31].iter().any(|byte| *byte != 0)
        {
            return Err(Error::NotAnEncoding);
        }

        Ok(encoding[2..2 + length].to_vec())
    }

    fn serialize_element(&self, element: &Self::Element) -> String {
        hex::encode(element.compress().as_bytes())
    }

    fn deserialize_element(&self, serialized: &str) -> Result<Self::Element> {
        let bytes = hex::decode(serialized).map_err(|_| Error::InvalidSerialization)?;
        let compressed =
            CompressedRistretto::from_slice(&bytes).map_err(|_| Error::InvalidSerialization)?;

        compressed.decompress().ok_or(Error::InvalidGroupElement)
    }
}
