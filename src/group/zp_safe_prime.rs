// Author: dWallet Labs, Ltd.
// SPDX-License-Identifier: BSD-3-Clause-Clear

use crypto_bigint::{
    modular::runtime_mod::{DynResidue, DynResidueParams},
    rand_core::CryptoRngCore,
    Encoding, NonZero, RandomMod, Uint,
};
use serde::{Deserialize, Serialize};

use super::{uint_from_be_slice, uint_from_hex, uint_to_be_bytes, uint_to_hex, DlogGroup, Error, Result};

/// Marks the start of the payload in byte-encoded elements, so that leading zero bytes survive
/// the round-trip through a natural number.
const ENCODING_MARKER: u8 = 0x01;

/// An element of the subgroup of quadratic residues $QR_p \subset \mathbb{Z}_p^*$.
///
/// The residue carries its modulus, so elements of distinct group instances never compare
/// equal and are told apart by [`ZpSafePrimeGroup::is_member()`].
#[derive(PartialEq, Eq, Clone, Copy, Debug)]
pub struct ZpElement<const LIMBS: usize>(pub(crate) DynResidue<LIMBS>);

impl<const LIMBS: usize> ZpElement<LIMBS> {
    /// The element as a natural number in $[1, p)$.
    pub fn value(&self) -> Uint<LIMBS> {
        self.0.retrieve()
    }
}

/// The public parameters of a safe-prime group: the modulus $p = 2q + 1$ and a generator of
/// the order-$q$ subgroup.
#[derive(PartialEq, Eq, Clone, Debug, Serialize, Deserialize)]
pub struct PublicParameters<const LIMBS: usize>
where
    Uint<LIMBS>: Encoding,
{
    pub modulus: Uint<LIMBS>,
    pub generator: Uint<LIMBS>,
}

/// The prime-order subgroup of quadratic residues modulo a safe prime $p = 2q + 1$.
#[derive(PartialEq, Eq, Clone, Debug)]
pub struct ZpSafePrimeGroup<const LIMBS: usize>
where
    Uint<LIMBS>: Encoding,
{
    params: DynResidueParams<LIMBS>,
    order: Uint<LIMBS>,
    generator: ZpElement<LIMBS>,
    ddh_secure: bool,
}

impl<const LIMBS: usize> ZpSafePrimeGroup<LIMBS>
where
    Uint<LIMBS>: Encoding,
{
    /// Instantiates the group from `public_parameters`.
    ///
    /// The modulus must be $3 \bmod 4$ and the generator a quadratic residue other than one.
    /// Whether the modulus really is a safe prime (and hence whether DDH is believed to hold) is
    /// tested here, using `rng` for the probabilistic primality tests, and reported by
    /// [`DlogGroup::is_ddh_secure()`].
    pub fn new(
        public_parameters: PublicParameters<LIMBS>,
        rng: &mut impl CryptoRngCore,
    ) -> Result<Self> {
        let PublicParameters { modulus, generator } = public_parameters;

        if modulus.as_words()[0] & 3 != 3 || modulus < Uint::<LIMBS>::from(7u64) {
            return Err(Error::UnsupportedPublicParameters);
        }

        // Montgomery form only works for odd modulus, which is assured above.
        let params = DynResidueParams::<LIMBS>::new(&modulus);
        let order = modulus.shr_vartime(1);

        if generator <= Uint::<LIMBS>::ONE || generator >= modulus {
            return Err(Error::UnsupportedPublicParameters);
        }

        let generator = DynResidue::<LIMBS>::new(&generator, params);
        if generator.pow(&order) != DynResidue::<LIMBS>::one(params) {
            return Err(Error::UnsupportedPublicParameters);
        }

        let ddh_secure = crypto_primes::is_safe_prime_with_rng(rng, &modulus);
        tracing::debug!(
            modulus_bits = modulus.bits(),
            ddh_secure,
            "instantiated Zp* safe-prime group"
        );

        Ok(Self {
            params,
            order,
            generator: ZpElement(generator),
            ddh_secure,
        })
    }

    /// Generates fresh public parameters: a random safe prime of `bit_length` bits and a random
    /// generator of its quadratic residues.
    pub fn generate(bit_length: usize, rng: &mut impl CryptoRngCore) -> Result<Self> {
        if bit_length < 4 || bit_length > Uint::<LIMBS>::BITS {
            return Err(Error::UnsupportedPublicParameters);
        }

        let modulus: Uint<LIMBS> =
            crypto_primes::generate_safe_prime_with_rng(rng, Some(bit_length));
        let params = DynResidueParams::<LIMBS>::new(&modulus);
        let bound: NonZero<Uint<LIMBS>> =
            Option::from(NonZero::new(modulus)).ok_or(Error::UnsupportedPublicParameters)?;

        // Classic rejection-sampling technique; squaring lands in the quadratic residues.
        let generator = loop {
            let candidate = DynResidue::<LIMBS>::new(&Uint::random_mod(rng, &bound), params).square();
            let value = candidate.retrieve();
            if value > Uint::<LIMBS>::ONE {
                break value;
            }
        };

        Self::new(PublicParameters { modulus, generator }, rng)
    }

    pub fn public_parameters(&self) -> PublicParameters<LIMBS> {
        PublicParameters {
            modulus: *self.params.modulus(),
            generator: self.generator.value(),
        }
    }

    pub fn modulus(&self) -> &Uint<LIMBS> {
        self.params.modulus()
    }

    /// Euler's criterion: $x$ is a quadratic residue iff $x^q = 1$.
    fn is_quadratic_residue(&self, x: &DynResidue<LIMBS>) -> bool {
        x.pow(&self.order) == DynResidue::<LIMBS>::one(self.params)
    }
}

impl<const LIMBS: usize> DlogGroup<LIMBS> for ZpSafePrimeGroup<LIMBS>
where
    Uint<LIMBS>: Encoding,
{
    type Element = ZpElement<LIMBS>;

    fn group_type(&self) -> &'static str {
        "Zp*"
    }

    fn order(&self) -> Uint<LIMBS> {
        self.order
    }

    fn generator(&self) -> Self::Element {
        self.generator
    }

    fn is_ddh_secure(&self) -> bool {
        self.ddh_secure
    }

    fn exponentiate(&self, base: &Self::Element, exponent: &Uint<LIMBS>) -> Self::Element {
        // Every member has order dividing $q$, so this is reduced mod $q$ implicitly.
        ZpElement(base.0.pow(exponent))
    }

    fn multiply_elements(&self, a: &Self::Element, b: &Self::Element) -> Self::Element {
        ZpElement(a.0 * b.0)
    }

    fn is_member(&self, element: &Self::Element) -> bool {
        *element.0.params() == self.params
            && element.value() != Uint::<LIMBS>::ZERO
            && self.is_quadratic_residue(&element.0)
    }

    fn max_encodable_byte_length(&self) -> usize {
        // The marker byte followed by the payload must stay below $2^{|q| - 1} \leq q$.
        self.order.bits().saturating_sub(2) / 8
    }

    fn encode_bytes_to_element(&self, bytes: &[u8]) -> Result<Self::Element> {
        let max_length = self.max_encodable_byte_length();
        if bytes.len() > max_length {
            return Err(Error::MessageTooLong {
                length: bytes.len(),
                max_length,
            });
        }

        let mut marked = Vec::with_capacity(bytes.len() + 1);
        marked.push(ENCODING_MARKER);
        marked.extend_from_slice(bytes);

        // $ x = s + 1 \in [1, q] $, and since $p = 3 \bmod 4$, exactly one of $x, -x$ is a
        // quadratic residue.
        let s: Uint<LIMBS> = uint_from_be_slice(&marked)?;
        let x = s.wrapping_add(&Uint::<LIMBS>::ONE);
        let element = DynResidue::<LIMBS>::new(&x, self.params);

        if self.is_quadratic_residue(&element) {
            Ok(ZpElement(element))
        } else {
            let negated = self.params.modulus().wrapping_sub(&x);
            Ok(ZpElement(DynResidue::<LIMBS>::new(&negated, self.params)))
        }
    }

    fn decode_element_to_bytes(&self, element: &Self::Element) -> Result<Vec<u8>> {
        if !self.is_member(element) {
            return Err(Error::InvalidGroupElement);
        }

        let y = element.value();
        let x = if y <= self.order {
            y
        } else {
            self.params.modulus().wrapping_sub(&y)
        };
        let s = x.wrapping_sub(&Uint::<LIMBS>::ONE);

        let bytes = uint_to_be_bytes(&s);
        let start = bytes
            .iter()
            .position(|byte| *byte != 0)
            .ok_or(Error::NotAnEncoding)?;

        if bytes[start] != ENCODING_MARKER
            || bytes.len() - start - 1 > self.max_encodable_byte_length()
        {
            return Err(Error::NotAnEncoding);
        }

        Ok(bytes[start + 1..].to_vec())
    }

    fn serialize_element(&self, element: &Self::Element) -> String {
        uint_to_hex(&element.value())
    }

    fn deserialize_element(&self, serialized: &str) -> Result<Self::Element> {
        let value: Uint<LIMBS> = uint_from_hex(serialized)?;
        if value >= *self.params.modulus() {
            return Err(Error::InvalidGroupElement);
        }

        let element = ZpElement(DynResidue::<LIMBS>::new(&value, self.params));
        if !self.is_member(&element) {
            return Err(Error::InvalidGroupElement);
        }

        Ok(element)
    }
}
