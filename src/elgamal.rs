// Author: dWallet Labs, Ltd.
// SPDX-License-Identifier: BSD-3-Clause-Clear

use std::fmt;

use crypto_bigint::{rand_core::CryptoRngCore, NonZero, RandomMod, Uint};

use crate::{
    error::{Operand, SendableDataError},
    group::{uint_from_hex, DlogGroup},
    Ciphertext, Error, Plaintext, PrivateKey, PublicKey, Result, SendableData,
};

pub const ALGORITHM_NAME: &str = "ElGamal";

/// ElGamal encryption over the elements of a DDH-secure prime-order group.
///
/// The scheme owns its group, its source of randomness and the installed key-set. Key
/// installation takes `&mut self`, so it can never race with an in-flight encryption;
/// a single instance is not meant to be shared across threads, while independent instances
/// with their own randomness sources can run in parallel.
pub struct ElGamal<const SCALAR_LIMBS: usize, G, R>
where
    G: DlogGroup<SCALAR_LIMBS>,
    R: CryptoRngCore,
{
    group: G,
    order: NonZero<Uint<SCALAR_LIMBS>>,
    q_minus_one: Uint<SCALAR_LIMBS>,
    public_key: Option<PublicKey<G::Element>>,
    // $ q - x $ rather than $x$, so that decryption needs no inversion.
    decryption_exponent: Option<Uint<SCALAR_LIMBS>>,
    rng: R,
}

impl<const SCALAR_LIMBS: usize, G, R> ElGamal<SCALAR_LIMBS, G, R>
where
    G: DlogGroup<SCALAR_LIMBS>,
    R: CryptoRngCore,
{
    /// Instantiates the scheme over `group`, drawing all randomness from `rng`.
    ///
    /// Fails with [`Error::SecurityLevelUnmet`] unless DDH is believed to hold in `group`.
    pub fn new(group: G, rng: R) -> Result<Self> {
        if !group.is_ddh_secure() {
            return Err(Error::SecurityLevelUnmet);
        }

        let order: NonZero<Uint<SCALAR_LIMBS>> =
            Option::from(NonZero::new(group.order())).ok_or(Error::SecurityLevelUnmet)?;
        let q_minus_one = order.wrapping_sub(&Uint::<SCALAR_LIMBS>::ONE);
        tracing::debug!(group_type = group.group_type(), "instantiated ElGamal");

        Ok(ElGamal {
            group,
            order,
            q_minus_one,
            public_key: None,
            decryption_exponent: None,
            rng,
        })
    }

    pub fn algorithm_name(&self) -> &'static str {
        ALGORITHM_NAME
    }

    pub fn group(&self) -> &G {
        &self.group
    }

    pub fn public_key(&self) -> Option<&PublicKey<G::Element>> {
        self.public_key.as_ref()
    }

    pub fn is_key_set(&self) -> bool {
        self.public_key.is_some()
    }

    pub fn has_private_key(&self) -> bool {
        self.decryption_exponent.is_some()
    }

    /// Samples $x \leftarrow \mathbb{Z}_q$ and returns $(h = g^x, x)$.
    ///
    /// The key-set of this instance is left untouched; see [`Self::install_keys()`].
    pub fn generate_key_pair(&mut self) -> (PublicKey<G::Element>, PrivateKey<SCALAR_LIMBS>) {
        let x = self.sample_exponent();
        let h = self.group.exponentiate(&self.group.generator(), &x);
        tracing::debug!(group_type = self.group.group_type(), "generated key pair");

        (PublicKey::new(h), PrivateKey::new(x))
    }

    /// Installs the key-set used by all subsequent operations, replacing any previous one.
    ///
    /// Without a private key the instance can only encrypt and multiply.
    pub fn install_keys(
        &mut self,
        public_key: PublicKey<G::Element>,
        private_key: Option<PrivateKey<SCALAR_LIMBS>>,
    ) -> Result<()> {
        if !self.group.is_member(public_key.h()) {
            return Err(Error::InvalidKeyKind);
        }

        let decryption_exponent = match private_key {
            Some(private_key) => {
                if private_key.x() > &self.q_minus_one {
                    return Err(Error::InvalidKeyKind);
                }

                Some(self.order.wrapping_sub(private_key.x()))
            }
            None => None,
        };

        tracing::debug!(
            group_type = self.group.group_type(),
            with_private_key = decryption_exponent.is_some(),
            "installed keys"
        );

        self.public_key = Some(public_key);
        self.decryption_exponent = decryption_exponent;

        Ok(())
    }

    pub fn reconstruct_public_key(&self, data: &SendableData) -> Result<PublicKey<G::Element>> {
        let SendableData::PublicKey { h } = data else {
            return Err(data.unexpected("public key").into());
        };

        let h = self
            .group
            .deserialize_element(h)
            .map_err(SendableDataError::from)?;

        Ok(PublicKey::new(h))
    }

    pub fn reconstruct_private_key(&self, data: &SendableData) -> Result<PrivateKey<SCALAR_LIMBS>> {
        let SendableData::PrivateKey { x } = data else {
            return Err(data.unexpected("private key").into());
        };

        let x: Uint<SCALAR_LIMBS> = uint_from_hex(x).map_err(SendableDataError::from)?;
        if x > self.q_minus_one {
            return Err(SendableDataError::ExponentOutOfRange.into());
        }

        Ok(PrivateKey::new(x))
    }

    pub fn reconstruct_plaintext(&self, data: &SendableData) -> Result<Plaintext<G::Element>> {
        let SendableData::Plaintext { element } = data else {
            return Err(data.unexpected("plaintext").into());
        };

        let element = self
            .group
            .deserialize_element(element)
            .map_err(SendableDataError::from)?;

        Ok(Plaintext::new(element))
    }

    pub fn reconstruct_ciphertext(&self, data: &SendableData) -> Result<Ciphertext<G::Element>> {
        let SendableData::Ciphertext { c1, c2 } = data else {
            return Err(data.unexpected("ciphertext").into());
        };

        let c1 = self
            .group
            .deserialize_element(c1)
            .map_err(SendableDataError::from)?;
        let c2 = self
            .group
            .deserialize_element(c2)
            .map_err(SendableDataError::from)?;

        Ok(Ciphertext::new(c1, c2))
    }

    /// Encrypts `plaintext` under the installed public key with freshly sampled randomness.
    pub fn encrypt(&mut self, plaintext: &Plaintext<G::Element>) -> Result<Ciphertext<G::Element>> {
        if !self.is_key_set() {
            return Err(Error::NoPublicKeyInstalled);
        }

        let r = self.sample_exponent();

        self.encrypt_with_randomness(plaintext, &r)
    }

    /// Encrypts `plaintext` under the installed public key using the caller's randomness
    /// $r \in \mathbb{Z}_q$: $(c_1, c_2) = (g^r, h^r \cdot m)$.
    ///
    /// For protocols (e.g. sigma protocols) that need to know $r$ after the fact. The caller
    /// must never reuse an $r$ across encryptions.
    pub fn encrypt_with_randomness(
        &self,
        plaintext: &Plaintext<G::Element>,
        r: &Uint<SCALAR_LIMBS>,
    ) -> Result<Ciphertext<G::Element>> {
        let public_key = self.public_key.as_ref().ok_or(Error::NoPublicKeyInstalled)?;

        if !self.group.is_member(plaintext.element()) {
            return Err(Error::InvalidPlaintextKind);
        }

        self.check_randomness(r)?;

        let c1 = self.group.exponentiate(&self.group.generator(), r);
        let h_to_the_r = self.group.exponentiate(public_key.h(), r);
        let c2 = self
            .group
            .multiply_elements(&h_to_the_r, plaintext.element());
        tracing::trace!(group_type = self.group.group_type(), "encrypted");

        Ok(Ciphertext::new(c1, c2))
    }

    /// $ m = c_2 \cdot c_1^{q - x} = c_2 \cdot c_1^{-x} $
    pub fn decrypt(&self, ciphertext: &Ciphertext<G::Element>) -> Result<Plaintext<G::Element>> {
        let decryption_exponent = self
            .decryption_exponent
            .as_ref()
            .ok_or(Error::NoPrivateKeyInstalled)?;

        if !self.group.is_member(ciphertext.c1()) || !self.group.is_member(ciphertext.c2()) {
            return Err(Error::InvalidCiphertextKind);
        }

        let s = self
            .group
            .exponentiate(ciphertext.c1(), decryption_exponent);
        let m = self.group.multiply_elements(ciphertext.c2(), &s);
        tracing::trace!(group_type = self.group.group_type(), "decrypted");

        Ok(Plaintext::new(m))
    }

    pub fn max_plaintext_byte_length(&self) -> usize {
        self.group.max_encodable_byte_length()
    }

    /// Encodes an arbitrary byte payload as a plaintext of this scheme.
    pub fn generate_plaintext(&self, bytes: &[u8]) -> Result<Plaintext<G::Element>> {
        let max_length = self.max_plaintext_byte_length();
        if bytes.len() > max_length {
            return Err(Error::PlaintextTooLarge {
                length: bytes.len(),
                max_length,
            });
        }

        Ok(Plaintext::new(self.group.encode_bytes_to_element(bytes)?))
    }

    /// Recovers the byte payload of a plaintext created by [`Self::generate_plaintext()`].
    pub fn plaintext_to_bytes(&self, plaintext: &Plaintext<G::Element>) -> Result<Vec<u8>> {
        if !self.group.is_member(plaintext.element()) {
            return Err(Error::InvalidPlaintextKind);
        }

        Ok(self.group.decode_element_to_bytes(plaintext.element())?)
    }

    /// Homomorphically multiplies two ciphertexts, re-randomizing the result with freshly
    /// sampled randomness.
    pub fn multiply(
        &mut self,
        first: &Ciphertext<G::Element>,
        second: &Ciphertext<G::Element>,
    ) -> Result<Ciphertext<G::Element>> {
        if !self.is_key_set() {
            return Err(Error::NoPublicKeyInstalled);
        }

        let r = self.sample_exponent();

        self.multiply_with_randomness(first, second, &r)
    }

    /// Given $(u_1, v_1)$ and $(u_2, v_2)$, computes
    /// $(g^r \cdot u_1 \cdot u_2, h^r \cdot v_1 \cdot v_2)$: an encryption of the product of
    /// the plaintexts, re-randomized by $r \in \mathbb{Z}_q$.
    pub fn multiply_with_randomness(
        &self,
        first: &Ciphertext<G::Element>,
        second: &Ciphertext<G::Element>,
        r: &Uint<SCALAR_LIMBS>,
    ) -> Result<Ciphertext<G::Element>> {
        let public_key = self.public_key.as_ref().ok_or(Error::NoPublicKeyInstalled)?;

        self.check_operand(first, Operand::First)?;
        self.check_operand(second, Operand::Second)?;
        self.check_randomness(r)?;

        let g_to_the_r = self.group.exponentiate(&self.group.generator(), r);
        let u = self.group.multiply_elements(
            &self.group.multiply_elements(&g_to_the_r, first.c1()),
            second.c1(),
        );

        let h_to_the_r = self.group.exponentiate(public_key.h(), r);
        let v = self.group.multiply_elements(
            &self.group.multiply_elements(&h_to_the_r, first.c2()),
            second.c2(),
        );
        tracing::trace!(group_type = self.group.group_type(), "multiplied ciphertexts");

        Ok(Ciphertext::new(u, v))
    }

    /// Re-randomizes `ciphertext` with freshly sampled randomness, leaving its plaintext intact.
    pub fn rerandomize(
        &mut self,
        ciphertext: &Ciphertext<G::Element>,
    ) -> Result<Ciphertext<G::Element>> {
        if !self.is_key_set() {
            return Err(Error::NoPublicKeyInstalled);
        }

        let r = self.sample_exponent();

        self.rerandomize_with_randomness(ciphertext, &r)
    }

    /// $ (g^r \cdot c_1, h^r \cdot c_2) $, i.e. a multiplication by an encryption of the
    /// identity.
    pub fn rerandomize_with_randomness(
        &self,
        ciphertext: &Ciphertext<G::Element>,
        r: &Uint<SCALAR_LIMBS>,
    ) -> Result<Ciphertext<G::Element>> {
        let public_key = self.public_key.as_ref().ok_or(Error::NoPublicKeyInstalled)?;

        self.check_operand(ciphertext, Operand::First)?;
        self.check_randomness(r)?;

        let u = self.group.multiply_elements(
            &self.group.exponentiate(&self.group.generator(), r),
            ciphertext.c1(),
        );
        let v = self
            .group
            .multiply_elements(&self.group.exponentiate(public_key.h(), r), ciphertext.c2());

        Ok(Ciphertext::new(u, v))
    }

    fn check_operand(&self, ciphertext: &Ciphertext<G::Element>, operand: Operand) -> Result<()> {
        if self.group.is_member(ciphertext.c1()) && self.group.is_member(ciphertext.c2()) {
            Ok(())
        } else {
            Err(Error::ForeignGroupElement {
                operand,
                group_type: self.group.group_type(),
            })
        }
    }

    fn check_randomness(&self, r: &Uint<SCALAR_LIMBS>) -> Result<()> {
        // Exponents are unsigned, so only the upper bound of $[0, q-1]$ can be violated.
        if r > &self.q_minus_one {
            return Err(Error::InvalidRandomness);
        }

        Ok(())
    }

    /// Uniformly samples an exponent in $[0, q-1]$.
    fn sample_exponent(&mut self) -> Uint<SCALAR_LIMBS> {
        Uint::<SCALAR_LIMBS>::random_mod(&mut self.rng, &self.order)
    }
}

impl<const SCALAR_LIMBS: usize, G, R> fmt::Debug for ElGamal<SCALAR_LIMBS, G, R>
where
    G: DlogGroup<SCALAR_LIMBS>,
    R: CryptoRngCore,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ElGamal")
            .field("group", &self.group)
            .field("public_key", &self.public_key)
            .field("has_private_key", &self.has_private_key())
            .finish_non_exhaustive()
    }
}
