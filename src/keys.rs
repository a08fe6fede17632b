// Author: dWallet Labs, Ltd.
// SPDX-License-Identifier: BSD-3-Clause-Clear

use std::fmt;

use crypto_bigint::Uint;
use subtle::ConstantTimeEq;

use crate::{
    group::{uint_to_hex, DlogGroup},
    sendable::SendableData,
};

/// An ElGamal public key $h = g^x$.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PublicKey<E> {
    h: E,
}

impl<E> PublicKey<E> {
    pub fn new(h: E) -> Self {
        PublicKey { h }
    }

    pub fn h(&self) -> &E {
        &self.h
    }

    pub fn generate_sendable_data<const SCALAR_LIMBS: usize, G>(&self, group: &G) -> SendableData
    where
        G: DlogGroup<SCALAR_LIMBS, Element = E>,
    {
        SendableData::PublicKey {
            h: group.serialize_element(&self.h),
        }
    }
}

/// An ElGamal private key: the discrete log $x \in \mathbb{Z}_q$ of the public key.
#[derive(Clone)]
pub struct PrivateKey<const SCALAR_LIMBS: usize> {
    x: Uint<SCALAR_LIMBS>,
}

impl<const SCALAR_LIMBS: usize> PrivateKey<SCALAR_LIMBS> {
    pub fn new(x: Uint<SCALAR_LIMBS>) -> Self {
        PrivateKey { x }
    }

    pub fn x(&self) -> &Uint<SCALAR_LIMBS> {
        &self.x
    }

    pub fn generate_sendable_data(&self) -> SendableData {
        SendableData::PrivateKey {
            x: uint_to_hex(&self.x),
        }
    }
}

impl<const SCALAR_LIMBS: usize> PartialEq for PrivateKey<SCALAR_LIMBS> {
    fn eq(&self, other: &Self) -> bool {
        self.x.ct_eq(&other.x).into()
    }
}

impl<const SCALAR_LIMBS: usize> Eq for PrivateKey<SCALAR_LIMBS> {}

impl<const SCALAR_LIMBS: usize> fmt::Debug for PrivateKey<SCALAR_LIMBS> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PrivateKey").finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use crypto_bigint::U256;

    use super::*;

    #[test]
    fn private_key_debug_does_not_leak_the_exponent() {
        let key = PrivateKey::new(U256::from(0x1337u64));

        assert!(!format!("{key:?}").contains("1337"));
    }

    #[test]
    fn private_keys_compare_by_exponent() {
        assert_eq!(
            PrivateKey::new(U256::from(3u64)),
            PrivateKey::new(U256::from(3u64))
        );
        assert_ne!(
            PrivateKey::new(U256::from(3u64)),
            PrivateKey::new(U256::from(4u64))
        );
    }
}
