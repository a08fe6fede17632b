// Author: dWallet Labs, Ltd.
// SPDX-License-Identifier: BSD-3-Clause-Clear

use crate::{group::DlogGroup, sendable::SendableData};

/// An ElGamal ciphertext $(c_1, c_2) = (g^r, h^r \cdot m)$.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Ciphertext<E> {
    c1: E,
    c2: E,
}

impl<E> Ciphertext<E> {
    pub fn new(c1: E, c2: E) -> Self {
        Ciphertext { c1, c2 }
    }

    pub fn c1(&self) -> &E {
        &self.c1
    }

    pub fn c2(&self) -> &E {
        &self.c2
    }

    pub fn generate_sendable_data<const SCALAR_LIMBS: usize, G>(&self, group: &G) -> SendableData
    where
        G: DlogGroup<SCALAR_LIMBS, Element = E>,
    {
        SendableData::Ciphertext {
            c1: group.serialize_element(&self.c1),
            c2: group.serialize_element(&self.c2),
        }
    }
}
