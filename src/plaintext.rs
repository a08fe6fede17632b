// Author: dWallet Labs, Ltd.
// SPDX-License-Identifier: BSD-3-Clause-Clear

use crate::{group::DlogGroup, sendable::SendableData};

/// A plaintext of ElGamal over group elements: a single element of the group.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Plaintext<E> {
    element: E,
}

impl<E> Plaintext<E> {
    pub fn new(element: E) -> Self {
        Plaintext { element }
    }

    pub fn element(&self) -> &E {
        &self.element
    }

    pub fn into_element(self) -> E {
        self.element
    }

    pub fn generate_sendable_data<const SCALAR_LIMBS: usize, G>(&self, group: &G) -> SendableData
    where
        G: DlogGroup<SCALAR_LIMBS, Element = E>,
    {
        SendableData::Plaintext {
            element: group.serialize_element(&self.element),
        }
    }
}
