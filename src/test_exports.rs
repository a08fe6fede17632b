// Author: dWallet Labs, Ltd.
// SPDX-License-Identifier: BSD-3-Clause-Clear

use std::sync::OnceLock;

use crypto_bigint::U256;
use rand::{rngs::StdRng, SeedableRng};
use rand_core::OsRng;

use crate::group::{PublicParameters, ZpSafePrimeGroup};

pub type TestGroup = ZpSafePrimeGroup<{ U256::LIMBS }>;

/// Bit length of the modulus of [`zp_group()`].
pub const ZP_GROUP_BITS: usize = 128;

/// $ p = 23 = 2 \cdot 11 + 1 $, $ g = 4 $
pub fn toy_group() -> TestGroup {
    small_group(23, 4)
}

/// $ p = 47 = 2 \cdot 23 + 1 $, $ g = 4 $
pub fn other_toy_group() -> TestGroup {
    small_group(47, 4)
}

/// A safe-prime group of [`ZP_GROUP_BITS`] bits, generated once from a fixed seed.
pub fn zp_group() -> TestGroup {
    static GROUP: OnceLock<TestGroup> = OnceLock::new();

    GROUP
        .get_or_init(|| {
            let mut rng = StdRng::seed_from_u64(0x454c_4761_6d61_6c);
            ZpSafePrimeGroup::generate(ZP_GROUP_BITS, &mut rng).unwrap()
        })
        .clone()
}

fn small_group(modulus: u64, generator: u64) -> TestGroup {
    ZpSafePrimeGroup::new(
        PublicParameters {
            modulus: U256::from(modulus),
            generator: U256::from(generator),
        },
        &mut OsRng,
    )
    .unwrap()
}
