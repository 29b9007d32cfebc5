use seahash::{hash, hash_seeded};

// Fixed keys for the second digest. Any constants distinct from SeaHash's
// defaults work; these must never change once filters are in use, or
// add/check would disagree on indices.
const SEED_A: u64 = 0x9e37_79b9_7f4a_7c15;
const SEED_B: u64 = 0xf39c_c060_5ced_c834;
const SEED_C: u64 = 0x1082_276b_f3a2_7251;
const SEED_D: u64 = 0x7109_2935_4fb2_1027;

/// Two independent 64-bit digests of the item.
///
/// h1 uses SeaHash's default keys, h2 a fixed alternate key set. Deriving h2
/// from h1 (or chaining one digest across rounds) correlates the probe
/// indices and inflates the real false-positive rate past the advertised
/// one, so both digests hash the input independently.
fn hash_pair(item: &[u8]) -> (u64, u64) {
    let h1 = hash(item);
    let h2 = hash_seeded(item, SEED_A, SEED_B, SEED_C, SEED_D);
    (h1, h2)
}

/// The k probe indices for `item` in a bit array of `array_size` bits.
///
/// Double hashing: index_i = (h1 + i * h2) mod m for i in [0, k). Pure
/// function of its arguments; add and check rely on it yielding the same
/// sequence for the same item. `array_size` must be non-zero (enforced at
/// filter construction).
pub fn indices(item: &str, hash_count: u32, array_size: usize) -> impl Iterator<Item = usize> {
    let (h1, h2) = hash_pair(item.as_bytes());
    let m = array_size as u64;
    (0..hash_count).map(move |i| (h1.wrapping_add((i as u64).wrapping_mul(h2)) % m) as usize)
}
