#[inline(never)]
pub fn xxh32(bytes: &[u8], seed: u32) -> u32 {
    xxhashes::xxh32::hash(bytes, seed)
}

#[inline(never)]
pub fn xxh64(bytes: &[u8], seed: u64) -> u64 {
    xxhashes::xxh64::hash(bytes, seed)
}

#[inline(never)]
pub fn xxh3_64(bytes: &[u8], seed: u64) -> u64 {
    xxhashes::xxh3::hash(bytes, seed)
}

#[inline(never)]
pub fn xxh128(bytes: &[u8], seed: u64) -> u128 {
    xxhashes::xxh128::hash(bytes, seed).as_u128()
}
