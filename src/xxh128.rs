/*
 * Copyright (c) 2024 K--Aethiax
 *
 * Licensed under the Apache License, Version 2.0 (the "License");
 * you may not use this file except in compliance with the License.
 * You may obtain a copy of the License at
 *
 *     http://www.apache.org/licenses/LICENSE-2.0
 *
 * Unless required by applicable law or agreed to in writing, software
 * distributed under the License is distributed on an "AS IS" BASIS,
 * WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
 * See the License for the specific language governing permissions and
 * limitations under the License.
 *
 * Alternatively, the contents of this file may be used under the terms of
 * the MIT license as described below.
 *
 * Permission is hereby granted, free of charge, to any person obtaining a copy
 * of this software and associated documentation files (the "Software"), to deal
 * in the Software without restriction, including without limitation the rights
 * to use, copy, modify, merge, publish, distribute, sublicense, and/or sell
 * copies of the Software, and to permit persons to whom the Software is
 * furnished to do so, subject to the following conditions:
 *
 * The above copyright notice and this permission notice shall be included in all
 * copies or substantial portions of the Software.
 *
 * THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND, EXPRESS OR
 * IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF MERCHANTABILITY,
 * FITNESS FOR A PARTICULAR PURPOSE AND NONINFRINGEMENT. IN NO EVENT SHALL THE
 * AUTHORS OR COPYRIGHT HOLDERS BE LIABLE FOR ANY CLAIM, DAMAGES OR OTHER
 * LIABILITY, WHETHER IN AN ACTION OF CONTRACT, TORT OR OTHERWISE, ARISING FROM,
 * OUT OF OR IN CONNECTION WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE
 * SOFTWARE.
 */

//! The lane-folded 128-bit engine.
//!
//! Short and mid-size inputs follow the XXH3 layout, folding 32x32 partial products into a
//! low and a high accumulator. Inputs longer than 240 bytes take a cheaper path: each
//! 64-byte stripe is cross-multiplied against the first 64 bytes of the secret, perturbed by
//! the stripe position, and the final 64 bytes are always processed once more unperturbed.

use super::*;
use crate::mix::*;
use crate::xxh3::{MIDSIZE_LAST_OFFSET, MIDSIZE_MAX, MIDSIZE_START_OFFSET, STRIPE_LEN};
use core::fmt;

#[inline(always)]
fn hash_1to3(bytes: &[u8], seed: u64) -> (u64, u64) {
    let len = bytes.len();
    let combined = (((bytes[0] as u32) << 16)
        | ((bytes[len >> 1] as u32) << 24)
        | (bytes[len - 1] as u32)
        | ((len as u32) << 8)) as u64;
    let bitflip_lo = ((secret_u32(0) ^ secret_u32(4)) as u64).wrapping_add(seed);
    let bitflip_hi = ((secret_u32(8) ^ secret_u32(12)) as u64).wrapping_sub(seed);
    (avalanche64(combined ^ bitflip_lo), avalanche64(combined ^ bitflip_hi))
}
#[inline(always)]
fn hash_4to8(bytes: &[u8], seed: u64) -> (u64, u64) {
    let len = bytes.len();
    let seed = seed ^ (((seed as u32).swap_bytes() as u64) << 32);
    let input = (read_u32(&bytes[len - 4..]) as u64).wrapping_add((read_u32(bytes) as u64) << 32);
    let bitflip_lo = (secret_u64(8) ^ secret_u64(16)).wrapping_sub(seed);
    let bitflip_hi = (secret_u64(24) ^ secret_u64(32)).wrapping_add(seed);
    (rrmxmx(input ^ bitflip_lo, len as u64), rrmxmx(input ^ bitflip_hi, len as u64))
}
#[inline(always)]
fn hash_9to16(bytes: &[u8], seed: u64) -> (u64, u64) {
    let len = bytes.len() as u64;
    let lo = read_u64(bytes) ^ (secret_u64(24) ^ secret_u64(32)).wrapping_add(seed);
    let hi = read_u64(&bytes[bytes.len() - 8..]) ^ (secret_u64(40) ^ secret_u64(48)).wrapping_sub(seed);
    let acc_lo = len
        .wrapping_add(lo.swap_bytes())
        .wrapping_add(hi)
        .wrapping_add(mul128_fold64(lo, hi));
    let acc_hi = len
        .wrapping_add(hi.swap_bytes())
        .wrapping_add(lo)
        .wrapping_add(mul128_fold64(hi, lo));
    (avalanche3(acc_lo), avalanche3(acc_hi))
}

#[inline(always)]
fn hash_0to16(bytes: &[u8], seed: u64) -> (u64, u64) {
    let len = bytes.len();
    if len > 8 {
        hash_9to16(bytes, seed)
    } else if len >= 4 {
        hash_4to8(bytes, seed)
    } else if len > 0 {
        hash_1to3(bytes, seed)
    } else {
        (
            avalanche64(seed ^ secret_u64(56) ^ secret_u64(64)),
            avalanche64(seed ^ secret_u64(72) ^ secret_u64(80)),
        )
    }
}

#[inline(always)]
fn hash_17to128(bytes: &[u8], seed: u64) -> (u64, u64) {
    let len = bytes.len();
    let mut acc_lo = (len as u64).wrapping_mul(PRIME64_1);
    let mut acc_hi = 0u64;
    let mut pair = |lo: usize, hi: usize, sec: usize| {
        acc_lo = acc_lo.wrapping_add(mix16b::<false>(&bytes[lo..], &SECRET[sec..], seed));
        acc_hi = acc_hi.wrapping_add(mix16b::<false>(&bytes[hi..], &SECRET[sec + 16..], seed));
    };
    if len > 32 {
        if len > 64 {
            if len > 96 {
                pair(48, len - 64, 96);
            }
            pair(32, len - 48, 64);
        }
        pair(16, len - 32, 32);
    }
    pair(0, len - 16, 0);
    (avalanche3(acc_lo), avalanche3(acc_hi))
}

#[inline(never)]
fn hash_129to240(bytes: &[u8], seed: u64) -> (u64, u64) {
    let len = bytes.len();
    let mut acc_lo = (len as u64).wrapping_mul(PRIME64_1);
    for i in 0..8 {
        acc_lo = acc_lo.wrapping_add(mix16b::<false>(&bytes[16 * i..], &SECRET[16 * i..], seed));
    }
    // Finalized here and once more on the way out.
    acc_lo = avalanche3(acc_lo);

    let mut acc_hi = 0u64;
    for i in 8..len / 16 {
        let sec = 16 * (i - 8) + MIDSIZE_START_OFFSET;
        acc_hi = acc_hi.wrapping_add(mix16b::<false>(&bytes[16 * i..], &SECRET[sec..], seed));
    }
    acc_hi = acc_hi.wrapping_add(mix16b::<false>(&bytes[len - 16..], &SECRET[MIDSIZE_LAST_OFFSET..], seed));
    (avalanche3(acc_lo), avalanche3(acc_hi))
}

/// `lo32(a) * lo32(b) + hi32(a) * hi32(b)`, wrapping.
#[inline(always)]
const fn mix32x32(a: u64, b: u64) -> u64 {
    (a & 0xFFFF_FFFF)
        .wrapping_mul(b & 0xFFFF_FFFF)
        .wrapping_add((a >> 32).wrapping_mul(b >> 32))
}

/// Key of the stripe starting at byte `64 * index`.
#[inline(always)]
const fn stripe_key(seed: u64, index: u64) -> u64 {
    seed.wrapping_add(index.wrapping_mul(STRIPE_LEN as u64))
}

/// Accumulators start at zero; the length terms are only added in [`finalize_long`].
#[inline(always)]
fn accumulate_stripe(acc: &mut (u64, u64), stripe: &[u8], key: u64) {
    for j in 0..8 {
        let data = read_u64(&stripe[8 * j..]);
        let secret = secret_u64(8 * j);
        acc.0 = acc.0.wrapping_add(mix32x32(data, secret ^ key));
        acc.1 = acc.1.wrapping_add(mix32x32(data, secret ^ key.wrapping_add(1)));
    }
}

#[inline(always)]
const fn finalize_long((acc_lo, acc_hi): (u64, u64), len: u64) -> (u64, u64) {
    (
        avalanche3(len.wrapping_mul(PRIME64_1).wrapping_add(acc_lo)),
        avalanche3(len.wrapping_mul(PRIME64_2).wrapping_add(acc_hi)),
    )
}

#[inline(never)]
fn hash_long(bytes: &[u8], seed: u64) -> (u64, u64) {
    let len = bytes.len();
    let mut acc = (0, 0);
    for (i, stripe) in bytes[..len - 1].chunks_exact(STRIPE_LEN).enumerate() {
        accumulate_stripe(&mut acc, stripe, stripe_key(seed, i as u64));
    }
    accumulate_stripe(&mut acc, &bytes[len - STRIPE_LEN..], seed);
    finalize_long(acc, len as u64)
}

#[inline(always)]
fn base_hash(bytes: &[u8], seed: u64) -> (u64, u64) {
    let len = bytes.len();
    if likely(len <= 16) {
        hash_0to16(bytes, seed)
    } else if len <= 128 {
        hash_17to128(bytes, seed)
    } else if len <= MIDSIZE_MAX {
        hash_129to240(bytes, seed)
    } else {
        hash_long(bytes, seed)
    }
}

/// One-shot 128-bit hash.
///
/// For inputs of at most 8 bytes the low half equals [`xxh3::hash`](crate::xxh3::hash) under
/// the same seed. Beyond that the two diverge.
#[inline]
pub fn hash(bytes: &[u8], seed: u64) -> Hash128 {
    let (low, high) = base_hash(bytes, seed);
    Hash128::new(low, high)
}

const BUFFER_LEN: usize = 256;

/// Streamed 128-bit hasher.
///
/// Up to 256 bytes are held back. Once more than that has arrived, whole stripes are folded
/// in as soon as it is certain at least one more byte follows them.
#[repr(align(8))]
#[derive(Clone)]
pub struct Hasher128 {
    buffer: [u8; BUFFER_LEN],
    buffered_len: usize,
    tot_len: u64,

    acc: (u64, u64),
    stripes: u64,
    seed: u64,
}
#[allow(missing_docs)]
impl Hasher128 {
    pub const fn new() -> Self {
        Self::with_seed(0)
    }
    pub const fn with_seed(seed: u64) -> Self {
        Self {
            buffer: [0; BUFFER_LEN],
            buffered_len: 0,
            tot_len: 0,
            acc: (0, 0),
            stripes: 0,
            seed,
        }
    }

    pub fn reset(&mut self) {
        *self = Self::with_seed(self.seed);
    }

    fn consume(&mut self, block: &[u8]) {
        for stripe in block.chunks_exact(STRIPE_LEN) {
            accumulate_stripe(&mut self.acc, stripe, stripe_key(self.seed, self.stripes));
            self.stripes = self.stripes.wrapping_add(1);
        }
    }

    pub fn update(&mut self, mut bytes: &[u8]) {
        self.tot_len = self.tot_len.wrapping_add(bytes.len() as u64);

        let off = self.buffered_len;
        if likely(bytes.len() <= BUFFER_LEN - off) {
            self.buffer[off..off + bytes.len()].copy_from_slice(bytes);
            self.buffered_len += bytes.len();
            return;
        }

        if off > 0 {
            let complete = BUFFER_LEN - off;
            self.buffer[off..].copy_from_slice(&bytes[..complete]);
            bytes = &bytes[complete..];
            let block = self.buffer;
            self.consume(&block);
            self.buffered_len = 0;
        }

        if bytes.len() > BUFFER_LEN {
            let mut last_stripe = &bytes[..0];
            while bytes.len() > BUFFER_LEN {
                let (block, rest) = bytes.split_at(BUFFER_LEN);
                self.consume(block);
                last_stripe = &block[BUFFER_LEN - STRIPE_LEN..];
                bytes = rest;
            }
            self.buffer[BUFFER_LEN - STRIPE_LEN..].copy_from_slice(last_stripe);
        }

        self.buffer[..bytes.len()].copy_from_slice(bytes);
        self.buffered_len = bytes.len();
    }

    pub fn finish(&self) -> Hash128 {
        let buffered = self.buffered_len;
        if unlikely(self.tot_len <= MIDSIZE_MAX as u64) {
            return hash(&self.buffer[..buffered], self.seed);
        }

        let mut acc = self.acc;
        let pending = &self.buffer[..buffered - 1];
        for (j, stripe) in pending.chunks_exact(STRIPE_LEN).enumerate() {
            let index = self.stripes.wrapping_add(j as u64);
            accumulate_stripe(&mut acc, stripe, stripe_key(self.seed, index));
        }

        if buffered >= STRIPE_LEN {
            accumulate_stripe(&mut acc, &self.buffer[buffered - STRIPE_LEN..buffered], self.seed);
        } else {
            let mut last_stripe = [0; STRIPE_LEN];
            let catchup = STRIPE_LEN - buffered;
            last_stripe[..catchup].copy_from_slice(&self.buffer[BUFFER_LEN - catchup..]);
            last_stripe[catchup..].copy_from_slice(&self.buffer[..buffered]);
            accumulate_stripe(&mut acc, &last_stripe, self.seed);
        }

        let (low, high) = finalize_long(acc, self.tot_len);
        Hash128::new(low, high)
    }
}
impl Default for Hasher128 {
    fn default() -> Self {
        Self::new()
    }
}
impl fmt::Debug for Hasher128 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("xxhashes::Hasher128 { ... }")
    }
}

#[cfg(test)]
mod test_vectors {
    use super::*;
    extern crate std;
    use std::{vec, vec::Vec};

    fn random_split(bytes: &[u8]) -> (&[u8], &[u8], &[u8]) {
        match bytes.len() as u64 {
            0 => (&[], &[], &[]),
            1 => (&bytes[0..1], &[], &[]),
            2 => (&bytes[0..1], &bytes[1..2], &[]),
            3 => (&bytes[0..1], &bytes[1..2], &bytes[2..3]),
            n => {
                let p = wyhash::wyrng(&mut n.clone()) % (n - 2);
                let q = wyhash::wyrng(&mut !n) % (n - p);
                let (x, y) = bytes.split_at(p as usize);
                let (y, z) = y.split_at(q as usize);
                (x, y, z)
            }
        }
    }

    fn sample(n: usize) -> Vec<u8> {
        (0..n).map(|i| (i * 31 + 7) as u8).collect()
    }

    #[test]
    fn one_shot_eq_streamed() {
        (0..2048).map(|n| (n, sample(n))).for_each(|(i, bytes)| {
            for seed in [0, 42, u64::MAX] {
                let one_shot = hash(&bytes, seed);
                let streamed = {
                    let mut hasher = Hasher128::with_seed(seed);
                    let (x, y, z) = random_split(&bytes);
                    hasher.update(x);
                    hasher.update(y);
                    hasher.update(z);
                    hasher.finish()
                };
                assert_eq!((i, seed, one_shot), (i, seed, streamed));
            }
        })
    }

    #[test]
    fn streamed_in_fixed_steps() {
        let bytes = sample(3000);
        for step in [1, 7, 64, 100, 256, 257, 600] {
            let mut hasher = Hasher128::with_seed(5);
            bytes.chunks(step).for_each(|chunk| hasher.update(chunk));
            assert_eq!((step, hasher.finish()), (step, hash(&bytes, 5)));
        }

        let mut hasher = Hasher128::with_seed(5);
        hasher.update(&bytes);
        hasher.reset();
        hasher.update(&bytes[..17]);
        assert_eq!(hasher.finish(), hash(&bytes[..17], 5));
    }

    #[test]
    fn low_half_matches_xxh3_up_to_8_bytes() {
        for n in 0..=8 {
            let bytes = sample(n);
            for seed in [0, 1, 42, 0xDEAD_BEEF_0000_0001, u64::MAX] {
                assert_eq!((n, hash(&bytes, seed).low()), (n, crate::xxh3::hash(&bytes, seed)));
            }
        }
        for n in [9, 16, 17, 128, 241] {
            let bytes = sample(n);
            assert_ne!(hash(&bytes, 0).low(), crate::xxh3::hash(&bytes, 0));
        }
    }

    #[test]
    fn length_class_boundaries_are_distinct() {
        for (a, b) in [(16, 17), (128, 129), (240, 241)] {
            assert_ne!(hash(&vec![0; a], 0), hash(&vec![0; b], 0));
        }
    }

    #[test]
    fn long_inputs_reprocess_the_tail() {
        let mut bytes = sample(300);
        let before = hash(&bytes, 0);
        bytes[299] ^= 1;
        assert_ne!(hash(&bytes, 0), before);
        bytes[299] ^= 1;
        bytes[0] ^= 1;
        assert_ne!(hash(&bytes, 0), before);
    }

    fn tester(seed: u64, res: &[(usize, u64, u64)]) {
        for &(n, low, high) in res {
            let ans = hash(&sample(n), seed);
            assert_eq!((n, ans.low(), ans.high()), (n, low, high));
        }
    }

    #[test]
    fn test_hash_seed_0() {
        #[rustfmt::skip] const RESULTS: &[(usize, u64, u64)] = &[
            (0, 0x2d06800538d394c2, 0x4f7a4eb1985fe98c),
            (1, 0x4c5cca45d0f4811f, 0x21304184fdbaebd5),
            (2, 0xa7e250c97710ff27, 0xcdd58dff30d21300),
            (3, 0x15f7093b173d005c, 0x7cf9243f87803416),
            (4, 0xdca012f95811b6b9, 0x66542d0614d27070),
            (5, 0xb290cafc7b254345, 0x3cde23c1008838a8),
            (8, 0xdec6a9a43575982e, 0x166a01320868c0a1),
            (9, 0x71b8f003bb57660a, 0x9ed15ac46d1b3473),
            (15, 0x1509b56ccc9514ed, 0x38d9335b8582168b),
            (16, 0x857ee9b900899d2a, 0xec584a93369bb88d),
            (17, 0x70527b38b16234be, 0x6f7814f73cc7619d),
            (31, 0x396a0ed2bb9dbcb3, 0x98a185ad774276cc),
            (32, 0x3095a1f950c98869, 0xfd69f7271c745576),
            (33, 0xba2ab722300db936, 0xf12bd473509b7a3c),
            (48, 0xd8d27da3f42a9fc9, 0x0a2e449aaa84414f),
            (63, 0x05832954ba8a0bc3, 0x2b49290bfaf04fb7),
            (64, 0x9f7b7b16529ac33d, 0xad154d632207e8ef),
            (65, 0x866cf90c10555106, 0x103351ebf46c69d1),
            (80, 0x10c8a230fa154ddf, 0x60e17eddfa26af09),
            (95, 0x91935fedf6c1d25e, 0x9b83ebc0b5f06b12),
            (96, 0x3e928e2efa03dbc9, 0x1472fc351f3b50e1),
            (97, 0xae5de8779fd5461d, 0xaa6c56f847a97dcb),
            (112, 0x26ce7269e9fec625, 0xbb911893d6a4d47d),
            (127, 0x6e556bc54f5b43ae, 0x980a3adb840b3b54),
            (128, 0xac9fe1315280393e, 0x801b4874c7ea8f40),
            (129, 0x1be95b76a5622c38, 0x1a48777e32ec9975),
            (143, 0xc97a8bb8606ca402, 0x542913b887fae12c),
            (144, 0x97625d2db264abda, 0xc37ab48f06f9f74e),
            (200, 0xa89056a26108a6f5, 0x76f5de0e927e7171),
            (239, 0xc1fcc70197e65b0f, 0x2e38fc1d967fd2e8),
            (240, 0x67857cc63223347c, 0x5650cc409f76c92e),
            (241, 0x758d7f07a9181d83, 0xc86871e4f87545ba),
            (255, 0x315e6c16aec809fa, 0xf95eb8799793820e),
            (256, 0x836b55403c223cd7, 0x8e50c2c0d04cc3ed),
            (257, 0x4d35ef3194210f46, 0xe0103d70bf44c27d),
            (300, 0xfa13c0d4c3b20f5c, 0x8477f66239f2dd17),
            (320, 0xf8dd4a291b4be71a, 0xe577e2f4b67bb16c),
            (1000, 0x2326867f050255d1, 0xe3532f1eae130c9d),
            (1024, 0x7b94d04e1f01e365, 0x73feccb3619e4cc2),
            (4096, 0x56293c1c81922eab, 0x9fca33ed12d80ba2),
        ];
        tester(0, RESULTS);
    }

    #[test]
    fn test_hash_seed_42() {
        #[rustfmt::skip] const RESULTS: &[(usize, u64, u64)] = &[
            (0, 0xb029411ff43d84d2, 0x5a3453241062dab6),
            (1, 0xc72384329881f542, 0x02720f698d3f603d),
            (2, 0xed2e7515375a990c, 0x7643c98e00a46122),
            (3, 0x0322c472f9dd3c8a, 0xb1aa59bece6f30c2),
            (4, 0x859b7ff8d1723aa1, 0x16d55f8d4bec1e34),
            (5, 0xa8484b6f2a914449, 0x592d9257368b528b),
            (8, 0xb18293e9a9982b58, 0xbab0cedf519e78a8),
            (9, 0x20f4c53277d0aba1, 0x050ab0d2d5fbf81f),
            (15, 0x32cea168bfdeb47d, 0x35de6b01ce9ee7f4),
            (16, 0xf678864c3ee7f062, 0x500b89b5d7fc8c85),
            (17, 0x33a3fcd4769ca66f, 0x7edf8e5682f2bff8),
            (31, 0x36dbc395a5467a37, 0x763f5fdecd3e9e0f),
            (32, 0xd95e18d8c3480147, 0x956a985e7bb38dab),
            (33, 0x4f119aee26b8c7d0, 0x861e81170fda175b),
            (48, 0x51fd6d86f07ca36b, 0xf0876389c83af11f),
            (63, 0xa904e3f0d1005a21, 0xdfc10f739ca42e04),
            (64, 0xabc505d2c96aaa57, 0x91f223e9cddbd2dd),
            (65, 0x5594bf590ee8a158, 0x4db5ddbf82480b9b),
            (80, 0x7e2cec8e7657e532, 0x06e01e5d0722947a),
            (95, 0x6c524d04fe826006, 0xa2db77414d0b5c37),
            (96, 0xd07d68d155aec765, 0x7f875cabe2219fd6),
            (97, 0x2cad99370d0f88ca, 0x44eff0b10509e588),
            (112, 0x9e2f6fe44ae60395, 0x691aa859770f9775),
            (127, 0x4bbd082b5a189fca, 0xea05a1e0a4d821c1),
            (128, 0x261c5d00f98791f0, 0x8dc7190f5381a897),
            (129, 0xd14d874fc2aff5a2, 0xa313fc77f56b0eff),
            (143, 0x0f40dd5f2c9068aa, 0x0ded5fcfe9652073),
            (144, 0xed78c4afe1da573c, 0x47dd9d002b14bb78),
            (200, 0x5dc4f6e8d740cb92, 0x86fedbce8befe48f),
            (239, 0x4b777cb5ea3090b1, 0x3f7403d2832c6b9b),
            (240, 0x380fd05428112cfe, 0x56f1134619bba1ca),
            (241, 0x39c7efaa4191d210, 0x1e0666febc0f6046),
            (255, 0xb7b55ea833499c2b, 0x485f89b1598cbe9b),
            (256, 0x4d0a04c93076d3eb, 0x06338afef3c7d516),
            (257, 0x6edc3589339f8a6f, 0xcd50083a6254df46),
            (300, 0x8bc0dc8723eb1d77, 0x1d668a953ecb2971),
            (320, 0x096bf5c5389c041c, 0x193ce6e5c920b777),
            (1000, 0xc3911cb47e40c475, 0x31ace8b7d56c7b01),
            (1024, 0xbaedfe03f7941cfd, 0xd92102151fd43cf1),
            (4096, 0x62d7b430f746a34c, 0xfe173ecd8c984d59),
        ];
        tester(42, RESULTS);
    }

    #[test]
    fn test_hash_seed_max() {
        #[rustfmt::skip] const RESULTS: &[(usize, u64, u64)] = &[
            (0, 0x4c093276ae47a555, 0x6165bd25145467e4),
            (1, 0x36ce6de3f8ce2550, 0xff0f3ec1eb08aa58),
            (2, 0x21fec988cc6cab28, 0x318c11fe4cf56600),
            (3, 0xdc48f60472a5945b, 0xddecd5fcaf4848fe),
            (4, 0xacf1f1587e5776f2, 0x838ce80cbcdd6a28),
            (5, 0xaf7ac5975477e0ca, 0x283b920ca95e4ad9),
            (8, 0x741c19391db323da, 0x2a571740d698cbb7),
            (9, 0xbf35e6a9a8a1810b, 0x20c8dbd8ef9fcdd7),
            (15, 0x70e8186d062c1ebb, 0xbd44c9b1bf77007a),
            (16, 0x6e86cc002f46712c, 0x6883aa73516b571e),
            (17, 0x5ce90b51c34f29c5, 0xf6e73f5fd2204de7),
            (31, 0x5faa8ffe781c34af, 0xef745f75233244df),
            (32, 0x786bc177555072c9, 0x01a78f906d27bb1c),
            (33, 0x3025724719d889dd, 0x743f1ee275f48a95),
            (48, 0xd8c2861b6b56b8ff, 0x5871577ca065c37e),
            (63, 0x46ffbf0e39fb72dc, 0xfee6e737a8f47536),
            (64, 0x9e138e0c23ae8d3b, 0x7b2428e61bff0a47),
            (65, 0x3a08d4e0fcbe8c23, 0x58f00f8b997936bd),
            (80, 0x108bb8ccf58232c3, 0x8403cfe16276c04f),
            (95, 0x96e1e13698da7d16, 0xc2414f76e8280112),
            (96, 0x62b5d235f555795b, 0x932ad04c1e6d4f58),
            (97, 0x3babb46667926527, 0x73d114ea17a5ac08),
            (112, 0x59255da6c5333b92, 0xb4d5b5bbaa406459),
            (127, 0xae072ea1b96331e3, 0x9bacc823e2562044),
            (128, 0xa5f0065066c29b9c, 0xb055a18a4cc2e8b4),
            (129, 0xd89cc4323710073a, 0xc9ffdf4ab4bd0fca),
            (143, 0xe5d924ff1ca1f140, 0xad7b6bb722937c3e),
            (144, 0x2513ce236ee612a1, 0x5c81cc240a1b5cfe),
            (200, 0x97b22c681c186eb1, 0x7a0c42ab565ad7ad),
            (239, 0x00d203a54c17cee4, 0x5e29d0f5fed7ae1f),
            (240, 0xf002a74141b10449, 0x87c21296fed8743e),
            (241, 0xb17b3592550c3a4a, 0x622e9178ec64f203),
            (255, 0x4c1c33433d2ccc1b, 0xd72eda8c969534f9),
            (256, 0xe1001d7f209bd2fe, 0x09701c367fcb76ba),
            (257, 0xf5441e208037df01, 0x55cac11d9a3b14fb),
            (300, 0x85b9aa48d3fcc13a, 0x2a234ea6262e0495),
            (320, 0x8b737f7525011a55, 0xfe41461730594871),
            (1000, 0xc7b35152e3b61a03, 0xe5efe2cc23f0a0d6),
            (1024, 0x53fae9f46bd3431f, 0x9aeef7f3e298e6ec),
            (4096, 0x665b18c307bf3950, 0xa1d6aaa3434b9ea3),
        ];
        tester(u64::MAX, RESULTS);
    }

    #[test]
    fn hello_world() {
        let h = hash(b"Hello, World!", 0);
        assert_eq!(h.high(), 0x37937b6f8cf6fc64);
        assert_eq!(h.low(), 0xaeaa5445ce304a88);
        assert_eq!(h, hash(b"Hello, World!", 0));
    }
}
