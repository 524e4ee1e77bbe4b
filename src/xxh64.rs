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

//! xxHash64: four 64-bit lanes over 32-byte stripes, plus a merge-round on the way out.

use super::*;
use crate::mix::{avalanche64, read_u32, read_u64, PRIME64_1, PRIME64_2, PRIME64_3, PRIME64_4, PRIME64_5};
use core::fmt;

const STRIPE_LEN: usize = 32;

#[inline(always)]
const fn round(acc: u64, lane: u64) -> u64 {
    acc.wrapping_add(lane.wrapping_mul(PRIME64_2))
        .rotate_left(31)
        .wrapping_mul(PRIME64_1)
}

#[inline(always)]
const fn merge_round(h: u64, lane: u64) -> u64 {
    (h ^ round(0, lane)).wrapping_mul(PRIME64_1).wrapping_add(PRIME64_4)
}

#[inline(always)]
const fn init_lanes(seed: u64) -> [u64; 4] {
    [
        seed.wrapping_add(PRIME64_1).wrapping_add(PRIME64_2),
        seed.wrapping_add(PRIME64_2),
        seed,
        seed.wrapping_sub(PRIME64_1),
    ]
}

#[inline(always)]
fn consume_stripe(lanes: &mut [u64; 4], stripe: &[u8]) {
    lanes[0] = round(lanes[0], read_u64(&stripe[0..]));
    lanes[1] = round(lanes[1], read_u64(&stripe[8..]));
    lanes[2] = round(lanes[2], read_u64(&stripe[16..]));
    lanes[3] = round(lanes[3], read_u64(&stripe[24..]));
}

#[inline(always)]
const fn merge_lanes(lanes: &[u64; 4]) -> u64 {
    let mut h = lanes[0]
        .rotate_left(1)
        .wrapping_add(lanes[1].rotate_left(7))
        .wrapping_add(lanes[2].rotate_left(12))
        .wrapping_add(lanes[3].rotate_left(18));
    h = merge_round(h, lanes[0]);
    h = merge_round(h, lanes[1]);
    h = merge_round(h, lanes[2]);
    merge_round(h, lanes[3])
}

#[inline(always)]
fn finalize(mut h: u64, tail: &[u8]) -> u64 {
    let mut words = tail.chunks_exact(8);
    for word in &mut words {
        h ^= round(0, read_u64(word));
        h = h.rotate_left(27).wrapping_mul(PRIME64_1).wrapping_add(PRIME64_4);
    }
    let mut rest = words.remainder();
    if rest.len() >= 4 {
        h ^= (read_u32(rest) as u64).wrapping_mul(PRIME64_1);
        h = h.rotate_left(23).wrapping_mul(PRIME64_2).wrapping_add(PRIME64_3);
        rest = &rest[4..];
    }
    for &byte in rest {
        h ^= (byte as u64).wrapping_mul(PRIME64_5);
        h = h.rotate_left(11).wrapping_mul(PRIME64_1);
    }
    avalanche64(h)
}

/// One-shot xxHash64.
#[inline]
pub fn hash(bytes: &[u8], seed: u64) -> u64 {
    let stripes = bytes.chunks_exact(STRIPE_LEN);
    let tail = stripes.remainder();
    let h = if unlikely(bytes.len() < STRIPE_LEN) {
        seed.wrapping_add(PRIME64_5)
    } else {
        let mut lanes = init_lanes(seed);
        stripes.for_each(|stripe| consume_stripe(&mut lanes, stripe));
        merge_lanes(&lanes)
    };
    finalize(h.wrapping_add(bytes.len() as u64), tail)
}

/// Streamed xxHash64 hasher.
///
/// Fewer than 32 bytes are ever held back; everything else is folded into the lanes as soon
/// as it arrives. [`finish`](Self::finish) takes `&self`, so a hasher can report a digest
/// and keep going.
#[derive(Clone)]
pub struct Hasher64 {
    buffer: [u8; STRIPE_LEN],
    buffered_len: usize,
    tot_len: u64,

    lanes: [u64; 4],
    large: bool,
    seed: u64,
}
#[allow(missing_docs)]
impl Hasher64 {
    pub const fn new() -> Self {
        Self::with_seed(0)
    }
    pub const fn with_seed(seed: u64) -> Self {
        Self {
            buffer: [0; STRIPE_LEN],
            buffered_len: 0,
            tot_len: 0,
            lanes: init_lanes(seed),
            large: false,
            seed,
        }
    }

    pub fn reset(&mut self) {
        *self = Self::with_seed(self.seed);
    }

    pub fn update(&mut self, mut bytes: &[u8]) {
        self.tot_len = self.tot_len.wrapping_add(bytes.len() as u64);

        let off = self.buffered_len;
        if off > 0 {
            let complete = STRIPE_LEN - off;
            if bytes.len() < complete {
                self.buffer[off..off + bytes.len()].copy_from_slice(bytes);
                self.buffered_len += bytes.len();
                return;
            }
            self.buffer[off..].copy_from_slice(&bytes[..complete]);
            consume_stripe(&mut self.lanes, &self.buffer);
            self.large = true;
            bytes = &bytes[complete..];
        }

        let stripes = bytes.chunks_exact(STRIPE_LEN);
        let remainder = stripes.remainder();
        self.large |= stripes.len() > 0;
        for stripe in stripes {
            consume_stripe(&mut self.lanes, stripe);
        }

        self.buffer[..remainder.len()].copy_from_slice(remainder);
        self.buffered_len = remainder.len();
    }

    pub fn finish(&self) -> u64 {
        let h = if self.large {
            merge_lanes(&self.lanes)
        } else {
            self.seed.wrapping_add(PRIME64_5)
        };
        finalize(h.wrapping_add(self.tot_len), &self.buffer[..self.buffered_len])
    }
}
impl Default for Hasher64 {
    fn default() -> Self {
        Self::new()
    }
}
impl fmt::Debug for Hasher64 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("xxhashes::Hasher64 { ... }")
    }
}
impl core::hash::Hasher for Hasher64 {
    fn finish(&self) -> u64 {
        self.finish()
    }
    fn write(&mut self, bytes: &[u8]) {
        self.update(bytes)
    }
}

/// Builds seeded [`Hasher64`]s for `HashMap`/`HashSet`.
#[derive(Clone, Copy, Default, Debug, PartialEq, Eq)]
pub struct BuildXxh64 {
    seed: u64,
}
impl BuildXxh64 {
    /// Every hasher built will start from `seed`.
    pub const fn with_seed(seed: u64) -> Self {
        Self { seed }
    }
}
impl core::hash::BuildHasher for BuildXxh64 {
    type Hasher = Hasher64;

    fn build_hasher(&self) -> Self::Hasher {
        Hasher64::with_seed(self.seed)
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

    #[test]
    fn one_shot_eq_streamed() {
        (0..1024).map(|n| (n, vec![0xAB; n])).for_each(|(i, bytes)| {
            let one_shot = hash(&bytes, 42);
            let streamed = {
                let mut hasher = Hasher64::with_seed(42);
                let (x, y, z) = random_split(&bytes);
                hasher.update(x);
                hasher.update(y);
                hasher.update(z);
                hasher.finish()
            };
            assert_eq!((i, one_shot), (i, streamed));
        })
    }

    #[test]
    fn empty_chunks_are_no_ops() {
        let bytes = (0..=255u8).cycle().take(777).collect::<Vec<_>>();
        let mut hasher = Hasher64::with_seed(3);
        for chunk in bytes.chunks(31) {
            hasher.update(&[]);
            hasher.update(chunk);
        }
        hasher.update(&[]);
        assert_eq!(hasher.finish(), hash(&bytes, 3));
    }

    #[test]
    fn finish_is_repeatable() {
        let mut hasher = Hasher64::new();
        hasher.update(&[0xAB; 40]);
        let first = hasher.finish();
        assert_eq!(first, hasher.finish());
        hasher.update(&[0xAB; 2]);
        assert_eq!(hasher.finish(), hash(&[0xAB; 42], 0));

        hasher.reset();
        assert_eq!(hasher.finish(), 0xef46db3751d8e999);
    }

    fn tester(h: fn(&[u8], u64) -> u64, res: &[u64]) {
        let msgs = (0..=64).map(|n| vec![0xAB; n]).collect::<Vec<_>>();

        let ans = msgs.iter().map(|msg| h(msg, 0)).collect::<Vec<_>>();
        std::println!("{:x?}", ans);

        assert_eq!(res.len(), ans.len());
        res.iter().zip(ans.into_iter()).for_each(|(e, a)| assert_eq!(*e, a));
    }

    #[test]
    fn test_hash() {
        #[rustfmt::skip] const RESULTS: &[u64] = &[
            0xef46db3751d8e999, 0xc84670da8b5b5ea8, 0xcfea2fc981a39f0d, 0x815aa2a2709c615f,
            0xb5c1a9dcf7f88bf5, 0xe417c3adb3404b9c, 0xccb157153acebcf3, 0x20e217d6092181ea,
            0xdff6c7499b11620c, 0xecc1ef222805376e, 0xd76b964013d88d19, 0x27d0d1f6f6ec51fe,
            0xfc0cb8e5d2e16a0c, 0xe51aa9227e0c8824, 0x37f6d7619548b2f5, 0x04ee3f4ea25fd2a9,
            0xd4e777c9e9fad39a, 0xaaff24568b4180d4, 0xfb3d1669e0471f21, 0x7731c53062666e7e,
            0x30ca3830d67b7950, 0x45836dbaf67abdcd, 0xf4ed5f339731ca3a, 0x3221c61f4bba7966,
            0x13b57943f9bd27b9, 0x93ef13a89ce79dbe, 0xa5bfac928681a765, 0x352d1b6e1a157007,
            0x5f72635dae704ac4, 0xfb331f49ea7c08d5, 0xc03247278150655b, 0xd8fe64e3b26ba9d8,
            0xef500f45d0d3849f, 0x2e807412b6564ae5, 0x32e6f760dcb13428, 0x0bd5283fc8b8e6f2,
            0x6e7e162ac70b50d8, 0xf6361e1f01b5a420, 0x5c2d3781e568a801, 0xf59395a0362a38f5,
            0xf60fa75740870016, 0x9555f897694d2200, 0xed96ab8102a3d5f1, 0xc8b1fa7468e48357,
            0x4fd64eff03dbba15, 0x1dd93e8d0bb9bc70, 0x13af42b28d71c0a7, 0xae8fa9a9cf33a833,
            0x1908c14399990b54, 0xbda4afe310514283, 0xf753ef56968f49ed, 0xf592b58225d4386b,
            0xbcd5fc55072664e6, 0x84a70fd76f5c7627, 0x47c5fb3209c80478, 0x0d420f731ed428f6,
            0x3349ab673debad03, 0x2bc67086129e754d, 0xe6d287d11d750c10, 0xc248b63ba18b939e,
            0x21758cbcd5f78296, 0x0b7818e08b2ee3e6, 0xd123b2897fc83ae5, 0x6f718b637fedff06,
            0x8e48e5409029ba8c,
        ];
        tester(hash, RESULTS);
    }

    #[test]
    fn known_values() {
        assert_eq!(hash(b"", 0), 0xef46db3751d8e999);
        assert_eq!(hash(b"a", 0), 0xd24ec4f1a98c6e5b);
        assert_eq!(hash(b"abc", 0), 0x44bc2cf5ad770999);
        assert_eq!(hash(b"Hello, World!", 0), 0xc49aacf8080fe47f);
        assert_eq!(hash(b"test1", 0), 0x0b8f97d6e4b71ad0);
        assert_eq!(hash(b"test2", 0), 0x890e0a4c7111eb87);
    }

    #[test]
    fn stripe_boundaries_are_distinct() {
        let (a, b, c) = (hash(&[0; 15], 0), hash(&[0; 16], 0), hash(&[0; 17], 0));
        assert!(a != b && b != c && a != c);
        let (a, b, c) = (hash(&[0; 31], 0), hash(&[0; 32], 0), hash(&[0; 33], 0));
        assert!(a != b && b != c && a != c);
    }

    #[test]
    fn build_hasher_is_seeded() {
        use core::hash::BuildHasher;

        let plain = BuildXxh64::default();
        let seeded = BuildXxh64::with_seed(42);
        assert_eq!(plain.hash_one(7u64), plain.hash_one(7u64));
        assert_ne!(plain.hash_one(7u64), seeded.hash_one(7u64));
        assert_eq!(seeded.hash_one(7u64), hash(&7u64.to_ne_bytes(), 42));
    }
}
