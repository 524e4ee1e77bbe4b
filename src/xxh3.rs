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

//! XXH3, 64-bit output.
//!
//! Inputs up to 240 bytes are keyed by the default secret with the seed mixed into each read;
//! longer inputs run 64-byte stripes through eight accumulators against a secret derived from
//! the seed.

use super::*;
use crate::mix::*;
use core::fmt;

pub(crate) const STRIPE_LEN: usize = 64;
const ACC_NB: usize = 8;
const SECRET_CONSUME_RATE: usize = 8;
const STRIPES_PER_BLOCK: usize = (SECRET_LEN - STRIPE_LEN) / SECRET_CONSUME_RATE;
const BLOCK_LEN: usize = STRIPE_LEN * STRIPES_PER_BLOCK;

pub(crate) const MIDSIZE_MAX: usize = 240;
pub(crate) const MIDSIZE_START_OFFSET: usize = 3;
pub(crate) const MIDSIZE_LAST_OFFSET: usize = 119;
const LAST_STRIPE_OFFSET: usize = SECRET_LEN - STRIPE_LEN - 7;
const MERGE_OFFSET: usize = 11;

const INIT_ACC: [u64; ACC_NB] = [
    PRIME32_3 as u64,
    PRIME64_1,
    PRIME64_2,
    PRIME64_3,
    PRIME64_4,
    PRIME32_2 as u64,
    PRIME64_5,
    PRIME32_1 as u64,
];

/// Shifts every 16-byte pair of the default secret by `+seed` / `-seed`.
const fn derive_secret(seed: u64) -> [u8; SECRET_LEN] {
    let mut out = [0; SECRET_LEN];
    let mut i = 0;
    while i < SECRET_LEN / 16 {
        let lo = secret_u64(16 * i).wrapping_add(seed).to_le_bytes();
        let hi = secret_u64(16 * i + 8).wrapping_sub(seed).to_le_bytes();
        let mut j = 0;
        while j < 8 {
            out[16 * i + j] = lo[j];
            out[16 * i + 8 + j] = hi[j];
            j += 1;
        }
        i += 1;
    }
    out
}

#[inline(always)]
fn hash_1to3(bytes: &[u8], seed: u64) -> u64 {
    let len = bytes.len();
    let combined = ((bytes[0] as u32) << 16)
        | ((bytes[len >> 1] as u32) << 24)
        | (bytes[len - 1] as u32)
        | ((len as u32) << 8);
    let bitflip = ((secret_u32(0) ^ secret_u32(4)) as u64).wrapping_add(seed);
    avalanche64(combined as u64 ^ bitflip)
}
#[inline(always)]
fn hash_4to8(bytes: &[u8], seed: u64) -> u64 {
    let len = bytes.len();
    let seed = seed ^ (((seed as u32).swap_bytes() as u64) << 32);
    let input = (read_u32(&bytes[len - 4..]) as u64).wrapping_add((read_u32(bytes) as u64) << 32);
    let bitflip = (secret_u64(8) ^ secret_u64(16)).wrapping_sub(seed);
    rrmxmx(input ^ bitflip, len as u64)
}
#[inline(always)]
fn hash_9to16(bytes: &[u8], seed: u64) -> u64 {
    let len = bytes.len();
    let lo = read_u64(bytes) ^ (secret_u64(24) ^ secret_u64(32)).wrapping_add(seed);
    let hi = read_u64(&bytes[len - 8..]) ^ (secret_u64(40) ^ secret_u64(48)).wrapping_sub(seed);
    let acc = (len as u64)
        .wrapping_add(lo.swap_bytes())
        .wrapping_add(hi)
        .wrapping_add(fold64(lo, hi));
    avalanche3(acc)
}

#[inline(always)]
fn hash_0to16(bytes: &[u8], seed: u64) -> u64 {
    let len = bytes.len();
    if len > 8 {
        hash_9to16(bytes, seed)
    } else if len >= 4 {
        hash_4to8(bytes, seed)
    } else if len > 0 {
        hash_1to3(bytes, seed)
    } else {
        avalanche64(seed ^ secret_u64(56) ^ secret_u64(64))
    }
}

#[inline(always)]
fn hash_17to128(bytes: &[u8], seed: u64) -> u64 {
    let len = bytes.len();
    let mut acc = (len as u64).wrapping_mul(PRIME64_1);
    let mut pair = |lo: usize, hi: usize, sec: usize| {
        acc = acc
            .wrapping_add(mix16b::<true>(&bytes[lo..], &SECRET[sec..], seed))
            .wrapping_add(mix16b::<true>(&bytes[hi..], &SECRET[sec + 16..], seed));
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
    avalanche3(acc)
}

#[inline(never)]
fn hash_129to240(bytes: &[u8], seed: u64) -> u64 {
    let len = bytes.len();
    let mut acc = (len as u64).wrapping_mul(PRIME64_1);
    for i in 0..8 {
        acc = acc.wrapping_add(mix16b::<true>(&bytes[16 * i..], &SECRET[16 * i..], seed));
    }
    acc = avalanche3(acc);
    for i in 8..len / 16 {
        let sec = 16 * (i - 8) + MIDSIZE_START_OFFSET;
        acc = acc.wrapping_add(mix16b::<true>(&bytes[16 * i..], &SECRET[sec..], seed));
    }
    acc = acc.wrapping_add(mix16b::<true>(&bytes[len - 16..], &SECRET[MIDSIZE_LAST_OFFSET..], seed));
    avalanche3(acc)
}

#[inline(always)]
fn accumulate_512(acc: &mut [u64; ACC_NB], stripe: &[u8], secret: &[u8]) {
    for i in 0..ACC_NB {
        let data = read_u64(&stripe[8 * i..]);
        let keyed = data ^ read_u64(&secret[8 * i..]);
        acc[i ^ 1] = acc[i ^ 1].wrapping_add(data);
        acc[i] = acc[i].wrapping_add((keyed & 0xFFFF_FFFF).wrapping_mul(keyed >> 32));
    }
}

#[inline(always)]
fn scramble(acc: &mut [u64; ACC_NB], secret: &[u8]) {
    let key = &secret[SECRET_LEN - STRIPE_LEN..];
    for (i, a) in acc.iter_mut().enumerate() {
        let x = *a ^ (*a >> 47) ^ read_u64(&key[8 * i..]);
        *a = x.wrapping_mul(PRIME32_1 as u64);
    }
}

#[inline(always)]
fn accumulate(acc: &mut [u64; ACC_NB], stripes: &[u8], secret: &[u8], nb_stripes: usize) {
    for n in 0..nb_stripes {
        accumulate_512(acc, &stripes[n * STRIPE_LEN..], &secret[n * SECRET_CONSUME_RATE..]);
    }
}

#[inline(always)]
fn merge_accs(acc: &[u64; ACC_NB], secret: &[u8], start: u64) -> u64 {
    let mut result = start;
    for i in 0..4 {
        let lo = acc[2 * i] ^ read_u64(&secret[16 * i..]);
        let hi = acc[2 * i + 1] ^ read_u64(&secret[16 * i + 8..]);
        result = result.wrapping_add(fold64(lo, hi));
    }
    avalanche3(result)
}

#[inline(never)]
fn hash_long(bytes: &[u8], secret: &[u8; SECRET_LEN]) -> u64 {
    let len = bytes.len();
    let mut acc = INIT_ACC;

    let nb_blocks = (len - 1) / BLOCK_LEN;
    for block in bytes.chunks_exact(BLOCK_LEN).take(nb_blocks) {
        accumulate(&mut acc, block, secret, STRIPES_PER_BLOCK);
        scramble(&mut acc, secret);
    }

    let nb_stripes = ((len - 1) - BLOCK_LEN * nb_blocks) / STRIPE_LEN;
    accumulate(&mut acc, &bytes[nb_blocks * BLOCK_LEN..], secret, nb_stripes);
    accumulate_512(&mut acc, &bytes[len - STRIPE_LEN..], &secret[LAST_STRIPE_OFFSET..]);

    merge_accs(&acc, &secret[MERGE_OFFSET..], (len as u64).wrapping_mul(PRIME64_1))
}

/// One-shot XXH3-64.
#[inline]
pub fn hash(bytes: &[u8], seed: u64) -> u64 {
    let len = bytes.len();
    if likely(len <= 16) {
        hash_0to16(bytes, seed)
    } else if len <= 128 {
        hash_17to128(bytes, seed)
    } else if len <= MIDSIZE_MAX {
        hash_129to240(bytes, seed)
    } else if seed == 0 {
        hash_long(bytes, &SECRET)
    } else {
        hash_long(bytes, &derive_secret(seed))
    }
}

const BUFFER_LEN: usize = 256;
const BUFFER_STRIPES: usize = BUFFER_LEN / STRIPE_LEN;

/// Feeds `nb_stripes` stripes, scrambling whenever a block of the secret runs out.
///
/// `nb_stripes` never exceeds [`BUFFER_STRIPES`], so at most one block boundary is crossed.
#[inline(always)]
fn consume_stripes(
    acc: &mut [u64; ACC_NB],
    stripes_so_far: &mut usize,
    stripes: &[u8],
    nb_stripes: usize,
    secret: &[u8; SECRET_LEN],
) {
    let to_end = STRIPES_PER_BLOCK - *stripes_so_far;
    let offset = *stripes_so_far * SECRET_CONSUME_RATE;
    if to_end <= nb_stripes {
        accumulate(acc, stripes, &secret[offset..], to_end);
        scramble(acc, secret);
        accumulate(acc, &stripes[to_end * STRIPE_LEN..], secret, nb_stripes - to_end);
        *stripes_so_far = nb_stripes - to_end;
    } else {
        accumulate(acc, stripes, &secret[offset..], nb_stripes);
        *stripes_so_far += nb_stripes;
    }
}

/// Streamed XXH3-64 hasher.
///
/// Holds up to 256 bytes back so that the final stripe, which may overlap stripes already
/// consumed, is always available at [`finish`](Self::finish).
#[repr(align(8))]
#[derive(Clone)]
pub struct Xxh3Hasher {
    buffer: [u8; BUFFER_LEN],
    buffered_len: usize,
    tot_len: u64,

    acc: [u64; ACC_NB],
    stripes_in_block: usize,
    secret: [u8; SECRET_LEN],
    seed: u64,
}
#[allow(missing_docs)]
impl Xxh3Hasher {
    pub const fn new() -> Self {
        Self::with_seed(0)
    }
    pub const fn with_seed(seed: u64) -> Self {
        Self {
            buffer: [0; BUFFER_LEN],
            buffered_len: 0,
            tot_len: 0,
            acc: INIT_ACC,
            stripes_in_block: 0,
            secret: derive_secret(seed),
            seed,
        }
    }

    pub fn reset(&mut self) {
        self.buffered_len = 0;
        self.tot_len = 0;
        self.acc = INIT_ACC;
        self.stripes_in_block = 0;
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
            consume_stripes(
                &mut self.acc,
                &mut self.stripes_in_block,
                &self.buffer,
                BUFFER_STRIPES,
                &self.secret,
            );
            self.buffered_len = 0;
        }

        // At least one byte is always left behind for `finish`.
        if bytes.len() > BUFFER_LEN {
            let mut last_stripe = &bytes[..0];
            while bytes.len() > BUFFER_LEN {
                let (block, rest) = bytes.split_at(BUFFER_LEN);
                consume_stripes(&mut self.acc, &mut self.stripes_in_block, block, BUFFER_STRIPES, &self.secret);
                last_stripe = &block[BUFFER_LEN - STRIPE_LEN..];
                bytes = rest;
            }
            self.buffer[BUFFER_LEN - STRIPE_LEN..].copy_from_slice(last_stripe);
        }

        self.buffer[..bytes.len()].copy_from_slice(bytes);
        self.buffered_len = bytes.len();
    }

    pub fn finish(&self) -> u64 {
        if unlikely(self.tot_len <= MIDSIZE_MAX as u64) {
            return hash(&self.buffer[..self.buffered_len], self.seed);
        }

        let mut acc = self.acc;
        let mut stripes_in_block = self.stripes_in_block;
        let buffered = self.buffered_len;
        if buffered >= STRIPE_LEN {
            let nb_stripes = (buffered - 1) / STRIPE_LEN;
            consume_stripes(&mut acc, &mut stripes_in_block, &self.buffer, nb_stripes, &self.secret);
            accumulate_512(
                &mut acc,
                &self.buffer[buffered - STRIPE_LEN..buffered],
                &self.secret[LAST_STRIPE_OFFSET..],
            );
        } else {
            let mut last_stripe = [0; STRIPE_LEN];
            let catchup = STRIPE_LEN - buffered;
            last_stripe[..catchup].copy_from_slice(&self.buffer[BUFFER_LEN - catchup..]);
            last_stripe[catchup..].copy_from_slice(&self.buffer[..buffered]);
            accumulate_512(&mut acc, &last_stripe, &self.secret[LAST_STRIPE_OFFSET..]);
        }

        merge_accs(&acc, &self.secret[MERGE_OFFSET..], self.tot_len.wrapping_mul(PRIME64_1))
    }
}
impl Default for Xxh3Hasher {
    fn default() -> Self {
        Self::new()
    }
}
impl fmt::Debug for Xxh3Hasher {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("xxhashes::Xxh3Hasher { ... }")
    }
}
impl core::hash::Hasher for Xxh3Hasher {
    fn finish(&self) -> u64 {
        self.finish()
    }
    fn write(&mut self, bytes: &[u8]) {
        self.update(bytes)
    }
}

/// Builds seeded [`Xxh3Hasher`]s for `HashMap`/`HashSet`.
#[derive(Clone, Copy, Default, Debug, PartialEq, Eq)]
pub struct BuildXxh3 {
    seed: u64,
}
impl BuildXxh3 {
    /// Every hasher built will start from `seed`.
    pub const fn with_seed(seed: u64) -> Self {
        Self { seed }
    }
}
impl core::hash::BuildHasher for BuildXxh3 {
    type Hasher = Xxh3Hasher;

    fn build_hasher(&self) -> Self::Hasher {
        Xxh3Hasher::with_seed(self.seed)
    }
}
