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

//! xxHash32: four 32-bit lanes over 16-byte stripes.

use super::*;
use crate::mix::{read_u32, PRIME32_1, PRIME32_2, PRIME32_3, PRIME32_4, PRIME32_5};
use core::fmt;

const STRIPE_LEN: usize = 16;

#[inline(always)]
const fn round(acc: u32, lane: u32) -> u32 {
    acc.wrapping_add(lane.wrapping_mul(PRIME32_2))
        .rotate_left(13)
        .wrapping_mul(PRIME32_1)
}

#[inline(always)]
const fn avalanche(mut h: u32) -> u32 {
    h ^= h >> 15;
    h = h.wrapping_mul(PRIME32_2);
    h ^= h >> 13;
    h = h.wrapping_mul(PRIME32_3);
    h ^ (h >> 16)
}

#[inline(always)]
const fn init_lanes(seed: u32) -> [u32; 4] {
    [
        seed.wrapping_add(PRIME32_1).wrapping_add(PRIME32_2),
        seed.wrapping_add(PRIME32_2),
        seed,
        seed.wrapping_sub(PRIME32_1),
    ]
}

#[inline(always)]
fn consume_stripe(lanes: &mut [u32; 4], stripe: &[u8]) {
    lanes[0] = round(lanes[0], read_u32(&stripe[0..]));
    lanes[1] = round(lanes[1], read_u32(&stripe[4..]));
    lanes[2] = round(lanes[2], read_u32(&stripe[8..]));
    lanes[3] = round(lanes[3], read_u32(&stripe[12..]));
}

#[inline(always)]
const fn merge_lanes(lanes: &[u32; 4]) -> u32 {
    lanes[0]
        .rotate_left(1)
        .wrapping_add(lanes[1].rotate_left(7))
        .wrapping_add(lanes[2].rotate_left(12))
        .wrapping_add(lanes[3].rotate_left(18))
}

/// Words, then single bytes, then the avalanche. `tail` is shorter than a stripe.
#[inline(always)]
fn finalize(mut h: u32, tail: &[u8]) -> u32 {
    let mut words = tail.chunks_exact(4);
    for word in &mut words {
        h = h
            .wrapping_add(read_u32(word).wrapping_mul(PRIME32_3))
            .rotate_left(17)
            .wrapping_mul(PRIME32_4);
    }
    for &byte in words.remainder() {
        h = h
            .wrapping_add((byte as u32).wrapping_mul(PRIME32_5))
            .rotate_left(11)
            .wrapping_mul(PRIME32_1);
    }
    avalanche(h)
}

/// One-shot xxHash32.
#[inline]
pub fn hash(bytes: &[u8], seed: u32) -> u32 {
    let stripes = bytes.chunks_exact(STRIPE_LEN);
    let tail = stripes.remainder();
    let h = if unlikely(bytes.len() < STRIPE_LEN) {
        seed.wrapping_add(PRIME32_5)
    } else {
        let mut lanes = init_lanes(seed);
        stripes.for_each(|stripe| consume_stripe(&mut lanes, stripe));
        merge_lanes(&lanes)
    };
    // The length term is taken modulo 2^32.
    finalize(h.wrapping_add(bytes.len() as u32), tail)
}

/// Streamed xxHash32 hasher.
#[derive(Clone)]
pub struct Hasher32 {
    buffer: [u8; STRIPE_LEN],
    buffered_len: usize,
    tot_len: u64,

    lanes: [u32; 4],
    large: bool,
    seed: u32,
}
#[allow(missing_docs)]
impl Hasher32 {
    pub const fn new() -> Self {
        Self::with_seed(0)
    }
    pub const fn with_seed(seed: u32) -> Self {
        Self {
            buffer: [0; STRIPE_LEN],
            buffered_len: 0,
            tot_len: 0,
            lanes: init_lanes(seed),
            large: false,
            seed,
        }
    }

    /// Forgets everything written so far, keeping the seed.
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

    /// Does not consume the hasher; more bytes may be written afterwards.
    pub fn finish(&self) -> u32 {
        let h = if self.large {
            merge_lanes(&self.lanes)
        } else {
            self.seed.wrapping_add(PRIME32_5)
        };
        finalize(h.wrapping_add(self.tot_len as u32), &self.buffer[..self.buffered_len])
    }
}
impl Default for Hasher32 {
    fn default() -> Self {
        Self::new()
    }
}
impl fmt::Debug for Hasher32 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("xxhashes::Hasher32 { ... }")
    }
}
/// Widens the 32-bit digest; the upper half is always zero.
impl core::hash::Hasher for Hasher32 {
    fn finish(&self) -> u64 {
        self.finish() as u64
    }
    fn write(&mut self, bytes: &[u8]) {
        self.update(bytes)
    }
}
