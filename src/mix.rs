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

//! Primes, the shared secret table, and the mixing steps every engine is built from.

use super::*;

pub(crate) const PRIME32_1: u32 = 0x9E3779B1;
pub(crate) const PRIME32_2: u32 = 0x85EBCA77;
pub(crate) const PRIME32_3: u32 = 0xC2B2AE3D;
pub(crate) const PRIME32_4: u32 = 0x27D4EB2F;
pub(crate) const PRIME32_5: u32 = 0x165667B1;

pub(crate) const PRIME64_1: u64 = 0x9E3779B185EBCA87;
pub(crate) const PRIME64_2: u64 = 0xC2B2AE3D27D4EB4F;
pub(crate) const PRIME64_3: u64 = 0x165667B19E3779F9;
pub(crate) const PRIME64_4: u64 = 0x85EBCA77C2B2AE63;
pub(crate) const PRIME64_5: u64 = 0x27D4EB2F165667C5;

const PRIME_MX1: u64 = 0x165667919E3779F9;
const PRIME_MX2: u64 = 0x9FB21C651E98DF25;

pub(crate) const SECRET_LEN: usize = 192;

/// Keying material for XXH3 and the 128-bit engine. Read-only for the life of the process.
pub(crate) const SECRET: [u8; SECRET_LEN] = [
    0xb8, 0xfe, 0x6c, 0x39, 0x23, 0xa4, 0x4b, 0xbe, 0x7c, 0x01, 0x81, 0x2c, 0xf7, 0x21, 0xad, 0x1c,
    0xde, 0xd4, 0x6d, 0xe9, 0x83, 0x90, 0x97, 0xdb, 0x72, 0x40, 0xa4, 0xa4, 0xb7, 0xb3, 0x67, 0x1f,
    0xcb, 0x79, 0xe6, 0x4e, 0xcc, 0xc0, 0xe5, 0x78, 0x82, 0x5a, 0xd0, 0x7d, 0xcc, 0xff, 0x72, 0x21,
    0xb8, 0x08, 0x46, 0x74, 0xf7, 0x43, 0x24, 0x8e, 0xe0, 0x35, 0x90, 0xe6, 0x81, 0x3a, 0x26, 0x4c,
    0x3c, 0x28, 0x52, 0xbb, 0x91, 0xc3, 0x00, 0xcb, 0x88, 0xd0, 0x65, 0x8b, 0x1b, 0x53, 0x2e, 0xa3,
    0x71, 0x64, 0x48, 0x97, 0xa2, 0x0d, 0xf9, 0x4e, 0x38, 0x19, 0xef, 0x46, 0xa9, 0xde, 0xac, 0xd8,
    0xa8, 0xfa, 0x76, 0x3f, 0xe3, 0x9c, 0x34, 0x3f, 0xf9, 0xdc, 0xbb, 0xc7, 0xc7, 0x0b, 0x4f, 0x1d,
    0x8a, 0x51, 0xe0, 0x4b, 0xcd, 0xb4, 0x59, 0x31, 0xc8, 0x9f, 0x7e, 0xc9, 0xd9, 0x78, 0x73, 0x64,
    0xea, 0xc5, 0xac, 0x83, 0x34, 0xd3, 0xeb, 0xc3, 0xc5, 0x81, 0xa0, 0xff, 0xfa, 0x13, 0x63, 0xeb,
    0x17, 0x0d, 0xdd, 0x51, 0xb7, 0xf0, 0xda, 0x49, 0xd3, 0x16, 0x55, 0x26, 0x29, 0xd4, 0x68, 0x9e,
    0x2b, 0x16, 0xbe, 0x58, 0x7d, 0x47, 0xa1, 0xfc, 0x8f, 0xf8, 0xb8, 0xd1, 0x7a, 0xd0, 0x31, 0xce,
    0x45, 0xcb, 0x3a, 0x8f, 0x95, 0x16, 0x04, 0x28, 0xaf, 0xd7, 0xfb, 0xca, 0xbb, 0x4b, 0x40, 0x7e,
];

#[inline(always)]
pub(crate) fn read_u32(bytes: &[u8]) -> u32 {
    u32::from_le_bytes(bytes[0..4].try_into().unwrap())
}
#[inline(always)]
pub(crate) fn read_u64(bytes: &[u8]) -> u64 {
    u64::from_le_bytes(bytes[0..8].try_into().unwrap())
}

/// Little-endian 32-bit word of [`SECRET`] at byte offset `off`.
#[inline(always)]
pub(crate) const fn secret_u32(off: usize) -> u32 {
    u32::from_le_bytes([SECRET[off], SECRET[off + 1], SECRET[off + 2], SECRET[off + 3]])
}
/// Little-endian 64-bit word of [`SECRET`] at byte offset `off`.
#[inline(always)]
pub(crate) const fn secret_u64(off: usize) -> u64 {
    u64::from_le_bytes([
        SECRET[off],
        SECRET[off + 1],
        SECRET[off + 2],
        SECRET[off + 3],
        SECRET[off + 4],
        SECRET[off + 5],
        SECRET[off + 6],
        SECRET[off + 7],
    ])
}

/// XXH64 finalizer. Also used by the 0..=3 byte paths of XXH3 and the 128-bit engine.
#[inline(always)]
pub(crate) const fn avalanche64(mut h: u64) -> u64 {
    h ^= h >> 33;
    h = h.wrapping_mul(PRIME64_2);
    h ^= h >> 29;
    h = h.wrapping_mul(PRIME64_3);
    h ^ (h >> 32)
}

/// XXH3 finalizer for the 9-byte-and-up paths.
#[inline(always)]
pub(crate) const fn avalanche3(mut h: u64) -> u64 {
    h ^= h >> 37;
    h = h.wrapping_mul(PRIME_MX1);
    h ^ (h >> 32)
}

#[inline(always)]
pub(crate) const fn rrmxmx(mut h: u64, len: u64) -> u64 {
    h ^= h.rotate_left(49) ^ h.rotate_left(24);
    h = h.wrapping_mul(PRIME_MX2);
    h ^= (h >> 35).wrapping_add(len);
    h = h.wrapping_mul(PRIME_MX2);
    h ^ (h >> 28)
}

/// Four 32x32 partial products, folded as `lo + (cross << 32) + hi`.
///
/// This is *not* the low-xor-high fold of the true 128-bit product (see [`fold64`]):
/// the high half only carries `hi32(a) * hi32(b)`, and every sum wraps.
#[inline(always)]
pub(crate) const fn mul128_fold64(a: u64, b: u64) -> u64 {
    let (a_lo, a_hi) = (a & 0xFFFF_FFFF, a >> 32);
    let (b_lo, b_hi) = (b & 0xFFFF_FFFF, b >> 32);
    let lo = a_lo * b_lo;
    let hi = a_hi * b_hi;
    let cross = (a_hi * b_lo).wrapping_add(a_lo * b_hi);
    lo.wrapping_add(cross << 32).wrapping_add(hi)
}

/// Full 128-bit product, lower half xor upper half.
#[inline(always)]
pub(crate) const fn fold64(a: u64, b: u64) -> u64 {
    let (lo, hi) = wmul(a, b);
    lo ^ hi
}

/// Keys a 16-byte window against 16 bytes of secret and folds it.
///
/// `CANONICAL` selects [`fold64`] (XXH3) over [`mul128_fold64`] (the 128-bit engine).
#[inline(always)]
pub(crate) fn mix16b<const CANONICAL: bool>(input: &[u8], secret: &[u8], seed: u64) -> u64 {
    let lo = read_u64(&input[0..]) ^ read_u64(&secret[0..]).wrapping_add(seed);
    let hi = read_u64(&input[8..]) ^ read_u64(&secret[8..]).wrapping_sub(seed);
    if CANONICAL {
        fold64(lo, hi)
    } else {
        mul128_fold64(lo, hi)
    }
}
