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

use super::*;
use core::{fmt, str::FromStr};

/// A 128-bit digest as a (low, high) pair of 64-bit halves.
///
/// Ordering and hashing follow the `u128` the pair spells, high half most significant.
/// The text form is 32 uppercase hex digits, high half first; the byte form is
/// little-endian, low half first.
#[derive(Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Hash128 {
    high: u64,
    low: u64,
}

#[allow(missing_docs)]
impl Hash128 {
    pub const fn new(low: u64, high: u64) -> Self {
        Self { high, low }
    }
    pub const fn low(&self) -> u64 {
        self.low
    }
    pub const fn high(&self) -> u64 {
        self.high
    }
    /// `(low, high)`.
    pub const fn into_parts(self) -> (u64, u64) {
        (self.low, self.high)
    }

    pub const fn as_u128(&self) -> u128 {
        u64s_to_u128(self.low, self.high)
    }
    pub const fn from_u128(x: u128) -> Self {
        let (low, high) = u128_to_u64s(x);
        Self { high, low }
    }

    /// 8 bytes of `low`, then 8 bytes of `high`, each little-endian.
    pub const fn to_bytes(&self) -> [u8; 16] {
        self.as_u128().to_le_bytes()
    }
    pub const fn from_bytes(bytes: [u8; 16]) -> Self {
        Self::from_u128(u128::from_le_bytes(bytes))
    }
}

impl From<u128> for Hash128 {
    fn from(x: u128) -> Self {
        Self::from_u128(x)
    }
}
impl From<Hash128> for u128 {
    fn from(h: Hash128) -> Self {
        h.as_u128()
    }
}
/// `(low, high)`.
impl From<(u64, u64)> for Hash128 {
    fn from((low, high): (u64, u64)) -> Self {
        Self::new(low, high)
    }
}
impl TryFrom<&[u8]> for Hash128 {
    type Error = Error;

    fn try_from(bytes: &[u8]) -> Result<Self> {
        let bytes: [u8; 16] = bytes.try_into().map_err(|_| Error::InvalidHash128)?;
        Ok(Self::from_bytes(bytes))
    }
}

impl fmt::Display for Hash128 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:016X}{:016X}", self.high, self.low)
    }
}
impl fmt::UpperHex for Hash128 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self, f)
    }
}
impl fmt::LowerHex for Hash128 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:016x}{:016x}", self.high, self.low)
    }
}
impl fmt::Debug for Hash128 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Hash128({self})")
    }
}

/// Exactly 32 hex digits, either case.
impl FromStr for Hash128 {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        if s.len() != 32 || !s.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(Error::InvalidHash128);
        }
        let parse = |digits| u64::from_str_radix(digits, 16).map_err(|_| Error::InvalidHash128);
        Ok(Self::new(parse(&s[16..])?, parse(&s[..16])?))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    extern crate std;
    use std::{format, string::ToString};

    const HELLO: Hash128 = Hash128::new(0xaeaa5445ce304a88, 0x37937b6f8cf6fc64);

    #[test]
    fn text_form() {
        assert_eq!(HELLO.to_string(), "37937B6F8CF6FC64AEAA5445CE304A88");
        assert_eq!(format!("{HELLO:X}"), "37937B6F8CF6FC64AEAA5445CE304A88");
        assert_eq!(format!("{HELLO:x}"), "37937b6f8cf6fc64aeaa5445ce304a88");
        assert_eq!(format!("{HELLO:?}"), "Hash128(37937B6F8CF6FC64AEAA5445CE304A88)");
        assert_eq!(Hash128::new(1, 0).to_string(), "00000000000000000000000000000001");
        assert_eq!(Hash128::default().to_string().len(), 32);

        assert_eq!("37937B6F8CF6FC64AEAA5445CE304A88".parse::<Hash128>().unwrap(), HELLO);
        assert_eq!("37937b6f8cf6fc64aeaa5445ce304a88".parse::<Hash128>().unwrap(), HELLO);
    }

    #[test]
    fn rejects_malformed_text() {
        for bad in [
            "",
            "37937B6F8CF6FC64AEAA5445CE304A8",
            "37937B6F8CF6FC64AEAA5445CE304A880",
            "+7937B6F8CF6FC64AEAA5445CE304A88",
            "37937B6F8CF6FC64AEAA5445CE304AG8",
            "37937B6F8CF6FC6\u{e9}AEAA5445CE304A8",
        ] {
            assert!(matches!(bad.parse::<Hash128>(), Err(Error::InvalidHash128)), "{bad:?}");
        }
    }

    #[test]
    fn byte_form() {
        let bytes = HELLO.to_bytes();
        assert_eq!(bytes[..8], 0xaeaa5445ce304a88u64.to_le_bytes());
        assert_eq!(bytes[8..], 0x37937b6f8cf6fc64u64.to_le_bytes());
        assert_eq!(Hash128::from_bytes(bytes), HELLO);
        assert_eq!(Hash128::try_from(&bytes[..]).unwrap(), HELLO);
        assert!(matches!(Hash128::try_from(&bytes[1..]), Err(Error::InvalidHash128)));
    }

    #[test]
    fn integer_views() {
        let x = 0x37937b6f8cf6fc64aeaa5445ce304a88u128;
        assert_eq!(HELLO.as_u128(), x);
        assert_eq!(Hash128::from(x), HELLO);
        assert_eq!(u128::from(HELLO), x);
        assert_eq!(Hash128::from((HELLO.low(), HELLO.high())), HELLO);
        assert_eq!(HELLO.into_parts(), (0xaeaa5445ce304a88, 0x37937b6f8cf6fc64));
    }

    #[test]
    fn ordering_follows_u128() {
        let a = Hash128::new(u64::MAX, 0);
        let b = Hash128::new(0, 1);
        assert!(a < b);
        assert_eq!(a.cmp(&b), a.as_u128().cmp(&b.as_u128()));
    }
}
