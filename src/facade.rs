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

//! Entry points over anything byte-like, plus stream consumption.
//!
//! Absent input ([`None`]) hashes to `0` under every variant, which is distinct from the
//! digest of an empty sequence.

use super::*;
#[cfg(feature = "std")]
use std::{string::String, vec::Vec};

/// A byte view the facade can hash, or nothing at all.
pub trait Input {
    /// `None` marks absent input.
    fn bytes(&self) -> Option<&[u8]>;
}

impl Input for [u8] {
    #[inline]
    fn bytes(&self) -> Option<&[u8]> {
        Some(self)
    }
}
impl<const N: usize> Input for [u8; N] {
    #[inline]
    fn bytes(&self) -> Option<&[u8]> {
        Some(self)
    }
}
/// Text is hashed over its UTF-8 encoding.
impl Input for str {
    #[inline]
    fn bytes(&self) -> Option<&[u8]> {
        Some(self.as_bytes())
    }
}
#[cfg(feature = "std")]
impl Input for Vec<u8> {
    #[inline]
    fn bytes(&self) -> Option<&[u8]> {
        Some(self)
    }
}
#[cfg(feature = "std")]
impl Input for String {
    #[inline]
    fn bytes(&self) -> Option<&[u8]> {
        Some(self.as_bytes())
    }
}
impl<T: Input + ?Sized> Input for &T {
    #[inline]
    fn bytes(&self) -> Option<&[u8]> {
        (**self).bytes()
    }
}
impl<T: Input> Input for Option<T> {
    #[inline]
    fn bytes(&self) -> Option<&[u8]> {
        self.as_ref().and_then(|inner| inner.bytes())
    }
}

/// xxHash32 with seed 0.
#[inline]
pub fn hash32<I: Input + ?Sized>(input: &I) -> u32 {
    hash32_with_seed(input, 0)
}
/// xxHash32.
#[inline]
pub fn hash32_with_seed<I: Input + ?Sized>(input: &I, seed: u32) -> u32 {
    input.bytes().map_or(0, |bytes| xxh32::hash(bytes, seed))
}

/// xxHash64 with seed 0.
#[inline]
pub fn hash64<I: Input + ?Sized>(input: &I) -> u64 {
    hash64_with_seed(input, 0)
}
/// xxHash64.
#[inline]
pub fn hash64_with_seed<I: Input + ?Sized>(input: &I, seed: u64) -> u64 {
    input.bytes().map_or(0, |bytes| xxh64::hash(bytes, seed))
}

/// XXH3-64 with seed 0.
#[inline]
pub fn hash3_64<I: Input + ?Sized>(input: &I) -> u64 {
    hash3_64_with_seed(input, 0)
}
/// XXH3-64.
#[inline]
pub fn hash3_64_with_seed<I: Input + ?Sized>(input: &I, seed: u64) -> u64 {
    input.bytes().map_or(0, |bytes| xxh3::hash(bytes, seed))
}

/// 128-bit hash with seed 0.
#[inline]
pub fn hash128<I: Input + ?Sized>(input: &I) -> Hash128 {
    hash128_with_seed(input, 0)
}
/// 128-bit hash. Absent input gives `Hash128::new(0, 0)`.
#[inline]
pub fn hash128_with_seed<I: Input + ?Sized>(input: &I, seed: u64) -> Hash128 {
    input.bytes().map_or(Hash128::default(), |bytes| xxh128::hash(bytes, seed))
}

/// [`hash32`], bits reinterpreted as signed.
#[inline]
pub fn hash32s<I: Input + ?Sized>(input: &I) -> i32 {
    hash32(input) as i32
}
/// [`hash32_with_seed`], bits reinterpreted as signed.
#[inline]
pub fn hash32s_with_seed<I: Input + ?Sized>(input: &I, seed: u32) -> i32 {
    hash32_with_seed(input, seed) as i32
}
/// [`hash64`], bits reinterpreted as signed.
#[inline]
pub fn hash64s<I: Input + ?Sized>(input: &I) -> i64 {
    hash64(input) as i64
}
/// [`hash64_with_seed`], bits reinterpreted as signed.
#[inline]
pub fn hash64s_with_seed<I: Input + ?Sized>(input: &I, seed: u64) -> i64 {
    hash64_with_seed(input, seed) as i64
}
/// [`hash3_64`], bits reinterpreted as signed.
#[inline]
pub fn hash3_64s<I: Input + ?Sized>(input: &I) -> i64 {
    hash3_64(input) as i64
}
/// [`hash3_64_with_seed`], bits reinterpreted as signed.
#[inline]
pub fn hash3_64s_with_seed<I: Input + ?Sized>(input: &I, seed: u64) -> i64 {
    hash3_64_with_seed(input, seed) as i64
}

#[cfg(feature = "std")]
pub use stream::*;

#[cfg(feature = "std")]
mod stream {
    use super::*;
    use std::{io, vec};
    use tracing::{debug, warn};

    /// Read size used by [`StreamConfig::default`].
    pub const DEFAULT_BUFFER_SIZE: usize = 4096;

    /// How a reader is drained: the seed every variant starts from, and how many bytes are
    /// requested per read.
    ///
    /// The 32-bit variant takes the low 32 bits of `seed`.
    #[derive(Clone, Copy, Debug, PartialEq, Eq)]
    pub struct StreamConfig {
        /// Seed handed to the hasher.
        pub seed: u64,
        /// Bytes requested per read. Must be positive.
        pub buffer_size: usize,
    }

    impl Default for StreamConfig {
        fn default() -> Self {
            Self::new()
        }
    }

    #[allow(missing_docs)]
    impl StreamConfig {
        pub const fn new() -> Self {
            Self { seed: 0, buffer_size: DEFAULT_BUFFER_SIZE }
        }
        pub const fn with_seed(self, seed: u64) -> Self {
            Self { seed, ..self }
        }
        pub const fn with_buffer_size(self, buffer_size: usize) -> Self {
            Self { buffer_size, ..self }
        }

        pub fn hash32<R: io::Read>(&self, reader: R) -> Result<u32> {
            drain::<Hasher32, R>(self, reader)
        }
        pub fn hash64<R: io::Read>(&self, reader: R) -> Result<u64> {
            drain::<Hasher64, R>(self, reader)
        }
        pub fn hash3_64<R: io::Read>(&self, reader: R) -> Result<u64> {
            drain::<Xxh3Hasher, R>(self, reader)
        }
        pub fn hash128<R: io::Read>(&self, reader: R) -> Result<Hash128> {
            drain::<Hasher128, R>(self, reader)
        }

        pub fn hash32s<R: io::Read>(&self, reader: R) -> Result<i32> {
            self.hash32(reader).map(|h| h as i32)
        }
        pub fn hash64s<R: io::Read>(&self, reader: R) -> Result<i64> {
            self.hash64(reader).map(|h| h as i64)
        }
        pub fn hash3_64s<R: io::Read>(&self, reader: R) -> Result<i64> {
            self.hash3_64(reader).map(|h| h as i64)
        }

        fn validate(&self) -> Result<()> {
            if self.buffer_size == 0 {
                warn!(buffer_size = self.buffer_size, "rejected stream configuration");
                return Err(Error::InvalidArgument {
                    name: "buffer_size",
                    reason: "must be positive",
                });
            }
            Ok(())
        }
    }

    /// Drains `reader` through xxHash32 with [`StreamConfig::default`].
    pub fn hash32_stream<R: io::Read>(reader: R) -> Result<u32> {
        StreamConfig::default().hash32(reader)
    }
    /// Drains `reader` through xxHash64 with [`StreamConfig::default`].
    pub fn hash64_stream<R: io::Read>(reader: R) -> Result<u64> {
        StreamConfig::default().hash64(reader)
    }
    /// Drains `reader` through XXH3-64 with [`StreamConfig::default`].
    pub fn hash3_64_stream<R: io::Read>(reader: R) -> Result<u64> {
        StreamConfig::default().hash3_64(reader)
    }
    /// Drains `reader` through the 128-bit engine with [`StreamConfig::default`].
    pub fn hash128_stream<R: io::Read>(reader: R) -> Result<Hash128> {
        StreamConfig::default().hash128(reader)
    }

    /// The streaming hashers, as seen by [`drain`].
    trait Streamed {
        const VARIANT: &'static str;
        type Output;

        fn seeded(seed: u64) -> Self;
        fn absorb(&mut self, bytes: &[u8]);
        fn digest(&self) -> Self::Output;
    }

    impl Streamed for Hasher32 {
        const VARIANT: &'static str = "xxh32";
        type Output = u32;

        fn seeded(seed: u64) -> Self {
            Self::with_seed(seed as u32)
        }
        fn absorb(&mut self, bytes: &[u8]) {
            self.update(bytes)
        }
        fn digest(&self) -> u32 {
            self.finish()
        }
    }
    impl Streamed for Hasher64 {
        const VARIANT: &'static str = "xxh64";
        type Output = u64;

        fn seeded(seed: u64) -> Self {
            Self::with_seed(seed)
        }
        fn absorb(&mut self, bytes: &[u8]) {
            self.update(bytes)
        }
        fn digest(&self) -> u64 {
            self.finish()
        }
    }
    impl Streamed for Xxh3Hasher {
        const VARIANT: &'static str = "xxh3_64";
        type Output = u64;

        fn seeded(seed: u64) -> Self {
            Self::with_seed(seed)
        }
        fn absorb(&mut self, bytes: &[u8]) {
            self.update(bytes)
        }
        fn digest(&self) -> u64 {
            self.finish()
        }
    }
    impl Streamed for Hasher128 {
        const VARIANT: &'static str = "xxh128";
        type Output = Hash128;

        fn seeded(seed: u64) -> Self {
            Self::with_seed(seed)
        }
        fn absorb(&mut self, bytes: &[u8]) {
            self.update(bytes)
        }
        fn digest(&self) -> Hash128 {
            self.finish()
        }
    }

    fn drain<H: Streamed, R: io::Read>(config: &StreamConfig, mut reader: R) -> Result<H::Output> {
        config.validate()?;

        let mut hasher = H::seeded(config.seed);
        let mut buffer = vec![0u8; config.buffer_size];
        let mut total = 0u64;
        loop {
            match reader.read(&mut buffer) {
                Ok(0) => break,
                Ok(n) => {
                    hasher.absorb(&buffer[..n]);
                    total += n as u64;
                }
                Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
                Err(e) => {
                    warn!(variant = H::VARIANT, bytes = total, error = %e, "stream read failed");
                    return Err(e.into());
                }
            }
        }

        debug!(
            variant = H::VARIANT,
            bytes = total,
            buffer_size = config.buffer_size,
            seed = config.seed,
            "stream hashed"
        );
        Ok(hasher.digest())
    }

}
