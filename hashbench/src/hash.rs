// Copyright (c) 2022, Mysten Labs, Inc.
// SPDX-License-Identifier: Apache-2.0

//! Hash functions exposed through a single fixed-output interface.
//!
//! Every algorithm is provided by a RustCrypto crate and wrapped so that it can be driven
//! through [HashFunction]:
//!
//! ```rust
//! # use hashbench::hash::*;
//! let digest = Sha256::digest(b"abc");
//! assert_eq!(
//!     digest.to_string(),
//!     "ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad"
//! );
//! ```

use std::fmt;

/// Represents a digest of `DIGEST_LEN` bytes.
#[derive(Hash, PartialEq, Eq, Clone, Ord, PartialOrd, Copy)]
pub struct Digest<const DIGEST_LEN: usize> {
    pub digest: [u8; DIGEST_LEN],
}

impl<const DIGEST_LEN: usize> Digest<DIGEST_LEN> {
    /// Create a new digest containing the given bytes
    pub fn new(digest: [u8; DIGEST_LEN]) -> Self {
        Digest { digest }
    }
}

impl<const DIGEST_LEN: usize> fmt::Debug for Digest<DIGEST_LEN> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> Result<(), fmt::Error> {
        write!(f, "Digest({})", hex::encode(self.digest))
    }
}

/// Lowercase hex, two characters per byte.
impl<const DIGEST_LEN: usize> fmt::Display for Digest<DIGEST_LEN> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> Result<(), fmt::Error> {
        write!(f, "{}", hex::encode(self.digest))
    }
}

impl<const DIGEST_LEN: usize> AsRef<[u8]> for Digest<DIGEST_LEN> {
    fn as_ref(&self) -> &[u8] {
        self.digest.as_ref()
    }
}

/// Trait implemented by hash functions providing a output of fixed length
pub trait HashFunction<const DIGEST_LENGTH: usize>: Default {
    /// The length of this hash functions digests in bytes.
    const OUTPUT_SIZE: usize = DIGEST_LENGTH;

    /// Create a new hash function of the given type
    fn new() -> Self {
        Self::default()
    }

    /// Process the given data, and update the internal of the hash function.
    fn update<Data: AsRef<[u8]>>(&mut self, data: Data);

    /// Retrieve result and consume hash function.
    fn finalize(self) -> Digest<DIGEST_LENGTH>;

    /// Compute the digest of the given data and consume the hash function.
    fn digest<Data: AsRef<[u8]>>(data: Data) -> Digest<DIGEST_LENGTH> {
        let mut h = Self::default();
        h.update(data);
        h.finalize()
    }
}

/// This wraps a `digest::Digest` as a `hashbench::hash::HashFunction`.
///
/// `DIGEST_LEN` must equal the output size of `Variant`.
#[derive(Default)]
pub struct HashFunctionWrapper<Variant: digest::Digest + 'static, const DIGEST_LEN: usize>(Variant);

impl<Variant: digest::Digest + 'static + Default, const DIGEST_LEN: usize> HashFunction<DIGEST_LEN>
    for HashFunctionWrapper<Variant, DIGEST_LEN>
{
    fn update<Data: AsRef<[u8]>>(&mut self, data: Data) {
        self.0.update(data);
    }

    fn finalize(self) -> Digest<DIGEST_LEN> {
        let mut digest = [0u8; DIGEST_LEN];
        digest.copy_from_slice(self.0.finalize().as_slice());
        Digest::new(digest)
    }
}

/// MD5
pub type Md5 = HashFunctionWrapper<md5::Md5, 16>;

/// SHA-1
pub type Sha1 = HashFunctionWrapper<sha1::Sha1, 20>;

/// SHA-2
pub type Sha256 = HashFunctionWrapper<sha2::Sha256, 32>;

/// SHA-3
pub type Sha3_256 = HashFunctionWrapper<sha3::Sha3_256, 32>;

/// BLAKE2b with its full 512-bit output.
pub type Blake2b512 = HashFunctionWrapper<blake2::Blake2b512, 64>;

/// BLAKE2s with its full 256-bit output.
pub type Blake2s256 = HashFunctionWrapper<blake2::Blake2s256, 32>;

/// SHAKE-128 squeezed to `DIGEST_LEN` bytes.
#[derive(Default)]
pub struct Shake128<const DIGEST_LEN: usize> {
    instance: sha3::Shake128,
}

impl<const DIGEST_LEN: usize> HashFunction<DIGEST_LEN> for Shake128<DIGEST_LEN> {
    fn update<Data: AsRef<[u8]>>(&mut self, data: Data) {
        digest::Update::update(&mut self.instance, data.as_ref());
    }

    fn finalize(self) -> Digest<DIGEST_LEN> {
        let mut digest = [0u8; DIGEST_LEN];
        digest::ExtendableOutput::finalize_xof_into(self.instance, &mut digest);
        Digest::new(digest)
    }
}
