// Copyright (c) 2022, Mysten Labs, Inc.
// SPDX-License-Identifier: Apache-2.0

//! The fixed, ordered table of hash functions that gets benchmarked.

use crate::error::{HashBenchError, HashBenchResult};
use crate::hash::{Blake2b512, Blake2s256, HashFunction, Md5, Sha1, Sha256, Sha3_256, Shake128};

/// Uniform call shape shared by every entry: bytes in, hex encoded digest out.
pub type HexDigestFn = fn(&[u8]) -> String;

/// A named binding from a human readable label to a digest producing function.
#[derive(Clone, Copy)]
pub struct HashEntry {
    pub name: &'static str,
    pub hash: HexDigestFn,
}

impl HashEntry {
    /// Hash `data` with this entry's function and return the hex encoded digest.
    pub fn hex_digest(&self, data: &[u8]) -> String {
        (self.hash)(data)
    }
}

impl std::fmt::Debug for HashEntry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_tuple("HashEntry").field(&self.name).finish()
    }
}

/// Adapter turning any [HashFunction] into a [HexDigestFn].
pub fn hex_digest<H: HashFunction<DIGEST_LEN>, const DIGEST_LEN: usize>(data: &[u8]) -> String {
    H::digest(data).to_string()
}

/// Output length used for the SHAKE-128 entry.
pub const SHAKE128_OUTPUT_LEN: usize = 32;

/// All benchmarked hash functions. The order of this table is the order of the report.
pub static HASH_FUNCTIONS: [HashEntry; 7] = [
    HashEntry {
        name: "MD5",
        hash: hex_digest::<Md5, 16>,
    },
    HashEntry {
        name: "SHA1",
        hash: hex_digest::<Sha1, 20>,
    },
    HashEntry {
        name: "SHA256",
        hash: hex_digest::<Sha256, 32>,
    },
    HashEntry {
        name: "SHA3-256",
        hash: hex_digest::<Sha3_256, 32>,
    },
    HashEntry {
        name: "SHAKE128",
        hash: hex_digest::<Shake128<SHAKE128_OUTPUT_LEN>, SHAKE128_OUTPUT_LEN>,
    },
    HashEntry {
        name: "BLAKE2b",
        hash: hex_digest::<Blake2b512, 64>,
    },
    HashEntry {
        name: "BLAKE2s",
        hash: hex_digest::<Blake2s256, 32>,
    },
];

/// Look up an entry by label, ignoring ASCII case.
pub fn find(name: &str) -> Option<&'static HashEntry> {
    HASH_FUNCTIONS
        .iter()
        .find(|entry| entry.name.eq_ignore_ascii_case(name))
}

/// Select the entries named in `names`, keeping table order. An empty selection means
/// every entry.
pub fn select<S: AsRef<str>>(names: &[S]) -> HashBenchResult<Vec<&'static HashEntry>> {
    if names.is_empty() {
        return Ok(HASH_FUNCTIONS.iter().collect());
    }
    for name in names {
        if find(name.as_ref()).is_none() {
            return Err(HashBenchError::UnknownHashFunction(
                name.as_ref().to_string(),
            ));
        }
    }
    Ok(HASH_FUNCTIONS
        .iter()
        .filter(|entry| {
            names
                .iter()
                .any(|name| entry.name.eq_ignore_ascii_case(name.as_ref()))
        })
        .collect())
}
