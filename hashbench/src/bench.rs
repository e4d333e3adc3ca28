// Copyright (c) 2022, Mysten Labs, Inc.
// SPDX-License-Identifier: Apache-2.0

//! Wall-clock timing of hash functions.
//!
//! Entries are measured strictly one after another so that no measurement is perturbed by
//! another one running concurrently.
//!
//! # Example
//! ```rust
//! # use hashbench::bench::Benchmark;
//! # use hashbench::functions::HASH_FUNCTIONS;
//! let benchmark = Benchmark::new("abc", 10).unwrap();
//! let mut report = Vec::new();
//! let timings = benchmark.run(HASH_FUNCTIONS.iter(), &mut report).unwrap();
//! assert_eq!(timings.len(), HASH_FUNCTIONS.len());
//! ```

use std::fmt;
use std::hint::black_box;
use std::io::Write;
use std::time::{Duration, Instant};

use tracing::{debug, info};

use crate::error::{HashBenchError, HashBenchResult};
use crate::functions::HashEntry;

/// The text every hash function is timed on.
pub const TEXT_TO_HASH: &str = "This is a sample text that shall be hashed by a hash function. It shouldn't really matter what it is so long as it's pretty long and proper to test the hash function, but it should work well and be fast in order to be selected as my preferred hash function!!!";

/// Number of invocations per hash function.
pub const DEFAULT_SAMPLES: u64 = 200_000;

/// Total time spent by one hash function over all samples.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Timing {
    pub name: &'static str,
    pub elapsed: Duration,
}

impl Timing {
    /// Elapsed time in milliseconds.
    pub fn millis(&self) -> f64 {
        self.elapsed.as_nanos() as f64 / 1_000_000.0
    }
}

/// Milliseconds always carry a fractional part, e.g. `MD5 took 12.0ms`.
impl fmt::Display for Timing {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} took {:?}ms", self.name, self.millis())
    }
}

/// Times hash functions over a fixed input.
#[derive(Clone, Debug)]
pub struct Benchmark {
    input: Vec<u8>,
    samples: u64,
}

impl Default for Benchmark {
    fn default() -> Self {
        Self {
            input: TEXT_TO_HASH.as_bytes().to_vec(),
            samples: DEFAULT_SAMPLES,
        }
    }
}

impl Benchmark {
    /// Create a benchmark hashing `text` `samples` times per function. Fails with
    /// [HashBenchError::InvalidInput] if `samples` is zero.
    pub fn new(text: &str, samples: u64) -> HashBenchResult<Self> {
        if samples == 0 {
            return Err(HashBenchError::InvalidInput);
        }
        Ok(Self {
            input: text.as_bytes().to_vec(),
            samples,
        })
    }

    pub fn input(&self) -> &[u8] {
        &self.input
    }

    pub fn samples(&self) -> u64 {
        self.samples
    }

    /// Invoke `entry` once per sample and measure the total elapsed time.
    pub fn time(&self, entry: &HashEntry) -> Timing {
        debug!(
            name = entry.name,
            samples = self.samples,
            "Timing hash function"
        );
        let start = Instant::now();
        for _ in 0..self.samples {
            black_box(entry.hex_digest(black_box(&self.input)));
        }
        let timing = Timing {
            name: entry.name,
            elapsed: start.elapsed(),
        };
        info!(
            name = timing.name,
            millis = timing.millis(),
            "Hash function timed"
        );
        timing
    }

    /// Time every entry in order, writing one line per entry to `out` as soon as it is
    /// measured. The first failure aborts the run.
    pub fn run<'a, I, W>(&self, entries: I, out: &mut W) -> HashBenchResult<Vec<Timing>>
    where
        I: IntoIterator<Item = &'a HashEntry>,
        W: Write,
    {
        let mut timings = Vec::new();
        for entry in entries {
            let timing = self.time(entry);
            writeln!(out, "{}", timing)?;
            out.flush()?;
            timings.push(timing);
        }
        Ok(timings)
    }
}
