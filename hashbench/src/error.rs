// Copyright (c) 2022, Mysten Labs, Inc.
// SPDX-License-Identifier: Apache-2.0

//! Collection of errors to be used in hashbench.
//!
//! Hashing a byte slice never fails, so every error here comes either from rejected
//! configuration or from writing the report. None of them are recoverable: a benchmark
//! has no meaningful partial result, so callers are expected to abort the run.

use thiserror::Error;

pub type HashBenchResult<T> = Result<T, HashBenchError>;

/// Collection of errors to be used in hashbench.
#[derive(Clone, Debug, Error, Eq, PartialEq)]
pub enum HashBenchError {
    /// Invalid value was given to the function
    #[error("Invalid value was given to the function")]
    InvalidInput,

    /// The requested hash function is not part of the benchmark table.
    #[error("Unknown hash function: {0}")]
    UnknownHashFunction(String),

    /// The report could not be written.
    #[error("Failed to write output: {0}")]
    Output(String),
}

impl From<std::io::Error> for HashBenchError {
    fn from(e: std::io::Error) -> Self {
        HashBenchError::Output(e.to_string())
    }
}
