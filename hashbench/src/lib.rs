// Copyright (c) 2022, Mysten Labs, Inc.
// SPDX-License-Identifier: Apache-2.0
#![warn(
    future_incompatible,
    nonstandard_style,
    rust_2018_idioms,
    rust_2021_compatibility
)]

#[cfg(test)]
#[path = "tests/hash_tests.rs"]
pub mod hash_tests;

#[cfg(test)]
#[path = "tests/functions_tests.rs"]
pub mod functions_tests;

#[cfg(test)]
#[path = "tests/bench_tests.rs"]
pub mod bench_tests;

pub mod bench;
pub mod error;
pub mod functions;
pub mod hash;
