//! Top-level module for the random character generator.
//!
//! This module provides:
//! - The set of permissible output characters (`Alphabet`)
//! - Uniform sampling and file output (`Generator`)
//! - Symbol frequency counting for uniformity checks (`Histogram`)

/// Ordered set of unique printable ASCII characters.
///
/// Immutable once built; the default covers codes 32 through 126.
pub mod alphabet;

/// High-level interface drawing characters and writing them to disk.
///
/// Draws are independent and uniform with replacement, using either the
/// thread-local RNG or a caller-supplied one.
pub mod generator;

/// Per-symbol counts and a chi-square statistic against the uniform
/// expectation.
pub mod frequency;
