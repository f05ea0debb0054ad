//! Rank-frequency analysis
//!
//! This module contains the numeric side of the pipeline:
//! - Ranking terms by descending frequency
//! - Deriving the theoretical Zipf curve from the ranked table

pub mod constants;
pub mod ranking;
pub mod zipf;

// Re-export analysis functions for convenience
pub use ranking::rank_by_frequency;
pub use zipf::{zipf_curve, ZipfError};
