//! Common infrastructure shared across the pipeline
//!
//! This module provides reusable infrastructure for:
//! - Data structures for frequency and ranked tables
//! - Plotting rank-frequency charts
//! - Console summaries of the top ranks

pub mod data_structures;
pub mod plots;
pub mod summary;

// Re-export commonly used items
pub use data_structures::{FrequencyRow, FrequencyTable, RankedTable, ZipfCurve};
pub use plots::PlotError;
