//! Default file names and plot dimensions
//!
//! The defaults reproduce the classic fixed-name invocation: read `freq.csv`
//! from the working directory and write `zipf_distribution.png` next to it.

/// Input table read when no path is given
pub const DEFAULT_INPUT_FILE: &str = "freq.csv";

/// Image written when no path is given
pub const DEFAULT_OUTPUT_FILE: &str = "zipf_distribution.png";

/// Field separator used by `freq.csv`
pub const DEFAULT_DELIMITER: u8 = b';';

/// Number of ranks printed in the console summary
pub const DEFAULT_SUMMARY_ROWS: usize = 10;

/// Output image width in pixels (a 10 inch figure at 100 dpi)
pub const PLOT_WIDTH: u32 = 1000;

/// Output image height in pixels (a 6 inch figure at 100 dpi)
pub const PLOT_HEIGHT: u32 = 600;
