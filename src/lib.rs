//! # zipf-rank-plot
//! Compares a term-frequency table against Zipf's law.
//!
//! The pipeline is strictly sequential:
//! - [`counting`] optionally builds the table from raw text
//! - [`parsing`] loads the delimited table
//! - [`analysis::ranking`] orders it by descending frequency
//! - [`analysis::zipf`] derives the `C / rank` curve from the top frequency
//! - [`common::plots`] draws both series on log-log axes and saves the image

pub mod analysis;
pub mod common;
pub mod config;
pub mod counting;
pub mod display;
pub mod export;
pub mod parsing;

use analysis::{rank_by_frequency, zipf_curve, ZipfError};
use common::plots::{create_zipf_plot, format_constant};
use common::summary::{create_rank_entries, format_rank_table};
use common::{PlotError, RankedTable, ZipfCurve};
use config::{ConfigError, PipelineConfig};
use counting::{build_frequency_table, CountingError};
use export::{write_ranked_table, ExportError};
use log::{debug, info};
use parsing::{load_frequency_table, ParsingError};
use std::fs;
use thiserror::Error;

/// Errors that can occur during a run
#[derive(Error, Debug)]
pub enum ZipfPlotError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Counting error: {0}")]
    Counting(#[from] CountingError),

    #[error("Parsing error: {0}")]
    Parsing(#[from] ParsingError),

    #[error("Zipf curve error: {0}")]
    Zipf(#[from] ZipfError),

    #[error("Plot error: {0}")]
    Plot(#[from] PlotError),

    #[error("Export error: {0}")]
    Export(#[from] ExportError),
}

type Result<T> = core::result::Result<T, ZipfPlotError>;

/// Series produced by a run
#[derive(Debug, Clone, PartialEq)]
pub struct Analysis {
    pub ranked: RankedTable,
    pub curve: ZipfCurve,
}

/// Loads, ranks and derives the Zipf curve without producing any output.
///
/// An empty table is fatal here: there is no maximum frequency to take `C` from.
pub fn analyze(config: &PipelineConfig) -> Result<Analysis> {
    let table = load_frequency_table(&config.input, config.delimiter)?;
    info!("Loaded {} rows from {}", table.len(), config.input.display());

    let ranked = rank_by_frequency(table);
    let curve = zipf_curve(&ranked)?;
    info!("Zipf constant C = {}", format_constant(curve.constant));

    Ok(Analysis { ranked, curve })
}

/// Runs the whole pipeline: count (optional), analyze, summarise, export,
/// plot and display.
///
/// The image is the last file written. Every fatal error, including a failed
/// export, happens before it is renamed into place; an export written before a
/// failed plot is removed again.
pub fn run(config: &PipelineConfig) -> Result<Analysis> {
    config.validate()?;

    if !config.corpus.is_empty() {
        build_frequency_table(&config.corpus, &config.input, config.delimiter)?;
        info!("Saved frequency table to {}", config.input.display());
    }

    let analysis = analyze(config)?;

    if config.top > 0 {
        let entries = create_rank_entries(&analysis.ranked, &analysis.curve, config.top);
        println!(
            "{}",
            format_rank_table(&entries, Some("Observed vs Zipf Frequencies"))
        );
    }

    if let Some(ranked_output) = &config.ranked_output {
        write_ranked_table(ranked_output, &analysis.ranked, &analysis.curve, config.delimiter)?;
        info!("Saved ranked table to {}", ranked_output.display());
    }

    if let Err(e) = create_zipf_plot(&analysis.ranked, &analysis.curve, &config.output) {
        if let Some(ranked_output) = &config.ranked_output {
            let _ = fs::remove_file(ranked_output);
        }
        return Err(e.into());
    }
    info!("Saved plot to {}", config.output.display());

    if config.show && display::open_in_viewer(&config.output) {
        debug!("Opened {} in the default viewer", config.output.display());
    }

    Ok(analysis)
}
