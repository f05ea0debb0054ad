//! Theoretical Zipf curve generation
//!
//! Zipf's law predicts that the frequency of the term at rank `r` is roughly
//! `C / r`. The constant `C` is taken directly from the most frequent term, so
//! the curve always passes through the first observed point.

use crate::common::{RankedTable, ZipfCurve};
use thiserror::Error;

/// Errors that can occur while deriving the theoretical curve
#[derive(Error, Debug, PartialEq)]
pub enum ZipfError {
    #[error("Frequency table is empty; there is no maximum frequency to derive C from")]
    EmptyTable,

    #[error("Maximum frequency is {0}; C must be positive to draw C / r")]
    NonPositiveConstant(f64),
}

type Result<T> = core::result::Result<T, ZipfError>;

/// Computes `C / rank` for every rank of `ranked`, with `C = frequency[0]`.
///
/// # Returns
/// * `Ok(ZipfCurve)` - Same length as `ranked`, strictly decreasing
/// * `Err(ZipfError)` - If the table is empty or its maximum is zero
pub fn zipf_curve(ranked: &RankedTable) -> Result<ZipfCurve> {
    let constant = ranked.max_frequency().ok_or(ZipfError::EmptyTable)?;
    if constant <= 0.0 {
        return Err(ZipfError::NonPositiveConstant(constant));
    }

    let values = ranked
        .ranks()
        .map(|rank| constant / rank as f64)
        .collect();

    Ok(ZipfCurve { constant, values })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::ranking::rank_by_frequency;
    use crate::common::{FrequencyRow, FrequencyTable};
    use rstest::rstest;

    fn ranked(frequencies: &[f64]) -> RankedTable {
        rank_by_frequency(FrequencyTable::new(
            frequencies
                .iter()
                .enumerate()
                .map(|(index, &frequency)| FrequencyRow::new(index.to_string(), frequency))
                .collect(),
        ))
    }

    #[test]
    fn test_zipf_curve_scenario() {
        let curve = zipf_curve(&ranked(&[10.0, 5.0, 5.0, 1.0])).unwrap();

        assert_eq!(curve.constant, 10.0);
        assert_eq!(curve.len(), 4);
        assert_eq!(curve.values[0], 10.0);
        assert_eq!(curve.values[1], 5.0);
        assert!((curve.values[2] - 10.0 / 3.0).abs() < 1e-12);
        assert_eq!(curve.values[3], 2.5);
    }

    #[test]
    fn test_zipf_curve_uses_real_division() {
        let curve = zipf_curve(&ranked(&[7.0, 1.0, 1.0])).unwrap();
        assert!((curve.values[1] - 3.5).abs() < 1e-12);
        assert!((curve.values[2] - 7.0 / 3.0).abs() < 1e-12);
    }

    #[rstest]
    #[case(&[1.0])]
    #[case(&[3.0, 9.0, 27.0, 81.0])]
    #[case(&[0.5, 0.25, 0.0, 12.75, 12.75])]
    fn test_zipf_curve_properties(#[case] frequencies: &[f64]) {
        let table = ranked(frequencies);
        let curve = zipf_curve(&table).unwrap();
        let observed = table.frequencies();

        assert_eq!(curve.len(), table.len());
        assert_eq!(curve.values[0], observed[0]);
        assert_eq!(curve.constant, observed[0]);
        for (index, value) in curve.values.iter().enumerate() {
            let expected = curve.constant / (index + 1) as f64;
            assert!((value - expected).abs() <= f64::EPSILON * expected);
        }
        assert!(curve.values.windows(2).all(|pair| pair[0] > pair[1]));
    }

    #[test]
    fn test_zipf_curve_empty_table() {
        assert_eq!(zipf_curve(&ranked(&[])), Err(ZipfError::EmptyTable));
    }

    #[test]
    fn test_zipf_curve_zero_maximum() {
        assert_eq!(
            zipf_curve(&ranked(&[0.0, 0.0])),
            Err(ZipfError::NonPositiveConstant(0.0))
        );
    }
}
