use std::ops::Range;

/// A single entry of the input frequency table
#[derive(Debug, Clone, PartialEq)]
pub struct FrequencyRow {
    /// Term the count belongs to. Falls back to the record's line number
    /// when the table has no term column.
    pub term: String,
    /// Non-negative, finite occurrence count
    pub frequency: f64,
}

impl FrequencyRow {
    pub fn new(term: impl Into<String>, frequency: f64) -> Self {
        Self {
            term: term.into(),
            frequency,
        }
    }
}

/// Frequency table exactly as it was loaded, in input order
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FrequencyTable {
    pub rows: Vec<FrequencyRow>,
}

impl FrequencyTable {
    pub fn new(rows: Vec<FrequencyRow>) -> Self {
        Self { rows }
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

/// Rows ordered by descending frequency.
///
/// The row at position `i` has rank `i + 1`, and
/// `rows[i].frequency >= rows[i + 1].frequency` holds for every adjacent pair.
/// Only [`crate::analysis::ranking::rank_by_frequency`] constructs this type.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RankedTable {
    rows: Vec<FrequencyRow>,
}

impl RankedTable {
    pub(crate) fn from_sorted(rows: Vec<FrequencyRow>) -> Self {
        debug_assert!(rows
            .windows(2)
            .all(|pair| pair[0].frequency >= pair[1].frequency));
        Self { rows }
    }

    pub fn rows(&self) -> &[FrequencyRow] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Ranks `1..=N` in table order
    pub fn ranks(&self) -> Range<usize> {
        1..self.rows.len() + 1
    }

    /// Observed frequencies in rank order
    pub fn frequencies(&self) -> Vec<f64> {
        self.rows.iter().map(|row| row.frequency).collect()
    }

    /// Highest observed frequency, if any
    pub fn max_frequency(&self) -> Option<f64> {
        self.rows.first().map(|row| row.frequency)
    }
}

/// Idealised Zipf frequencies `C / rank` for each rank of a [`RankedTable`]
#[derive(Debug, Clone, PartialEq)]
pub struct ZipfCurve {
    /// The constant `C`, taken from the most frequent term
    pub constant: f64,
    /// `values[i] == constant / (i + 1)`
    pub values: Vec<f64>,
}

impl ZipfCurve {
    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}
