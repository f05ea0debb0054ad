//! Rank assignment for frequency tables

use crate::common::{FrequencyTable, RankedTable};

/// Orders the table by descending frequency.
///
/// The sort is stable, so equal frequencies keep their input order. An empty
/// table produces an empty [`RankedTable`].
pub fn rank_by_frequency(table: FrequencyTable) -> RankedTable {
    let mut rows = table.rows;
    rows.sort_by(|a, b| b.frequency.total_cmp(&a.frequency));
    RankedTable::from_sorted(rows)
}
