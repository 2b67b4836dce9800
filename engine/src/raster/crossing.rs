//! Scanline Crossing Table
//!
//! Row-keyed record of the columns where traced edges pass through each
//! scanline. Rows are sparse and may be negative, so the table is an ordered
//! map rather than a dense array.

use std::collections::BTreeMap;

use glam::IVec2;

/// Columns crossed per scanline row.
///
/// Columns within a row are kept in arrival order; they are only sorted when
/// the filler consumes the table.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CrossingTable {
    rows: BTreeMap<i32, Vec<i32>>,
}

impl CrossingTable {
    /// Create an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record that a traced edge covers `pixel`.
    ///
    /// The column is appended unless it repeats the last column recorded on
    /// the same row. Repeats elsewhere in the row are kept.
    pub fn record(&mut self, pixel: IVec2) {
        let row = self.rows.entry(pixel.y).or_default();
        if row.last() != Some(&pixel.x) {
            row.push(pixel.x);
        }
    }

    /// Drop every row.
    pub fn clear(&mut self) {
        self.rows.clear();
    }

    /// Columns recorded for row `y`, in arrival order.
    pub fn row(&self, y: i32) -> Option<&[i32]> {
        self.rows.get(&y).map(Vec::as_slice)
    }

    /// Iterate rows in ascending `y`.
    pub fn rows(&self) -> impl Iterator<Item = (i32, &[i32])> {
        self.rows.iter().map(|(&y, xs)| (y, xs.as_slice()))
    }

    /// Number of rows holding at least one crossing.
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Total crossings over all rows.
    pub fn crossing_count(&self) -> usize {
        self.rows.values().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_consecutive_repeats_are_suppressed() {
        let mut table = CrossingTable::new();
        table.record(IVec2::new(3, 7));
        table.record(IVec2::new(3, 7));
        table.record(IVec2::new(4, 7));
        table.record(IVec2::new(3, 7));

        assert_eq!(table.row(7), Some(&[3, 4, 3][..]));
        assert_eq!(table.crossing_count(), 3);
    }

    #[test]
    fn test_negative_rows_are_ordered() {
        let mut table = CrossingTable::new();
        table.record(IVec2::new(0, 2));
        table.record(IVec2::new(0, -4));
        table.record(IVec2::new(0, 0));

        let ys: Vec<i32> = table.rows().map(|(y, _)| y).collect();
        assert_eq!(ys, vec![-4, 0, 2]);
    }

    #[test]
    fn test_clear_empties_table() {
        let mut table = CrossingTable::new();
        table.record(IVec2::new(1, 1));
        table.clear();
        assert!(table.is_empty());
        assert_eq!(table.row(1), None);
    }
}
