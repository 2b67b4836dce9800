//! Even-Odd Scanline Filler
//!
//! Turns the crossing table built while tracing a polygon's outline into the
//! pixels of its interior. Each row's crossings are sorted and paired up;
//! every pair bounds one half-open span `[x0, x1)`.

use glam::IVec2;

use super::crossing::CrossingTable;

/// Fill every span described by `crossings`, appending interior pixels to
/// `fill` in row order.
///
/// A row with an odd crossing count drops its last crossing.
pub fn fill_into(crossings: &CrossingTable, fill: &mut Vec<IVec2>) {
    let mut sorted: Vec<i32> = Vec::new();

    for (y, xs) in crossings.rows() {
        sorted.clear();
        sorted.extend_from_slice(xs);
        sorted.sort_unstable();

        for pair in sorted.chunks_exact(2) {
            let (x0, x1) = (pair[0], pair[1]);
            fill.extend((x0..x1).map(|x| IVec2::new(x, y)));
        }
    }
}

/// Fill `crossings` into a fresh buffer.
pub fn fill(crossings: &CrossingTable) -> Vec<IVec2> {
    let mut out = Vec::new();
    fill_into(crossings, &mut out);
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table(rows: &[(i32, &[i32])]) -> CrossingTable {
        let mut t = CrossingTable::new();
        for &(y, xs) in rows {
            for &x in xs {
                t.record(IVec2::new(x, y));
            }
        }
        t
    }

    #[test]
    fn test_single_span_is_half_open() {
        let pixels = fill(&table(&[(2, &[6, 3])]));
        assert_eq!(
            pixels,
            vec![IVec2::new(3, 2), IVec2::new(4, 2), IVec2::new(5, 2)]
        );
    }

    #[test]
    fn test_even_odd_pairs() {
        let pixels = fill(&table(&[(0, &[8, 0, 6, 2])]));
        let xs: Vec<i32> = pixels.iter().map(|p| p.x).collect();
        assert_eq!(xs, vec![0, 1, 6, 7]);
    }

    #[test]
    fn test_odd_crossing_is_dropped() {
        let pixels = fill(&table(&[(1, &[0, 2, 9])]));
        let xs: Vec<i32> = pixels.iter().map(|p| p.x).collect();
        assert_eq!(xs, vec![0, 1]);
    }

    #[test]
    fn test_single_crossing_fills_nothing() {
        assert!(fill(&table(&[(5, &[4])])).is_empty());
    }

    #[test]
    fn test_rows_in_ascending_order() {
        let pixels = fill(&table(&[(3, &[0, 1]), (-2, &[0, 1])]));
        assert_eq!(pixels, vec![IVec2::new(0, -2), IVec2::new(0, 3)]);
    }
}
