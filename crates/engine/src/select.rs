//! Deterministic best-to-worst ordering of scored rows.

use ndarray::{Array1, Array2};
use screener_traits::ScoreDirection;

/// Stable row ordering by composite score.
///
/// Ascending puts the lowest composite first, descending the highest.
/// The sort is stable and the comparator treats ties as equal, so rows with
/// identical composite scores keep their input order.
#[must_use]
pub fn sort_indices(composite: &Array1<f64>, direction: ScoreDirection) -> Vec<usize> {
    let mut order: Vec<usize> = (0..composite.len()).collect();
    order.sort_by(|&a, &b| {
        let cmp = composite[a].partial_cmp(&composite[b]).unwrap_or(std::cmp::Ordering::Equal);
        match direction {
            ScoreDirection::Ascending => cmp,
            ScoreDirection::Descending => cmp.reverse(),
        }
    });
    order
}

/// Gather rows of a matrix in the given order.
pub(crate) fn gather_rows(matrix: &Array2<f64>, order: &[usize]) -> Array2<f64> {
    let mut out = Array2::zeros((order.len(), matrix.ncols()));
    for (i, &idx) in order.iter().enumerate() {
        out.row_mut(i).assign(&matrix.row(idx));
    }
    out
}

#[cfg(test)]
mod tests {
    use ndarray::array;

    use super::*;

    #[test]
    fn ascending_orders_lowest_first() {
        let composite = array![3.0, 1.0, 2.0];
        assert_eq!(sort_indices(&composite, ScoreDirection::Ascending), vec![1, 2, 0]);
    }

    #[test]
    fn descending_orders_highest_first() {
        let composite = array![3.0, 1.0, 2.0];
        assert_eq!(sort_indices(&composite, ScoreDirection::Descending), vec![0, 2, 1]);
    }

    #[test]
    fn ties_keep_input_order() {
        let composite = array![2.0, 1.0, 2.0, 1.0];
        assert_eq!(sort_indices(&composite, ScoreDirection::Ascending), vec![1, 3, 0, 2]);
        assert_eq!(sort_indices(&composite, ScoreDirection::Descending), vec![0, 2, 1, 3]);
    }

    #[test]
    fn gather_rows_permutes() {
        let matrix = array![[1.0, 2.0], [3.0, 4.0], [5.0, 6.0]];
        let gathered = gather_rows(&matrix, &[2, 0]);
        assert_eq!(gathered, array![[5.0, 6.0], [1.0, 2.0]]);
    }
}
