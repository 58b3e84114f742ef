//! Fractional (average-tie) ranking.

use ndarray::Array1;

use crate::MathError;

/// Direction in which raw values are ordered before ranks are assigned.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RankDirection {
    /// The smallest value receives rank 1.
    Ascending,
    /// The largest value receives rank 1.
    Descending,
}

/// Assign fractional ranks over `data`, 1 = best.
///
/// Tied values share the arithmetic mean of the positions they occupy (two
/// assets tied for 2nd and 3rd place both receive 2.5), so the rank sum is
/// always K(K+1)/2 for K observations regardless of ties or direction.
///
/// # Arguments
/// * `data` - Raw factor values
/// * `direction` - Which end of the ordering receives rank 1
///
/// # Returns
/// Array of fractional ranks aligned with `data`.
///
/// # Errors
/// Returns `MathError::NonFinite` if any value is NaN or infinite.
pub fn fractional_rank(
    data: &Array1<f64>,
    direction: RankDirection,
) -> Result<Array1<f64>, MathError> {
    for (i, x) in data.iter().enumerate() {
        if !x.is_finite() {
            return Err(MathError::NonFinite(i));
        }
    }

    let n = data.len();
    let mut order: Vec<usize> = (0..n).collect();
    order.sort_by(|&a, &b| {
        let cmp = data[a].partial_cmp(&data[b]).unwrap_or(std::cmp::Ordering::Equal);
        match direction {
            RankDirection::Ascending => cmp,
            RankDirection::Descending => cmp.reverse(),
        }
    });

    let mut ranks = Array1::zeros(n);
    let mut i = 0;
    while i < n {
        // Extend over the run of values tied with position i.
        let mut j = i;
        while j + 1 < n && data[order[j + 1]] == data[order[i]] {
            j += 1;
        }
        // Positions i..=j (0-based) share the mean of ranks (i+1)..=(j+1).
        let shared = (i + j + 2) as f64 / 2.0;
        for k in i..=j {
            ranks[order[k]] = shared;
        }
        i = j + 1;
    }

    Ok(ranks)
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;
    use ndarray::array;
    use rstest::rstest;

    use super::*;

    #[test]
    fn ascending_ranks_smallest_first() {
        let data = array![0.5, 1.0, 1.5];
        let ranks = fractional_rank(&data, RankDirection::Ascending).unwrap();
        assert_eq!(ranks, array![1.0, 2.0, 3.0]);
    }

    #[test]
    fn descending_ranks_largest_first() {
        let data = array![0.5, 1.0, 1.5];
        let ranks = fractional_rank(&data, RankDirection::Descending).unwrap();
        assert_eq!(ranks, array![3.0, 2.0, 1.0]);
    }

    #[test]
    fn ties_share_average_rank() {
        // 1.0 is best; 2.0 appears twice, tied for 2nd and 3rd place.
        let data = array![2.0, 1.0, 2.0, 3.0];
        let ranks = fractional_rank(&data, RankDirection::Ascending).unwrap();
        assert_eq!(ranks, array![2.5, 1.0, 2.5, 4.0]);
    }

    #[test]
    fn all_tied() {
        let data = array![7.0, 7.0, 7.0];
        let ranks = fractional_rank(&data, RankDirection::Ascending).unwrap();
        assert_eq!(ranks, array![2.0, 2.0, 2.0]);
    }

    #[rstest]
    #[case(array![3.0, 1.0, 2.0], RankDirection::Ascending)]
    #[case(array![3.0, 1.0, 2.0], RankDirection::Descending)]
    #[case(array![5.0, 5.0, 1.0, 1.0, 2.0], RankDirection::Ascending)]
    #[case(array![5.0, 5.0, 1.0, 1.0, 2.0], RankDirection::Descending)]
    fn rank_sum_is_structural(#[case] data: Array1<f64>, #[case] direction: RankDirection) {
        let k = data.len() as f64;
        let ranks = fractional_rank(&data, direction).unwrap();
        assert_relative_eq!(ranks.sum(), k * (k + 1.0) / 2.0, epsilon = 1e-12);
    }

    #[test]
    fn empty_input() {
        let data: Array1<f64> = array![];
        let ranks = fractional_rank(&data, RankDirection::Ascending).unwrap();
        assert!(ranks.is_empty());
    }

    #[test]
    fn non_finite_rejected() {
        let data = array![1.0, f64::NAN, 3.0];
        assert!(matches!(
            fractional_rank(&data, RankDirection::Ascending),
            Err(MathError::NonFinite(1))
        ));
    }
}
