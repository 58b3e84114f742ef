//! Winsorization for outlier handling.

use ndarray::Array1;

use crate::MathError;

/// Clip a 1D array to symmetric percentile bounds.
///
/// Values below the lower percentile are raised to it; values above the
/// upper percentile are lowered to it. NaN values pass through untouched.
///
/// # Arguments
/// * `data` - Input array
/// * `percentile` - Threshold (e.g. 0.05 for the 5th/95th percentiles)
///
/// # Errors
/// Returns `MathError::InvalidPercentile` if `percentile` is not in (0, 0.5).
pub fn winsorize(data: &Array1<f64>, percentile: f64) -> Result<Array1<f64>, MathError> {
    if percentile <= 0.0 || percentile >= 0.5 {
        return Err(MathError::InvalidPercentile(percentile));
    }

    let mut finite: Vec<f64> = data.iter().copied().filter(|x| x.is_finite()).collect();
    if finite.is_empty() {
        return Ok(data.clone());
    }

    finite.sort_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal));

    let n = finite.len();
    let lower_idx = ((n as f64) * percentile).floor() as usize;
    let upper_idx = ((n as f64) * (1.0 - percentile)).ceil() as usize;

    let lower_bound = finite[lower_idx];
    let upper_bound = finite[upper_idx.saturating_sub(1).min(n - 1)];

    Ok(data.mapv(|x| if x.is_nan() { x } else { x.clamp(lower_bound, upper_bound) }))
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;
    use ndarray::array;
    use rstest::rstest;

    use super::*;

    #[test]
    fn clips_extremes_preserves_middle() {
        let data = array![1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0, 9.0, 100.0];
        let result = winsorize(&data, 0.1).unwrap();

        assert!(result[9] < 100.0);
        assert!(result[0] >= 1.0);
        assert_relative_eq!(result[4], 5.0, epsilon = 1e-12);
        assert_relative_eq!(result[5], 6.0, epsilon = 1e-12);
    }

    #[rstest]
    #[case(0.0)]
    #[case(0.5)]
    #[case(0.6)]
    #[case(-0.1)]
    fn invalid_percentile_errors(#[case] pct: f64) {
        let data = array![1.0, 2.0, 3.0];
        assert!(winsorize(&data, pct).is_err());
    }

    #[test]
    fn empty_array() {
        let data: Array1<f64> = array![];
        assert!(winsorize(&data, 0.1).unwrap().is_empty());
    }
}
