//! Z-score standardization with a deterministic zero-variance fallback.

use ndarray::Array1;

use crate::MathError;

/// Arithmetic mean; 0.0 for empty input.
#[must_use]
pub fn mean(data: &Array1<f64>) -> f64 {
    data.mean().unwrap_or(0.0)
}

/// Sample standard deviation (ddof = 1); 0.0 with fewer than two observations.
#[must_use]
pub fn sample_std(data: &Array1<f64>) -> f64 {
    let n = data.len() as f64;
    if n <= 1.0 {
        return 0.0;
    }
    let m = mean(data);
    let variance: f64 = data.iter().map(|x| (x - m).powi(2)).sum::<f64>() / (n - 1.0);
    variance.sqrt()
}

/// Whether a factor column has no cross-sectional variance.
#[must_use]
pub fn is_degenerate(data: &Array1<f64>) -> bool {
    sample_std(data) == 0.0
}

/// Standardize to zero mean and unit sample standard deviation.
///
/// Degenerate input (zero variance, or fewer than two observations) maps
/// every value to 0.0 instead of propagating a division by zero.
///
/// # Errors
/// Returns `MathError::NonFinite` if any value is NaN or infinite.
pub fn zscore(data: &Array1<f64>) -> Result<Array1<f64>, MathError> {
    for (i, x) in data.iter().enumerate() {
        if !x.is_finite() {
            return Err(MathError::NonFinite(i));
        }
    }

    let std = sample_std(data);
    if std == 0.0 {
        return Ok(Array1::zeros(data.len()));
    }

    let m = mean(data);
    Ok(data.mapv(|x| (x - m) / std))
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;
    use ndarray::array;
    use rstest::rstest;

    use super::*;

    #[test]
    fn zscore_zero_mean_unit_std() {
        let data = array![1.0, 2.0, 3.0, 4.0, 5.0];
        let z = zscore(&data).unwrap();
        assert_relative_eq!(mean(&z), 0.0, epsilon = 1e-12);
        assert_relative_eq!(sample_std(&z), 1.0, epsilon = 1e-12);
    }

    #[test]
    fn zscore_known_values() {
        // mean 2, sample std 1
        let data = array![1.0, 2.0, 3.0];
        let z = zscore(&data).unwrap();
        assert_relative_eq!(z[0], -1.0, epsilon = 1e-12);
        assert_relative_eq!(z[1], 0.0, epsilon = 1e-12);
        assert_relative_eq!(z[2], 1.0, epsilon = 1e-12);
    }

    #[rstest]
    #[case(array![4.2, 4.2, 4.2, 4.2])]
    #[case(array![7.0])]
    #[case(array![])]
    fn degenerate_maps_to_zero(#[case] data: Array1<f64>) {
        assert!(is_degenerate(&data));
        let z = zscore(&data).unwrap();
        assert!(z.iter().all(|&v| v == 0.0));
        assert_eq!(z.len(), data.len());
    }

    #[test]
    fn sample_std_matches_pandas_default() {
        // pandas .std() uses ddof = 1: std([1, 2, 3, 4]) = 1.29099...
        let data = array![1.0, 2.0, 3.0, 4.0];
        assert_relative_eq!(sample_std(&data), 1.2909944487358056, epsilon = 1e-12);
    }

    #[test]
    fn non_finite_rejected() {
        let data = array![1.0, f64::INFINITY];
        assert!(matches!(zscore(&data), Err(MathError::NonFinite(1))));
    }
}
