//! Descriptive statistics over the valid values of a numeric column.

use crate::error::Result;
use crate::types::NumericSummary;
use crate::utils::is_float_dtype;
use polars::prelude::*;

/// Extract the valid values of a numeric series as `f64`.
///
/// Nulls are dropped, and so are NaNs, which count as missing.
pub(crate) fn valid_values(series: &Series) -> Result<Vec<f64>> {
    let non_null = series.drop_nulls();
    let float_series = non_null.cast(&DataType::Float64)?;
    let values = float_series
        .f64()?
        .into_iter()
        .flatten()
        .filter(|v| !v.is_nan())
        .collect();
    Ok(values)
}

/// Number of NaN entries in a float series; always 0 for other dtypes.
pub(crate) fn count_nan(series: &Series) -> Result<usize> {
    if !is_float_dtype(series.dtype()) {
        return Ok(0);
    }
    let float_series = series.cast(&DataType::Float64)?;
    let count = float_series
        .f64()?
        .into_iter()
        .flatten()
        .filter(|v| v.is_nan())
        .count();
    Ok(count)
}

/// Arithmetic mean; NaN for no values.
pub fn calculate_mean(values: &[f64]) -> f64 {
    if values.is_empty() {
        return f64::NAN;
    }
    values.iter().sum::<f64>() / values.len() as f64
}

/// Standard deviation with `ddof` delta degrees of freedom.
///
/// Returns NaN when there are not more values than `ddof`.
pub fn calculate_std(values: &[f64], ddof: usize) -> f64 {
    let n = values.len();
    if n <= ddof {
        return f64::NAN;
    }
    let mean = calculate_mean(values);
    let variance = values.iter().map(|v| (v - mean).powi(2)).sum::<f64>() / (n - ddof) as f64;
    variance.sqrt()
}

/// Quantile of sorted values with linear interpolation between closest ranks.
///
/// `q` is in `[0, 1]`. Returns NaN for no values. Infinite neighbours are
/// never interpolated, so the result stays within `[sorted[lo], sorted[hi]]`.
pub fn quantile_sorted(sorted: &[f64], q: f64) -> f64 {
    if sorted.is_empty() {
        return f64::NAN;
    }
    let h = (sorted.len() - 1) as f64 * q.clamp(0.0, 1.0);
    let lo = h.floor() as usize;
    let hi = h.ceil() as usize;
    let (a, b) = (sorted[lo], sorted[hi]);
    if lo == hi || a == b {
        return a;
    }
    let value = a + (h - lo as f64) * (b - a);
    // -inf and inf neighbours
    if value.is_nan() { a } else { value }
}

/// Summarise a set of valid values.
pub fn summarize(values: &[f64], ddof: usize) -> NumericSummary {
    if values.is_empty() {
        return NumericSummary::empty();
    }

    let mut sorted = values.to_vec();
    sorted.sort_by(|a, b| a.total_cmp(b));

    NumericSummary {
        mean: calculate_mean(&sorted),
        std: calculate_std(&sorted, ddof),
        min: sorted[0],
        p25: quantile_sorted(&sorted, 0.25),
        median: quantile_sorted(&sorted, 0.5),
        p75: quantile_sorted(&sorted, 0.75),
        max: sorted[sorted.len() - 1],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_calculate_mean_basic() {
        assert_eq!(calculate_mean(&[1.0, 2.0, 3.0, 4.0]), 2.5);
        assert!(calculate_mean(&[]).is_nan());
    }

    #[test]
    fn test_calculate_std_sample() {
        // var = 32 / 7
        let values = [2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0];
        let std = calculate_std(&values, 1);
        assert!((std - (32.0f64 / 7.0).sqrt()).abs() < 1e-12);
    }

    #[test]
    fn test_calculate_std_population() {
        let values = [2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0];
        assert!((calculate_std(&values, 0) - 2.0).abs() < 1e-12);
    }

    #[test]
    fn test_calculate_std_single_value() {
        assert!(calculate_std(&[42.0], 1).is_nan());
        assert_eq!(calculate_std(&[42.0], 0), 0.0);
    }

    #[test]
    fn test_quantile_linear_interpolation() {
        let sorted = [1.0, 2.0, 3.0, 4.0];
        assert_eq!(quantile_sorted(&sorted, 0.25), 1.75);
        assert_eq!(quantile_sorted(&sorted, 0.5), 2.5);
        assert_eq!(quantile_sorted(&sorted, 0.75), 3.25);
        assert_eq!(quantile_sorted(&sorted, 0.0), 1.0);
        assert_eq!(quantile_sorted(&sorted, 1.0), 4.0);
    }

    #[test]
    fn test_quantile_single_value() {
        assert_eq!(quantile_sorted(&[7.0], 0.25), 7.0);
        assert!(quantile_sorted(&[], 0.5).is_nan());
    }

    #[test]
    fn test_summarize_ordering() {
        let summary = summarize(&[9.0, 1.0, 5.0, 3.0, 7.0], 1);
        assert_eq!(summary.min, 1.0);
        assert_eq!(summary.p25, 3.0);
        assert_eq!(summary.median, 5.0);
        assert_eq!(summary.p75, 7.0);
        assert_eq!(summary.max, 9.0);
        assert_eq!(summary.mean, 5.0);
    }

    #[test]
    fn test_quantile_infinite_neighbours() {
        let sorted = [1.0, f64::INFINITY, f64::INFINITY, f64::INFINITY];
        assert_eq!(quantile_sorted(&sorted, 0.5), f64::INFINITY);
        assert_eq!(quantile_sorted(&sorted, 0.75), f64::INFINITY);

        let sorted = [f64::NEG_INFINITY, f64::INFINITY];
        assert_eq!(quantile_sorted(&sorted, 0.5), f64::NEG_INFINITY);
    }

    #[test]
    fn test_summarize_ordering_with_infinite_values() {
        let summary = summarize(&[1.0, f64::INFINITY, f64::INFINITY, f64::INFINITY], 1);
        assert_eq!(summary.min, 1.0);
        assert!(summary.min <= summary.p25);
        assert!(summary.p25 <= summary.median);
        assert!(summary.median <= summary.p75);
        assert!(summary.p75 <= summary.max);
    }

    #[test]
    fn test_summarize_empty_is_nan() {
        let summary = summarize(&[], 1);
        assert!(summary.display_values().iter().all(|v| v.is_nan()));
    }

    #[test]
    fn test_valid_values_drops_nulls_and_nan() {
        let series = Series::new("price".into(), &[Some(1.0), None, Some(f64::NAN), Some(4.0)]);
        assert_eq!(valid_values(&series).unwrap(), vec![1.0, 4.0]);
        assert_eq!(count_nan(&series).unwrap(), 1);
    }

    #[test]
    fn test_valid_values_integer_series() {
        let series = Series::new("points".into(), &[Some(87i64), None, Some(90)]);
        assert_eq!(valid_values(&series).unwrap(), vec![87.0, 90.0]);
        assert_eq!(count_nan(&series).unwrap(), 0);
    }
}
