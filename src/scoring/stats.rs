//! Column statistics for the scoring pipeline.
//!
//! Non-finite entries are the pipeline's sentinel for degenerate rows (for
//! example a conversion rate computed against zero product views). The
//! reductions here skip them, so one bad row shifts nothing for the rest of
//! the column; `normalize` leaves them in place so the row keeps failing
//! threshold comparisons downstream.

/// Min-max scale a column into [0,1]: `(x - min) / (max - min)`.
///
/// A constant column makes the denominator zero and every output non-finite
/// (0/0 = NaN). That is the documented degenerate case: it propagates rather
/// than being patched over, and threshold comparisons against it are false.
pub fn normalize(values: &[f64]) -> Vec<f64> {
    let min = values.iter().copied().fold(f64::INFINITY, f64::min);
    let max = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    values.iter().map(|v| (v - min) / (max - min)).collect()
}

/// Arithmetic mean over the finite entries. NaN when none are finite.
pub fn mean(values: &[f64]) -> f64 {
    let finite: Vec<f64> = values.iter().copied().filter(|v| v.is_finite()).collect();
    if finite.is_empty() {
        return f64::NAN;
    }
    finite.iter().sum::<f64>() / finite.len() as f64
}

/// Sample standard deviation (N-1 divisor) over the finite entries.
/// NaN with fewer than two finite entries.
pub fn sample_std_dev(values: &[f64]) -> f64 {
    let finite: Vec<f64> = values.iter().copied().filter(|v| v.is_finite()).collect();
    if finite.len() < 2 {
        return f64::NAN;
    }
    let m = finite.iter().sum::<f64>() / finite.len() as f64;
    let variance =
        finite.iter().map(|v| (v - m) * (v - m)).sum::<f64>() / (finite.len() - 1) as f64;
    variance.sqrt()
}
