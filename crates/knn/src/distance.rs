//! Squared Euclidean distance between feature vectors.

/// Computes the squared Euclidean distance between two equal-length vectors.
///
/// ```text
/// d = Σⱼ (a[j] − b[j])²
/// ```
///
/// No square root is taken: only the relative ordering of distances matters
/// downstream, and the squared form preserves it. Features are stored as
/// `f32`; each difference is widened to `f64` before squaring so the
/// accumulated sum loses less precision. Widening is monotone, so the
/// ranking of distances is unchanged.
///
/// Length 0 yields 0.0.
///
/// # Panics
///
/// Debug-asserts equal lengths. The classifier validates column counts
/// before its scan loop, so release builds never reach a mismatch here.
pub fn squared_euclidean(a: &[f32], b: &[f32]) -> f64 {
    debug_assert_eq!(a.len(), b.len());
    a.iter()
        .zip(b.iter())
        .map(|(&x, &y)| {
            let d = f64::from(x) - f64::from(y);
            d * d
        })
        .sum()
}
