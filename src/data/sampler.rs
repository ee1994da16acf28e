/// Maximum number of points kept per section.
pub const SAMPLE_SIZE: usize = 10;

/// Indices picked by [`sample`] for a sequence of length `n`.
///
/// For `n <= SAMPLE_SIZE` every index is returned. Otherwise the range is
/// cut into `SAMPLE_SIZE - 1` equal intervals and each boundary `i * n / 9`
/// is rounded half away from zero, then clamped to `n - 1`. Duplicate
/// indices are kept.
pub fn sample_indices(n: usize) -> Vec<usize> {
    if n <= SAMPLE_SIZE {
        return (0..n).collect();
    }

    let step = n as f64 / (SAMPLE_SIZE - 1) as f64;
    (0..SAMPLE_SIZE)
        .map(|i| ((i as f64 * step).round() as usize).min(n - 1))
        .collect()
}

/// Reduce `points` to at most [`SAMPLE_SIZE`] items spread across the
/// whole sequence. Short inputs come back unchanged.
pub fn sample<T: Clone>(points: &[T]) -> Vec<T> {
    if points.len() <= SAMPLE_SIZE {
        return points.to_vec();
    }
    sample_indices(points.len())
        .into_iter()
        .map(|i| points[i].clone())
        .collect()
}
