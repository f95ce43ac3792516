//! Local extrema detection with minimum horizontal separation.

use std::cmp::Ordering;

/// Indices of local maxima, at least `distance` apart.
///
/// A peak is strictly greater than both neighbors; when two candidates fall
/// inside the separation window the higher one wins. Returned indices are in
/// ascending order.
pub fn find_peaks(values: &[f64], distance: usize) -> Vec<usize> {
    let mut candidates: Vec<usize> = (1..values.len().saturating_sub(1))
        .filter(|&i| values[i] > values[i - 1] && values[i] > values[i + 1])
        .collect();

    candidates.sort_by(|&a, &b| {
        values[b]
            .partial_cmp(&values[a])
            .unwrap_or(Ordering::Equal)
    });

    let mut kept: Vec<usize> = Vec::new();
    for &candidate in &candidates {
        if kept.iter().all(|&k| k.abs_diff(candidate) >= distance) {
            kept.push(candidate);
        }
    }
    kept.sort_unstable();
    kept
}

/// Indices of local minima, at least `distance` apart.
pub fn find_troughs(values: &[f64], distance: usize) -> Vec<usize> {
    let negated: Vec<f64> = values.iter().map(|v| -v).collect();
    find_peaks(&negated, distance)
}
