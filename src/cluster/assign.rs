//! Assignment strategy implementations.
//!
//! Each strategy writes labels into `Point.cluster` in place. They are
//! infallible on valid input: every point ends up with a label, and apart from
//! [`scatter_noise`] every label is in `[0, k)` for that call's `k`.

use std::cmp::Ordering;

use crate::cluster::NOISE_LABEL;
use crate::dataset::Point;
use crate::rng::UniformSource;

/// Label the first ⌊n/2⌋ points 0 and the rest 1.
pub fn half_split(points: &mut [Point]) {
    let half = points.len() / 2;
    for (i, point) in points.iter_mut().enumerate() {
        point.cluster = Some(if i < half { 0 } else { 1 });
    }
}

/// Split on distance from the origin: outside the threshold is cluster 0,
/// inside (or on it) cluster 1.
pub fn radius_threshold(points: &mut [Point], threshold: f64) {
    for point in points.iter_mut() {
        point.cluster = Some(if point.radius() > threshold { 0 } else { 1 });
    }
}

/// Divide the x-sorted sequence into `k` contiguous, approximately equal
/// blocks and label each point with its block index.
///
/// Labels are non-decreasing when the points are already sorted by x.
pub fn positional_split(points: &mut [Point], k: usize) {
    let n = points.len();
    if n == 0 || k == 0 {
        return;
    }
    let mut order: Vec<usize> = (0..n).collect();
    order.sort_by(|&a, &b| {
        points[a]
            .x
            .partial_cmp(&points[b].x)
            .unwrap_or(Ordering::Equal)
    });
    for (rank, &idx) in order.iter().enumerate() {
        let block = (rank * k / n).min(k - 1);
        points[idx].cluster = Some(block as i64);
    }
}

fn squared_distance(point: &Point, centroid: &(f64, f64)) -> f64 {
    (point.x - centroid.0).powi(2) + (point.y - centroid.1).powi(2)
}

/// Assign each point to the nearest of `k` pseudo-centroids drawn uniformly,
/// with replacement, from the point set itself. Ties go to the centroid
/// encountered first.
pub fn nearest_random_centroid(points: &mut [Point], k: usize, source: &mut dyn UniformSource) {
    let n = points.len();
    if n == 0 || k == 0 {
        return;
    }
    let centroids: Vec<(f64, f64)> = (0..k)
        .map(|_| {
            let idx = ((source.next_uniform() * n as f64) as usize).min(n - 1);
            (points[idx].x, points[idx].y)
        })
        .collect();

    for point in points.iter_mut() {
        let nearest = centroids
            .iter()
            .enumerate()
            .min_by(|(_, a), (_, b)| {
                squared_distance(point, a)
                    .partial_cmp(&squared_distance(point, b))
                    .unwrap_or(Ordering::Equal)
            })
            .map(|(i, _)| i)
            .unwrap_or(0);
        point.cluster = Some(nearest as i64);
    }
}

/// Relabel ⌊fraction·n⌋ uniformly drawn positions to the noise sentinel.
///
/// Positions may repeat, so the effective noise count can be lower than the
/// nominal fraction.
pub fn scatter_noise(points: &mut [Point], fraction: f64, source: &mut dyn UniformSource) {
    let n = points.len();
    if n == 0 {
        return;
    }
    let count = (fraction * n as f64).floor() as usize;
    for _ in 0..count {
        let idx = ((source.next_uniform() * n as f64) as usize).min(n - 1);
        points[idx].cluster = Some(NOISE_LABEL);
    }
}
