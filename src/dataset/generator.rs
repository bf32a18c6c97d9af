//! Synthetic 2-D dataset generators.
//!
//! The shapes mirror the classic toy datasets used in clustering demos: two
//! interlocking moons, globular blobs, and concentric circles. All noise is
//! uniform, `(u - 0.5) * 2 * half_width` per coordinate, drawn through the
//! injected [`UniformSource`].

use std::f64::consts::PI;

use crate::dataset::{DatasetType, Point};
use crate::rng::UniformSource;

/// Default half-width of moon coordinate noise.
pub const DEFAULT_MOON_NOISE: f64 = 0.08;
/// Default number of blob centroids.
pub const DEFAULT_BLOB_CENTERS: usize = 3;
/// Default half-width of blob scatter around its centroid.
pub const DEFAULT_BLOB_STD: f64 = 0.5;
/// Default inner/outer radius ratio for circles.
pub const DEFAULT_CIRCLE_FACTOR: f64 = 0.5;
/// Default half-width of circle coordinate noise.
pub const DEFAULT_CIRCLE_NOISE: f64 = 0.05;

/// Generate `n_samples` points of the given dataset type with default knobs.
///
/// [`DatasetType::Custom`] has no synthetic form and yields an empty vector;
/// callers treat that as a load failure.
pub fn generate(
    dataset: DatasetType,
    n_samples: usize,
    source: &mut dyn UniformSource,
) -> Vec<Point> {
    match dataset {
        DatasetType::Moons => moons(n_samples, DEFAULT_MOON_NOISE, source),
        DatasetType::Blobs => blobs(n_samples, DEFAULT_BLOB_CENTERS, DEFAULT_BLOB_STD, source),
        DatasetType::Circles => circles(n_samples, DEFAULT_CIRCLE_FACTOR, DEFAULT_CIRCLE_NOISE, source),
        DatasetType::Custom => Vec::new(),
    }
}

fn jitter(half_width: f64, source: &mut dyn UniformSource) -> f64 {
    (source.next_uniform() - 0.5) * 2.0 * half_width
}

/// Two interlocking semicircular arcs.
///
/// The first ⌊n/2⌋ points trace angle `0..π` on the unit circle; the rest
/// trace the inverted semicircle centered at `(1, 0.5)` so the arcs interlock.
pub fn moons(n_samples: usize, noise: f64, source: &mut dyn UniformSource) -> Vec<Point> {
    let half = n_samples / 2;
    let rest = n_samples - half;
    let mut points = Vec::with_capacity(n_samples);

    for i in 0..half {
        let t = PI * i as f64 / half as f64;
        points.push(Point::new(
            t.cos() + jitter(noise, source),
            t.sin() + jitter(noise, source),
        ));
    }
    for i in 0..rest {
        let t = PI * i as f64 / rest as f64;
        points.push(Point::new(
            1.0 - t.cos() + jitter(noise, source),
            0.5 - t.sin() + jitter(noise, source),
        ));
    }
    points
}

/// Globular groups around random centroids in `[-4, 4] x [-4, 4]`.
///
/// Point `i` scatters around centroid `i % centers`, so point order correlates
/// with group membership (round-robin, not random, assignment).
pub fn blobs(
    n_samples: usize,
    centers: usize,
    cluster_std: f64,
    source: &mut dyn UniformSource,
) -> Vec<Point> {
    if centers == 0 {
        return Vec::new();
    }
    let centroids: Vec<(f64, f64)> = (0..centers)
        .map(|_| {
            (
                source.next_uniform() * 8.0 - 4.0,
                source.next_uniform() * 8.0 - 4.0,
            )
        })
        .collect();

    (0..n_samples)
        .map(|i| {
            let (cx, cy) = centroids[i % centers];
            Point::new(
                cx + jitter(cluster_std, source),
                cy + jitter(cluster_std, source),
            )
        })
        .collect()
}

/// Two concentric rings: the first ⌊n/2⌋ points at radius 1.0, the rest at
/// radius `factor`, each at a uniformly random angle.
pub fn circles(
    n_samples: usize,
    factor: f64,
    noise: f64,
    source: &mut dyn UniformSource,
) -> Vec<Point> {
    let half = n_samples / 2;
    (0..n_samples)
        .map(|i| {
            let r = if i < half { 1.0 } else { factor };
            let t = source.next_uniform() * 2.0 * PI;
            Point::new(
                r * t.cos() + jitter(noise, source),
                r * t.sin() + jitter(noise, source),
            )
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rng::{FixedSource, SeededSource};

    #[test]
    fn test_generators_return_exact_count() {
        for dataset in [DatasetType::Moons, DatasetType::Blobs, DatasetType::Circles] {
            for n in [2, 3, 7, 200] {
                let mut source = SeededSource::new(7);
                let points = generate(dataset, n, &mut source);
                assert_eq!(points.len(), n, "{dataset} with n={n}");
                for p in &points {
                    assert!(p.x.is_finite() && p.y.is_finite());
                    assert!(p.cluster.is_none());
                }
            }
        }
    }

    #[test]
    fn test_custom_yields_empty() {
        let mut source = SeededSource::new(7);
        assert!(generate(DatasetType::Custom, 200, &mut source).is_empty());
    }

    #[test]
    fn test_moons_without_noise_start_on_unit_circle() {
        // u = 0.5 makes every jitter zero
        let mut source = FixedSource::constant(0.5);
        let points = moons(4, 0.08, &mut source);
        assert!((points[0].x - 1.0).abs() < 1e-12);
        assert!(points[0].y.abs() < 1e-12);
        // first point of the second arc sits at (1 - cos 0, 0.5 - sin 0) = (0, 0.5)
        assert!(points[2].x.abs() < 1e-12);
        assert!((points[2].y - 0.5).abs() < 1e-12);
    }

    #[test]
    fn test_blobs_collapse_without_scatter() {
        // u = 0.5 puts every centroid at the origin and removes all jitter
        let mut source = FixedSource::constant(0.5);
        for p in blobs(9, 3, 0.5, &mut source) {
            assert_eq!((p.x, p.y), (0.0, 0.0));
        }
    }

    #[test]
    fn test_circles_radii() {
        let mut source = SeededSource::new(11);
        let points = circles(100, 0.5, 0.0, &mut source);
        for p in &points[..50] {
            assert!((p.radius() - 1.0).abs() < 1e-9);
        }
        for p in &points[50..] {
            assert!((p.radius() - 0.5).abs() < 1e-9);
        }
    }

    #[test]
    fn test_same_seed_same_points() {
        let mut a = SeededSource::new(99);
        let mut b = SeededSource::new(99);
        assert_eq!(
            generate(DatasetType::Moons, 50, &mut a),
            generate(DatasetType::Moons, 50, &mut b)
        );
    }
}
