//! Seeded k-means with k-means++ initialization.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use tracing::debug;

use crate::error::AnalysisError;

#[derive(Debug, Clone)]
pub struct KMeans {
    n_clusters: usize,
    seed: u64,
    n_init: usize,
    max_iter: usize,
    tol: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct KMeansFit {
    /// Cluster id per input row, in `[0, n_clusters)`.
    pub labels: Vec<usize>,
    pub centroids: Vec<Vec<f64>>,
    pub inertia: f64,
    pub iterations: usize,
}

impl KMeans {
    pub fn new(n_clusters: usize, seed: u64) -> Self {
        Self {
            n_clusters,
            seed,
            n_init: 10,
            max_iter: 300,
            tol: 1e-4,
        }
    }

    pub fn with_n_init(mut self, n_init: usize) -> Self {
        self.n_init = n_init.max(1);
        self
    }

    pub fn with_max_iter(mut self, max_iter: usize) -> Self {
        self.max_iter = max_iter.max(1);
        self
    }

    /// Run `n_init` seeded restarts and keep the one with the lowest inertia.
    pub fn fit(&self, data: &[Vec<f64>]) -> Result<KMeansFit, AnalysisError> {
        if self.n_clusters == 0 || data.len() < self.n_clusters {
            return Err(AnalysisError::TooFewDocuments {
                documents: data.len(),
                clusters: self.n_clusters,
            });
        }

        let tol = scaled_tolerance(data, self.tol);
        let mut rng = ChaCha8Rng::seed_from_u64(self.seed);

        let mut best = self.single_run(data, &mut rng, tol);
        debug!("k-means run 0: inertia={:.6}, iterations={}", best.inertia, best.iterations);

        for run in 1..self.n_init {
            let fit = self.single_run(data, &mut rng, tol);
            debug!("k-means run {}: inertia={:.6}, iterations={}", run, fit.inertia, fit.iterations);
            if fit.inertia < best.inertia {
                best = fit;
            }
        }

        Ok(best)
    }

    fn single_run(&self, data: &[Vec<f64>], rng: &mut ChaCha8Rng, tol: f64) -> KMeansFit {
        let k = self.n_clusters;
        let mut centroids = init_plus_plus(data, k, rng);
        let mut labels = vec![0; data.len()];
        let mut iterations = 0;

        for _ in 0..self.max_iter {
            iterations += 1;
            assign(data, &centroids, &mut labels);
            fill_empty_clusters(data, &centroids, &mut labels, k);

            let updated = means(data, &labels, k);
            let shift: f64 = centroids
                .iter()
                .zip(&updated)
                .map(|(old, new)| squared_distance(old, new))
                .sum();
            centroids = updated;

            if shift <= tol {
                break;
            }
        }

        assign(data, &centroids, &mut labels);
        fill_empty_clusters(data, &centroids, &mut labels, k);
        let centroids = means(data, &labels, k);

        let inertia = data
            .iter()
            .zip(&labels)
            .map(|(point, &label)| squared_distance(point, &centroids[label]))
            .sum();

        KMeansFit {
            labels,
            centroids,
            inertia,
            iterations,
        }
    }
}

pub fn squared_distance(a: &[f64], b: &[f64]) -> f64 {
    a.iter().zip(b).map(|(x, y)| (x - y) * (x - y)).sum()
}

/// Tolerance relative to the mean per-feature variance of the data.
fn scaled_tolerance(data: &[Vec<f64>], tol: f64) -> f64 {
    let n_cols = data.first().map_or(0, Vec::len);
    if n_cols == 0 {
        return 0.0;
    }

    let n = data.len() as f64;
    let variance_sum: f64 = (0..n_cols)
        .map(|col| {
            let mean = data.iter().map(|row| row[col]).sum::<f64>() / n;
            data.iter().map(|row| (row[col] - mean).powi(2)).sum::<f64>() / n
        })
        .sum();

    tol * variance_sum / n_cols as f64
}

/// k-means++: each new center is drawn with probability proportional to its
/// squared distance from the nearest center chosen so far.
fn init_plus_plus(data: &[Vec<f64>], k: usize, rng: &mut ChaCha8Rng) -> Vec<Vec<f64>> {
    let n = data.len();
    let mut centroids = Vec::with_capacity(k);
    centroids.push(data[rng.gen_range(0..n)].clone());

    let mut closest: Vec<f64> = data
        .iter()
        .map(|point| squared_distance(point, &centroids[0]))
        .collect();

    while centroids.len() < k {
        let total: f64 = closest.iter().sum();
        let next = if total > 0.0 {
            let mut target = rng.gen::<f64>() * total;
            let mut chosen = closest.iter().rposition(|d| *d > 0.0).unwrap_or(0);
            for (i, d) in closest.iter().enumerate() {
                if target < *d {
                    chosen = i;
                    break;
                }
                target -= d;
            }
            chosen
        } else {
            rng.gen_range(0..n)
        };

        let center = data[next].clone();
        for (dist, point) in closest.iter_mut().zip(data) {
            *dist = dist.min(squared_distance(point, &center));
        }
        centroids.push(center);
    }

    centroids
}

/// Nearest centroid per point; ties go to the lower id.
fn assign(data: &[Vec<f64>], centroids: &[Vec<f64>], labels: &mut [usize]) {
    for (label, point) in labels.iter_mut().zip(data) {
        let mut best = 0;
        let mut best_dist = f64::INFINITY;
        for (id, centroid) in centroids.iter().enumerate() {
            let dist = squared_distance(point, centroid);
            if dist < best_dist {
                best = id;
                best_dist = dist;
            }
        }
        *label = best;
    }
}

/// Give every empty cluster the point farthest from its own centroid, taken
/// from a cluster that can spare one. Requires `data.len() >= k`.
fn fill_empty_clusters(data: &[Vec<f64>], centroids: &[Vec<f64>], labels: &mut [usize], k: usize) {
    let mut counts = vec![0usize; k];
    for &label in labels.iter() {
        counts[label] += 1;
    }

    for empty in 0..k {
        if counts[empty] > 0 {
            continue;
        }

        let donor = labels
            .iter()
            .enumerate()
            .filter(|(_, &label)| counts[label] > 1)
            .map(|(i, &label)| (i, squared_distance(&data[i], &centroids[label])))
            .fold(None, |best: Option<(usize, f64)>, (i, dist)| match best {
                Some((_, best_dist)) if best_dist >= dist => best,
                _ => Some((i, dist)),
            });

        if let Some((i, _)) = donor {
            counts[labels[i]] -= 1;
            labels[i] = empty;
            counts[empty] = 1;
        }
    }
}

fn means(data: &[Vec<f64>], labels: &[usize], k: usize) -> Vec<Vec<f64>> {
    let n_cols = data.first().map_or(0, Vec::len);
    let mut sums = vec![vec![0.0; n_cols]; k];
    let mut counts = vec![0usize; k];

    for (point, &label) in data.iter().zip(labels) {
        counts[label] += 1;
        for (sum, value) in sums[label].iter_mut().zip(point) {
            *sum += value;
        }
    }

    for (sum, count) in sums.iter_mut().zip(counts) {
        if count > 0 {
            sum.iter_mut().for_each(|s| *s /= count as f64);
        }
    }

    sums
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    fn blobs() -> Vec<Vec<f64>> {
        vec![
            vec![0.0, 0.0],
            vec![0.1, 0.0],
            vec![10.0, 10.0],
            vec![10.1, 10.0],
            vec![0.0, 10.0],
            vec![0.0, 10.1],
        ]
    }

    #[test]
    fn separates_obvious_groups() {
        let fit = KMeans::new(3, 42).fit(&blobs()).unwrap();

        assert_eq!(fit.labels[0], fit.labels[1]);
        assert_eq!(fit.labels[2], fit.labels[3]);
        assert_eq!(fit.labels[4], fit.labels[5]);
        let distinct: HashSet<usize> = fit.labels.iter().copied().collect();
        assert_eq!(distinct.len(), 3);
        assert!(fit.inertia < 0.1);
    }

    #[test]
    fn same_seed_same_result() {
        let data = blobs();
        let a = KMeans::new(3, 42).fit(&data).unwrap();
        let b = KMeans::new(3, 42).fit(&data).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn identical_points_still_fill_every_cluster() {
        let data = vec![vec![1.0, 0.0]; 4];
        let fit = KMeans::new(3, 42).fit(&data).unwrap();
        let distinct: HashSet<usize> = fit.labels.iter().copied().collect();
        assert_eq!(distinct, HashSet::from([0, 1, 2]));
    }

    #[test]
    fn exactly_k_points_get_one_cluster_each() {
        let data = vec![vec![1.0, 0.0], vec![0.0, 1.0], vec![0.5, 0.5]];
        let fit = KMeans::new(3, 7).with_n_init(1).fit(&data).unwrap();
        let distinct: HashSet<usize> = fit.labels.iter().copied().collect();
        assert_eq!(distinct.len(), 3);
        assert_eq!(fit.inertia, 0.0);
    }

    #[test]
    fn fewer_points_than_clusters_is_an_error() {
        let err = KMeans::new(3, 42)
            .fit(&[vec![1.0], vec![2.0]])
            .unwrap_err();
        assert_eq!(
            err,
            AnalysisError::TooFewDocuments {
                documents: 2,
                clusters: 3
            }
        );
    }

    #[test]
    fn iteration_cap_is_respected() {
        let fit = KMeans::new(3, 42).with_max_iter(1).fit(&blobs()).unwrap();
        assert_eq!(fit.iterations, 1);
        assert!(fit.labels.iter().all(|&l| l < 3));
    }
}
