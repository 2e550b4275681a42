use crate::clusterer::{
    centroid::compute_centroid,
    distance::euclidean_distance,
    types::{ClusterId, Initialization, Partition},
    ClusterError,
};
use crate::dataset::Position;

/// Lloyd's algorithm with Euclidean distance
///
/// Stops as soon as a pass leaves every assignment unchanged, or after
/// `max_iters` passes. Initial centroids are drawn from distinct positions.
/// A point equally close to several centroids stays where it is, otherwise
/// it goes to the lowest cluster index. A cluster left empty takes over the
/// point lying farthest from its own centroid, so every cluster keeps at
/// least one member.
pub fn kmeans(
    points: &[Position],
    k: usize,
    max_iters: usize,
    init: Initialization,
) -> Result<Partition, ClusterError> {
    validate(points, k, max_iters)?;

    let n = points.len();

    // 1. Pick initial centers
    let mut centroids = initial_centroids(points, k, init);

    // usize::MAX marks "not yet assigned" so the first pass always counts as a change
    let mut assignments = vec![usize::MAX; n];
    let mut iterations = 0;
    let mut converged = false;

    for _ in 0..max_iters {
        iterations += 1;

        // 2. Assign each point to nearest centroid
        let mut changed = false;
        for (i, point) in points.iter().enumerate() {
            let best = nearest(point, &centroids, assignments[i]);
            if assignments[i] != best {
                changed = true;
                assignments[i] = best;
            }
        }

        if refill_empty(points, &mut assignments, &mut centroids) {
            changed = true;
        }

        if !changed {
            converged = true;
            break;
        }

        // 3. Recompute centroids
        for (c, centroid) in centroids.iter_mut().enumerate() {
            let members: Vec<&Position> = points
                .iter()
                .zip(assignments.iter())
                .filter(|&(_, a)| *a == c)
                .map(|(p, _)| p)
                .collect();

            if !members.is_empty() {
                *centroid = compute_centroid(&members);
            }
        }
    }

    tracing::debug!(k, iterations, converged, "k-means finished");

    Ok(Partition {
        assignments,
        centroids,
        iterations,
        converged,
    })
}

fn validate(points: &[Position], k: usize, max_iters: usize) -> Result<(), ClusterError> {
    if k == 0 {
        return Err(ClusterError::InvalidInput(
            "Cluster count must be at least 1".to_string(),
        ));
    }
    if points.len() < k {
        return Err(ClusterError::InvalidInput(format!(
            "Need at least {} points for {} clusters, got {}",
            k,
            k,
            points.len()
        )));
    }
    if max_iters == 0 {
        return Err(ClusterError::InvalidInput(
            "Iteration cap must be at least 1".to_string(),
        ));
    }
    if let Some(i) = points.iter().position(|p| p.iter().any(|v| !v.is_finite())) {
        return Err(ClusterError::InvalidInput(format!(
            "Point {} has a non-finite coordinate",
            i
        )));
    }
    Ok(())
}

fn initial_centroids(points: &[Position], k: usize, init: Initialization) -> Vec<Position> {
    let distinct = distinct_positions(points);

    let mut centroids: Vec<Position> = match init {
        Initialization::FirstK => distinct.iter().take(k).copied().collect(),
        Initialization::Seeded { seed } => {
            use rand::{seq::SliceRandom, SeedableRng};
            use rand_chacha::ChaCha8Rng;

            let mut rng = ChaCha8Rng::seed_from_u64(seed);
            distinct.choose_multiple(&mut rng, k).copied().collect()
        }
    };

    // Fewer distinct positions than clusters: the empty ones get refilled on the first pass
    while centroids.len() < k {
        centroids.push(points[0]);
    }

    centroids
}

/// Positions in input order with exact duplicates removed
fn distinct_positions(points: &[Position]) -> Vec<Position> {
    let mut out: Vec<Position> = Vec::with_capacity(points.len());
    for p in points {
        if !out.contains(p) {
            out.push(*p);
        }
    }
    out
}

fn nearest(point: &Position, centroids: &[Position], current: ClusterId) -> ClusterId {
    let mut best = 0;
    let mut best_dist = f64::INFINITY;
    for (c, center) in centroids.iter().enumerate() {
        let d = euclidean_distance(point, center);
        if d < best_dist {
            best = c;
            best_dist = d;
        }
    }

    match centroids.get(current) {
        Some(center) if euclidean_distance(point, center) == best_dist => current,
        _ => best,
    }
}

/// Move a point into every empty cluster
///
/// The point is taken from a cluster with at least two members and is the
/// one farthest from its centroid. Returns whether anything moved.
fn refill_empty(
    points: &[Position],
    assignments: &mut [ClusterId],
    centroids: &mut [Position],
) -> bool {
    let k = centroids.len();
    let mut moved = false;

    for c in 0..k {
        let mut sizes = vec![0usize; k];
        for &a in assignments.iter() {
            sizes[a] += 1;
        }
        if sizes[c] > 0 {
            continue;
        }

        let donor = points
            .iter()
            .enumerate()
            .filter(|&(i, _)| sizes[assignments[i]] > 1)
            .map(|(i, p)| (i, euclidean_distance(p, &centroids[assignments[i]])))
            .max_by(|a, b| a.1.total_cmp(&b.1));

        if let Some((i, _)) = donor {
            tracing::debug!(cluster = c, point = i, "refilling empty cluster");
            assignments[i] = c;
            centroids[c] = points[i];
            moved = true;
        }
    }

    moved
}
