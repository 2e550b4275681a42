use crate::clusterer::{
    types::{ClusterId, RoleMap},
    ClusterError,
};
use crate::dataset::{Position, AXIS_COMPUTER_SCIENCE, AXIS_HEALTH};

/// Name two centroids "AI" and "Medecine"
///
/// The centroid with the highest computer science grade is AI; the one with
/// the highest health grade is Medecine. When one centroid leads on both
/// axes it is AI and the other one becomes Medecine regardless of its own
/// health grade.
// NOTE: the both-axes fallback is kept as observed even though it may be unintended.
pub fn name_centroids(centroids: &[Position]) -> Result<RoleMap, ClusterError> {
    if centroids.len() != 2 {
        return Err(ClusterError::InvalidInput(format!(
            "Naming needs exactly 2 centroids, got {}",
            centroids.len()
        )));
    }

    let idx_cs = argmax(centroids, AXIS_COMPUTER_SCIENCE);
    let idx_health = argmax(centroids, AXIS_HEALTH);

    if idx_cs == idx_health {
        RoleMap::new(idx_cs, 1 - idx_cs)
    } else {
        RoleMap::new(idx_cs, idx_health)
    }
}

/// First index holding the largest value on `axis`
fn argmax(centroids: &[Position], axis: usize) -> ClusterId {
    let mut best = 0;
    for (i, c) in centroids.iter().enumerate().skip(1) {
        if c[axis] > centroids[best][axis] {
            best = i;
        }
    }
    best
}
