mod centroid;
mod distance;
mod error;
mod kmeans;
mod naming;
mod types;

#[cfg(test)]
mod tests;

pub use error::ClusterError;
pub use kmeans::kmeans;
pub use naming::name_centroids;
pub use types::{
    Cluster, ClusterId, ClusterParams, ClusterResult, ClusterRole, Initialization, Partition,
    RoleMap,
};

use crate::dataset::SkillPoint;

/// Partition points into two clusters and name them
pub fn assign(points: &[SkillPoint], params: &ClusterParams) -> Result<ClusterResult, ClusterError> {
    if params.k != 2 {
        return Err(ClusterError::InvalidInput(format!(
            "Semantic naming is defined for exactly 2 clusters, got k = {}",
            params.k
        )));
    }

    let positions: Vec<_> = points.iter().map(SkillPoint::position).collect();
    let partition = kmeans(&positions, params.k, params.max_iters, params.init)?;
    let roles = name_centroids(&partition.centroids)?;

    for (id, role) in roles.iter() {
        tracing::info!(cluster = id, %role, centroid = ?partition.centroids[id], "cluster named");
    }

    ClusterResult::from_partition(partition, roles)
}
