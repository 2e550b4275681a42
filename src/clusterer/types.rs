use crate::dataset::Position;
use serde::{Deserialize, Serialize};
use std::fmt;

use super::ClusterError;

/// Index of a cluster in a partition
pub type ClusterId = usize;

/// Semantic name attached to a centroid
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ClusterRole {
    #[serde(rename = "AI")]
    Ai,
    #[serde(rename = "Medecine")]
    Medecine,
}

impl ClusterRole {
    pub fn name(&self) -> &'static str {
        match self {
            ClusterRole::Ai => "AI",
            ClusterRole::Medecine => "Medecine",
        }
    }

    /// Hover text explaining why a centroid carries this role
    pub fn description(&self) -> &'static str {
        match self {
            ClusterRole::Ai => {
                "This centroid is <b>AI</b> because it has the highest Computer Science grade. \
                 It represents skills geared towards innovative tech solutions."
            }
            ClusterRole::Medecine => {
                "This centroid is <b>Medecine</b> because it has the highest Health grade. \
                 It represents skills focused on medical expertise."
            }
        }
    }
}

impl fmt::Display for ClusterRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Bijection between the two cluster ids and the two roles
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RoleMap {
    roles: [ClusterRole; 2],
}

impl RoleMap {
    pub fn new(ai: ClusterId, medecine: ClusterId) -> Result<Self, ClusterError> {
        match (ai, medecine) {
            (0, 1) => Ok(Self {
                roles: [ClusterRole::Ai, ClusterRole::Medecine],
            }),
            (1, 0) => Ok(Self {
                roles: [ClusterRole::Medecine, ClusterRole::Ai],
            }),
            _ => Err(ClusterError::InvalidInput(format!(
                "Roles must cover clusters 0 and 1 exactly once (AI = {}, Medecine = {})",
                ai, medecine
            ))),
        }
    }

    pub fn role(&self, id: ClusterId) -> Option<ClusterRole> {
        self.roles.get(id).copied()
    }

    pub fn id_of(&self, role: ClusterRole) -> ClusterId {
        if self.roles[0] == role { 0 } else { 1 }
    }

    pub fn iter(&self) -> impl Iterator<Item = (ClusterId, ClusterRole)> + '_ {
        self.roles.iter().copied().enumerate()
    }
}

/// How k-means picks its starting centroids
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "strategy", rename_all = "kebab-case")]
pub enum Initialization {
    /// The first k points, in input order
    FirstK,
    /// k distinct points drawn with a ChaCha8 RNG
    Seeded { seed: u64 },
}

impl Default for Initialization {
    fn default() -> Self {
        Initialization::FirstK
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClusterParams {
    pub k: usize,
    pub max_iters: usize,
    pub init: Initialization,
}

impl Default for ClusterParams {
    fn default() -> Self {
        Self {
            k: 2,
            max_iters: 300,
            init: Initialization::FirstK,
        }
    }
}

/// Raw output of Lloyd's algorithm
#[derive(Debug, Clone, PartialEq)]
pub struct Partition {
    pub assignments: Vec<ClusterId>,
    pub centroids: Vec<Position>,
    pub iterations: usize,
    pub converged: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Cluster {
    pub id: ClusterId,
    pub role: ClusterRole,
    pub centroid: Position,
    /// Indices into the input points
    pub members: Vec<usize>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ClusterResult {
    pub assignments: Vec<ClusterId>,
    pub clusters: Vec<Cluster>,
    pub roles: RoleMap,
    pub iterations: usize,
    pub converged: bool,
}

impl ClusterResult {
    pub(crate) fn from_partition(
        partition: Partition,
        roles: RoleMap,
    ) -> Result<Self, ClusterError> {
        let mut clusters = partition
            .centroids
            .iter()
            .enumerate()
            .map(|(id, centroid)| {
                let role = roles.role(id).ok_or_else(|| {
                    ClusterError::InvalidInput(format!("No role for cluster {}", id))
                })?;
                Ok(Cluster {
                    id,
                    role,
                    centroid: *centroid,
                    members: vec![],
                })
            })
            .collect::<Result<Vec<Cluster>, ClusterError>>()?;

        for (point_idx, &cluster_id) in partition.assignments.iter().enumerate() {
            clusters[cluster_id].members.push(point_idx);
        }

        Ok(Self {
            assignments: partition.assignments,
            clusters,
            roles,
            iterations: partition.iterations,
            converged: partition.converged,
        })
    }

    pub fn centroid(&self, id: ClusterId) -> Option<&Position> {
        self.clusters.get(id).map(|c| &c.centroid)
    }

    pub fn centroids(&self) -> Vec<Position> {
        self.clusters.iter().map(|c| c.centroid).collect()
    }

    /// Role of the cluster a point was assigned to
    pub fn role_of_point(&self, point_idx: usize) -> Option<ClusterRole> {
        self.assignments
            .get(point_idx)
            .and_then(|&id| self.roles.role(id))
    }
}
