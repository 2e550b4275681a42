// Public API exports
pub mod camera;
pub mod clusterer;
pub mod config;
pub mod dataset;
pub mod manifest;
pub mod page;
pub mod session;

// Re-export main types for convenience
pub use dataset::{Dataset, DatasetError, Position, SkillPoint};

pub use clusterer::{
    assign, kmeans, name_centroids, Cluster, ClusterError, ClusterId, ClusterParams,
    ClusterResult, ClusterRole, Initialization, RoleMap,
};

pub use camera::{CameraError, CameraFrame, CameraPath, Playback};

pub use config::{AnimationConfig, Config, PageConfig, RoleColors};

pub use page::{render, ClusterOverlay, PageError};

pub use manifest::Manifest;

pub use session::{Session, Trigger};
