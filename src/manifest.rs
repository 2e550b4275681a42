use anyhow::{Context, Result};
use chrono::Utc;
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use std::path::Path;

use crate::camera::CameraPath;
use crate::clusterer::{ClusterResult, ClusterRole};
use crate::dataset::{Dataset, Position};

/// Summary written next to a rendered page
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Manifest {
    pub version: String,
    pub created_at: String,
    pub generator: String,
    pub page_sha256: String,
    pub stats: ManifestStats,
    pub clusters: Vec<ManifestCluster>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ManifestStats {
    pub point_count: usize,
    pub cluster_count: usize,
    pub iterations: usize,
    pub converged: bool,
    pub frame_count: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ManifestCluster {
    pub id: usize,
    pub role: ClusterRole,
    pub centroid: Position,
    pub members: Vec<String>,
}

/// Hex SHA-256 of the page bytes
pub fn page_digest(html: &str) -> String {
    hex::encode(Sha256::digest(html.as_bytes()))
}

impl Manifest {
    pub fn new(dataset: &Dataset, result: &ClusterResult, path: &CameraPath, html: &str) -> Self {
        let clusters = result
            .clusters
            .iter()
            .map(|c| ManifestCluster {
                id: c.id,
                role: c.role,
                centroid: c.centroid,
                members: c
                    .members
                    .iter()
                    .map(|&i| dataset.points()[i].label.clone())
                    .collect(),
            })
            .collect();

        Self {
            version: "1.0.0".to_string(),
            created_at: Utc::now().to_rfc3339(),
            generator: format!("skillmap v{}", env!("CARGO_PKG_VERSION")),
            page_sha256: page_digest(html),
            stats: ManifestStats {
                point_count: dataset.len(),
                cluster_count: result.clusters.len(),
                iterations: result.iterations,
                converged: result.converged,
                frame_count: path.len(),
            },
            clusters,
        }
    }

    pub fn write_to_file(&self, output_path: &Path) -> Result<()> {
        let json = serde_json::to_string_pretty(self).context("Failed to serialize manifest")?;
        std::fs::write(output_path, json).with_context(|| {
            format!("Failed to write manifest: {}", output_path.display())
        })?;

        tracing::info!(path = %output_path.display(), digest = %self.page_sha256, "manifest written");
        Ok(())
    }

    pub fn read_from_file(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to open manifest: {}", path.display()))?;
        serde_json::from_str(&contents).context("Failed to parse manifest")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::camera::CameraFrame;
    use crate::clusterer::{assign, ClusterParams};

    fn manifest_for(html: &str) -> Manifest {
        let dataset = Dataset::builtin();
        let result = assign(dataset.points(), &ClusterParams::default()).unwrap();
        let path = CameraPath::generate(CameraFrame::new(0.05, -2.5, 0.5), 720, 0.2).unwrap();
        Manifest::new(&dataset, &result, &path, html)
    }

    #[test]
    fn test_page_digest() {
        assert_eq!(
            page_digest(""),
            "e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855"
        );
        assert_ne!(page_digest("<html>"), page_digest("<html> "));
    }

    #[test]
    fn test_manifest_stats() {
        let manifest = manifest_for("<html></html>");
        assert_eq!(manifest.stats.point_count, 6);
        assert_eq!(manifest.stats.cluster_count, 2);
        assert_eq!(manifest.stats.frame_count, 721);
        assert!(manifest.stats.converged);
        assert_eq!(manifest.page_sha256, page_digest("<html></html>"));
        assert!(manifest.generator.starts_with("skillmap v"));

        let medecine = manifest
            .clusters
            .iter()
            .find(|c| c.role == ClusterRole::Medecine)
            .unwrap();
        assert_eq!(medecine.members, vec!["DFGSM", "DFASM"]);
    }

    #[test]
    fn test_manifest_file_roundtrip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("skillmap.manifest.json");

        let manifest = manifest_for("page");
        manifest.write_to_file(&path).unwrap();

        let loaded = Manifest::read_from_file(&path).unwrap();
        assert_eq!(loaded.page_sha256, manifest.page_sha256);
        assert_eq!(loaded.clusters.len(), 2);
        assert_eq!(loaded.clusters[0].role, manifest.clusters[0].role);
    }
}
