use serde::Serialize;

use super::figure::{Font, Line, Marker, MarkerColor, Trace};
use super::PageError;
use crate::clusterer::ClusterResult;
use crate::config::PageConfig;
use crate::dataset::SkillPoint;

/// Everything the start button adds to the plot, precomputed
#[derive(Debug, Clone, Serialize)]
pub struct ClusterOverlay {
    /// New color of each base point, in dataset order
    pub marker_colors: Vec<String>,
    /// One centroid-to-point segment per point
    pub lines: Vec<Trace>,
    /// Diamond markers for the centroids, indexed by cluster id
    pub centroids: Trace,
}

impl ClusterOverlay {
    pub fn build(
        points: &[SkillPoint],
        result: &ClusterResult,
        page: &PageConfig,
    ) -> Result<Self, PageError> {
        if result.assignments.len() != points.len() {
            return Err(PageError::InvalidInput(format!(
                "{} points but {} cluster assignments",
                points.len(),
                result.assignments.len()
            )));
        }

        let colors = &page.colors;
        let mut marker_colors = Vec::with_capacity(points.len());
        let mut lines = Vec::with_capacity(points.len());

        for (point, &cluster_id) in points.iter().zip(result.assignments.iter()) {
            let cluster = result.clusters.get(cluster_id).ok_or_else(|| {
                PageError::InvalidInput(format!("Unknown cluster id {}", cluster_id))
            })?;
            let color = colors.color(cluster.role).to_string();

            let mut line = Trace::scatter3d("lines");
            line.push(cluster.centroid);
            line.push(point.position());
            line.line = Some(Line {
                color: color.clone(),
                width: page.line_width,
            });

            marker_colors.push(color);
            lines.push(line);
        }

        let mut centroids = Trace::scatter3d("markers+text");
        for cluster in &result.clusters {
            centroids.push(cluster.centroid);
        }
        centroids.marker = Some(Marker {
            color: MarkerColor::PerPoint(
                result
                    .clusters
                    .iter()
                    .map(|c| colors.color(c.role).to_string())
                    .collect(),
            ),
            size: page.centroid_size,
            symbol: Some("diamond".to_string()),
        });
        centroids.text = Some(
            result
                .clusters
                .iter()
                .map(|c| c.role.name().to_string())
                .collect(),
        );
        centroids.textposition = Some("top center".to_string());
        centroids.textfont = Some(Font {
            color: page.foreground.clone(),
        });
        centroids.hovertext = Some(
            result
                .clusters
                .iter()
                .map(|c| c.role.description().to_string())
                .collect(),
        );
        centroids.hoverinfo = "text".to_string();

        Ok(Self {
            marker_colors,
            lines,
            centroids,
        })
    }
}
