use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::camera::CameraFrame;
use crate::clusterer::{ClusterParams, ClusterRole};

/// Top-level configuration, loadable from TOML
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub cluster: ClusterParams,
    pub animation: AnimationConfig,
    pub page: PageConfig,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnimationConfig {
    /// Initial camera eye, also the last frame of the orbit
    pub eye: CameraFrame,
    pub steps: usize,
    /// Fraction of the radius removed at the half-way point
    pub zoom_factor: f64,
}

impl Default for AnimationConfig {
    fn default() -> Self {
        Self {
            eye: CameraFrame::new(0.05, -2.5, 0.5),
            steps: 720,
            zoom_factor: 0.2,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RoleColors {
    pub ai: String,
    pub medecine: String,
}

impl RoleColors {
    pub fn color(&self, role: ClusterRole) -> &str {
        match role {
            ClusterRole::Ai => &self.ai,
            ClusterRole::Medecine => &self.medecine,
        }
    }
}

impl Default for RoleColors {
    fn default() -> Self {
        Self {
            ai: "blue".to_string(),
            medecine: "red".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PageConfig {
    pub title: String,
    pub button_label: String,
    pub plotly_src: String,
    pub background: String,
    pub foreground: String,
    pub grid_color: String,
    pub point_color: String,
    pub point_size: u32,
    pub centroid_size: u32,
    pub line_width: u32,
    pub colors: RoleColors,
}

impl Default for PageConfig {
    fn default() -> Self {
        Self {
            title: "Skill map".to_string(),
            button_label: "Run k mean clustering".to_string(),
            plotly_src: "https://cdn.plot.ly/plotly-latest.min.js".to_string(),
            background: "black".to_string(),
            foreground: "white".to_string(),
            grid_color: "grey".to_string(),
            point_color: "cyan".to_string(),
            point_size: 12,
            centroid_size: 16,
            line_width: 2,
            colors: RoleColors::default(),
        }
    }
}

impl Config {
    pub fn from_toml(contents: &str) -> Result<Self> {
        toml::from_str(contents).context("Failed to parse config")
    }

    /// Load from `path`, or fall back to defaults when no path is given
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let Some(path) = path else {
            tracing::debug!("no config file given, using defaults");
            return Ok(Self::default());
        };

        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config: {}", path.display()))?;
        let config = Self::from_toml(&contents)
            .with_context(|| format!("Invalid config: {}", path.display()))?;
        tracing::info!(path = %path.display(), "config loaded");
        Ok(config)
    }
}
