use serde::Serialize;

use crate::camera::CameraFrame;
use crate::config::{AnimationConfig, PageConfig};
use crate::dataset::SkillPoint;

/// Plotly figure as consumed by `Plotly.newPlot`
#[derive(Debug, Clone, Serialize)]
pub struct Figure {
    pub data: Vec<Trace>,
    pub layout: Layout,
}

/// A `scatter3d` trace
#[derive(Debug, Clone, Serialize)]
pub struct Trace {
    #[serde(rename = "type")]
    pub kind: String,
    pub mode: String,
    pub x: Vec<f64>,
    pub y: Vec<f64>,
    pub z: Vec<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub marker: Option<Marker>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub line: Option<Line>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub textposition: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub textfont: Option<Font>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hovertext: Option<Vec<String>>,
    pub hoverinfo: String,
    pub showlegend: bool,
}

impl Trace {
    pub fn scatter3d(mode: &str) -> Self {
        Self {
            kind: "scatter3d".to_string(),
            mode: mode.to_string(),
            x: vec![],
            y: vec![],
            z: vec![],
            marker: None,
            line: None,
            text: None,
            textposition: None,
            textfont: None,
            hovertext: None,
            hoverinfo: "skip".to_string(),
            showlegend: false,
        }
    }

    pub fn push(&mut self, position: [f64; 3]) {
        self.x.push(position[0]);
        self.y.push(position[1]);
        self.z.push(position[2]);
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum MarkerColor {
    Single(String),
    PerPoint(Vec<String>),
}

#[derive(Debug, Clone, Serialize)]
pub struct Marker {
    pub color: MarkerColor,
    pub size: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub symbol: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct Line {
    pub color: String,
    pub width: u32,
}

#[derive(Debug, Clone, Serialize)]
pub struct Font {
    pub color: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct Layout {
    pub scene: Scene,
    pub paper_bgcolor: String,
    pub plot_bgcolor: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct Scene {
    pub xaxis: Axis,
    pub yaxis: Axis,
    pub zaxis: Axis,
    pub aspectmode: String,
    pub camera: Camera,
}

#[derive(Debug, Clone, Serialize)]
pub struct Camera {
    pub eye: CameraFrame,
}

#[derive(Debug, Clone, Serialize)]
pub struct Axis {
    pub title: String,
    pub range: [f64; 2],
    pub backgroundcolor: String,
    pub color: String,
    pub gridcolor: String,
}

impl Axis {
    fn grade(title: &str, page: &PageConfig) -> Self {
        Self {
            title: title.to_string(),
            range: [crate::dataset::GRADE_MIN, crate::dataset::GRADE_MAX],
            backgroundcolor: page.background.clone(),
            color: page.foreground.clone(),
            gridcolor: page.grid_color.clone(),
        }
    }
}

/// Hover text for a skill: bold label over its details
pub fn point_hover_text(point: &SkillPoint) -> String {
    format!(
        "<b>{}</b><br>{}",
        html_escape::encode_text(&point.label),
        html_escape::encode_text(point.details())
    )
}

/// Scatter of the skills before any clustering is shown
pub fn base_figure(points: &[SkillPoint], animation: &AnimationConfig, page: &PageConfig) -> Figure {
    let mut trace = Trace::scatter3d("markers+text");
    for point in points {
        trace.push(point.position());
    }
    trace.marker = Some(Marker {
        color: MarkerColor::Single(page.point_color.clone()),
        size: page.point_size,
        symbol: None,
    });
    trace.text = Some(
        points
            .iter()
            .map(|p| html_escape::encode_text(&p.label).into_owned())
            .collect(),
    );
    trace.textposition = Some("top center".to_string());
    trace.textfont = Some(Font {
        color: page.foreground.clone(),
    });
    trace.hovertext = Some(points.iter().map(point_hover_text).collect());
    trace.hoverinfo = "text".to_string();

    Figure {
        data: vec![trace],
        layout: Layout {
            scene: Scene {
                xaxis: Axis::grade("Health", page),
                yaxis: Axis::grade("Experience", page),
                zaxis: Axis::grade("Computer science", page),
                aspectmode: "cube".to_string(),
                camera: Camera {
                    eye: animation.eye,
                },
            },
            paper_bgcolor: page.background.clone(),
            plot_bgcolor: page.background.clone(),
        },
    }
}
