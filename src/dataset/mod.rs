mod error;
mod point;


pub use error::DatasetError;
pub use point::{
    AXIS_COMPUTER_SCIENCE, AXIS_EXPERIENCE, AXIS_HEALTH, DEFAULT_DETAILS, GRADE_MAX, GRADE_MIN,
    Position, SkillPoint,
};

use std::collections::HashSet;
use std::path::Path;

/// Validated, ordered set of skill points
#[derive(Debug, Clone, PartialEq)]
pub struct Dataset {
    points: Vec<SkillPoint>,
}

impl Dataset {
    /// Validate and wrap a list of points
    ///
    /// Rejects empty input, duplicate labels, non-finite grades and grades
    /// outside `GRADE_MIN..=GRADE_MAX`.
    pub fn new(points: Vec<SkillPoint>) -> Result<Self, DatasetError> {
        if points.is_empty() {
            return Err(DatasetError::InvalidInput("Dataset is empty".to_string()));
        }

        let mut seen = HashSet::new();
        for point in &points {
            if point.label.trim().is_empty() {
                return Err(DatasetError::InvalidInput("Empty label".to_string()));
            }
            if !seen.insert(point.label.as_str()) {
                return Err(DatasetError::DuplicateLabel(point.label.clone()));
            }
            for (axis, value) in point.grades() {
                if !value.is_finite() {
                    return Err(DatasetError::InvalidInput(format!(
                        "Non-finite {} for {}",
                        axis, point.label
                    )));
                }
                if !(GRADE_MIN..=GRADE_MAX).contains(&value) {
                    return Err(DatasetError::OutOfRange {
                        label: point.label.clone(),
                        axis,
                        value,
                    });
                }
            }
        }

        Ok(Self { points })
    }

    /// The six built-in skills
    pub fn builtin() -> Self {
        Self {
            points: vec![
                SkillPoint::new("DFGSM", 10.0, 1.0, 5.0),
                SkillPoint::new("DFASM", 10.0, 1.0, 9.0),
                SkillPoint::new("Programmation", 1.0, 10.0, 2.0),
                SkillPoint::new("Cloud", 1.0, 8.0, 6.0),
                SkillPoint::new("MOA", 3.0, 6.0, 5.0),
                SkillPoint::new("PIR", 6.0, 4.0, 6.0),
            ],
        }
    }

    /// Parse a JSON array of points
    pub fn from_json(json: &str) -> Result<Self, DatasetError> {
        let points: Vec<SkillPoint> =
            serde_json::from_str(json).map_err(|e| DatasetError::ParseFailed(e.to_string()))?;
        Self::new(points)
    }

    /// Load a JSON dataset from disk
    pub fn from_json_file(path: &Path) -> anyhow::Result<Self> {
        use anyhow::Context;

        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read dataset: {}", path.display()))?;
        let dataset = Self::from_json(&contents)
            .with_context(|| format!("Invalid dataset: {}", path.display()))?;
        tracing::debug!(path = %path.display(), points = dataset.len(), "dataset loaded");
        Ok(dataset)
    }

    pub fn points(&self) -> &[SkillPoint] {
        &self.points
    }

    pub fn positions(&self) -> Vec<Position> {
        self.points.iter().map(SkillPoint::position).collect()
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}

impl Default for Dataset {
    fn default() -> Self {
        Self::builtin()
    }
}
