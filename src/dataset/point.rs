use serde::{Deserialize, Serialize};

/// Position in plot order: (health, experience, computer science)
pub type Position = [f64; 3];

/// Axis A of a position
pub const AXIS_HEALTH: usize = 0;
/// Axis B of a position
pub const AXIS_EXPERIENCE: usize = 1;
/// Axis C of a position
pub const AXIS_COMPUTER_SCIENCE: usize = 2;

/// Lower and upper bounds for every grade
pub const GRADE_MIN: f64 = 0.0;
pub const GRADE_MAX: f64 = 10.0;

pub const DEFAULT_DETAILS: &str = "Additional details: An essential skill for this role.";

/// A single labeled skill with three grades
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SkillPoint {
    pub label: String,
    pub health: f64,
    pub computer_science: f64,
    pub experience: f64,
    /// Extra hover text shown under the label
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl SkillPoint {
    pub fn new(label: impl Into<String>, health: f64, computer_science: f64, experience: f64) -> Self {
        Self {
            label: label.into(),
            health,
            computer_science,
            experience,
            details: None,
        }
    }

    pub fn with_details(mut self, details: impl Into<String>) -> Self {
        self.details = Some(details.into());
        self
    }

    /// Plot/cluster position: x = health, y = experience, z = computer science
    pub fn position(&self) -> Position {
        [self.health, self.experience, self.computer_science]
    }

    pub fn details(&self) -> &str {
        self.details.as_deref().unwrap_or(DEFAULT_DETAILS)
    }

    pub(crate) fn grades(&self) -> [(&'static str, f64); 3] {
        [
            ("health", self.health),
            ("computer_science", self.computer_science),
            ("experience", self.experience),
        ]
    }
}
