use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// One employee record, validated and typed.
///
/// Instances are only built from fully parsed values, so a half-valid
/// employee never exists. Fields are read through accessors; there are no
/// setters.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct Employee {
    name: String,
    position: String,
    completed_tasks: i64,
    performance: f64,
    skills: Vec<String>,
    team: String,
    experience_years: i64,
}

impl Employee {
    #[must_use]
    pub fn new(
        name: impl Into<String>,
        position: impl Into<String>,
        completed_tasks: i64,
        performance: f64,
        skills: Vec<String>,
        team: impl Into<String>,
        experience_years: i64,
    ) -> Self {
        Self {
            name: name.into(),
            position: position.into(),
            completed_tasks,
            performance,
            skills,
            team: team.into(),
            experience_years,
        }
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Job position; the grouping key of the performance report.
    #[must_use]
    pub fn position(&self) -> &str {
        &self.position
    }

    #[must_use]
    pub const fn completed_tasks(&self) -> i64 {
        self.completed_tasks
    }

    /// Performance score, nominally on a 0-5 scale. The range is not checked.
    #[must_use]
    pub const fn performance(&self) -> f64 {
        self.performance
    }

    #[must_use]
    pub fn skills(&self) -> &[String] {
        &self.skills
    }

    #[must_use]
    pub fn team(&self) -> &str {
        &self.team
    }

    #[must_use]
    pub const fn experience_years(&self) -> i64 {
        self.experience_years
    }
}
