use anyhow::{Context, Result};
use serde::Deserialize;
use std::fs;
use std::path::Path;

use crate::grading::{Evaluation, GradeCalculationRequest, ValidationError};

/// Everything needed to grade one student: who they are, the calculation
/// request, and the extra-points value chosen for this run (if any).
#[derive(Debug, Clone)]
pub struct Submission {
    pub student_code: String,
    pub request: GradeCalculationRequest,
    pub extra_points: Option<f64>,
}

/// On-disk request for non-interactive runs (YAML or JSON).
///
/// Example YAML:
/// ```yaml
/// student: "A001"
/// evaluations:
///   - { name: "Midterm", score: 15, weight: 40 }
///   - { name: "Project", score: 18, weight: 60 }
/// attendance: true
/// teacher_approvals: [true, true]
/// extra_points: 1
/// ```
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct RequestFile {
    pub student: String,
    pub evaluations: Vec<EvaluationEntry>,
    pub attendance: bool,
    pub teacher_approvals: Vec<bool>,
    #[serde(default)]
    pub extra_points: Option<f64>,
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct EvaluationEntry {
    pub name: String,
    pub score: f64,
    pub weight: f64,
}

impl RequestFile {
    /// Build validated evaluations. Count, weight sum and approval checks are
    /// left to the calculator.
    pub fn into_submission(self) -> Result<Submission, ValidationError> {
        let student_code = self.student.trim().to_string();
        if student_code.is_empty() {
            return Err(ValidationError::new("student code is required"));
        }

        let evaluations = self
            .evaluations
            .iter()
            .map(|entry| Evaluation::new(&entry.name, entry.score, entry.weight))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Submission {
            student_code,
            request: GradeCalculationRequest {
                evaluations,
                has_reached_min_classes: self.attendance,
                all_years_teachers: self.teacher_approvals,
            },
            extra_points: self.extra_points,
        })
    }
}

pub fn parse_request(content: &str) -> Result<RequestFile> {
    serde_saphyr::from_str(content).context("Failed to parse request")
}

pub fn load_request(path: &Path) -> Result<RequestFile> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read request file at {}", path.display()))?;
    parse_request(&content).with_context(|| format!("Invalid request file {}", path.display()))
}
