use serde::Serialize;
use tracing::debug;

use super::attendance::AttendancePolicy;
use super::error::ValidationError;
use super::evaluation::Evaluation;
use super::extra_points::ExtraPointsPolicy;
use super::rounding::round2;

pub const MAX_EVALUATIONS: usize = 10;
pub const TOTAL_WEIGHT: f64 = 100.0;
const WEIGHT_TOLERANCE: f64 = 0.001;

#[derive(Debug, Clone)]
pub struct GradeCalculationRequest {
    pub evaluations: Vec<Evaluation>,
    pub has_reached_min_classes: bool,
    /// One teacher approval flag per academic year
    pub all_years_teachers: Vec<bool>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GradeCalculationResult {
    pub weighted_average: f64,
    pub attendance_satisfied: bool,
    pub extra_policy_approved: bool,
    pub extra_points_applied: f64,
    pub final_grade: f64,
}

/// Combines evaluations, attendance and the extra-points policy into a final
/// grade. Holds only immutable policy configuration, so one calculator can
/// serve any number of requests.
#[derive(Debug, Clone)]
pub struct GradeCalculator {
    attendance_policy: AttendancePolicy,
    extra_points_policy: ExtraPointsPolicy,
}

impl GradeCalculator {
    pub fn new(
        attendance_policy: AttendancePolicy,
        extra_points_policy: ExtraPointsPolicy,
    ) -> Self {
        Self {
            attendance_policy,
            extra_points_policy,
        }
    }

    pub fn extra_points_policy(&self) -> &ExtraPointsPolicy {
        &self.extra_points_policy
    }

    pub fn calculate(
        &self,
        request: &GradeCalculationRequest,
    ) -> Result<GradeCalculationResult, ValidationError> {
        validate_evaluations(&request.evaluations)?;

        let attendance_satisfied = self
            .attendance_policy
            .has_minimum_attendance(request.has_reached_min_classes);
        let extra_policy_approved = self
            .extra_points_policy
            .can_apply(&request.all_years_teachers)?;

        let weighted_average = weighted_average(&request.evaluations);
        let extra_points_applied = self
            .extra_points_policy
            .compute_extra_points(attendance_satisfied && extra_policy_approved);

        let final_grade = self
            .extra_points_policy
            .clamp_final_grade(weighted_average + extra_points_applied);

        debug!(
            evaluations = request.evaluations.len(),
            weighted_average,
            attendance_satisfied,
            extra_policy_approved,
            extra_points_applied,
            final_grade,
            "grade calculated"
        );

        Ok(GradeCalculationResult {
            weighted_average,
            attendance_satisfied,
            extra_policy_approved,
            extra_points_applied,
            final_grade,
        })
    }
}

/// Check the evaluation list: between 1 and 10 entries whose weights add up
/// to 100 (within 0.001).
pub fn validate_evaluations(evaluations: &[Evaluation]) -> Result<(), ValidationError> {
    if evaluations.is_empty() {
        return Err(ValidationError::new("at least one evaluation is required"));
    }

    if evaluations.len() > MAX_EVALUATIONS {
        return Err(ValidationError::new(format!(
            "at most {} evaluations are allowed",
            MAX_EVALUATIONS
        )));
    }

    let total_weight = total_weight(evaluations);
    if (total_weight - TOTAL_WEIGHT).abs() > WEIGHT_TOLERANCE {
        return Err(ValidationError::new(format!(
            "weights must add up to exactly 100 (got {})",
            round2(total_weight)
        )));
    }

    Ok(())
}

pub fn total_weight(evaluations: &[Evaluation]) -> f64 {
    evaluations.iter().map(Evaluation::weight).sum()
}

// Inputs are already rounded at construction; only the quotient is rounded here.
fn weighted_average(evaluations: &[Evaluation]) -> f64 {
    let weighted_sum: f64 = evaluations.iter().map(|e| e.score() * e.weight()).sum();
    round2(weighted_sum / TOTAL_WEIGHT)
}
