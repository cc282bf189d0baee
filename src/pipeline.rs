use crate::config::GradingConfig;
use crate::grading::{
    AttendancePolicy, ExtraPointsPolicy, GradeCalculationResult, GradeCalculator,
    ValidationError,
};
use crate::request::Submission;

/// Build the calculator for one submission and run it.
///
/// Extra points come from the submission, then the configured default, then
/// zero. The cap comes from `cap_override`, then the config.
pub fn grade_submission(
    submission: &Submission,
    grading: &GradingConfig,
    cap_override: Option<f64>,
) -> Result<GradeCalculationResult, ValidationError> {
    let max_points = submission
        .extra_points
        .or(grading.default_extra_points)
        .unwrap_or(0.0);
    let cap = cap_override.unwrap_or_else(|| grading.effective_cap());

    let calculator = GradeCalculator::new(
        AttendancePolicy::new(),
        ExtraPointsPolicy::new(max_points, cap)?,
    );

    tracing::info!(student = %submission.student_code, max_points, cap, "grading submission");
    calculator.calculate(&submission.request)
}
