use super::error::ValidationError;
use super::rounding::round2;

pub const SCORE_MIN: f64 = 0.0;
pub const SCORE_MAX: f64 = 20.0;
pub const WEIGHT_MIN: f64 = 0.1;
pub const WEIGHT_MAX: f64 = 100.0;

/// One graded assessment.
///
/// Immutable once built: the name is stored trimmed, score and weight are
/// stored rounded to 2 decimals.
#[derive(Debug, Clone, PartialEq)]
pub struct Evaluation {
    name: String,
    score: f64,
    weight: f64,
}

impl Evaluation {
    pub fn new(name: &str, score: f64, weight: f64) -> Result<Self, ValidationError> {
        let name = name.trim();
        if name.is_empty() {
            return Err(ValidationError::new("evaluation name is required"));
        }

        if !score.is_finite() || !(SCORE_MIN..=SCORE_MAX).contains(&score) {
            return Err(ValidationError::new(format!(
                "score must be between {} and {}",
                SCORE_MIN, SCORE_MAX
            )));
        }

        if !weight.is_finite() || !(WEIGHT_MIN..=WEIGHT_MAX).contains(&weight) {
            return Err(ValidationError::new(format!(
                "weight must be between {} and {}",
                WEIGHT_MIN, WEIGHT_MAX
            )));
        }

        Ok(Self {
            name: name.to_string(),
            score: round2(score),
            weight: round2(weight),
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn score(&self) -> f64 {
        self.score
    }

    /// Percentage weight of this evaluation in the final average
    pub fn weight(&self) -> f64 {
        self.weight
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_evaluation() {
        let eval = Evaluation::new("Midterm", 15.0, 40.0).unwrap();
        assert_eq!(eval.name(), "Midterm");
        assert_eq!(eval.score(), 15.0);
        assert_eq!(eval.weight(), 40.0);
    }

    #[test]
    fn test_name_is_trimmed() {
        let eval = Evaluation::new("  Project \t", 18.0, 60.0).unwrap();
        assert_eq!(eval.name(), "Project");
    }

    #[test]
    fn test_values_rounded_to_two_decimals() {
        let eval = Evaluation::new("Quiz", 12.3456, 9.090909).unwrap();
        assert_eq!(eval.score(), 12.35);
        assert_eq!(eval.weight(), 9.09);
    }

    #[test]
    fn test_empty_name_rejected() {
        assert!(Evaluation::new("", 10.0, 50.0).is_err());
        let err = Evaluation::new("   ", 10.0, 50.0).unwrap_err();
        assert_eq!(err.message(), "evaluation name is required");
    }

    #[test]
    fn test_score_bounds() {
        assert!(Evaluation::new("Exam", 0.0, 50.0).is_ok());
        assert!(Evaluation::new("Exam", 20.0, 50.0).is_ok());

        let err = Evaluation::new("Exam", 20.01, 50.0).unwrap_err();
        assert_eq!(err.message(), "score must be between 0 and 20");
        assert!(Evaluation::new("Exam", -0.5, 50.0).is_err());
    }

    #[test]
    fn test_non_finite_values_rejected() {
        assert!(Evaluation::new("Exam", f64::NAN, 50.0).is_err());
        assert!(Evaluation::new("Exam", f64::INFINITY, 50.0).is_err());
        assert!(Evaluation::new("Exam", 10.0, f64::NAN).is_err());
        assert!(Evaluation::new("Exam", 10.0, f64::NEG_INFINITY).is_err());
    }

    #[test]
    fn test_weight_bounds() {
        assert!(Evaluation::new("Exam", 10.0, 0.1).is_ok());
        assert!(Evaluation::new("Exam", 10.0, 100.0).is_ok());

        let err = Evaluation::new("Exam", 10.0, 0.09).unwrap_err();
        assert_eq!(err.message(), "weight must be between 0.1 and 100");
        assert!(Evaluation::new("Exam", 10.0, 100.5).is_err());
    }
}
