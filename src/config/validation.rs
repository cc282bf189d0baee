use super::schema::GradingConfig;
use crate::grading::extra_points::MAX_EXTRA_POINTS;

/// Validate grading configuration at startup.
/// Returns all validation errors at once (not just the first).
pub fn validate_grading(config: &GradingConfig) -> Result<(), Vec<String>> {
    let mut errors = Vec::new();

    if let Some(cap) = config.cap_grade_at {
        if !cap.is_finite() || cap <= 0.0 {
            errors.push("grading.cap_grade_at: must be greater than 0".to_string());
        }
    }

    if let Some(points) = config.default_extra_points {
        if !points.is_finite() || !(0.0..=MAX_EXTRA_POINTS).contains(&points) {
            errors.push(format!(
                "grading.default_extra_points: must be between 0 and {}",
                MAX_EXTRA_POINTS
            ));
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_config() {
        let config = GradingConfig {
            cap_grade_at: Some(20.0),
            default_extra_points: Some(1.5),
        };
        assert!(validate_grading(&config).is_ok());
    }

    #[test]
    fn test_empty_config() {
        let config = GradingConfig {
            cap_grade_at: None,
            default_extra_points: None,
        };
        assert!(validate_grading(&config).is_ok());
    }

    #[test]
    fn test_non_positive_cap() {
        let config = GradingConfig {
            cap_grade_at: Some(0.0),
            default_extra_points: None,
        };
        let errors = validate_grading(&config).unwrap_err();
        assert!(errors[0].contains("grading.cap_grade_at"));
    }

    #[test]
    fn test_extra_points_out_of_range() {
        let config = GradingConfig {
            cap_grade_at: None,
            default_extra_points: Some(7.0),
        };
        let errors = validate_grading(&config).unwrap_err();
        assert!(errors[0].contains("grading.default_extra_points"));
    }

    #[test]
    fn test_collects_all_errors() {
        let config = GradingConfig {
            cap_grade_at: Some(-1.0),          // Error 1
            default_extra_points: Some(-2.0),  // Error 2
        };
        let errors = validate_grading(&config).unwrap_err();
        assert_eq!(errors.len(), 2);
    }
}
