use super::error::ValidationError;
use super::rounding::round2;

pub const MAX_EXTRA_POINTS: f64 = 5.0;
pub const MAX_YEARLY_APPROVALS: usize = 50;

/// Extra-points rule: a unanimous yearly teacher approval unlocks a fixed
/// bonus, and the final grade is capped.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ExtraPointsPolicy {
    max_points: f64,
    cap_grade_at: f64,
}

impl ExtraPointsPolicy {
    pub fn new(max_points: f64, cap_grade_at: f64) -> Result<Self, ValidationError> {
        if !max_points.is_finite() || !(0.0..=MAX_EXTRA_POINTS).contains(&max_points) {
            return Err(ValidationError::new(format!(
                "extra points must be between 0 and {}",
                MAX_EXTRA_POINTS
            )));
        }

        if !cap_grade_at.is_finite() || cap_grade_at <= 0.0 {
            return Err(ValidationError::new(
                "final grade cap must be greater than 0",
            ));
        }

        Ok(Self {
            max_points: round2(max_points),
            cap_grade_at: round2(cap_grade_at),
        })
    }

    pub fn max_points(&self) -> f64 {
        self.max_points
    }

    pub fn cap_grade_at(&self) -> f64 {
        self.cap_grade_at
    }

    /// True only if every year's teachers approved. A single `false` vetoes
    /// the bonus for all years.
    pub fn can_apply(&self, all_years_teachers: &[bool]) -> Result<bool, ValidationError> {
        if all_years_teachers.is_empty() {
            return Err(ValidationError::new(
                "at least one yearly teacher approval is required",
            ));
        }

        if all_years_teachers.len() > MAX_YEARLY_APPROVALS {
            return Err(ValidationError::new(format!(
                "yearly teacher approvals must not exceed {} entries",
                MAX_YEARLY_APPROVALS
            )));
        }

        Ok(all_years_teachers.iter().all(|&approved| approved))
    }

    pub fn compute_extra_points(&self, apply: bool) -> f64 {
        if apply {
            self.max_points
        } else {
            0.0
        }
    }

    pub fn clamp_final_grade(&self, grade: f64) -> f64 {
        self.cap_grade_at.min(round2(grade))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_policy_rounds_config() {
        let policy = ExtraPointsPolicy::new(1.234, 19.999).unwrap();
        assert_eq!(policy.max_points(), 1.23);
        assert_eq!(policy.cap_grade_at(), 20.0);
    }

    #[test]
    fn test_max_points_bounds() {
        assert!(ExtraPointsPolicy::new(0.0, 20.0).is_ok());
        assert!(ExtraPointsPolicy::new(5.0, 20.0).is_ok());
        assert!(ExtraPointsPolicy::new(-0.1, 20.0).is_err());

        let err = ExtraPointsPolicy::new(5.5, 20.0).unwrap_err();
        assert_eq!(err.message(), "extra points must be between 0 and 5");
    }

    #[test]
    fn test_cap_must_be_positive() {
        assert!(ExtraPointsPolicy::new(1.0, 0.0).is_err());
        assert!(ExtraPointsPolicy::new(1.0, -3.0).is_err());
        assert!(ExtraPointsPolicy::new(1.0, f64::NAN).is_err());
    }

    #[test]
    fn test_can_apply_requires_unanimity() {
        let policy = ExtraPointsPolicy::new(1.0, 20.0).unwrap();
        assert!(policy.can_apply(&[true]).unwrap());
        assert!(policy.can_apply(&[true, true, true]).unwrap());
        assert!(!policy.can_apply(&[true, false, true]).unwrap());
        assert!(!policy.can_apply(&[false]).unwrap());
    }

    #[test]
    fn test_can_apply_list_bounds() {
        let policy = ExtraPointsPolicy::new(1.0, 20.0).unwrap();
        assert!(policy.can_apply(&[]).is_err());
        assert!(policy.can_apply(&[true; 50]).unwrap());

        let err = policy.can_apply(&[true; 51]).unwrap_err();
        assert!(err.message().contains("50"));
    }

    #[test]
    fn test_compute_extra_points() {
        let policy = ExtraPointsPolicy::new(2.5, 20.0).unwrap();
        assert_eq!(policy.compute_extra_points(true), 2.5);
        assert_eq!(policy.compute_extra_points(false), 0.0);
    }

    #[test]
    fn test_clamp_final_grade() {
        let policy = ExtraPointsPolicy::new(5.0, 18.0).unwrap();
        assert_eq!(policy.clamp_final_grade(24.5), 18.0);
        assert_eq!(policy.clamp_final_grade(17.456), 17.46);
        assert_eq!(policy.clamp_final_grade(18.0), 18.0);
    }
}
