use serde::{Deserialize, Serialize};

pub const DEFAULT_CAP_GRADE_AT: f64 = 20.0;

/// Top-level config file.
///
/// Example YAML:
/// ```yaml
/// grading:
///   cap_grade_at: 20
///   default_extra_points: 1
/// ```
#[derive(Debug, Clone, Default, Deserialize, Serialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct Config {
    #[serde(default)]
    pub grading: Option<GradingConfig>,
}

/// Grading rules that are fixed per installation rather than per student.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct GradingConfig {
    /// Ceiling for the final grade after extra points (default: 20.0)
    #[serde(default)]
    pub cap_grade_at: Option<f64>,

    /// Extra points offered as the default answer in the interactive shell
    /// and used by request files that omit `extra_points`
    #[serde(default)]
    pub default_extra_points: Option<f64>,
}

impl Default for GradingConfig {
    fn default() -> Self {
        Self {
            cap_grade_at: Some(DEFAULT_CAP_GRADE_AT),
            default_extra_points: None,
        }
    }
}

impl GradingConfig {
    pub fn effective_cap(&self) -> f64 {
        self.cap_grade_at.unwrap_or(DEFAULT_CAP_GRADE_AT)
    }
}
