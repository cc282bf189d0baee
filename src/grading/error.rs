use thiserror::Error;

/// The only error the grading core produces.
///
/// Raised at the point where a constraint is violated, either while building
/// an [`Evaluation`](super::Evaluation) or policy, or inside
/// [`GradeCalculator::calculate`](super::GradeCalculator::calculate).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct ValidationError {
    message: String,
}

impl ValidationError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}
