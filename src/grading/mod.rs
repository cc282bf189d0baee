pub mod attendance;
pub mod calculator;
pub mod error;
pub mod evaluation;
pub mod extra_points;
pub mod rounding;

pub use attendance::AttendancePolicy;
pub use calculator::{GradeCalculationRequest, GradeCalculationResult, GradeCalculator};
pub use error::ValidationError;
pub use evaluation::Evaluation;
pub use extra_points::ExtraPointsPolicy;
pub use rounding::round2;
