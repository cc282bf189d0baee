/// Round to 2 decimal places, half away from zero.
///
/// Every stored or reported grade value goes through this function so that
/// evaluations, policies and the calculator agree on the same representation.
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
