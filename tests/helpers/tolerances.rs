//! Tolerance constants for score testing.

/// Rounding in frequency arithmetic (cents, ratios, factors).
pub const FREQ_EPSILON: f64 = 1e-9;

/// Cumulative onset sums.
pub const TIME_EPSILON: f64 = 1e-12;
