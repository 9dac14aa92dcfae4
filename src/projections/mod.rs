//! One projector per chart view. Each is a pure function over the shared
//! index; none depends on another.
pub mod age;
pub mod composition;
pub mod gender;
pub mod ratio;
pub mod time_series;

use std::cmp::Ordering;

/// Descending comparison for non-NaN sums.
fn desc(a: f64, b: f64) -> Ordering {
    b.partial_cmp(&a).unwrap_or(Ordering::Equal)
}
