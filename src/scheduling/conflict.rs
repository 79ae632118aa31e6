//! Interval conflict checks between appointments

use chrono::{Duration, NaiveDateTime};

/// Half-open interval overlap: `[a, a+da)` against `[b, b+db)`.
///
/// Touching endpoints do not overlap, so back-to-back appointments are fine.
pub fn overlaps(
    a_start: NaiveDateTime,
    a_minutes: i32,
    b_start: NaiveDateTime,
    b_minutes: i32,
) -> bool {
    let a_end = a_start + Duration::minutes(i64::from(a_minutes));
    let b_end = b_start + Duration::minutes(i64::from(b_minutes));
    a_start < b_end && b_start < a_end
}

/// Whether a candidate interval collides with any existing appointment.
///
/// `existing` carries `(start, duration_minutes)` snapshots of the provider's
/// pending and accepted appointments; rejected and completed ones never
/// conflict and must not be passed in. When validating an edit, the caller
/// excludes the appointment's own row first. Short-circuits on the first hit.
pub fn has_conflict(
    start: NaiveDateTime,
    duration_minutes: i32,
    existing: &[(NaiveDateTime, i32)],
) -> bool {
    existing
        .iter()
        .any(|&(s, d)| overlaps(start, duration_minutes, s, d))
}
