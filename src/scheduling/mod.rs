//! Pure scheduling computations
//!
//! Turns a provider's weekly rules and blocked dates into bookable slots, and
//! tests requested intervals for overlap against existing appointments. All
//! functions here receive already-fetched snapshots plus `today` as data: no
//! clock access, no I/O, identical inputs always yield identical output.

pub mod availability;
pub mod conflict;

pub use availability::{bookable_slots, is_date_bookable};
pub use conflict::{has_conflict, overlaps};
