//! API handlers for Bookline REST endpoints
//!
//! Authentication and session management are handled by the fronting gateway;
//! these handlers trust the identifiers in the path.

pub mod bookings;
pub mod health;
pub mod openapi;
pub mod providers;
pub mod schedule;
