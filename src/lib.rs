//! Bookline Service Booking Platform
//!
//! Backend server for a multi-tenant service-booking platform: solo service
//! providers publish their weekly availability and service list, and customers
//! request appointments against the generated slot grid through a REST JSON API.

use std::sync::Arc;

pub mod api;
pub mod config;
pub mod error;
pub mod models;
pub mod repository;
pub mod scheduling;
pub mod services;

pub use config::AppConfig;
pub use error::{AppError, AppResult};

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<AppConfig>,
    pub services: Arc<services::Services>,
}
