//! Repository layer for database operations

pub mod appointments;
pub mod availability;
pub mod exceptions;
pub mod providers;
pub mod services;

use sqlx::{Pool, Postgres};

/// Main repository struct holding database connection pool
#[derive(Clone)]
pub struct Repository {
    pub pool: Pool<Postgres>,
    pub providers: providers::ProvidersRepository,
    pub services: services::ServicesRepository,
    pub availability: availability::AvailabilityRepository,
    pub exceptions: exceptions::BlockedDatesRepository,
    pub appointments: appointments::AppointmentsRepository,
}

impl Repository {
    /// Create a new repository with the given database pool
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self {
            providers: providers::ProvidersRepository::new(pool.clone()),
            services: services::ServicesRepository::new(pool.clone()),
            availability: availability::AvailabilityRepository::new(pool.clone()),
            exceptions: exceptions::BlockedDatesRepository::new(pool.clone()),
            appointments: appointments::AppointmentsRepository::new(pool.clone()),
            pool,
        }
    }
}
