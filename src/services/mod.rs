//! Business logic services

pub mod bookings;
pub mod catalog;
pub mod schedule;

use crate::{config::BookingConfig, repository::Repository};

/// Container for all services
#[derive(Clone)]
pub struct Services {
    pub catalog: catalog::CatalogService,
    pub schedule: schedule::ScheduleService,
    pub bookings: bookings::BookingService,
}

impl Services {
    /// Create all services with the given repository
    pub fn new(repository: Repository, booking_config: BookingConfig) -> Self {
        Self {
            catalog: catalog::CatalogService::new(repository.clone()),
            schedule: schedule::ScheduleService::new(repository.clone(), booking_config.clone()),
            bookings: bookings::BookingService::new(repository, booking_config),
        }
    }
}
