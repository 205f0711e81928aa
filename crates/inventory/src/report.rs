//! Read-only inventory views.

use chrono::{DateTime, Utc};
use serde::Serialize;

use dealership_core::CarId;

use crate::car::{Car, CarStatus};

/// Snapshot of one car for display.
///
/// `price` is the committed sale price for sold cars and the depreciated
/// price as of the view's instant for available ones.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CarView {
    pub id: CarId,
    pub model: String,
    pub register_year: u32,
    pub initial_price: f64,
    pub price: f64,
    pub status: CarStatus,
}

impl CarView {
    pub fn of(car: &Car, now: DateTime<Utc>) -> Self {
        let price = car.sale_price().unwrap_or_else(|| car.current_price(now));
        Self {
            id: car.id_typed(),
            model: car.model().to_string(),
            register_year: car.register_year(),
            initial_price: car.initial_price(),
            price,
            status: car.status(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AvailableListing {
    pub as_of: DateTime<Utc>,
    pub cars: Vec<CarView>,
}

impl AvailableListing {
    pub fn is_empty(&self) -> bool {
        self.cars.is_empty()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DailyReport {
    pub as_of: DateTime<Utc>,
    pub sold: Vec<CarView>,
    pub available: Vec<CarView>,
}

impl DailyReport {
    pub fn sold_count(&self) -> usize {
        self.sold.len()
    }

    pub fn available_count(&self) -> usize {
        self.available.len()
    }

    /// Sum of committed sale prices.
    pub fn revenue(&self) -> f64 {
        self.sold.iter().map(|v| v.price).sum()
    }
}
