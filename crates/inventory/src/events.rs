//! Outcomes returned by registry operations.
//!
//! The registry never prints; callers format these however they like.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use dealership_core::CarId;

/// Event: CarAdded.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CarAdded {
    pub car_id: CarId,
    pub model: String,
    pub register_year: u32,
    pub initial_price: f64,
    pub occurred_at: DateTime<Utc>,
}

/// Event: CarSold.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CarSold {
    pub car_id: CarId,
    pub model: String,
    pub initial_price: f64,
    pub sale_price: f64,
    pub occurred_at: DateTime<Utc>,
}

impl CarAdded {
    pub fn event_type(&self) -> &'static str {
        "inventory.car.added"
    }
}

impl CarSold {
    pub fn event_type(&self) -> &'static str {
        "inventory.car.sold"
    }
}
