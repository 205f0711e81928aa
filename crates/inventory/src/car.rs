use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use dealership_core::{CarId, Entity};

use crate::depreciation::DepreciationSchedule;

/// Sale status of a car.
///
/// The sale price only exists on the `Sold` variant, so a car can never be
/// observed as sold without a price (or carrying a price while available).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "lowercase")]
pub enum CarStatus {
    Available,
    Sold { sale_price: f64 },
}

impl CarStatus {
    pub fn is_sold(&self) -> bool {
        matches!(self, CarStatus::Sold { .. })
    }

    pub fn sale_price(&self) -> Option<f64> {
        match self {
            CarStatus::Available => None,
            CarStatus::Sold { sale_price } => Some(*sale_price),
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            CarStatus::Available => "Available",
            CarStatus::Sold { .. } => "Sold",
        }
    }
}

/// One tracked car.
///
/// Instances are created and mutated only by [`crate::CarRegistry`]; callers
/// get shared references or by-value snapshots.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Car {
    id: CarId,
    model: String,
    register_year: u32,
    initial_price: f64,
    added_at: DateTime<Utc>,
    status: CarStatus,
}

impl Car {
    pub(crate) fn new(
        id: CarId,
        model: String,
        register_year: u32,
        initial_price: f64,
        added_at: DateTime<Utc>,
        status: CarStatus,
    ) -> Self {
        Self {
            id,
            model,
            register_year,
            initial_price,
            added_at,
            status,
        }
    }

    pub fn id_typed(&self) -> CarId {
        self.id
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    pub fn register_year(&self) -> u32 {
        self.register_year
    }

    pub fn initial_price(&self) -> f64 {
        self.initial_price
    }

    pub fn added_at(&self) -> DateTime<Utc> {
        self.added_at
    }

    pub fn status(&self) -> CarStatus {
        self.status
    }

    pub fn is_sold(&self) -> bool {
        self.status.is_sold()
    }

    pub fn sale_price(&self) -> Option<f64> {
        self.status.sale_price()
    }

    /// Whole seconds since the car was listed (negative if `now` precedes it).
    pub fn elapsed_secs(&self, now: DateTime<Utc>) -> i64 {
        now.signed_duration_since(self.added_at).num_seconds()
    }

    /// Depreciated price at `now`.
    ///
    /// Used both for listings and for fixing the sale price, so the two can
    /// never disagree for the same instant.
    pub fn current_price(&self, now: DateTime<Utc>) -> f64 {
        DepreciationSchedule::DEALERSHIP.apply(self.initial_price, self.elapsed_secs(now))
    }

    pub(crate) fn mark_sold(&mut self, sale_price: f64) {
        self.status = CarStatus::Sold { sale_price };
    }
}

impl Entity for Car {
    type Id = CarId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}
