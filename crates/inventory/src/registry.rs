use chrono::{DateTime, Utc};
use thiserror::Error;

use dealership_core::CarId;

use crate::car::{Car, CarStatus};
use crate::events::{CarAdded, CarSold};
use crate::report::{AvailableListing, CarView, DailyReport};

/// Why a sell transaction was refused. Neither case mutates the registry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SellError {
    #[error("no car with ID {0}")]
    NotFound(CarId),

    #[error("car with ID {0} is already sold")]
    AlreadySold(CarId),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum AddError {
    #[error("car IDs are exhausted")]
    IdsExhausted,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum RestoreError {
    #[error("duplicate car ID {0}")]
    DuplicateId(CarId),
}

/// A record read back from storage, ready to be re-inserted.
#[derive(Debug, Clone, PartialEq)]
pub struct RestoredCar {
    pub id: CarId,
    pub model: String,
    pub register_year: u32,
    pub initial_price: f64,
    pub status: CarStatus,
}

/// Owning collection of cars plus identifier assignment.
///
/// Invariants:
/// - ids are unique
/// - `next_id` is `max(id) + 1`, or 1 when empty; `None` once `u32::MAX` is taken
/// - insertion order is preserved (reports rely on it)
#[derive(Debug, Clone, PartialEq)]
pub struct CarRegistry {
    cars: Vec<Car>,
    next_id: Option<CarId>,
}

impl Default for CarRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl CarRegistry {
    pub fn new() -> Self {
        Self {
            cars: Vec::new(),
            next_id: Some(CarId::FIRST),
        }
    }

    pub fn count(&self) -> usize {
        self.cars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cars.is_empty()
    }

    /// Identifier the next added car will receive, `None` when ids are exhausted.
    pub fn next_id(&self) -> Option<CarId> {
        self.next_id
    }

    pub fn get(&self, id: CarId) -> Option<&Car> {
        self.cars.iter().find(|c| c.id_typed() == id)
    }

    /// All cars in insertion order.
    pub fn cars(&self) -> impl Iterator<Item = &Car> {
        self.cars.iter()
    }

    /// `false` for unknown ids.
    pub fn is_sold(&self, id: CarId) -> bool {
        self.get(id).is_some_and(Car::is_sold)
    }

    /// List a new car, stamped with `occurred_at` as its depreciation origin.
    ///
    /// Fails without mutation once every `u32` id has been handed out.
    pub fn add_car(
        &mut self,
        model: impl Into<String>,
        register_year: u32,
        initial_price: f64,
        occurred_at: DateTime<Utc>,
    ) -> Result<CarAdded, AddError> {
        let Some(id) = self.next_id else {
            tracing::warn!("add rejected: car IDs exhausted");
            return Err(AddError::IdsExhausted);
        };
        let car = Car::new(
            id,
            model.into(),
            register_year,
            initial_price,
            occurred_at,
            CarStatus::Available,
        );

        let added = CarAdded {
            car_id: id,
            model: car.model().to_string(),
            register_year,
            initial_price,
            occurred_at,
        };

        self.cars.push(car);
        self.next_id = id.next();

        tracing::info!(
            event = added.event_type(),
            car_id = %id,
            model = %added.model,
            register_year,
            initial_price,
            "car added"
        );
        Ok(added)
    }

    pub fn add_car_now(
        &mut self,
        model: impl Into<String>,
        register_year: u32,
        initial_price: f64,
    ) -> Result<CarAdded, AddError> {
        self.add_car(model, register_year, initial_price, Utc::now())
    }

    /// Sell a car at its depreciated price as of `occurred_at`.
    ///
    /// Either the status flips to sold with the computed price in one
    /// assignment, or nothing changes.
    pub fn sell_car(&mut self, id: CarId, occurred_at: DateTime<Utc>) -> Result<CarSold, SellError> {
        let Some(car) = self.cars.iter_mut().find(|c| c.id_typed() == id) else {
            tracing::warn!(car_id = %id, "sell rejected: not found");
            return Err(SellError::NotFound(id));
        };

        if car.is_sold() {
            tracing::warn!(car_id = %id, "sell rejected: already sold");
            return Err(SellError::AlreadySold(id));
        }

        let sale_price = car.current_price(occurred_at);
        car.mark_sold(sale_price);

        let sold = CarSold {
            car_id: id,
            model: car.model().to_string(),
            initial_price: car.initial_price(),
            sale_price,
            occurred_at,
        };

        tracing::info!(
            event = sold.event_type(),
            car_id = %id,
            model = %sold.model,
            sale_price,
            "car sold"
        );
        Ok(sold)
    }

    pub fn sell_car_now(&mut self, id: CarId) -> Result<CarSold, SellError> {
        self.sell_car(id, Utc::now())
    }

    /// Drop every record and restart numbering at 1.
    pub fn clear(&mut self) {
        self.cars.clear();
        self.next_id = Some(CarId::FIRST);
    }

    /// Re-insert a stored record, keeping its id and status.
    ///
    /// The depreciation clock of a restored car starts at `restored_at`.
    pub fn restore(
        &mut self,
        record: RestoredCar,
        restored_at: DateTime<Utc>,
    ) -> Result<CarId, RestoreError> {
        let id = record.id;
        if self.get(id).is_some() {
            return Err(RestoreError::DuplicateId(id));
        }

        self.cars.push(Car::new(
            id,
            record.model,
            record.register_year,
            record.initial_price,
            restored_at,
            record.status,
        ));
        if self.next_id.is_some_and(|next| id >= next) {
            self.next_id = id.next();
        }

        tracing::debug!(car_id = %id, sold = record.status.is_sold(), "car restored");
        Ok(id)
    }

    /// Cars still for sale, priced as of `now`.
    pub fn available(&self, now: DateTime<Utc>) -> AvailableListing {
        AvailableListing {
            as_of: now,
            cars: self
                .cars
                .iter()
                .filter(|c| !c.is_sold())
                .map(|c| CarView::of(c, now))
                .collect(),
        }
    }

    /// Sold and unsold partitions, each in insertion order.
    pub fn daily_report(&self, now: DateTime<Utc>) -> DailyReport {
        let (sold, available): (Vec<&Car>, Vec<&Car>) = self.cars.iter().partition(|c| c.is_sold());

        DailyReport {
            as_of: now,
            sold: sold.into_iter().map(|c| CarView::of(c, now)).collect(),
            available: available.into_iter().map(|c| CarView::of(c, now)).collect(),
        }
    }
}
