//! Dealership inventory domain.
//!
//! This crate contains the car record, its depreciation pricing and the
//! registry that assigns identifiers and executes sales. It is pure domain
//! logic: no IO, no storage, no console output. Persistence lives in
//! `dealership-infra`, presentation in `dealership-cli`.

pub mod car;
pub mod depreciation;
pub mod events;
pub mod registry;
pub mod report;

pub use car::{Car, CarStatus};
pub use depreciation::DepreciationSchedule;
pub use events::{CarAdded, CarSold};
pub use registry::{AddError, CarRegistry, RestoreError, RestoredCar, SellError};
pub use report::{AvailableListing, CarView, DailyReport};
