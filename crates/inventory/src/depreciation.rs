//! Time-based price depreciation.
//!
//! A listed car keeps its price for a grace period, then loses a fixed
//! fraction of it for every started step of time, up to a ceiling.

use dealership_core::ValueObject;

/// Step-function depreciation schedule.
///
/// For `elapsed` whole seconds since listing:
/// - `elapsed <= grace_secs` (including negative clock skew): no discount
/// - otherwise: `rate * (1 + (elapsed - grace_secs) / step_secs)` (integer division)
/// - the discount never exceeds `cap`
///
/// Fields are private: `step_secs` must be positive and `grace_secs`
/// non-negative for `discount_for` to be total.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DepreciationSchedule {
    grace_secs: i64,
    step_secs: i64,
    rate: f64,
    cap: f64,
}

impl ValueObject for DepreciationSchedule {}

impl DepreciationSchedule {
    /// 30s grace, then 0.1% per started 10s, capped at 20%.
    pub const DEALERSHIP: DepreciationSchedule = DepreciationSchedule {
        grace_secs: 30,
        step_secs: 10,
        rate: 0.001,
        cap: 0.20,
    };

    /// Fractional discount (0.0..=cap) after `elapsed_secs`.
    pub fn discount_for(&self, elapsed_secs: i64) -> f64 {
        if elapsed_secs <= self.grace_secs {
            return 0.0;
        }

        let steps = (elapsed_secs - self.grace_secs) / self.step_secs;
        let discount = self.rate + self.rate * steps as f64;
        discount.min(self.cap)
    }

    /// Price of an item listed at `initial_price` after `elapsed_secs`.
    pub fn apply(&self, initial_price: f64, elapsed_secs: i64) -> f64 {
        let discount = self.discount_for(elapsed_secs);
        if discount == 0.0 {
            return initial_price;
        }
        initial_price * (1.0 - discount)
    }
}
