//! Validation of raw user input into typed arguments for the registry.

use std::num::IntErrorKind;

use dealership_core::{DomainError, DomainResult};

pub fn parse_register_year(raw: &str) -> DomainResult<u32> {
    parse_positive_u32(raw, "register year")
}

/// A finite, strictly positive price.
pub fn parse_price(raw: &str) -> DomainResult<f64> {
    let price = raw
        .trim()
        .parse::<f64>()
        .map_err(|_| DomainError::validation(format!("price {:?} is not a number", raw.trim())))?;

    if !price.is_finite() || price <= 0.0 {
        return Err(DomainError::validation("price must be a positive number"));
    }
    Ok(price)
}

/// Non-empty model name that the inventory file can hold.
pub fn parse_model(raw: &str) -> DomainResult<String> {
    let model = raw.trim();
    if model.is_empty() {
        return Err(DomainError::validation("model cannot be empty"));
    }
    if model.contains(';') {
        return Err(DomainError::validation("model cannot contain ';'"));
    }
    Ok(model.to_string())
}

fn parse_positive_u32(raw: &str, what: &str) -> DomainResult<u32> {
    let trimmed = raw.trim();
    let value = trimmed.parse::<u32>().map_err(|e| match e.kind() {
        IntErrorKind::PosOverflow => {
            DomainError::validation(format!("{what} value is out of acceptable range"))
        }
        _ => DomainError::validation(format!("{what} must be a positive integer, got {trimmed:?}")),
    })?;

    if value == 0 {
        return Err(DomainError::validation(format!("{what} must be a positive integer")));
    }
    Ok(value)
}
