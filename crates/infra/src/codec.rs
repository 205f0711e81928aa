//! Line codec for the inventory file.
//!
//! ```text
//! id;model;registerYear;initialPrice;isSold(0|1);salePrice
//! ```
//!
//! Prices are written with two fractional digits. There is no header and no
//! escaping: a `;` inside a model name shifts every following field.

use thiserror::Error;

use dealership_core::CarId;
use dealership_inventory::{Car, CarStatus, RestoredCar};

const SEPARATOR: char = ';';

/// A single line failed to decode. The caller skips it and carries on.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LineError {
    #[error("missing {0}")]
    MissingField(&'static str),

    #[error("invalid {field}: {value:?}")]
    InvalidNumber { field: &'static str, value: String },

    #[error("not valid UTF-8 (bad byte at offset {valid_up_to})")]
    InvalidUtf8 { valid_up_to: usize },
}

/// Decoded form of one line.
#[derive(Debug, Clone, PartialEq)]
pub struct StoredCar {
    pub id: CarId,
    pub model: String,
    pub register_year: u32,
    pub initial_price: f64,
    pub sold: bool,
    /// Only meaningful when `sold` is set.
    pub sale_price: f64,
}

impl From<StoredCar> for RestoredCar {
    fn from(stored: StoredCar) -> Self {
        let status = if stored.sold {
            CarStatus::Sold {
                sale_price: stored.sale_price,
            }
        } else {
            CarStatus::Available
        };

        RestoredCar {
            id: stored.id,
            model: stored.model,
            register_year: stored.register_year,
            initial_price: stored.initial_price,
            status,
        }
    }
}

/// Encode a car as one line (without the trailing newline).
///
/// Available cars carry `0.00` in the sale-price column to keep the field
/// count fixed.
pub fn encode_line(car: &Car) -> String {
    format!(
        "{id};{model};{year};{initial:.2};{sold};{sale:.2}",
        id = car.id_typed(),
        model = car.model(),
        year = car.register_year(),
        initial = car.initial_price(),
        sold = u8::from(car.is_sold()),
        sale = car.sale_price().unwrap_or(0.0),
    )
}

/// Decode one line.
///
/// The first five fields are required. The sale price (everything after the
/// fifth separator) falls back to 0 when missing or unparsable.
pub fn parse_line(line: &str) -> Result<StoredCar, LineError> {
    let mut fields = line.splitn(6, SEPARATOR);

    let id = parse_number::<u32>(fields.next(), "id")?;
    let model = fields.next().ok_or(LineError::MissingField("model"))?;
    let register_year = parse_number::<u32>(fields.next(), "register year")?;
    let initial_price = parse_number::<f64>(fields.next(), "initial price")?;
    let sold = parse_number::<i64>(fields.next(), "sold flag")? != 0;
    let sale_price = fields
        .next()
        .and_then(|raw| raw.trim().parse::<f64>().ok())
        .unwrap_or(0.0);

    Ok(StoredCar {
        id: CarId::new(id),
        model: model.to_string(),
        register_year,
        initial_price,
        sold,
        sale_price,
    })
}

fn parse_number<T: core::str::FromStr>(
    raw: Option<&str>,
    field: &'static str,
) -> Result<T, LineError> {
    let raw = raw.ok_or(LineError::MissingField(field))?;
    raw.trim().parse::<T>().map_err(|_| LineError::InvalidNumber {
        field,
        value: raw.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_sold_line() {
        let stored = parse_line("3;Opel Astra;2015;25000.00;1;24950.00").unwrap();
        assert_eq!(stored.id, CarId::new(3));
        assert_eq!(stored.model, "Opel Astra");
        assert_eq!(stored.register_year, 2015);
        assert_eq!(stored.initial_price, 25000.0);
        assert!(stored.sold);
        assert_eq!(stored.sale_price, 24950.0);
    }

    #[test]
    fn any_non_zero_flag_means_sold() {
        assert!(parse_line("1;A;2000;1.00;2;0.50").unwrap().sold);
        assert!(!parse_line("1;A;2000;1.00;0;0.50").unwrap().sold);
    }

    #[test]
    fn trailing_sale_price_is_optional() {
        let missing = parse_line("1;Ford Focus;2019;9000.00;1").unwrap();
        assert_eq!(missing.sale_price, 0.0);

        let empty = parse_line("1;Ford Focus;2019;9000.00;1;").unwrap();
        assert_eq!(empty.sale_price, 0.0);

        let garbage = parse_line("1;Ford Focus;2019;9000.00;1;n/a").unwrap();
        assert_eq!(garbage.sale_price, 0.0);
    }

    #[test]
    fn numeric_fields_tolerate_whitespace_and_cr() {
        let stored = parse_line("7; Fiat ;2010; 4500.50 ;0;0.00\r").unwrap();
        assert_eq!(stored.id, CarId::new(7));
        assert_eq!(stored.model, " Fiat ");
        assert_eq!(stored.initial_price, 4500.5);
    }

    #[test]
    fn reports_first_missing_field() {
        assert_eq!(parse_line("1"), Err(LineError::MissingField("model")));
        assert_eq!(
            parse_line("1;Model"),
            Err(LineError::MissingField("register year"))
        );
        assert_eq!(
            parse_line("1;Model;2000;100.00"),
            Err(LineError::MissingField("sold flag"))
        );
    }

    #[test]
    fn reports_unparsable_number() {
        assert_eq!(
            parse_line("x;Model;2000;100.00;0;0.00"),
            Err(LineError::InvalidNumber {
                field: "id",
                value: "x".to_string()
            })
        );
        assert!(matches!(
            parse_line("1;Model;twenty;100.00;0;0.00"),
            Err(LineError::InvalidNumber { field: "register year", .. })
        ));
        assert!(matches!(
            parse_line("1;Model;2000;cheap;0;0.00"),
            Err(LineError::InvalidNumber { field: "initial price", .. })
        ));
        assert!(matches!(
            parse_line("1;Model;2000;100.00;yes;0.00"),
            Err(LineError::InvalidNumber { field: "sold flag", .. })
        ));
    }

    #[test]
    fn semicolon_in_model_shifts_fields() {
        assert!(parse_line("1;Model;X;2000;100.00;0;0.00").is_err());
    }

    #[test]
    fn unsold_sale_price_is_ignored_on_restore() {
        let restored: RestoredCar = parse_line("4;Golf;2012;100.00;0;77.00").unwrap().into();
        assert_eq!(restored.status, CarStatus::Available);

        let restored: RestoredCar = parse_line("4;Golf;2012;100.00;1;77.00").unwrap().into();
        assert_eq!(restored.status, CarStatus::Sold { sale_price: 77.0 });
    }
}
