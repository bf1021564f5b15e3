//! Money calculation utilities using rust_decimal for precision
//!
//! Amounts are stored and transported as `f64`, but every computation
//! goes through `Decimal` and is rounded to 2 decimal places half-up
//! before leaving this module.

use rust_decimal::prelude::*;

use crate::utils::AppError;

/// Rounding for monetary values (2 decimal places, half-up)
const DECIMAL_PLACES: u32 = 2;

/// Maximum allowed monetary amount (1,000,000)
const MAX_AMOUNT: f64 = 1_000_000.0;
/// Maximum allowed quantity per order line
const MAX_QUANTITY: i64 = 9999;

/// Convert f64 to Decimal for calculation
fn to_decimal(value: f64) -> Decimal {
    Decimal::from_f64(value).unwrap_or_default()
}

/// Convert Decimal back to f64, rounded for storage/serialization
fn to_f64(value: Decimal) -> f64 {
    value
        .round_dp_with_strategy(DECIMAL_PLACES, RoundingStrategy::MidpointAwayFromZero)
        .to_f64()
        .unwrap_or(0.0)
}

/// Ledger line amount: unit price × quantity, rounded to cents.
pub fn line_total(unit_price: f64, quantity: i64) -> f64 {
    to_f64(to_decimal(unit_price) * Decimal::from(quantity))
}

/// Validate a monetary amount: finite, non-negative, within bounds.
pub fn validate_amount(value: f64, field: &str) -> Result<(), AppError> {
    if !value.is_finite() {
        return Err(AppError::validation(format!(
            "{field} must be a finite number, got {value}"
        )));
    }
    if value < 0.0 {
        return Err(AppError::validation(format!(
            "{field} must be non-negative, got {value}"
        )));
    }
    if value > MAX_AMOUNT {
        return Err(AppError::validation(format!(
            "{field} exceeds maximum allowed ({MAX_AMOUNT}), got {value}"
        )));
    }
    Ok(())
}

/// Validate an order line quantity: positive, within bounds.
pub fn validate_quantity(quantity: i64, field: &str) -> Result<(), AppError> {
    if quantity <= 0 {
        return Err(AppError::validation(format!(
            "{field} must be positive, got {quantity}"
        )));
    }
    if quantity > MAX_QUANTITY {
        return Err(AppError::validation(format!(
            "{field} exceeds maximum allowed ({MAX_QUANTITY}), got {quantity}"
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn line_total_is_exact_in_cents() {
        assert_eq!(line_total(19.99, 2), 39.98);
        // 0.1 * 3 would be 0.30000000000000004 in raw f64
        assert_eq!(line_total(0.1, 3), 0.3);
        assert_eq!(line_total(25.0, 2), 50.0);
    }

    #[test]
    fn line_total_rounds_half_up() {
        assert_eq!(line_total(1.115, 1), 1.12);
        assert_eq!(line_total(0.333, 3), 1.0);
    }

    #[test]
    fn amount_validation_bounds() {
        assert!(validate_amount(50.0, "total_amount").is_ok());
        assert!(validate_amount(0.0, "total_amount").is_ok());
        assert!(validate_amount(-0.01, "total_amount").is_err());
        assert!(validate_amount(f64::NAN, "total_amount").is_err());
        assert!(validate_amount(f64::INFINITY, "total_amount").is_err());
        assert!(validate_amount(1_000_000.01, "total_amount").is_err());
    }

    #[test]
    fn quantity_validation_bounds() {
        assert!(validate_quantity(1, "quantity").is_ok());
        assert!(validate_quantity(0, "quantity").is_err());
        assert!(validate_quantity(-2, "quantity").is_err());
        assert!(validate_quantity(10_000, "quantity").is_err());
    }
}
