//! # Validation Module
//!
//! Caller-side business rule validation.
//!
//! ## Validation Strategy
//! The store operations themselves are deliberately permissive (append,
//! replace, tolerant no-op). Anything that should be rejected is rejected
//! HERE, before the store is touched, so a failed validation leaves state
//! untouched by construction.
//!
//! ## Usage
//! ```rust
//! use harmony_core::validation::{validate_service_name, validate_price};
//! use harmony_core::Money;
//!
//! // Before saving a catalog entry
//! validate_service_name("Griha Pravesh").unwrap();
//! validate_price(Money::from_rupees(5000)).unwrap();
//! ```

use chrono::{NaiveDate, NaiveTime};

use crate::error::{ValidationError, ValidationResult};
use crate::money::Money;

// =============================================================================
// Catalog Entry Validators
// =============================================================================

/// Validates a service name before a catalog save.
///
/// ## Rules
/// - Must not be empty (after trimming)
/// - Must be at most 200 characters
pub fn validate_service_name(name: &str) -> ValidationResult<()> {
    let name = name.trim();

    if name.is_empty() {
        return Err(ValidationError::Required {
            field: "name".to_string(),
        });
    }

    if name.len() > 200 {
        return Err(ValidationError::TooLong {
            field: "name".to_string(),
            max: 200,
        });
    }

    Ok(())
}

/// Validates a service price.
///
/// Zero is allowed (free consultations exist); negative is not.
pub fn validate_price(price: Money) -> ValidationResult<()> {
    if price.is_negative() {
        return Err(ValidationError::Negative {
            field: "price".to_string(),
        });
    }
    Ok(())
}

/// Validates a provider rating (0 to 5 inclusive).
pub fn validate_rating(rating: f64) -> ValidationResult<()> {
    if !(0.0..=5.0).contains(&rating) {
        return Err(ValidationError::OutOfRange {
            field: "rating".to_string(),
            min: 0,
            max: 5,
        });
    }
    Ok(())
}

// =============================================================================
// Checkout Validators
// =============================================================================

/// Validates the checkout schedule: both a date and a time are required.
///
/// Returns the pair so callers can destructure straight into the booking
/// fields.
pub fn validate_schedule(
    date: Option<NaiveDate>,
    time: Option<NaiveTime>,
) -> ValidationResult<(NaiveDate, NaiveTime)> {
    let date = date.ok_or_else(|| ValidationError::Required {
        field: "date".to_string(),
    })?;
    let time = time.ok_or_else(|| ValidationError::Required {
        field: "time".to_string(),
    })?;
    Ok((date, time))
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_service_name_required() {
        assert!(validate_service_name("Griha Pravesh").is_ok());
        assert!(validate_service_name("").is_err());
        assert!(validate_service_name("   ").is_err());
        assert!(validate_service_name(&"x".repeat(201)).is_err());
    }

    #[test]
    fn test_price_must_not_be_negative() {
        assert!(validate_price(Money::from_rupees(2500)).is_ok());
        assert!(validate_price(Money::zero()).is_ok());
        assert!(validate_price(Money::from_paise(-1)).is_err());
    }

    #[test]
    fn test_rating_range() {
        assert!(validate_rating(0.0).is_ok());
        assert!(validate_rating(4.8).is_ok());
        assert!(validate_rating(5.0).is_ok());
        assert!(validate_rating(-0.1).is_err());
        assert!(validate_rating(5.1).is_err());
    }

    #[test]
    fn test_schedule_requires_both_fields() {
        let date = NaiveDate::from_ymd_opt(2025, 11, 3);
        let time = NaiveTime::from_hms_opt(10, 30, 0);

        assert!(validate_schedule(date, time).is_ok());

        let err = validate_schedule(None, time).unwrap_err();
        assert_eq!(err.to_string(), "date is required");

        let err = validate_schedule(date, None).unwrap_err();
        assert_eq!(err.to_string(), "time is required");
    }
}
