//! # Validation Module
//!
//! Structural checks run before any accumulation begins.
//!
//! Only shape is checked here. Business rules (discount within 0-100,
//! positive quantities) are trusted from the data loader.

use crate::error::ValidationError;
use crate::types::Seller;

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

/// Validates that the seller collection is non-empty.
///
/// ## Example
/// ```rust
/// use sales_core::validation::validate_sellers;
///
/// assert!(validate_sellers(&[]).is_err());
/// ```
pub fn validate_sellers(sellers: &[Seller]) -> ValidationResult<()> {
    if sellers.is_empty() {
        return Err(ValidationError::Required {
            field: "sellers".to_string(),
        });
    }

    Ok(())
}

/// Validates the cap on top products per seller.
pub fn validate_top_products_limit(limit: usize) -> ValidationResult<()> {
    if limit == 0 {
        return Err(ValidationError::MustBePositive {
            field: "top_products_limit".to_string(),
        });
    }

    Ok(())
}

/// Validates a bonus rate: finite and within 0.0-1.0.
pub fn validate_bonus_rate(field: &str, rate: f64) -> ValidationResult<()> {
    if !rate.is_finite() || !(0.0..=1.0).contains(&rate) {
        return Err(ValidationError::OutOfRange {
            field: field.to_string(),
            min: 0.0,
            max: 1.0,
        });
    }

    Ok(())
}

// =============================================================================
// Unit Tests
// =============================================================================
