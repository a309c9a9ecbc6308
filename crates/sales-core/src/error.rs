//! # Error Types
//!
//! Domain-specific error types for sales-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  sales-core errors (this file)                                         │
//! │  ├── AnalysisError    - Fatal pipeline failures                        │
//! │  └── ValidationError  - Structural input failures                      │
//! │                                                                         │
//! │  sales-config errors (separate crate)                                  │
//! │  └── ConfigError      - File / parse / tunable failures                │
//! │                                                                         │
//! │  Flow: ValidationError → AnalysisError → caller                        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Every variant is fatal: the pipeline is all-or-nothing and never returns
//! partial reports. Unknown seller ids in purchase records are NOT errors;
//! those records are skipped by the aggregator.

use std::fmt;

use thiserror::Error;

// =============================================================================
// Strategy Kind
// =============================================================================

/// Identifies one of the two injectable strategies.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StrategyKind {
    /// Per-line revenue calculation.
    Revenue,
    /// Per-rank bonus calculation.
    Bonus,
}

impl fmt::Display for StrategyKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StrategyKind::Revenue => write!(f, "calculate_revenue"),
            StrategyKind::Bonus => write!(f, "calculate_bonus"),
        }
    }
}

// =============================================================================
// Analysis Error
// =============================================================================

/// Pipeline errors.
///
/// All of these abort the run before any report is produced.
#[derive(Debug, Error)]
pub enum AnalysisError {
    /// The input datasets failed a structural check.
    ///
    /// ## When This Occurs
    /// - The seller collection is empty
    #[error("Invalid input: {0}")]
    InvalidInput(#[from] ValidationError),

    /// A required strategy was not supplied in the options.
    #[error("Missing strategy: {which}")]
    MissingStrategy { which: StrategyKind },

    /// A line item references a SKU absent from the product catalog.
    ///
    /// ## When This Occurs
    /// ```text
    /// PurchaseRecord { seller_id: "seller_1", items: [ { sku: "SKU_404" } ] }
    ///      │
    ///      ▼
    /// product index lookup: SKU_404 → none
    ///      │
    ///      ▼
    /// UnknownProduct { sku: "SKU_404" } → whole run aborted
    /// ```
    #[error("Product not found: {sku}")]
    UnknownProduct { sku: String },
}

// =============================================================================
// Validation Error
// =============================================================================

/// Structural validation errors.
#[derive(Debug, Error)]
pub enum ValidationError {
    /// A required collection is missing or empty.
    #[error("{field} is required")]
    Required { field: String },

    /// Value must be positive.
    #[error("{field} must be positive")]
    MustBePositive { field: String },

    /// Numeric value is out of range.
    #[error("{field} must be between {min} and {max}")]
    OutOfRange { field: String, min: f64, max: f64 },
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with AnalysisError.
pub type AnalysisResult<T> = Result<T, AnalysisError>;

// =============================================================================
// Unit Tests
// =============================================================================
