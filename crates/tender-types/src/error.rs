//! Error types for tender settlement.
//!
//! All errors use the `TD_ERR_` prefix convention for easy grepping in logs.
//! Error codes are grouped by subsystem:
//! - 1xx: Settlement outcomes (overcharge, shortage)
//! - 2xx: Input validation
//! - 9xx: General / internal errors

use rust_decimal::Decimal;
use thiserror::Error;

/// Central error enum for all settlement operations.
///
/// Every variant is terminal: the engine never retries, the caller must
/// supply a corrected tender and settle again.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TenderError {
    // =================================================================
    // Settlement Outcomes (1xx)
    // =================================================================
    /// A cash payment was tendered after the invoice was already covered.
    ///
    /// `position` is the index of the rejected payment in the
    /// coupons-first sequence; `deposit` is the running deposit before it.
    #[error(
        "TD_ERR_100: Overcharge: cash tendered at position {position} with deposit {deposit} already covering total {total}"
    )]
    Overcharge {
        position: usize,
        deposit: Decimal,
        total: Decimal,
    },

    /// All payments were applied and the deposit is still below the total.
    #[error("TD_ERR_101: Shortage: deposit {deposit} is less than total {total}")]
    Shortage { deposit: Decimal, total: Decimal },

    // =================================================================
    // Input Validation (2xx)
    // =================================================================
    /// The invoice failed validation.
    #[error("TD_ERR_200: Invalid invoice: {reason}")]
    InvalidInvoice { reason: String },

    /// A payment failed validation. `index` is its position in the caller's input.
    #[error("TD_ERR_201: Invalid payment at index {index}: {reason}")]
    InvalidPayment { index: usize, reason: String },

    // =================================================================
    // General / Internal (9xx)
    // =================================================================
    /// Decimal arithmetic left the representable range.
    #[error("TD_ERR_900: Arithmetic overflow while {operation}")]
    ArithmeticOverflow { operation: &'static str },

    /// Configuration error (bad policy values).
    #[error("TD_ERR_902: Configuration error: {0}")]
    Configuration(String),
}

impl TenderError {
    /// Whether this is an [`TenderError::Overcharge`].
    #[must_use]
    pub fn is_overcharge(&self) -> bool {
        matches!(self, Self::Overcharge { .. })
    }

    /// Whether this is a [`TenderError::Shortage`].
    #[must_use]
    pub fn is_shortage(&self) -> bool {
        matches!(self, Self::Shortage { .. })
    }
}

/// Crate-wide `Result` alias.
pub type Result<T> = std::result::Result<T, TenderError>;
