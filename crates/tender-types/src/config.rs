//! Settlement policy configuration.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::{Result, TenderError, constants};

/// Controls how much input checking the engine does before settling.
///
/// The settlement rules themselves (ordering, overcharge, shortage, change)
/// are not configurable.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SettlementPolicy {
    /// Reject negative totals, negative values and oversized percentages.
    pub validate_inputs: bool,
    /// Largest percentage a coupon may carry when validating.
    pub max_coupon_percentage: Decimal,
}

impl SettlementPolicy {
    /// Validate every input. This is the default.
    #[must_use]
    pub fn strict() -> Self {
        Self {
            validate_inputs: true,
            max_coupon_percentage: constants::DEFAULT_MAX_COUPON_PERCENTAGE,
        }
    }

    /// No input checks: negative or oversized values flow through the
    /// arithmetic unchanged.
    #[must_use]
    pub fn permissive() -> Self {
        Self {
            validate_inputs: false,
            ..Self::strict()
        }
    }

    /// Check the policy's own values.
    pub fn validate_self(&self) -> Result<()> {
        if self.max_coupon_percentage < Decimal::ZERO {
            return Err(TenderError::Configuration(format!(
                "max_coupon_percentage must be non-negative, got {}",
                self.max_coupon_percentage
            )));
        }
        Ok(())
    }
}

impl Default for SettlementPolicy {
    fn default() -> Self {
        Self::strict()
    }
}
