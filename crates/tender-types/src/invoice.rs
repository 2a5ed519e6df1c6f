//! The amount owed.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// An invoice to be settled. Immutable input to the engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Invoice {
    /// Amount owed, in currency units.
    pub total: Decimal,
}

impl Invoice {
    #[must_use]
    pub fn new(total: Decimal) -> Self {
        Self { total }
    }
}
