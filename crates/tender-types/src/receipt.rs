//! Settlement receipt.
//!
//! A [`Receipt`] is only ever produced by a successful settlement. There is
//! no partial or pending receipt: a failed settlement yields an error and
//! nothing else.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Outcome of settling one invoice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Receipt {
    /// The invoice total that was settled.
    pub total: Decimal,
    /// Sum credited by every payment, coupons included.
    pub deposit: Decimal,
    /// Cash handed back. Always zero for an all-coupon tender.
    pub change: Decimal,
}

impl Receipt {
    /// Whether the tender covered the total with nothing to hand back.
    #[must_use]
    pub fn is_exact(&self) -> bool {
        self.change.is_zero()
    }

    /// Value credited beyond the total that is not returned as change.
    ///
    /// Non-zero only when coupons over-cover the invoice.
    #[must_use]
    pub fn forfeited(&self) -> Decimal {
        self.deposit
            .saturating_sub(self.total)
            .saturating_sub(self.change)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exact_receipt() {
        let receipt = Receipt {
            total: Decimal::new(1000, 0),
            deposit: Decimal::new(1000, 0),
            change: Decimal::ZERO,
        };
        assert!(receipt.is_exact());
        assert_eq!(receipt.forfeited(), Decimal::ZERO);
    }

    #[test]
    fn coupon_overage_is_forfeited() {
        let receipt = Receipt {
            total: Decimal::new(800, 0),
            deposit: Decimal::new(1000, 0),
            change: Decimal::ZERO,
        };
        assert_eq!(receipt.forfeited(), Decimal::new(200, 0));
    }

    #[test]
    fn receipt_serde_roundtrip() {
        let receipt = Receipt {
            total: Decimal::new(1000, 0),
            deposit: Decimal::new(1200, 0),
            change: Decimal::new(200, 0),
        };
        let json = serde_json::to_string(&receipt).unwrap();
        let back: Receipt = serde_json::from_str(&json).unwrap();
        assert_eq!(receipt, back);
    }
}
