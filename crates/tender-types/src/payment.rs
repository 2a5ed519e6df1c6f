//! Payment model: what a customer tenders against an invoice.
//!
//! [`Payment`] is the typed form the engine works with. Each kind carries
//! exactly the value it needs, so a coupon can never hold both a percentage
//! and a fixed amount. [`PaymentRecord`] is the loose form callers receive
//! from forms or JSON, where both fields are optional; converting it into a
//! [`Payment`] applies the fallback rules once, at the boundary.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::{Result, TenderError, constants};

/// The two kinds of tender.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PaymentKind {
    Cash,
    Coupon,
}

impl std::fmt::Display for PaymentKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Cash => write!(f, "CASH"),
            Self::Coupon => write!(f, "COUPON"),
        }
    }
}

/// A coupon's face value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Coupon {
    /// Percentage of the invoice total, e.g. `10` for 10%.
    Percentage(Decimal),
    /// Fixed value in currency units.
    FixedAmount(Decimal),
}

impl Coupon {
    /// Value credited against an invoice of `invoice_total`.
    ///
    /// Percentage coupons credit `floor(total * percentage / 100)`: a 10%
    /// coupon on 999 is worth 99.
    pub fn value_against(&self, invoice_total: Decimal) -> Result<Decimal> {
        match self {
            Self::Percentage(pct) => {
                // Divide first only when the exact product leaves the range.
                let scaled = invoice_total
                    .checked_mul(*pct)
                    .and_then(|v| v.checked_div(constants::PERCENT_BASE))
                    .or_else(|| {
                        let fraction = pct.checked_div(constants::PERCENT_BASE)?;
                        invoice_total.checked_mul(fraction)
                    })
                    .ok_or(TenderError::ArithmeticOverflow {
                        operation: "scaling a percentage coupon",
                    })?;
                Ok(scaled.floor())
            }
            Self::FixedAmount(amount) => Ok(*amount),
        }
    }
}

/// A single tendered payment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Payment {
    Cash { amount: Decimal },
    Coupon(Coupon),
}

impl Payment {
    #[must_use]
    pub fn kind(&self) -> PaymentKind {
        match self {
            Self::Cash { .. } => PaymentKind::Cash,
            Self::Coupon(_) => PaymentKind::Coupon,
        }
    }

    #[must_use]
    pub fn is_coupon(&self) -> bool {
        self.kind() == PaymentKind::Coupon
    }

    #[must_use]
    pub fn is_cash(&self) -> bool {
        self.kind() == PaymentKind::Cash
    }

    /// Value this payment adds to the deposit for an invoice of `invoice_total`.
    pub fn contribution(&self, invoice_total: Decimal) -> Result<Decimal> {
        match self {
            Self::Cash { amount } => Ok(*amount),
            Self::Coupon(coupon) => coupon.value_against(invoice_total),
        }
    }
}

impl std::fmt::Display for Payment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Cash { amount } => write!(f, "CASH {amount}"),
            Self::Coupon(Coupon::Percentage(pct)) => write!(f, "COUPON {pct}%"),
            Self::Coupon(Coupon::FixedAmount(amount)) => write!(f, "COUPON {amount}"),
        }
    }
}

/// Loosely-typed payment as submitted by a caller.
///
/// Both value fields are optional. The accepted field name for the kind is
/// `kind`, with `type` kept as an alias for older payloads.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaymentRecord {
    #[serde(alias = "type")]
    pub kind: PaymentKind,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub percentage: Option<Decimal>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub amount: Option<Decimal>,
}

impl From<PaymentRecord> for Payment {
    /// Coupon: a present `percentage` wins over `amount`; with neither the
    /// coupon is worth zero. Cash: missing `amount` is zero, `percentage`
    /// is ignored.
    fn from(record: PaymentRecord) -> Self {
        match record.kind {
            PaymentKind::Coupon => match record.percentage {
                Some(pct) => Self::Coupon(Coupon::Percentage(pct)),
                None => Self::Coupon(Coupon::FixedAmount(record.amount.unwrap_or_default())),
            },
            PaymentKind::Cash => Self::Cash {
                amount: record.amount.unwrap_or_default(),
            },
        }
    }
}

impl From<Payment> for PaymentRecord {
    fn from(payment: Payment) -> Self {
        match payment {
            Payment::Cash { amount } => Self {
                kind: PaymentKind::Cash,
                percentage: None,
                amount: Some(amount),
            },
            Payment::Coupon(Coupon::Percentage(pct)) => Self {
                kind: PaymentKind::Coupon,
                percentage: Some(pct),
                amount: None,
            },
            Payment::Coupon(Coupon::FixedAmount(amount)) => Self {
                kind: PaymentKind::Coupon,
                percentage: None,
                amount: Some(amount),
            },
        }
    }
}

/// Test helpers. Values are whole currency units.
#[cfg(any(test, feature = "test-helpers"))]
impl Payment {
    pub fn cash(amount: i64) -> Self {
        Self::Cash {
            amount: Decimal::new(amount, 0),
        }
    }

    pub fn percent(pct: i64) -> Self {
        Self::Coupon(Coupon::Percentage(Decimal::new(pct, 0)))
    }

    pub fn fixed(amount: i64) -> Self {
        Self::Coupon(Coupon::FixedAmount(Decimal::new(amount, 0)))
    }
}
