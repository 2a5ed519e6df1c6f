//! Deposit accumulation with the cash overcharge gate.
//!
//! Payments are applied left to right over the coupons-first sequence.
//! Before a cash payment is added, the running deposit is compared with
//! the invoice total: if it already covers the total, the cash is
//! unnecessary and the whole settlement fails with
//! [`TenderError::Overcharge`]. Coupons are never gated and may push the
//! deposit arbitrarily high.

use rust_decimal::Decimal;
use tender_types::{Payment, Result, TenderError};

/// Running deposit for one settlement.
#[derive(Debug)]
pub struct DepositAccumulator {
    /// Total of the invoice being settled.
    invoice_total: Decimal,
    /// Sum credited so far.
    deposit: Decimal,
    /// Number of payments applied so far (also the next position).
    applied: usize,
}

impl DepositAccumulator {
    #[must_use]
    pub fn new(invoice_total: Decimal) -> Self {
        Self {
            invoice_total,
            deposit: Decimal::ZERO,
            applied: 0,
        }
    }

    /// Apply the next payment in the coupons-first sequence.
    ///
    /// # Errors
    /// - `Overcharge` if `payment` is cash and the deposit already covers the total
    /// - `ArithmeticOverflow` if the deposit leaves the decimal range
    pub fn apply(&mut self, payment: &Payment) -> Result<()> {
        let position = self.applied;

        if payment.is_cash() && self.deposit >= self.invoice_total {
            tracing::warn!(
                position,
                deposit = %self.deposit,
                total = %self.invoice_total,
                "Overcharge: cash tendered after invoice was covered"
            );
            return Err(TenderError::Overcharge {
                position,
                deposit: self.deposit,
                total: self.invoice_total,
            });
        }

        let credit = payment.contribution(self.invoice_total)?;
        self.deposit = self
            .deposit
            .checked_add(credit)
            .ok_or(TenderError::ArithmeticOverflow {
                operation: "accumulating the deposit",
            })?;
        self.applied += 1;

        tracing::debug!(
            position,
            kind = %payment.kind(),
            credit = %credit,
            deposit = %self.deposit,
            "Payment applied"
        );
        Ok(())
    }

    /// Deposit accumulated so far.
    #[must_use]
    pub fn deposit(&self) -> Decimal {
        self.deposit
    }

    /// Number of payments applied.
    #[must_use]
    pub fn applied(&self) -> usize {
        self.applied
    }
}

/// Apply every payment of an already coupons-first sequence and return the
/// final deposit.
pub fn accumulate_deposit(invoice_total: Decimal, ordered: &[Payment]) -> Result<Decimal> {
    let mut acc = DepositAccumulator::new(invoice_total);
    for payment in ordered {
        acc.apply(payment)?;
    }
    Ok(acc.deposit())
}
