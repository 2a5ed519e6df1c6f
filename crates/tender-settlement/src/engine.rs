//! The settlement engine.
//!
//! Settling one invoice runs four steps over in-memory values:
//! 1. Reorder payments coupons-first (stable)
//! 2. Accumulate the deposit, rejecting cash tendered once the total is covered
//! 3. Reject the tender if the final deposit is short of the total
//! 4. Compute change: zero for an all-coupon tender, otherwise `deposit - total`
//!
//! Each call is independent. The engine holds only its policy, so a single
//! instance can be shared freely across threads.

use rust_decimal::Decimal;
use tender_types::{
    Invoice, Payment, PaymentRecord, Receipt, Result, SettlementPolicy, TenderError,
};

use crate::deposit::accumulate_deposit;
use crate::digest::{compute_receipt_digest, digest_hex};
use crate::ordering::coupons_first;
use crate::validation::validate_tender;

/// Settles invoices against tendered payments.
#[derive(Debug, Clone, Default)]
pub struct SettlementEngine {
    policy: SettlementPolicy,
}

impl SettlementEngine {
    /// Create an engine with the given policy.
    ///
    /// # Errors
    /// Returns `Configuration` if the policy's own values are invalid.
    pub fn new(policy: SettlementPolicy) -> Result<Self> {
        policy.validate_self()?;
        Ok(Self { policy })
    }

    #[must_use]
    pub fn policy(&self) -> &SettlementPolicy {
        &self.policy
    }

    /// Settle `invoice` against `payments`.
    ///
    /// # Errors
    /// - `InvalidInvoice` / `InvalidPayment` if the policy rejects the input
    /// - `Overcharge` if cash is tendered after the total is covered
    /// - `Shortage` if the deposit never reaches the total
    pub fn settle(&self, invoice: &Invoice, payments: &[Payment]) -> Result<Receipt> {
        let ordered = self.prepare(invoice, payments)?;
        Self::settle_ordered(invoice, payments, &ordered)
    }

    /// Settle loosely-typed payment records.
    pub fn settle_records(&self, invoice: &Invoice, records: &[PaymentRecord]) -> Result<Receipt> {
        let payments: Vec<Payment> = records.iter().copied().map(Payment::from).collect();
        self.settle(invoice, &payments)
    }

    /// Settle and also return the receipt digest.
    pub fn settle_with_digest(
        &self,
        invoice: &Invoice,
        payments: &[Payment],
    ) -> Result<(Receipt, [u8; 32])> {
        let ordered = self.prepare(invoice, payments)?;
        let receipt = Self::settle_ordered(invoice, payments, &ordered)?;
        let digest = compute_receipt_digest(invoice, &ordered, &receipt);
        tracing::debug!(digest = digest_hex(&digest), "Receipt digest computed");
        Ok((receipt, digest))
    }

    fn prepare(&self, invoice: &Invoice, payments: &[Payment]) -> Result<Vec<Payment>> {
        validate_tender(&self.policy, invoice, payments)?;
        let ordered = coupons_first(payments);
        tracing::debug!(
            payments = payments.len(),
            coupons = ordered.iter().filter(|p| p.is_coupon()).count(),
            "Payments ordered coupons-first"
        );
        Ok(ordered)
    }

    fn settle_ordered(
        invoice: &Invoice,
        payments: &[Payment],
        ordered: &[Payment],
    ) -> Result<Receipt> {
        let total = invoice.total;
        let deposit = accumulate_deposit(total, ordered)?;

        if total > deposit {
            tracing::warn!(
                total = %total,
                deposit = %deposit,
                "Shortage: tender does not cover invoice"
            );
            return Err(TenderError::Shortage { deposit, total });
        }

        // Vacuously true for an empty tender.
        let change = if payments.iter().all(Payment::is_coupon) {
            Decimal::ZERO
        } else {
            deposit
                .checked_sub(total)
                .ok_or(TenderError::ArithmeticOverflow {
                    operation: "computing change",
                })?
        };

        tracing::info!(
            total = %total,
            deposit = %deposit,
            change = %change,
            payments = payments.len(),
            "Receipt issued"
        );

        Ok(Receipt {
            total,
            deposit,
            change,
        })
    }
}

/// Settle with the default (strict) policy.
pub fn settle(invoice: &Invoice, payments: &[Payment]) -> Result<Receipt> {
    SettlementEngine::default().settle(invoice, payments)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dec(n: i64) -> Decimal {
        Decimal::new(n, 0)
    }

    fn invoice(total: i64) -> Invoice {
        Invoice::new(dec(total))
    }

    #[test]
    fn exact_cash() {
        let receipt = settle(&invoice(1000), &[Payment::cash(1000)]).unwrap();
        assert_eq!(
            receipt,
            Receipt {
                total: dec(1000),
                deposit: dec(1000),
                change: Decimal::ZERO,
            }
        );
    }

    #[test]
    fn cash_with_change() {
        let receipt = settle(&invoice(1000), &[Payment::cash(1200)]).unwrap();
        assert_eq!(receipt.deposit, dec(1200));
        assert_eq!(receipt.change, dec(200));
    }

    #[test]
    fn mixed_tender_change_counts_coupons() {
        // 10% of 1000 = 100, then 1000 cash: change 100.
        let payments = [Payment::cash(1000), Payment::percent(10)];
        let receipt = settle(&invoice(1000), &payments).unwrap();
        assert_eq!(receipt.deposit, dec(1100));
        assert_eq!(receipt.change, dec(100));
    }

    #[test]
    fn all_coupon_never_gives_change() {
        let payments = [Payment::fixed(500), Payment::fixed(500)];
        let receipt = settle(&invoice(800), &payments).unwrap();
        assert_eq!(receipt.deposit, dec(1000));
        assert_eq!(receipt.change, Decimal::ZERO);
    }

    #[test]
    fn shortage() {
        let err = settle(&invoice(1000), &[Payment::cash(500)]).unwrap_err();
        assert_eq!(
            err,
            TenderError::Shortage {
                deposit: dec(500),
                total: dec(1000),
            }
        );
    }

    #[test]
    fn empty_tender_on_zero_invoice() {
        let receipt = settle(&invoice(0), &[]).unwrap();
        assert_eq!(receipt.deposit, Decimal::ZERO);
        assert_eq!(receipt.change, Decimal::ZERO);
    }

    #[test]
    fn empty_tender_on_nonzero_invoice_is_short() {
        assert!(settle(&invoice(1), &[]).unwrap_err().is_shortage());
    }

    #[test]
    fn engine_keeps_its_policy() {
        let engine = SettlementEngine::new(SettlementPolicy::permissive()).unwrap();
        assert_eq!(engine.policy(), &SettlementPolicy::permissive());
        assert!(!engine.policy().validate_inputs);
        assert!(SettlementEngine::default().policy().validate_inputs);
    }

    #[test]
    fn invalid_policy_rejected() {
        let policy = SettlementPolicy {
            validate_inputs: true,
            max_coupon_percentage: dec(-5),
        };
        assert!(matches!(
            SettlementEngine::new(policy),
            Err(TenderError::Configuration(_))
        ));
    }

    #[test]
    fn strict_engine_rejects_negative_cash() {
        let err = settle(&invoice(100), &[Payment::cash(-100)]).unwrap_err();
        assert!(matches!(err, TenderError::InvalidPayment { index: 0, .. }));
    }

    #[test]
    fn permissive_engine_lets_arithmetic_through() {
        let engine = SettlementEngine::new(SettlementPolicy::permissive()).unwrap();
        // 150% coupon on 100 credits 150; all-coupon so no change.
        let payments = [Payment::percent(150)];
        let receipt = engine.settle(&invoice(100), &payments).unwrap();
        assert_eq!(receipt.deposit, dec(150));
        assert_eq!(receipt.change, Decimal::ZERO);
    }

    #[test]
    fn records_are_resolved_before_settling() {
        let records = [
            PaymentRecord {
                kind: tender_types::PaymentKind::Cash,
                percentage: None,
                amount: Some(dec(900)),
            },
            PaymentRecord {
                kind: tender_types::PaymentKind::Coupon,
                percentage: Some(dec(10)),
                amount: Some(dec(999)),
            },
        ];
        let receipt = SettlementEngine::default()
            .settle_records(&invoice(1000), &records)
            .unwrap();
        assert_eq!(receipt.deposit, dec(1000));
        assert_eq!(receipt.change, Decimal::ZERO);
    }

    #[test]
    fn digest_matches_recomputation() {
        let engine = SettlementEngine::default();
        let payments = [Payment::cash(600), Payment::fixed(400)];
        let total = invoice(1000);
        let (receipt, digest) = engine.settle_with_digest(&total, &payments).unwrap();
        let ordered = coupons_first(&payments);
        let verified = crate::digest::verify_receipt_digest(&total, &ordered, &receipt, &digest);
        assert!(verified);
    }

    #[test]
    fn failed_settlement_has_no_digest() {
        let engine = SettlementEngine::default();
        let payments = [Payment::cash(10)];
        let result = engine.settle_with_digest(&invoice(1000), &payments);
        assert!(result.unwrap_err().is_shortage());
    }
}
