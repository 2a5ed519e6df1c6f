//! Input gate applied before settlement.
//!
//! Under a strict [`SettlementPolicy`] every invoice and payment is checked
//! before any arithmetic happens. The first failing check rejects the whole
//! tender. A permissive policy skips this module entirely.

use rust_decimal::Decimal;
use tender_types::{Coupon, Invoice, Payment, Result, SettlementPolicy, TenderError};

/// Validate an invoice and its tender against `policy`.
///
/// Payments are checked in the caller's order and errors report the
/// caller's index, not the coupons-first position.
pub fn validate_tender(
    policy: &SettlementPolicy,
    invoice: &Invoice,
    payments: &[Payment],
) -> Result<()> {
    if !policy.validate_inputs {
        return Ok(());
    }

    if invoice.total < Decimal::ZERO {
        return Err(TenderError::InvalidInvoice {
            reason: format!("Total must be non-negative, got {}", invoice.total),
        });
    }

    for (index, payment) in payments.iter().enumerate() {
        validate_payment(policy, payment).map_err(|reason| {
            tracing::debug!(index, %payment, %reason, "Payment rejected by policy");
            TenderError::InvalidPayment { index, reason }
        })?;
    }
    Ok(())
}

fn validate_payment(
    policy: &SettlementPolicy,
    payment: &Payment,
) -> std::result::Result<(), String> {
    match payment {
        Payment::Cash { amount } => non_negative("Cash amount", *amount),
        Payment::Coupon(Coupon::FixedAmount(amount)) => non_negative("Coupon amount", *amount),
        Payment::Coupon(Coupon::Percentage(pct)) => {
            non_negative("Coupon percentage", *pct)?;
            if *pct > policy.max_coupon_percentage {
                return Err(format!(
                    "Coupon percentage {pct} exceeds maximum {}",
                    policy.max_coupon_percentage
                ));
            }
            Ok(())
        }
    }
}

fn non_negative(what: &str, value: Decimal) -> std::result::Result<(), String> {
    if value < Decimal::ZERO {
        return Err(format!("{what} must be non-negative, got {value}"));
    }
    Ok(())
}
