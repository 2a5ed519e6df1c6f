//! Receipt fingerprint for audit and cross-checking.
//!
//! The digest is a SHA-256 over the invoice total, the coupons-first
//! payment sequence and the resulting receipt. Two settlements of the same
//! tender on different machines must produce the same digest. Decimals are
//! normalized before hashing so `1000` and `1000.00` hash alike.

use rust_decimal::Decimal;
use sha2::{Digest, Sha256};
use tender_types::{Coupon, Invoice, Payment, Receipt, constants};

/// Compute the receipt digest.
///
/// `ordered` must be the coupons-first sequence the receipt was settled from.
#[must_use]
pub fn compute_receipt_digest(
    invoice: &Invoice,
    ordered: &[Payment],
    receipt: &Receipt,
) -> [u8; 32] {
    let mut hasher = Sha256::new();
    hasher.update(constants::RECEIPT_DIGEST_TAG);
    update_decimal(&mut hasher, invoice.total);
    hasher.update((ordered.len() as u64).to_le_bytes());

    for payment in ordered {
        match payment {
            Payment::Cash { amount } => {
                hasher.update([0u8]);
                update_decimal(&mut hasher, *amount);
            }
            Payment::Coupon(Coupon::Percentage(pct)) => {
                hasher.update([1u8]);
                update_decimal(&mut hasher, *pct);
            }
            Payment::Coupon(Coupon::FixedAmount(amount)) => {
                hasher.update([2u8]);
                update_decimal(&mut hasher, *amount);
            }
        }
    }

    update_decimal(&mut hasher, receipt.total);
    update_decimal(&mut hasher, receipt.deposit);
    update_decimal(&mut hasher, receipt.change);

    let result = hasher.finalize();
    let mut digest = [0u8; 32];
    digest.copy_from_slice(&result);
    digest
}

/// Recompute the digest and compare with `expected`.
#[must_use]
pub fn verify_receipt_digest(
    invoice: &Invoice,
    ordered: &[Payment],
    receipt: &Receipt,
    expected: &[u8; 32],
) -> bool {
    compute_receipt_digest(invoice, ordered, receipt) == *expected
}

/// Hex form for logs and receipts printed to humans.
#[must_use]
pub fn digest_hex(digest: &[u8; 32]) -> String {
    hex::encode(digest)
}

fn update_decimal(hasher: &mut Sha256, value: Decimal) {
    // Length prefix keeps adjacent values from running together.
    let text = value.normalize().to_string();
    hasher.update((text.len() as u64).to_le_bytes());
    hasher.update(text.as_bytes());
}
