//! System-wide constants for tender settlement.

use rust_decimal::Decimal;

/// Divisor that turns a coupon percentage into a fraction of the invoice.
pub const PERCENT_BASE: Decimal = Decimal::ONE_HUNDRED;

/// Largest coupon percentage accepted by the strict policy.
pub const DEFAULT_MAX_COUPON_PERCENTAGE: Decimal = Decimal::ONE_HUNDRED;

/// Domain separation tag mixed into every receipt digest.
pub const RECEIPT_DIGEST_TAG: &[u8] = b"tender:receipt:v1:";

