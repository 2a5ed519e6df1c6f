//! # tender-settlement
//!
//! **Settlement engine**: settles one invoice against a list of tendered
//! payments and issues a receipt, or fails with a typed error.
//!
//! ## Pipeline
//!
//! 1. Validates input against the [`SettlementPolicy`](tender_types::SettlementPolicy)
//! 2. Orders payments coupons-first (stable partition)
//! 3. Accumulates the deposit; cash after the total is covered is an overcharge
//! 4. Rejects a deposit short of the total
//! 5. Computes change (never for an all-coupon tender)
//!
//! The engine is pure computation: no I/O, no shared state, no persistence.

pub mod deposit;
pub mod digest;
pub mod engine;
pub mod ordering;
pub mod validation;

pub use deposit::{DepositAccumulator, accumulate_deposit};
pub use digest::{compute_receipt_digest, digest_hex, verify_receipt_digest};
pub use engine::{SettlementEngine, settle};
pub use ordering::coupons_first;
pub use validation::validate_tender;
