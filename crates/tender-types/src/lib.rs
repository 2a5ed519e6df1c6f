//! # tender-types
//!
//! Shared types, errors, and configuration for **tender** settlement.
//!
//! This crate is the leaf dependency of the workspace. It defines:
//!
//! - **Invoice model**: [`Invoice`]
//! - **Payment model**: [`Payment`], [`Coupon`], [`PaymentKind`], and the loose [`PaymentRecord`]
//! - **Receipt model**: [`Receipt`]
//! - **Configuration**: [`SettlementPolicy`]
//! - **Errors**: [`TenderError`] with `TD_ERR_` prefix codes
//! - **Constants**: percentage base, policy defaults, digest tag

pub mod config;
pub mod constants;
pub mod error;
pub mod invoice;
pub mod payment;
pub mod receipt;

pub use config::*;
pub use error::*;
pub use invoice::*;
pub use payment::*;
pub use receipt::*;

// Constants are accessed via `tender_types::constants::FOO`.
