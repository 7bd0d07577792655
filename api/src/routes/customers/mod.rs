//! Customer route handlers
//!
//! All endpoints live under `/api/v1/customers`:
//! - Registration and paged listing
//! - Lookups by id, mobile number, email address and full name
//! - Full and single-field updates
//! - Password reset and OTP activation
//! - Soft deletion (status flip) and hard purge

pub mod activate;
pub mod create;
pub mod delete;
pub mod get;
pub mod list;
pub mod password;
pub mod update;

pub use create::AppState;
