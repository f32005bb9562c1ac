//! `platedesk-core` -- domain logic for the license-plate administration desk.
//!
//! Pure logic, no I/O: resident identity-code validation, the form payloads
//! of the loss-filing / plate-return / status-lookup workflows, and the
//! small field validators those forms share.

pub mod contact;
pub mod error;
pub mod forms;
pub mod identity_code;
pub mod plate;
pub mod types;

pub use error::CoreError;
pub use identity_code::{inspect, validate, IdentityCodeError, IdentityCodeInfo};
