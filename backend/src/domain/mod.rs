//! Domain primitives and aggregates.
//!
//! Purpose: Define strongly typed domain entities used by the API and
//! persistence layers. Keep types immutable and document invariants in each
//! type's Rustdoc. Transport concerns (JSON field names, HTTP statuses) live
//! in the inbound adapters, not here.
//!
//! Public surface:
//! - Company (alias to `company::Company`) — a record in the companies collection.
//! - Error (alias to `error::Error`) — transport-agnostic failure payload.
//! - ErrorCode (alias to `error::ErrorCode`) — stable failure category.

pub mod company;
pub mod error;
pub mod ports;

pub use self::company::{
    Company, CompanyDraft, CompanyId, CompanyValidationError, Headcount, SalaryBand,
};
pub use self::error::{Error, ErrorCode, ErrorValidationError};
