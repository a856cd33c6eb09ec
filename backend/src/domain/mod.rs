//! Domain primitives, ports, and use-cases.
//!
//! Purpose: keep the contributor schema, the tip list, and the validating
//! proxy use-case free of HTTP and transport concerns. Adapters in
//! `inbound` and `outbound` depend on this module, never the reverse.
//!
//! Public surface:
//! - `Contributor` and its field newtypes, plus `validate_contributors`.
//! - `Tip` and the `TIPS` list.
//! - `Error` / `ErrorCode`: transport-agnostic failure categories.
//! - `TraceId`: request correlation identifier.
//! - `ContributorsService`: implementation of the `ContributorsQuery` port.

pub mod contributor;
pub mod contributors_service;
pub mod error;
pub mod ports;
pub mod tips;
pub mod trace_id;

pub use self::contributor::{
    Company, Contributor, ContributorId, ContributorName, EmailAddress, FieldError,
    SchemaViolation, WebsiteUrl, validate_contributors,
};
pub use self::contributors_service::ContributorsService;
pub use self::error::{
    Error, ErrorCode, ErrorValidationError, FETCH_FAILED_MESSAGE, INVALID_DATA_MESSAGE,
};
pub use self::tips::{TIPS, Tip};
pub use self::trace_id::{TRACE_ID_HEADER, TraceId};
