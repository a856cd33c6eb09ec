//! Request middleware.
//!
//! Purpose: request lifecycle concerns that wrap every route, currently
//! trace identifier assignment.

pub mod trace;

pub use trace::Trace;
