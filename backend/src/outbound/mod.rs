//! Outbound adapters implementing domain ports for external infrastructure.
//!
//! Adapters are thin translators between domain types and transport
//! representations. They contain no business logic:
//!
//! - **contributors**: reqwest-backed client for the upstream user list

pub mod contributors;
