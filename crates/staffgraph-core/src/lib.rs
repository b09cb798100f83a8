//! staffgraph-core: Shared types, configuration, and error handling.
//!
//! This crate provides the foundational pieces used by the other crates:
//! - Employee and Department records as returned by the API
//! - Opaque identifiers for both node kinds
//! - Validated write inputs
//! - Configuration loading
//! - The top-level error type

pub mod config;
pub mod error;
pub mod types;

pub use error::StaffError;
pub use types::{Department, DepartmentId, Employee, EmployeeId, EmployeeUpdate, NewEmployee};
