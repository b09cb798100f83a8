//! staffgraph-api: HTTP layer over the employee/department graph.
//!
//! Translates path parameters and JSON bodies into [`StaffStore`] calls
//! and shapes the results into flat JSON records.
//!
//! [`StaffStore`]: staffgraph_graph::StaffStore

pub mod error;
pub mod handlers;
pub mod payload;
pub mod routes;

pub use error::{ApiError, ErrorKind};
pub use routes::{app, routes};
