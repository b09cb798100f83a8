//! staffgraph-graph: Neo4j client for the employee/department graph.
//!
//! This crate is the single access point for the graph store. Reads and
//! writes flow through [`GraphClient`]; request handlers only see the
//! [`StaffStore`] trait it implements.

pub mod client;
pub mod mutations;
pub mod queries;
pub mod record;
pub mod store;

pub use client::{GraphClient, GraphConfig, GraphError};
pub use store::{EmployeeFilter, StaffStore};
