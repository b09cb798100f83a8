//! Projection of raw Neo4j rows into API records.
//!
//! Every query returns the node under a known key plus its store identifier
//! as `id`. Projection copies the declared attributes and nothing else; no
//! defaulting happens here.

use neo4rs::{Node, Row};
use serde::de::DeserializeOwned;

use staffgraph_core::{Department, DepartmentId, Employee, EmployeeId};

use crate::client::GraphError;

/// Project a row holding `<node_key>` and `id` into an [`Employee`].
pub fn employee_from_row(row: &Row, node_key: &str) -> Result<Employee, GraphError> {
    let node = node_at(row, node_key)?;
    Ok(Employee {
        id: EmployeeId::from_raw(id_at(row)?),
        name: prop(&node, "name")?,
        surname: prop(&node, "surname")?,
        age: prop(&node, "age")?,
        position: prop(&node, "position")?,
    })
}

/// Project a row holding `<node_key>` and `id` into a [`Department`].
pub fn department_from_row(row: &Row, node_key: &str) -> Result<Department, GraphError> {
    let node = node_at(row, node_key)?;
    Ok(Department {
        id: DepartmentId::from_raw(id_at(row)?),
        name: prop(&node, "name")?,
        short: prop(&node, "short")?,
    })
}

/// Apply [`employee_from_row`] element-wise, keeping the store's order.
pub fn employees_from_rows(rows: &[Row], node_key: &str) -> Result<Vec<Employee>, GraphError> {
    rows.iter()
        .map(|row| employee_from_row(row, node_key))
        .collect()
}

pub fn departments_from_rows(rows: &[Row], node_key: &str) -> Result<Vec<Department>, GraphError> {
    rows.iter()
        .map(|row| department_from_row(row, node_key))
        .collect()
}

fn node_at(row: &Row, key: &str) -> Result<Node, GraphError> {
    row.get(key)
        .map_err(|e| GraphError::Serialization(format!("Failed to deserialize node '{key}': {e}")))
}

fn id_at(row: &Row) -> Result<i64, GraphError> {
    row.get("id")
        .map_err(|e| GraphError::Serialization(format!("Failed to read node id: {e}")))
}

fn prop<T: DeserializeOwned>(node: &Node, key: &str) -> Result<T, GraphError> {
    node.get(key)
        .map_err(|e| GraphError::Serialization(format!("Failed to read property '{key}': {e}")))
}
