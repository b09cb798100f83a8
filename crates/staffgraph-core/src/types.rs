//! Core domain types for the staffgraph graph.
//!
//! Employees and departments are stored as labeled nodes connected by a
//! single `WORKS_IN` relationship. The records here are the flat shapes the
//! API returns; the graph crate projects raw nodes into them.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Node label for employees.
pub const EMPLOYEE_LABEL: &str = "Employee";

/// Node label for departments.
pub const DEPARTMENT_LABEL: &str = "Department";

/// Relationship from an Employee to the Department it belongs to.
/// An employee has at most one outgoing edge of this type.
pub const WORKS_IN: &str = "WORKS_IN";

// ── Identifiers ───────────────────────────────────────────────────

/// Opaque identifier for an employee.
///
/// The value is assigned by the store. Callers may compare, print and
/// parse it, but must not derive meaning from the number itself.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(transparent)]
pub struct EmployeeId(i64);

impl EmployeeId {
    /// Wrap an identifier handed out by the store.
    pub fn from_raw(raw: i64) -> Self {
        Self(raw)
    }

    /// The store-side value, for building queries.
    pub fn as_raw(self) -> i64 {
        self.0
    }
}

impl fmt::Display for EmployeeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Opaque identifier for a department.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(transparent)]
pub struct DepartmentId(i64);

impl DepartmentId {
    pub fn from_raw(raw: i64) -> Self {
        Self(raw)
    }

    pub fn as_raw(self) -> i64 {
        self.0
    }
}

impl fmt::Display for DepartmentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

// ── Records ───────────────────────────────────────────────────────

/// An employee as returned by the API. Field order is the wire order.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Employee {
    pub id: EmployeeId,
    pub name: String,
    pub surname: String,
    pub age: i64,
    pub position: String,
}

/// A department as returned by the API.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Department {
    pub id: DepartmentId,
    pub name: String,
    pub short: String,
}

// ── Write Inputs ──────────────────────────────────────────────────

/// A fully validated request to create an employee in `department`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewEmployee {
    pub name: String,
    pub surname: String,
    pub age: i64,
    pub position: String,
    /// Name of the department to link with `WORKS_IN`.
    pub department: String,
}

/// Replacement values for every editable employee attribute.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmployeeUpdate {
    pub name: String,
    pub surname: String,
    pub age: i64,
    pub position: String,
}

impl EmployeeUpdate {
    /// Build the record that results from applying this update to `id`.
    pub fn into_employee(self, id: EmployeeId) -> Employee {
        Employee {
            id,
            name: self.name,
            surname: self.surname,
            age: self.age,
            position: self.position,
        }
    }
}

impl NewEmployee {
    /// Split off the department name, leaving the employee's own attributes.
    pub fn into_parts(self) -> (EmployeeUpdate, String) {
        (
            EmployeeUpdate {
                name: self.name,
                surname: self.surname,
                age: self.age,
                position: self.position,
            },
            self.department,
        )
    }
}
