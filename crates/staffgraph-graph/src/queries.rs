//! Read operations against the employee/department graph.
//!
//! Each function is a single auto-commit query. Result order is whatever
//! the store returns; none of these queries define one.

use neo4rs::query;

use staffgraph_core::{Department, Employee, EmployeeId};

use crate::client::{GraphClient, GraphError};
use crate::record::{departments_from_rows, employee_from_row, employees_from_rows};
use crate::store::EmployeeFilter;

impl GraphClient {
    // ── Employees ────────────────────────────────────────────────

    /// All Employee nodes.
    pub async fn fetch_employees(&self) -> Result<Vec<Employee>, GraphError> {
        let q = query("MATCH (employee:Employee) RETURN employee, ID(employee) AS id");

        let rows = self.query_rows(q).await?;
        employees_from_rows(&rows, "employee")
    }

    /// Employees whose filtered property equals `value` exactly.
    pub async fn fetch_employees_where(
        &self,
        filter: EmployeeFilter,
        value: &str,
    ) -> Result<Vec<Employee>, GraphError> {
        let property = filter.property();
        let cypher = format!(
            "MATCH (employee:Employee {{{property}: $value}})
             RETURN employee, ID(employee) AS id"
        );

        let q = query(&cypher).param("value", value.to_string());

        let rows = self.query_rows(q).await?;
        employees_from_rows(&rows, "employee")
    }

    /// The employee with the given identifier, if any.
    pub async fn fetch_employee(&self, id: EmployeeId) -> Result<Option<Employee>, GraphError> {
        let q = query(
            "MATCH (employee:Employee)
             WHERE ID(employee) = $id
             RETURN employee, ID(employee) AS id",
        )
        .param("id", id.as_raw());

        match self.query_one(q).await? {
            Some(row) => Ok(Some(employee_from_row(&row, "employee")?)),
            None => Ok(None),
        }
    }

    /// Whether an employee with this exact (name, surname) pair exists.
    pub async fn employee_name_taken(&self, name: &str, surname: &str) -> Result<bool, GraphError> {
        let q = query(
            "MATCH (employee:Employee {name: $name, surname: $surname})
             RETURN count(employee) AS cnt",
        )
        .param("name", name.to_string())
        .param("surname", surname.to_string());

        match self.query_one(q).await? {
            Some(row) => {
                let count: i64 = row.get("cnt").map_err(|e| {
                    GraphError::Serialization(format!("Failed to read employee count: {e}"))
                })?;
                Ok(count > 0)
            }
            None => Ok(false),
        }
    }

    /// Departments reachable over the employee's outgoing `WORKS_IN` edge.
    pub async fn fetch_employee_departments(
        &self,
        id: EmployeeId,
    ) -> Result<Vec<Department>, GraphError> {
        let q = query(
            "MATCH (employee:Employee)-[:WORKS_IN]->(department:Department)
             WHERE ID(employee) = $id
             RETURN department, ID(department) AS id",
        )
        .param("id", id.as_raw());

        let rows = self.query_rows(q).await?;
        departments_from_rows(&rows, "department")
    }

    // ── Departments ──────────────────────────────────────────────

    /// All Department nodes.
    pub async fn fetch_departments(&self) -> Result<Vec<Department>, GraphError> {
        let q = query("MATCH (department:Department) RETURN department, ID(department) AS id");

        let rows = self.query_rows(q).await?;
        departments_from_rows(&rows, "department")
    }

    /// Departments with the given name.
    pub async fn fetch_departments_named(&self, name: &str) -> Result<Vec<Department>, GraphError> {
        let q = query(
            "MATCH (department:Department {name: $name})
             RETURN department, ID(department) AS id",
        )
        .param("name", name.to_string());

        let rows = self.query_rows(q).await?;
        departments_from_rows(&rows, "department")
    }
}
