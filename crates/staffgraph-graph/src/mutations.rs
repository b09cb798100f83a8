//! Write operations for the employee/department graph.
//!
//! Each mutation is one Cypher statement run in its own transaction. A
//! statement whose MATCH finds nothing produces no row and changes
//! nothing, which callers see as `Ok(None)`.

use neo4rs::query;

use staffgraph_core::{Employee, EmployeeId, EmployeeUpdate, NewEmployee};

use crate::client::{GraphClient, GraphError};
use crate::record::employee_from_row;

impl GraphClient {
    /// Create an employee linked by `WORKS_IN` to the department named in
    /// `new`. Returns `None` when no such department exists.
    pub async fn insert_employee(&self, new: &NewEmployee) -> Result<Option<Employee>, GraphError> {
        let q = query(
            "MATCH (d:Department {name: $department})
             WITH d LIMIT 1
             CREATE (employee:Employee {
               name: $name, surname: $surname, age: $age, position: $position
             })-[:WORKS_IN]->(d)
             RETURN employee, ID(employee) AS id",
        )
        .param("department", new.department.clone())
        .param("name", new.name.clone())
        .param("surname", new.surname.clone())
        .param("age", new.age)
        .param("position", new.position.clone());

        match self.write_one(q).await? {
            Some(row) => Ok(Some(employee_from_row(&row, "employee")?)),
            None => Ok(None),
        }
    }

    /// Overwrite all four attributes of an employee. The `WORKS_IN` edge is
    /// left alone. Returns `None` when the id matches no employee.
    pub async fn set_employee_attributes(
        &self,
        id: EmployeeId,
        update: &EmployeeUpdate,
    ) -> Result<Option<Employee>, GraphError> {
        let q = query(
            "MATCH (employee:Employee)
             WHERE ID(employee) = $id
             SET employee.name = $name,
                 employee.surname = $surname,
                 employee.age = $age,
                 employee.position = $position
             RETURN employee, ID(employee) AS id",
        )
        .param("id", id.as_raw())
        .param("name", update.name.clone())
        .param("surname", update.surname.clone())
        .param("age", update.age)
        .param("position", update.position.clone());

        match self.write_one(q).await? {
            Some(row) => Ok(Some(employee_from_row(&row, "employee")?)),
            None => Ok(None),
        }
    }

    /// Move an employee to the department named `department`.
    ///
    /// The target department is matched before the old edge is touched, so
    /// an unknown department name produces no row and leaves the existing
    /// `WORKS_IN` edge in place. Employees with no current edge are linked
    /// directly.
    pub async fn relink_department(
        &self,
        id: EmployeeId,
        department: &str,
    ) -> Result<Option<Employee>, GraphError> {
        let q = query(
            "MATCH (employee:Employee)
             WHERE ID(employee) = $id
             MATCH (new_dep:Department {name: $department})
             WITH employee, new_dep LIMIT 1
             OPTIONAL MATCH (employee)-[r:WORKS_IN]->()
             DELETE r
             WITH DISTINCT employee, new_dep
             CREATE (employee)-[:WORKS_IN]->(new_dep)
             RETURN employee, ID(employee) AS id",
        )
        .param("id", id.as_raw())
        .param("department", department.to_string());

        match self.write_one(q).await? {
            Some(row) => Ok(Some(employee_from_row(&row, "employee")?)),
            None => Ok(None),
        }
    }
}
