//! The store seam between request handlers and the graph.
//!
//! Handlers are generic over [`StaffStore`] and receive it as explicit
//! state; nothing is looked up from ambient request context.

use std::future::Future;

use staffgraph_core::{Department, Employee, EmployeeId, EmployeeUpdate, NewEmployee};

use crate::client::{GraphClient, GraphError};

/// Employee properties that can be matched exactly.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EmployeeFilter {
    Name,
    Surname,
    Position,
}

impl EmployeeFilter {
    /// Node property the filter matches on.
    pub fn property(self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Surname => "surname",
            Self::Position => "position",
        }
    }
}

/// Read and write primitives over employees and departments.
///
/// Every method is one round trip to the store. Writes return `None` when
/// the nodes they must match do not exist.
pub trait StaffStore {
    fn list_employees(&self) -> impl Future<Output = Result<Vec<Employee>, GraphError>> + Send;

    fn employees_by_property(
        &self,
        filter: EmployeeFilter,
        value: &str,
    ) -> impl Future<Output = Result<Vec<Employee>, GraphError>> + Send;

    fn employee_by_id(
        &self,
        id: EmployeeId,
    ) -> impl Future<Output = Result<Option<Employee>, GraphError>> + Send;

    fn employee_exists_by_name(
        &self,
        name: &str,
        surname: &str,
    ) -> impl Future<Output = Result<bool, GraphError>> + Send;

    /// Create the employee and its `WORKS_IN` edge. `None` if the
    /// department name matches nothing.
    fn create_employee(
        &self,
        new: &NewEmployee,
    ) -> impl Future<Output = Result<Option<Employee>, GraphError>> + Send;

    fn update_employee(
        &self,
        id: EmployeeId,
        update: &EmployeeUpdate,
    ) -> impl Future<Output = Result<Option<Employee>, GraphError>> + Send;

    fn employee_departments(
        &self,
        id: EmployeeId,
    ) -> impl Future<Output = Result<Vec<Department>, GraphError>> + Send;

    /// Replace the employee's `WORKS_IN` edge. Either the old edge is
    /// removed and the new one created, or nothing changes and `None` is
    /// returned.
    fn reassign_department(
        &self,
        id: EmployeeId,
        department: &str,
    ) -> impl Future<Output = Result<Option<Employee>, GraphError>> + Send;

    fn list_departments(&self)
        -> impl Future<Output = Result<Vec<Department>, GraphError>> + Send;

    fn departments_by_name(
        &self,
        name: &str,
    ) -> impl Future<Output = Result<Vec<Department>, GraphError>> + Send;
}

impl StaffStore for GraphClient {
    fn list_employees(&self) -> impl Future<Output = Result<Vec<Employee>, GraphError>> + Send {
        self.fetch_employees()
    }

    fn employees_by_property(
        &self,
        filter: EmployeeFilter,
        value: &str,
    ) -> impl Future<Output = Result<Vec<Employee>, GraphError>> + Send {
        self.fetch_employees_where(filter, value)
    }

    fn employee_by_id(
        &self,
        id: EmployeeId,
    ) -> impl Future<Output = Result<Option<Employee>, GraphError>> + Send {
        self.fetch_employee(id)
    }

    fn employee_exists_by_name(
        &self,
        name: &str,
        surname: &str,
    ) -> impl Future<Output = Result<bool, GraphError>> + Send {
        self.employee_name_taken(name, surname)
    }

    fn create_employee(
        &self,
        new: &NewEmployee,
    ) -> impl Future<Output = Result<Option<Employee>, GraphError>> + Send {
        self.insert_employee(new)
    }

    fn update_employee(
        &self,
        id: EmployeeId,
        update: &EmployeeUpdate,
    ) -> impl Future<Output = Result<Option<Employee>, GraphError>> + Send {
        self.set_employee_attributes(id, update)
    }

    fn employee_departments(
        &self,
        id: EmployeeId,
    ) -> impl Future<Output = Result<Vec<Department>, GraphError>> + Send {
        self.fetch_employee_departments(id)
    }

    fn reassign_department(
        &self,
        id: EmployeeId,
        department: &str,
    ) -> impl Future<Output = Result<Option<Employee>, GraphError>> + Send {
        self.relink_department(id, department)
    }

    fn list_departments(
        &self,
    ) -> impl Future<Output = Result<Vec<Department>, GraphError>> + Send {
        self.fetch_departments()
    }

    fn departments_by_name(
        &self,
        name: &str,
    ) -> impl Future<Output = Result<Vec<Department>, GraphError>> + Send {
        self.fetch_departments_named(name)
    }
}
