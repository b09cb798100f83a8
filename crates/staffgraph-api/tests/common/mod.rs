//! In-memory StaffStore for driving the router without Neo4j.
//!
//! Mirrors the graph semantics the handlers rely on: store-assigned ids,
//! at most one WORKS_IN edge per employee, and writes that change nothing
//! when their match fails.

#![allow(dead_code)]

use std::collections::{BTreeMap, HashMap};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use axum::body::Body;
use axum::http::{Request, StatusCode};
use http_body_util::BodyExt;
use serde_json::Value;
use tokio::sync::RwLock;
use tower::ServiceExt;

use staffgraph_core::{
    Department, DepartmentId, Employee, EmployeeId, EmployeeUpdate, NewEmployee,
};
use staffgraph_graph::{EmployeeFilter, GraphError, StaffStore};

#[derive(Default)]
struct Graph {
    next_id: i64,
    employees: BTreeMap<EmployeeId, Employee>,
    departments: BTreeMap<DepartmentId, Department>,
    works_in: HashMap<EmployeeId, DepartmentId>,
}

impl Graph {
    fn next_id(&mut self) -> i64 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    fn department_named(&self, name: &str) -> Option<DepartmentId> {
        self.departments
            .values()
            .find(|d| d.name == name)
            .map(|d| d.id)
    }
}

#[derive(Clone, Default)]
pub struct InMemoryStore {
    graph: Arc<RwLock<Graph>>,
    failing: Arc<AtomicBool>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make every subsequent store call fail as if Neo4j were unreachable.
    pub fn fail_requests(&self) {
        self.failing.store(true, Ordering::SeqCst);
    }

    pub async fn seed_department(&self, name: &str, short: &str) -> Department {
        let mut graph = self.graph.write().await;
        let department = Department {
            id: DepartmentId::from_raw(graph.next_id()),
            name: name.to_string(),
            short: short.to_string(),
        };
        graph
            .departments
            .insert(department.id, department.clone());
        department
    }

    /// Add an employee with no WORKS_IN edge.
    pub async fn seed_unassigned_employee(&self, name: &str, surname: &str) -> Employee {
        let mut graph = self.graph.write().await;
        let employee = Employee {
            id: EmployeeId::from_raw(graph.next_id()),
            name: name.to_string(),
            surname: surname.to_string(),
            age: 25,
            position: "Analyst".to_string(),
        };
        graph.employees.insert(employee.id, employee.clone());
        employee
    }

    pub async fn employee_count(&self) -> usize {
        self.graph.read().await.employees.len()
    }

    pub async fn department_of(&self, id: EmployeeId) -> Option<String> {
        let graph = self.graph.read().await;
        graph
            .works_in
            .get(&id)
            .and_then(|dep| graph.departments.get(dep))
            .map(|d| d.name.clone())
    }

    fn check(&self) -> Result<(), GraphError> {
        if self.failing.load(Ordering::SeqCst) {
            return Err(GraphError::Connection("connection refused".to_string()));
        }
        Ok(())
    }
}

impl StaffStore for InMemoryStore {
    async fn list_employees(&self) -> Result<Vec<Employee>, GraphError> {
        self.check()?;
        Ok(self.graph.read().await.employees.values().cloned().collect())
    }

    async fn employees_by_property(
        &self,
        filter: EmployeeFilter,
        value: &str,
    ) -> Result<Vec<Employee>, GraphError> {
        self.check()?;
        let graph = self.graph.read().await;
        Ok(graph
            .employees
            .values()
            .filter(|e| match filter {
                EmployeeFilter::Name => e.name == value,
                EmployeeFilter::Surname => e.surname == value,
                EmployeeFilter::Position => e.position == value,
            })
            .cloned()
            .collect())
    }

    async fn employee_by_id(&self, id: EmployeeId) -> Result<Option<Employee>, GraphError> {
        self.check()?;
        Ok(self.graph.read().await.employees.get(&id).cloned())
    }

    async fn employee_exists_by_name(&self, name: &str, surname: &str) -> Result<bool, GraphError> {
        self.check()?;
        Ok(self
            .graph
            .read()
            .await
            .employees
            .values()
            .any(|e| e.name == name && e.surname == surname))
    }

    async fn create_employee(&self, new: &NewEmployee) -> Result<Option<Employee>, GraphError> {
        self.check()?;
        let mut graph = self.graph.write().await;
        let Some(department) = graph.department_named(&new.department) else {
            return Ok(None);
        };
        let (attrs, _) = new.clone().into_parts();
        let employee = attrs.into_employee(EmployeeId::from_raw(graph.next_id()));
        graph.employees.insert(employee.id, employee.clone());
        graph.works_in.insert(employee.id, department);
        Ok(Some(employee))
    }

    async fn update_employee(
        &self,
        id: EmployeeId,
        update: &EmployeeUpdate,
    ) -> Result<Option<Employee>, GraphError> {
        self.check()?;
        let mut graph = self.graph.write().await;
        let Some(slot) = graph.employees.get_mut(&id) else {
            return Ok(None);
        };
        *slot = update.clone().into_employee(id);
        Ok(Some(slot.clone()))
    }

    async fn employee_departments(&self, id: EmployeeId) -> Result<Vec<Department>, GraphError> {
        self.check()?;
        let graph = self.graph.read().await;
        Ok(graph
            .works_in
            .get(&id)
            .and_then(|dep| graph.departments.get(dep))
            .cloned()
            .into_iter()
            .collect())
    }

    async fn reassign_department(
        &self,
        id: EmployeeId,
        department: &str,
    ) -> Result<Option<Employee>, GraphError> {
        self.check()?;
        let mut graph = self.graph.write().await;
        let Some(employee) = graph.employees.get(&id).cloned() else {
            return Ok(None);
        };
        let Some(target) = graph.department_named(department) else {
            return Ok(None);
        };
        graph.works_in.insert(id, target);
        Ok(Some(employee))
    }

    async fn list_departments(&self) -> Result<Vec<Department>, GraphError> {
        self.check()?;
        Ok(self.graph.read().await.departments.values().cloned().collect())
    }

    async fn departments_by_name(&self, name: &str) -> Result<Vec<Department>, GraphError> {
        self.check()?;
        Ok(self
            .graph
            .read()
            .await
            .departments
            .values()
            .filter(|d| d.name == name)
            .cloned()
            .collect())
    }
}

// ── Request Helpers ──────────────────────────────────────────────

pub async fn send(store: &InMemoryStore, request: Request<Body>) -> (StatusCode, Value) {
    let response = staffgraph_api::app(store.clone())
        .oneshot(request)
        .await
        .unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let body = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
    (status, body)
}

pub async fn get(store: &InMemoryStore, uri: &str) -> (StatusCode, Value) {
    let request = Request::builder().uri(uri).body(Body::empty()).unwrap();
    send(store, request).await
}

pub async fn send_json(
    store: &InMemoryStore,
    method: &str,
    uri: &str,
    body: Value,
) -> (StatusCode, Value) {
    let request = Request::builder()
        .method(method)
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();
    send(store, request).await
}
