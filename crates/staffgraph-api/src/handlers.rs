//! One handler per resource and action.
//!
//! Reads return arrays and treat "nothing matched" as an empty array.
//! Writes validate their body, run at most one read and one write, and
//! report failures through [`ApiError`].

use axum::{
    extract::{rejection::JsonRejection, Path, Query, State},
    http::StatusCode,
    Json,
};
use serde::Deserialize;
use serde_json::{json, Value};

use staffgraph_core::{Department, Employee, EmployeeId};
use staffgraph_graph::{EmployeeFilter, StaffStore};

use crate::error::ApiError;
use crate::payload::{
    json_body, CreateEmployeePayload, ReassignDepartmentPayload, UpdateEmployeePayload,
};

/// Optional filter for `GET /departments`.
#[derive(Debug, Default, Deserialize)]
pub struct DepartmentQuery {
    pub name: Option<String>,
}

// ── Employees ────────────────────────────────────────────────────

pub async fn list_employees<S>(State(store): State<S>) -> Result<Json<Vec<Employee>>, ApiError>
where
    S: StaffStore + Clone + Send + Sync + 'static,
{
    Ok(Json(store.list_employees().await?))
}

pub async fn employees_by_name<S>(
    State(store): State<S>,
    Path(name): Path<String>,
) -> Result<Json<Vec<Employee>>, ApiError>
where
    S: StaffStore + Clone + Send + Sync + 'static,
{
    filtered_employees(&store, EmployeeFilter::Name, &name).await
}

pub async fn employees_by_surname<S>(
    State(store): State<S>,
    Path(surname): Path<String>,
) -> Result<Json<Vec<Employee>>, ApiError>
where
    S: StaffStore + Clone + Send + Sync + 'static,
{
    filtered_employees(&store, EmployeeFilter::Surname, &surname).await
}

pub async fn employees_by_position<S>(
    State(store): State<S>,
    Path(position): Path<String>,
) -> Result<Json<Vec<Employee>>, ApiError>
where
    S: StaffStore + Clone + Send + Sync + 'static,
{
    filtered_employees(&store, EmployeeFilter::Position, &position).await
}

async fn filtered_employees<S>(
    store: &S,
    filter: EmployeeFilter,
    value: &str,
) -> Result<Json<Vec<Employee>>, ApiError>
where
    S: StaffStore + Clone + Send + Sync + 'static,
{
    Ok(Json(store.employees_by_property(filter, value).await?))
}

/// Zero or one employee, as an array.
pub async fn employee_by_id<S>(
    State(store): State<S>,
    Path(id): Path<EmployeeId>,
) -> Result<Json<Vec<Employee>>, ApiError>
where
    S: StaffStore + Clone + Send + Sync + 'static,
{
    let found = store.employee_by_id(id).await?;
    Ok(Json(found.into_iter().collect()))
}

pub async fn create_employee<S>(
    State(store): State<S>,
    payload: Result<Json<CreateEmployeePayload>, JsonRejection>,
) -> Result<(StatusCode, Json<Employee>), ApiError>
where
    S: StaffStore + Clone + Send + Sync + 'static,
{
    let new = json_body(payload)?.validate()?;

    if store.employee_exists_by_name(&new.name, &new.surname).await? {
        return Err(ApiError::name_in_use());
    }

    let Some(employee) = store.create_employee(&new).await? else {
        return Err(ApiError::department_not_found());
    };

    tracing::info!(id = %employee.id, department = %new.department, "Created employee");
    Ok((StatusCode::CREATED, Json(employee)))
}

pub async fn update_employee<S>(
    State(store): State<S>,
    Path(id): Path<EmployeeId>,
    payload: Result<Json<UpdateEmployeePayload>, JsonRejection>,
) -> Result<Json<Employee>, ApiError>
where
    S: StaffStore + Clone + Send + Sync + 'static,
{
    let update = json_body(payload)?.validate()?;

    if store.employee_by_id(id).await?.is_none() {
        return Err(ApiError::employee_not_found());
    }

    // The employee can disappear between the check and the write.
    let Some(employee) = store.update_employee(id, &update).await? else {
        return Err(ApiError::employee_not_found());
    };

    tracing::info!(id = %employee.id, "Updated employee");
    Ok(Json(employee))
}

// ── Employee Department ──────────────────────────────────────────

pub async fn employee_department<S>(
    State(store): State<S>,
    Path(id): Path<EmployeeId>,
) -> Result<Json<Vec<Department>>, ApiError>
where
    S: StaffStore + Clone + Send + Sync + 'static,
{
    Ok(Json(store.employee_departments(id).await?))
}

pub async fn reassign_department<S>(
    State(store): State<S>,
    Path(id): Path<EmployeeId>,
    payload: Result<Json<ReassignDepartmentPayload>, JsonRejection>,
) -> Result<(StatusCode, Json<Employee>), ApiError>
where
    S: StaffStore + Clone + Send + Sync + 'static,
{
    let department = json_body(payload)?.validate()?;

    if store.employee_by_id(id).await?.is_none() {
        return Err(ApiError::employee_not_found());
    }

    let Some(employee) = store.reassign_department(id, &department).await? else {
        return Err(ApiError::department_not_found());
    };

    tracing::info!(id = %employee.id, %department, "Reassigned employee department");
    Ok((StatusCode::CREATED, Json(employee)))
}

// ── Departments ──────────────────────────────────────────────────

pub async fn list_departments<S>(
    State(store): State<S>,
    Query(query): Query<DepartmentQuery>,
) -> Result<Json<Vec<Department>>, ApiError>
where
    S: StaffStore + Clone + Send + Sync + 'static,
{
    let departments = match query.name.as_deref() {
        Some(name) if !name.is_empty() => store.departments_by_name(name).await?,
        _ => store.list_departments().await?,
    };
    Ok(Json(departments))
}

pub async fn departments_by_name<S>(
    State(store): State<S>,
    Path(name): Path<String>,
) -> Result<Json<Vec<Department>>, ApiError>
where
    S: StaffStore + Clone + Send + Sync + 'static,
{
    Ok(Json(store.departments_by_name(&name).await?))
}

// ── Health ───────────────────────────────────────────────────────

/// Liveness probe. Does not touch the store.
pub async fn health() -> Json<Value> {
    Json(json!({ "status": "ok" }))
}
