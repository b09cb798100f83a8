//! Request bodies and their presence checks.
//!
//! Fields are read as raw JSON so that presence can be checked before
//! types. All fields are checked for presence in declared order and the
//! first missing one is reported; only then is each field type-checked,
//! again in declared order. A field is missing when it is absent or null;
//! strings are also missing when empty. An age of `0` is present, and any
//! JSON number with no fractional part is a valid age.

use axum::extract::rejection::JsonRejection;
use axum::Json;
use serde::Deserialize;
use serde_json::Value;

use staffgraph_core::{EmployeeUpdate, NewEmployee};

use crate::error::ApiError;

/// Body of `POST /employees`.
#[derive(Debug, Default, Deserialize)]
pub struct CreateEmployeePayload {
    pub name: Option<Value>,
    pub surname: Option<Value>,
    pub age: Option<Value>,
    pub position: Option<Value>,
    pub department: Option<Value>,
}

/// Body of `PUT /employees/{id}`.
#[derive(Debug, Default, Deserialize)]
pub struct UpdateEmployeePayload {
    pub name: Option<Value>,
    pub surname: Option<Value>,
    pub age: Option<Value>,
    pub position: Option<Value>,
}

/// Body of `PUT /employees/{id}/department/`.
#[derive(Debug, Default, Deserialize)]
pub struct ReassignDepartmentPayload {
    pub department: Option<Value>,
}

impl CreateEmployeePayload {
    pub fn validate(self) -> Result<NewEmployee, ApiError> {
        let name = present("name", self.name)?;
        let surname = present("surname", self.surname)?;
        let age = present("age", self.age)?;
        let position = present("position", self.position)?;
        let department = present("department", self.department)?;

        Ok(NewEmployee {
            name: string_field("name", name)?,
            surname: string_field("surname", surname)?,
            age: age_field(age)?,
            position: string_field("position", position)?,
            department: string_field("department", department)?,
        })
    }
}

impl UpdateEmployeePayload {
    pub fn validate(self) -> Result<EmployeeUpdate, ApiError> {
        let name = present("name", self.name)?;
        let surname = present("surname", self.surname)?;
        let age = present("age", self.age)?;
        let position = present("position", self.position)?;

        Ok(EmployeeUpdate {
            name: string_field("name", name)?,
            surname: string_field("surname", surname)?,
            age: age_field(age)?,
            position: string_field("position", position)?,
        })
    }
}

impl ReassignDepartmentPayload {
    /// Returns the target department name.
    pub fn validate(self) -> Result<String, ApiError> {
        let department = present("department", self.department)?;
        string_field("department", department)
    }
}

/// Unwrap an extracted JSON body, turning a rejection into a 400.
pub fn json_body<T>(payload: Result<Json<T>, JsonRejection>) -> Result<T, ApiError> {
    match payload {
        Ok(Json(body)) => Ok(body),
        Err(rejection) => Err(ApiError::invalid_body(&rejection.body_text())),
    }
}

fn present(field: &str, value: Option<Value>) -> Result<Value, ApiError> {
    match value {
        None | Some(Value::Null) => Err(ApiError::missing_field(field)),
        Some(Value::String(s)) if s.is_empty() => Err(ApiError::missing_field(field)),
        Some(v) => Ok(v),
    }
}

fn string_field(field: &str, value: Value) -> Result<String, ApiError> {
    match value {
        Value::String(s) => Ok(s),
        _ => Err(ApiError::invalid_field(field, "must be a string")),
    }
}

fn age_field(value: Value) -> Result<i64, ApiError> {
    let Value::Number(n) = value else {
        return Err(ApiError::invalid_field("age", "must be a number"));
    };
    if let Some(age) = n.as_i64() {
        return Ok(age);
    }
    n.as_f64()
        .filter(|f| f.fract() == 0.0 && (i64::MIN as f64..i64::MAX as f64).contains(f))
        .map(|f| f as i64)
        .ok_or_else(|| ApiError::invalid_field("age", "must be a whole number"))
}
