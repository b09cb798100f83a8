use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::{Map, Value};

use staffgraph_graph::GraphError;

/// Every failure a handler can report. Each kind has exactly one status.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Validation,
    NotFound,
    Conflict,
    Store,
}

impl ErrorKind {
    pub fn status(self) -> StatusCode {
        match self {
            Self::Validation => StatusCode::BAD_REQUEST,
            Self::NotFound => StatusCode::NOT_FOUND,
            Self::Conflict => StatusCode::CONFLICT,
            Self::Store => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

/// A handler failure: its kind plus the per-field JSON body sent back.
#[derive(Debug)]
pub struct ApiError {
    pub kind: ErrorKind,
    pub body: Map<String, Value>,
    source: Option<GraphError>,
}

impl ApiError {
    fn new(kind: ErrorKind, fields: &[(&str, &str)]) -> Self {
        let body = fields
            .iter()
            .map(|(k, v)| ((*k).to_string(), Value::String((*v).to_string())))
            .collect();
        Self {
            kind,
            body,
            source: None,
        }
    }

    /// A required field was absent, null, or empty.
    pub fn missing_field(field: &str) -> Self {
        Self::new(ErrorKind::Validation, &[(field, "This field is required")])
    }

    /// A present field held a value of the wrong JSON type.
    pub fn invalid_field(field: &str, reason: &str) -> Self {
        Self::new(ErrorKind::Validation, &[(field, reason)])
    }

    /// The request body could not be read as the expected JSON shape.
    pub fn invalid_body(reason: &str) -> Self {
        Self::new(ErrorKind::Validation, &[("body", reason)])
    }

    pub fn employee_not_found() -> Self {
        Self::new(ErrorKind::NotFound, &[("id", "id not found")])
    }

    pub fn department_not_found() -> Self {
        Self::new(ErrorKind::NotFound, &[("department", "department not found")])
    }

    /// Another employee already has this (name, surname) pair.
    pub fn name_in_use() -> Self {
        Self::new(
            ErrorKind::Conflict,
            &[
                ("name", "name already in use"),
                ("surname", "surname already in use"),
            ],
        )
    }

    pub fn store(source: GraphError) -> Self {
        let mut err = Self::new(ErrorKind::Store, &[("error", "internal server error")]);
        err.source = Some(source);
        err
    }
}

impl From<GraphError> for ApiError {
    fn from(value: GraphError) -> Self {
        Self::store(value)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match &self.source {
            Some(source) => tracing::error!(error = %source, "graph store request failed"),
            None => tracing::debug!(kind = ?self.kind, body = ?self.body, "request rejected"),
        }
        (self.kind.status(), Json(Value::Object(self.body))).into_response()
    }
}
