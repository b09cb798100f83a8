//! The route table.

use axum::{body::Body, http::Request, routing::get, Router};
use tower_http::trace::TraceLayer;
use uuid::Uuid;

use staffgraph_graph::StaffStore;

use crate::handlers;

/// Map every URL pattern and method to its handler.
pub fn routes<S>() -> Router<S>
where
    S: StaffStore + Clone + Send + Sync + 'static,
{
    let department =
        get(handlers::employee_department::<S>).put(handlers::reassign_department::<S>);

    Router::new()
        .route(
            "/employees",
            get(handlers::list_employees::<S>).post(handlers::create_employee::<S>),
        )
        .route(
            "/employees/by_name/{name}",
            get(handlers::employees_by_name::<S>),
        )
        .route(
            "/employees/by_surname/{surname}",
            get(handlers::employees_by_surname::<S>),
        )
        .route(
            "/employees/by_position/{position}",
            get(handlers::employees_by_position::<S>),
        )
        .route(
            "/employees/{id}",
            get(handlers::employee_by_id::<S>).put(handlers::update_employee::<S>),
        )
        .route("/employees/{id}/department/", department.clone())
        .route("/employees/{id}/department", department)
        .route("/departments", get(handlers::list_departments::<S>))
        .route(
            "/departments/by_name/{name}",
            get(handlers::departments_by_name::<S>),
        )
        .route("/health", get(handlers::health))
}

/// The complete application: routes bound to `store`, with request tracing.
pub fn app<S>(store: S) -> Router
where
    S: StaffStore + Clone + Send + Sync + 'static,
{
    routes::<S>().with_state(store).layer(
        TraceLayer::new_for_http().make_span_with(|request: &Request<Body>| {
            tracing::info_span!(
                "http_request",
                method = %request.method(),
                path = %request.uri().path(),
                request_id = %Uuid::new_v4(),
            )
        }),
    )
}
