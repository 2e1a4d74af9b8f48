use axum::{extract::{Path, State}, http::StatusCode, Json};
use tracing::info;

use common::types::Message;
use service::employee::domain::{Employee, EmployeeInput};

use crate::{errors::JsonApiError, routes::ServerState};

#[utoipa::path(
    get, path = "/api/empleados", tag = "empleados",
    responses(
        (status = 200, description = "List OK", body = [crate::openapi::EmployeeDoc]),
        (status = 500, description = "Store failure", body = crate::openapi::ErrorDoc)
    )
)]
pub async fn list_employees(State(state): State<ServerState>) -> Result<Json<Vec<Employee>>, JsonApiError> {
    let list = state.employees.list().await?;
    info!(count = list.len(), "list employees");
    Ok(Json(list))
}

#[utoipa::path(
    post, path = "/api/empleados", tag = "empleados",
    request_body = crate::openapi::EmployeeInputDoc,
    responses(
        (status = 201, description = "Created", body = crate::openapi::EmployeeDoc),
        (status = 409, description = "Email already registered", body = crate::openapi::ErrorDoc),
        (status = 500, description = "Store failure", body = crate::openapi::ErrorDoc)
    )
)]
pub async fn create_employee(
    State(state): State<ServerState>,
    Json(input): Json<EmployeeInput>,
) -> Result<(StatusCode, Json<Employee>), JsonApiError> {
    let created = state.employees.create(input).await?;
    Ok((StatusCode::CREATED, Json(created)))
}

#[utoipa::path(
    get, path = "/api/empleados/{id}", tag = "empleados",
    params(("id" = i64, Path, description = "Employee ID")),
    responses(
        (status = 200, description = "OK", body = crate::openapi::EmployeeDoc),
        (status = 404, description = "Not Found", body = crate::openapi::ErrorDoc)
    )
)]
pub async fn get_employee(
    State(state): State<ServerState>,
    Path(id): Path<i64>,
) -> Result<Json<Employee>, JsonApiError> {
    match state.employees.get(id).await? {
        Some(e) => Ok(Json(e)),
        None => Err(JsonApiError::not_found(format!("employee {id} not found"))),
    }
}

#[utoipa::path(
    put, path = "/api/empleados/{id}", tag = "empleados",
    params(("id" = i64, Path, description = "Employee ID")),
    request_body = crate::openapi::EmployeeInputDoc,
    responses(
        (status = 200, description = "Updated", body = crate::openapi::EmployeeDoc),
        (status = 404, description = "Not Found", body = crate::openapi::ErrorDoc),
        (status = 409, description = "Email belongs to another employee", body = crate::openapi::ErrorDoc)
    )
)]
pub async fn update_employee(
    State(state): State<ServerState>,
    Path(id): Path<i64>,
    Json(patch): Json<EmployeeInput>,
) -> Result<Json<Employee>, JsonApiError> {
    match state.employees.update(id, patch).await? {
        Some(e) => Ok(Json(e)),
        None => Err(JsonApiError::not_found(format!("employee {id} not found"))),
    }
}

#[utoipa::path(
    delete, path = "/api/empleados/{id}", tag = "empleados",
    params(("id" = i64, Path, description = "Employee ID")),
    responses(
        (status = 200, description = "Deleted, or was never stored", body = crate::openapi::MessageDoc)
    )
)]
pub async fn delete_employee(
    State(state): State<ServerState>,
    Path(id): Path<i64>,
) -> Result<Json<Message>, JsonApiError> {
    state.employees.delete(id).await?;
    Ok(Json(Message::new("employee deleted")))
}
