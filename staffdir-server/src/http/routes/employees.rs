//! Employee endpoints
//!
//! Create is multipart form data with an optional `foto` file; update is
//! partial JSON where omitted fields - the photo included - keep their
//! stored values.

use std::sync::Arc;

use axum::{
    extract::{Multipart, Path, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};
use chrono::NaiveDate;
use serde::Serialize;

use crate::db::repos::{Employee, EmployeeRepo};
use crate::http::error::ApiError;
use crate::http::server::AppState;
use crate::models::{EmployeePatch, NewEmployee};
use super::{collect_photo_form, MessageResponse};

/// Employee response with resolved reference names; wire keys match the
/// original API
#[derive(Serialize)]
pub struct EmployeeResponse {
    #[serde(rename = "idEmpleados")]
    pub id: i32,
    pub nombre: String,
    pub apellido: String,
    pub fecha_nac: NaiveDate,
    pub ciudad: String,
    pub direccion: String,
    pub telefono: String,
    pub departamento: Option<String>,
    pub supervisor: Option<String>,
    pub salario: f64,
    pub foto: Option<String>,
}

impl From<Employee> for EmployeeResponse {
    fn from(e: Employee) -> Self {
        Self {
            id: e.id,
            nombre: e.nombre,
            apellido: e.apellido,
            fecha_nac: e.fecha_nac,
            ciudad: e.ciudad,
            direccion: e.direccion,
            telefono: e.telefono,
            departamento: e.departamento,
            supervisor: e.supervisor,
            salario: e.salario,
            foto: e.foto,
        }
    }
}

/// GET /empleados - list all employees
async fn list_employees(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<EmployeeResponse>>, ApiError> {
    let employees = EmployeeRepo::new(&state.pool).list().await?;
    Ok(Json(
        employees.into_iter().map(EmployeeResponse::from).collect(),
    ))
}

/// GET /empleados/{id} - get a single employee
async fn get_employee(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i32>,
) -> Result<Json<EmployeeResponse>, ApiError> {
    let employee = EmployeeRepo::new(&state.pool).get(id).await?;
    Ok(Json(EmployeeResponse::from(employee)))
}

/// POST /empleados - create an employee from multipart form data
///
/// The photo is optional; when present it is validated and stored first,
/// and its public path lands in the row. No existence check is made on the
/// department/supervisor references.
async fn create_employee(
    State(state): State<Arc<AppState>>,
    multipart: Multipart,
) -> Result<(StatusCode, Json<EmployeeResponse>), ApiError> {
    let form = collect_photo_form(multipart).await?;

    let foto = match form.photo {
        Some((name, bytes)) => Some(state.uploads.save(&name, &bytes).await?),
        None => None,
    };

    let new = NewEmployee::from_form(form.fields, foto)?;
    let employee = EmployeeRepo::new(&state.pool).create(new).await?;

    Ok((StatusCode::CREATED, Json(EmployeeResponse::from(employee))))
}

/// PUT /empleados/{id} - partial update
async fn update_employee(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i32>,
    Json(patch): Json<EmployeePatch>,
) -> Result<Json<MessageResponse>, ApiError> {
    EmployeeRepo::new(&state.pool).update(id, patch).await?;

    Ok(Json(MessageResponse {
        message: format!("employee {} updated", id),
    }))
}

/// DELETE /empleados/{id} - delete an employee
async fn delete_employee(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i32>,
) -> Result<Json<MessageResponse>, ApiError> {
    EmployeeRepo::new(&state.pool).delete(id).await?;

    Ok(Json(MessageResponse {
        message: format!("employee {} deleted", id),
    }))
}

/// Employee routes
pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/empleados", get(list_employees).post(create_employee))
        .route(
            "/empleados/{id}",
            get(get_employee).put(update_employee).delete(delete_employee),
        )
}
