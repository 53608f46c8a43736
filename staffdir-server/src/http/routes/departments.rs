//! Department endpoints

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};
use serde::{Deserialize, Serialize};

use crate::db::repos::{Department, DepartmentRepo};
use crate::http::error::ApiError;
use crate::http::server::AppState;
use crate::models::{DepartmentName, ValidationError};
use super::MessageResponse;

/// Create/update request body
#[derive(Deserialize)]
pub struct DepartmentBody {
    pub nombre: Option<String>,
}

impl DepartmentBody {
    fn into_name(self) -> Result<DepartmentName, ValidationError> {
        let raw = self
            .nombre
            .ok_or(ValidationError::Missing { field: "nombre" })?;
        DepartmentName::new(&raw)
    }
}

/// Department response; wire key for the id is `idDepartamento`
#[derive(Serialize)]
pub struct DepartmentResponse {
    #[serde(rename = "idDepartamento")]
    pub id: i32,
    pub nombre: String,
}

impl From<Department> for DepartmentResponse {
    fn from(d: Department) -> Self {
        Self {
            id: d.id,
            nombre: d.nombre,
        }
    }
}

/// GET /departamentos - list all departments
async fn list_departments(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<DepartmentResponse>>, ApiError> {
    let departments = DepartmentRepo::new(&state.pool).list().await?;
    Ok(Json(
        departments.into_iter().map(DepartmentResponse::from).collect(),
    ))
}

/// GET /departamentos/{id} - get a single department
async fn get_department(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i32>,
) -> Result<Json<DepartmentResponse>, ApiError> {
    let department = DepartmentRepo::new(&state.pool).get(id).await?;
    Ok(Json(DepartmentResponse::from(department)))
}

/// POST /departamentos - create a department
async fn create_department(
    State(state): State<Arc<AppState>>,
    Json(body): Json<DepartmentBody>,
) -> Result<(StatusCode, Json<DepartmentResponse>), ApiError> {
    let name = body.into_name()?;
    let department = DepartmentRepo::new(&state.pool).create(name).await?;

    Ok((StatusCode::CREATED, Json(DepartmentResponse::from(department))))
}

/// PUT /departamentos/{id} - rename a department
async fn update_department(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i32>,
    Json(body): Json<DepartmentBody>,
) -> Result<Json<MessageResponse>, ApiError> {
    let name = body.into_name()?;
    DepartmentRepo::new(&state.pool).update(id, name).await?;

    Ok(Json(MessageResponse {
        message: format!("department {} updated", id),
    }))
}

/// DELETE /departamentos/{id} - delete a department
async fn delete_department(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i32>,
) -> Result<Json<MessageResponse>, ApiError> {
    DepartmentRepo::new(&state.pool).delete(id).await?;

    Ok(Json(MessageResponse {
        message: format!("department {} deleted", id),
    }))
}

/// Department routes
pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/departamentos", get(list_departments).post(create_department))
        .route(
            "/departamentos/{id}",
            get(get_department)
                .put(update_department)
                .delete(delete_department),
        )
}
