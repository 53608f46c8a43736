//! Supervisor endpoints
//!
//! Same CRUD shape as departments, except create is multipart form data
//! with a REQUIRED `foto` file. Update is partial JSON carrying the photo
//! as a stored-path string; there is no re-upload on update.

use std::sync::Arc;

use axum::{
    extract::{Multipart, Path, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};
use serde::Serialize;

use crate::db::repos::{Supervisor, SupervisorRepo};
use crate::http::error::ApiError;
use crate::http::server::AppState;
use crate::models::{NewSupervisor, SupervisorPatch, ValidationError};
use super::{collect_photo_form, MessageResponse};

/// Supervisor response; wire key for the id is `idSupervisor`
#[derive(Serialize)]
pub struct SupervisorResponse {
    #[serde(rename = "idSupervisor")]
    pub id: i32,
    pub nombre: String,
    pub apellidos: String,
    pub estado: String,
    pub foto: String,
}

impl From<Supervisor> for SupervisorResponse {
    fn from(s: Supervisor) -> Self {
        Self {
            id: s.id,
            nombre: s.nombre,
            apellidos: s.apellidos,
            estado: s.estado,
            foto: s.foto,
        }
    }
}

/// GET /supervisores - list all supervisors
async fn list_supervisors(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<SupervisorResponse>>, ApiError> {
    let supervisors = SupervisorRepo::new(&state.pool).list().await?;
    Ok(Json(
        supervisors.into_iter().map(SupervisorResponse::from).collect(),
    ))
}

/// GET /supervisores/{id} - get a single supervisor
async fn get_supervisor(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i32>,
) -> Result<Json<SupervisorResponse>, ApiError> {
    let supervisor = SupervisorRepo::new(&state.pool).get(id).await?;
    Ok(Json(SupervisorResponse::from(supervisor)))
}

/// POST /supervisores - create a supervisor from multipart form data
///
/// Absent photo or a disallowed extension both reject the request before
/// anything touches the database.
async fn create_supervisor(
    State(state): State<Arc<AppState>>,
    multipart: Multipart,
) -> Result<(StatusCode, Json<SupervisorResponse>), ApiError> {
    let form = collect_photo_form(multipart).await?;

    let (name, bytes) = form
        .photo
        .ok_or(ApiError::Validation(ValidationError::Missing {
            field: "foto",
        }))?;
    let foto = state.uploads.save(&name, &bytes).await?;

    let new = NewSupervisor::from_form(form.fields, Some(foto))?;
    let supervisor = SupervisorRepo::new(&state.pool).create(new).await?;

    Ok((StatusCode::CREATED, Json(SupervisorResponse::from(supervisor))))
}

/// PUT /supervisores/{id} - partial update
async fn update_supervisor(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i32>,
    Json(patch): Json<SupervisorPatch>,
) -> Result<Json<MessageResponse>, ApiError> {
    SupervisorRepo::new(&state.pool).update(id, patch).await?;

    Ok(Json(MessageResponse {
        message: format!("supervisor {} updated", id),
    }))
}

/// DELETE /supervisores/{id} - delete a supervisor
async fn delete_supervisor(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i32>,
) -> Result<Json<MessageResponse>, ApiError> {
    SupervisorRepo::new(&state.pool).delete(id).await?;

    Ok(Json(MessageResponse {
        message: format!("supervisor {} deleted", id),
    }))
}

/// Supervisor routes
pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/supervisores", get(list_supervisors).post(create_supervisor))
        .route(
            "/supervisores/{id}",
            get(get_supervisor)
                .put(update_supervisor)
                .delete(delete_supervisor),
        )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn response_uses_original_wire_keys() {
        let resp = SupervisorResponse {
            id: 2,
            nombre: "Luis".into(),
            apellidos: "Mora Paz".into(),
            estado: "activo".into(),
            foto: "uploads/luis.png".into(),
        };

        let json = serde_json::to_value(&resp).unwrap();
        assert_eq!(json["idSupervisor"], 2);
        assert_eq!(json["apellidos"], "Mora Paz");
        assert_eq!(json["foto"], "uploads/luis.png");
    }
}
