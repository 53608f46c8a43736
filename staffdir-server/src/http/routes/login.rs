//! Login endpoint
//!
//! One-shot credential check: no session, no token, every call stands
//! alone. The comparison is exact-match against the plaintext password
//! column - preserved behavior, known deficiency (see DESIGN.md).

use std::sync::Arc;

use axum::{extract::State, routing::post, Json, Router};
use serde::{Deserialize, Serialize};

use crate::db::repos::LoginRepo;
use crate::http::error::ApiError;
use crate::http::server::AppState;
use crate::models::ValidationError;

/// Login request; wire keys are `user` and `pass`
#[derive(Deserialize)]
pub struct LoginRequest {
    #[serde(rename = "user")]
    pub username: Option<String>,
    #[serde(rename = "pass")]
    pub password: Option<String>,
}

impl LoginRequest {
    /// Both fields must be present and non-empty.
    fn into_credentials(self) -> Result<(String, String), ValidationError> {
        let username = match self.username {
            None => return Err(ValidationError::Missing { field: "user" }),
            Some(u) if u.trim().is_empty() => {
                return Err(ValidationError::Empty { field: "user" })
            }
            Some(u) => u,
        };

        let password = match self.password {
            None => return Err(ValidationError::Missing { field: "pass" }),
            Some(p) if p.is_empty() => return Err(ValidationError::Empty { field: "pass" }),
            Some(p) => p,
        };

        Ok((username, password))
    }
}

/// Successful login response
#[derive(Serialize)]
pub struct LoginResponse {
    pub message: &'static str,
    pub idlogin: i32,
}

/// POST /login
async fn login(
    State(state): State<Arc<AppState>>,
    Json(req): Json<LoginRequest>,
) -> Result<Json<LoginResponse>, ApiError> {
    let (username, password) = req.into_credentials()?;

    let record = LoginRepo::new(&state.pool)
        .find_by_username(&username)
        .await?
        .ok_or(ApiError::NotFound {
            resource: "user",
            id: username,
        })?;

    if record.password != password {
        return Err(ApiError::Unauthorized {
            message: "incorrect password",
        });
    }

    Ok(Json(LoginResponse {
        message: "login successful",
        idlogin: record.idlogin,
    }))
}

/// Login routes
pub fn router() -> Router<Arc<AppState>> {
    Router::new().route("/login", post(login))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wire_keys_are_user_and_pass() {
        let req: LoginRequest =
            serde_json::from_str(r#"{"user": "pepe", "pass": "secreto"}"#).unwrap();
        let (user, pass) = req.into_credentials().unwrap();
        assert_eq!(user, "pepe");
        assert_eq!(pass, "secreto");
    }

    #[test]
    fn missing_user_is_rejected() {
        let req: LoginRequest = serde_json::from_str(r#"{"pass": "secreto"}"#).unwrap();
        assert!(req.into_credentials().is_err());
    }

    #[test]
    fn empty_pass_is_rejected() {
        let req: LoginRequest = serde_json::from_str(r#"{"user": "pepe", "pass": ""}"#).unwrap();
        assert!(req.into_credentials().is_err());
    }
}
