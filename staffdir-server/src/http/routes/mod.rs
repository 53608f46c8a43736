//! Route handlers organized by resource

use std::collections::HashMap;

use axum::extract::Multipart;
use serde::Serialize;

use super::error::ApiError;

pub mod departments;
pub mod employees;
pub mod health;
pub mod login;
pub mod static_files;
pub mod supervisors;

/// Plain acknowledgement body used by update and delete endpoints
#[derive(Serialize)]
pub struct MessageResponse {
    pub message: String,
}

/// A multipart form broken into its text fields and the optional
/// `foto` file part.
pub(crate) struct PhotoForm {
    pub fields: HashMap<String, String>,
    /// Original filename and raw bytes of the uploaded photo
    pub photo: Option<(String, Vec<u8>)>,
}

/// Drain a multipart request into text fields plus the `foto` file.
///
/// A `foto` part without a filename is treated as absent, the way browsers
/// submit an empty file input.
pub(crate) async fn collect_photo_form(mut multipart: Multipart) -> Result<PhotoForm, ApiError> {
    let mut fields = HashMap::new();
    let mut photo = None;

    while let Some(field) = multipart.next_field().await? {
        let name = field.name().unwrap_or_default().to_owned();

        if name == "foto" {
            let file_name = field.file_name().map(|s| s.to_owned());
            match file_name {
                Some(file_name) if !file_name.is_empty() => {
                    let bytes = field.bytes().await?.to_vec();
                    photo = Some((file_name, bytes));
                }
                _ => {}
            }
        } else {
            fields.insert(name, field.text().await?);
        }
    }

    Ok(PhotoForm { fields, photo })
}
