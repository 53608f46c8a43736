//! Supervisor payloads

use std::collections::HashMap;

use serde::Deserialize;

use super::employee::require;
use super::ValidationError;

/// Validated supervisor create payload. The photo is mandatory here,
/// unlike employees.
#[derive(Debug, Clone)]
pub struct NewSupervisor {
    pub nombre: String,
    pub apellidos: String,
    pub estado: String,
    pub foto: String,
}

impl NewSupervisor {
    /// Build from collected form fields plus the stored photo path.
    pub fn from_form(
        mut fields: HashMap<String, String>,
        foto: Option<String>,
    ) -> Result<Self, ValidationError> {
        Ok(Self {
            nombre: require(&mut fields, "nombre")?,
            apellidos: require(&mut fields, "apellidos")?,
            estado: require(&mut fields, "estado")?,
            foto: foto.ok_or(ValidationError::Missing { field: "foto" })?,
        })
    }
}

/// Partial supervisor update; the photo travels as a stored-path string.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SupervisorPatch {
    pub nombre: Option<String>,
    pub apellidos: Option<String>,
    pub estado: Option<String>,
    pub foto: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn form() -> HashMap<String, String> {
        [("nombre", "Luis"), ("apellidos", "Mora Paz"), ("estado", "activo")]
            .into_iter()
            .map(|(k, v)| (k.to_owned(), v.to_owned()))
            .collect()
    }

    #[test]
    fn builds_with_photo() {
        let sup = NewSupervisor::from_form(form(), Some("uploads/luis.png".into())).unwrap();
        assert_eq!(sup.apellidos, "Mora Paz");
        assert_eq!(sup.foto, "uploads/luis.png");
    }

    #[test]
    fn photo_is_mandatory() {
        let err = NewSupervisor::from_form(form(), None).unwrap_err();
        assert_eq!(err.to_string(), "foto is required");
    }

    #[test]
    fn missing_text_field_is_rejected() {
        let mut f = form();
        f.remove("estado");
        assert!(NewSupervisor::from_form(f, Some("uploads/x.jpg".into())).is_err());
    }
}
