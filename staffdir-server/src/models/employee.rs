//! Employee payloads
//!
//! Create arrives as multipart form data (text fields collected into a map
//! by the route, photo saved separately); update is partial JSON.

use std::collections::HashMap;

use chrono::NaiveDate;
use serde::Deserialize;

use super::ValidationError;

/// Validated employee create payload.
///
/// All text fields are required in the form. The department and supervisor
/// references must be present but may be empty, which maps to NULL - they
/// are logical foreign keys and nothing checks the referenced rows exist.
#[derive(Debug, Clone)]
pub struct NewEmployee {
    pub nombre: String,
    pub apellido: String,
    pub fecha_nac: NaiveDate,
    pub ciudad: String,
    pub direccion: String,
    pub telefono: String,
    pub id_departamento: Option<i32>,
    pub id_supervisor: Option<i32>,
    pub salario: f64,
    pub foto: Option<String>,
}

impl NewEmployee {
    /// Build from collected form fields plus the stored photo path, if any.
    pub fn from_form(
        mut fields: HashMap<String, String>,
        foto: Option<String>,
    ) -> Result<Self, ValidationError> {
        let fecha_nac = parse_date("fecha_nac", &require(&mut fields, "fecha_nac")?)?;
        let salario = parse_salary(&require(&mut fields, "salario")?)?;
        let id_departamento = parse_reference(&mut fields, "idDepartamento")?;
        let id_supervisor = parse_reference(&mut fields, "idSupervisor")?;

        Ok(Self {
            nombre: require(&mut fields, "nombre")?,
            apellido: require(&mut fields, "apellido")?,
            fecha_nac,
            ciudad: require(&mut fields, "ciudad")?,
            direccion: require(&mut fields, "direccion")?,
            telefono: require(&mut fields, "telefono")?,
            id_departamento,
            id_supervisor,
            salario,
            foto,
        })
    }
}

/// Partial employee update. Omitted fields keep their stored values,
/// the photo included.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct EmployeePatch {
    pub nombre: Option<String>,
    pub apellido: Option<String>,
    pub fecha_nac: Option<NaiveDate>,
    pub ciudad: Option<String>,
    pub direccion: Option<String>,
    pub telefono: Option<String>,
    #[serde(rename = "idDepartamento")]
    pub id_departamento: Option<i32>,
    #[serde(rename = "idSupervisor")]
    pub id_supervisor: Option<i32>,
    pub salario: Option<f64>,
    pub foto: Option<String>,
}

/// Pull a required, non-empty text field out of the form map.
pub(crate) fn require(
    fields: &mut HashMap<String, String>,
    name: &'static str,
) -> Result<String, ValidationError> {
    match fields.remove(name) {
        None => Err(ValidationError::Missing { field: name }),
        Some(v) if v.trim().is_empty() => Err(ValidationError::Empty { field: name }),
        Some(v) => Ok(v),
    }
}

fn parse_date(field: &'static str, value: &str) -> Result<NaiveDate, ValidationError> {
    NaiveDate::parse_from_str(value.trim(), "%Y-%m-%d").map_err(|_| {
        ValidationError::InvalidFormat {
            field,
            reason: "expected YYYY-MM-DD",
        }
    })
}

fn parse_salary(value: &str) -> Result<f64, ValidationError> {
    value.trim().parse().map_err(|_| ValidationError::InvalidFormat {
        field: "salario",
        reason: "expected a number",
    })
}

/// A reference field must be present in the form; an empty value means NULL.
fn parse_reference(
    fields: &mut HashMap<String, String>,
    name: &'static str,
) -> Result<Option<i32>, ValidationError> {
    let value = fields
        .remove(name)
        .ok_or(ValidationError::Missing { field: name })?;

    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Ok(None);
    }

    trimmed
        .parse()
        .map(Some)
        .map_err(|_| ValidationError::InvalidFormat {
            field: name,
            reason: "expected an integer id",
        })
}
