//! Department name validation

use super::ValidationError;

/// Maximum length for department names
const MAX_NAME_LEN: usize = 100;

/// Validated department name (non-empty, trimmed)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DepartmentName(String);

impl DepartmentName {
    /// Create a new department name.
    ///
    /// Leading/trailing whitespace is trimmed; the result must be
    /// non-empty and at most 100 characters.
    pub fn new(s: &str) -> Result<Self, ValidationError> {
        let trimmed = s.trim();

        if trimmed.is_empty() {
            return Err(ValidationError::Empty { field: "nombre" });
        }

        if trimmed.len() > MAX_NAME_LEN {
            return Err(ValidationError::TooLong {
                field: "nombre",
                max: MAX_NAME_LEN,
            });
        }

        Ok(Self(trimmed.to_owned()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_plain_names() {
        assert_eq!(DepartmentName::new("Ventas").unwrap().as_str(), "Ventas");
        assert_eq!(DepartmentName::new("  RRHH ").unwrap().as_str(), "RRHH");
    }

    #[test]
    fn rejects_empty() {
        assert!(DepartmentName::new("").is_err());
        assert!(DepartmentName::new("   ").is_err());
    }

    #[test]
    fn rejects_too_long() {
        let long = "a".repeat(MAX_NAME_LEN + 1);
        assert!(DepartmentName::new(&long).is_err());
    }
}
