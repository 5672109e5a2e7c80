//! Required-field checks applied to form drafts before any request is sent.
//!
//! Only what the form itself can know is checked here; uniqueness and
//! cross-field rules belong to the backend.

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FormError {
    #[error("El campo «{0}» es obligatorio")]
    Required(&'static str),
    #[error("El campo «{0}» debe ser un número")]
    NotANumber(&'static str),
    #[error("El campo «{field}» debe estar entre {min} y {max}")]
    OutOfRange {
        field: &'static str,
        min: i32,
        max: i32,
    },
}

/// Non-blank value, returned trimmed
pub fn require(field: &'static str, value: &str) -> Result<String, FormError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(FormError::Required(field));
    }
    Ok(trimmed.to_string())
}

/// Integer within `min..=max`
pub fn integer_in_range(field: &'static str, raw: &str, min: i32, max: i32) -> Result<i32, FormError> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Err(FormError::Required(field));
    }
    let value: i32 = raw.parse().map_err(|_| FormError::NotANumber(field))?;
    if value < min || value > max {
        return Err(FormError::OutOfRange { field, min, max });
    }
    Ok(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_require() {
        assert_eq!(require("Nombre", "  Drama "), Ok("Drama".to_string()));
        assert_eq!(require("Nombre", "   "), Err(FormError::Required("Nombre")));
        assert_eq!(require("Nombre", ""), Err(FormError::Required("Nombre")));
    }

    #[test]
    fn test_integer_in_range() {
        assert_eq!(integer_in_range("Año", "1999", 1900, 2030), Ok(1999));
        assert_eq!(integer_in_range("Año", " 1900 ", 1900, 2030), Ok(1900));
        assert_eq!(integer_in_range("Año", "", 1900, 2030), Err(FormError::Required("Año")));
        assert_eq!(
            integer_in_range("Año", "mil", 1900, 2030),
            Err(FormError::NotANumber("Año"))
        );
        assert_eq!(
            integer_in_range("Año", "1899", 1900, 2030),
            Err(FormError::OutOfRange {
                field: "Año",
                min: 1900,
                max: 2030
            })
        );
    }

    #[test]
    fn test_messages() {
        assert_eq!(
            FormError::OutOfRange { field: "Año", min: 1900, max: 2031 }.to_string(),
            "El campo «Año» debe estar entre 1900 y 2031"
        );
    }
}
