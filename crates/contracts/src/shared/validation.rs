use thiserror::Error;

/// Form validation failures for catalog records.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum ValidationError {
    /// A required text field is empty after trimming.
    #[error("field `{0}` is required")]
    Required(&'static str),

    /// A numeric field could not be parsed.
    #[error("field `{field}` is not a valid number: {value:?}")]
    InvalidNumber { field: &'static str, value: String },

    /// A numeric field is below zero.
    #[error("field `{0}` must not be negative")]
    Negative(&'static str),
}

impl ValidationError {
    /// Name of the offending form field
    pub fn field(&self) -> &'static str {
        match self {
            ValidationError::Required(f) | ValidationError::Negative(f) => f,
            ValidationError::InvalidNumber { field, .. } => field,
        }
    }
}

/// Trimmed, non-empty text or `Required`.
pub fn required_text(field: &'static str, value: &str) -> Result<String, ValidationError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(ValidationError::Required(field));
    }
    Ok(trimmed.to_string())
}

/// Empty text maps to `None`, anything else to its trimmed form.
pub fn optional_text(value: &str) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

pub fn parse_decimal(field: &'static str, value: &str) -> Result<f64, ValidationError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(ValidationError::Required(field));
    }
    let parsed = trimmed
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
        .ok_or_else(|| ValidationError::InvalidNumber {
            field,
            value: value.to_string(),
        })?;
    if parsed < 0.0 {
        return Err(ValidationError::Negative(field));
    }
    Ok(parsed)
}

pub fn parse_count(field: &'static str, value: &str) -> Result<i64, ValidationError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(ValidationError::Required(field));
    }
    let parsed = trimmed
        .parse::<i64>()
        .map_err(|_| ValidationError::InvalidNumber {
            field,
            value: value.to_string(),
        })?;
    if parsed < 0 {
        return Err(ValidationError::Negative(field));
    }
    Ok(parsed)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_required_text_trims() {
        assert_eq!(required_text("name", "  Books "), Ok("Books".to_string()));
        assert_eq!(required_text("name", "   "), Err(ValidationError::Required("name")));
    }

    #[test]
    fn test_parse_decimal() {
        assert_eq!(parse_decimal("weight", " 1.25 "), Ok(1.25));
        assert_eq!(
            parse_decimal("weight", "abc"),
            Err(ValidationError::InvalidNumber {
                field: "weight",
                value: "abc".into()
            })
        );
        assert_eq!(parse_decimal("weight", "-3"), Err(ValidationError::Negative("weight")));
        assert!(parse_decimal("weight", "NaN").is_err());
    }

    #[test]
    fn test_parse_count_rejects_fractions() {
        assert_eq!(parse_count("stock", "12"), Ok(12));
        assert!(parse_count("stock", "1.5").is_err());
        assert_eq!(parse_count("stock", "").unwrap_err().field(), "stock");
    }
}
