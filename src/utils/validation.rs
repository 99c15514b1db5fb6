use crate::utils::error::{EtlError, Result};
use std::collections::HashSet;

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_path(field_name: &str, path: &str) -> Result<()> {
    if path.is_empty() {
        return Err(EtlError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path cannot be empty".to_string(),
        });
    }

    if path.contains('\0') {
        return Err(EtlError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path contains null bytes".to_string(),
        });
    }

    Ok(())
}

pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(EtlError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Value cannot be empty or whitespace-only".to_string(),
        });
    }
    Ok(())
}

/// The identifier field may not double as a boolean or integer field, and a
/// field may not be listed as both boolean and integer.
pub fn validate_field_lists(
    field_name: &str,
    identifier: &str,
    booleans: &[String],
    integers: &[String],
) -> Result<()> {
    let boolean_set: HashSet<&str> = booleans.iter().map(String::as_str).collect();

    for field in integers {
        if boolean_set.contains(field.as_str()) {
            return Err(EtlError::InvalidConfigValueError {
                field: field_name.to_string(),
                value: field.clone(),
                reason: "Field is listed as both boolean and integer".to_string(),
            });
        }
    }

    if boolean_set.contains(identifier) || integers.iter().any(|f| f == identifier) {
        return Err(EtlError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: identifier.to_string(),
            reason: "Identifier field cannot also be a converted field".to_string(),
        });
    }

    Ok(())
}
