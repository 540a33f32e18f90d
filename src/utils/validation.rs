use crate::utils::error::{Result, SelectorError};

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(SelectorError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Value cannot be empty or whitespace-only".to_string(),
        });
    }
    Ok(())
}

pub fn validate_no_null_bytes(field_name: &str, value: &str) -> Result<()> {
    if value.contains('\0') {
        return Err(SelectorError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Value contains null bytes".to_string(),
        });
    }
    Ok(())
}

/// Checks a program name the way it will be handed to the OS.
pub fn validate_program(field_name: &str, program: &str) -> Result<()> {
    validate_non_empty_string(field_name, program)?;
    validate_no_null_bytes(field_name, program)
}

pub fn validate_args(field_name: &str, args: &[String]) -> Result<()> {
    for (i, arg) in args.iter().enumerate() {
        validate_no_null_bytes(&format!("{}[{}]", field_name, i), arg)?;
    }
    Ok(())
}
