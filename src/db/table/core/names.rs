use crate::error::{Error, Result};

pub const MAX_NAME_LENGTH: usize = 200;

/// Table and database names end up as partition and file names.
pub fn validate_object_name(name: &str) -> Result<()> {
    let valid = !name.is_empty()
        && name.len() <= MAX_NAME_LENGTH
        && name
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-');
    if !valid {
        return Err(Error::InvalidName(name.to_string()));
    }
    Ok(())
}

/// Column names are embedded in `<id>:<column>` keys and the newline separated
/// column order record.
pub fn validate_column_name(name: &str) -> Result<()> {
    if name.is_empty() || name.contains(':') || name.chars().any(|c| c.is_control()) {
        return Err(Error::InvalidName(name.to_string()));
    }
    Ok(())
}
