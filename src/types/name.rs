// ABOUTME: Validated application and stage names.
// ABOUTME: Both end up in remote paths and the stack name, so the character set is restricted.

use super::ArgumentError;
use std::fmt;
use std::str::FromStr;

/// Docker caps stack and service names at 63 characters.
const MAX_NAME_LEN: usize = 63;

fn validate(field: &'static str, value: &str) -> Result<(), ArgumentError> {
    if value.is_empty() {
        return Err(ArgumentError::Empty { field });
    }

    if value.len() > MAX_NAME_LEN {
        return Err(ArgumentError::TooLong {
            field,
            max: MAX_NAME_LEN,
        });
    }

    if let Some(ch) = value.chars().next()
        && (ch == '-' || ch == '.')
    {
        return Err(ArgumentError::InvalidStart { field, ch });
    }

    for ch in value.chars() {
        if !ch.is_ascii_alphanumeric() && ch != '-' && ch != '_' && ch != '.' {
            return Err(ArgumentError::InvalidChar { field, ch });
        }
    }

    Ok(())
}

/// Name of the application being deployed.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct AppName(String);

impl AppName {
    pub fn new(value: &str) -> Result<Self, ArgumentError> {
        validate("application name", value)?;
        Ok(Self(value.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl FromStr for AppName {
    type Err = ArgumentError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl fmt::Display for AppName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Deployment environment label, e.g. `staging` or `prod`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Stage(String);

impl Stage {
    pub fn new(value: &str) -> Result<Self, ArgumentError> {
        validate("stage", value)?;
        Ok(Self(value.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl FromStr for Stage {
    type Err = ArgumentError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
