// ABOUTME: Validated remote host address for SSH and rsync targets.
// ABOUTME: Rejects values that ssh or rsync would read as an option, a user or a path.

use super::ArgumentError;
use std::fmt;
use std::str::FromStr;

/// Hostname or IP address of the swarm manager to deploy to.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RemoteHost(String);

impl RemoteHost {
    pub fn new(value: &str) -> Result<Self, ArgumentError> {
        let field = "remote address";
        let value = value.trim();

        if value.is_empty() {
            return Err(ArgumentError::Empty { field });
        }

        if value.starts_with('-') {
            return Err(ArgumentError::InvalidStart { field, ch: '-' });
        }

        // Colons stay allowed for IPv6 literals.
        for ch in value.chars() {
            if ch.is_whitespace() || ch == '@' || ch == '/' || ch == '\'' || ch == '"' {
                return Err(ArgumentError::InvalidChar { field, ch });
            }
        }

        Ok(Self(value.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl FromStr for RemoteHost {
    type Err = ArgumentError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl fmt::Display for RemoteHost {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
