//! Identity of the operator performing an administrative operation.

use std::fmt;

use crate::domain::AppError;

/// Short, unqualified login name sent as the requestor of every operation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestorName(String);

impl RequestorName {
    /// Derive the short name from a login principal.
    ///
    /// `alice/host.example.com@EXAMPLE.COM` and `alice@EXAMPLE.COM` both yield `alice`.
    /// Fails with [`AppError::EmptyRequestor`] when nothing remains.
    pub fn from_principal(principal: &str) -> Result<Self, AppError> {
        let short = principal.split(['/', '@']).next().unwrap_or_default().trim();
        if short.is_empty() {
            return Err(AppError::EmptyRequestor);
        }
        Ok(Self(short.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for RequestorName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
