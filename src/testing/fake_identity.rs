use crate::domain::AppError;
use crate::ports::IdentityProvider;

/// Identity provider returning a fixed principal.
#[derive(Debug, Clone)]
pub struct FixedIdentity(pub String);

impl FixedIdentity {
    pub fn new(principal: impl Into<String>) -> Self {
        Self(principal.into())
    }
}

impl IdentityProvider for FixedIdentity {
    fn login_principal(&self) -> Result<String, AppError> {
        Ok(self.0.clone())
    }
}

/// Identity provider whose login lookup always fails.
#[derive(Debug, Clone, Default)]
pub struct FailingIdentity;

impl IdentityProvider for FailingIdentity {
    fn login_principal(&self) -> Result<String, AppError> {
        Err(AppError::config_error("no login user could be determined"))
    }
}
