//! Login identity resolved from the process environment.

use crate::domain::AppError;
use crate::ports::IdentityProvider;

/// Environment override for the login user, honored the way Hadoop tooling does.
pub const USER_NAME_ENV: &str = "HADOOP_USER_NAME";

/// Resolves the operator from `HADOOP_USER_NAME`, else the operating system user.
#[derive(Debug, Clone, Copy, Default)]
pub struct LoginIdentity;

impl IdentityProvider for LoginIdentity {
    fn login_principal(&self) -> Result<String, AppError> {
        if let Some(user) = std::env::var_os(USER_NAME_ENV) {
            let user = user.to_string_lossy().into_owned();
            if !user.is_empty() {
                return Ok(user);
            }
        }
        Ok(whoami::username())
    }
}
