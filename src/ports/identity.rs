//! Login identity port.

use crate::domain::AppError;

/// Source of the authenticated operator's login principal.
pub trait IdentityProvider {
    /// Full principal of the current login, e.g. `alice@EXAMPLE.COM`.
    fn login_principal(&self) -> Result<String, AppError>;
}
