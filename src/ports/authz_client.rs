//! Authorization service client port definition.

use crate::domain::{AppError, ServiceClientConfig, StructuredPrivilege};

/// An open, authenticated session with the authorization service.
///
/// Each method performs exactly one remote call. Errors are returned as the
/// transport produced them; callers do not retry.
pub trait AuthzClient {
    fn create_role(&self, requestor: &str, role: &str, component: &str) -> Result<(), AppError>;

    fn drop_role(&self, requestor: &str, role: &str, component: &str) -> Result<(), AppError>;

    fn add_role_to_groups(
        &self,
        requestor: &str,
        role: &str,
        component: &str,
        groups: &[String],
    ) -> Result<(), AppError>;

    fn delete_role_from_groups(
        &self,
        requestor: &str,
        role: &str,
        component: &str,
        groups: &[String],
    ) -> Result<(), AppError>;

    fn grant_privilege(
        &self,
        requestor: &str,
        role: &str,
        component: &str,
        privilege: &StructuredPrivilege,
    ) -> Result<(), AppError>;

    fn revoke_privilege(
        &self,
        requestor: &str,
        role: &str,
        component: &str,
        privilege: &StructuredPrivilege,
    ) -> Result<(), AppError>;

    fn list_all_roles(&self, requestor: &str, component: &str) -> Result<Vec<String>, AppError>;

    fn list_roles_by_group(
        &self,
        requestor: &str,
        group: &str,
        component: &str,
    ) -> Result<Vec<String>, AppError>;

    fn list_privileges_by_role(
        &self,
        requestor: &str,
        role: &str,
        component: &str,
        service: &str,
    ) -> Result<Vec<StructuredPrivilege>, AppError>;

    /// Release the session. Called exactly once by the session guard.
    fn close(&mut self);
}

/// Opens client sessions against a configured service.
pub trait AuthzClientFactory {
    fn open(&self, config: &ServiceClientConfig) -> Result<Box<dyn AuthzClient>, AppError>;
}
