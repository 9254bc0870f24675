use crate::domain::{AppError, GenericPrivilegeConverter, RequestorName};
use crate::ports::AuthzClient;

/// Grant a privilege, converted in the converter's namespace, to a role.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GrantPrivilegeToRoleCmd {
    pub role: String,
    pub component: String,
    pub privilege: String,
    pub converter: GenericPrivilegeConverter,
}

impl GrantPrivilegeToRoleCmd {
    pub fn new(
        role: impl Into<String>,
        component: impl Into<String>,
        privilege: impl Into<String>,
        converter: GenericPrivilegeConverter,
    ) -> Self {
        Self {
            role: role.into(),
            component: component.into(),
            privilege: privilege.into(),
            converter,
        }
    }

    pub fn execute(
        &self,
        client: &dyn AuthzClient,
        requestor: &RequestorName,
    ) -> Result<(), AppError> {
        let privilege = self.converter.to_privilege(&self.privilege)?;
        client.grant_privilege(requestor.as_str(), &self.role, &self.component, &privilege)
    }
}

/// Revoke a privilege, converted in the converter's namespace, from a role.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RevokePrivilegeFromRoleCmd {
    pub role: String,
    pub component: String,
    pub privilege: String,
    pub converter: GenericPrivilegeConverter,
}

impl RevokePrivilegeFromRoleCmd {
    pub fn new(
        role: impl Into<String>,
        component: impl Into<String>,
        privilege: impl Into<String>,
        converter: GenericPrivilegeConverter,
    ) -> Self {
        Self {
            role: role.into(),
            component: component.into(),
            privilege: privilege.into(),
            converter,
        }
    }

    pub fn execute(
        &self,
        client: &dyn AuthzClient,
        requestor: &RequestorName,
    ) -> Result<(), AppError> {
        let privilege = self.converter.to_privilege(&self.privilege)?;
        client.revoke_privilege(requestor.as_str(), &self.role, &self.component, &privilege)
    }
}
