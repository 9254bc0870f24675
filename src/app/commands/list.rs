use std::io::Write;

use crate::domain::{AppError, GenericPrivilegeConverter, RequestorName};
use crate::ports::AuthzClient;

/// List roles, optionally only those bound to one group.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListRolesCmd {
    pub group: Option<String>,
    pub component: String,
}

impl ListRolesCmd {
    pub fn new(group: Option<String>, component: impl Into<String>) -> Self {
        Self { group, component: component.into() }
    }

    pub fn execute(
        &self,
        client: &dyn AuthzClient,
        requestor: &RequestorName,
        out: &mut dyn Write,
    ) -> Result<(), AppError> {
        let roles = match &self.group {
            Some(group) => client.list_roles_by_group(requestor.as_str(), group, &self.component)?,
            None => client.list_all_roles(requestor.as_str(), &self.component)?,
        };
        for role in roles {
            writeln!(out, "{}", role)?;
        }
        Ok(())
    }
}

/// List a role's privileges in canonical string form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListPrivilegesByRoleCmd {
    pub role: String,
    pub component: String,
    pub service: String,
    pub converter: GenericPrivilegeConverter,
}

impl ListPrivilegesByRoleCmd {
    pub fn new(
        role: impl Into<String>,
        component: impl Into<String>,
        service: impl Into<String>,
        converter: GenericPrivilegeConverter,
    ) -> Self {
        Self {
            role: role.into(),
            component: component.into(),
            service: service.into(),
            converter,
        }
    }

    pub fn execute(
        &self,
        client: &dyn AuthzClient,
        requestor: &RequestorName,
        out: &mut dyn Write,
    ) -> Result<(), AppError> {
        let privileges = client.list_privileges_by_role(
            requestor.as_str(),
            &self.role,
            &self.component,
            &self.service,
        )?;
        for privilege in &privileges {
            writeln!(out, "{}", self.converter.to_privilege_string(privilege))?;
        }
        Ok(())
    }
}
