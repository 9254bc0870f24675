//! Mutually exclusive operation flags and their collapse into one operation.

use clap::Args;

use crate::domain::{AppError, RequestedOperation, split_groups};

/// One flag per operation; clap allows at most one of them.
#[derive(Args, Debug, Clone, Copy, Default, PartialEq, Eq)]
#[group(id = "operation", multiple = false, required = false)]
pub struct OperationSelectors {
    /// Create a role
    #[arg(long = "create_role", visible_alias = "cr", requires = "role")]
    pub create_role: bool,

    /// Drop a role
    #[arg(long = "drop_role", visible_alias = "dr", requires = "role")]
    pub drop_role: bool,

    /// Add a role to one or more groups
    #[arg(long = "add_role_group", visible_alias = "arg", requires_all = ["role", "group"])]
    pub add_role_group: bool,

    /// Delete a role from one or more groups
    #[arg(long = "delete_role_group", visible_alias = "drg", requires_all = ["role", "group"])]
    pub delete_role_group: bool,

    /// Grant a privilege to a role
    #[arg(
        long = "grant_privilege_role",
        visible_alias = "gpr",
        requires_all = ["role", "privilege"]
    )]
    pub grant_privilege_role: bool,

    /// Revoke a privilege from a role
    #[arg(
        long = "revoke_privilege_role",
        visible_alias = "rpr",
        requires_all = ["role", "privilege"]
    )]
    pub revoke_privilege_role: bool,

    /// List roles, optionally only those of a group
    #[arg(long = "list_role", visible_alias = "lr")]
    pub list_role: bool,

    /// List the privileges of a role
    #[arg(long = "list_privilege", visible_alias = "lp", requires = "role")]
    pub list_privilege: bool,
}

impl OperationSelectors {
    /// Collapse the flags into the requested operation.
    ///
    /// Clap rejects more than one flag. When the struct is built directly with
    /// several flags set, the first in declaration order wins.
    pub fn requested(
        &self,
        role: Option<&str>,
        group: Option<&str>,
        privilege: Option<&str>,
    ) -> Result<Option<RequestedOperation>, AppError> {
        let operation = if self.create_role {
            RequestedOperation::CreateRole { role: required(role, "role_name", "create_role")? }
        } else if self.drop_role {
            RequestedOperation::DropRole { role: required(role, "role_name", "drop_role")? }
        } else if self.add_role_group {
            RequestedOperation::AddRoleToGroup {
                role: required(role, "role_name", "add_role_group")?,
                groups: required_groups(group, "add_role_group")?,
            }
        } else if self.delete_role_group {
            RequestedOperation::DeleteRoleFromGroup {
                role: required(role, "role_name", "delete_role_group")?,
                groups: required_groups(group, "delete_role_group")?,
            }
        } else if self.grant_privilege_role {
            RequestedOperation::GrantPrivilegeToRole {
                role: required(role, "role_name", "grant_privilege_role")?,
                privilege: required(privilege, "privilege", "grant_privilege_role")?,
            }
        } else if self.revoke_privilege_role {
            RequestedOperation::RevokePrivilegeFromRole {
                role: required(role, "role_name", "revoke_privilege_role")?,
                privilege: required(privilege, "privilege", "revoke_privilege_role")?,
            }
        } else if self.list_role {
            RequestedOperation::ListRoles {
                group: group.map(str::trim).filter(|g| !g.is_empty()).map(ToOwned::to_owned),
            }
        } else if self.list_privilege {
            RequestedOperation::ListPrivilegesByRole {
                role: required(role, "role_name", "list_privilege")?,
            }
        } else {
            return Ok(None);
        };
        Ok(Some(operation))
    }
}

fn required(value: Option<&str>, arg: &str, operation: &str) -> Result<String, AppError> {
    match value.map(str::trim) {
        Some(value) if !value.is_empty() => Ok(value.to_string()),
        _ => Err(AppError::config_error(format!("--{} is required for --{}", arg, operation))),
    }
}

fn required_groups(value: Option<&str>, operation: &str) -> Result<Vec<String>, AppError> {
    let groups = split_groups(value.unwrap_or_default());
    if groups.is_empty() {
        return Err(AppError::config_error(format!("--group_name is required for --{}", operation)));
    }
    Ok(groups)
}
