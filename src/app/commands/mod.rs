//! Administrative operations, one variant per remote call.

mod group;
mod list;
mod privilege;
mod role;

use std::io::Write;

pub use group::{AddRoleToGroupCmd, DeleteRoleFromGroupCmd};
pub use list::{ListPrivilegesByRoleCmd, ListRolesCmd};
pub use privilege::{GrantPrivilegeToRoleCmd, RevokePrivilegeFromRoleCmd};
pub use role::{CreateRoleCmd, DropRoleCmd};

use crate::domain::{AppError, RequestorName};
use crate::ports::AuthzClient;

/// The single operation built for an invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    CreateRole(CreateRoleCmd),
    DropRole(DropRoleCmd),
    AddRoleToGroup(AddRoleToGroupCmd),
    DeleteRoleFromGroup(DeleteRoleFromGroupCmd),
    GrantPrivilegeToRole(GrantPrivilegeToRoleCmd),
    RevokePrivilegeFromRole(RevokePrivilegeFromRoleCmd),
    ListRoles(ListRolesCmd),
    ListPrivilegesByRole(ListPrivilegesByRoleCmd),
}

impl Command {
    /// Run the operation against an open session.
    ///
    /// Performs exactly one remote call; its error is returned unchanged.
    /// List operations write one entry per line to `out`.
    pub fn execute(
        &self,
        client: &dyn AuthzClient,
        requestor: &RequestorName,
        out: &mut dyn Write,
    ) -> Result<(), AppError> {
        tracing::debug!(operation = self.name(), %requestor, "executing command");
        match self {
            Command::CreateRole(cmd) => cmd.execute(client, requestor),
            Command::DropRole(cmd) => cmd.execute(client, requestor),
            Command::AddRoleToGroup(cmd) => cmd.execute(client, requestor),
            Command::DeleteRoleFromGroup(cmd) => cmd.execute(client, requestor),
            Command::GrantPrivilegeToRole(cmd) => cmd.execute(client, requestor),
            Command::RevokePrivilegeFromRole(cmd) => cmd.execute(client, requestor),
            Command::ListRoles(cmd) => cmd.execute(client, requestor, out),
            Command::ListPrivilegesByRole(cmd) => cmd.execute(client, requestor, out),
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Command::CreateRole(_) => "create_role",
            Command::DropRole(_) => "drop_role",
            Command::AddRoleToGroup(_) => "add_role_group",
            Command::DeleteRoleFromGroup(_) => "delete_role_group",
            Command::GrantPrivilegeToRole(_) => "grant_privilege_role",
            Command::RevokePrivilegeFromRole(_) => "revoke_privilege_role",
            Command::ListRoles(_) => "list_role",
            Command::ListPrivilegesByRole(_) => "list_privilege",
        }
    }
}
