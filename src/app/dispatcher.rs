//! Builds the single command for an invocation.

use crate::app::commands::{
    AddRoleToGroupCmd, Command, CreateRoleCmd, DeleteRoleFromGroupCmd, DropRoleCmd,
    GrantPrivilegeToRoleCmd, ListPrivilegesByRoleCmd, ListRolesCmd, RevokePrivilegeFromRoleCmd,
};
use crate::domain::{GenericPrivilegeConverter, RequestedOperation};

/// Turn the requested operation into its command, or `None` when nothing was requested.
///
/// The privilege converter is created only for privilege operations, bound to
/// `component` and `service`.
pub fn dispatch(
    operation: Option<RequestedOperation>,
    component: &str,
    service: &str,
) -> Option<Command> {
    let converter = || GenericPrivilegeConverter::new(component, service);

    let command = match operation? {
        RequestedOperation::CreateRole { role } => {
            Command::CreateRole(CreateRoleCmd::new(role, component))
        }
        RequestedOperation::DropRole { role } => {
            Command::DropRole(DropRoleCmd::new(role, component))
        }
        RequestedOperation::AddRoleToGroup { role, groups } => {
            Command::AddRoleToGroup(AddRoleToGroupCmd::new(role, groups, component))
        }
        RequestedOperation::DeleteRoleFromGroup { role, groups } => {
            Command::DeleteRoleFromGroup(DeleteRoleFromGroupCmd::new(role, groups, component))
        }
        RequestedOperation::GrantPrivilegeToRole { role, privilege } => {
            Command::GrantPrivilegeToRole(GrantPrivilegeToRoleCmd::new(
                role,
                component,
                privilege,
                converter(),
            ))
        }
        RequestedOperation::RevokePrivilegeFromRole { role, privilege } => {
            Command::RevokePrivilegeFromRole(RevokePrivilegeFromRoleCmd::new(
                role,
                component,
                privilege,
                converter(),
            ))
        }
        RequestedOperation::ListRoles { group } => {
            Command::ListRoles(ListRolesCmd::new(group, component))
        }
        RequestedOperation::ListPrivilegesByRole { role } => {
            Command::ListPrivilegesByRole(ListPrivilegesByRoleCmd::new(
                role,
                component,
                service,
                converter(),
            ))
        }
    };
    Some(command)
}
