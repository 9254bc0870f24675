//! The administrative operation requested on the command line.

const GROUP_SPLIT_CHAR: char = ',';

/// Exactly one operation, carrying its own arguments.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RequestedOperation {
    CreateRole { role: String },
    DropRole { role: String },
    AddRoleToGroup { role: String, groups: Vec<String> },
    DeleteRoleFromGroup { role: String, groups: Vec<String> },
    GrantPrivilegeToRole { role: String, privilege: String },
    RevokePrivilegeFromRole { role: String, privilege: String },
    ListRoles { group: Option<String> },
    ListPrivilegesByRole { role: String },
}

/// Split a `g1,g2` group argument into trimmed, non-empty names.
pub fn split_groups(raw: &str) -> Vec<String> {
    raw.split(GROUP_SPLIT_CHAR)
        .map(str::trim)
        .filter(|group| !group.is_empty())
        .map(ToOwned::to_owned)
        .collect()
}
