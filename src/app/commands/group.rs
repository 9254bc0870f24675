use crate::domain::{AppError, RequestorName};
use crate::ports::AuthzClient;

/// Bind a role to one or more groups in a single call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AddRoleToGroupCmd {
    pub role: String,
    pub groups: Vec<String>,
    pub component: String,
}

impl AddRoleToGroupCmd {
    pub fn new(role: impl Into<String>, groups: Vec<String>, component: impl Into<String>) -> Self {
        Self { role: role.into(), groups, component: component.into() }
    }

    pub fn execute(
        &self,
        client: &dyn AuthzClient,
        requestor: &RequestorName,
    ) -> Result<(), AppError> {
        client.add_role_to_groups(requestor.as_str(), &self.role, &self.component, &self.groups)
    }
}

/// Remove a role from one or more groups in a single call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeleteRoleFromGroupCmd {
    pub role: String,
    pub groups: Vec<String>,
    pub component: String,
}

impl DeleteRoleFromGroupCmd {
    pub fn new(role: impl Into<String>, groups: Vec<String>, component: impl Into<String>) -> Self {
        Self { role: role.into(), groups, component: component.into() }
    }

    pub fn execute(
        &self,
        client: &dyn AuthzClient,
        requestor: &RequestorName,
    ) -> Result<(), AppError> {
        client.delete_role_from_groups(
            requestor.as_str(),
            &self.role,
            &self.component,
            &self.groups,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ServiceClientConfig;
    use crate::ports::AuthzClientFactory;
    use crate::testing::{FakeAuthzService, RecordedCall};

    #[test]
    fn groups_are_sent_together() {
        let service = FakeAuthzService::new();
        let client = service.open(&ServiceClientConfig::default()).unwrap();
        let requestor = RequestorName::from_principal("alice").unwrap();
        let groups = vec!["ops".to_string(), "dev".to_string()];

        AddRoleToGroupCmd::new("admin", groups.clone(), "kafka")
            .execute(client.as_ref(), &requestor)
            .unwrap();
        DeleteRoleFromGroupCmd::new("admin", groups.clone(), "kafka")
            .execute(client.as_ref(), &requestor)
            .unwrap();

        assert_eq!(
            service.calls(),
            vec![
                RecordedCall::AddRoleToGroups {
                    requestor: "alice".into(),
                    role: "admin".into(),
                    component: "kafka".into(),
                    groups: groups.clone(),
                },
                RecordedCall::DeleteRoleFromGroups {
                    requestor: "alice".into(),
                    role: "admin".into(),
                    component: "kafka".into(),
                    groups,
                },
            ]
        );
    }
}
