use crate::domain::{AppError, RequestorName};
use crate::ports::AuthzClient;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateRoleCmd {
    pub role: String,
    pub component: String,
}

impl CreateRoleCmd {
    pub fn new(role: impl Into<String>, component: impl Into<String>) -> Self {
        Self { role: role.into(), component: component.into() }
    }

    pub fn execute(
        &self,
        client: &dyn AuthzClient,
        requestor: &RequestorName,
    ) -> Result<(), AppError> {
        client.create_role(requestor.as_str(), &self.role, &self.component)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DropRoleCmd {
    pub role: String,
    pub component: String,
}

impl DropRoleCmd {
    pub fn new(role: impl Into<String>, component: impl Into<String>) -> Self {
        Self { role: role.into(), component: component.into() }
    }

    pub fn execute(
        &self,
        client: &dyn AuthzClient,
        requestor: &RequestorName,
    ) -> Result<(), AppError> {
        client.drop_role(requestor.as_str(), &self.role, &self.component)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ServiceClientConfig;
    use crate::ports::AuthzClientFactory;
    use crate::testing::{FakeAuthzService, RecordedCall};

    fn requestor() -> RequestorName {
        RequestorName::from_principal("alice").unwrap()
    }

    #[test]
    fn create_role_issues_one_call() {
        let service = FakeAuthzService::new();
        let client = service.open(&ServiceClientConfig::default()).unwrap();

        CreateRoleCmd::new("analyst", "SOLR").execute(client.as_ref(), &requestor()).unwrap();

        assert_eq!(
            service.calls(),
            vec![RecordedCall::CreateRole {
                requestor: "alice".into(),
                role: "analyst".into(),
                component: "SOLR".into(),
            }]
        );
    }

    #[test]
    fn drop_role_propagates_remote_error() {
        let service = FakeAuthzService::new().failing_with("Role: analyst doesn't exist");
        let client = service.open(&ServiceClientConfig::default()).unwrap();

        let err =
            DropRoleCmd::new("analyst", "SOLR").execute(client.as_ref(), &requestor()).unwrap_err();

        assert_eq!(err.to_string(), "Role: analyst doesn't exist");
        assert_eq!(service.calls().len(), 1);
    }
}
