use std::sync::{Arc, Mutex};

use crate::domain::{AppError, ServiceClientConfig, StructuredPrivilege};
use crate::ports::{AuthzClient, AuthzClientFactory};

/// One remote call observed by the fake service.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RecordedCall {
    CreateRole { requestor: String, role: String, component: String },
    DropRole { requestor: String, role: String, component: String },
    AddRoleToGroups { requestor: String, role: String, component: String, groups: Vec<String> },
    DeleteRoleFromGroups {
        requestor: String,
        role: String,
        component: String,
        groups: Vec<String>,
    },
    GrantPrivilege {
        requestor: String,
        role: String,
        component: String,
        privilege: StructuredPrivilege,
    },
    RevokePrivilege {
        requestor: String,
        role: String,
        component: String,
        privilege: StructuredPrivilege,
    },
    ListAllRoles { requestor: String, component: String },
    ListRolesByGroup { requestor: String, group: String, component: String },
    ListPrivilegesByRole { requestor: String, role: String, component: String, service: String },
}

#[derive(Default)]
struct FakeState {
    opened: usize,
    closed: usize,
    calls: Vec<RecordedCall>,
    refuse_connection: bool,
    failure: Option<String>,
    roles: Vec<String>,
    privileges: Vec<StructuredPrivilege>,
}

/// In-memory authorization service that records sessions and calls.
#[derive(Clone, Default)]
pub struct FakeAuthzService {
    state: Arc<Mutex<FakeState>>,
}

impl FakeAuthzService {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make `open` fail with a connection error.
    pub fn refusing_connections(self) -> Self {
        self.state.lock().unwrap().refuse_connection = true;
        self
    }

    /// Make every remote call fail with `message`.
    pub fn failing_with(self, message: impl Into<String>) -> Self {
        self.state.lock().unwrap().failure = Some(message.into());
        self
    }

    pub fn with_roles(self, roles: &[&str]) -> Self {
        self.state.lock().unwrap().roles = roles.iter().map(|r| r.to_string()).collect();
        self
    }

    pub fn with_privileges(self, privileges: Vec<StructuredPrivilege>) -> Self {
        self.state.lock().unwrap().privileges = privileges;
        self
    }

    pub fn opened(&self) -> usize {
        self.state.lock().unwrap().opened
    }

    pub fn closed(&self) -> usize {
        self.state.lock().unwrap().closed
    }

    pub fn calls(&self) -> Vec<RecordedCall> {
        self.state.lock().unwrap().calls.clone()
    }
}

impl AuthzClientFactory for FakeAuthzService {
    fn open(&self, config: &ServiceClientConfig) -> Result<Box<dyn AuthzClient>, AppError> {
        let mut state = self.state.lock().unwrap();
        if state.refuse_connection {
            return Err(AppError::Connection {
                address: config.endpoint(),
                source: Box::new(std::io::Error::new(
                    std::io::ErrorKind::ConnectionRefused,
                    "connection refused",
                )),
            });
        }
        state.opened += 1;
        Ok(Box::new(FakeAuthzClient { state: Arc::clone(&self.state) }))
    }
}

struct FakeAuthzClient {
    state: Arc<Mutex<FakeState>>,
}

impl FakeAuthzClient {
    fn record(&self, call: RecordedCall) -> Result<(), AppError> {
        let mut state = self.state.lock().unwrap();
        state.calls.push(call);
        match &state.failure {
            Some(message) => Err(AppError::remote(message.clone())),
            None => Ok(()),
        }
    }
}

impl AuthzClient for FakeAuthzClient {
    fn create_role(&self, requestor: &str, role: &str, component: &str) -> Result<(), AppError> {
        self.record(RecordedCall::CreateRole {
            requestor: requestor.into(),
            role: role.into(),
            component: component.into(),
        })
    }

    fn drop_role(&self, requestor: &str, role: &str, component: &str) -> Result<(), AppError> {
        self.record(RecordedCall::DropRole {
            requestor: requestor.into(),
            role: role.into(),
            component: component.into(),
        })
    }

    fn add_role_to_groups(
        &self,
        requestor: &str,
        role: &str,
        component: &str,
        groups: &[String],
    ) -> Result<(), AppError> {
        self.record(RecordedCall::AddRoleToGroups {
            requestor: requestor.into(),
            role: role.into(),
            component: component.into(),
            groups: groups.to_vec(),
        })
    }

    fn delete_role_from_groups(
        &self,
        requestor: &str,
        role: &str,
        component: &str,
        groups: &[String],
    ) -> Result<(), AppError> {
        self.record(RecordedCall::DeleteRoleFromGroups {
            requestor: requestor.into(),
            role: role.into(),
            component: component.into(),
            groups: groups.to_vec(),
        })
    }

    fn grant_privilege(
        &self,
        requestor: &str,
        role: &str,
        component: &str,
        privilege: &StructuredPrivilege,
    ) -> Result<(), AppError> {
        self.record(RecordedCall::GrantPrivilege {
            requestor: requestor.into(),
            role: role.into(),
            component: component.into(),
            privilege: privilege.clone(),
        })
    }

    fn revoke_privilege(
        &self,
        requestor: &str,
        role: &str,
        component: &str,
        privilege: &StructuredPrivilege,
    ) -> Result<(), AppError> {
        self.record(RecordedCall::RevokePrivilege {
            requestor: requestor.into(),
            role: role.into(),
            component: component.into(),
            privilege: privilege.clone(),
        })
    }

    fn list_all_roles(&self, requestor: &str, component: &str) -> Result<Vec<String>, AppError> {
        self.record(RecordedCall::ListAllRoles {
            requestor: requestor.into(),
            component: component.into(),
        })?;
        Ok(self.state.lock().unwrap().roles.clone())
    }

    fn list_roles_by_group(
        &self,
        requestor: &str,
        group: &str,
        component: &str,
    ) -> Result<Vec<String>, AppError> {
        self.record(RecordedCall::ListRolesByGroup {
            requestor: requestor.into(),
            group: group.into(),
            component: component.into(),
        })?;
        Ok(self.state.lock().unwrap().roles.clone())
    }

    fn list_privileges_by_role(
        &self,
        requestor: &str,
        role: &str,
        component: &str,
        service: &str,
    ) -> Result<Vec<StructuredPrivilege>, AppError> {
        self.record(RecordedCall::ListPrivilegesByRole {
            requestor: requestor.into(),
            role: role.into(),
            component: component.into(),
            service: service.into(),
        })?;
        Ok(self.state.lock().unwrap().privileges.clone())
    }

    fn close(&mut self) {
        self.state.lock().unwrap().closed += 1;
    }
}
