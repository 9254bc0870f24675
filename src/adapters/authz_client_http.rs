//! Authorization service client over HTTP/JSON using reqwest.

use std::io;
use std::net::{TcpStream, ToSocketAddrs};

use reqwest::StatusCode;
use reqwest::blocking::Client;
use reqwest::header::CONTENT_TYPE;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use url::Url;

use crate::domain::{AppError, ServiceClientConfig, StructuredPrivilege};
use crate::ports::{AuthzClient, AuthzClientFactory};

const PROTOCOL_VERSION: u32 = 2;
const STATUS_OK: i32 = 0;
const DEFAULT_STATUS_MESSAGE: &str = "Authorization service request failed";

const CREATE_ROLE: &str = "create_sentry_role";
const DROP_ROLE: &str = "drop_sentry_role";
const ADD_GROUPS: &str = "alter_sentry_role_add_groups";
const DELETE_GROUPS: &str = "alter_sentry_role_delete_groups";
const GRANT_PRIVILEGE: &str = "alter_sentry_role_grant_privilege";
const REVOKE_PRIVILEGE: &str = "alter_sentry_role_revoke_privilege";
const LIST_ROLES_BY_GROUP: &str = "list_sentry_roles_by_group";
const LIST_PRIVILEGES_BY_ROLE: &str = "list_sentry_privileges_by_role";

/// Server-side failure detail attached beneath the status message.
#[derive(Debug, thiserror::Error)]
#[error("{0}")]
struct ServerTrace(String);

/// HTTP session with the authorization service.
///
/// Every operation is a single POST to `<base>/<operation>`; the response carries
/// a `status` object whose non-zero `value` signals failure.
pub struct HttpAuthzClient {
    base_url: Url,
    endpoint: String,
    client: Client,
    closed: bool,
}

impl std::fmt::Debug for HttpAuthzClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HttpAuthzClient")
            .field("base_url", &self.base_url)
            .field("closed", &self.closed)
            .finish()
    }
}

impl HttpAuthzClient {
    /// Create a new HTTP client for the configured service.
    pub fn new(config: &ServiceClientConfig) -> Result<Self, AppError> {
        let base_url = config.base_url()?;
        let client = Client::builder()
            .connect_timeout(config.connection_timeout)
            .timeout(config.connection_timeout)
            .build()
            .map_err(|e| AppError::Connection { address: config.endpoint(), source: Box::new(e) })?;

        Ok(Self { base_url, endpoint: config.endpoint(), client, closed: false })
    }

    /// Create a client and confirm the service accepts connections within the
    /// configured connection timeout.
    pub fn connect(config: &ServiceClientConfig) -> Result<Self, AppError> {
        let client = Self::new(config)?;
        ensure_reachable(config)?;
        Ok(client)
    }

    fn call<Req, Resp>(&self, operation: &str, request: &Req) -> Result<Resp, AppError>
    where
        Req: Serialize,
        Resp: DeserializeOwned + HasStatus,
    {
        let url = self.base_url.join(operation).map_err(|e| {
            AppError::config_error(format!("Invalid operation path '{}': {}", operation, e))
        })?;
        tracing::debug!(%url, "sending authorization request");

        let response = self
            .client
            .post(url)
            .header(CONTENT_TYPE, "application/json")
            .json(request)
            .send()
            .map_err(|e| self.transport_error(operation, e))?;

        let status = response.status();
        let body_text = response.text().map_err(|e| AppError::RemoteOperation {
            message: format!("Failed to read {} response", operation),
            source: Some(Box::new(e)),
        })?;

        if !status.is_success() {
            return Err(http_failure(status, &body_text));
        }

        let parsed: Resp = serde_json::from_str(&body_text).map_err(|e| {
            AppError::RemoteOperation {
                message: format!("Failed to parse {} response", operation),
                source: Some(Box::new(e)),
            }
        })?;
        parsed.status().check()?;
        Ok(parsed)
    }

    fn transport_error(&self, operation: &str, error: reqwest::Error) -> AppError {
        if error.is_connect() || error.is_timeout() {
            AppError::Connection { address: self.endpoint.clone(), source: Box::new(error) }
        } else {
            AppError::RemoteOperation {
                message: format!("Request {} failed", operation),
                source: Some(Box::new(error)),
            }
        }
    }
}

fn ensure_reachable(config: &ServiceClientConfig) -> Result<(), AppError> {
    let connection_error = |source: io::Error| AppError::Connection {
        address: config.endpoint(),
        source: Box::new(source),
    };

    let addrs =
        (config.address.as_str(), config.port).to_socket_addrs().map_err(connection_error)?;

    let mut last_error = None;
    for addr in addrs {
        match TcpStream::connect_timeout(&addr, config.connection_timeout) {
            Ok(_) => return Ok(()),
            Err(e) => {
                tracing::debug!(%addr, error = %e, "authorization service address refused");
                last_error = Some(e);
            }
        }
    }

    Err(connection_error(last_error.unwrap_or_else(|| {
        io::Error::new(io::ErrorKind::NotFound, "address resolved to no endpoints")
    })))
}

fn http_failure(status: StatusCode, body: &str) -> AppError {
    let message = extract_error_message(body).unwrap_or_else(|| {
        if !body.trim().is_empty() {
            body.trim().to_string()
        } else if status.is_server_error() {
            "Server error".to_string()
        } else {
            DEFAULT_STATUS_MESSAGE.to_string()
        }
    });
    tracing::debug!(status = status.as_u16(), %message, "authorization request rejected");
    AppError::remote(message)
}

fn extract_error_message(body: &str) -> Option<String> {
    if body.trim().is_empty() {
        return None;
    }

    let parsed = serde_json::from_str::<serde_json::Value>(body).ok()?;

    if let Some(msg) = parsed
        .get("status")
        .and_then(|status| status.get("message"))
        .and_then(|message| message.as_str())
        .filter(|message| !message.is_empty())
    {
        return Some(msg.to_string());
    }

    parsed.get("message").and_then(|message| message.as_str()).map(ToOwned::to_owned)
}

#[derive(Debug, Default, Deserialize)]
struct ResponseStatus {
    value: i32,
    #[serde(default)]
    message: String,
    #[serde(default)]
    stack: Option<String>,
}

impl ResponseStatus {
    fn check(&self) -> Result<(), AppError> {
        if self.value == STATUS_OK {
            return Ok(());
        }
        tracing::debug!(code = self.value, "authorization service returned failure status");

        let source = self
            .stack
            .as_deref()
            .filter(|stack| !stack.trim().is_empty())
            .map(|stack| -> Box<dyn std::error::Error + Send + Sync> {
                Box::new(ServerTrace(stack.to_string()))
            });
        Err(AppError::RemoteOperation { message: self.message.clone(), source })
    }
}

trait HasStatus {
    fn status(&self) -> &ResponseStatus;
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct RoleRequest<'a> {
    protocol_version: u32,
    requestor_user_name: &'a str,
    role_name: &'a str,
    component: &'a str,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct RoleGroupsRequest<'a> {
    protocol_version: u32,
    requestor_user_name: &'a str,
    role_name: &'a str,
    component: &'a str,
    groups: &'a [String],
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct RolePrivilegeRequest<'a> {
    protocol_version: u32,
    requestor_user_name: &'a str,
    role_name: &'a str,
    component: &'a str,
    privilege: &'a StructuredPrivilege,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct ListRolesRequest<'a> {
    protocol_version: u32,
    requestor_user_name: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    group_name: Option<&'a str>,
    component: &'a str,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct ListPrivilegesRequest<'a> {
    protocol_version: u32,
    requestor_user_name: &'a str,
    role_name: &'a str,
    component: &'a str,
    service_name: &'a str,
}

#[derive(Debug, Deserialize)]
struct StatusResponse {
    status: ResponseStatus,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RoleEntry {
    role_name: String,
}

#[derive(Debug, Deserialize)]
struct ListRolesResponse {
    status: ResponseStatus,
    #[serde(default)]
    roles: Vec<RoleEntry>,
}

#[derive(Debug, Deserialize)]
struct ListPrivilegesResponse {
    status: ResponseStatus,
    #[serde(default)]
    privileges: Vec<StructuredPrivilege>,
}

impl HasStatus for StatusResponse {
    fn status(&self) -> &ResponseStatus {
        &self.status
    }
}

impl HasStatus for ListRolesResponse {
    fn status(&self) -> &ResponseStatus {
        &self.status
    }
}

impl HasStatus for ListPrivilegesResponse {
    fn status(&self) -> &ResponseStatus {
        &self.status
    }
}

impl HttpAuthzClient {
    fn role_call(
        &self,
        operation: &str,
        requestor: &str,
        role: &str,
        component: &str,
    ) -> Result<(), AppError> {
        let request = RoleRequest {
            protocol_version: PROTOCOL_VERSION,
            requestor_user_name: requestor,
            role_name: role,
            component,
        };
        self.call::<_, StatusResponse>(operation, &request).map(|_| ())
    }

    fn groups_call(
        &self,
        operation: &str,
        requestor: &str,
        role: &str,
        component: &str,
        groups: &[String],
    ) -> Result<(), AppError> {
        let request = RoleGroupsRequest {
            protocol_version: PROTOCOL_VERSION,
            requestor_user_name: requestor,
            role_name: role,
            component,
            groups,
        };
        self.call::<_, StatusResponse>(operation, &request).map(|_| ())
    }

    fn privilege_call(
        &self,
        operation: &str,
        requestor: &str,
        role: &str,
        component: &str,
        privilege: &StructuredPrivilege,
    ) -> Result<(), AppError> {
        let request = RolePrivilegeRequest {
            protocol_version: PROTOCOL_VERSION,
            requestor_user_name: requestor,
            role_name: role,
            component,
            privilege,
        };
        self.call::<_, StatusResponse>(operation, &request).map(|_| ())
    }

    fn list_roles(
        &self,
        requestor: &str,
        group: Option<&str>,
        component: &str,
    ) -> Result<Vec<String>, AppError> {
        let request = ListRolesRequest {
            protocol_version: PROTOCOL_VERSION,
            requestor_user_name: requestor,
            group_name: group,
            component,
        };
        let response: ListRolesResponse = self.call(LIST_ROLES_BY_GROUP, &request)?;
        Ok(response.roles.into_iter().map(|role| role.role_name).collect())
    }
}

impl AuthzClient for HttpAuthzClient {
    fn create_role(&self, requestor: &str, role: &str, component: &str) -> Result<(), AppError> {
        self.role_call(CREATE_ROLE, requestor, role, component)
    }

    fn drop_role(&self, requestor: &str, role: &str, component: &str) -> Result<(), AppError> {
        self.role_call(DROP_ROLE, requestor, role, component)
    }

    fn add_role_to_groups(
        &self,
        requestor: &str,
        role: &str,
        component: &str,
        groups: &[String],
    ) -> Result<(), AppError> {
        self.groups_call(ADD_GROUPS, requestor, role, component, groups)
    }

    fn delete_role_from_groups(
        &self,
        requestor: &str,
        role: &str,
        component: &str,
        groups: &[String],
    ) -> Result<(), AppError> {
        self.groups_call(DELETE_GROUPS, requestor, role, component, groups)
    }

    fn grant_privilege(
        &self,
        requestor: &str,
        role: &str,
        component: &str,
        privilege: &StructuredPrivilege,
    ) -> Result<(), AppError> {
        self.privilege_call(GRANT_PRIVILEGE, requestor, role, component, privilege)
    }

    fn revoke_privilege(
        &self,
        requestor: &str,
        role: &str,
        component: &str,
        privilege: &StructuredPrivilege,
    ) -> Result<(), AppError> {
        self.privilege_call(REVOKE_PRIVILEGE, requestor, role, component, privilege)
    }

    fn list_all_roles(&self, requestor: &str, component: &str) -> Result<Vec<String>, AppError> {
        self.list_roles(requestor, None, component)
    }

    fn list_roles_by_group(
        &self,
        requestor: &str,
        group: &str,
        component: &str,
    ) -> Result<Vec<String>, AppError> {
        self.list_roles(requestor, Some(group), component)
    }

    fn list_privileges_by_role(
        &self,
        requestor: &str,
        role: &str,
        component: &str,
        service: &str,
    ) -> Result<Vec<StructuredPrivilege>, AppError> {
        let request = ListPrivilegesRequest {
            protocol_version: PROTOCOL_VERSION,
            requestor_user_name: requestor,
            role_name: role,
            component,
            service_name: service,
        };
        let response: ListPrivilegesResponse = self.call(LIST_PRIVILEGES_BY_ROLE, &request)?;
        Ok(response.privileges)
    }

    fn close(&mut self) {
        if !self.closed {
            self.closed = true;
            tracing::debug!(endpoint = %self.endpoint, "authorization session closed");
        }
    }
}

/// Opens [`HttpAuthzClient`] sessions.
#[derive(Debug, Clone, Copy, Default)]
pub struct HttpAuthzClientFactory;

impl AuthzClientFactory for HttpAuthzClientFactory {
    fn open(&self, config: &ServiceClientConfig) -> Result<Box<dyn AuthzClient>, AppError> {
        let client = HttpAuthzClient::connect(config)?;
        tracing::debug!(endpoint = %config.endpoint(), "authorization session opened");
        Ok(Box::new(client))
    }
}
