//! API Facade for the application.
//!
//! Glues configuration, component resolution, the session runner and the
//! dispatcher together for one invocation.

use std::io::Write;
use std::path::PathBuf;

use crate::adapters::authz_client_http::HttpAuthzClientFactory;
use crate::adapters::login_identity::LoginIdentity;
use crate::app::AppContext;
use crate::app::dispatcher::dispatch;
use crate::app::session::SessionRunner;
use crate::domain::configuration::load_config;
use crate::domain::{ComponentType, ServiceClientConfig};
use crate::ports::{AuthzClientFactory, IdentityProvider};

pub use crate::domain::{AppError, RequestedOperation};

/// Everything the command line resolved for one run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShellRequest {
    /// Component type name as typed, e.g. `kafka`.
    pub component: String,
    /// Configuration file path.
    pub conf_path: PathBuf,
    /// The requested operation, if any.
    pub operation: Option<RequestedOperation>,
}

/// Run a request against the configured authorization service, printing to stdout.
pub fn run_shell(request: ShellRequest) -> Result<(), AppError> {
    let ctx = AppContext::new(HttpAuthzClientFactory, LoginIdentity);
    let stdout = std::io::stdout();
    execute(&ctx, request, &mut stdout.lock())
}

/// Run a request with explicit dependencies.
pub fn execute<F, I>(
    ctx: &AppContext<F, I>,
    request: ShellRequest,
    out: &mut dyn Write,
) -> Result<(), AppError>
where
    F: AuthzClientFactory,
    I: IdentityProvider,
{
    let component_type: ComponentType = request.component.parse()?;
    let component = component_type.component_id();

    let conf = load_config(&request.conf_path)?;
    let service = component_type.service_name(&conf);
    let client_config = ServiceClientConfig::from_configuration(&conf)?;
    tracing::debug!(component, %service, endpoint = %client_config.endpoint(), "resolved context");

    let operation = request.operation;
    SessionRunner::new(ctx.clients(), ctx.identity()).run(
        &client_config,
        || dispatch(operation, component, &service),
        out,
    )
}
