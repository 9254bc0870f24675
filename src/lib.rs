//! sentry-shell: administer roles, group bindings, and privileges in a generic
//! authorization service.

pub mod adapters;
pub mod app;
pub mod domain;
pub mod ports;

#[cfg(test)]
pub(crate) mod testing;

pub use app::api::{ShellRequest, execute, run_shell};
pub use app::report::{failure_line, root_cause_message};
pub use domain::{AppError, ComponentType, GenericPrivilegeConverter, RequestedOperation};
