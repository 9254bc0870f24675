use std::io;

use thiserror::Error;

/// Library-wide error type for sentry-shell operations.
#[derive(Debug, Error)]
pub enum AppError {
    /// Underlying I/O failure.
    #[error(transparent)]
    Io(#[from] io::Error),

    /// Configuration or environment issue.
    #[error("{0}")]
    Configuration(String),

    /// Configuration file given by `--conf` does not exist.
    #[error("Configuration file not found: {0}")]
    ConfigNotFound(String),

    /// TOML parsing error.
    #[error("TOML parse error: {0}")]
    TomlParseError(#[from] toml::de::Error),

    /// The requested component type has no authorization model here.
    #[error("Invalid type specified for the generic shell: {0}")]
    UnsupportedComponent(String),

    /// The privilege converter is bound to a component it has no grammar for.
    #[error("Unknown component '{0}': no privilege model is registered for it")]
    UnknownComponent(String),

    /// The privilege converter is bound to an empty or invalid service name.
    #[error("Unknown service '{service}' for component '{component}'")]
    UnknownService { service: String, component: String },

    /// A raw privilege string does not follow the component's grammar.
    #[error("Malformed privilege '{privilege}': {reason}")]
    MalformedPrivilege { privilege: String, reason: String },

    /// The authenticated login resolved to an empty short name.
    #[error("The requestor name is empty.")]
    EmptyRequestor,

    /// The authorization service could not be reached.
    #[error("Could not connect to the authorization service at {address}")]
    Connection {
        address: String,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    /// The authorization service rejected or failed the requested operation.
    #[error("{message}")]
    RemoteOperation {
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },
}

impl AppError {
    pub fn config_error<S: Into<String>>(message: S) -> Self {
        AppError::Configuration(message.into())
    }

    pub(crate) fn malformed<P: Into<String>, R: Into<String>>(privilege: P, reason: R) -> Self {
        AppError::MalformedPrivilege { privilege: privilege.into(), reason: reason.into() }
    }

    pub(crate) fn remote<S: Into<String>>(message: S) -> Self {
        AppError::RemoteOperation { message: message.into(), source: None }
    }
}
