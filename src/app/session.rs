//! Scoped authorization session and the single-operation run over it.

use std::io::Write;
use std::ops::Deref;

use crate::app::commands::Command;
use crate::domain::{AppError, RequestorName, ServiceClientConfig};
use crate::ports::{AuthzClient, AuthzClientFactory, IdentityProvider};

/// An open session, closed exactly once when dropped.
pub struct SessionGuard {
    client: Box<dyn AuthzClient>,
}

impl SessionGuard {
    pub fn open(
        factory: &dyn AuthzClientFactory,
        config: &ServiceClientConfig,
    ) -> Result<Self, AppError> {
        let client = factory.open(config)?;
        Ok(Self { client })
    }
}

impl Deref for SessionGuard {
    type Target = dyn AuthzClient;

    fn deref(&self) -> &Self::Target {
        self.client.as_ref()
    }
}

impl Drop for SessionGuard {
    fn drop(&mut self) {
        self.client.close();
    }
}

/// Runs one operation inside one session.
pub struct SessionRunner<'a> {
    factory: &'a dyn AuthzClientFactory,
    identity: &'a dyn IdentityProvider,
}

impl<'a> SessionRunner<'a> {
    pub fn new(factory: &'a dyn AuthzClientFactory, identity: &'a dyn IdentityProvider) -> Self {
        Self { factory, identity }
    }

    /// Open a session, resolve the requestor, build and execute the command.
    ///
    /// `build` runs after the session is open. An empty requestor fails the run
    /// before any command executes. The session is closed on every exit path.
    pub fn run(
        &self,
        config: &ServiceClientConfig,
        build: impl FnOnce() -> Option<Command>,
        out: &mut dyn Write,
    ) -> Result<(), AppError> {
        let session = SessionGuard::open(self.factory, config)?;

        let principal = self.identity.login_principal()?;
        let command = build();
        let requestor = RequestorName::from_principal(&principal)?;

        match command {
            Some(command) => command.execute(&*session, &requestor, out),
            None => {
                tracing::debug!("no operation requested");
                Ok(())
            }
        }
    }
}
