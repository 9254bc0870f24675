use crate::ports::{AuthzClientFactory, IdentityProvider};

/// Application context holding dependencies for command execution.
pub struct AppContext<F: AuthzClientFactory, I: IdentityProvider> {
    clients: F,
    identity: I,
}

impl<F: AuthzClientFactory, I: IdentityProvider> AppContext<F, I> {
    /// Create a new application context.
    pub fn new(clients: F, identity: I) -> Self {
        Self { clients, identity }
    }

    /// Get a reference to the session factory.
    pub fn clients(&self) -> &F {
        &self.clients
    }

    /// Get a reference to the login identity provider.
    pub fn identity(&self) -> &I {
        &self.identity
    }
}
