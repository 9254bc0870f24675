mod authz_client;
mod identity;

pub use authz_client::{AuthzClient, AuthzClientFactory};
pub use identity::IdentityProvider;
