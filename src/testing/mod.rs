mod fake_authz_client;
mod fake_identity;

pub use fake_authz_client::{FakeAuthzService, RecordedCall};
pub use fake_identity::{FailingIdentity, FixedIdentity};
