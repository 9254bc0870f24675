pub mod authz_client_http;
pub mod login_identity;
