//! Structured privileges and the per-component grammars that produce them.

mod converter;
mod kafka;
mod model;
mod solr;

pub use converter::GenericPrivilegeConverter;
pub use model::{PrivilegeModel, model_for};

use serde::{Deserialize, Serialize};

pub(crate) const AUTHORIZABLE_SEPARATOR: &str = "->";
pub(crate) const KEY_VALUE_SEPARATOR: char = '=';
pub(crate) const ACTION_KEY: &str = "action";
pub(crate) const GRANT_OPTION_KEY: &str = "grantoption";

/// One resource in a privilege's scope, e.g. `topic=t1`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Authorizable {
    #[serde(rename = "type")]
    pub kind: String,
    pub name: String,
}

impl Authorizable {
    pub fn new(kind: impl Into<String>, name: impl Into<String>) -> Self {
        Self { kind: kind.into(), name: name.into() }
    }
}

/// A privilege scoped to a component and service, ready to send to the service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StructuredPrivilege {
    pub component: String,
    pub service_name: String,
    pub authorizables: Vec<Authorizable>,
    pub action: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub grant_option: Option<bool>,
}
