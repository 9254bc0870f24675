//! Solr privilege grammar: one resource and an action,
//! e.g. `collection=logs->action=query`.

use super::{Authorizable, PrivilegeModel};
use crate::domain::AppError;

pub(super) struct SolrModel;

impl PrivilegeModel for SolrModel {
    fn component(&self) -> &'static str {
        "SOLR"
    }

    fn authorizable_types(&self) -> &'static [&'static str] {
        &["collection", "field", "admin", "config", "schema"]
    }

    fn actions(&self) -> &'static [&'static str] {
        &["query", "update", "*", "all"]
    }

    fn validate(
        &self,
        raw: &str,
        authorizables: &[Authorizable],
        _action: &str,
    ) -> Result<(), AppError> {
        match authorizables.len() {
            1 => Ok(()),
            0 => Err(AppError::malformed(raw, "Solr privilege must name a resource")),
            _ => Err(AppError::malformed(raw, "Solr privilege may name only one resource")),
        }
    }
}
