use super::{Authorizable, kafka::KafkaModel, solr::SolrModel};
use crate::domain::AppError;

/// Component-specific privilege grammar.
pub trait PrivilegeModel: Sync {
    /// Component identifier this model serves.
    fn component(&self) -> &'static str;

    /// Authorizable types the component understands, lower-case.
    fn authorizable_types(&self) -> &'static [&'static str];

    /// Actions the component understands, lower-case.
    fn actions(&self) -> &'static [&'static str];

    /// Check the shape of a parsed privilege. `raw` is only used for error messages.
    fn validate(
        &self,
        raw: &str,
        authorizables: &[Authorizable],
        action: &str,
    ) -> Result<(), AppError>;

    fn is_authorizable_type(&self, kind: &str) -> bool {
        self.authorizable_types().contains(&kind)
    }

    fn is_action(&self, action: &str) -> bool {
        self.actions().contains(&action)
    }
}

static KAFKA: KafkaModel = KafkaModel;
static SOLR: SolrModel = SolrModel;

/// Resolve the grammar registered for a component identifier.
pub fn model_for(component: &str) -> Option<&'static dyn PrivilegeModel> {
    let models: [&'static dyn PrivilegeModel; 2] = [&KAFKA, &SOLR];
    models.into_iter().find(|model| model.component().eq_ignore_ascii_case(component))
}
