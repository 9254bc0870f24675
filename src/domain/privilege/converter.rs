//! Translation between operator-typed privilege strings and structured privileges.

use super::{
    ACTION_KEY, AUTHORIZABLE_SEPARATOR, Authorizable, GRANT_OPTION_KEY, KEY_VALUE_SEPARATOR,
    PrivilegeModel, StructuredPrivilege, model_for,
};
use crate::domain::AppError;

/// Converts privilege strings within one component and service namespace.
///
/// A raw privilege is a `->`-separated list of `key=value` parts. `action` and
/// `grantoption` are reserved keys; every other key must be an authorizable type
/// of the bound component, e.g. `host=*->topic=t1->action=read` for Kafka.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenericPrivilegeConverter {
    component: String,
    service: String,
}

impl GenericPrivilegeConverter {
    pub fn new(component: impl Into<String>, service: impl Into<String>) -> Self {
        Self { component: component.into(), service: service.into() }
    }

    pub fn component(&self) -> &str {
        &self.component
    }

    pub fn service(&self) -> &str {
        &self.service
    }

    /// Parse `raw` into a privilege bound to this converter's component and service.
    pub fn to_privilege(&self, raw: &str) -> Result<StructuredPrivilege, AppError> {
        let model = self.model()?;

        let mut authorizables = Vec::new();
        let mut action: Option<String> = None;
        let mut grant_option: Option<bool> = None;

        if raw.trim().is_empty() {
            return Err(AppError::malformed(raw, "privilege is empty"));
        }

        for part in raw.split(AUTHORIZABLE_SEPARATOR) {
            let Some((key, value)) = part.split_once(KEY_VALUE_SEPARATOR) else {
                return Err(AppError::malformed(
                    raw,
                    format!("'{}' is not a key=value pair", part.trim()),
                ));
            };
            let key = key.trim().to_ascii_lowercase();
            let value = value.trim();
            if key.is_empty() || value.is_empty() {
                return Err(AppError::malformed(
                    raw,
                    format!("'{}' must have a non-empty key and value", part.trim()),
                ));
            }

            match key.as_str() {
                ACTION_KEY => {
                    if action.is_some() {
                        return Err(AppError::malformed(raw, "action is given more than once"));
                    }
                    let value = value.to_ascii_lowercase();
                    if !model.is_action(&value) {
                        return Err(AppError::malformed(
                            raw,
                            format!("unknown action '{}' for {}", value, model.component()),
                        ));
                    }
                    action = Some(value);
                }
                GRANT_OPTION_KEY => {
                    let parsed = value.to_ascii_lowercase().parse::<bool>().map_err(|_| {
                        AppError::malformed(
                            raw,
                            format!("grantoption must be true or false, got '{}'", value),
                        )
                    })?;
                    grant_option = Some(parsed);
                }
                kind if model.is_authorizable_type(kind) => {
                    authorizables.push(Authorizable::new(kind, value));
                }
                other => {
                    return Err(AppError::malformed(
                        raw,
                        format!("unknown resource type '{}' for {}", other, model.component()),
                    ));
                }
            }
        }

        let Some(action) = action else {
            return Err(AppError::malformed(raw, "privilege must end with action=<action>"));
        };
        model.validate(raw, &authorizables, &action)?;

        Ok(StructuredPrivilege {
            component: self.component.clone(),
            service_name: self.service.clone(),
            authorizables,
            action,
            grant_option,
        })
    }

    /// Render a privilege back into its canonical string form.
    pub fn to_privilege_string(&self, privilege: &StructuredPrivilege) -> String {
        let mut parts: Vec<String> = privilege
            .authorizables
            .iter()
            .map(|a| format!("{}{}{}", a.kind.to_ascii_lowercase(), KEY_VALUE_SEPARATOR, a.name))
            .collect();
        parts.push(format!("{}{}{}", ACTION_KEY, KEY_VALUE_SEPARATOR, privilege.action));
        if privilege.grant_option == Some(true) {
            parts.push(format!("{}{}true", GRANT_OPTION_KEY, KEY_VALUE_SEPARATOR));
        }
        parts.join(AUTHORIZABLE_SEPARATOR)
    }

    fn model(&self) -> Result<&'static dyn PrivilegeModel, AppError> {
        let model = model_for(&self.component)
            .ok_or_else(|| AppError::UnknownComponent(self.component.clone()))?;
        if self.service.trim().is_empty() {
            return Err(AppError::UnknownService {
                service: self.service.clone(),
                component: self.component.clone(),
            });
        }
        Ok(model)
    }
}
