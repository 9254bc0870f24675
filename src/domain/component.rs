//! Supported authorization components and their service defaults.

use std::fmt;
use std::str::FromStr;

use crate::domain::AppError;
use crate::domain::configuration::Configuration;

pub const KAFKA_SERVICE_NAME: &str = "sentry.service.client.kafka.service.name";
pub const SOLR_SERVICE_NAME: &str = "sentry.service.client.solr.service.name";

const KAFKA_DEFAULT_SERVICE: &str = "kafka1";
const SOLR_DEFAULT_SERVICE: &str = "service1";

/// Authorization domain the shell administers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ComponentType {
    Kafka,
    Solr,
}

impl ComponentType {
    pub const ALL: [ComponentType; 2] = [ComponentType::Kafka, ComponentType::Solr];

    /// Identifier the authorization service uses to select the privilege namespace.
    pub fn component_id(&self) -> &'static str {
        match self {
            ComponentType::Kafka => "kafka",
            ComponentType::Solr => "SOLR",
        }
    }

    /// Configuration key holding this component's service name.
    pub fn service_name_key(&self) -> &'static str {
        match self {
            ComponentType::Kafka => KAFKA_SERVICE_NAME,
            ComponentType::Solr => SOLR_SERVICE_NAME,
        }
    }

    pub fn default_service_name(&self) -> &'static str {
        match self {
            ComponentType::Kafka => KAFKA_DEFAULT_SERVICE,
            ComponentType::Solr => SOLR_DEFAULT_SERVICE,
        }
    }

    /// Service instance to administer, from configuration or the built-in fallback.
    pub fn service_name(&self, conf: &Configuration) -> String {
        conf.get_or(self.service_name_key(), self.default_service_name()).to_string()
    }

    fn cli_name(&self) -> &'static str {
        match self {
            ComponentType::Kafka => "kafka",
            ComponentType::Solr => "solr",
        }
    }
}

impl FromStr for ComponentType {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "kafka" => Ok(ComponentType::Kafka),
            "solr" => Ok(ComponentType::Solr),
            _ => Err(AppError::UnsupportedComponent(s.to_string())),
        }
    }
}

impl fmt::Display for ComponentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.cli_name())
    }
}
