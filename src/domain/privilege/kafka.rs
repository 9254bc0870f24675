//! Kafka privilege grammar.
//!
//! Every Kafka privilege is anchored on a host and names exactly one resource:
//! `host=<host>-><resource>=<name>->action=<action>`.

use super::{Authorizable, PrivilegeModel};
use crate::domain::AppError;

const HOST: &str = "host";
const CLUSTER: &str = "cluster";
const TOPIC: &str = "topic";
const CONSUMER_GROUP: &str = "consumergroup";
const TRANSACTIONAL_ID: &str = "transactionalid";

const ALL: &str = "all";
const WILDCARD: &str = "*";

pub(super) struct KafkaModel;

impl KafkaModel {
    fn resource_actions(resource: &str) -> &'static [&'static str] {
        match resource {
            CLUSTER => &["create", "describe", "alter", "clusteraction", "idempotentwrite"],
            TOPIC => &["read", "write", "create", "delete", "alter", "describe"],
            CONSUMER_GROUP => &["read", "describe"],
            TRANSACTIONAL_ID => &["write", "describe"],
            _ => &[],
        }
    }
}

impl PrivilegeModel for KafkaModel {
    fn component(&self) -> &'static str {
        "kafka"
    }

    fn authorizable_types(&self) -> &'static [&'static str] {
        &[HOST, CLUSTER, TOPIC, CONSUMER_GROUP, TRANSACTIONAL_ID]
    }

    fn actions(&self) -> &'static [&'static str] {
        &[
            ALL,
            "read",
            "write",
            "create",
            "delete",
            "alter",
            "describe",
            "clusteraction",
            "idempotentwrite",
            WILDCARD,
        ]
    }

    fn validate(
        &self,
        raw: &str,
        authorizables: &[Authorizable],
        action: &str,
    ) -> Result<(), AppError> {
        let Some((host, resources)) = authorizables.split_first() else {
            return Err(AppError::malformed(raw, "Kafka privilege must name a host"));
        };
        if host.kind != HOST {
            return Err(AppError::malformed(raw, "Kafka privilege must start with host=<host>"));
        }

        let resource = match resources {
            [resource] => resource,
            [] => {
                return Err(AppError::malformed(
                    raw,
                    "Kafka privilege must name a cluster, topic, consumergroup or transactionalid",
                ));
            }
            _ => {
                return Err(AppError::malformed(
                    raw,
                    "Kafka privilege may name only one resource after the host",
                ));
            }
        };
        if resource.kind == HOST {
            return Err(AppError::malformed(raw, "host may appear only once"));
        }

        if action == ALL || action == WILDCARD {
            return Ok(());
        }
        if !Self::resource_actions(&resource.kind).contains(&action) {
            return Err(AppError::malformed(
                raw,
                format!("action '{}' is not valid for {}", action, resource.kind),
            ));
        }
        Ok(())
    }
}
