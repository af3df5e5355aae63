use std::collections::HashMap;

use async_trait::async_trait;
use chrono::{DateTime, Utc};

use crate::aws_integration::domain::model::enums::aws_integration_error::AwsIntegrationError;

/// Input for one role assumption: the resolved role, the human-readable
/// session name, and the namespaced session tags.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AssumeRoleSpec {
    pub role_arn: String,
    pub session_name: String,
    pub tags: HashMap<String, String>,
}

/// Short-lived federated credentials for one console session. Used once to
/// build a console login URL, never persisted.
#[derive(Clone, Debug)]
pub struct FederatedCredentials {
    pub access_key_id: String,
    pub secret_access_key: String,
    pub session_token: String,
    pub expiration: DateTime<Utc>,
}

#[async_trait]
pub trait StsFacade: Send + Sync {
    async fn assume_role(
        &self,
        spec: AssumeRoleSpec,
    ) -> Result<FederatedCredentials, AwsIntegrationError>;
}
