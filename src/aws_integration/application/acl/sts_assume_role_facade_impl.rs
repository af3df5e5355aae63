use async_trait::async_trait;
use chrono::{DateTime, Utc};

use crate::aws_integration::{
    domain::model::enums::aws_integration_error::AwsIntegrationError,
    interfaces::acl::sts_facade::{AssumeRoleSpec, FederatedCredentials, StsFacade},
};

pub struct StsAssumeRoleFacadeImpl {
    client: aws_sdk_sts::Client,
}

impl StsAssumeRoleFacadeImpl {
    pub async fn from_environment(region: &str) -> Self {
        let config = aws_config::defaults(aws_config::BehaviorVersion::latest())
            .region(aws_config::Region::new(region.to_owned()))
            .load()
            .await;
        Self {
            client: aws_sdk_sts::Client::new(&config),
        }
    }
}

#[async_trait]
impl StsFacade for StsAssumeRoleFacadeImpl {
    async fn assume_role(
        &self,
        spec: AssumeRoleSpec,
    ) -> Result<FederatedCredentials, AwsIntegrationError> {
        let mut request = self
            .client
            .assume_role()
            .role_arn(&spec.role_arn)
            .role_session_name(&spec.session_name);

        for (key, value) in &spec.tags {
            let tag = aws_sdk_sts::types::Tag::builder()
                .key(key)
                .value(value)
                .build()
                .map_err(|error| AwsIntegrationError::InvalidRequest(error.to_string()))?;
            request = request.tags(tag);
        }

        let response = request
            .send()
            .await
            .map_err(|error| AwsIntegrationError::Unavailable(error.to_string()))?;

        let credentials = response.credentials().ok_or_else(|| {
            AwsIntegrationError::Unavailable("STS returned no credentials".to_string())
        })?;

        Ok(FederatedCredentials {
            access_key_id: credentials.access_key_id().to_string(),
            secret_access_key: credentials.secret_access_key().to_string(),
            session_token: credentials.session_token().to_string(),
            expiration: parse_expiration(credentials.expiration())?,
        })
    }
}

fn parse_expiration(
    expiration: &aws_sdk_sts::primitives::DateTime,
) -> Result<DateTime<Utc>, AwsIntegrationError> {
    let epoch_seconds = expiration.as_secs_f64();
    let seconds = epoch_seconds.floor() as i64;
    let nanoseconds = ((epoch_seconds - seconds as f64) * 1_000_000_000.0) as u32;
    DateTime::from_timestamp(seconds, nanoseconds).ok_or_else(|| {
        AwsIntegrationError::Unavailable(format!("unparseable credential expiration: {expiration}"))
    })
}
