use std::{collections::HashMap, path::Path, sync::Arc};

use tokio::sync::RwLock;
use tracing::debug;

use crate::aws_integration::interfaces::acl::parameter_store_facade::ParameterStoreFacade;

use super::{config_error::ConfigError, properties_file::load_properties};

pub const SSM_RESERVED_PREFIX: &str = "ssm::";
pub const PROPERTIES_FILENAME_KEY: &str = "PROPERTIES_FILENAME";
pub const DEFAULT_PROPERTIES_FILENAME: &str = "global.properties";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ValueSource {
    Environment,
    RuntimeProperty,
    PropertiesFile,
    SecretStore,
}

#[derive(Clone, Debug)]
pub struct ResolvedValue {
    pub value: String,
    pub source: ValueSource,
}

enum Resolution {
    Found(ResolvedValue),
    Absent,
    SecretAbsent(String),
}

/// Layered configuration lookup: environment, then runtime properties, then
/// the properties file, first non-missing value wins. A winning value
/// carrying the `ssm::` prefix is a parameter-store reference, resolved
/// remotely and cached for the process lifetime under its unprefixed name.
///
/// The resolver is built once at startup and passed down by reference;
/// nothing here is ambient or static.
pub struct ConfigResolver {
    environment: HashMap<String, String>,
    runtime_properties: HashMap<String, String>,
    file_properties: HashMap<String, String>,
    parameter_store: Arc<dyn ParameterStoreFacade>,
    secret_cache: RwLock<HashMap<String, String>>,
}

impl ConfigResolver {
    pub fn new(
        environment: HashMap<String, String>,
        runtime_properties: HashMap<String, String>,
        file_properties: HashMap<String, String>,
        parameter_store: Arc<dyn ParameterStoreFacade>,
    ) -> Self {
        Self {
            environment,
            runtime_properties,
            file_properties,
            parameter_store,
            secret_cache: RwLock::new(HashMap::new()),
        }
    }

    /// Snapshots the process environment and loads the properties file
    /// named by `PROPERTIES_FILENAME` (default `global.properties`).
    pub fn from_process(parameter_store: Arc<dyn ParameterStoreFacade>) -> Self {
        let environment: HashMap<String, String> = std::env::vars().collect();
        let filename = environment
            .get(PROPERTIES_FILENAME_KEY)
            .filter(|value| !is_missing(value))
            .cloned()
            .unwrap_or_else(|| DEFAULT_PROPERTIES_FILENAME.to_string());
        let file_properties = load_properties(Path::new(&filename));
        Self::new(environment, HashMap::new(), file_properties, parameter_store)
    }

    pub async fn resolve(&self, key: &str) -> Result<Option<ResolvedValue>, ConfigError> {
        match self.lookup(key).await? {
            Resolution::Found(resolved) => Ok(Some(resolved)),
            Resolution::Absent | Resolution::SecretAbsent(_) => Ok(None),
        }
    }

    pub async fn resolve_required(&self, key: &str) -> Result<ResolvedValue, ConfigError> {
        match self.lookup(key).await? {
            Resolution::Found(resolved) => Ok(resolved),
            Resolution::Absent => Err(ConfigError::MissingKey(key.to_string())),
            Resolution::SecretAbsent(parameter_name) => {
                Err(ConfigError::MissingSecret(parameter_name))
            }
        }
    }

    async fn lookup(&self, key: &str) -> Result<Resolution, ConfigError> {
        if key.trim().is_empty() {
            return Err(ConfigError::EmptyKey);
        }

        let Some(local) = self.local_lookup(key) else {
            return Ok(Resolution::Absent);
        };

        if let Some(parameter_name) = local.value.strip_prefix(SSM_RESERVED_PREFIX) {
            return Ok(match self.resolve_secret(parameter_name).await {
                Some(value) => Resolution::Found(ResolvedValue {
                    value,
                    source: ValueSource::SecretStore,
                }),
                None => Resolution::SecretAbsent(parameter_name.to_string()),
            });
        }

        Ok(Resolution::Found(local))
    }

    fn local_lookup(&self, key: &str) -> Option<ResolvedValue> {
        let layers = [
            (&self.environment, ValueSource::Environment),
            (&self.runtime_properties, ValueSource::RuntimeProperty),
            (&self.file_properties, ValueSource::PropertiesFile),
        ];
        layers.into_iter().find_map(|(values, source)| {
            values
                .get(key)
                .filter(|value| !is_missing(value))
                .map(|value| ResolvedValue {
                    value: value.clone(),
                    source,
                })
        })
    }

    /// Remote lookups are expensive, so hits are cached for the process
    /// lifetime. Failures are swallowed to "absent" and never cached, so a
    /// later retry can succeed without a restart.
    async fn resolve_secret(&self, parameter_name: &str) -> Option<String> {
        {
            let cache = self.secret_cache.read().await;
            if let Some(hit) = cache.get(parameter_name) {
                return Some(hit.clone());
            }
        }

        match self.parameter_store.get_parameter(parameter_name).await {
            Ok(Some(value)) if !is_missing(&value) => {
                self.secret_cache
                    .write()
                    .await
                    .insert(parameter_name.to_string(), value.clone());
                Some(value)
            }
            Ok(_) => None,
            Err(error) => {
                debug!(parameter = parameter_name, %error, "parameter store lookup failed");
                None
            }
        }
    }
}

/// A misconfigured source may hand us the literal string "null"; treat it
/// the same as an unset value.
fn is_missing(value: &str) -> bool {
    value.trim().is_empty() || value == "null"
}
