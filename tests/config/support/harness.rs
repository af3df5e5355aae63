use std::{collections::HashMap, sync::Arc};

use synapse_aws_console_login::config::config_resolver::ConfigResolver;

use super::fakes::FakeParameterStoreFacade;

pub struct ResolverHarness {
    pub parameter_store: Arc<FakeParameterStoreFacade>,
    pub resolver: ConfigResolver,
}

pub fn create_resolver_harness(
    environment: &[(&str, &str)],
    runtime_properties: &[(&str, &str)],
    file_properties: &[(&str, &str)],
) -> ResolverHarness {
    let parameter_store = Arc::new(FakeParameterStoreFacade::new());
    let resolver = ConfigResolver::new(
        to_map(environment),
        to_map(runtime_properties),
        to_map(file_properties),
        parameter_store.clone(),
    );
    ResolverHarness {
        parameter_store,
        resolver,
    }
}

fn to_map(pairs: &[(&str, &str)]) -> HashMap<String, String> {
    pairs
        .iter()
        .map(|(key, value)| (key.to_string(), value.to_string()))
        .collect()
}
