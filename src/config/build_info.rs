use std::path::Path;

use super::{config_error::ConfigError, properties_file::load_properties};

pub const GIT_PROPERTIES_FILENAME: &str = "git.properties";
pub const GIT_COMMIT_ID_DESCRIBE_KEY: &str = "git.commit.id.describe";
pub const GIT_COMMIT_TIME_KEY: &str = "git.commit.time";

/// Build metadata stamped into `git.properties` at release time. Loading
/// fails when either key is absent.
#[derive(Clone, Debug)]
pub struct BuildInfo {
    version: String,
}

impl BuildInfo {
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let properties = load_properties(path);
        match (
            properties.get(GIT_COMMIT_TIME_KEY),
            properties.get(GIT_COMMIT_ID_DESCRIBE_KEY),
        ) {
            (Some(commit_time), Some(describe)) => Ok(Self {
                version: format!("{commit_time}-{describe}"),
            }),
            _ => Err(ConfigError::MissingBuildInfo(path.display().to_string())),
        }
    }

    pub fn version(&self) -> &str {
        &self.version
    }
}
