use std::collections::HashSet;

use serde::Deserialize;

use crate::config::{app_config::TEAM_TO_ROLE_MAP_KEY, config_error::ConfigError};

#[derive(Clone, Debug, Deserialize, PartialEq, Eq)]
pub struct TeamRoleEntry {
    #[serde(rename = "teamId")]
    pub team_id: String,
    #[serde(rename = "roleArn")]
    pub role_arn: String,
}

/// Ordered team-to-role mapping. Insertion order defines resolution
/// precedence: a user in several configured teams gets the role of the team
/// listed first in configuration, not the one listed first in the user's
/// claims. Changing this would change authorization outcomes.
#[derive(Clone, Debug, Default)]
pub struct TeamRoleMapping {
    entries: Vec<TeamRoleEntry>,
}

impl TeamRoleMapping {
    /// Duplicate team ids collapse to a single entry: the first occurrence
    /// keeps its position, the last configured role wins.
    pub fn new(entries: Vec<TeamRoleEntry>) -> Self {
        let mut deduped: Vec<TeamRoleEntry> = Vec::with_capacity(entries.len());
        for entry in entries {
            match deduped
                .iter_mut()
                .find(|existing| existing.team_id == entry.team_id)
            {
                Some(existing) => existing.role_arn = entry.role_arn,
                None => deduped.push(entry),
            }
        }
        Self { entries: deduped }
    }

    /// Parses the configured JSON array of `{"teamId", "roleArn"}` objects.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let entries: Vec<TeamRoleEntry> =
            serde_json::from_str(json).map_err(|error| ConfigError::InvalidValue {
                key: TEAM_TO_ROLE_MAP_KEY.to_string(),
                reason: error.to_string(),
            })?;
        Ok(Self::new(entries))
    }

    /// First configured entry whose team the caller claims. No match is a
    /// normal outcome, not an error.
    pub fn resolve(&self, claimed_teams: &HashSet<String>) -> Option<&TeamRoleEntry> {
        self.entries
            .iter()
            .find(|entry| claimed_teams.contains(&entry.team_id))
    }

    pub fn team_ids(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|entry| entry.team_id.as_str())
    }
}
