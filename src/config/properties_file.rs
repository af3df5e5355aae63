use std::{collections::HashMap, path::Path};

use tracing::info;

/// Parses `key=value` properties. Blank lines and `#` comments are ignored,
/// keys and values are trimmed.
pub fn parse_properties(content: &str) -> HashMap<String, String> {
    content
        .lines()
        .filter_map(|line| {
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') {
                return None;
            }
            let (key, value) = line.split_once('=')?;
            Some((key.trim().to_string(), value.trim().to_string()))
        })
        .collect()
}

/// Loads a properties file. A missing file yields an empty map: a
/// deployment may configure everything through the environment.
pub fn load_properties(path: &Path) -> HashMap<String, String> {
    match std::fs::read_to_string(path) {
        Ok(content) => parse_properties(&content),
        Err(_) => {
            info!(path = %path.display(), "properties file does not exist");
            HashMap::new()
        }
    }
}
