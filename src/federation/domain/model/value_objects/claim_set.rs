use std::collections::HashMap;

use serde_json::{Map, Value};

use super::claim_value::ClaimValue;

/// Claim name carrying the user's team memberships.
pub const TEAM_CLAIM_NAME: &str = "team";

/// The decoded claims of one ID token. Built once per authentication,
/// immutable afterwards; the source of truth for every identity attribute
/// used downstream.
#[derive(Clone, Debug, Default)]
pub struct ClaimSet {
    claims: HashMap<String, ClaimValue>,
}

impl ClaimSet {
    pub fn from_json_object(object: &Map<String, Value>) -> Self {
        let claims = object
            .iter()
            .filter_map(|(name, value)| {
                ClaimValue::from_json(value).map(|claim| (name.clone(), claim))
            })
            .collect();
        Self { claims }
    }

    pub fn get(&self, name: &str) -> Option<&ClaimValue> {
        self.claims.get(name)
    }

    pub fn scalar(&self, name: &str) -> Option<&str> {
        self.claims.get(name).and_then(ClaimValue::as_scalar)
    }

    /// A list-shaped claim, accepting a bare scalar as a one-element list:
    /// a user with a single team membership may receive it unwrapped.
    pub fn string_list(&self, name: &str) -> Option<Vec<String>> {
        match self.claims.get(name)? {
            ClaimValue::Scalar(scalar) => Some(vec![scalar.clone()]),
            ClaimValue::List(items) => Some(items.clone()),
        }
    }
}
