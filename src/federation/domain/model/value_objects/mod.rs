pub mod claim_set;
pub mod claim_value;
pub mod team_role_mapping;
