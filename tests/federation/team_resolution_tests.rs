use std::collections::HashSet;

use synapse_aws_console_login::federation::domain::model::value_objects::team_role_mapping::TeamRoleMapping;

use crate::support::{fixtures::TEAM_B_ROLE_ARN, sample_mapping};

fn claimed(teams: &[&str]) -> HashSet<String> {
    teams.iter().map(|team| team.to_string()).collect()
}

#[test]
fn resolves_the_first_configured_team_present_in_the_claims() {
    let mapping = sample_mapping();

    let entry = mapping
        .resolve(&claimed(&["t2"]))
        .expect("t2 is configured");

    assert_eq!(entry.team_id, "t2");
    assert_eq!(entry.role_arn, TEAM_B_ROLE_ARN);
}

#[test]
fn configuration_order_beats_claim_order() {
    let mapping = sample_mapping();

    // The claimed set carries both teams; the first configured one wins.
    let entry = mapping
        .resolve(&claimed(&["t2", "t1"]))
        .expect("both teams are configured");

    assert_eq!(entry.team_id, "t1");
}

#[test]
fn unknown_teams_resolve_to_none() {
    let mapping = sample_mapping();

    assert!(mapping.resolve(&claimed(&["t9"])).is_none());
}

#[test]
fn empty_claimed_set_resolves_to_none() {
    let mapping = sample_mapping();

    assert!(mapping.resolve(&HashSet::new()).is_none());
}

#[test]
fn duplicated_team_id_keeps_its_position_and_the_last_role() {
    let mapping = TeamRoleMapping::from_json(
        r#"[{"teamId":"t1","roleArn":"arn:aws:iam::1:role/A"},
            {"teamId":"t2","roleArn":"arn:aws:iam::1:role/B"},
            {"teamId":"t1","roleArn":"arn:aws:iam::1:role/C"}]"#,
    )
    .expect("mapping should parse");

    let ids: Vec<&str> = mapping.team_ids().collect();
    assert_eq!(ids, vec!["t1", "t2"]);

    let entry = mapping
        .resolve(&claimed(&["t1"]))
        .expect("t1 is configured");
    assert_eq!(entry.role_arn, "arn:aws:iam::1:role/C");
}

#[test]
fn team_ids_iterate_in_configured_order() {
    let mapping = sample_mapping();

    let ids: Vec<&str> = mapping.team_ids().collect();

    assert_eq!(ids, vec!["t1", "t2"]);
}
