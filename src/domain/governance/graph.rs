//! Governance graph - indexed view over the parsed config

use std::collections::HashMap;

use super::entity::{GovernanceConfig, Repository, Team};
use crate::domain::AuditError;

/// Teams indexed by name, preserving config order for deterministic
/// diagnostics, plus the repository list.
#[derive(Debug)]
pub struct GovernanceGraph<'a> {
    organization: &'a str,
    teams: Vec<&'a Team>,
    index: HashMap<&'a str, &'a Team>,
    repositories: &'a [Repository],
}

impl<'a> GovernanceGraph<'a> {
    /// Index the config. Fails if two teams share a name.
    pub fn build(config: &'a GovernanceConfig) -> Result<Self, AuditError> {
        let mut index = HashMap::with_capacity(config.teams.len());
        let mut teams = Vec::with_capacity(config.teams.len());

        for team in &config.teams {
            if index.insert(team.name.as_str(), team).is_some() {
                return Err(AuditError::malformed_config(format!(
                    "duplicate team name '{}'",
                    team.name
                )));
            }
            teams.push(team);
        }

        Ok(Self {
            organization: &config.organization,
            teams,
            index,
            repositories: &config.repositories,
        })
    }

    pub fn organization(&self) -> &str {
        self.organization
    }

    /// Teams in config order.
    pub fn teams(&self) -> impl Iterator<Item = &'a Team> + '_ {
        self.teams.iter().copied()
    }

    pub fn team_count(&self) -> usize {
        self.teams.len()
    }

    pub fn get(&self, name: &str) -> Option<&'a Team> {
        self.index.get(name).copied()
    }

    pub fn repositories(&self) -> &'a [Repository] {
        self.repositories
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::governance::entity::GovernanceConfig;

    fn config(raw: &str) -> GovernanceConfig {
        GovernanceConfig::from_yaml_str(raw).unwrap()
    }

    #[test]
    fn test_build_indexes_teams() {
        let config = config(
            r#"
organization: acme
teams:
  - name: eng
    maintainers: [dave]
  - name: ops
    maintainers: [erin]
repositories: []
"#,
        );
        let graph = GovernanceGraph::build(&config).unwrap();

        assert_eq!(graph.team_count(), 2);
        assert_eq!(graph.get("eng").unwrap().name, "eng");
        assert!(graph.get("missing").is_none());
    }

    #[test]
    fn test_build_preserves_config_order() {
        let config = config(
            r#"
organization: acme
teams:
  - name: zeta
  - name: alpha
repositories: []
"#,
        );
        let graph = GovernanceGraph::build(&config).unwrap();
        let names: Vec<&str> = graph.teams().map(|t| t.name.as_str()).collect();
        assert_eq!(names, vec!["zeta", "alpha"]);
    }

    #[test]
    fn test_duplicate_team_name_rejected() {
        let config = config(
            r#"
organization: acme
teams:
  - name: eng
  - name: eng
repositories: []
"#,
        );
        let err = GovernanceGraph::build(&config).unwrap_err();
        assert_eq!(
            err,
            AuditError::malformed_config("duplicate team name 'eng'")
        );
    }
}
