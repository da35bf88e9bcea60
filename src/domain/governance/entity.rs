//! Governance config entities
//!
//! These records map one-to-one onto the governance YAML file. They are built
//! once per audit run and never mutated.

use std::collections::{BTreeMap, BTreeSet};

use serde::Deserialize;

use crate::domain::AuditError;

/// A team declared in the governance config.
///
/// A team either carries its own `members`/`maintainers`, or is a *formation*:
/// its effective membership is the union of the teams listed in `formation`.
#[derive(Debug, Clone, Deserialize)]
pub struct Team {
    pub name: String,
    #[serde(default)]
    pub members: Vec<String>,
    #[serde(default)]
    pub maintainers: Vec<String>,
    #[serde(default)]
    pub parent: Option<String>,
    #[serde(default)]
    pub formation: Vec<String>,
}

impl Team {
    /// A formation team derives its membership entirely from other teams.
    pub fn is_formation(&self) -> bool {
        !self.formation.is_empty()
    }

    /// Members and maintainers combined, ignoring any formation.
    pub fn own_members(&self) -> BTreeSet<String> {
        self.members
            .iter()
            .chain(self.maintainers.iter())
            .cloned()
            .collect()
    }

    /// Logins listed as both member and maintainer, sorted.
    pub fn duplicate_maintainers(&self) -> Vec<String> {
        let members: BTreeSet<&str> = self.members.iter().map(String::as_str).collect();
        let mut duplicates: Vec<String> = self
            .maintainers
            .iter()
            .filter(|m| members.contains(m.as_str()))
            .cloned()
            .collect();
        duplicates.sort();
        duplicates.dedup();
        duplicates
    }
}

/// A repository and its external collaborators.
///
/// The permission value is carried verbatim but never interpreted; only the
/// key set of `external_collaborators` matters to the audit.
#[derive(Debug, Clone, Deserialize)]
pub struct Repository {
    pub name: String,
    #[serde(default)]
    pub external_collaborators: BTreeMap<String, String>,
}

/// Root of the governance config.
#[derive(Debug, Clone, Deserialize)]
pub struct GovernanceConfig {
    pub organization: String,
    pub teams: Vec<Team>,
    pub repositories: Vec<Repository>,
}

impl GovernanceConfig {
    /// Parse the governance YAML document.
    pub fn from_yaml_str(raw: &str) -> Result<Self, AuditError> {
        serde_yaml::from_str(raw).map_err(|e| AuditError::malformed_config(e.to_string()))
    }

    /// Every login that is a team member or maintainer somewhere.
    pub fn governance_members(&self) -> BTreeSet<String> {
        self.teams.iter().flat_map(|t| t.own_members()).collect()
    }

    /// Every login granted repository access as an external collaborator.
    pub fn external_collaborators(&self) -> BTreeSet<String> {
        self.repositories
            .iter()
            .flat_map(|r| r.external_collaborators.keys().cloned())
            .collect()
    }
}
