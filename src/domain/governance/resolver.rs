//! Effective membership resolution
//!
//! A team's effective membership is `members ∪ maintainers`, except for
//! formation teams, which resolve to the recursive union of their component
//! teams. Results are memoized per run so every consumer sees one consistent
//! answer, and an in-progress marker set rejects reference cycles instead of
//! recursing forever.

use std::collections::{BTreeSet, HashMap, HashSet};

use super::graph::GovernanceGraph;
use crate::domain::AuditError;

#[derive(Debug)]
pub struct MembershipResolver<'g, 'a> {
    graph: &'g GovernanceGraph<'a>,
    cache: HashMap<String, BTreeSet<String>>,
    in_progress: HashSet<String>,
}

impl<'g, 'a> MembershipResolver<'g, 'a> {
    pub fn new(graph: &'g GovernanceGraph<'a>) -> Self {
        Self {
            graph,
            cache: HashMap::new(),
            in_progress: HashSet::new(),
        }
    }

    /// Resolve the effective membership of the named team.
    pub fn resolve(&mut self, name: &str) -> Result<BTreeSet<String>, AuditError> {
        if let Some(cached) = self.cache.get(name) {
            return Ok(cached.clone());
        }

        let Some(team) = self.graph.get(name) else {
            return Err(AuditError::UnknownTeam {
                team: name.to_string(),
                reference: name.to_string(),
            });
        };

        if !self.in_progress.insert(name.to_string()) {
            return Err(AuditError::CyclicReference {
                team: name.to_string(),
            });
        }

        let result = if team.is_formation() {
            let mut union = BTreeSet::new();
            let mut outcome = Ok(());
            for component in &team.formation {
                if self.graph.get(component).is_none() {
                    outcome = Err(AuditError::UnknownTeam {
                        team: name.to_string(),
                        reference: component.clone(),
                    });
                    break;
                }
                match self.resolve(component) {
                    Ok(resolved) => union.extend(resolved),
                    Err(e) => {
                        outcome = Err(e);
                        break;
                    }
                }
            }
            outcome.map(|()| union)
        } else {
            Ok(team.own_members())
        };

        self.in_progress.remove(name);

        let resolved = result?;
        self.cache.insert(name.to_string(), resolved.clone());
        Ok(resolved)
    }
}
