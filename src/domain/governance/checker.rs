//! Structural invariant checks
//!
//! Teams are checked in config order and the run stops at the first
//! violation. Per team: maintainer presence (formation teams are exempt),
//! member/maintainer disjointness, then parent containment walked up the
//! whole ancestor chain. Containment is transitive in the target system, so
//! an identity must be explicit at every intermediate level.

use std::collections::HashSet;

use super::entity::Team;
use super::graph::GovernanceGraph;
use super::resolver::MembershipResolver;
use crate::domain::AuditError;

/// Check every structural invariant over the governance graph.
pub fn check_invariants(
    graph: &GovernanceGraph<'_>,
    resolver: &mut MembershipResolver<'_, '_>,
) -> Result<(), AuditError> {
    for team in graph.teams() {
        check_maintainers(team)?;
        check_disjointness(team)?;
        check_parent_chain(graph, resolver, team)?;
    }
    Ok(())
}

fn check_maintainers(team: &Team) -> Result<(), AuditError> {
    if !team.is_formation() && team.maintainers.is_empty() {
        return Err(AuditError::MissingMaintainer {
            team: team.name.clone(),
        });
    }
    Ok(())
}

fn check_disjointness(team: &Team) -> Result<(), AuditError> {
    let duplicates = team.duplicate_maintainers();
    if !duplicates.is_empty() {
        return Err(AuditError::DuplicateMaintainerMember {
            team: team.name.clone(),
            logins: duplicates,
        });
    }
    Ok(())
}

fn check_parent_chain(
    graph: &GovernanceGraph<'_>,
    resolver: &mut MembershipResolver<'_, '_>,
    team: &Team,
) -> Result<(), AuditError> {
    let mut visited: HashSet<&str> = HashSet::from([team.name.as_str()]);
    let mut current = team;

    while let Some(parent_name) = current.parent.as_deref() {
        let parent = graph.get(parent_name).ok_or_else(|| AuditError::UnknownParent {
            team: current.name.clone(),
            parent: parent_name.to_string(),
        })?;

        let child_members = resolver.resolve(&current.name)?;
        let parent_members = resolver.resolve(parent_name)?;

        if let Some(missing) = child_members.difference(&parent_members).next() {
            return Err(AuditError::ParentContainment {
                child: current.name.clone(),
                parent: parent_name.to_string(),
                login: missing.clone(),
            });
        }

        if !visited.insert(parent_name) {
            return Err(AuditError::CyclicReference {
                team: parent_name.to_string(),
            });
        }
        current = parent;
    }

    Ok(())
}
