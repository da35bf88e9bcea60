//! Audit orchestration
//!
//! Runs the pipeline stages in order over one parsed config: graph build,
//! invariant checks, then the identity cross-check against the directory.
//! The first violation aborts the run; there is no aggregation.

use std::collections::{BTreeSet, HashSet};
use std::sync::Arc;

use tracing::debug;

use crate::domain::directory::IdentityDirectory;
use crate::domain::governance::{
    check_invariants, GovernanceConfig, GovernanceGraph, MembershipResolver,
};
use crate::domain::AuditError;

/// Success report for a completed audit run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AuditSummary {
    pub teams_audited: usize,
    /// Distinct identities checked: governance members plus collaborators.
    pub members_audited: usize,
}

/// One-shot auditor over a governance config.
pub struct Auditor {
    directory: Arc<dyn IdentityDirectory>,
}

impl Auditor {
    pub fn new(directory: Arc<dyn IdentityDirectory>) -> Self {
        Self { directory }
    }

    /// Run the full audit. All-or-nothing: either every invariant and every
    /// identity checks out, or the first failure is returned.
    pub async fn run(&self, config: &GovernanceConfig) -> Result<AuditSummary, AuditError> {
        let graph = GovernanceGraph::build(config)?;
        debug!(teams = graph.team_count(), "governance graph built");

        let mut resolver = MembershipResolver::new(&graph);
        check_invariants(&graph, &mut resolver)?;
        debug!("structural invariants hold");

        let members_audited = self.cross_check_identities(config).await?;

        Ok(AuditSummary {
            teams_audited: graph.team_count(),
            members_audited,
        })
    }

    /// Validate every referenced identity against the directory, one lookup
    /// at a time in sorted order. Org membership is required for governance
    /// members only; repository collaborators are exempt.
    async fn cross_check_identities(
        &self,
        config: &GovernanceConfig,
    ) -> Result<usize, AuditError> {
        let governance_members = config.governance_members();
        let mut identities: BTreeSet<String> = governance_members.clone();
        identities.extend(config.external_collaborators());

        // One snapshot up front; membership changes mid-run are not observed.
        let org_members: HashSet<String> = self
            .directory
            .list_org_members(&config.organization)
            .await?
            .into_iter()
            .collect();
        debug!(
            organization = %config.organization,
            members = org_members.len(),
            "fetched org member snapshot"
        );

        for login in &identities {
            let user = self
                .directory
                .lookup_user(login)
                .await?
                .ok_or_else(|| AuditError::UnknownIdentity {
                    login: login.clone(),
                })?;

            if user.login != *login {
                return Err(AuditError::IdentityCaseMismatch {
                    configured: login.clone(),
                    canonical: user.login,
                });
            }

            if governance_members.contains(login) && !org_members.contains(login) {
                return Err(AuditError::NotOrgMember {
                    login: login.clone(),
                    organization: config.organization.clone(),
                });
            }
        }

        Ok(identities.len())
    }
}
