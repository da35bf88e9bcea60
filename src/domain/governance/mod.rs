//! Governance domain module
//!
//! The parsed config, the indexed graph over it, effective-membership
//! resolution and the structural invariant checks.

mod checker;
mod entity;
mod graph;
mod resolver;

pub use checker::check_invariants;
pub use entity::{GovernanceConfig, Repository, Team};
pub use graph::GovernanceGraph;
pub use resolver::MembershipResolver;
