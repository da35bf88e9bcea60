//! Domain layer - Core audit logic and entities

pub mod audit;
pub mod directory;
pub mod error;
pub mod governance;

pub use audit::{AuditSummary, Auditor};
pub use directory::{DirectoryUser, IdentityDirectory};
pub use error::AuditError;
pub use governance::{
    check_invariants, GovernanceConfig, GovernanceGraph, MembershipResolver, Repository, Team,
};
