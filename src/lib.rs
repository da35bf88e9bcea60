//! Governance Audit
//!
//! Validates a declarative governance config (teams, maintainers, parent
//! relations, repository external collaborators) and cross-checks every
//! referenced identity against the GitHub identity directory. Intended as a
//! gate in an automation pipeline: the first violation aborts the run.

pub mod cli;
pub mod config;
pub mod domain;
pub mod infrastructure;

pub use config::AppConfig;
pub use domain::{AuditError, AuditSummary, Auditor, GovernanceConfig};
