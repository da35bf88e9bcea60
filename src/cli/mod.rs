//! CLI module for the governance auditor
//!
//! One subcommand:
//! - `audit`: run a full validation pass over a governance YAML file

pub mod audit;

use clap::{Parser, Subcommand};

/// Governance auditor - validates team and collaborator config against the
/// identity directory
#[derive(Parser)]
#[command(name = "governance-audit")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Audit a governance config file
    Audit(audit::AuditArgs),
}
