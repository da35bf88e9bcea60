//! Audit command - one batch validation pass, non-zero exit on violation

use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use clap::Args;
use tracing::info;

use crate::config::AppConfig;
use crate::domain::{Auditor, GovernanceConfig};
use crate::infrastructure::{logging, GithubDirectory, HttpClient};

#[derive(Args)]
pub struct AuditArgs {
    /// Path to the governance YAML file
    #[arg(long, default_value = "config.yaml")]
    pub config: PathBuf,

    /// Override the organization named in the governance file
    #[arg(long)]
    pub organization: Option<String>,
}

/// Run the audit. Any violation surfaces as an error, which the process
/// turns into a non-zero exit for the surrounding pipeline.
pub async fn run(args: AuditArgs) -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let app_config = AppConfig::load().unwrap_or_default();
    logging::init_logging(&app_config.logging);

    let raw = std::fs::read_to_string(&args.config)
        .map_err(|e| anyhow::anyhow!("{} not found: {}", args.config.display(), e))?;
    let mut governance = GovernanceConfig::from_yaml_str(&raw)?;
    apply_organization_override(&mut governance, args.organization);

    let client = HttpClient::with_timeout(Duration::from_secs(app_config.directory.timeout_secs))?;
    let directory = GithubDirectory::with_base_url(
        client,
        app_config.directory.token.clone(),
        app_config.directory.base_url.as_str(),
    );

    let summary = Auditor::new(Arc::new(directory)).run(&governance).await?;

    info!(
        "Audited {} teams and {} members successfully",
        summary.teams_audited, summary.members_audited
    );
    Ok(())
}

fn apply_organization_override(governance: &mut GovernanceConfig, organization: Option<String>) {
    if let Some(org) = organization {
        governance.organization = org;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    use crate::cli::{Cli, Command};

    #[test]
    fn test_organization_flag_parses() {
        let cli = Cli::parse_from([
            "governance-audit",
            "audit",
            "--config",
            "gov.yaml",
            "--organization",
            "acme-staging",
        ]);
        let Command::Audit(args) = cli.command;
        assert_eq!(args.config, PathBuf::from("gov.yaml"));
        assert_eq!(args.organization.as_deref(), Some("acme-staging"));
    }

    #[test]
    fn test_organization_override_applied() {
        let mut governance = GovernanceConfig::from_yaml_str(
            "organization: acme\nteams: []\nrepositories: []\n",
        )
        .unwrap();

        apply_organization_override(&mut governance, None);
        assert_eq!(governance.organization, "acme");

        apply_organization_override(&mut governance, Some("acme-staging".to_string()));
        assert_eq!(governance.organization, "acme-staging");
    }
}

