use clap::Parser;
use governance_audit::cli::{self, Cli, Command};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Command::Audit(args) => cli::audit::run(args).await,
    }
}
