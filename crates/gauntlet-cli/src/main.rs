use anyhow::Result;
use clap::Parser;
use tracing::debug;

use gauntlet_cli::{
    cli::{Cli, Commands},
    commands,
    config::CliConfig,
};

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let log_level = if cli.verbose { "debug" } else { "warn" };
    let env_filter = format!(
        "gauntlet_cli={log_level},gauntlet_core={log_level},gauntlet_store={log_level},gauntlet_cloud={log_level}"
    );
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::new(env_filter))
        .init();

    let mut config = CliConfig::load(cli.config)?;
    if let Some(data_dir) = cli.data_dir {
        config.data_dir = data_dir;
    }
    if let Some(report_dir) = cli.report_dir {
        config.report_dir = report_dir;
    }
    debug!(
        data_dir = %config.data_dir.display(),
        report_dir = %config.report_dir.display(),
        "configuration loaded"
    );

    match cli.command {
        Some(Commands::Init { force }) => commands::init::execute(&config, force)?,
        Some(Commands::List { collection }) => commands::list::execute(&config, collection)?,
        Some(Commands::Show { collection, id }) => commands::show::execute(&config, collection, id)?,
        Some(Commands::Run { id }) => commands::run::execute(&config, id).await?,
        Some(Commands::Export) => commands::export::execute(&config)?,
        Some(Commands::Menu) | None => commands::menu::execute(&config).await?,
    }

    Ok(())
}
