use crate::config::CliConfig;
use anyhow::Result;
use chrono::Utc;
use colored::Colorize;
use gauntlet_core::report;
use gauntlet_store::{seed, RecordStore};

pub fn execute(config: &CliConfig) -> Result<()> {
    let store = RecordStore::new(&config.data_dir);
    let inventory = seed::load_inventory(&store)?;

    std::fs::create_dir_all(&config.report_dir)?;
    let path = report::write_definition_snapshot(&config.report_dir, &inventory, Utc::now())?;

    println!(
        "{} Definition snapshot written to {}",
        "Success:".green().bold(),
        path.display()
    );
    Ok(())
}
