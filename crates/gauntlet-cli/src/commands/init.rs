use crate::config::CliConfig;
use anyhow::Result;
use colored::Colorize;
use gauntlet_store::{collection_files, seed, RecordStore};

pub fn execute(config: &CliConfig, force: bool) -> Result<()> {
    let store = RecordStore::new(&config.data_dir);

    if store.exists(collection_files::TEST_DEFINITIONS) && !force {
        println!(
            "{} Catalog already exists at {}. Use --force to regenerate it.",
            "Info:".cyan().bold(),
            config.data_dir.display()
        );
        return Ok(());
    }

    let inventory = seed::seed_all(&store)?;

    println!(
        "{} Catalog written to {}",
        "Success:".green().bold(),
        config.data_dir.display()
    );
    println!("  Test cases:            {}", inventory.test_cases.len());
    println!("  Test definitions:      {}", inventory.test_definitions.len());
    println!("  Challenge definitions: {}", inventory.challenge_definitions.len());
    println!("  Metric definitions:    {}", inventory.metric_definitions.len());
    println!("  Recipients:            {}", inventory.recipients.len());
    println!("  Physical resources:    {}", inventory.physical_resources.len());
    println!("  Cloud resources:       {}", inventory.cloud_resources.len());
    println!("  VNFs/services:         {}", inventory.vnf_services.len());

    Ok(())
}
