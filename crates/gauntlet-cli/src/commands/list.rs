use crate::cli::Collection;
use crate::config::CliConfig;
use anyhow::Result;
use comfy_table::{presets::UTF8_FULL, Table};
use gauntlet_store::{seed, RecordStore};

pub fn execute(config: &CliConfig, collection: Collection) -> Result<()> {
    let store = RecordStore::new(&config.data_dir);
    let inventory = seed::load_inventory(&store)?;

    let mut table = Table::new();
    table.load_preset(UTF8_FULL);

    match collection {
        Collection::TestCases => {
            table.set_header(vec!["ID", "Name", "Tracking URL"]);
            for c in &inventory.test_cases {
                table.add_row(vec![c.id.to_string(), c.name.clone(), c.tracking_url.clone()]);
            }
        }
        Collection::TestDefinitions => {
            table.set_header(vec!["ID", "Name", "Challenge", "Test Case", "Monitor"]);
            for d in &inventory.test_definitions {
                table.add_row(vec![
                    d.id.to_string(),
                    d.name.clone(),
                    d.challenge_def_id.to_string(),
                    d.test_case_id.to_string(),
                    d.monitor.clone(),
                ]);
            }
        }
        Collection::ChallengeDefinitions => {
            table.set_header(vec!["ID", "Name", "Type", "Recipient", "Action"]);
            for d in &inventory.challenge_definitions {
                table.add_row(vec![
                    d.id.to_string(),
                    d.name.clone(),
                    d.challenge_type.to_string(),
                    d.recipient_id.to_string(),
                    d.action.clone(),
                ]);
            }
        }
        Collection::Metrics => {
            table.set_header(vec!["ID", "Name", "Definition"]);
            for m in &inventory.metric_definitions {
                table.add_row(vec![m.id.to_string(), m.name.clone(), m.info.clone()]);
            }
        }
        Collection::Recipients => {
            table.set_header(vec!["ID", "Name", "Access IP", "Username"]);
            for r in &inventory.recipients {
                table.add_row(vec![
                    r.id.to_string(),
                    r.name.clone(),
                    r.access_ip_address.clone(),
                    r.username.clone(),
                ]);
            }
        }
        Collection::PhysicalResources => {
            table.set_header(vec!["ID", "Name", "IP", "MAC"]);
            for r in &inventory.physical_resources {
                table.add_row(vec![
                    r.id.to_string(),
                    r.name.clone(),
                    r.ip_address.clone(),
                    r.mac_address.clone(),
                ]);
            }
        }
        Collection::CloudResources => {
            table.set_header(vec!["ID", "Name", "IP", "URL"]);
            for r in &inventory.cloud_resources {
                table.add_row(vec![
                    r.id.to_string(),
                    r.name.clone(),
                    r.ip_address.clone(),
                    r.url.clone(),
                ]);
            }
        }
        Collection::Vnfs => {
            table.set_header(vec!["ID", "Name", "IP", "URL"]);
            for s in &inventory.vnf_services {
                table.add_row(vec![
                    s.id.to_string(),
                    s.name.clone(),
                    s.ip_address.clone(),
                    s.url.clone(),
                ]);
            }
        }
    }

    println!("{table}");
    Ok(())
}
