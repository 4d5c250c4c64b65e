use crate::cli::Collection;
use crate::config::CliConfig;
use anyhow::{anyhow, Result};
use gauntlet_core::{find_by_id, RecordId};
use gauntlet_store::{seed, RecordStore};

pub fn execute(config: &CliConfig, collection: Collection, id: RecordId) -> Result<()> {
    let store = RecordStore::new(&config.data_dir);
    let inventory = seed::load_inventory(&store)?;

    let missing = |kind: &str| anyhow!("no {kind} with ID {id} in the catalog");

    let text = match collection {
        Collection::TestCases => find_by_id(id, &inventory.test_cases)
            .ok_or_else(|| missing("test case"))?
            .describe(0),
        Collection::TestDefinitions => find_by_id(id, &inventory.test_definitions)
            .ok_or_else(|| missing("test definition"))?
            .describe(&inventory, 0),
        Collection::ChallengeDefinitions => find_by_id(id, &inventory.challenge_definitions)
            .ok_or_else(|| missing("challenge definition"))?
            .describe(&inventory, 0),
        Collection::Metrics => find_by_id(id, &inventory.metric_definitions)
            .ok_or_else(|| missing("metric definition"))?
            .describe(0),
        Collection::Recipients => find_by_id(id, &inventory.recipients)
            .ok_or_else(|| missing("recipient"))?
            .describe(0),
        Collection::PhysicalResources => find_by_id(id, &inventory.physical_resources)
            .ok_or_else(|| missing("physical resource"))?
            .describe(0),
        Collection::CloudResources => find_by_id(id, &inventory.cloud_resources)
            .ok_or_else(|| missing("cloud virtual resource"))?
            .describe(&inventory, 0),
        Collection::Vnfs => find_by_id(id, &inventory.vnf_services)
            .ok_or_else(|| missing("VNF/service"))?
            .describe(&inventory, 0),
    };

    print!("{text}");
    Ok(())
}
