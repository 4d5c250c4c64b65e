use crate::commands::run;
use crate::config::CliConfig;
use anyhow::Result;
use colored::Colorize;
use dialoguer::{theme::ColorfulTheme, Select};
use gauntlet_core::TestDefinition;
use gauntlet_store::{seed, RecordStore, StoreError};

const MENU_ITEMS: &[&str] = &[
    "select a test definition",
    "view the selected test definition",
    "start a test execution",
    "exit",
];

pub async fn execute(config: &CliConfig) -> Result<()> {
    let store = RecordStore::new(&config.data_dir);
    let inventory = match seed::load_inventory(&store) {
        Ok(inventory) => inventory,
        Err(StoreError::NotFound(_)) => {
            println!(
                "{} No catalog found at {}. Run `gauntlet init` first.",
                "Error:".red().bold(),
                config.data_dir.display()
            );
            return Ok(());
        }
        Err(err) => return Err(err.into()),
    };

    let theme = ColorfulTheme::default();
    let mut selected: Option<&TestDefinition> = None;

    loop {
        let prompt = match selected {
            Some(def) => format!("Gauntlet (test definition {} selected)", def.id),
            None => "Gauntlet (no test definition selected)".to_string(),
        };
        let choice = Select::with_theme(&theme)
            .with_prompt(prompt)
            .items(MENU_ITEMS)
            .default(0)
            .interact()?;

        match choice {
            0 => {
                let labels: Vec<String> = inventory
                    .test_definitions
                    .iter()
                    .map(|d| format!("{}: {}", d.id, d.name))
                    .collect();
                if labels.is_empty() {
                    println!("{} The catalog has no test definitions.", "Error:".red().bold());
                    continue;
                }
                let picked = Select::with_theme(&theme)
                    .with_prompt("Test definition")
                    .items(&labels)
                    .default(0)
                    .interact()?;
                selected = Some(&inventory.test_definitions[picked]);
            }
            1 => match selected {
                Some(def) => print!("{}", def.describe(&inventory, 0)),
                None => println!("{} Select a test definition first.", "Error:".red().bold()),
            },
            2 => match selected {
                Some(def) => {
                    if let Err(err) = run::run_with_inventory(config, &inventory, def.id).await {
                        println!("{} {err:#}", "Error:".red().bold());
                    }
                }
                None => println!("{} Select a test definition first.", "Error:".red().bold()),
            },
            _ => break,
        }
    }

    Ok(())
}
