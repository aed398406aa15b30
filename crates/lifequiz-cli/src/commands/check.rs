//! The `lifequiz check` command.
//!
//! Surfaces dataset drift before play: which configured entities the dataset
//! actually covers for the configured year, instead of letting a miss
//! silently become an unanswerable question mid-quiz.

use std::path::PathBuf;

use anyhow::Result;
use comfy_table::Table;

use lifequiz_core::lookup::find_value;
use lifequiz_data::{config, load_dataset};

pub async fn execute(dataset: Option<PathBuf>, config_path: Option<PathBuf>) -> Result<()> {
    let config = config::load_config_from(config_path.as_deref())?;

    let source = super::select_source(dataset, &config.dataset_url);
    let records = load_dataset(source.as_ref()).await;

    println!("Dataset: {} records", records.len());
    if records.is_empty() {
        println!("The dataset is empty or unreachable; every question would be unanswerable.");
    }

    let mut table = Table::new();
    table.set_header(vec!["Entity", "Year", "Value"]);

    let mut missing = 0;
    for entity in &config.entities {
        let value = find_value(&records, entity, config.year, &config.value_column);
        let cell = match value {
            Some(v) => v.to_string(),
            None => {
                missing += 1;
                "MISSING".to_string()
            }
        };
        table.add_row(vec![entity.clone(), config.year.to_string(), cell]);
    }

    println!("{table}");

    if missing == 0 {
        println!("All {} entities covered.", config.entities.len());
    } else {
        println!(
            "{missing} of {} entities missing for {}.",
            config.entities.len(),
            config.year
        );
    }

    Ok(())
}
