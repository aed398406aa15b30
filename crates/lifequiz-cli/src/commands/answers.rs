//! The `lifequiz answers` command.

use std::path::PathBuf;

use anyhow::Result;
use comfy_table::Table;

use lifequiz_core::engine::Quiz;
use lifequiz_data::{config, load_dataset};

pub async fn execute(dataset: Option<PathBuf>, config_path: Option<PathBuf>) -> Result<()> {
    let config = config::load_config_from(config_path.as_deref())?;

    let source = super::select_source(dataset, &config.dataset_url);
    let records = load_dataset(source.as_ref()).await;
    let quiz = Quiz::generate(&config.quiz_config(), &records);

    let mut table = Table::new();
    table.set_header(vec!["#", "Question", "Answer"]);

    for (i, question) in quiz.questions().iter().enumerate() {
        let answer = question
            .correct_answer
            .map(|v| v.to_string())
            .unwrap_or_else(|| "unavailable".to_string());
        table.add_row(vec![(i + 1).to_string(), question.prompt.clone(), answer]);
    }

    println!("{table}");
    Ok(())
}
