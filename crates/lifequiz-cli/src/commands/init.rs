//! The `lifequiz init` command.

use anyhow::Result;

pub fn execute() -> Result<()> {
    if std::path::Path::new("lifequiz.toml").exists() {
        println!("lifequiz.toml already exists, skipping.");
    } else {
        std::fs::write("lifequiz.toml", SAMPLE_CONFIG)?;
        println!("Created lifequiz.toml");
    }

    println!("\nNext steps:");
    println!("  1. Adjust entities, year, or tolerance in lifequiz.toml");
    println!("  2. Run: lifequiz check");
    println!("  3. Run: lifequiz play");

    Ok(())
}

const SAMPLE_CONFIG: &str = r#"# lifequiz configuration

dataset_url = "https://ourworldindata.org/grapher/life-expectancy.csv"
entities = ["World", "United States", "China", "Africa", "Europe"]
year = 2023
tolerance = 2.0
advance_delay_ms = 2000
value_column = "Period life expectancy at birth - Sex: total - Age: 0"
guess_min = 0.0
guess_max = 100.0
"#;
