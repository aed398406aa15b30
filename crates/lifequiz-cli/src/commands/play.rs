//! The `lifequiz play` command.

use std::io::Write;
use std::path::PathBuf;
use std::time::Duration;

use anyhow::{Context, Result};

use lifequiz_core::engine::Quiz;
use lifequiz_data::{config, load_dataset};

pub async fn execute(
    dataset: Option<PathBuf>,
    no_delay: bool,
    config_path: Option<PathBuf>,
) -> Result<()> {
    let config = config::load_config_from(config_path.as_deref())?;

    let source = super::select_source(dataset, &config.dataset_url);
    let records = load_dataset(source.as_ref()).await;
    let mut quiz = Quiz::generate(&config.quiz_config(), &records);
    tracing::info!(questions = quiz.total_questions(), "quiz generated");

    let stdin = std::io::stdin();
    let total = quiz.total_questions();

    while !quiz.is_finished() {
        let question = quiz.current_question()?;
        println!(
            "\nQuestion {}/{}: {}",
            quiz.current_index() + 1,
            total,
            question.prompt
        );

        let guess = read_guess(&stdin, config.guess_min, config.guess_max)?;
        let verdict = quiz.submit_answer(guess)?;

        match (verdict.correct, verdict.correct_answer) {
            (true, Some(answer)) => println!("Correct! The actual answer is {answer}."),
            (false, Some(answer)) => {
                println!("Wrong! The correct answer is {answer}. You guessed {guess}.")
            }
            (_, None) => println!("No data available for this one; it cannot be scored."),
        }

        if !no_delay {
            tokio::time::sleep(Duration::from_millis(config.advance_delay_ms)).await;
        }
        quiz.advance();
    }

    println!(
        "\nQuiz complete! Your score: {}/{}",
        quiz.final_score(),
        total
    );
    Ok(())
}

/// Prompt until a parseable guess arrives, clamped to the configured bounds.
fn read_guess(stdin: &std::io::Stdin, min: f64, max: f64) -> Result<f64> {
    loop {
        print!("Your guess ({min}-{max}): ");
        std::io::stdout().flush().context("failed to flush prompt")?;

        let mut line = String::new();
        let read = stdin.read_line(&mut line).context("failed to read guess")?;
        if read == 0 {
            anyhow::bail!("input closed before the quiz finished");
        }

        match line.trim().parse::<f64>() {
            Ok(guess) => return Ok(guess.clamp(min, max)),
            Err(_) => println!("Please enter a number."),
        }
    }
}
