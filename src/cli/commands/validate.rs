//! Validate card numbers

use std::io::{self, BufRead};

use log::debug;

use crate::cli::app::DisplayOptions;
use cardcheck::CardValidator;
use cardcheck::output::{CardReport, ValidateResult};

/// Validate each number, or each non-blank stdin line when none are given
pub fn validate(numbers: &[String], display: DisplayOptions) -> anyhow::Result<()> {
    let inputs = if numbers.is_empty() {
        debug!("no numbers on the command line, reading stdin");
        read_stdin_numbers()?
    } else {
        numbers.to_vec()
    };

    let cards = inputs
        .iter()
        .map(|raw| CardReport::from_validator(&CardValidator::new(raw.as_str()), display.mask))
        .collect();
    let result = ValidateResult::new(cards);

    result.render(display.mode);

    if result.checked == 0 {
        anyhow::bail!("no card numbers to validate");
    }

    if !result.passed {
        anyhow::bail!("{} invalid card number(s)", result.invalid);
    }

    Ok(())
}

fn read_stdin_numbers() -> io::Result<Vec<String>> {
    let mut numbers = Vec::new();
    for line in io::stdin().lock().lines() {
        let line = line?;
        let trimmed = line.trim();
        if !trimmed.is_empty() {
            numbers.push(trimmed.to_string());
        }
    }
    Ok(numbers)
}
