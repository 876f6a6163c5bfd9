//! Eval command handler: best five-card hand out of 5-7 cards.

use crate::error::CliError;
use crate::ui::format_cards;
use holdem_engine::cards::parse_cards;
use holdem_engine::hand::evaluate;
use std::collections::HashSet;
use std::io::Write;

pub fn handle_eval_command(cards: &str, out: &mut dyn Write) -> Result<(), CliError> {
    let cards = parse_cards(cards)?;
    if cards.len() > 7 {
        return Err(CliError::InvalidInput(format!(
            "at most 7 cards can be evaluated, got {}",
            cards.len()
        )));
    }
    let mut seen = HashSet::with_capacity(cards.len());
    if let Some(dup) = cards.iter().find(|c| !seen.insert(**c)) {
        return Err(CliError::InvalidInput(format!(
            "card {} appears more than once",
            dup
        )));
    }

    let hand = evaluate(&cards)?;
    writeln!(out, "{}", hand.description)?;
    writeln!(out, "Ranking: {}", hand.ranking)?;
    writeln!(out, "Best five: {}", format_cards(&hand.best_five))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn eval(cards: &str) -> Result<String, CliError> {
        let mut out = Vec::new();
        handle_eval_command(cards, &mut out)?;
        Ok(String::from_utf8(out).unwrap())
    }

    #[test]
    fn describes_the_best_hand() {
        let output = eval("Ah Kh Qh Jh Th 2c 3d").unwrap();
        assert!(output.starts_with("Royal Flush\n"));
        assert!(output.contains("Best five: Ah Kh Qh Jh Th"));

        let output = eval("Kc Kd 7s 7h 2c").unwrap();
        assert!(output.starts_with("Two Pair, Kings and Sevens"));
    }

    #[test]
    fn rejects_bad_card_counts_and_duplicates() {
        assert!(matches!(eval("Ah Kh"), Err(CliError::InvalidInput(_))));
        assert!(eval("Ah Kh Qh Jh Th 2c 3d 4d").is_err());
        let err = eval("Ah Ah Qh Jh Th").unwrap_err();
        assert!(err.to_string().contains("Ah"));
    }
}
