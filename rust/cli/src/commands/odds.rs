//! Odds command handler: pot odds and the EV of calling.

use crate::error::CliError;
use crate::ui::format_chips;
use holdem_engine::odds::{expected_value, pot_odds};
use std::io::Write;

pub fn handle_odds_command(
    pot: f64,
    call: f64,
    equity: Option<f64>,
    out: &mut dyn Write,
) -> Result<(), CliError> {
    if !pot.is_finite() || pot < 0.0 || !call.is_finite() || call < 0.0 {
        return Err(CliError::InvalidInput(
            "pot and call must be non-negative amounts".into(),
        ));
    }
    writeln!(
        out,
        "Pot odds: {:.1}% (call {} into {})",
        pot_odds(pot, call),
        format_chips(call),
        format_chips(pot)
    )?;

    let Some(eq) = equity else {
        return Ok(());
    };
    if !(0.0..=100.0).contains(&eq) {
        return Err(CliError::InvalidInput(format!(
            "equity must be within [0, 100], got {}",
            eq
        )));
    }
    let ev = expected_value(pot, call, eq);
    writeln!(out, "EV: {:+.2}", ev)?;
    writeln!(
        out,
        "Decision: {}",
        if ev >= 0.0 { "call" } else { "fold" }
    )?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn odds(pot: f64, call: f64, equity: Option<f64>) -> Result<String, CliError> {
        let mut out = Vec::new();
        handle_odds_command(pot, call, equity, &mut out)?;
        Ok(String::from_utf8(out).unwrap())
    }

    #[test]
    fn prints_pot_odds_and_ev() {
        let output = odds(100.0, 50.0, Some(40.0)).unwrap();
        assert!(output.contains("Pot odds: 33.3% (call 50 into 100)"));
        assert!(output.contains("EV: +10.00"));
        assert!(output.contains("Decision: call"));

        let output = odds(100.0, 50.0, Some(20.0)).unwrap();
        assert!(output.contains("EV: -20.00"));
        assert!(output.contains("Decision: fold"));
    }

    #[test]
    fn free_call_and_bad_input() {
        assert!(odds(10.0, 0.0, None).unwrap().contains("Pot odds: 100.0%"));
        assert!(odds(-1.0, 5.0, None).is_err());
        assert!(odds(10.0, 5.0, Some(150.0)).is_err());
    }
}
