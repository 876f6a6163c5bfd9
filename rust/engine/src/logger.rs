use std::fs::{create_dir_all, File};
use std::io::{BufWriter, Write};
use std::path::Path;

use chrono::{SecondsFormat, Utc};
use serde::{Deserialize, Serialize};

use crate::cards::Card;
use crate::engine::ShowdownResult;
use crate::game::{GameState, Street};
use crate::player::{Chips, SeatId};

/// What a player did, as recorded in the action history.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ActionKind {
    Fold,
    Check,
    Call,
    Raise,
    AllIn,
}

/// Records a single player action during a hand.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ActionRecord {
    pub seat: SeatId,
    pub seat_index: usize,
    pub action: ActionKind,
    /// Chips moved for a call; new street total for a raise or all-in.
    pub amount: Chips,
    pub street: Street,
    /// RFC3339
    pub timestamp: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeatStack {
    pub seat: SeatId,
    pub stack: Chips,
}

/// Summary of a finished hand, serialized one per line to the history file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HandHistory {
    /// Format: YYYYMMDD-NNNNNN
    pub hand_id: String,
    pub hand_number: u64,
    pub hero_cards: Vec<Card>,
    pub community_cards: Vec<Card>,
    pub actions: Vec<ActionRecord>,
    pub pot: Chips,
    pub player_stacks: Vec<SeatStack>,
    #[serde(default)]
    pub winners: Vec<SeatId>,
    #[serde(default)]
    pub winning_hand: Option<String>,
    #[serde(default)]
    pub winning_cards: Vec<Card>,
    #[serde(default)]
    pub ts: Option<String>,
}

impl HandHistory {
    /// Builds a history entry from the table state, typically right after
    /// [`crate::engine::BettingEngine::settle_showdown`].
    pub fn from_state(
        hand_id: String,
        state: &GameState,
        showdown: Option<&ShowdownResult>,
    ) -> Self {
        let hero_cards = state
            .players
            .iter()
            .find(|p| p.seat == SeatId::Hero)
            .map(|p| p.hole_cards.clone())
            .unwrap_or_default();
        let pot = showdown.map_or_else(|| state.total_pot(), |s| s.total_pot);
        let winners = showdown
            .map(|s| {
                s.winners
                    .iter()
                    .filter_map(|&i| state.players.get(i).map(|p| p.seat))
                    .collect()
            })
            .unwrap_or_default();
        let (winning_hand, winning_cards) = match showdown.and_then(|s| s.hand.as_ref()) {
            Some(h) => (Some(h.description.clone()), h.best_five.to_vec()),
            None => (None, Vec::new()),
        };

        Self {
            hand_id,
            hand_number: state.hand_number,
            hero_cards,
            community_cards: state.community_cards.clone(),
            actions: state.action_history.clone(),
            pot,
            player_stacks: state
                .players
                .iter()
                .map(|p| SeatStack {
                    seat: p.seat,
                    stack: p.stack,
                })
                .collect(),
            winners,
            winning_hand,
            winning_cards,
            ts: None,
        }
    }
}

pub fn format_hand_id(yyyymmdd: &str, seq: u32) -> String {
    format!("{}-{:06}", yyyymmdd, seq)
}

/// Appends [`HandHistory`] records to a JSONL file.
pub struct HandLogger {
    writer: Option<BufWriter<File>>,
    date: String,
    seq: u32,
}

impl HandLogger {
    pub fn create<P: AsRef<Path>>(path: P) -> std::io::Result<Self> {
        if let Some(parent) = path.as_ref().parent() {
            if !parent.as_os_str().is_empty() {
                create_dir_all(parent)?;
            }
        }
        let f = File::create(path)?;
        Ok(Self {
            writer: Some(BufWriter::new(f)),
            date: Utc::now().format("%Y%m%d").to_string(),
            seq: 0,
        })
    }

    /// A logger that numbers hands but writes nothing.
    pub fn with_seq_for_test(date: &str) -> Self {
        Self {
            writer: None,
            date: date.to_string(),
            seq: 0,
        }
    }

    pub fn next_id(&mut self) -> String {
        self.seq += 1;
        format_hand_id(&self.date, self.seq)
    }

    pub fn write(&mut self, record: &HandHistory) -> std::io::Result<()> {
        // inject timestamp if missing
        let mut rec = record.clone();
        if rec.ts.is_none() {
            rec.ts = Some(Utc::now().to_rfc3339_opts(SecondsFormat::Secs, true));
        }
        let line = serde_json::to_string(&rec).map_err(std::io::Error::other)?;
        if let Some(w) = &mut self.writer {
            w.write_all(line.as_bytes())?;
            w.write_all(b"\n")?;
            w.flush()?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ids_are_sequential_and_padded() {
        let mut logger = HandLogger::with_seq_for_test("20260101");
        assert_eq!(logger.next_id(), "20260101-000001");
        assert_eq!(logger.next_id(), "20260101-000002");
    }

    #[test]
    fn action_kind_uses_kebab_case() {
        assert_eq!(
            serde_json::to_string(&ActionKind::AllIn).unwrap(),
            "\"all-in\""
        );
    }
}
