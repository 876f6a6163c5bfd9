use std::cmp::Ordering;

use chrono::{SecondsFormat, Utc};
use tracing::{debug, info, warn};

use crate::deck::Deck;
use crate::errors::GameError;
use crate::game::{GameState, Phase, Street};
use crate::hand::{compare_hands, evaluate, HandEvaluation};
use crate::logger::{ActionKind, ActionRecord};
use crate::player::{BetAction, Chips, Player, SeatId};
use crate::rules::{validate_action, ValidatedAction};

/// Seats available at a table: the hero plus up to three opponents.
pub const MAX_PLAYERS: usize = 4;

/// Table stakes and dealing options.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TableConfig {
    pub small_blind: Chips,
    pub big_blind: Chips,
    /// Dealer seat of the first hand.
    pub first_dealer: usize,
    /// Deck seed; `None` draws one from OS entropy.
    pub seed: Option<u64>,
}

impl Default for TableConfig {
    fn default() -> Self {
        Self {
            small_blind: 0.5,
            big_blind: 1.0,
            first_dealer: 0,
            seed: None,
        }
    }
}

/// Outcome of [`BettingEngine::settle_showdown`].
#[derive(Debug, Clone, PartialEq)]
pub struct ShowdownResult {
    /// Seat indices that shared the pot.
    pub winners: Vec<usize>,
    pub amount_each: Chips,
    pub total_pot: Chips,
    /// Winning hand; `None` when everyone else folded.
    pub hand: Option<HandEvaluation>,
    pub uncontested: bool,
}

/// Owns the per-hand [`GameState`] and the deck, and is the only code path
/// that mutates either.
///
/// # Examples
///
/// ```
/// use holdem_engine::engine::{BettingEngine, TableConfig};
/// use holdem_engine::player::BetAction;
///
/// let config = TableConfig { seed: Some(7), ..TableConfig::default() };
/// let mut engine = BettingEngine::with_stacks(&[100.0, 100.0, 100.0, 100.0], config).unwrap();
///
/// let state = engine.start_hand().unwrap();
/// assert_eq!(state.small_blind_index, 1);
/// assert_eq!(state.big_blind_index, 2);
/// assert_eq!(state.acting_index, 3);
///
/// // Seat 3 folds, the turn passes to the dealer
/// let state = engine.apply_action(BetAction::Fold).unwrap();
/// assert_eq!(state.acting_index, 0);
/// ```
#[derive(Debug, Clone)]
pub struct BettingEngine {
    state: GameState,
    deck: Deck,
}

impl BettingEngine {
    pub fn new(players: Vec<Player>, config: TableConfig) -> Result<Self, GameError> {
        let n = players.len();
        if n < 2 {
            return Err(GameError::NotEnoughPlayers);
        }
        if n > MAX_PLAYERS {
            return Err(GameError::TooManyPlayers {
                got: n,
                max: MAX_PLAYERS,
            });
        }
        if !(config.small_blind > 0.0 && config.small_blind <= config.big_blind) {
            return Err(GameError::InvalidBlinds {
                small: config.small_blind,
                big: config.big_blind,
            });
        }

        let mut state = GameState::new(players, config.small_blind, config.big_blind);
        // start_hand rotates first, so park the button one seat early
        state.dealer_index = (config.first_dealer % n + n - 1) % n;
        let deck = match config.seed {
            Some(seed) => Deck::new_with_seed(seed),
            None => Deck::new(),
        };
        Ok(Self { state, deck })
    }

    /// Seats one player per stack, in `hero, opponent1, ...` order.
    pub fn with_stacks(stacks: &[Chips], config: TableConfig) -> Result<Self, GameError> {
        if stacks.len() > MAX_PLAYERS {
            return Err(GameError::TooManyPlayers {
                got: stacks.len(),
                max: MAX_PLAYERS,
            });
        }
        let players = stacks
            .iter()
            .zip(SeatId::ALL)
            .map(|(&stack, seat)| Player::new(seat, stack))
            .collect();
        Self::new(players, config)
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Owned copy of the current state for readers that outlive the borrow.
    pub fn snapshot(&self) -> GameState {
        self.state.clone()
    }

    /// Starts a new hand: moves the button, resets per-hand fields, deals
    /// hole cards and posts the blinds.
    ///
    /// Players with an empty stack sit the hand out.
    ///
    /// # Errors
    ///
    /// [`GameError::NotEnoughPlayers`] when fewer than two players have chips.
    pub fn start_hand(&mut self) -> Result<&GameState, GameError> {
        let funded = self.state.players.iter().filter(|p| p.stack > 0.0).count();
        if funded < 2 {
            return Err(GameError::NotEnoughPlayers);
        }

        self.deck.shuffle();
        let st = &mut self.state;
        let n = st.players.len();
        st.hand_number += 1;
        for p in st.players.iter_mut() {
            p.reset_for_hand();
            if p.stack <= 0.0 {
                p.is_folded = true;
            }
        }

        let in_hand = |p: &Player| !p.is_folded;
        st.dealer_index =
            next_seat(&st.players, st.dealer_index, in_hand).ok_or(GameError::NotEnoughPlayers)?;
        let dealer = st.dealer_index;
        let (sb, bb) = if funded == 2 {
            // Heads-up: the button posts the small blind
            let bb = next_seat(&st.players, dealer, in_hand).ok_or(GameError::NotEnoughPlayers)?;
            (dealer, bb)
        } else {
            let sb = next_seat(&st.players, dealer, in_hand).ok_or(GameError::NotEnoughPlayers)?;
            let bb = next_seat(&st.players, sb, in_hand).ok_or(GameError::NotEnoughPlayers)?;
            (sb, bb)
        };
        st.small_blind_index = sb;
        st.big_blind_index = bb;

        for _ in 0..2 {
            for k in 1..=n {
                let i = (dealer + k) % n;
                if !st.players[i].is_folded {
                    let card = self.deck.deal_card()?;
                    st.players[i].hole_cards.push(card);
                }
            }
        }

        st.street = Street::Preflop;
        st.phase = Phase::Betting;
        st.pot = 0.0;
        st.community_cards.clear();
        st.action_history.clear();

        let (small, big) = (st.small_blind, st.big_blind);
        st.players[sb].commit(small);
        st.players[bb].commit(big);
        st.current_bet = big;
        st.min_raise = big * 2.0;
        st.acting_index = next_seat(&st.players, bb, Player::can_act).unwrap_or(bb);

        info!(
            hand = st.hand_number,
            dealer,
            small_blind = sb,
            big_blind = bb,
            "hand started"
        );

        if self.street_complete() {
            self.close_street()?;
        }
        Ok(&self.state)
    }

    /// Applies an action for the seat at `acting_index`.
    ///
    /// This is the single mutation path during a hand. Illegal actions are
    /// rejected and leave the state untouched.
    ///
    /// # Errors
    ///
    /// - [`GameError::NoHandInProgress`] outside the betting phase
    /// - [`GameError::CannotCheck`] / [`GameError::RaiseTooSmall`] for illegal actions
    /// - [`GameError::Deck`] if dealing the next street fails
    pub fn apply_action(&mut self, action: BetAction) -> Result<&GameState, GameError> {
        if self.state.phase != Phase::Betting {
            return Err(GameError::NoHandInProgress);
        }
        let idx = self.state.acting_index;
        let current_bet = self.state.current_bet;
        let street = self.state.street;

        let player = &self.state.players[idx];
        if !player.can_act() {
            return Err(GameError::PlayerCannotAct { seat: idx });
        }
        let validated = match validate_action(player, current_bet, self.state.min_raise, action) {
            Ok(v) => v,
            Err(e) => {
                warn!(seat = idx, ?action, error = %e, "rejected illegal action");
                return Err(e);
            }
        };

        let player = &mut self.state.players[idx];
        let (kind, amount) = match validated {
            ValidatedAction::Fold => {
                player.is_folded = true;
                (ActionKind::Fold, 0.0)
            }
            ValidatedAction::Check => (ActionKind::Check, 0.0),
            ValidatedAction::Call(to_call) => (ActionKind::Call, player.commit(to_call)),
            ValidatedAction::Raise(total) => {
                player.commit(total - player.current_bet);
                (ActionKind::Raise, player.current_bet)
            }
            ValidatedAction::AllIn(_) => {
                let stack = player.stack;
                player.commit(stack);
                (ActionKind::AllIn, player.current_bet)
            }
        };
        player.has_acted = true;
        let seat = player.seat;
        let new_total = player.current_bet;

        if matches!(kind, ActionKind::Raise | ActionKind::AllIn) && new_total > current_bet {
            let increment = new_total - current_bet;
            self.state.current_bet = new_total;
            self.state.min_raise = new_total + increment.max(self.state.big_blind);
        }

        self.state.action_history.push(ActionRecord {
            seat,
            seat_index: idx,
            action: kind,
            amount,
            street,
            timestamp: Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true),
        });
        debug!(seat = idx, action = ?kind, amount, ?street, "action applied");

        self.advance(idx)?;
        Ok(&self.state)
    }

    /// Awards the chips in play once the hand is over.
    ///
    /// A lone survivor takes everything, including any uncalled bet. At a
    /// full showdown the best hand wins and exact ties split evenly. Side
    /// pots are not computed.
    pub fn settle_showdown(&mut self) -> Result<ShowdownResult, GameError> {
        if self.state.phase != Phase::Showdown {
            return Err(GameError::NoHandInProgress);
        }
        let total_pot = self.state.total_pot();
        let contenders: Vec<usize> = (0..self.state.players.len())
            .filter(|&i| !self.state.players[i].is_folded)
            .collect();
        let uncontested = contenders.len() == 1;

        let (winners, hand) = if uncontested {
            (contenders, None)
        } else {
            let mut best: Option<HandEvaluation> = None;
            let mut winners = Vec::new();
            for &i in &contenders {
                let mut cards = self.state.players[i].hole_cards.clone();
                cards.extend_from_slice(&self.state.community_cards);
                let eval = evaluate(&cards)?;
                match best.as_ref().map(|b| compare_hands(&eval, b)) {
                    None | Some(Ordering::Greater) => {
                        best = Some(eval);
                        winners = vec![i];
                    }
                    Some(Ordering::Equal) => winners.push(i),
                    Some(Ordering::Less) => {}
                }
            }
            (winners, best)
        };

        let amount_each = total_pot / winners.len().max(1) as Chips;
        for &i in &winners {
            self.state.players[i].stack += amount_each;
        }
        for p in self.state.players.iter_mut() {
            p.current_bet = 0.0;
        }
        self.state.pot = 0.0;
        self.state.current_bet = 0.0;
        self.state.phase = Phase::Waiting;

        info!(
            hand = self.state.hand_number,
            winners = ?winners,
            amount_each,
            uncontested,
            "pot awarded"
        );
        Ok(ShowdownResult {
            winners,
            amount_each,
            total_pot,
            hand,
            uncontested,
        })
    }

    fn advance(&mut self, from: usize) -> Result<(), GameError> {
        if self.state.players_in_hand() == 1 {
            // Uncalled bets stay in front of the players until settlement
            self.state.phase = Phase::Showdown;
            info!(hand = self.state.hand_number, "hand over, one player left");
            return Ok(());
        }
        if self.street_complete() {
            return self.close_street();
        }
        match next_seat(&self.state.players, from, Player::can_act) {
            Some(i) => {
                self.state.acting_index = i;
                Ok(())
            }
            None => self.close_street(),
        }
    }

    /// Every player who can still act has acted on this street and matched
    /// the current bet.
    fn street_complete(&self) -> bool {
        let current_bet = self.state.current_bet;
        self.state
            .players
            .iter()
            .filter(|p| p.can_act())
            .all(|p| p.has_acted && p.current_bet >= current_bet)
    }

    /// Collects street bets into the pot and deals the next street. Keeps
    /// dealing without betting while fewer than two players can act.
    fn close_street(&mut self) -> Result<(), GameError> {
        let st = &mut self.state;
        let collected: Chips = st.players.iter().map(|p| p.current_bet).sum();
        st.pot += collected;
        for p in st.players.iter_mut() {
            p.current_bet = 0.0;
            p.has_acted = false;
        }
        debug!(street = ?st.street, collected, pot = st.pot, "street complete");

        loop {
            let (next, count) = match st.street {
                Street::Preflop => (Street::Flop, 3),
                Street::Flop => (Street::Turn, 1),
                Street::Turn => (Street::River, 1),
                Street::River => {
                    st.phase = Phase::Showdown;
                    info!(hand = st.hand_number, pot = st.pot, "showdown");
                    return Ok(());
                }
            };
            let cards = self.deck.deal(count)?;
            st.community_cards.extend(cards);
            st.street = next;
            st.current_bet = 0.0;
            st.min_raise = st.big_blind;

            let actors = st.players.iter().filter(|p| p.can_act()).count();
            if actors >= 2 {
                let dealer = st.dealer_index;
                // heads-up the button acts first after the flop
                st.acting_index = if st.players_dealt_in() == 2 && st.players[dealer].can_act() {
                    dealer
                } else {
                    next_seat(&st.players, dealer, Player::can_act).unwrap_or(dealer)
                };
                debug!(street = ?next, acting = st.acting_index, "street dealt");
                return Ok(());
            }
            debug!(street = ?next, "running out the board");
        }
    }
}

/// First seat after `from` (wrapping, `from` itself last) that matches `pred`.
fn next_seat(players: &[Player], from: usize, pred: impl Fn(&Player) -> bool) -> Option<usize> {
    let n = players.len();
    (1..=n).map(|k| (from + k) % n).find(|&i| pred(&players[i]))
}
