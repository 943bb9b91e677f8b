//! Session domain model.
//!
//! A session is one evening of play: who sat down, what the buy-ins
//! cost, how many extra buy-ins each player took, what everyone cashed
//! out with, and who won the high-hand side bet. The record itself holds
//! no derived money; see [`crate::session::calculator`] for that.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use uuid::Uuid;

/// Cash-out state of a single player within a session.
///
/// Replaces the ambiguous "entry absent" vs "entry present but null"
/// distinction of the persisted map with one explicit three-state value.
/// Recording a cash-out is one-way; there is no operation that reverts a
/// `CashedOut` amount.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "state", content = "amount", rename_all = "snake_case")]
pub enum ChipCount {
    /// No cash-out information was ever recorded for this player,
    /// typically because they joined after the session was created.
    NotSet,
    /// Still at the table.
    Playing,
    /// Final chip amount, recorded at cash-out.
    CashedOut(Decimal),
}

impl ChipCount {
    /// Returns the cashed-out amount, if any.
    pub fn cashed_out(&self) -> Option<Decimal> {
        match self {
            ChipCount::CashedOut(amount) => Some(*amount),
            _ => None,
        }
    }
}

/// The qualifying hand categories for the high-hand side bet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum HighHandType {
    #[serde(rename = "Full House")]
    FullHouse,
    #[serde(rename = "Four of a Kind")]
    FourOfAKind,
    #[serde(rename = "Straight Flush")]
    StraightFlush,
    #[serde(rename = "Royal Flush")]
    RoyalFlush,
}

impl Default for HighHandType {
    fn default() -> Self {
        HighHandType::FullHouse
    }
}

impl std::fmt::Display for HighHandType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            HighHandType::FullHouse => "Full House",
            HighHandType::FourOfAKind => "Four of a Kind",
            HighHandType::StraightFlush => "Straight Flush",
            HighHandType::RoyalFlush => "Royal Flush",
        };
        write!(f, "{}", label)
    }
}

/// One tracked poker session.
///
/// Invariants maintained by the constructor and mutators:
/// - `player_ids` holds no duplicates; insertion order is display order.
/// - `additional_buy_ins` and `final_chips` are keyed by members of
///   `player_ids` at the time of insertion. Keys are not cleaned up when
///   a player is later removed from the ledger.
/// - `high_hand_value` is computed once at creation and never recomputed,
///   even if players join afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Session {
    /// Unique session identifier (UUID format)
    pub id: String,
    /// Creation timestamp
    pub date: DateTime<Utc>,
    /// Participating players, in seating/display order
    pub player_ids: Vec<String>,
    /// Fixed initial buy-in, staked identically by every participant
    pub first_buy_in: i64,
    /// Unit price of each additional buy-in
    pub second_buy_in: i64,
    /// Count of additional buy-ins taken, per player
    pub additional_buy_ins: HashMap<String, u32>,
    /// Cash-out state per player
    pub final_chips: HashMap<String, ChipCount>,
    /// Winner of the high-hand side bet, if decided
    pub high_hand_owner: Option<String>,
    /// Qualifying hand category
    #[serde(default)]
    pub high_hand_type: HighHandType,
    /// Formatted card string for the qualifying hand, if entered
    pub high_hand_cards: Option<String>,
    /// Prize pool for the high hand, frozen at creation
    pub high_hand_value: Decimal,
    /// Whether the session has been closed out
    #[serde(default)]
    pub is_ended: bool,
}

impl Session {
    /// Creates a new session for the given participants.
    ///
    /// Duplicate ids are dropped, keeping the first occurrence. Every
    /// participant starts with zero additional buy-ins and a
    /// [`ChipCount::Playing`] chip state. The high-hand prize pool is
    /// `(first_buy_in - second_buy_in) * player_count`, frozen here.
    ///
    /// Amount validation (positive first buy-in, non-empty participant
    /// set) is the store's job.
    pub fn new(first_buy_in: i64, second_buy_in: i64, player_ids: Vec<String>) -> Self {
        let mut seen = Vec::with_capacity(player_ids.len());
        for id in player_ids {
            if !seen.contains(&id) {
                seen.push(id);
            }
        }

        let additional_buy_ins = seen.iter().map(|id| (id.clone(), 0)).collect();
        let final_chips = seen
            .iter()
            .map(|id| (id.clone(), ChipCount::Playing))
            .collect();
        let high_hand_value =
            Decimal::from((first_buy_in - second_buy_in) * seen.len() as i64);

        Self {
            id: Uuid::new_v4().to_string(),
            date: Utc::now(),
            player_ids: seen,
            first_buy_in,
            second_buy_in,
            additional_buy_ins,
            final_chips,
            high_hand_owner: None,
            high_hand_type: HighHandType::default(),
            high_hand_cards: None,
            high_hand_value,
            is_ended: false,
        }
    }

    /// Cash-out state for a player. Players without an entry (joined
    /// after creation, or never part of this session) read as
    /// [`ChipCount::NotSet`].
    pub fn chip_count(&self, player_id: &str) -> ChipCount {
        self.final_chips
            .get(player_id)
            .copied()
            .unwrap_or(ChipCount::NotSet)
    }

    /// Records one more additional buy-in for a player, creating the
    /// counter on first use.
    pub fn record_additional_buy_in(&mut self, player_id: &str) {
        *self
            .additional_buy_ins
            .entry(player_id.to_string())
            .or_insert(0) += 1;
    }

    /// Records a player's final chip amount.
    pub fn record_final_chips(&mut self, player_id: &str, amount: Decimal) {
        self.final_chips
            .insert(player_id.to_string(), ChipCount::CashedOut(amount));
    }

    /// Adds players to a running session, skipping ids already seated.
    ///
    /// Late joiners get no map entries: their chip state reads as
    /// [`ChipCount::NotSet`] and their additional-buy-in count as zero
    /// until something is recorded for them. The prize pool is not
    /// recomputed.
    pub fn add_players<I>(&mut self, ids: I)
    where
        I: IntoIterator<Item = String>,
    {
        for id in ids {
            if !self.player_ids.contains(&id) {
                self.player_ids.push(id);
            }
        }
    }
}
