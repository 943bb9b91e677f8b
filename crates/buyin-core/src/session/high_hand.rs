//! High-hand editing as a draft-and-commit flow.
//!
//! Edits accumulate on a cloned [`Session`] and reach the ledger only
//! through an explicit [`HighHandDraft::save`]. Dropping the draft is
//! "cancel": nothing was mutated.

use crate::error::{LedgerError, Result};
use crate::ledger::LedgerStore;

use super::model::{HighHandType, Session};

/// Where the high-hand record stands, derived from its fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HighHandState {
    /// No qualifying hand entered yet.
    Unset,
    /// Cards entered, winner still undecided.
    Configured,
    /// Cards entered and a winner chosen.
    Awarded,
}

/// Rank inputs for one qualifying hand.
///
/// Rank tokens are free-form: trimmed, upper-cased, and rejected only
/// when blank. They are not checked against a real 13-rank domain.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HandInput {
    FullHouse { trips: String, pair: String },
    FourOfAKind { quads: String, kicker: String },
    StraightFlush { low: String, high: String },
    RoyalFlush,
}

/// An in-flight edit of a session's high-hand fields.
pub struct HighHandDraft {
    session: Session,
}

impl HighHandDraft {
    /// Starts a draft from a snapshot of the session.
    pub fn new(session: Session) -> Self {
        Self { session }
    }

    /// Current state of the draft record.
    pub fn state(&self) -> HighHandState {
        match (
            self.session.high_hand_cards.is_some(),
            self.session.high_hand_owner.is_some(),
        ) {
            (false, _) => HighHandState::Unset,
            (true, false) => HighHandState::Configured,
            (true, true) => HighHandState::Awarded,
        }
    }

    /// Read access to the draft record, e.g. for preview rendering.
    pub fn session(&self) -> &Session {
        &self.session
    }

    /// Sets the qualifying hand, producing the formatted card string for
    /// the chosen type.
    ///
    /// # Errors
    ///
    /// Returns a validation error if any rank token is blank. The draft
    /// is unchanged in that case.
    pub fn set_hand(&mut self, input: HandInput) -> Result<()> {
        let (hand_type, cards) = match input {
            HandInput::FullHouse { trips, pair } => {
                let trips = rank_token(&trips)?;
                let pair = rank_token(&pair)?;
                (
                    HighHandType::FullHouse,
                    format!("{trips}{trips}{trips}{pair}{pair}"),
                )
            }
            HandInput::FourOfAKind { quads, kicker } => {
                let quads = rank_token(&quads)?;
                let kicker = rank_token(&kicker)?;
                (
                    HighHandType::FourOfAKind,
                    format!("{quads}{quads}{quads}{quads}{kicker}"),
                )
            }
            HandInput::StraightFlush { low, high } => {
                let low = rank_token(&low)?;
                let high = rank_token(&high)?;
                (HighHandType::StraightFlush, format!("{low}{high} Straight"))
            }
            HandInput::RoyalFlush => (HighHandType::RoyalFlush, "AKQJT".to_string()),
        };

        self.session.high_hand_type = hand_type;
        self.session.high_hand_cards = Some(cards);
        Ok(())
    }

    /// Chooses the winner. Repeatable; the prize simply moves.
    pub fn set_winner(&mut self, player_id: &str) {
        self.session.high_hand_owner = Some(player_id.to_string());
    }

    /// Commits the draft back to the ledger and returns the saved
    /// record. If the session was deleted out from under the draft, this
    /// follows `update_session`'s idempotent-replace semantics and
    /// commits nothing.
    pub fn save(self, store: &mut LedgerStore) -> Result<Session> {
        store.update_session(self.session.clone())?;
        Ok(self.session)
    }
}

fn rank_token(raw: &str) -> Result<String> {
    let token = raw.trim().to_uppercase();
    if token.is_empty() {
        return Err(LedgerError::validation("rank must not be empty"));
    }
    Ok(token)
}
