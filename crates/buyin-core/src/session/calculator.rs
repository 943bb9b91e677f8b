//! Derived financial results for a session.
//!
//! Pure functions over a [`Session`] snapshot. Nothing here mutates
//! state, so every presentation surface can recompute on each change
//! notification and always agree on the numbers.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::model::{ChipCount, Session};

/// A player's net result for a session.
///
/// `InProgress` is not zero: a player who hasn't cashed out has no
/// result yet, which must stay distinguishable from breaking even.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", content = "amount", rename_all = "snake_case")]
pub enum NetResult {
    /// The player has not cashed out yet.
    InProgress,
    /// Final chips plus any high-hand prize, minus total buy-in.
    Settled(Decimal),
}

impl NetResult {
    pub fn is_in_progress(&self) -> bool {
        matches!(self, NetResult::InProgress)
    }

    /// Returns the settled amount, if the player has cashed out.
    pub fn settled(&self) -> Option<Decimal> {
        match self {
            NetResult::Settled(amount) => Some(*amount),
            NetResult::InProgress => None,
        }
    }
}

/// Per-player line of the canonical session listing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ParticipantSummary {
    pub player_id: String,
    pub total_buy_in: Decimal,
    pub high_hand_prize: Decimal,
    pub net_profit: NetResult,
}

/// Total amount staked by a player: the first buy-in plus every
/// additional buy-in at the second-buy-in unit price. A player with no
/// recorded counter has taken zero additional buy-ins.
pub fn total_buy_in(session: &Session, player_id: &str) -> Decimal {
    let additional = session
        .additional_buy_ins
        .get(player_id)
        .copied()
        .unwrap_or(0);
    Decimal::from(session.first_buy_in)
        + Decimal::from(additional) * Decimal::from(session.second_buy_in)
}

/// High-hand prize credited to a player: the full pool for the owner,
/// zero for everyone else. Ownership is checked by id alone, so an owner
/// who has since left `player_ids` still collects.
pub fn high_hand_prize(session: &Session, player_id: &str) -> Decimal {
    if session.high_hand_owner.as_deref() == Some(player_id) {
        session.high_hand_value
    } else {
        Decimal::ZERO
    }
}

/// Net profit for a player, or [`NetResult::InProgress`] until their
/// final chips are recorded.
pub fn net_profit(session: &Session, player_id: &str) -> NetResult {
    match session.chip_count(player_id) {
        ChipCount::CashedOut(chips) => NetResult::Settled(
            chips + high_hand_prize(session, player_id) - total_buy_in(session, player_id),
        ),
        ChipCount::Playing | ChipCount::NotSet => NetResult::InProgress,
    }
}

/// One summary per participant, in `player_ids` order. The canonical
/// feed for any listing surface; orphaned map keys never appear here.
pub fn participant_summaries(session: &Session) -> Vec<ParticipantSummary> {
    session
        .player_ids
        .iter()
        .map(|player_id| ParticipantSummary {
            player_id: player_id.clone(),
            total_buy_in: total_buy_in(session, player_id),
            high_hand_prize: high_hand_prize(session, player_id),
            net_profit: net_profit(session, player_id),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn session() -> Session {
        Session::new(15, 10, vec!["p1".to_string(), "p2".to_string()])
    }

    #[test]
    fn test_total_buy_in_with_additional_buy_ins() {
        let mut s = session();
        s.record_additional_buy_in("p1");
        s.record_additional_buy_in("p1");
        // 15 + 2 * 10
        assert_eq!(total_buy_in(&s, "p1"), dec!(35));
        assert_eq!(total_buy_in(&s, "p2"), dec!(15));
    }

    #[test]
    fn test_total_buy_in_missing_counter_reads_as_zero() {
        let s = session();
        assert_eq!(total_buy_in(&s, "stranger"), dec!(15));
    }

    #[test]
    fn test_total_buy_in_monotone_in_buy_in_count() {
        let mut s = session();
        let mut previous = total_buy_in(&s, "p1");
        for _ in 0..5 {
            s.record_additional_buy_in("p1");
            let current = total_buy_in(&s, "p1");
            assert!(current >= previous);
            previous = current;
        }
    }

    #[test]
    fn test_high_hand_prize_goes_to_owner_only() {
        let mut s = session();
        s.high_hand_owner = Some("p1".to_string());
        assert_eq!(high_hand_prize(&s, "p1"), dec!(10));
        assert_eq!(high_hand_prize(&s, "p2"), dec!(0));
    }

    #[test]
    fn test_high_hand_prize_for_departed_owner() {
        // Ownership is independent of membership: the recorded owner
        // collects even after leaving the participant list.
        let mut s = session();
        s.high_hand_owner = Some("p1".to_string());
        s.player_ids.retain(|id| id != "p1");
        assert_eq!(high_hand_prize(&s, "p1"), dec!(10));
    }

    #[test]
    fn test_net_profit_settles_on_cash_out() {
        let mut s = session();
        s.record_additional_buy_in("p1");
        s.record_additional_buy_in("p1");
        s.high_hand_owner = Some("p1".to_string());
        s.record_final_chips("p1", dec!(50));
        // 50 + 10 - 35
        assert_eq!(net_profit(&s, "p1"), NetResult::Settled(dec!(25)));
    }

    #[test]
    fn test_net_profit_in_progress_until_cash_out() {
        let mut s = session();
        assert!(net_profit(&s, "p2").is_in_progress());
        assert_eq!(net_profit(&s, "p2").settled(), None);

        s.record_final_chips("p2", dec!(15));
        // Breaking even is a settled zero, not "in progress".
        assert_eq!(net_profit(&s, "p2"), NetResult::Settled(dec!(0)));
    }

    #[test]
    fn test_net_profit_in_progress_for_late_joiner() {
        let mut s = session();
        s.add_players(vec!["p3".to_string()]);
        assert!(net_profit(&s, "p3").is_in_progress());
    }

    #[test]
    fn test_participant_summaries_one_entry_per_player_in_order() {
        let mut s = session();
        s.add_players(vec!["p3".to_string()]);
        s.high_hand_owner = Some("p2".to_string());
        s.record_final_chips("p2", dec!(0));

        let summaries = participant_summaries(&s);
        let ids: Vec<&str> = summaries.iter().map(|e| e.player_id.as_str()).collect();
        assert_eq!(ids, vec!["p1", "p2", "p3"]);

        assert!(summaries[0].net_profit.is_in_progress());
        assert_eq!(summaries[1].high_hand_prize, dec!(10));
        // 0 + 10 - 15
        assert_eq!(summaries[1].net_profit, NetResult::Settled(dec!(-5)));
    }
}
