use crate::Card;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum Phase {
    Initiative,
    Equip,
    ThreatResponse,
    DrawPlacement,
    Resolution,
    Cleanup,
    EndThreat,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum Side {
    Player,
    Opponent,
}

impl Side {
    pub fn opposite(self) -> Side {
        match self {
            Side::Player => Side::Opponent,
            Side::Opponent => Side::Player,
        }
    }
}

/// A position's composed turn: one core action card plus stacked modifiers.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ActionStack {
    pub core_card: Card,
    pub modifiers: Vec<Card>,
}

impl ActionStack {
    pub fn new(core_card: Card) -> Self {
        Self {
            core_card,
            modifiers: Vec::new(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Position {
    pub index: usize,
    pub owner: Side,
    pub stack: Option<ActionStack>,
    #[serde(default)]
    pub resolved: bool,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ActionBar {
    pub positions: Vec<Position>,
}

impl ActionBar {
    /// Build the round's bar: the initiative winner acts first, sides
    /// alternating, each getting exactly their AP count of slots.
    /// Indices are 1-based, matching the board display.
    pub fn interleaved(winner: Side, winner_ap: usize, loser_ap: usize) -> Self {
        let mut positions = Vec::with_capacity(winner_ap + loser_ap);
        let mut index = 1;
        let (mut w, mut l) = (0, 0);
        while w < winner_ap || l < loser_ap {
            if w < winner_ap {
                positions.push(Position {
                    index,
                    owner: winner,
                    stack: None,
                    resolved: false,
                });
                index += 1;
                w += 1;
            }
            if l < loser_ap {
                positions.push(Position {
                    index,
                    owner: winner.opposite(),
                    stack: None,
                    resolved: false,
                });
                index += 1;
                l += 1;
            }
        }
        Self { positions }
    }

    pub fn position(&self, index: usize) -> Option<&Position> {
        self.positions.iter().find(|pos| pos.index == index)
    }

    pub fn position_mut(&mut self, index: usize) -> Option<&mut Position> {
        self.positions.iter_mut().find(|pos| pos.index == index)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Actor {
    pub hand: Vec<Card>,
    pub draw_pile: Vec<Card>,
    pub discard_pile: Vec<Card>,
    /// Equipped cards (weapon/armor/apparel) persisting across rounds.
    pub card_stack: Vec<Card>,
    pub ap: u32,
    pub ap_used: u32,
    pub energy: i32,
    pub max_energy: i32,
    /// Placements this round keyed by action name, for the once-per-round
    /// picker rule and the hoarding checks.
    #[serde(default)]
    pub types_played_this_round: HashMap<String, u32>,
    /// Character-specific action list; empty means use the catalog's
    /// common actions.
    #[serde(default)]
    pub available_actions: Vec<String>,
}

impl Actor {
    pub fn new(ap: u32, max_energy: i32) -> Self {
        Self {
            hand: Vec::new(),
            draw_pile: Vec::new(),
            discard_pile: Vec::new(),
            card_stack: Vec::new(),
            ap,
            ap_used: 0,
            energy: max_energy,
            max_energy,
            types_played_this_round: HashMap::new(),
            available_actions: Vec::new(),
        }
    }

    pub fn ap_remaining(&self) -> u32 {
        self.ap.saturating_sub(self.ap_used)
    }
}

/// Set when a claimed pot crosses the jackpot threshold; taken by the
/// external vault-draw feature.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct Jackpot {
    pub winner: Side,
    pub pot_size: usize,
}

/// The single shared mutable resource. Owned by the surrounding game loop;
/// the engine borrows it per call and mutates it in place.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameState {
    pub phase: Phase,
    pub current_turn: Side,
    pub action_bar: ActionBar,
    pub pot: Vec<Card>,
    #[serde(default)]
    pub round_loot: Vec<Card>,
    #[serde(default)]
    pub encounter_deck: Vec<Card>,
    pub player: Actor,
    pub opponent: Actor,
    #[serde(default)]
    pub jackpot: Option<Jackpot>,
}

impl GameState {
    pub fn new(player: Actor, opponent: Actor) -> Self {
        Self {
            phase: Phase::Initiative,
            current_turn: Side::Player,
            action_bar: ActionBar::default(),
            pot: Vec::new(),
            round_loot: Vec::new(),
            encounter_deck: Vec::new(),
            player,
            opponent,
            jackpot: None,
        }
    }

    pub fn actor(&self, side: Side) -> &Actor {
        match side {
            Side::Player => &self.player,
            Side::Opponent => &self.opponent,
        }
    }

    pub fn actor_mut(&mut self, side: Side) -> &mut Actor {
        match side {
            Side::Player => &mut self.player,
            Side::Opponent => &mut self.opponent,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn interleaved_bar_alternates_from_winner() {
        let bar = ActionBar::interleaved(Side::Opponent, 2, 3);
        let owners: Vec<Side> = bar.positions.iter().map(|p| p.owner).collect();
        assert_eq!(
            owners,
            vec![
                Side::Opponent,
                Side::Player,
                Side::Opponent,
                Side::Player,
                Side::Player,
            ]
        );
        let indices: Vec<usize> = bar.positions.iter().map(|p| p.index).collect();
        assert_eq!(indices, vec![1, 2, 3, 4, 5]);
    }
}
