use super::Engine;
use crate::{Actor, Card, CardType, Event, EventBus, GameState, OffensiveSource, Side};
use std::collections::HashMap;

/// Result of a hoarding check: extra copies of one action returned to the
/// encounter deck.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StrippedAction {
    pub action: String,
    pub stripped: usize,
}

impl Engine {
    /// Lethargy check, run at cleanup: an actor holding two or more copies
    /// of an action they never played this round keeps one copy; the rest
    /// go back to the encounter deck, which is reshuffled once if
    /// anything was stripped.
    pub fn check_lethargy(
        &mut self,
        state: &mut GameState,
        side: Side,
        events: &mut EventBus,
    ) -> Vec<StrippedAction> {
        let (actor, deck) = split_actor_and_deck(state, side);

        let mut counts: HashMap<String, usize> = HashMap::new();
        for card in &actor.hand {
            if card.card_type == CardType::Action {
                *counts.entry(card.name.clone()).or_insert(0) += 1;
            }
        }

        let mut results = Vec::new();
        for (action, count) in counts {
            let played = actor
                .types_played_this_round
                .get(&action)
                .copied()
                .unwrap_or(0);
            if count < 2 || played > 0 {
                continue;
            }
            let stripped = strip_extras(actor, deck, &action, count - 1);
            if stripped > 0 {
                events.push(Event::LethargyStripped {
                    side,
                    action: action.clone(),
                    count: stripped,
                });
                results.push(StrippedAction { action, stripped });
            }
        }

        if !results.is_empty() {
            self.rng.shuffle(deck);
        }
        results
    }

    /// Exhausted check, run during resolution after a failed action: an
    /// actor who played this action twice or more and still holds two or
    /// more copies keeps one and loses the rest to the encounter deck.
    pub fn check_exhausted(
        &mut self,
        state: &mut GameState,
        side: Side,
        failed_action: &str,
        events: &mut EventBus,
    ) -> Option<StrippedAction> {
        let (actor, deck) = split_actor_and_deck(state, side);

        let played = actor
            .types_played_this_round
            .get(failed_action)
            .copied()
            .unwrap_or(0);
        if played < 2 {
            return None;
        }
        let held = actor
            .hand
            .iter()
            .filter(|card| card.card_type == CardType::Action && card.name == failed_action)
            .count();
        if held < 2 {
            return None;
        }

        let stripped = strip_extras(actor, deck, failed_action, held - 1);
        if stripped == 0 {
            return None;
        }
        self.rng.shuffle(deck);
        events.push(Event::ExhaustedStripped {
            side,
            action: failed_action.to_string(),
            count: stripped,
        });
        Some(StrippedAction {
            action: failed_action.to_string(),
            stripped,
        })
    }

    /// Guarantee an Attack action card in hand: promote one from the draw
    /// pile, else the discard pile, else synthesize a basic one.
    pub fn ensure_offensive_card(&mut self, state: &mut GameState, side: Side, events: &mut EventBus) {
        let actor = state.actor_mut(side);
        if find_attack(&actor.hand).is_some() {
            return;
        }
        if let Some(idx) = find_attack(&actor.draw_pile) {
            let card = actor.draw_pile.remove(idx);
            actor.hand.push(card);
            events.push(Event::OffensiveGranted {
                side,
                source: OffensiveSource::DrawPile,
            });
            return;
        }
        if let Some(idx) = find_attack(&actor.discard_pile) {
            let card = actor.discard_pile.remove(idx);
            actor.hand.push(card);
            events.push(Event::OffensiveGranted {
                side,
                source: OffensiveSource::DiscardPile,
            });
            return;
        }
        let mut card = Card::action("Attack");
        card.effect = Some("Roll ATK vs DEF. Deal STR damage on hit.".to_string());
        card.rarity = Some("COMMON".to_string());
        self.tag_card(&mut card);
        actor.hand.push(card);
        events.push(Event::OffensiveGranted {
            side,
            source: OffensiveSource::Synthesized,
        });
    }
}

fn split_actor_and_deck(state: &mut GameState, side: Side) -> (&mut Actor, &mut Vec<Card>) {
    match side {
        Side::Player => (&mut state.player, &mut state.encounter_deck),
        Side::Opponent => (&mut state.opponent, &mut state.encounter_deck),
    }
}

fn find_attack(cards: &[Card]) -> Option<usize> {
    cards
        .iter()
        .position(|card| card.card_type == CardType::Action && card.name == "Attack")
}

/// Remove up to `limit` copies of the named action from the back of the
/// hand and append them to the encounter deck.
fn strip_extras(actor: &mut Actor, deck: &mut Vec<Card>, action: &str, limit: usize) -> usize {
    let mut removed = 0;
    let mut idx = actor.hand.len();
    while idx > 0 && removed < limit {
        idx -= 1;
        let card = &actor.hand[idx];
        if card.card_type == CardType::Action && card.name == action {
            let card = actor.hand.remove(idx);
            deck.push(card);
            removed += 1;
        }
    }
    removed
}
