use super::{Engine, JACKPOT_THRESHOLD};
use crate::{Card, Category, Event, EventBus, GameState, Jackpot, Side};

impl Engine {
    /// Ante: move one uniformly-random card from the actor's hand into the
    /// pot. An empty hand is a no-op, not an error.
    pub fn ante_card(
        &mut self,
        state: &mut GameState,
        side: Side,
        events: &mut EventBus,
    ) -> Option<Card> {
        let actor = state.actor_mut(side);
        let idx = self.rng.pick_index(actor.hand.len())?;
        let card = actor.hand.remove(idx);
        events.push(Event::CardAnted {
            side,
            name: card.name.clone(),
        });
        let anted = card.clone();
        state.pot.push(card);
        Some(anted)
    }

    /// Mid-round drop into the pot.
    pub fn add_to_pot(
        &mut self,
        state: &mut GameState,
        card: Card,
        reason: &str,
        events: &mut EventBus,
    ) {
        events.push(Event::PotGained {
            name: card.name.clone(),
            reason: reason.to_string(),
        });
        state.pot.push(card);
    }

    /// Loot collected during the round, claimed by the winner at cleanup.
    pub fn add_to_round_loot(
        &mut self,
        state: &mut GameState,
        card: Card,
        source: &str,
        events: &mut EventBus,
    ) {
        events.push(Event::LootGained {
            name: card.name.clone(),
            source: source.to_string(),
        });
        state.round_loot.push(card);
    }

    /// Round winner claims the pot and the round loot. Pot cards land in
    /// the winner's discard pile; loot is routed by kind: consumables to
    /// hand, equipment (weapon/armor/apparel) to the card stack, the rest
    /// to the discard pile. The jackpot check uses the combined size
    /// measured before anything moves, so loot alone can trigger it.
    pub fn claim_pot(&mut self, state: &mut GameState, winner: Side, events: &mut EventBus) {
        let pot_size = state.pot.len() + state.round_loot.len();
        let pot_cards = std::mem::take(&mut state.pot);
        let loot = std::mem::take(&mut state.round_loot);
        let (card_count, loot_count) = (pot_cards.len(), loot.len());

        let actor = state.actor_mut(winner);
        actor.discard_pile.extend(pot_cards);
        for card in loot {
            match card.category() {
                Category::Consumable => actor.hand.push(card),
                Category::Weapon | Category::Armor | Category::Apparel => {
                    actor.card_stack.push(card)
                }
                _ => actor.discard_pile.push(card),
            }
        }

        events.push(Event::PotClaimed {
            winner,
            cards: card_count,
            loot: loot_count,
        });

        if pot_size >= JACKPOT_THRESHOLD {
            state.jackpot = Some(Jackpot { winner, pot_size });
            events.push(Event::JackpotTriggered { winner, pot_size });
        }
    }
}
