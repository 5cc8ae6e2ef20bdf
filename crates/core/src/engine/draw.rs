use super::Engine;
use crate::{Event, EventBus, GameState, Side};

impl Engine {
    /// Draw `count` cards one at a time from the front of the draw pile to
    /// the end of the hand. An exhausted draw pile reshuffles the discard
    /// pile back in first; when both piles are empty the draw silently
    /// yields nothing.
    pub fn draw_cards_for_actor(
        &mut self,
        state: &mut GameState,
        side: Side,
        count: usize,
        events: &mut EventBus,
    ) {
        let actor = state.actor_mut(side);
        for _ in 0..count {
            if actor.draw_pile.is_empty() && !actor.discard_pile.is_empty() {
                let mut pile = std::mem::take(&mut actor.discard_pile);
                self.rng.shuffle(&mut pile);
                events.push(Event::DiscardReshuffled {
                    side,
                    count: pile.len(),
                });
                actor.draw_pile = pile;
            }
            if actor.draw_pile.is_empty() {
                break;
            }
            let card = actor.draw_pile.remove(0);
            events.push(Event::CardDrawn {
                side,
                name: card.name.clone(),
            });
            actor.hand.push(card);
        }
    }
}
