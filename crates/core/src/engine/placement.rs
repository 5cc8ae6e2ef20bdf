use super::{Engine, PlaceError};
use crate::{
    ActionStack, Actor, Card, CardType, Event, EventBus, GameState, ItemKind, Phase, Side,
    StackRule,
};

fn type_label(card_type: CardType) -> &'static str {
    match card_type {
        CardType::Action => "action",
        CardType::Talk => "talk",
        CardType::Magic => "magic",
        CardType::Skill => "skill",
        CardType::Item(_) => "item",
        CardType::Apparel => "apparel",
        CardType::Encounter => "encounter",
        CardType::Scenario => "scenario",
        CardType::Loot => "loot",
        CardType::Character => "character",
    }
}

impl Engine {
    /// The actor's character-specific action list, falling back to the
    /// catalog's common actions.
    pub fn get_actions_for_actor(&self, actor: &Actor) -> Vec<String> {
        if actor.available_actions.is_empty() {
            self.catalog.common_actions.clone()
        } else {
            actor.available_actions.clone()
        }
    }

    /// Whether `side` already has a core card with this action name on an
    /// occupied position. Picker placements are limited to once per named
    /// action per round per owner.
    pub fn is_action_placed_this_round(&self, state: &GameState, name: &str, side: Side) -> bool {
        state.action_bar.positions.iter().any(|pos| {
            pos.owner == side
                && pos
                    .stack
                    .as_ref()
                    .map_or(false, |stack| stack.core_card.name == name)
        })
    }

    /// Icon-picker selection: synthesize a core card from the catalog
    /// definition and place it. Picker cards never live in a hand array.
    pub fn select_action(
        &mut self,
        state: &mut GameState,
        position_index: usize,
        action_name: &str,
        events: &mut EventBus,
    ) -> Result<(), PlaceError> {
        let def = self
            .catalog
            .action(action_name)
            .ok_or_else(|| PlaceError::UnknownAction(action_name.to_string()))?;
        let card_type = if def.name == "Talk" {
            CardType::Talk
        } else {
            CardType::Action
        };
        let mut card = Card::new(card_type, def.name.clone());
        card.energy_cost = def.energy_cost;
        card.roll = def.roll.clone();
        card.on_hit = def.on_hit.clone();
        card.stack_with = Some(def.stack_with.clone());
        card.from_picker = true;
        self.tag_card(&mut card);
        self.place_card(state, position_index, card, false, events)
    }

    /// Compatibility gate for stacking a modifier on a core card. The rule
    /// comes from the catalog definition for the core's name when one
    /// exists, else from the card itself; no rule at all allows anything.
    pub fn can_modify_action(&self, core: &Card, modifier: &Card) -> Result<(), PlaceError> {
        let category = modifier.category();
        if !StackRule::eligible(category) {
            return Err(PlaceError::NotAModifier(type_label(modifier.card_type)));
        }
        let rule = self
            .catalog
            .action(&core.name)
            .map(|def| def.stack_with.clone())
            .or_else(|| core.stack_with.clone())
            .unwrap_or(StackRule::Anything);
        if rule.allows(category) {
            Ok(())
        } else {
            Err(PlaceError::Incompatible {
                core: core.name.clone(),
                modifier: modifier.name.clone(),
                rule: rule.describe(),
            })
        }
    }

    /// Place a card on an action-bar position for the side whose turn it
    /// is. Core cards pay one AP plus their energy cost and open a stack;
    /// modifier cards attach to an existing stack for free. Items dropped
    /// on an empty position auto-select a sensible core action first
    /// (weapon -> Attack, anything else -> Use Item) and then attach.
    pub fn place_card(
        &mut self,
        state: &mut GameState,
        position_index: usize,
        card: Card,
        force_modifier: bool,
        events: &mut EventBus,
    ) -> Result<(), PlaceError> {
        if state.phase != Phase::DrawPlacement {
            return Err(PlaceError::WrongPhase(state.phase));
        }
        let side = state.current_turn;
        let pos = state
            .action_bar
            .position(position_index)
            .ok_or(PlaceError::UnknownPosition(position_index))?;
        if pos.owner != side {
            return Err(PlaceError::NotYourPosition);
        }

        let mut is_modifier = force_modifier;
        if let (false, Some(stack)) = (force_modifier, &pos.stack) {
            if card.card_type.is_core() {
                return Err(PlaceError::PositionOccupied(stack.core_card.name.clone()));
            } else if card.card_type.is_modifier() {
                is_modifier = true;
            } else {
                return Err(PlaceError::NotAModifier(type_label(card.card_type)));
            }
        }

        if is_modifier {
            self.place_modifier(state, position_index, card, events)
        } else {
            self.place_core(state, position_index, card, events)
        }
    }

    fn place_modifier(
        &mut self,
        state: &mut GameState,
        position_index: usize,
        card: Card,
        events: &mut EventBus,
    ) -> Result<(), PlaceError> {
        let side = state.current_turn;
        let pos = state
            .action_bar
            .position(position_index)
            .ok_or(PlaceError::UnknownPosition(position_index))?;
        let stack = pos.stack.as_ref().ok_or(PlaceError::NoCoreToModify)?;

        self.can_modify_action(&stack.core_card, &card)?;

        let category = card.category();
        if stack
            .modifiers
            .iter()
            .any(|modifier| modifier.category() == category)
        {
            return Err(PlaceError::DuplicateModifier(category));
        }
        if stack.core_card.category() == category {
            return Err(PlaceError::ModifierMatchesCore(category));
        }

        if !card.from_picker {
            remove_from_hand(state.actor_mut(side), &card);
        }
        events.push(Event::ModifierAdded {
            side,
            position: position_index,
            name: card.name.clone(),
        });
        let pos = state
            .action_bar
            .position_mut(position_index)
            .ok_or(PlaceError::UnknownPosition(position_index))?;
        match pos.stack.as_mut() {
            Some(stack) => stack.modifiers.push(card),
            // Validated above; a vanished stack degrades to a rejection.
            None => return Err(PlaceError::NoCoreToModify),
        }
        events.push(Event::BoardChanged);
        Ok(())
    }

    fn place_core(
        &mut self,
        state: &mut GameState,
        position_index: usize,
        card: Card,
        events: &mut EventBus,
    ) -> Result<(), PlaceError> {
        let side = state.current_turn;

        if !card.card_type.is_core() {
            // An item dropped on an empty position picks its own core
            // action, then re-enters as a forced modifier.
            if let CardType::Item(kind) = card.card_type {
                let action_name = match kind {
                    ItemKind::Weapon => "Attack",
                    _ => "Use Item",
                };
                self.select_action(state, position_index, action_name, events)?;
                return self.place_card(state, position_index, card, true, events);
            }
            return Err(PlaceError::NeedsCoreFirst(type_label(card.card_type)));
        }

        let actor = state.actor(side);
        if actor.ap_remaining() == 0 {
            return Err(PlaceError::NoApRemaining);
        }
        if card.energy_cost > actor.energy {
            return Err(PlaceError::NotEnoughEnergy {
                name: card.name.clone(),
                need: card.energy_cost,
                have: actor.energy,
            });
        }
        if card.from_picker && self.is_action_placed_this_round(state, &card.name, side) {
            return Err(PlaceError::ActionAlreadyPlaced(card.name));
        }

        let actor = state.actor_mut(side);
        actor.ap_used += 1;
        actor.energy -= card.energy_cost;
        *actor
            .types_played_this_round
            .entry(card.name.clone())
            .or_insert(0) += 1;
        if !card.from_picker {
            remove_from_hand(actor, &card);
        }

        events.push(Event::CorePlaced {
            side,
            position: position_index,
            name: card.name.clone(),
        });
        let pos = state
            .action_bar
            .position_mut(position_index)
            .ok_or(PlaceError::UnknownPosition(position_index))?;
        pos.stack = Some(ActionStack::new(card));
        events.push(Event::BoardChanged);
        Ok(())
    }

    /// Tear a stack back down: the exact inverse of `place_card`'s resource
    /// accounting. The core card returns to hand unless it came from the
    /// picker (those are discarded); modifiers always return to hand.
    pub fn remove_card_from_position(
        &mut self,
        state: &mut GameState,
        position_index: usize,
        skip_redraw: bool,
        events: &mut EventBus,
    ) -> Result<(), PlaceError> {
        if state.phase != Phase::DrawPlacement {
            return Err(PlaceError::WrongPhase(state.phase));
        }
        let side = state.current_turn;
        let pos = state
            .action_bar
            .position_mut(position_index)
            .ok_or(PlaceError::UnknownPosition(position_index))?;
        if pos.owner != side {
            return Err(PlaceError::NotYourPosition);
        }
        let stack = pos
            .stack
            .take()
            .ok_or(PlaceError::EmptyPosition(position_index))?;

        let name = stack.core_card.name.clone();
        let actor = state.actor_mut(side);
        actor.ap_used = actor.ap_used.saturating_sub(1);
        actor.energy = (actor.energy + stack.core_card.energy_cost).min(actor.max_energy);
        if let Some(count) = actor.types_played_this_round.get_mut(&name) {
            if *count <= 1 {
                actor.types_played_this_round.remove(&name);
            } else {
                *count -= 1;
            }
        }
        if !stack.core_card.from_picker {
            actor.hand.push(stack.core_card);
        }
        actor.hand.extend(stack.modifiers);

        events.push(Event::StackRemoved {
            side,
            position: position_index,
            name,
        });
        if !skip_redraw {
            events.push(Event::BoardChanged);
        }
        Ok(())
    }
}

/// Remove the hand instance matching `card`: by id when both carry one,
/// by name+type for untagged legacy cards.
fn remove_from_hand(actor: &mut Actor, card: &Card) {
    if let Some(idx) = actor.hand.iter().position(|held| held.matches_instance(card)) {
        actor.hand.remove(idx);
    }
}
