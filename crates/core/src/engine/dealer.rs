use super::Engine;
use crate::{Card, CardType, ItemKind};

impl Engine {
    /// One-time starting kit for an actor's equipment stack: a random
    /// weapon, a random armor and a random apparel card from the given
    /// pools, each falling back to a basic common item when its pool has
    /// nothing suitable.
    pub fn deal_initial_stack(&mut self, apparel_cards: &[Card], item_cards: &[Card]) -> Vec<Card> {
        let mut stack = Vec::with_capacity(3);

        let weapons: Vec<Card> = item_cards
            .iter()
            .filter(|card| card.card_type == CardType::Item(ItemKind::Weapon))
            .cloned()
            .collect();
        stack.push(match self.random_pick(&weapons) {
            Some(weapon) => weapon,
            None => self.basic_blade(),
        });

        let armors: Vec<Card> = item_cards
            .iter()
            .filter(|card| card.card_type == CardType::Item(ItemKind::Armor))
            .cloned()
            .collect();
        stack.push(match self.random_pick(&armors) {
            Some(armor) => armor,
            None => self.basic_armor(),
        });

        stack.push(match self.random_pick(apparel_cards) {
            Some(apparel) => apparel,
            None => self.basic_garb(),
        });

        stack
    }

    fn random_pick(&mut self, pool: &[Card]) -> Option<Card> {
        if pool.is_empty() {
            return None;
        }
        let mut shuffled = self.rng.shuffled(pool);
        Some(shuffled.swap_remove(0))
    }

    fn basic_blade(&mut self) -> Card {
        let mut card = Card::item(ItemKind::Weapon, "Basic Blade");
        card.slot = Some("Hand (1H)".to_string());
        card.rarity = Some("COMMON".to_string());
        card.atk = 2;
        card.range = Some("Melee".to_string());
        card.damage_type = Some("Slashing".to_string());
        card.effect = Some("+2 ATK".to_string());
        self.tag_card(&mut card);
        card
    }

    fn basic_armor(&mut self) -> Card {
        let mut card = Card::item(ItemKind::Armor, "Basic Armor");
        card.slot = Some("Body".to_string());
        card.rarity = Some("COMMON".to_string());
        card.def = 2;
        card.effect = Some("+2 DEF".to_string());
        self.tag_card(&mut card);
        card
    }

    fn basic_garb(&mut self) -> Card {
        let mut card = Card::apparel("Basic Garb");
        card.slot = Some("Body".to_string());
        card.def = 1;
        card.effect = Some("+1 DEF".to_string());
        self.tag_card(&mut card);
        card
    }
}
