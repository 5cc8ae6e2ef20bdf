use crate::StackRule;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum ItemKind {
    Weapon,
    Armor,
    Consumable,
    Material,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum CardType {
    Action,
    Talk,
    Magic,
    Skill,
    Item(ItemKind),
    Apparel,
    Encounter,
    Scenario,
    Loot,
    Character,
}

impl CardType {
    /// Core types anchor an action-bar stack and pay AP/energy.
    pub fn is_core(self) -> bool {
        matches!(self, CardType::Action | CardType::Talk | CardType::Magic)
    }

    /// Types that stack on top of an existing core card when dropped on it.
    /// Magic is deliberately absent: dropped on a bar it is a core action,
    /// it only modifies via the explicit force-modifier path.
    pub fn is_modifier(self) -> bool {
        matches!(self, CardType::Skill | CardType::Item(_))
    }
}

/// Effective category used for duplicate detection and compatibility:
/// items key on their subtype, everything else keys on the card type.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum Category {
    Action,
    Talk,
    Magic,
    Skill,
    Weapon,
    Armor,
    Consumable,
    Material,
    Apparel,
    Encounter,
    Scenario,
    Loot,
    Character,
}

impl Category {
    pub fn label(self) -> &'static str {
        match self {
            Category::Action => "action",
            Category::Talk => "talk",
            Category::Magic => "magic",
            Category::Skill => "skill",
            Category::Weapon => "weapon",
            Category::Armor => "armor",
            Category::Consumable => "consumable",
            Category::Material => "material",
            Category::Apparel => "apparel",
            Category::Encounter => "encounter",
            Category::Scenario => "scenario",
            Category::Loot => "loot",
            Category::Character => "character",
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Card {
    pub card_type: CardType,
    pub name: String,
    /// Instance id assigned at creation; 0 marks untagged legacy data,
    /// which falls back to name+type matching on hand removal.
    #[serde(default)]
    pub id: u32,
    #[serde(default)]
    pub energy_cost: i32,
    #[serde(default)]
    pub roll: Option<String>,
    #[serde(default)]
    pub on_hit: Option<String>,
    #[serde(default)]
    pub stack_with: Option<StackRule>,
    /// Synthesized by the icon picker; never a member of a hand array.
    #[serde(default)]
    pub from_picker: bool,
    #[serde(default)]
    pub slot: Option<String>,
    #[serde(default)]
    pub rarity: Option<String>,
    #[serde(default)]
    pub atk: i32,
    #[serde(default)]
    pub def: i32,
    #[serde(default)]
    pub effect: Option<String>,
    #[serde(default)]
    pub range: Option<String>,
    #[serde(default)]
    pub damage_type: Option<String>,
}

impl Card {
    pub fn new(card_type: CardType, name: impl Into<String>) -> Self {
        Self {
            card_type,
            name: name.into(),
            id: 0,
            energy_cost: 0,
            roll: None,
            on_hit: None,
            stack_with: None,
            from_picker: false,
            slot: None,
            rarity: None,
            atk: 0,
            def: 0,
            effect: None,
            range: None,
            damage_type: None,
        }
    }

    pub fn action(name: impl Into<String>) -> Self {
        Self::new(CardType::Action, name)
    }

    pub fn skill(name: impl Into<String>) -> Self {
        Self::new(CardType::Skill, name)
    }

    pub fn magic(name: impl Into<String>) -> Self {
        Self::new(CardType::Magic, name)
    }

    pub fn item(kind: ItemKind, name: impl Into<String>) -> Self {
        Self::new(CardType::Item(kind), name)
    }

    pub fn apparel(name: impl Into<String>) -> Self {
        Self::new(CardType::Apparel, name)
    }

    pub fn category(&self) -> Category {
        match self.card_type {
            CardType::Action => Category::Action,
            CardType::Talk => Category::Talk,
            CardType::Magic => Category::Magic,
            CardType::Skill => Category::Skill,
            CardType::Item(ItemKind::Weapon) => Category::Weapon,
            CardType::Item(ItemKind::Armor) => Category::Armor,
            CardType::Item(ItemKind::Consumable) => Category::Consumable,
            CardType::Item(ItemKind::Material) => Category::Material,
            CardType::Apparel => Category::Apparel,
            CardType::Encounter => Category::Encounter,
            CardType::Scenario => Category::Scenario,
            CardType::Loot => Category::Loot,
            CardType::Character => Category::Character,
        }
    }

    /// Instance match for hand removal: ids when both cards carry one,
    /// name+type structural equality otherwise.
    pub fn matches_instance(&self, other: &Card) -> bool {
        if self.id != 0 && other.id != 0 {
            return self.id == other.id;
        }
        self.name == other.name && self.card_type == other.card_type
    }
}

/// Hands out instance ids, starting at 1 so 0 stays the legacy marker.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CardIdAllocator {
    next: u32,
}

impl Default for CardIdAllocator {
    fn default() -> Self {
        Self { next: 1 }
    }
}

impl CardIdAllocator {
    pub fn next_id(&mut self) -> u32 {
        let id = self.next;
        self.next = self.next.saturating_add(1);
        id
    }

    pub fn tag(&mut self, card: &mut Card) {
        if card.id == 0 {
            card.id = self.next_id();
        }
    }
}
