use crate::Category;
use serde::{Deserialize, Serialize};

/// Compatibility rule for what may stack on a core action. Parsed once
/// from the catalog's free-text `stackWith` value; matching stays keyword
/// based so existing catalog data keeps its meaning.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub enum StackRule {
    /// No rule given: any modifier-eligible card is accepted.
    Anything,
    /// The literal rule "none": no modifiers at all.
    Nothing,
    Keywords(KeywordSet),
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct KeywordSet {
    /// Raw rule text, kept for rejection messages.
    pub raw: String,
    pub skill: bool,
    pub weapon: bool,
    pub magic: bool,
    pub consumable: bool,
    pub material: bool,
    pub item: bool,
}

impl StackRule {
    pub fn parse(raw: Option<&str>) -> Self {
        let Some(raw) = raw else {
            return StackRule::Anything;
        };
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return StackRule::Anything;
        }
        if trimmed.eq_ignore_ascii_case("none") {
            return StackRule::Nothing;
        }
        let lower = trimmed.to_lowercase();
        StackRule::Keywords(KeywordSet {
            raw: trimmed.to_string(),
            skill: lower.contains("skill"),
            weapon: lower.contains("weapon"),
            magic: lower.contains("magic"),
            consumable: lower.contains("consumable"),
            material: lower.contains("material"),
            item: lower.contains("item"),
        })
    }

    /// Whether a modifier of the given effective category is accepted.
    /// Item subtypes match their own keyword or the generic `item` token;
    /// armor and apparel only ever match the generic token.
    pub fn allows(&self, category: Category) -> bool {
        match self {
            StackRule::Anything => Self::eligible(category),
            StackRule::Nothing => false,
            StackRule::Keywords(set) => match category {
                Category::Skill => set.skill,
                Category::Magic => set.magic,
                Category::Weapon => set.weapon || set.item,
                Category::Armor => set.item,
                Category::Consumable => set.consumable || set.item,
                Category::Material => set.material || set.item,
                Category::Apparel => set.item,
                _ => false,
            },
        }
    }

    /// Categories that can act as modifiers at all.
    pub fn eligible(category: Category) -> bool {
        matches!(
            category,
            Category::Skill
                | Category::Magic
                | Category::Weapon
                | Category::Armor
                | Category::Consumable
                | Category::Material
                | Category::Apparel
        )
    }

    pub fn describe(&self) -> String {
        match self {
            StackRule::Anything => "anything".to_string(),
            StackRule::Nothing => "nothing".to_string(),
            StackRule::Keywords(set) => set.raw.clone(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ActionDef {
    pub name: String,
    /// Display grouping, e.g. "Offensive" or "Social".
    pub group: String,
    pub icon: String,
    pub energy_cost: i32,
    pub roll: Option<String>,
    pub stack_with: StackRule,
    pub on_hit: Option<String>,
    pub desc: String,
    pub exclusive: bool,
}

impl ActionDef {
    fn builtin(
        name: &str,
        group: &str,
        icon: &str,
        energy_cost: i32,
        roll: Option<&str>,
        stack_with: &str,
        desc: &str,
        exclusive: bool,
    ) -> Self {
        Self {
            name: name.to_string(),
            group: group.to_string(),
            icon: icon.to_string(),
            energy_cost,
            roll: roll.map(str::to_string),
            stack_with: StackRule::parse(Some(stack_with)),
            on_hit: None,
            desc: desc.to_string(),
            exclusive,
        }
    }
}

/// Static action catalog: definitions the icon picker draws from, plus the
/// fallback action list for actors without a character-specific list.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Catalog {
    pub actions: Vec<ActionDef>,
    pub common_actions: Vec<String>,
}

impl Catalog {
    pub fn action(&self, name: &str) -> Option<&ActionDef> {
        self.actions.iter().find(|def| def.name == name)
    }

    /// Hardcoded defaults, used when no catalog file is loaded.
    pub fn builtin() -> Self {
        let actions = vec![
            ActionDef::builtin(
                "Attack",
                "Offensive",
                "swords",
                0,
                Some("1d20 + STR + ATK vs DEF"),
                "Weapon + Skill + Magic",
                "Melee or ranged attack",
                false,
            ),
            ActionDef::builtin(
                "Guard",
                "Defensive",
                "shield",
                0,
                None,
                "Skill",
                "Auto: +3 DEF this round",
                false,
            ),
            ActionDef::builtin(
                "Flee",
                "Movement",
                "directions_run",
                0,
                Some("1d20 + AGI vs difficulty"),
                "Skill",
                "Attempt to escape",
                false,
            ),
            ActionDef::builtin(
                "Rest",
                "Recovery",
                "hotel",
                0,
                None,
                "None",
                "Restore +2 HP, +3 Energy",
                true,
            ),
            ActionDef::builtin(
                "Use Item",
                "Utility",
                "science",
                0,
                None,
                "Consumable item",
                "Apply consumable effect",
                false,
            ),
            ActionDef::builtin(
                "Investigate",
                "Discovery",
                "search",
                0,
                Some("1d20 + INT vs hidden threshold"),
                "Skill",
                "Search for hidden items/info",
                false,
            ),
            ActionDef::builtin(
                "Trade",
                "Social",
                "storefront",
                0,
                None,
                "Item(s) to offer",
                "CHA determines price",
                false,
            ),
            ActionDef::builtin(
                "Craft",
                "Creation",
                "construction",
                2,
                Some("1d20 + INT vs recipe difficulty"),
                "Materials + Skill",
                "Create a new item",
                false,
            ),
            ActionDef::builtin(
                "Steal",
                "Thievery",
                "back_hand",
                0,
                Some("1d20 + AGI vs target DEF"),
                "Skill",
                "Take item from target",
                false,
            ),
            ActionDef::builtin(
                "Talk",
                "Social",
                "chat_bubble",
                5,
                Some("1d20 + CHA vs CHA"),
                "Skill",
                "Negotiate or persuade",
                false,
            ),
            ActionDef::builtin(
                "Feint",
                "Tactical",
                "swap_horiz",
                0,
                Some("1d20 + AGI vs INT"),
                "Skill",
                "Deceive for advantage next action",
                false,
            ),
            ActionDef::builtin(
                "Channel",
                "Magic",
                "auto_fix_high",
                3,
                Some("1d20 + MAG"),
                "Magic Effect + Skill",
                "Cast a spell",
                false,
            ),
        ];
        let common_actions = ["Attack", "Channel", "Flee", "Rest", "Use Item", "Talk"]
            .iter()
            .map(|name| name.to_string())
            .collect();
        Self {
            actions,
            common_actions,
        }
    }
}
