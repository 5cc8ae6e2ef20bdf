use crate::{Card, CardIdAllocator, Catalog, Category, Phase, RngState};
use thiserror::Error;

mod dealer;
mod draw;
mod hoarding;
mod placement;
mod pot;

pub use hoarding::StrippedAction;

/// Combined pot + round-loot size at which claiming triggers the jackpot.
/// A deliberate literal, like the auto-select heuristic in `place_card`.
pub const JACKPOT_THRESHOLD: usize = 5;

#[derive(Debug, Error)]
pub enum PlaceError {
    #[error("not in the placement phase ({0:?})")]
    WrongPhase(Phase),
    #[error("unknown position {0}")]
    UnknownPosition(usize),
    #[error("cannot place on the other side's position")]
    NotYourPosition,
    #[error("position already has an action card: {0}")]
    PositionOccupied(String),
    #[error("{0} cards cannot modify a stack")]
    NotAModifier(&'static str),
    #[error("{0} cards need an action card first")]
    NeedsCoreFirst(&'static str),
    #[error("no core card to modify - place an action first")]
    NoCoreToModify,
    #[error("stack already has a {} modifier", .0.label())]
    DuplicateModifier(Category),
    #[error("modifier shares the core card's {} type", .0.label())]
    ModifierMatchesCore(Category),
    #[error("{core} does not stack with {modifier} (allows: {rule})")]
    Incompatible {
        core: String,
        modifier: String,
        rule: String,
    },
    #[error("no AP remaining")]
    NoApRemaining,
    #[error("not enough energy for {name} (need {need}, have {have})")]
    NotEnoughEnergy {
        name: String,
        need: i32,
        have: i32,
    },
    #[error("{0} already placed this round")]
    ActionAlreadyPlaced(String),
    #[error("unknown action: {0}")]
    UnknownAction(String),
    #[error("position {0} is empty")]
    EmptyPosition(usize),
}

/// The action-resolution engine. Owns the catalog, RNG and id allocator;
/// borrows the caller's `GameState` per operation so multiple sessions can
/// coexist. Every rule violation is an `Err`, never a panic.
#[derive(Debug)]
pub struct Engine {
    pub catalog: Catalog,
    pub rng: RngState,
    ids: CardIdAllocator,
}

impl Engine {
    pub fn new(catalog: Catalog, seed: u64) -> Self {
        Self {
            catalog,
            rng: RngState::from_seed(seed),
            ids: CardIdAllocator::default(),
        }
    }

    /// Assign an instance id to an externally created card.
    pub fn tag_card(&mut self, card: &mut Card) {
        self.ids.tag(card);
    }
}
