use crate::Side;
use serde::{Deserialize, Serialize};

/// Where `ensure_offensive_card` found (or made) the guaranteed Attack.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum OffensiveSource {
    DrawPile,
    DiscardPile,
    Synthesized,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub enum Event {
    CardAnted {
        side: Side,
        name: String,
    },
    PotGained {
        name: String,
        reason: String,
    },
    LootGained {
        name: String,
        source: String,
    },
    PotClaimed {
        winner: Side,
        cards: usize,
        loot: usize,
    },
    JackpotTriggered {
        winner: Side,
        pot_size: usize,
    },
    DiscardReshuffled {
        side: Side,
        count: usize,
    },
    CardDrawn {
        side: Side,
        name: String,
    },
    CorePlaced {
        side: Side,
        position: usize,
        name: String,
    },
    ModifierAdded {
        side: Side,
        position: usize,
        name: String,
    },
    StackRemoved {
        side: Side,
        position: usize,
        name: String,
    },
    /// The redraw notification: pushed exactly once per successful
    /// placement or removal. Purely observational; dropping it never
    /// affects state correctness.
    BoardChanged,
    LethargyStripped {
        side: Side,
        action: String,
        count: usize,
    },
    ExhaustedStripped {
        side: Side,
        action: String,
        count: usize,
    },
    OffensiveGranted {
        side: Side,
        source: OffensiveSource,
    },
}

#[derive(Debug, Default)]
pub struct EventBus {
    queue: Vec<Event>,
}

impl EventBus {
    pub fn push(&mut self, event: Event) {
        self.queue.push(event);
    }

    pub fn drain(&mut self) -> impl Iterator<Item = Event> + '_ {
        self.queue.drain(..)
    }
}
