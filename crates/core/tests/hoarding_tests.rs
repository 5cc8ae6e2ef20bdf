use gambit_core::{
    Actor, Card, Catalog, Engine, EventBus, GameState, ItemKind, OffensiveSource, Side,
};

fn setup() -> (Engine, GameState, EventBus) {
    let engine = Engine::new(Catalog::builtin(), 21);
    let state = GameState::new(Actor::new(2, 10), Actor::new(2, 10));
    (engine, state, EventBus::default())
}

#[test]
fn lethargy_strips_unplayed_duplicates_to_the_encounter_deck() {
    let (mut engine, mut state, mut events) = setup();
    state.player.hand = vec![
        Card::action("Attack"),
        Card::action("Attack"),
        Card::action("Attack"),
        Card::action("Flee"),
        Card::skill("Parry"),
    ];

    let results = engine.check_lethargy(&mut state, Side::Player, &mut events);

    assert_eq!(results.len(), 1);
    assert_eq!(results[0].action, "Attack");
    assert_eq!(results[0].stripped, 2);
    // One Attack kept, Flee (single copy) and the skill untouched.
    assert_eq!(state.player.hand.len(), 3);
    assert_eq!(state.encounter_deck.len(), 2);
}

#[test]
fn lethargy_spares_actions_played_this_round() {
    let (mut engine, mut state, mut events) = setup();
    state.player.hand = vec![Card::action("Attack"), Card::action("Attack")];
    state
        .player
        .types_played_this_round
        .insert("Attack".to_string(), 1);

    let results = engine.check_lethargy(&mut state, Side::Player, &mut events);
    assert!(results.is_empty());
    assert_eq!(state.player.hand.len(), 2);
}

#[test]
fn exhausted_strips_extras_of_a_failed_overplayed_action() {
    let (mut engine, mut state, mut events) = setup();
    state.player.hand = vec![
        Card::action("Attack"),
        Card::action("Attack"),
        Card::action("Attack"),
    ];
    state
        .player
        .types_played_this_round
        .insert("Attack".to_string(), 2);

    let result = engine
        .check_exhausted(&mut state, Side::Player, "Attack", &mut events)
        .expect("exhausted should trigger");
    assert_eq!(result.stripped, 2);
    assert_eq!(state.player.hand.len(), 1);
    assert_eq!(state.encounter_deck.len(), 2);
}

#[test]
fn exhausted_needs_two_plays_and_two_spares() {
    let (mut engine, mut state, mut events) = setup();
    state.player.hand = vec![Card::action("Attack"), Card::action("Attack")];
    state
        .player
        .types_played_this_round
        .insert("Attack".to_string(), 1);
    assert!(engine
        .check_exhausted(&mut state, Side::Player, "Attack", &mut events)
        .is_none());

    state
        .player
        .types_played_this_round
        .insert("Attack".to_string(), 2);
    state.player.hand = vec![Card::action("Attack")];
    assert!(engine
        .check_exhausted(&mut state, Side::Player, "Attack", &mut events)
        .is_none());
}

#[test]
fn ensure_offensive_promotes_from_piles_before_synthesizing() {
    let (mut engine, mut state, mut events) = setup();
    state.player.draw_pile = vec![Card::skill("Parry"), Card::action("Attack")];
    engine.ensure_offensive_card(&mut state, Side::Player, &mut events);
    assert_eq!(state.player.hand.len(), 1);
    assert_eq!(state.player.draw_pile.len(), 1);

    // Already holding one: nothing happens.
    engine.ensure_offensive_card(&mut state, Side::Player, &mut events);
    assert_eq!(state.player.hand.len(), 1);

    let (mut engine, mut state, mut events) = setup();
    state.opponent.discard_pile = vec![Card::action("Attack")];
    engine.ensure_offensive_card(&mut state, Side::Opponent, &mut events);
    assert_eq!(state.opponent.hand.len(), 1);
    assert!(state.opponent.discard_pile.is_empty());

    let (mut engine, mut state, mut events) = setup();
    engine.ensure_offensive_card(&mut state, Side::Player, &mut events);
    assert_eq!(state.player.hand.len(), 1);
    assert_eq!(state.player.hand[0].name, "Attack");
    assert!(events.drain().any(|event| matches!(
        event,
        gambit_core::Event::OffensiveGranted {
            source: OffensiveSource::Synthesized,
            ..
        }
    )));
}

#[test]
fn initial_stack_falls_back_to_basic_equipment() {
    let (mut engine, _, _) = setup();
    let kit = engine.deal_initial_stack(&[], &[]);
    let names: Vec<&str> = kit.iter().map(|card| card.name.as_str()).collect();
    assert_eq!(names, vec!["Basic Blade", "Basic Armor", "Basic Garb"]);
    assert_eq!(kit[0].atk, 2);
    assert_eq!(kit[1].def, 2);
    assert_eq!(kit[2].def, 1);
}

#[test]
fn initial_stack_picks_from_the_pools_when_available() {
    let (mut engine, _, _) = setup();
    let items = vec![
        Card::item(ItemKind::Weapon, "Sword"),
        Card::item(ItemKind::Armor, "Mail"),
        Card::item(ItemKind::Consumable, "Herb"),
    ];
    let apparel = vec![Card::apparel("Cloak")];

    let kit = engine.deal_initial_stack(&apparel, &items);
    let names: Vec<&str> = kit.iter().map(|card| card.name.as_str()).collect();
    assert_eq!(names, vec!["Sword", "Mail", "Cloak"]);
}
