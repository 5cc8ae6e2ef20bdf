use gambit_core::{Actor, Card, Catalog, Engine, EventBus, GameState, Side};

fn setup() -> (Engine, GameState, EventBus) {
    let engine = Engine::new(Catalog::builtin(), 5);
    let state = GameState::new(Actor::new(2, 10), Actor::new(2, 10));
    (engine, state, EventBus::default())
}

fn named(names: &[&str]) -> Vec<Card> {
    names.iter().map(|name| Card::action(*name)).collect()
}

#[test]
fn draws_come_from_the_front_of_the_pile() {
    let (mut engine, mut state, mut events) = setup();
    state.player.draw_pile = named(&["First", "Second", "Third"]);

    engine.draw_cards_for_actor(&mut state, Side::Player, 2, &mut events);

    let hand: Vec<&str> = state.player.hand.iter().map(|c| c.name.as_str()).collect();
    assert_eq!(hand, vec!["First", "Second"]);
    assert_eq!(state.player.draw_pile.len(), 1);
}

#[test]
fn empty_draw_pile_reshuffles_the_discard_pile() {
    let (mut engine, mut state, mut events) = setup();
    state.player.discard_pile = named(&["A", "B", "C", "D"]);

    engine.draw_cards_for_actor(&mut state, Side::Player, 2, &mut events);

    assert_eq!(state.player.hand.len(), 2);
    assert_eq!(state.player.draw_pile.len(), 2);
    assert!(state.player.discard_pile.is_empty());
}

#[test]
fn reshuffle_preserves_the_card_multiset() {
    let (mut engine, mut state, mut events) = setup();
    state.player.discard_pile = named(&["A", "B", "C", "D", "E"]);

    engine.draw_cards_for_actor(&mut state, Side::Player, 5, &mut events);

    let mut hand: Vec<String> = state
        .player
        .hand
        .iter()
        .map(|c| c.name.clone())
        .collect();
    hand.sort();
    assert_eq!(hand, vec!["A", "B", "C", "D", "E"]);
}

#[test]
fn drawing_from_nothing_yields_nothing() {
    let (mut engine, mut state, mut events) = setup();
    engine.draw_cards_for_actor(&mut state, Side::Player, 3, &mut events);
    assert!(state.player.hand.is_empty());
    assert!(state.player.draw_pile.is_empty());
}

#[test]
fn overdrawing_stops_at_the_available_cards() {
    let (mut engine, mut state, mut events) = setup();
    state.player.draw_pile = named(&["A"]);
    state.player.discard_pile = named(&["B", "C"]);

    engine.draw_cards_for_actor(&mut state, Side::Player, 10, &mut events);

    assert_eq!(state.player.hand.len(), 3);
    assert!(state.player.draw_pile.is_empty());
    assert!(state.player.discard_pile.is_empty());
}
