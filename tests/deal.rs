use klondike_engine::card::Card as CardTrait;
use klondike_engine::common::Card;
use klondike_engine::error::Error;
use klondike_engine::game::NUM_TABLEAU;
use klondike_engine::variant::klondike::deal;

#[test]
fn deal_lays_out_tableau_triangle_and_reveals_tops() {
    let deck = Card::new_deck();
    let game = deal(deck, "deck-1".to_string()).unwrap();

    let mut dealt = 0;
    for (i, slot) in game.tableau.iter().enumerate() {
        assert_eq!(slot.len(), i + 1);
        dealt += slot.len();

        for card in &slot.cards()[..slot.len() - 1] {
            assert!(!card.face_up);
        }
        assert!(slot.top().unwrap().face_up);
    }

    assert_eq!(game.stock.len(), Card::N - dealt);
    assert!(game.talon.is_empty());
    assert!(game.foundations.iter().all(|f| f.is_empty()));
    assert_eq!(game.deck_id, "deck-1");
}

#[test]
fn deal_rejects_a_short_deck() {
    let mut deck = Card::new_deck();
    deck.pop();
    assert_eq!(deal(deck, "deck-1".to_string()), Err(Error::InvalidDeck));
}

#[test]
fn deal_rejects_a_deck_with_duplicates() {
    let mut deck = Card::new_deck();
    let duplicate = deck[0];
    deck[1] = duplicate;
    assert_eq!(deal(deck, "deck-1".to_string()), Err(Error::InvalidDeck));
}

#[test]
fn dealt_game_round_trips_through_snapshot_and_restore() {
    let deck = Card::new_deck();
    let game = deal(deck, "deck-1".to_string()).unwrap();
    let snapshot = game.snapshot();
    let restored = klondike_engine::Game::restore(snapshot).unwrap();
    assert_eq!(restored, game);
}

#[test]
fn json_round_trip_is_deterministic_and_preserves_state() {
    let deck = Card::new_deck();
    let game = deal(deck, "deck-2".to_string()).unwrap();

    let first = game.to_json().unwrap();
    let second = game.to_json().unwrap();
    assert_eq!(first, second);

    let restored = klondike_engine::Game::from_json(&first).unwrap();
    assert_eq!(restored, game);
}

#[test]
fn corrupt_json_is_rejected() {
    assert_eq!(
        klondike_engine::Game::from_json("not json"),
        Err(Error::CorruptSnapshot)
    );
}

#[test]
fn num_tableau_matches_the_seven_column_layout() {
    assert_eq!(NUM_TABLEAU, 7);
}
