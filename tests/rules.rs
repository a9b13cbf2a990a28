use klondike_engine::common::{Card, FoundationSlot, FrenchSuit, Rank, Stock, Talon, TableauSlot};
use klondike_engine::error::Error;
use klondike_engine::game::NUM_FOUNDATIONS;
use klondike_engine::Game;
use test_util::parse;

fn empty_foundations() -> [FoundationSlot; NUM_FOUNDATIONS] {
    FrenchSuit::VALUES.map(FoundationSlot::new)
}

fn empty_columns() -> [Vec<&'static str>; 7] {
    [vec![], vec![], vec![], vec![], vec![], vec![], vec![]]
}

fn game_with(tableau: [Vec<&str>; 7], stock: Vec<&str>, talon: Vec<&str>) -> Game {
    let tableau = tableau.map(|col| TableauSlot::from_cards(parse::cards(&col)));
    let stock = Stock::from_cards(parse::cards(&stock));
    let mut talon_pile = Talon::new();
    for card in parse::cards(&talon) {
        talon_pile.push(card);
    }
    Game::from_parts(
        tableau,
        empty_foundations(),
        stock,
        talon_pile,
        "test-deck".to_string(),
    )
}

#[test]
fn draw_stock_moves_at_most_three_cards_onto_the_talon() {
    let game = game_with(empty_columns(), vec!["#4C", "#3C", "#2C", "#AH"], vec![]);

    let game = game.draw_stock().unwrap();
    assert_eq!(game.stock.cards(), parse::cards(&["#4C"]).as_slice());
    assert_eq!(
        game.talon.cards(),
        parse::cards(&["AH", "2C", "3C"]).as_slice()
    );
}

#[test]
fn draw_stock_drains_a_shorter_stock_entirely() {
    let game = game_with(empty_columns(), vec!["#KC", "#AH"], vec![]);

    let game = game.draw_stock().unwrap();
    assert!(game.stock.is_empty());
    assert_eq!(game.talon.cards(), parse::cards(&["AH", "KC"]).as_slice());
}

#[test]
fn draw_stock_on_an_empty_stock_is_rejected() {
    let game = game_with(empty_columns(), vec![], vec!["AH"]);
    assert_eq!(game.draw_stock(), Err(Error::EmptyStock));
}

#[test]
fn reset_stock_replays_the_original_stock_order() {
    let game = game_with(
        empty_columns(),
        vec!["#2C", "#3C", "#4C", "#5C", "#6C"],
        vec![],
    );

    let game = game.draw_stock().unwrap();
    let game = game.draw_stock().unwrap();
    let game = game.reset_stock().unwrap();

    assert_eq!(
        game.stock.cards(),
        parse::cards(&["#2C", "#3C", "#4C", "#5C", "#6C"]).as_slice()
    );
    assert!(game.talon.is_empty());
}

#[test]
fn reset_stock_requires_an_empty_stock() {
    let game = game_with(empty_columns(), vec!["#AH"], vec!["2C"]);
    assert_eq!(game.reset_stock(), Err(Error::StockNotEmpty));
}

#[test]
fn reset_stock_requires_a_nonempty_talon() {
    let game = game_with(empty_columns(), vec![], vec![]);
    assert_eq!(game.reset_stock(), Err(Error::EmptyTalon));
}

#[test]
fn talon_to_tableau_requires_a_king_onto_an_empty_column() {
    let game = game_with(empty_columns(), vec![], vec!["AH"]);
    assert_eq!(game.move_talon_to_tableau(0), Err(Error::IllegalPlacement));
}

#[test]
fn talon_to_tableau_moves_a_matching_card() {
    let mut columns = empty_columns();
    columns[0] = vec!["2S"];
    let game = game_with(columns, vec![], vec!["AH"]);

    let game = game.move_talon_to_tableau(0).unwrap();
    assert!(game.talon.is_empty());
    assert_eq!(
        game.tableau[0].cards(),
        parse::cards(&["2S", "AH"]).as_slice()
    );
}

#[test]
fn tableau_to_tableau_rejects_a_mismatched_destination() {
    let mut columns = empty_columns();
    columns[0] = vec!["2S"];
    columns[1] = vec!["3S"];
    let game = game_with(columns, vec![], vec![]);

    assert_eq!(
        game.move_tableau_to_tableau(0, 1, 1),
        Err(Error::IllegalPlacement)
    );
}

#[test]
fn tableau_to_tableau_moves_a_run_and_reveals_the_new_top() {
    let mut columns = empty_columns();
    columns[0] = vec!["#5H", "4C", "3D"];
    columns[1] = vec!["5D"];
    let game = game_with(columns, vec![], vec![]);

    let game = game.move_tableau_to_tableau(0, 1, 2).unwrap();
    assert_eq!(
        game.tableau[1].cards(),
        parse::cards(&["5D", "4C", "3D"]).as_slice()
    );
    assert!(game.tableau[0].top().unwrap().face_up);
}

#[test]
fn tableau_to_tableau_refuses_to_move_a_face_down_card() {
    let mut columns = empty_columns();
    columns[0] = vec!["#5H", "4C"];
    columns[1] = vec!["6S"];
    let game = game_with(columns, vec![], vec![]);

    assert_eq!(
        game.move_tableau_to_tableau(0, 1, 2),
        Err(Error::FaceDownMove)
    );
}

#[test]
fn tableau_to_foundation_requires_an_ace_first() {
    let mut columns = empty_columns();
    columns[0] = vec!["2C"];
    let game = game_with(columns, vec![], vec![]);

    assert_eq!(
        game.move_tableau_to_foundation(0, FrenchSuit::Clubs),
        Err(Error::IllegalPlacement)
    );
}

#[test]
fn tableau_to_foundation_rejects_a_suit_mismatch() {
    let mut columns = empty_columns();
    columns[0] = vec!["AC"];
    let game = game_with(columns, vec![], vec![]);

    assert_eq!(
        game.move_tableau_to_foundation(0, FrenchSuit::Hearts),
        Err(Error::SuitMismatch)
    );
}

#[test]
fn talon_to_foundation_builds_up_in_rank_order() {
    let game = game_with(empty_columns(), vec![], vec!["AH"]);
    let game = game.move_talon_to_foundation(FrenchSuit::Hearts).unwrap();
    assert_eq!(
        game.foundation(FrenchSuit::Hearts).top().unwrap().rank,
        Rank::Ace
    );

    let mut game = game;
    game.talon.push(parse::card("2H"));
    let game = game.move_talon_to_foundation(FrenchSuit::Hearts).unwrap();
    assert_eq!(
        game.foundation(FrenchSuit::Hearts).top().unwrap().rank,
        Rank::Two
    );
}

/// Completes three suits outright and leaves Spades one King short of
/// complete, then plays that King to check win detection and the
/// subsequent freeze (spec.md §4.3.7, §8).
#[test]
fn completing_every_foundation_wins_and_freezes_the_game() {
    let mut foundations = empty_foundations();
    for suit in FrenchSuit::VALUES {
        let last_rank = if suit == FrenchSuit::Spades {
            Rank::Queen
        } else {
            Rank::King
        };
        for rank in Rank::VALUES {
            foundations[suit.index()].push(Card::face_up(suit, rank));
            if rank == last_rank {
                break;
            }
        }
    }

    let mut columns = empty_columns();
    columns[0] = vec!["KS"];
    let game = Game::from_parts(
        columns.map(|col| TableauSlot::from_cards(parse::cards(&col))),
        foundations,
        Stock::new(),
        Talon::new(),
        "test-deck".to_string(),
    );

    assert!(!game.is_won());
    let game = game
        .move_tableau_to_foundation(0, FrenchSuit::Spades)
        .unwrap();
    assert!(game.is_won());
    assert!(game.is_frozen());
    assert_eq!(game.move_talon_to_tableau(1), Err(Error::GameOver));

    // draw/reset-stock are not "move" operations (spec.md §6) and stay
    // available after a win; an empty stock still rejects with
    // EmptyStock rather than GameOver.
    assert_eq!(game.draw_stock(), Err(Error::EmptyStock));
}
