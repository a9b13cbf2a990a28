use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};

use klondike_engine::card::Card as CardTrait;
use klondike_engine::common::Card;
use klondike_engine::variant::klondike::deal;

pub fn bench_deal(c: &mut Criterion) {
    let deck = Card::new_deck();

    let mut group = c.benchmark_group("klondike::deal");
    group.bench_function(BenchmarkId::new("deal", "Deck"), |b| {
        b.iter(|| deal(deck.clone(), "bench-deck".to_string()).unwrap())
    });
    group.finish();
}

pub fn bench_move_tableau_to_tableau(c: &mut Criterion) {
    let deck = Card::new_deck();
    let game = deal(deck, "bench-deck".to_string()).unwrap();

    let mut group = c.benchmark_group("Game::move_tableau_to_tableau");
    group.bench_function(BenchmarkId::new("rejected_move", "_"), |b| {
        b.iter(|| game.move_tableau_to_tableau(0, 1, 1))
    });
    group.finish();
}

criterion_group!(benches, bench_deal, bench_move_tableau_to_tableau);
criterion_main!(benches);
