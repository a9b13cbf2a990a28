use rand::seq::SliceRandom;
use std::slice::Iter;

/// The suit of a [Card], e.g. Clubs, Hearts, etc.
pub trait Suit: Sized + Copy + Eq {
    /// An iterator of all the valid [Suit]s a [Card] can have.
    fn iter() -> Iter<'static, Self>;
}

/// The rank of a [Card]. `Ord` is defined over the rank's play order
/// (Ace low, King high) per spec.md §4.1.
pub trait Rank: Sized + Copy + Eq + Ord {
    /// An iterator of all the valid [Rank]s a [Card] can have.
    fn iter() -> Iter<'static, Self>;

    /// The card's numeric rank, 1 (Ace) through 13 (King).
    fn value(&self) -> u8;
}

/// A deck-defining card type: fixes the deck size `N` and knows how to
/// produce a complete, freshly-ordered deck of itself.
pub trait Card<const N: usize>: Sized + Copy + Eq {
    /// Builds one of every card, in a fixed canonical order (not shuffled).
    fn new_deck() -> Deck<Self, N>;
}

/// A full deck of `N` distinct cards.
pub type Deck<C, const N: usize> = Vec<C>;

/// An ordered run of cards, e.g. a tableau column or a foundation pile.
pub type Stack<C> = Vec<C>;

/// Creates a complete, canonically-ordered deck via [Card::new_deck].
pub fn new_deck<C: Card<N>, const N: usize>() -> Deck<C, N> {
    C::new_deck()
}

/// Shuffles the given deck in place, using [rand::thread_rng()].
pub fn shuffle<C: Copy, const N: usize>(d: &mut Deck<C, N>) {
    shuffle_with_rng(d, &mut rand::thread_rng())
}

/// Shuffles the given deck in place, using the supplied [rand::Rng].
pub fn shuffle_with_rng<C: Copy, const N: usize, RNG: rand::Rng>(d: &mut Deck<C, N>, r: &mut RNG) {
    d.shuffle(r)
}
