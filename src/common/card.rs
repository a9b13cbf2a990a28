use std::cmp::Ordering;
use std::fmt;
use std::slice::Iter;

use serde::{Deserialize, Serialize};
use strum::EnumCount;
use strum_macros::EnumCount as EnumCountMacro;

use crate::card as generic;

/// The colour of a [FrenchSuit] (spec.md §3 "Card", derived field).
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub enum Color {
    Black,
    Red,
}

/// A classic French-suited [Suit](generic::Suit): Clubs, Spades, Hearts, Diamonds.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, EnumCountMacro, Serialize, Deserialize)]
pub enum FrenchSuit {
    Clubs,
    Spades,
    Hearts,
    Diamonds,
}

impl FrenchSuit {
    pub const N: usize = <FrenchSuit as EnumCount>::COUNT;
    pub const VALUES: [FrenchSuit; FrenchSuit::N] = [
        FrenchSuit::Clubs,
        FrenchSuit::Spades,
        FrenchSuit::Hearts,
        FrenchSuit::Diamonds,
    ];

    /// Red for Hearts/Diamonds, black for Clubs/Spades (spec.md §3).
    pub fn color(&self) -> Color {
        match self {
            FrenchSuit::Clubs => Color::Black,
            FrenchSuit::Spades => Color::Black,
            FrenchSuit::Hearts => Color::Red,
            FrenchSuit::Diamonds => Color::Red,
        }
    }

    /// The index of this suit's [FoundationSlot](crate::common::pile::FoundationSlot)
    /// in a [Game](crate::game::Game).
    pub fn index(&self) -> usize {
        FrenchSuit::VALUES.iter().position(|s| s == self).unwrap()
    }
}

impl generic::Suit for FrenchSuit {
    fn iter() -> Iter<'static, Self> {
        FrenchSuit::VALUES.iter()
    }
}

impl fmt::Display for FrenchSuit {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            FrenchSuit::Clubs => write!(f, "♣"),
            FrenchSuit::Spades => write!(f, "♠"),
            FrenchSuit::Hearts => write!(f, "♥"),
            FrenchSuit::Diamonds => write!(f, "♦"),
        }
    }
}

/// The standard ranks of a card, Ace through King. `Ord` follows play
/// order (Ace low), matching spec.md §4.1's 1..13 rank table.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, EnumCountMacro, Serialize, Deserialize)]
pub enum Rank {
    Ace,
    Two,
    Three,
    Four,
    Five,
    Six,
    Seven,
    Eight,
    Nine,
    Ten,
    Jack,
    Queen,
    King,
}

impl Rank {
    pub const N: usize = <Rank as EnumCount>::COUNT;
    pub const VALUES: [Rank; Rank::N] = [
        Rank::Ace,
        Rank::Two,
        Rank::Three,
        Rank::Four,
        Rank::Five,
        Rank::Six,
        Rank::Seven,
        Rank::Eight,
        Rank::Nine,
        Rank::Ten,
        Rank::Jack,
        Rank::Queen,
        Rank::King,
    ];

    /// Parses the textual rank table of spec.md §4.1 ("ACE".."KING" or "1".."13").
    pub fn from_text(s: &str) -> Option<Rank> {
        Some(match s.to_ascii_uppercase().as_str() {
            "A" | "ACE" | "1" => Rank::Ace,
            "2" => Rank::Two,
            "3" => Rank::Three,
            "4" => Rank::Four,
            "5" => Rank::Five,
            "6" => Rank::Six,
            "7" => Rank::Seven,
            "8" => Rank::Eight,
            "9" => Rank::Nine,
            "10" | "X" | "T" => Rank::Ten,
            "J" | "JACK" | "11" => Rank::Jack,
            "Q" | "QUEEN" | "12" => Rank::Queen,
            "K" | "KING" | "13" => Rank::King,
            _ => return None,
        })
    }
}

impl Ord for Rank {
    fn cmp(&self, other: &Self) -> Ordering {
        self.value().cmp(&other.value())
    }
}

impl PartialOrd for Rank {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl generic::Rank for Rank {
    fn iter() -> Iter<'static, Self> {
        Rank::VALUES.iter()
    }

    fn value(&self) -> u8 {
        match self {
            Rank::Ace => 1,
            Rank::Two => 2,
            Rank::Three => 3,
            Rank::Four => 4,
            Rank::Five => 5,
            Rank::Six => 6,
            Rank::Seven => 7,
            Rank::Eight => 8,
            Rank::Nine => 9,
            Rank::Ten => 10,
            Rank::Jack => 11,
            Rank::Queen => 12,
            Rank::King => 13,
        }
    }
}

impl fmt::Display for Rank {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Rank::King => write!(f, "K"),
            Rank::Queen => write!(f, "Q"),
            Rank::Jack => write!(f, "J"),
            Rank::Ten => write!(f, "X"),
            Rank::Nine => write!(f, "9"),
            Rank::Eight => write!(f, "8"),
            Rank::Seven => write!(f, "7"),
            Rank::Six => write!(f, "6"),
            Rank::Five => write!(f, "5"),
            Rank::Four => write!(f, "4"),
            Rank::Three => write!(f, "3"),
            Rank::Two => write!(f, "2"),
            Rank::Ace => write!(f, "A"),
        }
    }
}

/// A standard playing card with a per-card face-up bit (spec.md §3's
/// `(card, face-up boolean)` pair, flattened onto the card itself for a
/// simpler, value-typed representation — see DESIGN.md).
///
/// Equality and ordering only ever consider `suit`/`rank`: two cards with
/// the same identity but different visibility still compare equal, per
/// spec.md §3 ("Equality is by (rank,suit)").
#[derive(Debug, Copy, Clone, Serialize, Deserialize)]
pub struct Card {
    pub suit: FrenchSuit,
    pub rank: Rank,
    pub face_up: bool,
}

impl Card {
    pub const N: usize = FrenchSuit::N * Rank::N;

    /// A face-down card of the given identity — the default state for
    /// every card when first dealt (spec.md §4.2).
    pub fn face_down(suit: FrenchSuit, rank: Rank) -> Card {
        Card {
            suit,
            rank,
            face_up: false,
        }
    }

    /// A face-up card of the given identity.
    pub fn face_up(suit: FrenchSuit, rank: Rank) -> Card {
        Card {
            suit,
            rank,
            face_up: true,
        }
    }

    pub fn color(&self) -> Color {
        self.suit.color()
    }

    fn from_index(i: usize) -> Card {
        Card::face_down(FrenchSuit::VALUES[i / Rank::N], Rank::VALUES[i % Rank::N])
    }
}

impl PartialEq for Card {
    fn eq(&self, other: &Self) -> bool {
        self.suit == other.suit && self.rank == other.rank
    }
}

impl Eq for Card {}

impl std::hash::Hash for Card {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.suit.hash(state);
        self.rank.hash(state);
    }
}

impl Ord for Card {
    fn cmp(&self, other: &Self) -> Ordering {
        self.rank.cmp(&other.rank)
    }
}

impl PartialOrd for Card {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}{}", self.rank, self.suit)
    }
}

impl generic::Card<{ Card::N }> for Card {
    fn new_deck() -> Deck {
        (0..Card::N).map(Card::from_index).collect()
    }
}

/// A full 52-card deck of [Card].
pub type Deck = generic::Deck<Card, { Card::N }>;

/// An ordered run of [Card]s.
pub type Stack = generic::Stack<Card>;
