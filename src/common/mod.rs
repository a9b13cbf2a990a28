//! "Standard" solitaire concepts shared by every variant: French-suited
//! playing cards and the pile abstractions built on top of them
//! (spec.md §3, §4.1).

pub mod card;
pub use card::*;

pub mod pile;
pub use pile::*;
