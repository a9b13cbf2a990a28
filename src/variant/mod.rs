//! Game variants built on the [common](crate::common) pile abstractions.
//! Only Klondike is implemented; see spec.md §1 for the scope boundary.

pub mod klondike;
