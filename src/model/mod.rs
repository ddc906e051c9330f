//! Data structures for lost and found item reports.
//!
//! The matching engine treats every [`Item`] as an immutable snapshot for the
//! duration of one matching call. Records are produced by an
//! [`ItemRepository`](crate::repository::ItemRepository) and results come back
//! as [`MatchCandidate`] values owned by the caller.

mod candidate;
mod item;

pub use candidate::*;
pub use item::*;
