//! Entity trait: identity that survives state changes.
//!
//! A car keeps its identifier from listing through sale and across reloads.

/// Entity marker + minimal interface.
pub trait Entity {
    /// Strongly-typed entity identifier.
    type Id: Clone + Eq + core::hash::Hash + core::fmt::Debug;

    fn id(&self) -> &Self::Id;
}
