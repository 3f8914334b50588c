//! Kind dispatch and type-erased property access.
//!
//! [`PersistRef`] and [`PersistMut`] are the closed two-variant views the
//! walk engine matches on, and [`Composite`] is the access surface behind
//! their composite arms. None of it requires knowing the concrete type.

// -----------------------------------------------------------------------------
// Modules

mod composite;
mod kind;

// -----------------------------------------------------------------------------
// Exports

pub use composite::{Composite, PropertyIter};
pub use kind::{PersistKind, PersistMut, PersistRef};
