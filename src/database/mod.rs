pub mod roster_store;
pub mod seed;

pub use roster_store::{RosterError, RosterStore};
pub use seed::{Catalog, SeedError};
