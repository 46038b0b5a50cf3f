//! Domain models for Agro-Info

mod crop;
mod farm_state;
mod field;
mod phase;
mod weather;

pub use crop::*;
pub use farm_state::*;
pub use field::*;
pub use phase::*;
pub use weather::*;
