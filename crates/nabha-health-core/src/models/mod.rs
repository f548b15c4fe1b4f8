//! Domain models for the Nabha Health screens.

mod appointment;
mod medicine;
mod pharmacy;
mod record;

pub use appointment::*;
pub use medicine::*;
pub use pharmacy::*;
pub use record::*;
