//! Bot versions behind the Strategy seam

pub mod drifter;
pub mod scout;
pub mod sentinel;

mod traits;
pub use traits::{Strategy, TurnView};

pub use drifter::Drifter;
pub use scout::Scout;
pub use sentinel::Sentinel;
