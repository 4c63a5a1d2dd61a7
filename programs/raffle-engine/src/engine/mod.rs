//! Round logic that does not touch accounts directly. Instruction handlers
//! feed it the clock and the payout capability.

pub use request::*;
pub use settlement::*;
pub use upkeep::*;

pub mod request;
pub mod settlement;
pub mod upkeep;
