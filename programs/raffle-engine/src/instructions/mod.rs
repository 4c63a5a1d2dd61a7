pub use check_upkeep::*;
pub use enter_raffle::*;
pub use fulfill_random_words::*;
pub use initialize::*;
pub use perform_upkeep::*;
pub use sweep_vault::*;
pub use views::*;

pub mod check_upkeep;
pub mod enter_raffle;
pub mod fulfill_random_words;
pub mod initialize;
pub mod perform_upkeep;
pub mod sweep_vault;
pub mod views;
