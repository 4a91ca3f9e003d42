// Game Cheats Manager Core
// Settings and localization bootstrap for the trainer manager

mod bootstrap;
mod error;
mod models;
mod services;

pub use bootstrap::*;
pub use error::*;
pub use models::*;
pub use services::*;
