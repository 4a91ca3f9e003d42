// Game Cheats Manager Services
// Configuration and localization plumbing

mod locale;
mod logging;
mod resources;
mod settings_manager;
mod sort_key;
mod tool_locator;
mod translation;

pub use locale::*;
pub use logging::*;
pub use resources::*;
pub use settings_manager::*;
pub use sort_key::*;
pub use tool_locator::*;
pub use translation::*;
