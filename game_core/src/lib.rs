pub mod components;
pub mod config;
pub mod fsm;
pub mod host;
pub mod params;
pub mod resources;
pub mod session;
pub mod systems;

pub use components::*;
pub use config::*;
pub use fsm::*;
pub use host::*;
pub use params::*;
pub use resources::*;
pub use session::*;
