pub mod config;
pub mod error;
pub mod gameplay;
pub mod input;
pub mod session;
pub mod time;

pub use config::{GameConfig, ResolvePolicy};
pub use error::{ConfigError, ConfigErrorKind};
pub use session::{GameSession, Phase, SessionSnapshot, TickReport};
