// Library exports for the binary and integration tests
pub use entities::{Alien, Bounds, Bullet, EntityKind, FleetDirection, Rect, Ship, Size};
pub use game::{Game, GameEvent, GameStats, Phase, Snapshot};
pub use settings::{ConfigError, Settings};

pub mod app;
pub mod audio;
pub mod clock;
pub mod collision;
pub mod entities;
pub mod fleet;
pub mod game;
pub mod input;
pub mod logging;
pub mod movement;
pub mod renderer;
pub mod settings;
