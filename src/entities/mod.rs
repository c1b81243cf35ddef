mod alien;
mod bullet;
mod entity;
mod ship;

// Re-export all public types
pub use alien::{Alien, FleetDirection};
pub use bullet::Bullet;
pub use entity::{Bounds, EntityKind, Rect, Size};
pub use ship::Ship;
