use super::entity::{Bounds, EntityKind, Rect};
use crate::settings::Settings;

/// Horizontal direction the whole fleet is sweeping in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FleetDirection {
    #[default]
    Right,
    Left,
}

impl FleetDirection {
    pub fn sign(self) -> f32 {
        match self {
            FleetDirection::Right => 1.0,
            FleetDirection::Left => -1.0,
        }
    }

    pub fn reversed(self) -> Self {
        match self {
            FleetDirection::Right => FleetDirection::Left,
            FleetDirection::Left => FleetDirection::Right,
        }
    }
}

#[derive(Debug, Clone)]
pub struct Alien {
    pub rect: Rect,
    /// Horizontal speed magnitude; the sign comes from the fleet direction
    pub speed: f32,
}

impl Alien {
    pub fn new(x: f32, y: f32, settings: &Settings) -> Self {
        Self {
            rect: Rect::new(x, y, settings.size_of(EntityKind::Alien)),
            speed: settings.alien_speed,
        }
    }

    pub fn update(&mut self, direction: FleetDirection) {
        self.rect.x += self.speed * direction.sign();
    }

    /// True when the alien touches or crosses the left or right edge
    pub fn at_edge(&self, bounds: Bounds) -> bool {
        self.rect.left() <= 0.0 || self.rect.right() >= bounds.width
    }

    pub fn reached_bottom(&self, bounds: Bounds) -> bool {
        self.rect.bottom() >= bounds.height
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_direction_sign_and_reverse() {
        assert_eq!(FleetDirection::default(), FleetDirection::Right);
        assert_eq!(FleetDirection::Right.sign(), 1.0);
        assert_eq!(FleetDirection::Left.sign(), -1.0);
        assert_eq!(FleetDirection::Right.reversed(), FleetDirection::Left);
        assert_eq!(FleetDirection::Left.reversed(), FleetDirection::Right);
    }

    #[test]
    fn test_alien_moves_with_direction() {
        let settings = Settings::default();
        let mut alien = Alien::new(100.0, 50.0, &settings);
        alien.update(FleetDirection::Right);
        assert_eq!(alien.rect.x, 100.0 + settings.alien_speed);
        alien.update(FleetDirection::Left);
        alien.update(FleetDirection::Left);
        assert_eq!(alien.rect.x, 100.0 - settings.alien_speed);
    }

    #[test]
    fn test_alien_edges() {
        let settings = Settings::default();
        let bounds = Bounds::new(800.0, 600.0);
        assert!(Alien::new(0.0, 50.0, &settings).at_edge(bounds));
        assert!(Alien::new(800.0 - settings.alien_width, 50.0, &settings).at_edge(bounds));
        assert!(!Alien::new(100.0, 50.0, &settings).at_edge(bounds));
    }

    #[test]
    fn test_alien_reached_bottom() {
        let settings = Settings::default();
        let bounds = Bounds::new(800.0, 600.0);
        let y = 600.0 - settings.alien_height;
        assert!(Alien::new(100.0, y, &settings).reached_bottom(bounds));
        assert!(!Alien::new(100.0, y - 1.0, &settings).reached_bottom(bounds));
    }
}
