use super::entity::{Bounds, EntityKind, Rect};
use crate::settings::Settings;

#[derive(Debug, Clone)]
pub struct Ship {
    pub rect: Rect,
    pub speed: f32,
    /// Movement intent, set from input
    pub moving_left: bool,
    pub moving_right: bool,
}

impl Ship {
    /// Creates a ship at the bottom centre of the play field
    pub fn new(settings: &Settings, bounds: Bounds) -> Self {
        let mut ship = Self {
            rect: Rect::new(0.0, 0.0, settings.size_of(EntityKind::Ship)),
            speed: settings.ship_speed,
            moving_left: false,
            moving_right: false,
        };
        ship.center(bounds);
        ship
    }

    /// Puts the ship back at the bottom centre; intent flags are kept
    pub fn center(&mut self, bounds: Bounds) {
        self.rect.x = (bounds.width - self.rect.width) / 2.0;
        self.rect.y = bounds.height - self.rect.height;
    }

    pub fn move_left(&mut self) {
        if self.rect.x > 0.0 {
            self.rect.x = (self.rect.x - self.speed).max(0.0);
        }
    }

    pub fn move_right(&mut self, max_x: f32) {
        if self.rect.right() < max_x {
            self.rect.x = (self.rect.x + self.speed).min(max_x - self.rect.width);
        }
    }
}
