use super::entity::{EntityKind, Rect};
use super::ship::Ship;
use crate::settings::Settings;

#[derive(Debug, Clone)]
pub struct Bullet {
    pub rect: Rect,
    /// Upward speed in world units per tick
    pub speed: f32,
}

impl Bullet {
    /// Creates a bullet whose top centre sits on the ship's top centre
    pub fn from_ship(ship: &Ship, settings: &Settings) -> Self {
        let size = settings.size_of(EntityKind::Bullet);
        let x = ship.rect.center_x() - size.width / 2.0;
        Self {
            rect: Rect::new(x, ship.rect.top(), size),
            speed: settings.bullet_speed,
        }
    }

    pub fn update(&mut self) {
        self.rect.y -= self.speed;
    }

    /// True once the bullet has fully left the top of the screen
    pub fn is_out_of_bounds(&self) -> bool {
        self.rect.bottom() <= 0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entities::Bounds;

    fn bullet() -> Bullet {
        let settings = Settings::default();
        let ship = Ship::new(&settings, Bounds::new(800.0, 600.0));
        Bullet::from_ship(&ship, &settings)
    }

    #[test]
    fn test_bullet_spawns_at_ship_top_center() {
        let settings = Settings::default();
        let ship = Ship::new(&settings, Bounds::new(800.0, 600.0));
        let bullet = Bullet::from_ship(&ship, &settings);
        assert_eq!(bullet.rect.center_x(), ship.rect.center_x());
        assert_eq!(bullet.rect.top(), ship.rect.top());
        assert_eq!(bullet.speed, settings.bullet_speed);
    }

    #[test]
    fn test_bullet_moves_up() {
        let mut bullet = bullet();
        let start = bullet.rect.y;
        bullet.update();
        assert_eq!(bullet.rect.y, start - bullet.speed);
    }

    #[test]
    fn test_bullet_out_of_bounds_at_bottom_edge_zero() {
        let mut bullet = bullet();
        bullet.rect.y = -bullet.rect.height + 0.5;
        assert!(!bullet.is_out_of_bounds());
        bullet.rect.y = -bullet.rect.height;
        assert!(bullet.is_out_of_bounds());
    }
}
