//! The game state machine.
//!
//! [`Game`] owns the ship, bullets and fleet, and sequences movement,
//! collision and the responses to them once per tick.

use std::time::Instant;

use crate::collision;
use crate::entities::{Alien, Bounds, Bullet, FleetDirection, Rect, Ship};
use crate::fleet;
use crate::movement;
use crate::settings::Settings;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Active,
    /// Frozen after a ship hit; nothing moves and commands are ignored
    Paused { until: Instant },
    GameOver,
}

/// Statistics that change during a game
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameStats {
    /// Ships remaining, including the one in play
    pub ships_left: u32,
    ship_limit: u32,
}

impl GameStats {
    pub fn new(ship_limit: u32) -> Self {
        Self {
            ships_left: ship_limit,
            ship_limit,
        }
    }

    pub fn reset(&mut self) {
        self.ships_left = self.ship_limit;
    }
}

/// What happened during a tick or command
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameEvent {
    BulletFired,
    AliensDestroyed(usize),
    ShipHit { ships_left: u32 },
    FleetRespawned { aliens: usize },
    Resumed,
    GameOver,
}

/// Owned copy of everything the renderer needs for one frame
#[derive(Debug, Clone, PartialEq)]
pub struct Snapshot {
    pub phase: Phase,
    pub bounds: Bounds,
    pub ship: Rect,
    pub bullets: Vec<Rect>,
    pub aliens: Vec<Rect>,
    pub ships_left: u32,
}

pub struct Game {
    settings: Settings,
    bounds: Bounds,
    phase: Phase,
    ship: Ship,
    bullets: Vec<Bullet>,
    fleet: Vec<Alien>,
    fleet_direction: FleetDirection,
    stats: GameStats,
}

impl Game {
    pub fn new(settings: Settings, bounds: Bounds) -> Self {
        let ship = Ship::new(&settings, bounds);
        let fleet = fleet::spawn_fleet(bounds, &settings);
        let stats = GameStats::new(settings.ship_limit);
        log::info!(
            "new game on {}x{} field with {} aliens",
            bounds.width,
            bounds.height,
            fleet.len()
        );

        Self {
            settings,
            bounds,
            phase: Phase::Active,
            ship,
            bullets: Vec::new(),
            fleet,
            fleet_direction: FleetDirection::Right,
            stats,
        }
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn is_paused(&self) -> bool {
        matches!(self.phase, Phase::Paused { .. })
    }

    pub fn is_over(&self) -> bool {
        self.phase == Phase::GameOver
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    pub fn bounds(&self) -> Bounds {
        self.bounds
    }

    pub fn ship(&self) -> &Ship {
        &self.ship
    }

    pub fn bullets(&self) -> &[Bullet] {
        &self.bullets
    }

    pub fn fleet(&self) -> &[Alien] {
        &self.fleet
    }

    pub fn fleet_direction(&self) -> FleetDirection {
        self.fleet_direction
    }

    pub fn stats(&self) -> GameStats {
        self.stats
    }

    pub fn set_moving_left(&mut self, moving: bool) {
        if self.phase == Phase::Active {
            self.ship.moving_left = moving;
        }
    }

    pub fn set_moving_right(&mut self, moving: bool) {
        if self.phase == Phase::Active {
            self.ship.moving_right = moving;
        }
    }

    /// Fires a bullet from the ship unless the live-bullet cap is reached
    pub fn fire(&mut self) -> Option<GameEvent> {
        if self.phase != Phase::Active || self.bullets.len() >= self.settings.bullets_allowed {
            return None;
        }
        self.bullets.push(Bullet::from_ship(&self.ship, &self.settings));
        Some(GameEvent::BulletFired)
    }

    /// Advances the game by one frame
    pub fn tick(&mut self, now: Instant) -> Vec<GameEvent> {
        let mut events = Vec::new();

        match self.phase {
            Phase::GameOver => return events,
            Phase::Paused { until } if now < until => return events,
            Phase::Paused { .. } => {
                self.phase = Phase::Active;
                events.push(GameEvent::Resumed);
            }
            Phase::Active => {}
        }

        movement::move_ship(&mut self.ship, self.bounds);

        movement::advance_bullets(&mut self.bullets);

        let destroyed = collision::resolve_bullet_hits(&mut self.bullets, &mut self.fleet);
        if destroyed > 0 {
            events.push(GameEvent::AliensDestroyed(destroyed));
        }

        self.fleet_direction = movement::advance_fleet(
            &mut self.fleet,
            self.fleet_direction,
            self.settings.fleet_drop_speed,
            self.bounds,
        );

        if collision::ship_hit(&self.ship, &self.fleet, self.bounds) {
            self.on_ship_hit(now, &mut events);
        }

        if self.phase == Phase::Active && self.fleet.is_empty() {
            self.respawn_fleet(&mut events);
        }

        events
    }

    fn on_ship_hit(&mut self, now: Instant, events: &mut Vec<GameEvent>) {
        self.stats.ships_left = self.stats.ships_left.saturating_sub(1);
        events.push(GameEvent::ShipHit {
            ships_left: self.stats.ships_left,
        });

        if self.stats.ships_left == 0 {
            log::info!("last ship lost, game over");
            self.phase = Phase::GameOver;
            events.push(GameEvent::GameOver);
            return;
        }

        log::info!("ship hit, {} left", self.stats.ships_left);
        self.bullets.clear();
        self.fleet = fleet::spawn_fleet(self.bounds, &self.settings);
        self.ship.center(self.bounds);
        self.phase = Phase::Paused {
            until: now + self.settings.hit_pause(),
        };
    }

    /// Refills an empty fleet. Nothing happens if the field cannot fit a
    /// single alien, so a tiny screen does not wipe bullets every tick.
    fn respawn_fleet(&mut self, events: &mut Vec<GameEvent>) {
        let fleet = fleet::spawn_fleet(self.bounds, &self.settings);
        if fleet.is_empty() {
            return;
        }

        log::debug!("fleet cleared, respawning {} aliens", fleet.len());
        self.bullets.clear();
        events.push(GameEvent::FleetRespawned {
            aliens: fleet.len(),
        });
        self.fleet = fleet;
    }

    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            phase: self.phase,
            bounds: self.bounds,
            ship: self.ship.rect,
            bullets: self.bullets.iter().map(|b| b.rect).collect(),
            aliens: self.fleet.iter().map(|a| a.rect).collect(),
            ships_left: self.stats.ships_left,
        }
    }

    #[cfg(test)]
    pub(crate) fn ship_mut(&mut self) -> &mut Ship {
        &mut self.ship
    }

    #[cfg(test)]
    pub(crate) fn fleet_mut(&mut self) -> &mut Vec<Alien> {
        &mut self.fleet
    }

    #[cfg(test)]
    pub(crate) fn bullets_mut(&mut self) -> &mut Vec<Bullet> {
        &mut self.bullets
    }
}
