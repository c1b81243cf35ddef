//! Per-tick movement of the ship, bullets and fleet

use crate::entities::{Alien, Bounds, Bullet, FleetDirection, Ship};

/// Applies `step` to every item in order
pub fn advance_all<T>(items: &mut [T], mut step: impl FnMut(&mut T)) {
    for item in items.iter_mut() {
        step(item);
    }
}

/// Removes every item matching `predicate`, returning how many were removed
pub fn remove_where<T>(items: &mut Vec<T>, mut predicate: impl FnMut(&T) -> bool) -> usize {
    let before = items.len();
    items.retain(|item| !predicate(item));
    before - items.len()
}

/// Moves the ship according to its intent flags, staying inside the screen.
///
/// Both flags may be set at once; each direction is bounds-checked on its own.
pub fn move_ship(ship: &mut Ship, bounds: Bounds) {
    if ship.moving_right {
        ship.move_right(bounds.width);
    }
    if ship.moving_left {
        ship.move_left();
    }
}

/// Moves bullets up and drops the ones that left the screen.
/// Returns the number of bullets dropped.
pub fn advance_bullets(bullets: &mut Vec<Bullet>) -> usize {
    advance_all(bullets, Bullet::update);
    remove_where(bullets, Bullet::is_out_of_bounds)
}

/// Runs the fleet edge check, then sweeps every alien sideways.
///
/// If any alien touches an edge the whole fleet drops by `drop` and the
/// direction reverses, once per call. Returns the direction in effect.
pub fn advance_fleet(
    fleet: &mut [Alien],
    direction: FleetDirection,
    drop: f32,
    bounds: Bounds,
) -> FleetDirection {
    let mut direction = direction;
    if fleet.iter().any(|alien| alien.at_edge(bounds)) {
        advance_all(fleet, |alien| alien.rect.y += drop);
        direction = direction.reversed();
        log::trace!("fleet reached an edge, now moving {direction:?}");
    }

    advance_all(fleet, |alien| alien.update(direction));
    direction
}
