//! Collision detection between bullets, aliens and the ship.
//!
//! Detection only. What happens after a hit is up to [`crate::game::Game`].

use crate::entities::{Alien, Bounds, Bullet, Ship};

/// Pairs each bullet with at most one alien it overlaps, and each alien with at
/// most one bullet. Returns `(bullet_index, alien_index)` pairs.
pub fn pairwise_intersect(bullets: &[Bullet], aliens: &[Alien]) -> Vec<(usize, usize)> {
    let mut alien_taken = vec![false; aliens.len()];
    let mut pairs = Vec::new();

    for (b_idx, bullet) in bullets.iter().enumerate() {
        let hit = aliens
            .iter()
            .enumerate()
            .find(|(a_idx, alien)| !alien_taken[*a_idx] && bullet.rect.intersects(&alien.rect));

        if let Some((a_idx, _)) = hit {
            alien_taken[a_idx] = true;
            pairs.push((b_idx, a_idx));
        }
    }

    pairs
}

/// Removes both sides of every colliding bullet/alien pair.
/// Returns the number of pairs removed.
pub fn resolve_bullet_hits(bullets: &mut Vec<Bullet>, aliens: &mut Vec<Alien>) -> usize {
    let pairs = pairwise_intersect(bullets, aliens);
    if pairs.is_empty() {
        return 0;
    }

    let mut bullet_hit = vec![false; bullets.len()];
    let mut alien_hit = vec![false; aliens.len()];
    for &(b_idx, a_idx) in &pairs {
        bullet_hit[b_idx] = true;
        alien_hit[a_idx] = true;
    }

    let mut flags = bullet_hit.into_iter();
    bullets.retain(|_| !flags.next().unwrap_or(false));
    let mut flags = alien_hit.into_iter();
    aliens.retain(|_| !flags.next().unwrap_or(false));

    pairs.len()
}

/// True if any alien overlaps the ship or has reached the bottom of the screen
pub fn ship_hit(ship: &Ship, aliens: &[Alien], bounds: Bounds) -> bool {
    aliens
        .iter()
        .any(|alien| alien.rect.intersects(&ship.rect) || alien.reached_bottom(bounds))
}
