//! Initial placement of the alien fleet

use crate::entities::{Alien, Bounds, EntityKind, Size};
use crate::settings::Settings;

/// Rows never start within this many alien heights of the bottom
const BOTTOM_BUFFER_ROWS: f32 = 12.0;

/// Grid positions for a fresh fleet, row by row, left to right.
///
/// Aliens are one alien width/height apart. An empty result is valid: it
/// happens when the screen is too narrow for a single column (`width <= 3 * aw`)
/// or too short for a single row.
pub fn layout(bounds: Bounds, alien: Size) -> Vec<(f32, f32)> {
    let (aw, ah) = (alien.width, alien.height);
    if !(aw.is_finite() && ah.is_finite() && aw > 0.0 && ah > 0.0) {
        return Vec::new();
    }

    let max_x = bounds.width - 2.0 * aw;
    let max_y = bounds.height - BOTTOM_BUFFER_ROWS * ah;

    let mut positions = Vec::new();
    let mut y = ah;
    while y < max_y {
        let mut x = aw;
        while x < max_x {
            positions.push((x, y));
            x += 2.0 * aw;
        }
        y += 2.0 * ah;
    }
    positions
}

/// Builds a full fleet of aliens from [`layout`]
pub fn spawn_fleet(bounds: Bounds, settings: &Settings) -> Vec<Alien> {
    layout(bounds, settings.size_of(EntityKind::Alien))
        .into_iter()
        .map(|(x, y)| Alien::new(x, y, settings))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_layout_800_by_600() {
        let positions = layout(Bounds::new(800.0, 600.0), Size::new(20.0, 20.0));

        // 19 columns (x = 20..=740) and 9 rows (y = 20..=340)
        assert_eq!(positions.len(), 19 * 9);
        assert_eq!(positions[0], (20.0, 20.0));
        assert_eq!(positions[1], (60.0, 20.0));
        assert_eq!(positions[18], (740.0, 20.0));
        assert_eq!(positions[19], (20.0, 60.0));
        assert_eq!(positions.last(), Some(&(740.0, 340.0)));
        assert!(positions.iter().all(|&(x, y)| x < 760.0 && y < 360.0));
    }

    #[test]
    fn test_layout_too_narrow_is_empty() {
        assert!(layout(Bounds::new(60.0, 600.0), Size::new(20.0, 20.0)).is_empty());
        assert!(layout(Bounds::new(50.0, 600.0), Size::new(20.0, 20.0)).is_empty());
    }

    #[test]
    fn test_layout_too_short_is_empty() {
        assert!(layout(Bounds::new(800.0, 240.0), Size::new(20.0, 20.0)).is_empty());
    }

    #[test]
    fn test_layout_degenerate_alien_size_is_empty() {
        let bounds = Bounds::new(800.0, 600.0);
        assert!(layout(bounds, Size::new(0.0, 20.0)).is_empty());
        assert!(layout(bounds, Size::new(20.0, -1.0)).is_empty());
        assert!(layout(bounds, Size::new(f32::NAN, 20.0)).is_empty());
    }

    #[test]
    fn test_spawn_fleet_uses_settings() {
        let settings = Settings::default();
        let bounds = Bounds::new(800.0, 600.0);
        let fleet = spawn_fleet(bounds, &settings);
        let positions = layout(bounds, settings.size_of(EntityKind::Alien));

        assert_eq!(fleet.len(), positions.len());
        for (alien, (x, y)) in fleet.iter().zip(positions) {
            assert_eq!((alien.rect.x, alien.rect.y), (x, y));
            assert_eq!(alien.speed, settings.alien_speed);
        }
    }

    // Property-based tests
    #[cfg(test)]
    mod proptests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn test_layout_is_deterministic(
                width in 0.0f32..2000.0,
                height in 0.0f32..2000.0,
                aw in 5.0f32..100.0,
                ah in 5.0f32..100.0,
            ) {
                let bounds = Bounds::new(width, height);
                let size = Size::new(aw, ah);
                prop_assert_eq!(layout(bounds, size), layout(bounds, size));
            }

            #[test]
            fn test_layout_stays_clear_of_edges(
                width in 0.0f32..2000.0,
                height in 0.0f32..2000.0,
                aw in 5.0f32..100.0,
                ah in 5.0f32..100.0,
            ) {
                for (x, y) in layout(Bounds::new(width, height), Size::new(aw, ah)) {
                    prop_assert!(x >= aw && x < width - 2.0 * aw);
                    prop_assert!(y >= ah && y < height - 12.0 * ah);
                }
            }
        }
    }
}
