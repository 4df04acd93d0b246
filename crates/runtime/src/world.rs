//! Static level geometry the player interacts with.

use hollows_content::{ExitSpec, PickupSpec, ZoneSpec};
use hollows_core::Vec2;

/// Circle on the floor plane. Boundaries count as inside.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Zone {
    pub center: Vec2,
    pub radius: f32,
}

impl Zone {
    pub const fn new(center: Vec2, radius: f32) -> Self {
        Self { center, radius }
    }

    #[inline]
    pub fn contains(&self, point: Vec2) -> bool {
        self.center.distance(point) <= self.radius
    }

    /// True when `point` is within `reach` of the zone's edge.
    #[inline]
    pub fn within_reach(&self, point: Vec2, reach: f32) -> bool {
        self.center.distance(point) <= self.radius + reach
    }
}

impl From<ZoneSpec> for Zone {
    fn from(spec: ZoneSpec) -> Self {
        Self::new(spec.center, spec.radius)
    }
}

/// Cracked floor that makes noise when stepped on.
///
/// Only entering the tile is loud; standing on it is not.
#[derive(Clone, Debug, PartialEq)]
pub struct BrokenTile {
    zone: Zone,
    occupied: bool,
}

impl BrokenTile {
    pub fn new(zone: Zone) -> Self {
        Self {
            zone,
            occupied: false,
        }
    }

    pub fn zone(&self) -> &Zone {
        &self.zone
    }

    /// Updates occupancy. Returns `true` on the frame the player steps on.
    pub fn update(&mut self, player: Vec2) -> bool {
        let inside = self.zone.contains(player);
        let entered = inside && !self.occupied;
        self.occupied = inside;
        entered
    }
}

/// An item waiting to be collected.
#[derive(Clone, Debug, PartialEq)]
pub struct Pickup {
    pub item: String,
    pub position: Vec2,
    pub quantity: u32,
    collected: bool,
}

impl Pickup {
    pub fn is_collected(&self) -> bool {
        self.collected
    }

    pub(crate) fn collect(&mut self) {
        self.collected = true;
    }
}

impl From<PickupSpec> for Pickup {
    fn from(spec: PickupSpec) -> Self {
        Self {
            item: spec.item,
            position: spec.position,
            quantity: spec.quantity,
            collected: false,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Exit {
    pub zone: Zone,
    pub required_item: Option<String>,
}

impl From<ExitSpec> for Exit {
    fn from(spec: ExitSpec) -> Self {
        Self {
            zone: Zone::new(spec.position, spec.radius),
            required_item: spec.required_item,
        }
    }
}

/// All interactive geometry of a level.
#[derive(Clone, Debug, Default)]
pub struct World {
    pub hiding_spots: Vec<Zone>,
    pub broken_tiles: Vec<BrokenTile>,
    pub pickups: Vec<Pickup>,
    pub exit: Option<Exit>,
}

impl World {
    /// Hiding spot the player can reach from `point`, if any.
    pub fn hiding_spot_near(&self, point: Vec2, reach: f32) -> Option<&Zone> {
        self.hiding_spots
            .iter()
            .find(|spot| spot.within_reach(point, reach))
    }

    /// Index of the nearest uncollected pickup within `reach` of `point`.
    pub fn pickup_near(&self, point: Vec2, reach: f32) -> Option<usize> {
        self.pickups
            .iter()
            .enumerate()
            .filter(|(_, pickup)| !pickup.collected)
            .map(|(i, pickup)| (i, pickup.position.distance(point)))
            .filter(|(_, distance)| *distance <= reach)
            .min_by(|a, b| a.1.total_cmp(&b.1))
            .map(|(i, _)| i)
    }

    /// Positions of broken tiles stepped on this frame.
    pub fn step_on_tiles(&mut self, player: Vec2) -> Vec<Vec2> {
        self.broken_tiles
            .iter_mut()
            .filter_map(|tile| tile.update(player).then_some(tile.zone.center))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tile_fires_on_entry_only() {
        let mut tile = BrokenTile::new(Zone::new(Vec2::ZERO, 0.5));

        assert!(!tile.update(Vec2::new(1.0, 0.0)));
        assert!(tile.update(Vec2::new(0.5, 0.0)));
        assert!(!tile.update(Vec2::ZERO));
        assert!(!tile.update(Vec2::new(2.0, 0.0)));
        assert!(tile.update(Vec2::new(0.1, 0.0)));
    }

    #[test]
    fn nearest_uncollected_pickup() {
        let mut world = World {
            pickups: vec![
                Pickup::from(PickupSpec {
                    item: "Wire".into(),
                    position: Vec2::new(0.5, 0.0),
                    quantity: 1,
                }),
                Pickup::from(PickupSpec {
                    item: "Key".into(),
                    position: Vec2::new(0.2, 0.0),
                    quantity: 1,
                }),
            ],
            ..Default::default()
        };

        assert_eq!(world.pickup_near(Vec2::ZERO, 1.0), Some(1));
        world.pickups[1].collect();
        assert_eq!(world.pickup_near(Vec2::ZERO, 1.0), Some(0));
        assert_eq!(world.pickup_near(Vec2::new(5.0, 0.0), 1.0), None);
    }
}
