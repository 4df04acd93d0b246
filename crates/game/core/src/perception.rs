//! Per-tick perception snapshot and alert predicates.

use crate::config::AlertConfig;
use crate::env::{PathingProvider, TargetStatus};
use crate::math::Vec2;

/// What an enemy knows about its target at the start of a tick.
///
/// Built once per tick so the global pre-check, the state logic and the
/// catch check all judge the same numbers.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Perception {
    pub origin: Vec2,
    pub target: Vec2,
    pub distance: f32,
    pub concealed: bool,
}

impl Perception {
    pub fn new(origin: Vec2, target: Vec2, concealed: bool) -> Self {
        Self {
            origin,
            target,
            distance: origin.distance(target),
            concealed,
        }
    }

    /// Samples both collaborators, or `None` when either is unavailable.
    pub fn sample<P, T>(pathing: &P, target: &T) -> Option<Self>
    where
        P: PathingProvider + ?Sized,
        T: TargetStatus + ?Sized,
    {
        if !pathing.is_available() || !target.is_available() {
            return None;
        }
        Some(Self::new(
            pathing.position(),
            target.position(),
            target.is_concealed(),
        ))
    }

    /// Exposed target inside chase range: forces a chase from any state.
    #[inline]
    pub fn is_exposed_within_chase_range(&self, config: &AlertConfig) -> bool {
        !self.concealed && self.distance <= config.chase_range
    }

    /// A running chase is abandoned beyond twice the chase range or as soon
    /// as the target hides.
    #[inline]
    pub fn has_lost_target(&self, config: &AlertConfig) -> bool {
        self.concealed || self.distance > config.lose_range()
    }

    #[inline]
    pub fn is_catchable(&self, config: &AlertConfig) -> bool {
        !self.concealed && self.distance <= config.catch_distance
    }
}
