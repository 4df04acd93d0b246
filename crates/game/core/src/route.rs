//! Cyclic patrol routes.

use crate::error::RouteError;
use crate::math::Vec2;

/// An ordered loop of waypoints with a cursor.
///
/// The cursor always satisfies `index < len()` for non-empty routes and
/// wraps to `0` when advanced past the last waypoint. An empty route is
/// representable so that a misconfigured enemy can idle instead of failing;
/// every cursor operation on it is a no-op.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PatrolRoute {
    waypoints: Vec<Vec2>,
    #[cfg_attr(feature = "serde", serde(skip))]
    index: usize,
}

impl PatrolRoute {
    /// Creates a route starting at the first waypoint. Accepts empty input.
    pub fn new(waypoints: Vec<Vec2>) -> Self {
        Self {
            waypoints,
            index: 0,
        }
    }

    /// Creates a route, rejecting empty or non-finite waypoint lists.
    pub fn try_new(waypoints: Vec<Vec2>) -> Result<Self, RouteError> {
        if waypoints.is_empty() {
            return Err(RouteError::Empty);
        }
        if let Some(index) = waypoints.iter().position(|p| !p.is_finite()) {
            return Err(RouteError::NonFiniteWaypoint { index });
        }
        Ok(Self::new(waypoints))
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.waypoints.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.waypoints.is_empty()
    }

    #[inline]
    pub fn index(&self) -> usize {
        self.index
    }

    pub fn waypoints(&self) -> &[Vec2] {
        &self.waypoints
    }

    /// The waypoint under the cursor, or `None` for an empty route.
    pub fn current(&self) -> Option<Vec2> {
        self.waypoints.get(self.index).copied()
    }

    /// Moves the cursor to the next waypoint, wrapping at the end.
    pub fn advance(&mut self) -> Option<Vec2> {
        if self.waypoints.is_empty() {
            return None;
        }
        self.index = (self.index + 1) % self.waypoints.len();
        self.current()
    }

    /// Index of the waypoint closest to `from`.
    ///
    /// Ties resolve to the earliest index in route order.
    pub fn nearest_index(&self, from: Vec2) -> Option<usize> {
        let mut best: Option<(usize, f32)> = None;
        for (i, point) in self.waypoints.iter().enumerate() {
            let distance = from.distance(*point);
            match best {
                Some((_, best_distance)) if distance >= best_distance => {}
                _ => best = Some((i, distance)),
            }
        }
        best.map(|(i, _)| i)
    }

    /// Points the cursor at the waypoint nearest to `from` and returns it.
    pub fn select_nearest(&mut self, from: Vec2) -> Option<Vec2> {
        let index = self.nearest_index(from)?;
        self.index = index;
        self.current()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn triangle() -> PatrolRoute {
        PatrolRoute::new(vec![
            Vec2::new(0.0, 0.0),
            Vec2::new(10.0, 0.0),
            Vec2::new(10.0, 10.0),
        ])
    }

    #[test]
    fn advance_wraps_to_zero() {
        let mut route = triangle();
        route.select_nearest(Vec2::new(10.0, 11.0));
        assert_eq!(route.index(), 2);

        assert_eq!(route.advance(), Some(Vec2::new(0.0, 0.0)));
        assert_eq!(route.index(), 0);
    }

    #[test]
    fn nearest_prefers_first_on_tie() {
        let route = PatrolRoute::new(vec![
            Vec2::new(-1.0, 0.0),
            Vec2::new(1.0, 0.0),
            Vec2::new(-1.0, 0.0),
        ]);
        assert_eq!(route.nearest_index(Vec2::ZERO), Some(0));
    }

    #[test]
    fn empty_route_is_inert() {
        let mut route = PatrolRoute::new(Vec::new());
        assert!(route.is_empty());
        assert_eq!(route.current(), None);
        assert_eq!(route.advance(), None);
        assert_eq!(route.select_nearest(Vec2::ZERO), None);
        assert_eq!(route.index(), 0);
    }

    #[test]
    fn try_new_rejects_bad_input() {
        assert_eq!(PatrolRoute::try_new(Vec::new()), Err(RouteError::Empty));
        assert_eq!(
            PatrolRoute::try_new(vec![Vec2::ZERO, Vec2::new(f32::INFINITY, 0.0)]),
            Err(RouteError::NonFiniteWaypoint { index: 1 })
        );
        assert!(PatrolRoute::try_new(vec![Vec2::ZERO]).is_ok());
    }
}
