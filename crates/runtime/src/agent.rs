//! Straight-line navigation agent.

use hollows_core::{PathingProvider, Vec2};

/// Minimal [`PathingProvider`] that walks in a straight line.
///
/// There are no obstacles, so a "path" is just the segment to the
/// destination. A new destination stays pending until the next
/// [`KinematicAgent::advance`], mirroring an engine agent that computes paths
/// asynchronously.
#[derive(Clone, Debug, PartialEq)]
pub struct KinematicAgent {
    position: Vec2,
    destination: Option<Vec2>,
    speed: f32,
    stopped: bool,
    pending: bool,
    alive: bool,
}

impl KinematicAgent {
    pub fn new(position: Vec2) -> Self {
        Self {
            position,
            destination: None,
            speed: 0.0,
            stopped: false,
            pending: false,
            alive: true,
        }
    }

    /// Resolves a pending path and moves `speed * delta_time` toward the
    /// destination unless stopped.
    pub fn advance(&mut self, delta_time: f32) {
        if !self.alive {
            return;
        }
        self.pending = false;

        let Some(destination) = self.destination else {
            return;
        };
        if self.stopped || self.speed <= 0.0 {
            return;
        }
        self.position = self
            .position
            .move_towards(destination, self.speed * delta_time);
    }

    /// Removes the agent. Every later query reports it unavailable.
    pub fn destroy(&mut self) {
        self.alive = false;
        self.destination = None;
    }

    pub fn destination(&self) -> Option<Vec2> {
        self.destination
    }

    pub fn speed(&self) -> f32 {
        self.speed
    }

    pub fn is_stopped(&self) -> bool {
        self.stopped
    }

    /// Teleports the agent, keeping its destination.
    pub fn warp(&mut self, position: Vec2) {
        self.position = position;
    }
}

impl PathingProvider for KinematicAgent {
    fn position(&self) -> Vec2 {
        self.position
    }

    fn set_destination(&mut self, point: Vec2) {
        if self.destination != Some(point) {
            self.pending = true;
        }
        self.destination = Some(point);
    }

    fn remaining_distance(&self) -> f32 {
        self.destination
            .map_or(0.0, |destination| self.position.distance(destination))
    }

    fn has_pending_path(&self) -> bool {
        self.pending
    }

    fn set_speed(&mut self, speed: f32) {
        self.speed = speed;
    }

    fn set_stopped(&mut self, stopped: bool) {
        self.stopped = stopped;
    }

    fn is_available(&self) -> bool {
        self.alive
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn destination_pending_until_advance() {
        let mut agent = KinematicAgent::new(Vec2::ZERO);
        agent.set_speed(2.0);
        agent.set_destination(Vec2::new(10.0, 0.0));
        assert!(agent.has_pending_path());

        agent.advance(0.5);
        assert!(!agent.has_pending_path());
        assert_eq!(agent.position(), Vec2::new(1.0, 0.0));
        assert_eq!(agent.remaining_distance(), 9.0);
    }

    #[test]
    fn same_destination_does_not_repath() {
        let mut agent = KinematicAgent::new(Vec2::ZERO);
        agent.set_destination(Vec2::new(1.0, 0.0));
        agent.advance(0.1);

        agent.set_destination(Vec2::new(1.0, 0.0));
        assert!(!agent.has_pending_path());
    }

    #[test]
    fn stopped_agent_holds_position() {
        let mut agent = KinematicAgent::new(Vec2::ZERO);
        agent.set_speed(5.0);
        agent.set_destination(Vec2::new(3.0, 4.0));
        agent.set_stopped(true);

        agent.advance(1.0);
        assert_eq!(agent.position(), Vec2::ZERO);

        agent.set_stopped(false);
        agent.advance(10.0);
        assert_eq!(agent.position(), Vec2::new(3.0, 4.0));
        assert_eq!(agent.remaining_distance(), 0.0);
    }

    #[test]
    fn destroyed_agent_is_unavailable() {
        let mut agent = KinematicAgent::new(Vec2::ZERO);
        agent.destroy();
        assert!(!agent.is_available());
    }
}
