use crate::math::Vec2;

/// Navigation agent steered by a behavior controller.
///
/// Implementations compute paths however they like; the controller only
/// issues destinations, speeds and stop/resume requests, and polls for
/// arrival.
pub trait PathingProvider {
    /// Current position of the agent. The controller measures every
    /// distance (chase range, catch distance, nearest waypoint) from here.
    fn position(&self) -> Vec2;

    /// Requests a path to `point`. Replaces any previous destination.
    fn set_destination(&mut self, point: Vec2);

    /// Distance left along the current path.
    fn remaining_distance(&self) -> f32;

    /// True while a requested path has not been computed yet.
    fn has_pending_path(&self) -> bool;

    fn set_speed(&mut self, speed: f32);

    /// Halts (`true`) or resumes (`false`) movement without dropping the path.
    fn set_stopped(&mut self, stopped: bool);

    /// False once the underlying agent is gone. The controller then skips
    /// every movement call for the frame instead of faulting.
    fn is_available(&self) -> bool {
        true
    }
}

impl<P: PathingProvider + ?Sized> PathingProvider for Box<P> {
    fn position(&self) -> Vec2 {
        (**self).position()
    }

    fn set_destination(&mut self, point: Vec2) {
        (**self).set_destination(point)
    }

    fn remaining_distance(&self) -> f32 {
        (**self).remaining_distance()
    }

    fn has_pending_path(&self) -> bool {
        (**self).has_pending_path()
    }

    fn set_speed(&mut self, speed: f32) {
        (**self).set_speed(speed)
    }

    fn set_stopped(&mut self, stopped: bool) {
        (**self).set_stopped(stopped)
    }

    fn is_available(&self) -> bool {
        (**self).is_available()
    }
}
