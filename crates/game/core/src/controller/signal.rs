//! Outputs of a controller tick.

use crate::controller::state::{BehaviorState, Transition};
use crate::math::Vec2;

/// Raised on the first tick of each catch episode.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CatchEvent {
    pub enemy_position: Vec2,
    pub target_position: Vec2,
    pub distance: f32,
}

/// Game-state collaborator notified when the target is caught.
///
/// The controller only raises the signal; deciding that the game is lost is
/// up to the listener.
pub trait CatchListener {
    fn on_target_caught(&mut self, event: &CatchEvent);
}

impl<F> CatchListener for F
where
    F: FnMut(&CatchEvent),
{
    fn on_target_caught(&mut self, event: &CatchEvent) {
        self(event)
    }
}

/// Summary of one [`super::BehaviorController::tick`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TickReport {
    /// State after the tick.
    pub state: BehaviorState,
    /// At most one transition happens per tick.
    pub transition: Option<Transition>,
    /// Catch condition held this tick (level triggered).
    pub caught: bool,
    /// The tick was skipped because the pathing agent is unavailable.
    pub skipped: bool,
}

impl TickReport {
    pub(crate) fn skipped(state: BehaviorState) -> Self {
        Self {
            state,
            transition: None,
            caught: false,
            skipped: true,
        }
    }
}
