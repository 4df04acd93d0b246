//! Patrol / Investigate / Chase state machine for one enemy.
//!
//! The controller is advanced by the host once per frame with
//! [`BehaviorController::tick`] and receives noises through
//! [`BehaviorController::on_heard_sound`]. Every tick runs in two steps:
//!
//! 1. **Global pre-check**: an exposed target inside `chase_range` forces
//!    [`BehaviorState::Chase`] regardless of the current state.
//! 2. **State logic**: patrol waypoint cycling, investigation countdown, or
//!    pursuit with give-up and catch checks.
//!
//! Waiting is explicit data (countdown fields decremented by `delta_time`),
//! so `tick` never blocks and any higher-priority transition simply
//! overwrites the current sub-state.
//!
//! # Degraded operation
//!
//! - Empty patrol route: patrol is a no-op, logged once.
//! - Pathing agent missing or unavailable: the whole tick is skipped.
//! - Target missing or unavailable: alert logic is skipped; a running chase
//!   falls back to patrol.

mod signal;
mod state;

pub use signal::{CatchEvent, CatchListener, TickReport};
pub use state::{
    BehaviorState, InvestigationPhase, InvestigationTarget, Transition, TransitionCause,
};

use crate::config::AlertConfig;
use crate::env::{PathingProvider, TargetStatus};
use crate::error::ConfigError;
use crate::math::Vec2;
use crate::perception::Perception;
use crate::route::PatrolRoute;

/// Returns the agent in `slot` if it is present and usable.
fn available<P: PathingProvider>(slot: &mut Option<P>) -> Option<&mut P> {
    slot.as_mut().filter(|agent| agent.is_available())
}

/// Arrival test shared by patrol and investigation.
fn has_arrived<P: PathingProvider + ?Sized>(agent: &P, threshold: f32) -> bool {
    !agent.has_pending_path() && agent.remaining_distance() <= threshold
}

/// Tracks which degraded conditions were already reported.
#[derive(Debug, Default)]
struct Warnings {
    empty_route: bool,
    pathing_missing: bool,
    target_missing: bool,
}

/// Behavior state machine for a single enemy.
///
/// Generic over the navigation agent `P` it steers and the target view `T`
/// it reads. Both are injected at construction and may be detached or
/// reattached later; the controller tolerates their absence.
pub struct BehaviorController<P, T> {
    config: AlertConfig,
    route: PatrolRoute,
    pathing: Option<P>,
    target: Option<T>,

    state: BehaviorState,
    /// Seconds left at the current waypoint; `None` while walking.
    patrol_wait: Option<f32>,
    investigation: Option<InvestigationTarget>,

    caught: bool,
    /// Set while a catch episode is ongoing so the listener fires once.
    catch_latched: bool,
    listener: Option<Box<dyn CatchListener>>,

    warnings: Warnings,
}

impl<P, T> BehaviorController<P, T>
where
    P: PathingProvider,
    T: TargetStatus,
{
    /// Creates a controller wired to its agent and target, in Patrol, heading
    /// for the waypoint nearest to the agent's current position.
    pub fn new(
        config: AlertConfig,
        route: PatrolRoute,
        pathing: P,
        target: T,
    ) -> Result<Self, ConfigError> {
        Self::with_collaborators(config, route, Some(pathing), Some(target))
    }

    /// Creates a controller whose collaborators may be missing.
    pub fn with_collaborators(
        config: AlertConfig,
        route: PatrolRoute,
        pathing: Option<P>,
        target: Option<T>,
    ) -> Result<Self, ConfigError> {
        config.validate()?;

        let mut controller = Self {
            config,
            route,
            pathing,
            target,
            state: BehaviorState::Patrol,
            patrol_wait: None,
            investigation: None,
            caught: false,
            catch_latched: false,
            listener: None,
            warnings: Warnings::default(),
        };
        controller.start_patrol();
        Ok(controller)
    }

    /// Registers the collaborator notified on each new catch (builder pattern).
    #[must_use]
    pub fn with_catch_listener(mut self, listener: impl CatchListener + 'static) -> Self {
        self.listener = Some(Box::new(listener));
        self
    }

    pub fn set_catch_listener(&mut self, listener: impl CatchListener + 'static) {
        self.listener = Some(Box::new(listener));
    }

    // ========================================================================
    // Accessors
    // ========================================================================

    #[inline]
    pub fn current_state(&self) -> BehaviorState {
        self.state
    }

    /// True if the catch condition held during the last tick.
    #[inline]
    pub fn is_caught_target(&self) -> bool {
        self.caught
    }

    pub fn investigation(&self) -> Option<&InvestigationTarget> {
        self.investigation.as_ref()
    }

    /// Seconds left at the current patrol waypoint, if pausing there.
    pub fn patrol_wait_remaining(&self) -> Option<f32> {
        self.patrol_wait
    }

    pub fn config(&self) -> &AlertConfig {
        &self.config
    }

    pub fn route(&self) -> &PatrolRoute {
        &self.route
    }

    pub fn pathing(&self) -> Option<&P> {
        self.pathing.as_ref()
    }

    /// Mutable access to the agent, for hosts that integrate its motion.
    pub fn pathing_mut(&mut self) -> Option<&mut P> {
        self.pathing.as_mut()
    }

    pub fn target(&self) -> Option<&T> {
        self.target.as_ref()
    }

    // ========================================================================
    // Wiring
    // ========================================================================

    /// Plugs in a (new) agent and points it at what the current state is
    /// after: the nearest waypoint on patrol, the sound position while
    /// investigating, the target while chasing.
    ///
    /// An investigation restarts en route, since the new agent has not been
    /// to the sound yet.
    pub fn attach_pathing(&mut self, pathing: P) {
        self.pathing = Some(pathing);
        self.warnings.pathing_missing = false;
        match self.state {
            BehaviorState::Patrol => self.start_patrol(),
            BehaviorState::Investigate => self.resume_investigation(),
            BehaviorState::Chase => self.resume_chase(),
        }
    }

    pub fn detach_pathing(&mut self) -> Option<P> {
        self.pathing.take()
    }

    pub fn attach_target(&mut self, target: T) {
        self.target = Some(target);
        self.warnings.target_missing = false;
    }

    pub fn detach_target(&mut self) -> Option<T> {
        self.target.take()
    }

    // ========================================================================
    // Operations
    // ========================================================================

    /// Advances timers and runs one step of the state machine.
    ///
    /// A negative or non-finite `delta_time` leaves every countdown as is.
    pub fn tick(&mut self, delta_time: f32) -> TickReport {
        let delta_time = if delta_time.is_finite() {
            delta_time.max(0.0)
        } else {
            0.0
        };
        let Some(agent) = available(&mut self.pathing) else {
            if !self.warnings.pathing_missing {
                tracing::warn!("BehaviorController: pathing agent unavailable, skipping ticks");
                self.warnings.pathing_missing = true;
            }
            self.caught = false;
            self.catch_latched = false;
            return TickReport::skipped(self.state);
        };
        self.warnings.pathing_missing = false;

        let perception = match self.target.as_ref() {
            Some(target) => Perception::sample(&*agent, target),
            None => None,
        };
        if perception.is_none() {
            if !self.warnings.target_missing {
                tracing::warn!("BehaviorController: target unavailable, alert logic disabled");
                self.warnings.target_missing = true;
            }
        } else {
            self.warnings.target_missing = false;
        }

        let mut transition = None;

        // Global pre-check: an exposed target in range always wins.
        if let Some(p) = perception
            && self.state != BehaviorState::Chase
            && p.is_exposed_within_chase_range(&self.config)
        {
            transition = Some(self.enter_chase(p.distance));
        }

        let mut catchable = None;
        let dispatched = match self.state {
            BehaviorState::Patrol => {
                self.tick_patrol(delta_time);
                None
            }
            BehaviorState::Investigate => self.tick_investigate(delta_time, perception),
            BehaviorState::Chase => {
                let (lost, catch) = self.tick_chase(perception);
                catchable = catch;
                lost
            }
        };
        transition = transition.or(dispatched);

        self.update_catch(catchable);

        TickReport {
            state: self.state,
            transition,
            caught: self.caught,
            skipped: false,
        }
    }

    /// Reacts to a noise at `position`.
    ///
    /// Ignored while chasing. Otherwise the enemy switches to (or restarts)
    /// an investigation of `position`; the latest sound always wins.
    /// Returns `true` when the sound was accepted.
    pub fn on_heard_sound(&mut self, position: Vec2) -> bool {
        if self.state == BehaviorState::Chase {
            tracing::trace!("BehaviorController: ignoring sound at {} while chasing", position);
            return false;
        }

        let from = self.state;
        self.state = BehaviorState::Investigate;
        self.investigation = Some(InvestigationTarget::new(position));
        self.patrol_wait = None;

        if let Some(agent) = available(&mut self.pathing) {
            agent.set_speed(self.config.chase_speed);
            agent.set_destination(position);
            agent.set_stopped(false);
        }

        if from == BehaviorState::Investigate {
            tracing::debug!("BehaviorController: investigation retargeted to {}", position);
        } else {
            log_transition(&Transition {
                from,
                to: BehaviorState::Investigate,
                cause: TransitionCause::HeardSound,
            });
        }
        true
    }

    /// Resets the patrol onto the waypoint nearest to the agent and heads
    /// there. No-op for an empty route or a missing agent.
    pub fn start_patrol(&mut self) {
        self.patrol_wait = None;

        if self.route.is_empty() {
            if !self.warnings.empty_route {
                tracing::warn!("BehaviorController: patrol route is empty, enemy will idle");
                self.warnings.empty_route = true;
            }
            return;
        }

        let Some(agent) = available(&mut self.pathing) else {
            return;
        };
        if let Some(waypoint) = self.route.select_nearest(agent.position()) {
            tracing::debug!(
                "BehaviorController: patrol starts at waypoint {} {}",
                self.route.index(),
                waypoint
            );
            agent.set_speed(self.config.patrol_speed);
            agent.set_destination(waypoint);
        }
    }

    fn resume_investigation(&mut self) {
        let Some(investigation) = self.investigation.as_mut() else {
            return;
        };
        investigation.phase = InvestigationPhase::EnRoute;

        if let Some(agent) = available(&mut self.pathing) {
            agent.set_speed(self.config.chase_speed);
            agent.set_destination(investigation.position);
            agent.set_stopped(false);
            tracing::debug!(
                "BehaviorController: new agent resumes investigation of {}",
                investigation.position
            );
        }
    }

    fn resume_chase(&mut self) {
        let target = self.target.as_ref();
        let Some(agent) = available(&mut self.pathing) else {
            return;
        };
        agent.set_speed(self.config.chase_speed);
        agent.set_stopped(false);
        if let Some(p) = target.and_then(|target| Perception::sample(&*agent, target)) {
            agent.set_destination(p.target);
        }
    }

    // ========================================================================
    // State logic
    // ========================================================================

    fn tick_patrol(&mut self, delta_time: f32) {
        if self.route.is_empty() {
            return;
        }
        let Some(agent) = available(&mut self.pathing) else {
            return;
        };
        agent.set_speed(self.config.patrol_speed);

        match self.patrol_wait {
            None => {
                if has_arrived(&*agent, self.config.stopping_threshold) {
                    agent.set_stopped(true);
                    self.patrol_wait = Some(self.config.patrol_wait_time);
                    tracing::trace!(
                        "BehaviorController: waiting at waypoint {}",
                        self.route.index()
                    );
                }
            }
            Some(remaining) => {
                let remaining = remaining - delta_time;
                if remaining <= 0.0 {
                    self.patrol_wait = None;
                    agent.set_stopped(false);
                    if let Some(next) = self.route.advance() {
                        tracing::trace!(
                            "BehaviorController: heading to waypoint {} {}",
                            self.route.index(),
                            next
                        );
                        agent.set_destination(next);
                    }
                } else {
                    self.patrol_wait = Some(remaining);
                }
            }
        }
    }

    fn tick_investigate(
        &mut self,
        delta_time: f32,
        perception: Option<Perception>,
    ) -> Option<Transition> {
        let Some(investigation) = self.investigation.as_mut() else {
            tracing::error!("BehaviorController: investigating without a target, resuming patrol");
            return Some(self.give_up(TransitionCause::InvestigationTimedOut));
        };
        let agent = available(&mut self.pathing)?;
        agent.set_speed(self.config.chase_speed);

        let phase = investigation.phase;
        match phase {
            InvestigationPhase::EnRoute => {
                if has_arrived(&*agent, self.config.stopping_threshold) {
                    agent.set_stopped(true);
                    investigation.phase = InvestigationPhase::Arrived {
                        remaining: self.config.investigate_timeout,
                    };
                    tracing::debug!(
                        "BehaviorController: arrived at sound {}, lingering {}s",
                        investigation.position,
                        self.config.investigate_timeout
                    );
                }
                None
            }
            InvestigationPhase::Arrived { remaining } => {
                let remaining = remaining - delta_time;
                investigation.phase = InvestigationPhase::Arrived { remaining };

                if perception.is_some_and(|p| p.concealed) {
                    Some(self.give_up(TransitionCause::TargetConcealed))
                } else if remaining <= 0.0 {
                    Some(self.give_up(TransitionCause::InvestigationTimedOut))
                } else {
                    None
                }
            }
        }
    }

    /// Pursues the target. Returns the give-up transition, if any, and the
    /// perception to test for a catch while still chasing.
    fn tick_chase(
        &mut self,
        perception: Option<Perception>,
    ) -> (Option<Transition>, Option<Perception>) {
        let Some(p) = perception else {
            return (Some(self.give_up(TransitionCause::TargetMissing)), None);
        };

        if let Some(agent) = available(&mut self.pathing) {
            agent.set_speed(self.config.chase_speed);
            agent.set_destination(p.target);
        }

        if p.has_lost_target(&self.config) {
            let cause = if p.concealed {
                TransitionCause::TargetConcealed
            } else {
                TransitionCause::TargetOutOfRange
            };
            return (Some(self.give_up(cause)), None);
        }

        (None, Some(p))
    }

    // ========================================================================
    // Transitions
    // ========================================================================

    fn enter_chase(&mut self, distance: f32) -> Transition {
        let transition = Transition {
            from: self.state,
            to: BehaviorState::Chase,
            cause: TransitionCause::TargetSpotted,
        };
        self.state = BehaviorState::Chase;
        self.investigation = None;
        self.patrol_wait = None;
        if let Some(agent) = available(&mut self.pathing) {
            agent.set_stopped(false);
        }
        tracing::debug!("BehaviorController: target spotted at distance {:.2}", distance);
        log_transition(&transition);
        transition
    }

    /// Returns to patrol from Investigate or Chase.
    fn give_up(&mut self, cause: TransitionCause) -> Transition {
        let transition = Transition {
            from: self.state,
            to: BehaviorState::Patrol,
            cause,
        };
        self.state = BehaviorState::Patrol;
        self.investigation = None;
        if let Some(agent) = available(&mut self.pathing) {
            agent.set_stopped(false);
        }
        self.start_patrol();
        log_transition(&transition);
        transition
    }

    fn update_catch(&mut self, catchable: Option<Perception>) {
        let caught = catchable
            .filter(|p| self.state == BehaviorState::Chase && p.is_catchable(&self.config));
        self.caught = caught.is_some();

        let Some(p) = caught else {
            self.catch_latched = false;
            return;
        };
        if self.catch_latched {
            return;
        }
        self.catch_latched = true;

        tracing::info!(
            "BehaviorController: target caught at {} (distance {:.2})",
            p.target,
            p.distance
        );
        if let Some(listener) = self.listener.as_mut() {
            listener.on_target_caught(&CatchEvent {
                enemy_position: p.origin,
                target_position: p.target,
                distance: p.distance,
            });
        }
    }
}

fn log_transition(transition: &Transition) {
    tracing::debug!("BehaviorController: {}", transition);
}

impl<P, T> core::fmt::Debug for BehaviorController<P, T> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("BehaviorController")
            .field("state", &self.state)
            .field("route_index", &self.route.index())
            .field("patrol_wait", &self.patrol_wait)
            .field("investigation", &self.investigation)
            .field("caught", &self.caught)
            .field("has_pathing", &self.pathing.is_some())
            .field("has_target", &self.target.is_some())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;
    use std::rc::Rc;

    use super::*;
    use crate::env::TargetBeacon;

    /// Pathing double that records every request and arrives on demand.
    #[derive(Debug)]
    struct ScriptedAgent {
        position: Vec2,
        destination: Option<Vec2>,
        destinations: Vec<Vec2>,
        remaining: f32,
        pending: bool,
        speed: f32,
        stopped: bool,
        available: bool,
    }

    impl ScriptedAgent {
        fn at(x: f32, y: f32) -> Self {
            Self {
                position: Vec2::new(x, y),
                destination: None,
                destinations: Vec::new(),
                remaining: 0.0,
                pending: false,
                speed: 0.0,
                stopped: false,
                available: true,
            }
        }

        /// Teleports onto the destination.
        fn arrive(&mut self) {
            if let Some(dest) = self.destination {
                self.position = dest;
            }
            self.remaining = 0.0;
            self.pending = false;
        }
    }

    impl PathingProvider for ScriptedAgent {
        fn position(&self) -> Vec2 {
            self.position
        }

        fn set_destination(&mut self, point: Vec2) {
            self.destination = Some(point);
            self.destinations.push(point);
            self.remaining = self.position.distance(point);
            self.pending = false;
        }

        fn remaining_distance(&self) -> f32 {
            self.remaining
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
            self.available
        }
    }

    type Controller = BehaviorController<ScriptedAgent, TargetBeacon>;

    const P0: Vec2 = Vec2::new(0.0, 0.0);
    const P1: Vec2 = Vec2::new(10.0, 0.0);
    const P2: Vec2 = Vec2::new(10.0, 10.0);
    const FAR: Vec2 = Vec2::new(100.0, 100.0);

    fn config() -> AlertConfig {
        AlertConfig::new()
            .with_chase_range(5.0)
            .with_catch_distance(0.5)
            .with_speeds(2.0, 5.0)
            .with_investigate_timeout(10.0)
            .with_patrol_wait_time(2.0)
            .with_stopping_threshold(0.5)
    }

    fn triangle() -> PatrolRoute {
        PatrolRoute::new(vec![P0, P1, P2])
    }

    fn controller_at(agent: ScriptedAgent, target: Vec2) -> (Controller, TargetBeacon) {
        let beacon = TargetBeacon::new(target);
        let controller = Controller::new(config(), triangle(), agent, beacon.clone()).unwrap();
        (controller, beacon)
    }

    fn agent(c: &mut Controller) -> &mut ScriptedAgent {
        c.pathing_mut().unwrap()
    }

    fn catch_counter(c: &mut Controller) -> Rc<Cell<u32>> {
        let count = Rc::new(Cell::new(0));
        let sink = count.clone();
        c.set_catch_listener(move |_: &CatchEvent| sink.set(sink.get() + 1));
        count
    }

    /// Drives the controller into Chase with the target at `target`.
    fn chasing(target: Vec2) -> (Controller, TargetBeacon) {
        let (mut c, beacon) = controller_at(ScriptedAgent::at(0.0, 0.0), Vec2::new(3.0, 0.0));
        c.tick(0.1);
        assert_eq!(c.current_state(), BehaviorState::Chase);
        beacon.set_position(target);
        (c, beacon)
    }

    // ============================================================================
    // Patrol
    // ============================================================================

    #[test]
    fn patrol_cycles_from_nearest_waypoint_with_pauses() {
        let (mut c, _beacon) = controller_at(ScriptedAgent::at(9.0, 1.0), FAR);

        assert_eq!(c.current_state(), BehaviorState::Patrol);
        assert_eq!(agent(&mut c).destinations, vec![P1]);
        assert_eq!(agent(&mut c).speed, 2.0);

        let mut expected = vec![P1];
        for next in [P2, P0, P1] {
            // Walking: nothing happens until arrival.
            c.tick(0.5);
            assert_eq!(c.patrol_wait_remaining(), None);

            agent(&mut c).arrive();
            c.tick(0.5);
            assert_eq!(c.patrol_wait_remaining(), Some(2.0));
            assert!(agent(&mut c).stopped);

            c.tick(1.0);
            assert_eq!(agent(&mut c).destinations, expected);
            c.tick(1.0);

            expected.push(next);
            assert_eq!(agent(&mut c).destinations, expected);
            assert!(!agent(&mut c).stopped);
            assert_eq!(c.patrol_wait_remaining(), None);
        }
        assert_eq!(c.route().index(), 1);
    }

    #[test]
    fn invalid_delta_time_keeps_countdowns() {
        let (mut c, _beacon) = controller_at(ScriptedAgent::at(0.0, 0.0), FAR);
        c.tick(0.1);
        assert_eq!(c.patrol_wait_remaining(), Some(2.0));

        c.tick(f32::NAN);
        c.tick(-1.0);
        c.tick(f32::INFINITY);
        assert_eq!(c.patrol_wait_remaining(), Some(2.0));

        c.tick(1.0);
        c.tick(1.0);
        assert_eq!(c.patrol_wait_remaining(), None);
        assert_eq!(agent(&mut c).destination, Some(P1));
    }

    #[test]
    fn patrol_waits_for_pending_path() {
        let (mut c, _beacon) = controller_at(ScriptedAgent::at(0.0, 0.0), FAR);
        agent(&mut c).remaining = 0.0;
        agent(&mut c).pending = true;

        c.tick(0.1);
        assert_eq!(c.patrol_wait_remaining(), None);

        agent(&mut c).pending = false;
        c.tick(0.1);
        assert_eq!(c.patrol_wait_remaining(), Some(2.0));
    }

    #[test]
    fn patrol_wraps_from_last_waypoint() {
        let (mut c, _beacon) = controller_at(ScriptedAgent::at(10.0, 9.0), FAR);
        assert_eq!(c.route().index(), 2);

        agent(&mut c).arrive();
        c.tick(0.1);
        c.tick(2.0);

        assert_eq!(c.route().index(), 0);
        assert_eq!(agent(&mut c).destination, Some(P0));
    }

    #[test]
    fn empty_route_idles_in_patrol() {
        let beacon = TargetBeacon::new(FAR);
        let mut c = Controller::new(
            config(),
            PatrolRoute::new(Vec::new()),
            ScriptedAgent::at(0.0, 0.0),
            beacon,
        )
        .unwrap();

        for _ in 0..5 {
            let report = c.tick(1.0);
            assert_eq!(report.state, BehaviorState::Patrol);
            assert_eq!(report.transition, None);
        }
        assert!(agent(&mut c).destinations.is_empty());
    }

    // ============================================================================
    // Sounds and investigation
    // ============================================================================

    #[test]
    fn heard_sound_starts_investigation_at_chase_speed() {
        let (mut c, _beacon) = controller_at(ScriptedAgent::at(0.0, 0.0), FAR);
        agent(&mut c).stopped = true;

        assert!(c.on_heard_sound(Vec2::new(5.0, 5.0)));

        assert_eq!(c.current_state(), BehaviorState::Investigate);
        let investigation = c.investigation().copied().unwrap();
        assert_eq!(investigation.position, Vec2::new(5.0, 5.0));
        assert_eq!(investigation.phase, InvestigationPhase::EnRoute);
        assert_eq!(agent(&mut c).destination, Some(Vec2::new(5.0, 5.0)));
        assert_eq!(agent(&mut c).speed, 5.0);
        assert!(!agent(&mut c).stopped);
    }

    #[test]
    fn latest_sound_wins() {
        let (mut c, _beacon) = controller_at(ScriptedAgent::at(0.0, 0.0), FAR);
        c.on_heard_sound(Vec2::new(5.0, 5.0));
        agent(&mut c).arrive();
        c.tick(0.1);
        assert!(c.investigation().unwrap().has_arrived());

        c.on_heard_sound(Vec2::new(-4.0, 2.0));

        let investigation = c.investigation().copied().unwrap();
        assert_eq!(investigation.position, Vec2::new(-4.0, 2.0));
        assert_eq!(investigation.phase, InvestigationPhase::EnRoute);
        assert_eq!(agent(&mut c).destination, Some(Vec2::new(-4.0, 2.0)));
    }

    #[test]
    fn investigation_times_out_after_full_countdown() {
        let (mut c, _beacon) = controller_at(ScriptedAgent::at(0.0, 0.0), FAR);
        c.on_heard_sound(Vec2::new(30.0, 30.0));
        agent(&mut c).arrive();

        c.tick(1.0);
        assert_eq!(c.investigation().unwrap().remaining(), Some(10.0));
        assert!(agent(&mut c).stopped);

        for _ in 0..9 {
            let report = c.tick(1.0);
            assert_eq!(report.state, BehaviorState::Investigate);
        }
        assert_eq!(c.investigation().unwrap().remaining(), Some(1.0));

        let report = c.tick(1.0);
        assert_eq!(report.state, BehaviorState::Patrol);
        assert_eq!(
            report.transition.map(|t| t.cause),
            Some(TransitionCause::InvestigationTimedOut)
        );
        assert!(c.investigation().is_none());

        // Nearest waypoint to (30, 30) is P2.
        assert_eq!(c.route().index(), 2);
        assert_eq!(agent(&mut c).destination, Some(P2));
        assert!(!agent(&mut c).stopped);
        assert_eq!(agent(&mut c).speed, 2.0);
    }

    #[test]
    fn investigation_gives_up_when_target_hides() {
        let (mut c, beacon) = controller_at(ScriptedAgent::at(0.0, 0.0), FAR);
        c.on_heard_sound(Vec2::new(1.0, 1.0));
        agent(&mut c).arrive();
        c.tick(1.0);

        beacon.set_concealed(true);
        let report = c.tick(1.0);

        assert_eq!(report.state, BehaviorState::Patrol);
        assert_eq!(
            report.transition.map(|t| t.cause),
            Some(TransitionCause::TargetConcealed)
        );
    }

    #[test]
    fn investigation_en_route_ignores_concealment() {
        let (mut c, beacon) = controller_at(ScriptedAgent::at(0.0, 0.0), FAR);
        c.on_heard_sound(Vec2::new(20.0, 0.0));
        beacon.set_concealed(true);

        c.tick(1.0);
        assert_eq!(c.current_state(), BehaviorState::Investigate);
    }

    #[test]
    fn spotting_interrupts_investigation() {
        let (mut c, beacon) = controller_at(ScriptedAgent::at(0.0, 0.0), FAR);
        c.on_heard_sound(Vec2::new(1.0, 0.0));
        agent(&mut c).arrive();
        c.tick(1.0);
        c.tick(1.0);
        assert_eq!(c.investigation().unwrap().remaining(), Some(9.0));

        beacon.set_position(Vec2::new(4.0, 0.0));
        let report = c.tick(1.0);

        assert_eq!(report.state, BehaviorState::Chase);
        assert_eq!(
            report.transition,
            Some(Transition {
                from: BehaviorState::Investigate,
                to: BehaviorState::Chase,
                cause: TransitionCause::TargetSpotted,
            })
        );
        assert!(c.investigation().is_none());
        assert!(!agent(&mut c).stopped);
        assert_eq!(agent(&mut c).destination, Some(Vec2::new(4.0, 0.0)));
    }

    // ============================================================================
    // Chase
    // ============================================================================

    #[test]
    fn exposed_target_in_range_forces_chase_from_patrol() {
        let (mut c, _beacon) = controller_at(ScriptedAgent::at(0.0, 0.0), Vec2::new(5.0, 0.0));
        agent(&mut c).arrive();
        c.tick(0.1);

        assert_eq!(c.current_state(), BehaviorState::Chase);
        assert_eq!(c.patrol_wait_remaining(), None);
        assert_eq!(agent(&mut c).speed, 5.0);
    }

    #[test]
    fn concealed_target_in_range_is_not_noticed() {
        let (mut c, beacon) = controller_at(ScriptedAgent::at(0.0, 0.0), Vec2::new(1.0, 0.0));
        beacon.set_concealed(true);
        let report = c.tick(0.1);
        assert_eq!(report.state, BehaviorState::Patrol);
    }

    #[test]
    fn sound_cannot_interrupt_chase() {
        let (mut c, _beacon) = chasing(Vec2::new(3.0, 0.0));
        let before = agent(&mut c).destinations.clone();

        assert!(!c.on_heard_sound(Vec2::new(50.0, 50.0)));

        assert_eq!(c.current_state(), BehaviorState::Chase);
        assert!(c.investigation().is_none());
        assert_eq!(agent(&mut c).destinations, before);
    }

    #[test]
    fn chase_follows_live_target_position() {
        let (mut c, beacon) = chasing(Vec2::new(6.0, 0.0));
        c.tick(0.1);
        assert_eq!(agent(&mut c).destination, Some(Vec2::new(6.0, 0.0)));

        beacon.set_position(Vec2::new(7.0, 2.0));
        c.tick(0.1);
        assert_eq!(agent(&mut c).destination, Some(Vec2::new(7.0, 2.0)));
        assert_eq!(c.current_state(), BehaviorState::Chase);
    }

    #[test]
    fn chase_abandoned_beyond_double_range() {
        let (mut c, beacon) = chasing(Vec2::new(10.0, 0.0));
        assert_eq!(c.tick(0.1).state, BehaviorState::Chase);

        beacon.set_position(Vec2::new(10.1, 0.0));
        let report = c.tick(0.1);

        assert_eq!(report.state, BehaviorState::Patrol);
        assert_eq!(
            report.transition.map(|t| t.cause),
            Some(TransitionCause::TargetOutOfRange)
        );
        // Agent sits at (0, 0): nearest waypoint is P0.
        assert_eq!(agent(&mut c).destination, Some(P0));
        assert_eq!(agent(&mut c).speed, 2.0);
    }

    #[test]
    fn catch_fires_when_close_and_exposed() {
        let (mut c, _beacon) = chasing(Vec2::new(0.4, 0.0));
        let count = catch_counter(&mut c);

        let report = c.tick(0.1);

        assert!(report.caught);
        assert!(c.is_caught_target());
        assert_eq!(count.get(), 1);
    }

    #[test]
    fn concealed_target_is_never_caught() {
        let (mut c, beacon) = chasing(Vec2::new(0.1, 0.0));
        let count = catch_counter(&mut c);
        beacon.set_concealed(true);

        let report = c.tick(0.1);

        assert!(!report.caught);
        assert!(!c.is_caught_target());
        assert_eq!(count.get(), 0);
        assert_eq!(report.state, BehaviorState::Patrol);

        beacon.set_position(Vec2::ZERO);
        assert!(!c.tick(0.1).caught);
    }

    #[test]
    fn catch_listener_fires_once_per_episode() {
        let (mut c, beacon) = chasing(Vec2::new(0.2, 0.0));
        let count = catch_counter(&mut c);

        for _ in 0..3 {
            assert!(c.tick(0.1).caught);
        }
        assert_eq!(count.get(), 1);

        // Slip out of reach while still being chased, then get caught again.
        beacon.set_position(Vec2::new(2.0, 0.0));
        assert!(!c.tick(0.1).caught);
        beacon.set_position(Vec2::new(0.3, 0.0));
        assert!(c.tick(0.1).caught);
        assert_eq!(count.get(), 2);
    }

    #[test]
    fn catch_event_carries_positions() {
        let (c, _beacon) = chasing(Vec2::new(0.3, 0.4));
        let seen = Rc::new(Cell::new(None));
        let sink = seen.clone();
        let mut c = c.with_catch_listener(move |event: &CatchEvent| sink.set(Some(*event)));

        c.tick(0.1);

        let event = seen.get().unwrap();
        assert_eq!(event.enemy_position, Vec2::ZERO);
        assert_eq!(event.target_position, Vec2::new(0.3, 0.4));
        assert!((event.distance - 0.5).abs() < 1e-6);
    }

    // ============================================================================
    // Degraded operation
    // ============================================================================

    #[test]
    fn missing_pathing_skips_ticks() {
        let beacon = TargetBeacon::new(Vec2::new(1.0, 0.0));
        let mut c = Controller::with_collaborators(config(), triangle(), None, Some(beacon)).unwrap();

        let report = c.tick(1.0);
        assert!(report.skipped);
        assert_eq!(report.state, BehaviorState::Patrol);

        // Sounds still update the state machine.
        assert!(c.on_heard_sound(Vec2::new(3.0, 3.0)));
        assert_eq!(c.current_state(), BehaviorState::Investigate);

        c.attach_pathing(ScriptedAgent::at(0.0, 0.0));
        let report = c.tick(1.0);
        assert!(!report.skipped);
        assert_eq!(report.state, BehaviorState::Chase);
    }

    #[test]
    fn attached_agent_resumes_investigation() {
        let beacon = TargetBeacon::new(FAR);
        let mut c = Controller::with_collaborators(config(), triangle(), None, Some(beacon)).unwrap();
        c.on_heard_sound(Vec2::new(20.0, 20.0));

        c.attach_pathing(ScriptedAgent::at(1.0, 1.0));
        assert_eq!(agent(&mut c).destination, Some(Vec2::new(20.0, 20.0)));
        assert_eq!(agent(&mut c).speed, 5.0);
        assert!(!agent(&mut c).stopped);

        let report = c.tick(0.1);
        assert_eq!(report.state, BehaviorState::Investigate);
        assert_eq!(
            c.investigation().map(|i| i.phase),
            Some(InvestigationPhase::EnRoute)
        );
    }

    #[test]
    fn attached_agent_restarts_lingering_investigation() {
        let (mut c, _beacon) = controller_at(ScriptedAgent::at(0.0, 0.0), FAR);
        c.on_heard_sound(Vec2::new(3.0, 3.0));
        agent(&mut c).arrive();
        c.tick(0.1);
        assert!(c.investigation().is_some_and(|i| i.has_arrived()));

        c.detach_pathing();
        c.attach_pathing(ScriptedAgent::at(8.0, 8.0));

        assert_eq!(
            c.investigation().map(|i| i.phase),
            Some(InvestigationPhase::EnRoute)
        );
        assert_eq!(agent(&mut c).destinations, vec![Vec2::new(3.0, 3.0)]);
    }

    #[test]
    fn attached_agent_resumes_chase() {
        let (mut c, _beacon) = chasing(Vec2::new(2.0, 0.0));
        c.detach_pathing();

        c.attach_pathing(ScriptedAgent::at(0.0, 1.0));
        assert_eq!(agent(&mut c).destination, Some(Vec2::new(2.0, 0.0)));
        assert_eq!(agent(&mut c).speed, 5.0);
        assert_eq!(c.current_state(), BehaviorState::Chase);
    }

    #[test]
    fn destroyed_agent_is_treated_as_missing() {
        let (mut c, _beacon) = controller_at(ScriptedAgent::at(0.0, 0.0), Vec2::new(1.0, 0.0));
        agent(&mut c).available = false;

        let report = c.tick(1.0);
        assert!(report.skipped);
        assert_eq!(c.current_state(), BehaviorState::Patrol);

        c.on_heard_sound(Vec2::new(2.0, 2.0));
        assert_eq!(agent(&mut c).destinations.len(), 1);
    }

    #[test]
    fn missing_target_ends_chase() {
        let (mut c, _beacon) = chasing(Vec2::new(2.0, 0.0));
        c.detach_target();

        let report = c.tick(0.1);
        assert_eq!(report.state, BehaviorState::Patrol);
        assert_eq!(
            report.transition.map(|t| t.cause),
            Some(TransitionCause::TargetMissing)
        );

        // Patrol keeps running without a target.
        agent(&mut c).arrive();
        c.tick(0.1);
        assert_eq!(c.patrol_wait_remaining(), Some(2.0));
    }

    #[test]
    fn retired_beacon_disables_alerts() {
        let (mut c, beacon) = controller_at(ScriptedAgent::at(0.0, 0.0), Vec2::new(1.0, 0.0));
        beacon.retire();

        assert_eq!(c.tick(0.1).state, BehaviorState::Patrol);
    }

    #[test]
    fn invalid_config_is_rejected() {
        let bad = config().with_chase_range(0.0);
        let result = Controller::new(
            bad,
            triangle(),
            ScriptedAgent::at(0.0, 0.0),
            TargetBeacon::default(),
        );
        assert!(matches!(
            result,
            Err(ConfigError::NotPositive {
                field: "chase_range",
                ..
            })
        ));
    }
}
