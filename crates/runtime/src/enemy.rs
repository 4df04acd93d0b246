//! An enemy on the stage: a behavior controller steering a kinematic agent.

use hollows_core::{
    AlertConfig, BehaviorController, BehaviorState, ConfigError, PathingProvider, PatrolRoute,
    TargetBeacon, TickReport, Vec2,
};

use crate::agent::KinematicAgent;
use crate::api::EnemyStatus;

pub type EnemyController = BehaviorController<KinematicAgent, TargetBeacon>;

#[derive(Debug)]
pub struct Enemy {
    name: String,
    controller: EnemyController,
}

impl Enemy {
    /// Spawns an enemy at `spawn`, patrolling `route` and hunting whoever
    /// publishes to `beacon`.
    pub fn new(
        name: impl Into<String>,
        spawn: Vec2,
        route: PatrolRoute,
        config: AlertConfig,
        beacon: TargetBeacon,
    ) -> Result<Self, ConfigError> {
        let controller =
            BehaviorController::new(config, route, KinematicAgent::new(spawn), beacon)?;
        Ok(Self {
            name: name.into(),
            controller,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn controller(&self) -> &EnemyController {
        &self.controller
    }

    pub fn controller_mut(&mut self) -> &mut EnemyController {
        &mut self.controller
    }

    pub fn state(&self) -> BehaviorState {
        self.controller.current_state()
    }

    pub fn position(&self) -> Option<Vec2> {
        self.controller.pathing().map(|agent| agent.position())
    }

    pub fn agent(&self) -> Option<&KinematicAgent> {
        self.controller.pathing()
    }

    pub fn agent_mut(&mut self) -> Option<&mut KinematicAgent> {
        self.controller.pathing_mut()
    }

    /// Runs the controller, then moves the agent along whatever path it
    /// was given.
    pub fn update(&mut self, delta_time: f32) -> TickReport {
        let report = self.controller.tick(delta_time);
        if let Some(agent) = self.controller.pathing_mut() {
            agent.advance(delta_time);
        }
        report
    }

    pub fn status(&self) -> EnemyStatus {
        EnemyStatus {
            state: self.state(),
            position: self.position(),
            caught: self.controller.is_caught_target(),
        }
    }
}
