//! Headless host loop.
//!
//! The stage owns every simulation object of a level and advances them in a
//! fixed order each frame:
//!
//! 1. player actions (hide, flashlight, pickup, equip, use, craft)
//! 2. player movement and stamina
//! 3. flashlight drain
//! 4. broken-tile triggers
//! 5. beacon publish (what enemies perceive this frame)
//! 6. sound delivery, in raise order
//! 7. enemy controller ticks, each followed by its agent's movement
//! 8. catch, then exit
//!
//! Catches reach the stage through a [`CatchLog`] registered as every
//! controller's catch listener, so each catch episode is reported once.
//! Once the session has an outcome the stage stops advancing.

use std::collections::HashMap;

use hollows_content::{ItemEffect, ItemSpec, LevelSpec, PlayerTuning, RecipeSpec};
use hollows_core::{
    AlertConfig, BehaviorState, SoundCause, SoundEvent, TargetBeacon, Transition,
    TransitionCause,
};

use crate::api::{
    EnemyStatus, FrameInput, FrameReport, Result, RuntimeError, StageEvent,
};
use crate::enemy::Enemy;
use crate::events::{CatchLog, SoundBus};
use crate::player::{Player, Toggle};
use crate::session::{ItemCatalog, Outcome, RecipeBook, Session};
use crate::world::{BrokenTile, Exit, Pickup, World, Zone};

/// Totals of a multi-frame [`Stage::run`].
#[derive(Clone, Debug, Default, PartialEq)]
pub struct RunSummary {
    pub frames: u64,
    pub elapsed: f32,
    pub outcome: Outcome,
    pub transitions: usize,
    pub sounds: usize,
    pub rejected_actions: usize,
}

pub struct Stage {
    level_name: String,
    session: Session,
    player: Player,
    beacon: TargetBeacon,
    enemies: Vec<Enemy>,
    world: World,
    catalog: ItemCatalog,
    recipes: RecipeBook,
    sounds: SoundBus,
    catches: CatchLog,
    frame: u64,
    elapsed: f32,
}

impl Stage {
    /// Create a new stage builder
    pub fn builder() -> StageBuilder {
        StageBuilder::new()
    }

    /// Simulates one frame of `delta_time` seconds.
    ///
    /// A negative or non-finite `delta_time` is simulated as a zero-length
    /// frame: actions still apply, timers and movement do not advance.
    pub fn step(&mut self, delta_time: f32, input: &FrameInput) -> FrameReport {
        let delta_time = frame_time(delta_time);
        if self.session.is_over() {
            return FrameReport {
                frame: self.frame,
                outcome: self.session.outcome(),
                advanced: false,
                events: Vec::new(),
                enemies: self.enemy_status(),
            };
        }

        let mut events = Vec::new();

        self.apply_actions(input, &mut events);

        if let Some(sound) = self
            .player
            .update(input.direction, input.sprint, delta_time)
        {
            self.sounds.raise(sound);
        }

        if self.player.flashlight_mut().update(delta_time) {
            events.push(StageEvent::FlashlightDepleted);
        }

        for tile in self.world.step_on_tiles(self.player.position()) {
            tracing::debug!("Stage: player stepped on broken tile at {}", tile);
            self.sounds
                .raise(SoundEvent::new(tile, SoundCause::BrokenTile));
        }

        self.beacon
            .publish(self.player.position(), self.player.is_hidden());

        self.deliver_sounds(&mut events);

        for (index, enemy) in self.enemies.iter_mut().enumerate() {
            if let Some(transition) = enemy.update(delta_time).transition {
                events.push(StageEvent::EnemyTransition {
                    enemy: index,
                    transition,
                });
            }
        }

        let mut caught = false;
        for (enemy, catch) in self.catches.drain() {
            caught = true;
            events.push(StageEvent::TargetCaught {
                enemy,
                position: catch.target_position,
            });
        }

        if caught {
            self.end(Outcome::Lost, &mut events);
        } else if self.player_escaped() {
            self.end(Outcome::Won, &mut events);
        }

        let report = FrameReport {
            frame: self.frame,
            outcome: self.session.outcome(),
            advanced: true,
            events,
            enemies: self.enemy_status(),
        };

        self.frame += 1;
        self.elapsed += delta_time;
        report
    }

    /// Steps until `inputs` runs dry, `max_frames` is reached or the
    /// session ends.
    pub fn run<I>(&mut self, delta_time: f32, max_frames: u64, inputs: I) -> RunSummary
    where
        I: IntoIterator<Item = FrameInput>,
    {
        let mut summary = RunSummary::default();
        let mut inputs = inputs.into_iter();

        while summary.frames < max_frames && !self.session.is_over() {
            let Some(input) = inputs.next() else {
                break;
            };
            let report = self.step(delta_time, &input);

            summary.frames += 1;
            summary.transitions += report.transitions().count();
            summary.sounds += report.sounds().count();
            summary.rejected_actions += report.rejections().count();

            for (enemy, transition) in report.transitions() {
                tracing::info!(
                    "[frame {}] {}: {}",
                    report.frame,
                    self.enemies
                        .get(enemy)
                        .map_or("?", |e| e.name()),
                    transition
                );
            }
        }

        summary.elapsed = self.elapsed;
        summary.outcome = self.session.outcome();
        summary
    }

    /// Queues a sound for delivery during the next frame.
    pub fn raise_sound(&mut self, event: SoundEvent) {
        self.sounds.raise(event);
    }

    // ========================================================================
    // Accessors
    // ========================================================================

    pub fn level_name(&self) -> &str {
        &self.level_name
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn session_mut(&mut self) -> &mut Session {
        &mut self.session
    }

    pub fn outcome(&self) -> Outcome {
        self.session.outcome()
    }

    pub fn player(&self) -> &Player {
        &self.player
    }

    pub fn player_mut(&mut self) -> &mut Player {
        &mut self.player
    }

    pub fn enemies(&self) -> &[Enemy] {
        &self.enemies
    }

    pub fn enemies_mut(&mut self) -> &mut [Enemy] {
        &mut self.enemies
    }

    pub fn enemy(&self, name: &str) -> Option<&Enemy> {
        self.enemies.iter().find(|enemy| enemy.name() == name)
    }

    pub fn enemy_mut(&mut self, name: &str) -> Option<&mut Enemy> {
        self.enemies.iter_mut().find(|enemy| enemy.name() == name)
    }

    pub fn world(&self) -> &World {
        &self.world
    }

    pub fn beacon(&self) -> &TargetBeacon {
        &self.beacon
    }

    pub fn catalog(&self) -> &ItemCatalog {
        &self.catalog
    }

    pub fn recipes(&self) -> &RecipeBook {
        &self.recipes
    }

    /// Number of frames simulated so far.
    pub fn frame(&self) -> u64 {
        self.frame
    }

    pub fn elapsed(&self) -> f32 {
        self.elapsed
    }

    pub fn enemy_status(&self) -> Vec<EnemyStatus> {
        self.enemies.iter().map(Enemy::status).collect()
    }

    // ========================================================================
    // Frame phases
    // ========================================================================

    fn apply_actions(&mut self, input: &FrameInput, events: &mut Vec<StageEvent>) {
        if input.toggle_hide {
            self.toggle_hide(events);
        }
        if input.toggle_flashlight {
            self.toggle_flashlight(events);
        }
        if input.interact {
            self.pick_up(events);
        }
        if let Some(item) = &input.equip {
            match self.session.equip(item) {
                Ok(()) => events.push(StageEvent::ItemEquipped { item: item.clone() }),
                Err(e) => reject(events, e.to_string()),
            }
        }
        if input.use_item {
            match self.use_equipped() {
                Ok(item) => events.push(StageEvent::ItemUsed { item }),
                Err(e) => reject(events, e.to_string()),
            }
        }
        if let Some(placed) = &input.craft {
            match self.recipes.craft(self.session.inventory_mut(), placed) {
                Ok(item) => {
                    self.session.sync_equipped();
                    events.push(StageEvent::ItemCrafted { item });
                }
                Err(e) => reject(events, e.to_string()),
            }
        }
        if let Some(position) = input.noise {
            self.sounds
                .raise(SoundEvent::new(position, SoundCause::Scripted));
        }
    }

    fn toggle_hide(&mut self, events: &mut Vec<StageEvent>) {
        if self.player.is_hidden() {
            self.player.set_hidden(false);
            events.push(StageEvent::HidingChanged { hidden: false });
            return;
        }

        let reach = self.player.interact_radius();
        if self
            .world
            .hiding_spot_near(self.player.position(), reach)
            .is_some()
        {
            self.player.set_hidden(true);
            tracing::debug!("Stage: player hides at {}", self.player.position());
            events.push(StageEvent::HidingChanged { hidden: true });
        } else {
            reject(events, "no hiding spot in reach".to_string());
        }
    }

    fn toggle_flashlight(&mut self, events: &mut Vec<StageEvent>) {
        match self.player.flashlight_mut().toggle() {
            Toggle::SwitchedOn => events.push(StageEvent::FlashlightSwitched { on: true }),
            Toggle::SwitchedOff => {
                events.push(StageEvent::FlashlightSwitched { on: false });
                self.sounds.raise(SoundEvent::new(
                    self.player.position(),
                    SoundCause::FlashlightToggle,
                ));
            }
            Toggle::Empty => reject(events, "flashlight battery is empty".to_string()),
        }
    }

    fn pick_up(&mut self, events: &mut Vec<StageEvent>) {
        if self.player.is_hidden() {
            reject(events, "cannot pick up items while hidden".to_string());
            return;
        }

        let reach = self.player.interact_radius();
        let Some(index) = self.world.pickup_near(self.player.position(), reach) else {
            reject(events, "nothing to pick up".to_string());
            return;
        };

        let pickup = &mut self.world.pickups[index];
        pickup.collect();
        self.session
            .inventory_mut()
            .add(&pickup.item, pickup.quantity);
        tracing::info!("Picked up {} x{}", pickup.item, pickup.quantity);
        events.push(StageEvent::ItemPickedUp {
            item: pickup.item.clone(),
            quantity: pickup.quantity,
        });
    }

    fn use_equipped(&mut self) -> Result<String> {
        let name = self
            .session
            .equipped()
            .ok_or(RuntimeError::NothingEquipped)?
            .to_string();

        let item = self.catalog.lookup(&name);
        if !item.usable {
            return Err(RuntimeError::NotUsable { item: name });
        }

        match item.effect {
            Some(ItemEffect::RechargeFlashlight { amount }) => {
                self.session.consume_equipped()?;
                let charge = self.player.flashlight_mut().recharge(amount);
                tracing::info!("Used {}: flashlight charge {:.1}", name, charge);
            }
            None => tracing::debug!("Used {}: no effect", name),
        }
        Ok(name)
    }

    fn deliver_sounds(&mut self, events: &mut Vec<StageEvent>) {
        for sound in self.sounds.drain() {
            events.push(StageEvent::SoundRaised(sound));

            for (index, enemy) in self.enemies.iter_mut().enumerate() {
                let from = enemy.state();
                let accepted = enemy.controller_mut().on_heard_sound(sound.position);
                if accepted && from != BehaviorState::Investigate {
                    events.push(StageEvent::EnemyTransition {
                        enemy: index,
                        transition: Transition {
                            from,
                            to: BehaviorState::Investigate,
                            cause: TransitionCause::HeardSound,
                        },
                    });
                }
            }
        }
    }

    fn player_escaped(&self) -> bool {
        let Some(exit) = &self.world.exit else {
            return false;
        };
        if self.player.is_hidden() || !exit.zone.contains(self.player.position()) {
            return false;
        }
        match &exit.required_item {
            Some(item) => self.session.inventory().contains(item),
            None => true,
        }
    }

    fn end(&mut self, outcome: Outcome, events: &mut Vec<StageEvent>) {
        if self.session.finish(outcome).is_ok() {
            events.push(StageEvent::OutcomeChanged(outcome));
        }
    }
}

fn frame_time(delta_time: f32) -> f32 {
    if delta_time.is_finite() && delta_time >= 0.0 {
        delta_time
    } else {
        tracing::warn!(
            "Stage: invalid delta_time {}, simulating a zero-length frame",
            delta_time
        );
        0.0
    }
}

fn reject(events: &mut Vec<StageEvent>, reason: String) {
    tracing::debug!("Stage: action rejected: {}", reason);
    events.push(StageEvent::ActionRejected { reason });
}

/// Builder for [`Stage`].
pub struct StageBuilder {
    level: Option<LevelSpec>,
    player_tuning: PlayerTuning,
    alert_config: AlertConfig,
    enemy_configs: HashMap<String, AlertConfig>,
    items: Vec<ItemSpec>,
    recipes: Vec<RecipeSpec>,
}

impl StageBuilder {
    fn new() -> Self {
        Self {
            level: None,
            player_tuning: PlayerTuning::default(),
            alert_config: AlertConfig::default(),
            enemy_configs: HashMap::new(),
            items: Vec::new(),
            recipes: Vec::new(),
        }
    }

    /// Set the required level layout
    pub fn level(mut self, level: LevelSpec) -> Self {
        self.level = Some(level);
        self
    }

    pub fn player_tuning(mut self, tuning: PlayerTuning) -> Self {
        self.player_tuning = tuning;
        self
    }

    /// Tuning shared by every enemy without an override.
    pub fn alert_config(mut self, config: AlertConfig) -> Self {
        self.alert_config = config;
        self
    }

    /// Overrides the tuning of the enemy called `enemy`.
    pub fn enemy_config(mut self, enemy: impl Into<String>, config: AlertConfig) -> Self {
        self.enemy_configs.insert(enemy.into(), config);
        self
    }

    pub fn items(mut self, items: Vec<ItemSpec>) -> Self {
        self.items = items;
        self
    }

    pub fn recipes(mut self, recipes: Vec<RecipeSpec>) -> Self {
        self.recipes = recipes;
        self
    }

    pub fn build(mut self) -> Result<Stage> {
        let level = self.level.take().ok_or(RuntimeError::MissingLevel)?;

        let beacon = TargetBeacon::new(level.player_spawn);
        let catches = CatchLog::new();

        let mut enemies = Vec::with_capacity(level.enemies.len());
        for spec in &level.enemies {
            let config = self
                .enemy_configs
                .remove(&spec.name)
                .unwrap_or_else(|| self.alert_config.clone());
            let mut enemy = Enemy::new(
                spec.name.clone(),
                spec.spawn,
                spec.route(),
                config,
                beacon.clone(),
            )
            .map_err(|source| RuntimeError::EnemyConfig {
                enemy: spec.name.clone(),
                source,
            })?;
            enemy
                .controller_mut()
                .set_catch_listener(catches.recorder(enemies.len()));
            enemies.push(enemy);
        }

        for name in self.enemy_configs.keys() {
            tracing::warn!("Stage: tuning override for unknown enemy '{}'", name);
        }

        let world = World {
            hiding_spots: level.hiding_spots.iter().map(|&z| Zone::from(z)).collect(),
            broken_tiles: level
                .broken_tiles
                .iter()
                .map(|&z| BrokenTile::new(Zone::from(z)))
                .collect(),
            pickups: level.pickups.into_iter().map(Pickup::from).collect(),
            exit: level.exit.map(Exit::from),
        };

        tracing::info!(
            "Stage '{}' ready: {} enemies, {} hiding spots, {} broken tiles, {} pickups",
            level.name,
            enemies.len(),
            world.hiding_spots.len(),
            world.broken_tiles.len(),
            world.pickups.len()
        );

        Ok(Stage {
            level_name: level.name,
            session: Session::new(),
            player: Player::new(level.player_spawn, self.player_tuning),
            beacon,
            enemies,
            world,
            catalog: ItemCatalog::new(self.items),
            recipes: RecipeBook::new(self.recipes),
            sounds: SoundBus::new(),
            catches,
            frame: 0,
            elapsed: 0.0,
        })
    }
}
