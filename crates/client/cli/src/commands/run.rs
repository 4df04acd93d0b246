//! Simulate a level headlessly.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Args;
use hollows_runtime::{FrameInput, InputScript, RunSummary, Stage};

use super::ContentArgs;

/// Simulate a level frame by frame
#[derive(Args, Debug)]
pub struct Run {
    #[command(flatten)]
    pub content: ContentArgs,

    /// RON input script; without one the player stands still
    #[arg(long, value_name = "FILE")]
    pub script: Option<PathBuf>,

    /// Maximum number of frames to simulate
    #[arg(long, default_value_t = 600)]
    pub frames: u64,

    /// Seconds per frame
    #[arg(long, default_value_t = 0.1)]
    pub dt: f32,
}

impl Run {
    pub fn execute(self) -> Result<()> {
        if !(self.dt.is_finite() && self.dt > 0.0) {
            anyhow::bail!("--dt must be a positive number of seconds, got {}", self.dt);
        }

        let mut stage = self.content.build_stage()?;
        tracing::info!(
            "Running level '{}' with {} enemies (dt={}s, up to {} frames)",
            stage.level_name(),
            stage.enemies().len(),
            self.dt,
            self.frames
        );

        let summary = match &self.script {
            Some(path) => {
                let script = load_script(path)?;
                tracing::info!(
                    "Script {}: {} segments, {:.1}s",
                    path.display(),
                    script.segments.len(),
                    script.total_duration()
                );
                stage.run(self.dt, self.frames, script.frames(self.dt))
            }
            None => stage.run(
                self.dt,
                self.frames,
                std::iter::repeat_with(FrameInput::idle),
            ),
        };

        print_summary(&stage, &summary);
        Ok(())
    }
}

pub fn load_script(path: &Path) -> Result<InputScript> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read script: {}", path.display()))?;
    ron::from_str(&content).with_context(|| format!("Failed to parse script: {}", path.display()))
}

fn print_summary(stage: &Stage, summary: &RunSummary) {
    println!("Level:       {}", stage.level_name());
    println!("Outcome:     {}", summary.outcome);
    println!(
        "Frames:      {} ({:.2}s simulated)",
        summary.frames, summary.elapsed
    );
    println!("Transitions: {}", summary.transitions);
    println!("Sounds:      {}", summary.sounds);
    if summary.rejected_actions > 0 {
        println!("Rejected:    {}", summary.rejected_actions);
    }

    let player = stage.player();
    println!(
        "Player:      ({:.2}, {:.2}){} energy {:.1}, flashlight {:.0}%",
        player.position().x,
        player.position().y,
        if player.is_hidden() { " hidden," } else { "," },
        player.energy(),
        player.flashlight().level() * 100.0
    );

    let inventory = stage.session().inventory();
    if !inventory.is_empty() {
        let items: Vec<String> = inventory
            .iter()
            .map(|stack| format!("{} x{}", stack.name, stack.quantity))
            .collect();
        println!("Inventory:   {}", items.join(", "));
    }

    println!("Enemies:");
    for enemy in stage.enemies() {
        let position = enemy
            .position()
            .map_or_else(|| "gone".to_string(), |p| format!("({:.2}, {:.2})", p.x, p.y));
        println!("  {:<10} {:<12} {}", enemy.name(), enemy.state().to_string(), position);
    }
}
