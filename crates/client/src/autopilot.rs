//! A fixed policy that plays the game unattended.
//!
//! Each step picks exactly one action:
//! 1. break through when the next realm is within reach,
//! 2. otherwise fight the first boss in range that is weaker than the player,
//! 3. otherwise cultivate and answer every drawn event with its first open choice.

use ascension_core::{PlayerState, base_power};
use ascension_runtime::{Result, Runtime};

use crate::config::CliConfig;

/// What one autopilot step did.
#[derive(Clone, Debug, PartialEq)]
pub enum Step {
    Breakthrough {
        from_realm: usize,
        success: bool,
    },
    Battle {
        boss_id: String,
        victory: bool,
    },
    Cultivation {
        minutes: u32,
        events_drawn: usize,
        events_resolved: usize,
    },
}

pub struct Autopilot<'a> {
    runtime: &'a Runtime,
    config: CliConfig,
}

impl<'a> Autopilot<'a> {
    pub fn new(runtime: &'a Runtime, config: CliConfig) -> Self {
        Self { runtime, config }
    }

    /// Runs `config.steps` steps starting from `player` and returns the final state.
    pub fn run(&self, player: PlayerState) -> Result<PlayerState> {
        let mut player = player;
        for index in 0..self.config.steps {
            let (step, next) = self.step(&player)?;
            tracing::info!(step = index + 1, ?step, realm = next.realm, "autopilot step");
            player = next;
        }
        Ok(player)
    }

    /// Chooses and performs a single action.
    pub fn step(&self, player: &PlayerState) -> Result<(Step, PlayerState)> {
        if self.runtime.check_breakthrough(player, 0.0)?.is_eligible() {
            let (outcome, next) = self.runtime.breakthrough(player, 0.0)?.into_parts();
            let step = Step::Breakthrough {
                from_realm: outcome.from_realm,
                success: outcome.success,
            };
            return Ok((step, next));
        }

        let power = base_power(player);
        let target = self
            .runtime
            .available_bosses(player)
            .into_iter()
            .find(|boss| (boss.stats.power as f64) < power);
        if let Some(boss) = target {
            let (outcome, next) = self.runtime.battle(player, &boss.id)?.into_parts();
            let step = Step::Battle {
                boss_id: outcome.boss_id,
                victory: outcome.victory,
            };
            return Ok((step, next));
        }

        self.cultivate(player)
    }

    fn cultivate(&self, player: &PlayerState) -> Result<(Step, PlayerState)> {
        let minutes = self.config.session_minutes;
        let (report, mut next) = self.runtime.cultivate(player, minutes)?.into_parts();

        let mut resolved = 0;
        for event_id in &report.events {
            let prepared = self.runtime.prepare_event(&next, event_id)?;
            let Some(choice) = prepared.choices.first() else {
                tracing::debug!(event = %event_id, "no open choice, skipping");
                continue;
            };
            let (resolution, after) = self
                .runtime
                .resolve_event(&next, event_id, &choice.id)?
                .into_parts();
            if resolution.is_resolved() {
                resolved += 1;
            }
            next = after;
        }

        let step = Step::Cultivation {
            minutes,
            events_drawn: report.events.len(),
            events_resolved: resolved,
        };
        Ok((step, next))
    }
}
