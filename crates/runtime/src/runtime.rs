//! High-level runtime orchestrator.
//!
//! The runtime owns the shared catalog and the session seed, and exposes one
//! synchronous method per player action. Each call derives its own random
//! stream from `(game_seed, nonce, action)`, so a session replays exactly from
//! its seed.

use std::path::PathBuf;
use std::sync::atomic::{AtomicU64, Ordering};

use ascension_core::{
    BattleOutcome, BossDefinition, BossOracle, BreakthroughCheck, BreakthroughOutcome,
    EventOracle, EventResolution, GameConfig, OracleError, PcgRng, PlayerState, PreparedEvent,
    RealmOracle, SessionDuration, available_bosses, check_breakthrough, compute_seed,
    prepare_event, resolve_battle, resolve_breakthrough, resolve_cultivation, resolve_event,
    select_event,
};

use crate::api::{ActionReport, CultivationReport, Result, RuntimeError};
use crate::oracle::OracleManager;

/// Default location of the content data, relative to the workspace root.
pub const DEFAULT_CONTENT_DIR: &str = "crates/game/content/data";

/// Runtime configuration read at startup.
#[derive(Debug, Clone)]
pub struct RuntimeConfig {
    /// Directory holding `config.toml`, `bosses.ron`, `events.ron` and optionally `realms.ron`.
    pub content_dir: PathBuf,
    /// Session seed; a random one is drawn when absent.
    pub game_seed: Option<u64>,
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self {
            content_dir: PathBuf::from(DEFAULT_CONTENT_DIR),
            game_seed: None,
        }
    }
}

impl RuntimeConfig {
    /// Construct configuration from process environment variables.
    ///
    /// Environment variables:
    /// - `ASCENSION_CONTENT_DIR` - Content data directory (default: `crates/game/content/data`)
    /// - `ASCENSION_GAME_SEED` - Session seed (default: random)
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Ok(dir) = std::env::var("ASCENSION_CONTENT_DIR") {
            config.content_dir = PathBuf::from(dir);
        }
        config.game_seed = read_env::<u64>("ASCENSION_GAME_SEED");

        config
    }
}

/// Independent random streams within one action.
#[derive(Clone, Copy, Debug)]
#[repr(u32)]
enum Stream {
    Cultivation = 1,
    EventDraw = 2,
    Breakthrough = 3,
    EventChoice = 4,
    Battle = 5,
}

/// Stateless façade over the resolvers.
///
/// `Runtime` is `Send + Sync`; the only mutable piece is the action nonce.
pub struct Runtime {
    oracles: OracleManager,
    game_seed: u64,
    nonce: AtomicU64,
}

impl Runtime {
    /// Create a new runtime builder
    pub fn builder() -> RuntimeBuilder {
        RuntimeBuilder::new()
    }

    pub fn game_seed(&self) -> u64 {
        self.game_seed
    }

    /// Number of actions resolved so far.
    pub fn actions_taken(&self) -> u64 {
        self.nonce.load(Ordering::Relaxed)
    }

    pub fn oracles(&self) -> &OracleManager {
        &self.oracles
    }

    pub fn config(&self) -> &GameConfig {
        &self.oracles.config
    }

    /// Reserves a nonce for one action.
    fn next_nonce(&self) -> u64 {
        self.nonce.fetch_add(1, Ordering::Relaxed)
    }

    fn rng(&self, nonce: u64, stream: Stream) -> PcgRng {
        PcgRng::seeded(compute_seed(self.game_seed, nonce, stream as u32))
    }

    /// Rejects a player whose realm is not in the catalog.
    fn ensure_known_realm(&self, player: &PlayerState) -> Result<()> {
        let len = self.oracles.catalog.realm_count();
        if player.realm >= len {
            tracing::warn!(realm = player.realm, len, "player realm outside catalog");
            return Err(RuntimeError::RealmOutOfCatalog {
                index: player.realm,
                len,
            });
        }
        Ok(())
    }

    /// Cultivates for `minutes` and draws a concrete event for every opportunity.
    ///
    /// # Errors
    ///
    /// Rejects durations outside `[1, 1440]` minutes.
    pub fn cultivate(
        &self,
        player: &PlayerState,
        minutes: u32,
    ) -> Result<ActionReport<CultivationReport>> {
        self.ensure_known_realm(player)?;
        let duration = SessionDuration::new(minutes).inspect_err(|error| {
            tracing::warn!(minutes, %error, "cultivation rejected");
        })?;

        let nonce = self.next_nonce();
        let catalog = self.oracles.catalog.as_ref();
        let session = resolve_cultivation(
            player,
            duration,
            &self.oracles.config,
            &mut self.rng(nonce, Stream::Cultivation),
        );
        let next = session.apply_to(player);

        let mut draws = self.rng(nonce, Stream::EventDraw);
        let events: Vec<String> = (0..session.event_opportunities)
            .filter_map(|_| select_event(&next, catalog, &mut draws))
            .map(|event| event.id.clone())
            .collect();

        tracing::info!(
            realm = player.realm,
            minutes,
            progress = session.progress_gained,
            currency = session.currency_gained,
            opportunities = session.event_opportunities,
            "cultivation resolved"
        );
        if !events.is_empty() {
            tracing::debug!(?events, "events drawn during cultivation");
        }

        Ok(ActionReport::new(CultivationReport { session, events }, next))
    }

    /// Previews the next breakthrough without drawing randomness.
    pub fn check_breakthrough(
        &self,
        player: &PlayerState,
        item_bonus: f64,
    ) -> Result<BreakthroughCheck> {
        self.ensure_known_realm(player)?;
        Ok(check_breakthrough(
            player,
            self.oracles.catalog.as_ref(),
            item_bonus,
        )?)
    }

    /// Attempts a breakthrough and applies the result, bonuses included.
    pub fn breakthrough(
        &self,
        player: &PlayerState,
        item_bonus: f64,
    ) -> Result<ActionReport<BreakthroughOutcome>> {
        self.ensure_known_realm(player)?;

        let nonce = self.next_nonce();
        let outcome = resolve_breakthrough(
            player,
            self.oracles.catalog.as_ref(),
            item_bonus,
            &mut self.rng(nonce, Stream::Breakthrough),
        )?;
        let next = outcome.apply_to(player);

        tracing::debug!(
            inner_demon = %outcome.inner_demon,
            tribulation = %outcome.tribulation,
            chances = ?outcome.chances,
            "breakthrough trials"
        );
        tracing::info!(
            from = outcome.from_realm,
            to = next.realm,
            success = outcome.success,
            verdict = ?outcome.verdict,
            "breakthrough resolved"
        );

        Ok(ActionReport::new(outcome, next))
    }

    /// Draws an event for the player's realm and prepares it for display.
    ///
    /// Returns `None` when no event is available at the player's realm.
    pub fn draw_event(&self, player: &PlayerState) -> Result<Option<PreparedEvent>> {
        self.ensure_known_realm(player)?;

        let nonce = self.next_nonce();
        let catalog = self.oracles.catalog.as_ref();
        let prepared = select_event(player, catalog, &mut self.rng(nonce, Stream::EventDraw))
            .map(|event| prepare_event(player, event));

        match &prepared {
            Some(event) => tracing::debug!(
                event = %event.id,
                open = event.choices.len(),
                locked = event.locked.len(),
                "event drawn"
            ),
            None => tracing::debug!(realm = player.realm, "no event available"),
        }

        Ok(prepared)
    }

    /// Prepares a specific event by id.
    pub fn prepare_event(&self, player: &PlayerState, event_id: &str) -> Result<PreparedEvent> {
        self.ensure_known_realm(player)?;
        let event = self.oracles.catalog.event(event_id).ok_or_else(|| {
            tracing::warn!(event = event_id, "unknown event");
            OracleError::EventNotFound(event_id.to_owned())
        })?;
        Ok(prepare_event(player, event))
    }

    /// Resolves a choice of a catalog event and applies its effects.
    pub fn resolve_event(
        &self,
        player: &PlayerState,
        event_id: &str,
        choice_id: &str,
    ) -> Result<ActionReport<EventResolution>> {
        self.ensure_known_realm(player)?;
        let event = self.oracles.catalog.event(event_id).ok_or_else(|| {
            tracing::warn!(event = event_id, "unknown event");
            OracleError::EventNotFound(event_id.to_owned())
        })?;

        let nonce = self.next_nonce();
        let resolution = resolve_event(
            player,
            event,
            choice_id,
            &mut self.rng(nonce, Stream::EventChoice),
        )
        .inspect_err(|error| {
            tracing::warn!(event = event_id, choice = choice_id, %error, "event rejected");
        })?;
        let next = resolution.apply_to(player);

        match &resolution {
            EventResolution::Resolved(outcome) => tracing::info!(
                event = event_id,
                choice = choice_id,
                outcome = outcome.outcome_index,
                draw = outcome.draw,
                reward = ?outcome.effects.special_reward,
                "event resolved"
            ),
            EventResolution::Ineligible { reason, .. } => tracing::info!(
                event = event_id,
                choice = choice_id,
                %reason,
                "event choice unavailable"
            ),
        }

        Ok(ActionReport::new(resolution, next))
    }

    /// Bosses the player may challenge at their current realm.
    pub fn available_bosses(&self, player: &PlayerState) -> Vec<&BossDefinition> {
        available_bosses(
            player,
            self.oracles.catalog.as_ref(),
            &self.oracles.config,
        )
    }

    /// Fights a boss by id and applies the result.
    pub fn battle(
        &self,
        player: &PlayerState,
        boss_id: &str,
    ) -> Result<ActionReport<BattleOutcome>> {
        self.ensure_known_realm(player)?;
        let boss = self.oracles.catalog.boss(boss_id).ok_or_else(|| {
            tracing::warn!(boss = boss_id, "unknown boss");
            OracleError::BossNotFound(boss_id.to_owned())
        })?;

        let nonce = self.next_nonce();
        let outcome = resolve_battle(player, boss, &mut self.rng(nonce, Stream::Battle));
        let next = outcome.apply_to(player);

        tracing::debug!(
            player_power = outcome.player_power,
            boss_power = outcome.boss_power,
            chance = outcome.victory_chance,
            "battle powers"
        );
        tracing::info!(
            boss = boss_id,
            victory = outcome.victory,
            items = ?outcome.special_items,
            "battle resolved"
        );

        Ok(ActionReport::new(outcome, next))
    }
}

/// Builder for [`Runtime`] with flexible configuration.
pub struct RuntimeBuilder {
    config: RuntimeConfig,
    oracles: Option<OracleManager>,
}

impl RuntimeBuilder {
    fn new() -> Self {
        Self {
            config: RuntimeConfig::default(),
            oracles: None,
        }
    }

    /// Override runtime configuration
    pub fn config(mut self, config: RuntimeConfig) -> Self {
        self.config = config;
        self
    }

    /// Use an already-built catalog instead of loading `content_dir`.
    pub fn oracles(mut self, oracles: OracleManager) -> Self {
        self.oracles = Some(oracles);
        self
    }

    /// Fix the session seed.
    pub fn game_seed(mut self, seed: u64) -> Self {
        self.config.game_seed = Some(seed);
        self
    }

    /// Build the runtime, loading content from disk if no oracles were supplied.
    pub fn build(self) -> Result<Runtime> {
        let oracles = match self.oracles {
            Some(oracles) => oracles,
            None => OracleManager::load(&self.config.content_dir)?,
        };
        let game_seed = self.config.game_seed.unwrap_or_else(rand::random);

        tracing::info!(game_seed, "runtime ready");

        Ok(Runtime {
            oracles,
            game_seed,
            nonce: AtomicU64::new(0),
        })
    }
}

fn read_env<T>(key: &str) -> Option<T>
where
    T: std::str::FromStr,
{
    std::env::var(key).ok()?.parse().ok()
}
