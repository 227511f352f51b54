//! Runtime configuration for the terminal driver.
use crate::battle::state::TurnRng;
use crate::errors::RosterResult;
use crate::roster::Roster;
use std::env;
use std::path::PathBuf;
use std::time::Duration;
use tracing_subscriber::EnvFilter;

const DEFAULT_ACTION_DELAY_MS: u64 = 600;

/// Duel configuration.
#[derive(Clone, Debug)]
pub struct DuelConfig {
    /// Fixed seed for a reproducible battle; a fresh one is drawn when absent.
    pub seed: Option<u64>,
    /// Pause between the two actions of a turn when narrating.
    pub action_delay: Duration,
    /// Alternate roster file; the built-in roster is used when absent.
    pub roster_path: Option<PathBuf>,
}

impl Default for DuelConfig {
    fn default() -> Self {
        Self {
            seed: None,
            action_delay: Duration::from_millis(DEFAULT_ACTION_DELAY_MS),
            roster_path: None,
        }
    }
}

impl DuelConfig {
    /// Construct configuration from environment variables.
    ///
    /// Environment variables:
    /// - `DUEL_SEED` - RNG seed (default: random)
    /// - `DUEL_ACTION_DELAY_MS` - Delay between the two actions of a turn (default: 600)
    /// - `DUEL_ROSTER` - Path to a RON roster file (default: built-in)
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Some(seed) = read_env::<u64>("DUEL_SEED") {
            config.seed = Some(seed);
        }
        if let Some(delay) = read_env::<u64>("DUEL_ACTION_DELAY_MS") {
            config.action_delay = Duration::from_millis(delay);
        }
        if let Some(path) = read_env::<PathBuf>("DUEL_ROSTER") {
            config.roster_path = Some(path);
        }

        config
    }

    pub fn rng(&self) -> TurnRng {
        match self.seed {
            Some(seed) => TurnRng::new_seeded(seed),
            None => TurnRng::new_random(),
        }
    }

    pub fn roster(&self) -> RosterResult<Roster> {
        match &self.roster_path {
            Some(path) => Roster::load(path),
            None => Roster::builtin(),
        }
    }
}

/// Log filter built from `RUST_LOG`, falling back to `info` when it is unset or invalid.
pub fn log_filter() -> EnvFilter {
    log_filter_from(env::var("RUST_LOG").ok().as_deref())
}

fn log_filter_from(directives: Option<&str>) -> EnvFilter {
    directives
        .filter(|d| !d.trim().is_empty())
        .and_then(|d| EnvFilter::try_new(d).ok())
        .unwrap_or_else(|| EnvFilter::new("info"))
}

fn read_env<T>(key: &str) -> Option<T>
where
    T: std::str::FromStr,
{
    env::var(key).ok()?.parse().ok()
}
