use serde::Deserialize;
use std::path::Path;

use crate::error::{PairError, PairResult};
use crate::ring::BoundaryPolicy;

pub const DEFAULT_RING_SIZE: u32 = 10;
pub const DEFAULT_STEP_SIZE: u64 = 4;
pub const DEFAULT_RADIUS: u32 = 2;
pub const DEFAULT_WRAPAROUND: bool = true;

pub const ENV_CONFIG_PATH: &str = "RIG_PAIRS_CONFIG";
pub const ENV_RING_SIZE: &str = "RIG_PAIRS_RING_SIZE";
pub const ENV_STEP_SIZE: &str = "RIG_PAIRS_STEP_SIZE";
pub const ENV_RADIUS: &str = "RIG_PAIRS_RADIUS";
pub const ENV_WRAPAROUND: &str = "RIG_PAIRS_WRAPAROUND";

#[derive(Debug, Deserialize, Default)]
#[serde(deny_unknown_fields)]
struct PairingConfigFile {
    ring_size: Option<u32>,
    step_size: Option<u64>,
    radius: Option<u32>,
    wraparound: Option<bool>,
}

/// Parameters of one pair generation run.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PairingConfig {
    /// Number of camera positions on the rig ring.
    pub ring_size: u32,
    /// Consecutive frame indices, anchor included, considered for pairing.
    pub step_size: u64,
    /// Half-width of the rotational neighborhood.
    pub radius: u32,
    pub wraparound: bool,
}

/// Per-run overrides that take precedence over file and env settings.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct PairingOverrides {
    pub ring_size: Option<u32>,
    pub step_size: Option<u64>,
    pub radius: Option<u32>,
    pub wraparound: Option<bool>,
}

impl Default for PairingConfig {
    fn default() -> Self {
        Self {
            ring_size: DEFAULT_RING_SIZE,
            step_size: DEFAULT_STEP_SIZE,
            radius: DEFAULT_RADIUS,
            wraparound: DEFAULT_WRAPAROUND,
        }
    }
}

impl PairingConfig {
    /// Loads defaults, then the JSON config file (explicit path or
    /// `RIG_PAIRS_CONFIG`), then environment overrides.
    pub fn load(path: Option<&Path>) -> PairResult<Self> {
        let env_path = std::env::var(ENV_CONFIG_PATH)
            .ok()
            .filter(|p| !p.trim().is_empty());
        let file_cfg = match path.or(env_path.as_deref().map(Path::new)) {
            Some(path) => read_config_file(path)?,
            None => PairingConfigFile::default(),
        };
        let mut cfg = Self::from_file(file_cfg);
        cfg.apply_env()?;
        cfg.validate()?;
        Ok(cfg)
    }

    /// Applies command-line style overrides and re-validates.
    pub fn with_overrides(mut self, overrides: PairingOverrides) -> PairResult<Self> {
        if let Some(ring_size) = overrides.ring_size {
            self.ring_size = ring_size;
        }
        if let Some(step_size) = overrides.step_size {
            self.step_size = step_size;
        }
        if let Some(radius) = overrides.radius {
            self.radius = radius;
        }
        if let Some(wraparound) = overrides.wraparound {
            self.wraparound = wraparound;
        }
        self.validate()?;
        Ok(self)
    }

    fn from_file(file: PairingConfigFile) -> Self {
        Self {
            ring_size: file.ring_size.unwrap_or(DEFAULT_RING_SIZE),
            step_size: file.step_size.unwrap_or(DEFAULT_STEP_SIZE),
            radius: file.radius.unwrap_or(DEFAULT_RADIUS),
            wraparound: file.wraparound.unwrap_or(DEFAULT_WRAPAROUND),
        }
    }

    fn apply_env(&mut self) -> PairResult<()> {
        if let Some(ring_size) = env_number::<u32>(ENV_RING_SIZE)? {
            self.ring_size = ring_size;
        }
        if let Some(step_size) = env_number::<u64>(ENV_STEP_SIZE)? {
            self.step_size = step_size;
        }
        if let Some(radius) = env_number::<u32>(ENV_RADIUS)? {
            self.radius = radius;
        }
        if let Ok(raw) = std::env::var(ENV_WRAPAROUND) {
            match raw.trim().to_ascii_lowercase().as_str() {
                "" => {}
                "1" | "true" | "yes" | "on" => self.wraparound = true,
                "0" | "false" | "no" | "off" => self.wraparound = false,
                other => {
                    return Err(PairError::InvalidConfig(format!(
                        "{} must be a boolean, got '{}'",
                        ENV_WRAPAROUND, other
                    )))
                }
            }
        }
        Ok(())
    }

    /// A zero-sized ring is rejected; radius and step size of zero are valid
    /// and only shrink the candidate set.
    pub fn validate(&self) -> PairResult<()> {
        if self.ring_size == 0 {
            return Err(PairError::InvalidConfig(
                "ring_size must be greater than zero".to_string(),
            ));
        }
        Ok(())
    }

    pub fn boundary_policy(&self) -> BoundaryPolicy {
        BoundaryPolicy::from_wraparound(self.wraparound)
    }
}

fn read_config_file(path: &Path) -> PairResult<PairingConfigFile> {
    let raw = std::fs::read_to_string(path).map_err(|e| PairError::io(path, e))?;
    let cfg = serde_json::from_str(&raw)?;
    Ok(cfg)
}

fn env_number<T: std::str::FromStr>(key: &str) -> PairResult<Option<T>> {
    let Ok(raw) = std::env::var(key) else {
        return Ok(None);
    };
    if raw.trim().is_empty() {
        return Ok(None);
    }
    raw.trim()
        .parse()
        .map(Some)
        .map_err(|_| PairError::InvalidConfig(format!("{} must be a non-negative integer", key)))
}
