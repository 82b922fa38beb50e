use std::path::PathBuf;
use std::time::Duration;

use rand::Rng;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    /// Base delay before a response is printed, pretending to type.
    #[serde(default = "default_typing_delay_ms")]
    pub typing_delay_ms: u64,

    /// Random extra delay added on top of the base, 0..=jitter.
    #[serde(default = "default_typing_jitter_ms")]
    pub typing_jitter_ms: u64,

    /// Disables the typing delay and session persistence. Useful for
    /// development and testing.
    #[serde(default)]
    pub test_mode: bool,

    /// Alternative knowledge file. Default is knowledge.yaml in the data dir.
    #[serde(default)]
    pub knowledge_file: Option<PathBuf>,
}

fn default_typing_delay_ms() -> u64 {
    1000
}

fn default_typing_jitter_ms() -> u64 {
    1000
}

impl Default for Config {
    fn default() -> Self {
        Self {
            typing_delay_ms: default_typing_delay_ms(),
            typing_jitter_ms: default_typing_jitter_ms(),
            test_mode: false,
            knowledge_file: None,
        }
    }
}

impl Config {
    /// Presentational delay for one response. Purely cosmetic; the caller
    /// sleeps for this around the respond call, never inside it.
    pub fn response_delay(&self, rng: &mut impl Rng) -> Duration {
        if self.test_mode {
            return Duration::ZERO;
        }
        Duration::from_millis(self.typing_delay_ms + rng.gen_range(0..=self.typing_jitter_ms))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn delay_stays_within_configured_bounds() {
        let config = Config::default();
        let mut rng = StdRng::seed_from_u64(1);
        for _ in 0..100 {
            let d = config.response_delay(&mut rng).as_millis() as u64;
            assert!(d >= config.typing_delay_ms);
            assert!(d <= config.typing_delay_ms + config.typing_jitter_ms);
        }
    }

    #[test]
    fn test_mode_removes_the_delay() {
        let config = Config {
            test_mode: true,
            ..Config::default()
        };
        let mut rng = StdRng::seed_from_u64(1);
        assert_eq!(config.response_delay(&mut rng), Duration::ZERO);
    }
}
