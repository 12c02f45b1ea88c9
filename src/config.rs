// src/config.rs

//! Defines the configuration structures for the `odxxt` portfolio terminal.
//!
//! Every value here is compiled in. The structs still derive serde traits so
//! that a configuration can be exported or built from a partial document in
//! tests; missing fields always fall back to the defaults below.

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

use crate::odxxt::ThemeId;

/// Process-wide configuration, built from defaults on first access.
pub static CONFIG: Lazy<Config> = Lazy::new(Config::default);

// --- Top-Level Configuration Structure ---

/// Represents the complete configuration for the terminal.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    /// Prompt, identity and theme settings.
    pub appearance: AppearanceConfig,
    /// History, idle and typing cadence settings.
    pub behavior: BehaviorConfig,
    /// Snake board and timing.
    pub snake: SnakeConfig,
    /// Ascii art panel settings.
    pub ascii: AsciiConfig,
    /// Simulated network utilities.
    pub network: NetworkConfig,
    /// Host loop settings.
    pub performance: PerformanceConfig,
}

// --- Appearance Configuration ---

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AppearanceConfig {
    /// User shown in the prompt.
    pub user: String,
    /// Host shown in the prompt.
    pub host: String,
    /// Theme applied on startup and after a reset.
    pub default_theme: ThemeId,
}

impl AppearanceConfig {
    /// Full prompt prefix, e.g. `abdulaziz@odxxt ~ % `.
    pub fn prompt(&self) -> String {
        format!("{}@{} ~ % ", self.user, self.host)
    }
}

impl Default for AppearanceConfig {
    fn default() -> Self {
        AppearanceConfig {
            user: "abdulaziz".to_string(),
            host: "odxxt".to_string(),
            default_theme: ThemeId::Default,
        }
    }
}

// --- Behavior Configuration ---

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct BehaviorConfig {
    /// Maximum number of remembered commands.
    pub history_limit: usize,
    /// Quiet period before the idle affordance appears.
    pub idle_timeout_ms: u64,
    /// Default cadence of scripted typing.
    pub type_ms_per_char: u64,
    /// Delay between `Start` and the startup sequence.
    pub startup_delay_ms: u64,
    /// Cadence used when the startup sequence types `whoami`.
    pub startup_type_ms_per_char: u64,
    /// Delay between a reset and the re-run of the startup sequence.
    pub reset_delay_ms: u64,
    /// Cadence used when replaying a command from the odxxt logs.
    pub replay_type_ms_per_char: u64,
    /// Number of ticks a scroll-indicator morph takes.
    pub morph_ticks: u32,
    /// Period of one scroll-indicator morph tick.
    pub morph_tick_ms: u64,
}

impl Default for BehaviorConfig {
    fn default() -> Self {
        BehaviorConfig {
            history_limit: 50,
            idle_timeout_ms: 10_000,
            type_ms_per_char: 30,
            startup_delay_ms: 800,
            startup_type_ms_per_char: 200,
            reset_delay_ms: 300,
            replay_type_ms_per_char: 50,
            morph_ticks: 6,
            morph_tick_ms: 50,
        }
    }
}

// --- Snake Configuration ---

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SnakeConfig {
    pub board_width: i32,
    pub board_height: i32,
    /// Pixel size of one cell. Only meaningful to graphical hosts.
    pub block_size_px: u16,
    pub tick_ms: u64,
    pub score_per_food: u32,
    /// How long the game-over overlay stays up before control returns.
    pub game_over_hold_ms: u64,
}

impl Default for SnakeConfig {
    fn default() -> Self {
        SnakeConfig {
            board_width: 30,
            board_height: 20,
            block_size_px: 16,
            tick_ms: 160,
            score_per_food: 10,
            game_over_hold_ms: 3_000,
        }
    }
}

// --- Ascii Configuration ---

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AsciiConfig {
    pub max_text_len: usize,
    pub default_font: String,
}

impl Default for AsciiConfig {
    fn default() -> Self {
        AsciiConfig {
            max_text_len: 15,
            default_font: "standard".to_string(),
        }
    }
}

// --- Network Configuration ---

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct NetworkConfig {
    pub ping_count: u32,
    /// Cadence of simulated replies and hops.
    pub reply_interval_ms: u64,
    pub min_latency_ms: u32,
    pub max_latency_ms: u32,
    pub traceroute_hops: Vec<String>,
}

impl Default for NetworkConfig {
    fn default() -> Self {
        NetworkConfig {
            ping_count: 4,
            reply_interval_ms: 1_000,
            min_latency_ms: 1,
            max_latency_ms: 50,
            traceroute_hops: vec![
                "192.168.1.1".to_string(),
                "10.24.32.1".to_string(),
                "198.51.100.5".to_string(),
                "8.8.8.8".to_string(),
            ],
        }
    }
}

// --- Performance Configuration ---

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PerformanceConfig {
    /// Minimum time between two presented frames.
    pub min_frame_interval_ms: u64,
    /// Upper bound on how long the host waits for input when no timer is due.
    pub max_poll_ms: u64,
}

impl Default for PerformanceConfig {
    fn default() -> Self {
        PerformanceConfig {
            min_frame_interval_ms: 16,
            max_poll_ms: 250,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_compiled_in_constants() {
        let config = Config::default();
        assert_eq!(config.behavior.history_limit, 50);
        assert_eq!(config.behavior.idle_timeout_ms, 10_000);
        assert_eq!((config.snake.board_width, config.snake.board_height), (30, 20));
        assert_eq!(config.snake.tick_ms, 160);
        assert_eq!(config.snake.score_per_food, 10);
        assert_eq!(config.ascii.max_text_len, 15);
        assert_eq!(config.appearance.prompt(), "abdulaziz@odxxt ~ % ");
    }

    #[test]
    fn partial_document_keeps_defaults_for_missing_fields() {
        let config: Config =
            serde_json::from_str(r#"{ "snake": { "tick_ms": 80 }, "behavior": { "history_limit": 3 } }"#)
                .unwrap();
        assert_eq!(config.snake.tick_ms, 80);
        assert_eq!(config.snake.board_width, 30);
        assert_eq!(config.behavior.history_limit, 3);
        assert_eq!(config.behavior.idle_timeout_ms, 10_000);
        assert_eq!(config.network.traceroute_hops.len(), 4);
    }
}
