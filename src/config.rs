//! Application configuration
//!
//! Configuration is loaded from multiple sources with the following priority (lowest to highest):
//! 1. Built-in defaults
//! 2. `config/default.toml` (version controlled)
//! 3. `config/user.toml` (gitignored, user overrides)
//! 4. Environment variables (`GEO_SECTION__KEY`)

use figment::{Figment, providers::{Format, Toml, Env, Serialized}};
use serde::{Serialize, Deserialize};
use std::path::Path;

/// Largest number of significant digits an `f64` can meaningfully show
pub const MAX_SIGNIFICANT_DIGITS: usize = 17;

/// Main application configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// Demo shape parameters
    #[serde(default)]
    pub demo: DemoConfig,
    /// Number formatting
    #[serde(default)]
    pub display: DisplayConfig,
    /// Debug configuration
    #[serde(default)]
    pub debug: DebugConfig,
}

impl AppConfig {
    /// Load configuration from default locations
    ///
    /// Priority (lowest to highest):
    /// 1. Built-in defaults
    /// 2. `config/default.toml`
    /// 3. `config/user.toml`
    /// 4. Environment variables (`GEO_*`)
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from("config")
    }

    /// Load configuration from a specific config directory
    pub fn load_from<P: AsRef<Path>>(config_dir: P) -> Result<Self, ConfigError> {
        let config_dir = config_dir.as_ref();
        let default_path = config_dir.join("default.toml");
        let user_path = config_dir.join("user.toml");

        let mut figment = Figment::from(Serialized::defaults(AppConfig::default()));

        if default_path.exists() {
            figment = figment.merge(Toml::file(&default_path));
        }

        // Optional user overrides
        if user_path.exists() {
            figment = figment.merge(Toml::file(&user_path));
        }

        // Environment variables override everything
        // GEO_DEMO__CIRCLE_RADIUS=2 -> demo.circle_radius = 2
        figment = figment.merge(Env::prefixed("GEO_").split("__"));

        let config: AppConfig = figment.extract()?;
        config.validate()?;
        Ok(config)
    }

    /// Check settings that deserialize fine but cannot be used
    pub fn validate(&self) -> Result<(), ConfigError> {
        let digits = self.display.significant_digits;
        if digits == 0 || digits > MAX_SIGNIFICANT_DIGITS {
            return Err(ConfigError::new(format!(
                "display.significant_digits must be between 1 and {}, got {}",
                MAX_SIGNIFICANT_DIGITS, digits
            )));
        }
        Ok(())
    }
}

/// Parameters of the shapes built by the demo
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DemoConfig {
    /// Circle radius
    pub circle_radius: f64,
    /// Square side
    pub square_side: f64,
    /// Sphere radius
    pub sphere_radius: f64,
    /// Cube edge
    pub cube_edge: f64,
    /// Reject negative and non-finite dimensions instead of computing with them
    pub strict_dimensions: bool,
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            circle_radius: 3.5,
            square_side: 3.0,
            sphere_radius: 3.5,
            cube_edge: 3.0,
            strict_dimensions: true,
        }
    }
}

/// Number formatting configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DisplayConfig {
    /// Significant digits of printed values (1-17)
    pub significant_digits: usize,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self { significant_digits: 6 }
    }
}

/// Debug configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DebugConfig {
    /// Log level (error, warn, info, debug, trace)
    pub log_level: String,
}

impl Default for DebugConfig {
    fn default() -> Self {
        Self {
            log_level: "warn".to_string(),
        }
    }
}

/// Configuration error
#[derive(Debug)]
pub struct ConfigError {
    message: String,
}

impl ConfigError {
    fn new(message: impl Into<String>) -> Self {
        Self { message: message.into() }
    }
}

impl From<figment::Error> for ConfigError {
    fn from(e: figment::Error) -> Self {
        ConfigError::new(e.to_string())
    }
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Configuration error: {}", self.message)
    }
}

impl std::error::Error for ConfigError {}
