//! Layered TOML configuration.
//!
//! Configuration is assembled from up to three sources, later ones winning:
//! 1. Bundled defaults (`quire.toml` compiled into the library)
//! 2. `~/.config/quire/quire.toml`
//! 3. `./quire.toml`
//!
//! Every key is optional in the user files.

use crate::ObservabilityConfig;
use config::{Config, File, FileFormat};
use quire_core::Color;
use quire_error::{ConfigError, QuireError, QuireResult};
use quire_pages::{DisplayOptions, JumpVisibility, NavigationSymbols, StopBehavior};
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::{debug, instrument};

/// Bundled default configuration.
const DEFAULT_CONFIG: &str = include_str!("../quire.toml");

/// Serialisable defaults for every paginated message.
///
/// # Example
///
/// ```toml
/// [paginator]
/// fields_per_page = 10
/// jump_visibility = "always"
/// stop_behavior = "delete_message"
///
/// [paginator.symbols]
/// stop = "🛑"
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PaginatorSettings {
    /// Symbol bound to each navigation intent
    pub symbols: NavigationSymbols,
    /// Fields grouped onto one page in fielded mode
    pub fields_per_page: usize,
    /// When the jump affordance is attached
    pub jump_visibility: JumpVisibility,
    /// Whether the info affordance is attached
    pub display_info_icon: bool,
    /// Text posted by the info affordance
    pub info_text: String,
    /// Lifetime of the info message, in seconds
    pub info_timeout_secs: u64,
    /// How long a jump prompt waits for a page number, in seconds
    pub jump_timeout_secs: u64,
    /// Lifetime of error hints, in seconds
    pub transient_timeout_secs: u64,
    /// What Stop does to the message
    pub stop_behavior: StopBehavior,
    /// Embed accent colour as `0xRRGGBB`
    pub color: u32,
}

impl PaginatorSettings {
    /// Display options described by these settings.
    pub fn display_options(&self) -> DisplayOptions {
        DisplayOptions::from(self)
    }

    /// Embed accent colour.
    pub fn color(&self) -> Color {
        Color(self.color)
    }
}

impl Default for PaginatorSettings {
    fn default() -> Self {
        let options = DisplayOptions::default();
        Self {
            symbols: options.symbols().clone(),
            fields_per_page: *options.fields_per_page(),
            jump_visibility: *options.jump_visibility(),
            display_info_icon: *options.display_info_icon(),
            info_text: options.info_text().clone(),
            info_timeout_secs: options.info_timeout().as_secs(),
            jump_timeout_secs: options.jump_timeout().as_secs(),
            transient_timeout_secs: options.transient_timeout().as_secs(),
            stop_behavior: *options.stop_behavior(),
            color: Color::default().0,
        }
    }
}

impl From<&PaginatorSettings> for DisplayOptions {
    fn from(settings: &PaginatorSettings) -> Self {
        DisplayOptions::default()
            .with_symbols(settings.symbols.clone())
            .with_fields_per_page(settings.fields_per_page)
            .with_jump_visibility(settings.jump_visibility)
            .with_display_info_icon(settings.display_info_icon)
            .with_info_text(settings.info_text.clone())
            .with_info_timeout(Duration::from_secs(settings.info_timeout_secs))
            .with_jump_timeout(Duration::from_secs(settings.jump_timeout_secs))
            .with_transient_timeout(Duration::from_secs(settings.transient_timeout_secs))
            .with_stop_behavior(settings.stop_behavior)
    }
}

/// Log output settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingSettings {
    /// Filter directive used when `RUST_LOG` is unset
    pub log_level: String,
    /// Emit JSON lines instead of plain text
    pub json_logs: bool,
}

impl LoggingSettings {
    /// Observability setup for `service_name` using these settings.
    pub fn observability(&self, service_name: impl Into<String>) -> ObservabilityConfig {
        ObservabilityConfig::new(service_name)
            .with_log_level(self.log_level.clone())
            .with_json_logs(self.json_logs)
    }
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            json_logs: false,
        }
    }
}

/// Top-level Quire configuration.
///
/// # Example
///
/// ```no_run
/// use quire::QuireConfig;
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let config = QuireConfig::load()?;
/// let options = config.paginator.display_options();
/// println!("Jump prompt waits {:?}", options.jump_timeout());
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct QuireConfig {
    /// Paginated message defaults
    pub paginator: PaginatorSettings,
    /// Log output settings
    pub observability: LoggingSettings,
}

impl QuireConfig {
    /// Load configuration from a single file.
    ///
    /// Keys missing from the file take their built-in defaults.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<std::path::Path>) -> QuireResult<Self> {
        debug!("Loading configuration from file");

        Config::builder()
            .add_source(File::from(path.as_ref()))
            .build()
            .map_err(|e| {
                QuireError::from(ConfigError::new(format!(
                    "Failed to read configuration from {}: {}",
                    path.as_ref().display(),
                    e
                )))
            })?
            .try_deserialize()
            .map_err(|e| {
                QuireError::from(ConfigError::new(format!(
                    "Failed to parse configuration: {}",
                    e
                )))
            })
    }

    /// Load configuration with precedence: current dir > home dir > bundled defaults.
    ///
    /// User config files are optional and skipped when absent.
    ///
    /// # Errors
    ///
    /// Returns an error if a present file cannot be parsed.
    #[instrument]
    pub fn load() -> QuireResult<Self> {
        debug!("Loading configuration with precedence: current dir > home dir > bundled defaults");

        let mut builder =
            Config::builder().add_source(File::from_str(DEFAULT_CONFIG, FileFormat::Toml));

        if let Some(home) = dirs::home_dir() {
            let home_config = home.join(".config/quire/quire.toml");
            builder = builder.add_source(File::from(home_config).required(false));
        }

        builder = builder.add_source(File::with_name("quire").required(false));

        builder
            .build()
            .map_err(|e| {
                QuireError::from(ConfigError::new(format!(
                    "Failed to build configuration: {}",
                    e
                )))
            })?
            .try_deserialize()
            .map_err(|e| {
                QuireError::from(ConfigError::new(format!(
                    "Failed to parse configuration: {}",
                    e
                )))
            })
    }

    /// Parse configuration from TOML text.
    ///
    /// # Errors
    ///
    /// Returns an error if the text is not valid configuration.
    pub fn from_toml_str(text: &str) -> QuireResult<Self> {
        Config::builder()
            .add_source(File::from_str(text, FileFormat::Toml))
            .build()
            .and_then(|config| config.try_deserialize())
            .map_err(|e| {
                QuireError::from(ConfigError::new(format!(
                    "Failed to parse configuration: {}",
                    e
                )))
            })
    }
}
