use anyhow::Result;
use serde::{Deserialize, Serialize};
use tokio::fs;
use tracing::{debug, info, warn};

/// Class used when the configuration yields no usable class names.
pub const DEFAULT_CLASS: &str = "tmux-scratchpad";

const DEFAULT_MAX_ASPECT: f64 = 1.6;
const DEFAULT_SCALE_FACTOR: f64 = 0.8;

fn default_max_aspect() -> f64 {
    DEFAULT_MAX_ASPECT
}

fn default_scale_factor() -> f64 {
    DEFAULT_SCALE_FACTOR
}

/// Raw on-disk configuration. Field-level defaults keep partial files
/// valid; [`Config::resolve`] applies the semantic fallbacks.
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct Config {
    /// Scratchpad window classes, as a native list or a single
    /// newline/comma separated string.
    #[serde(default)]
    pub classes: ClassList,

    #[serde(default = "default_max_aspect")]
    pub max_aspect: f64,

    #[serde(default = "default_scale_factor")]
    pub scale_factor: f64,
}

/// Class names accept either form:
///
/// ```toml
/// classes = ["obsidian", "tmux-scratchpad"]
/// # or
/// classes = "obsidian, tmux-scratchpad"
/// ```
#[derive(Debug, Deserialize, Serialize, Clone)]
#[serde(untagged)]
pub enum ClassList {
    List(Vec<String>),
    Raw(String),
}

impl Default for ClassList {
    fn default() -> Self {
        ClassList::List(Vec::new())
    }
}

impl ClassList {
    /// Flatten into trimmed, non-empty, unique class names. Every entry is
    /// split on newlines and commas, so list entries may themselves pack
    /// several names.
    pub fn parse(&self) -> Vec<String> {
        let entries: Vec<&str> = match self {
            ClassList::List(items) => items.iter().map(String::as_str).collect(),
            ClassList::Raw(raw) => vec![raw.as_str()],
        };

        let mut classes: Vec<String> = Vec::new();
        for entry in entries {
            for part in entry.split(['\n', ',']) {
                let trimmed = part.trim();
                if !trimmed.is_empty() && !classes.iter().any(|c| c == trimmed) {
                    classes.push(trimmed.to_string());
                }
            }
        }
        classes
    }
}

/// Validated configuration consumed by the toggle engine and adapter.
#[derive(Debug, Clone, PartialEq)]
pub struct ToggleConfig {
    pub classes: Vec<String>,
    pub max_aspect: f64,
    pub scale_factor: f64,
}

impl Config {
    pub async fn load(path: &str) -> Result<Self> {
        let expanded_path = shellexpand::tilde(path);
        info!("📄 Reading config from: {}", expanded_path);

        let content = fs::read_to_string(expanded_path.as_ref())
            .await
            .map_err(|e| anyhow::anyhow!("Failed to read config file '{}': {}", expanded_path, e))?;

        let config: Config =
            toml::from_str(&content).map_err(|e| anyhow::anyhow!("Failed to parse config: {}", e))?;

        debug!("📋 Config loaded: {} classes", config.classes.parse().len());
        Ok(config)
    }

    /// Never-fatal variant of [`Config::load`]: any read or parse failure
    /// falls back to built-in defaults with a warning, so a broken config
    /// file degrades to the default scratchpad class instead of aborting.
    pub async fn load_or_default(path: &str) -> Self {
        match Self::load(path).await {
            Ok(config) => config,
            Err(e) => {
                warn!("⚠️ {e:#}; using built-in defaults");
                Self::default()
            }
        }
    }

    /// Default config location: `$XDG_CONFIG_HOME/togglepad/togglepad.toml`.
    pub fn default_path() -> String {
        dirs::config_dir()
            .map(|dir| {
                dir.join("togglepad")
                    .join("togglepad.toml")
                    .to_string_lossy()
                    .into_owned()
            })
            .unwrap_or_else(|| "~/.config/togglepad/togglepad.toml".to_string())
    }

    /// Apply semantic fallbacks and produce the validated configuration.
    /// Never fails: an empty class list becomes [`DEFAULT_CLASS`], and
    /// out-of-range floats revert to their defaults.
    pub fn resolve(&self) -> ToggleConfig {
        let mut classes = self.classes.parse();
        if classes.is_empty() {
            info!("📋 No scratchpad classes configured, using '{DEFAULT_CLASS}'");
            classes = vec![DEFAULT_CLASS.to_string()];
        }

        let max_aspect = if self.max_aspect > 0.0 {
            self.max_aspect
        } else {
            warn!(
                "⚠️ max_aspect must be positive, got {}; falling back to {}",
                self.max_aspect, DEFAULT_MAX_ASPECT
            );
            DEFAULT_MAX_ASPECT
        };

        let scale_factor = if self.scale_factor > 0.0 && self.scale_factor <= 1.0 {
            self.scale_factor
        } else {
            warn!(
                "⚠️ scale_factor must be in (0, 1], got {}; falling back to {}",
                self.scale_factor, DEFAULT_SCALE_FACTOR
            );
            DEFAULT_SCALE_FACTOR
        };

        ToggleConfig {
            classes,
            max_aspect,
            scale_factor,
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            classes: ClassList::default(),
            max_aspect: DEFAULT_MAX_ASPECT,
            scale_factor: DEFAULT_SCALE_FACTOR,
        }
    }
}
