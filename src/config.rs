//! Application configuration
//!
//! Configuration is loaded from multiple sources with the following priority (lowest to highest):
//! 1. `config/default.toml` (version controlled)
//! 2. `config/user.toml` (gitignored, user overrides)
//! 3. Environment variables (`PLANAR_SECTION__KEY`)

use figment::{Figment, providers::{Format, Toml, Env}};
use serde::{Serialize, Deserialize};
use std::fmt;
use std::path::Path;

use planar_math::{Transform2D, Vec2};
use planar_physics::{Bitmask, CollisionFilter, Group};

/// Main application configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    /// Debug configuration
    #[serde(default)]
    pub debug: DebugConfig,
    /// Named shape filters to evaluate against each other
    #[serde(default = "default_filters")]
    pub filters: Vec<FilterEntry>,
    /// Transforms to apply to sample points
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub transforms: Vec<TransformProbe>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            debug: DebugConfig::default(),
            filters: default_filters(),
            transforms: Vec::new(),
        }
    }
}

impl AppConfig {
    /// Load configuration from default locations
    ///
    /// Priority (lowest to highest):
    /// 1. `config/default.toml`
    /// 2. `config/user.toml`
    /// 3. Environment variables (`PLANAR_*`)
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from("config")
    }

    /// Load configuration from a specific config directory
    pub fn load_from<P: AsRef<Path>>(config_dir: P) -> Result<Self, ConfigError> {
        let config_dir = config_dir.as_ref();
        let default_path = config_dir.join("default.toml");
        let user_path = config_dir.join("user.toml");

        let mut figment = Figment::new();

        if default_path.exists() {
            figment = figment.merge(Toml::file(&default_path));
        }

        if user_path.exists() {
            figment = figment.merge(Toml::file(&user_path));
        }

        // PLANAR_DEBUG__LOG_LEVEL=trace -> debug.log_level = "trace"
        figment = figment.merge(Env::prefixed("PLANAR_").split("__"));

        figment.extract().map_err(ConfigError::from)
    }

    /// Resolve every filter entry into a 32-bit collision filter
    pub fn filter_table(&self) -> Result<Vec<(String, CollisionFilter)>, ConfigError> {
        self.filters
            .iter()
            .map(|entry| Ok((entry.name.clone(), entry.to_filter()?)))
            .collect()
    }
}

/// A named shape filter
///
/// Categories are zero-based indices. Omitting `categories` or `mask` means
/// every category.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FilterEntry {
    /// Display name
    pub name: String,
    /// Group identifier (0 = none)
    #[serde(default)]
    pub group: Group,
    /// Categories this shape belongs to
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub categories: Option<Vec<u32>>,
    /// Categories this shape collides with
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mask: Option<Vec<u32>>,
}

impl FilterEntry {
    /// Create an entry from category index lists
    pub fn new(name: &str, group: Group, categories: &[u32], mask: &[u32]) -> Self {
        Self {
            name: name.to_string(),
            group,
            categories: Some(categories.to_vec()),
            mask: Some(mask.to_vec()),
        }
    }

    /// Build the collision filter this entry describes
    pub fn to_filter(&self) -> Result<CollisionFilter, ConfigError> {
        Ok(CollisionFilter::new(
            self.group,
            self.resolve(self.categories.as_deref())?,
            self.resolve(self.mask.as_deref())?,
        ))
    }

    fn resolve(&self, indices: Option<&[u32]>) -> Result<u32, ConfigError> {
        let Some(indices) = indices else {
            return Ok(<u32 as Bitmask>::ALL);
        };
        indices.iter().try_fold(<u32 as Bitmask>::NONE, |acc, &index| {
            <u32 as Bitmask>::bit(index)
                .map(|bit| acc | bit)
                .ok_or_else(|| ConfigError::InvalidCategory {
                    filter: self.name.clone(),
                    index,
                })
        })
    }
}

/// The five-object shooter setup: players, enemies, their bullets and walls
///
/// Nobody is hit by their own side's bullets, bullets pass through each other,
/// enemies collide with each other and everything collides with walls.
fn default_filters() -> Vec<FilterEntry> {
    vec![
        FilterEntry::new("player", 0, &[0], &[3, 4]),
        FilterEntry::new("enemy", 0, &[1], &[1, 2, 4]),
        FilterEntry::new("player_bullet", 0, &[2], &[1, 4]),
        FilterEntry::new("enemy_bullet", 0, &[3], &[0, 4]),
        FilterEntry::new("wall", 0, &[4], &[0, 1, 2, 3]),
    ]
}

/// A transform and the points to push through it
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TransformProbe {
    /// Display name
    pub name: String,
    /// Coefficients; missing ones take their identity value
    #[serde(default)]
    pub transform: Transform2D,
    /// Sample points as `[x, y]`
    #[serde(default)]
    pub points: Vec<[f64; 2]>,
}

impl TransformProbe {
    /// Each sample point paired with its image
    pub fn images(&self) -> Vec<(Vec2, Vec2)> {
        self.points
            .iter()
            .map(|&p| {
                let p = Vec2::from(p);
                (p, self.transform.apply(p))
            })
            .collect()
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
            log_level: "info".to_string(),
        }
    }
}

/// Configuration error
#[derive(Debug)]
pub enum ConfigError {
    /// A source could not be read or did not match the schema
    Load(figment::Error),
    /// A filter names a category that does not fit in the mask
    InvalidCategory {
        /// Name of the offending filter
        filter: String,
        /// The out-of-range category index
        index: u32,
    },
}

impl From<figment::Error> for ConfigError {
    fn from(e: figment::Error) -> Self {
        ConfigError::Load(e)
    }
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Load(err) => write!(f, "Configuration error: {}", err),
            ConfigError::InvalidCategory { filter, index } => write!(
                f,
                "Configuration error: filter '{}' uses category {} (must be below {})",
                filter,
                index,
                <u32 as Bitmask>::BITS
            ),
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConfigError::Load(err) => Some(err),
            ConfigError::InvalidCategory { .. } => None,
        }
    }
}
