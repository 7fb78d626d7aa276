//! Rule configuration
//!
//! ESLint-style documents, in YAML or JSON:
//!
//! ```yaml
//! extends: [recommended]
//! rules:
//!   void/side-effect: [error, { allowTraps: { get: true } }]
//!   void/arrow-body: [warn, { single: body, multi: false }]
//! ```
//!
//! Rule keys are accepted with or without the `void/` prefix.

use crate::diagnostic::Severity;
use crate::rule::PLUGIN_NAME;
use crate::rules::{ARROW_BODY, BUILTIN_RULES, SIDE_EFFECT};
use serde::Deserialize;
use std::collections::BTreeMap;
use std::fmt;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Configuration error
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("YAML parse error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Unknown rule: {0}")]
    UnknownRule(String),

    #[error("Invalid options for rule '{rule}': {source}")]
    InvalidOptions {
        rule: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

/// Rule level: `off`/`warn`/`error` or `0`/`1`/`2`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(try_from = "RawRuleLevel")]
pub enum RuleLevel {
    #[default]
    Off,
    Warn,
    Error,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawRuleLevel {
    Number(u64),
    Name(String),
}

impl TryFrom<RawRuleLevel> for RuleLevel {
    type Error = String;

    fn try_from(raw: RawRuleLevel) -> Result<Self, String> {
        match raw {
            RawRuleLevel::Number(0) => Ok(RuleLevel::Off),
            RawRuleLevel::Number(1) => Ok(RuleLevel::Warn),
            RawRuleLevel::Number(2) => Ok(RuleLevel::Error),
            RawRuleLevel::Number(n) => Err(format!("Invalid rule level: {}", n)),
            RawRuleLevel::Name(name) => name.parse(),
        }
    }
}

impl std::str::FromStr for RuleLevel {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "off" | "0" => Ok(RuleLevel::Off),
            "warn" | "warning" | "1" => Ok(RuleLevel::Warn),
            "error" | "2" => Ok(RuleLevel::Error),
            _ => Err(format!("Invalid rule level: {}", s)),
        }
    }
}

impl fmt::Display for RuleLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RuleLevel::Off => write!(f, "off"),
            RuleLevel::Warn => write!(f, "warn"),
            RuleLevel::Error => write!(f, "error"),
        }
    }
}

impl RuleLevel {
    /// Severity of reports, `None` when the rule is off
    pub fn severity(&self) -> Option<Severity> {
        match self {
            RuleLevel::Off => None,
            RuleLevel::Warn => Some(Severity::Warning),
            RuleLevel::Error => Some(Severity::Error),
        }
    }
}

/// Level and raw options of one rule
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(try_from = "RawRuleEntry")]
pub struct RuleEntry {
    pub level: RuleLevel,
    /// Options object, validated when the rule is activated
    pub options: Option<serde_json::Value>,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawRuleEntry {
    Level(RuleLevel),
    List(Vec<serde_json::Value>),
}

impl TryFrom<RawRuleEntry> for RuleEntry {
    type Error = String;

    fn try_from(raw: RawRuleEntry) -> Result<Self, Self::Error> {
        match raw {
            RawRuleEntry::Level(level) => Ok(RuleEntry::new(level)),
            RawRuleEntry::List(items) => {
                let mut items = items.into_iter();
                let level = items
                    .next()
                    .ok_or_else(|| "Rule entry must start with a level".to_string())?;
                let level: RuleLevel =
                    serde_json::from_value(level).map_err(|e| e.to_string())?;
                let options = items.next();
                if items.next().is_some() {
                    return Err("Rule entry takes at most one options object".to_string());
                }
                Ok(RuleEntry { level, options })
            }
        }
    }
}

impl RuleEntry {
    pub fn new(level: RuleLevel) -> Self {
        Self {
            level,
            options: None,
        }
    }

    pub fn with_options(mut self, options: serde_json::Value) -> Self {
        self.options = Some(options);
        self
    }
}

/// Strip the plugin namespace from a rule key
pub fn normalize_rule_id(key: &str) -> &str {
    key.strip_prefix(PLUGIN_NAME)
        .and_then(|rest| rest.strip_prefix('/'))
        .unwrap_or(key)
}

/// Main configuration structure
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Presets or configuration files this one builds on
    pub extends: Vec<String>,

    /// Rule levels and options, keyed by rule ID
    pub rules: BTreeMap<String, RuleEntry>,
}

impl Config {
    /// Create an empty configuration (every rule off)
    pub fn new() -> Self {
        Self::default()
    }

    /// Get a preset configuration by name
    pub fn preset(name: &str) -> Option<Self> {
        match normalize_rule_id(name) {
            "recommended" => Some(Self::preset_recommended()),
            _ => None,
        }
    }

    /// Recommended preset - both rules as errors with default options
    fn preset_recommended() -> Self {
        Self::new()
            .with_rule(SIDE_EFFECT, RuleEntry::new(RuleLevel::Error))
            .with_rule(ARROW_BODY, RuleEntry::new(RuleLevel::Error))
    }

    /// Set a rule entry; the key may carry the plugin prefix
    pub fn with_rule(mut self, id: &str, entry: RuleEntry) -> Self {
        self.set_rule(id, entry);
        self
    }

    pub fn set_rule(&mut self, id: &str, entry: RuleEntry) {
        self.rules
            .insert(normalize_rule_id(id).to_string(), entry);
    }

    /// Entry for a rule, if configured
    pub fn rule(&self, id: &str) -> Option<&RuleEntry> {
        self.rules.get(normalize_rule_id(id))
    }

    /// Configured level of a rule (`off` when absent)
    pub fn rule_level(&self, id: &str) -> RuleLevel {
        self.rule(id).map(|entry| entry.level).unwrap_or_default()
    }

    /// Parse a YAML document; `extends` entries resolve against the current directory
    pub fn from_yaml_str(content: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_yaml::from_str(content)?;
        config.resolve(Path::new("."), 0)
    }

    /// Parse a JSON document; `extends` entries resolve against the current directory
    pub fn from_json_str(content: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(content)?;
        config.resolve(Path::new("."), 0)
    }

    /// Load configuration from a file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        Self::load_with_depth(path, 0)
    }

    /// Load with recursion depth limit (to prevent infinite loops)
    fn load_with_depth(path: &Path, depth: usize) -> Result<Self, ConfigError> {
        const MAX_DEPTH: usize = 10;
        if depth >= MAX_DEPTH {
            return Err(ConfigError::Invalid(
                "Maximum config inheritance depth exceeded".to_string(),
            ));
        }

        let content = std::fs::read_to_string(path)?;

        let ext = path.extension().and_then(|e| e.to_str()).unwrap_or("");

        let config: Self = match ext {
            "yaml" | "yml" => serde_yaml::from_str(&content)?,
            "json" => serde_json::from_str(&content)?,
            _ => {
                return Err(ConfigError::Invalid(format!(
                    "Unknown config file format: {}",
                    ext
                )))
            }
        };

        log::debug!("Loaded configuration from {}", path.display());
        let base_dir = path.parent().unwrap_or(Path::new("."));
        config.resolve(base_dir, depth)
    }

    /// Normalize rule keys and fold in `extends`
    fn resolve(self, base_dir: &Path, depth: usize) -> Result<Self, ConfigError> {
        let mut own = Self::new();
        for (key, entry) in self.rules {
            own.set_rule(&key, entry);
        }

        if self.extends.is_empty() {
            return Ok(own);
        }

        let mut base = Self::new();
        for extend in &self.extends {
            let extended = match Self::preset(extend) {
                Some(preset) => preset,
                None => {
                    let extend_path = if Path::new(extend).is_absolute() {
                        PathBuf::from(extend)
                    } else {
                        base_dir.join(extend)
                    };
                    Self::load_with_depth(&extend_path, depth + 1)?
                }
            };
            base.merge(extended);
        }

        // Current config on top of its bases
        base.merge(own);
        Ok(base)
    }

    /// Merge another config into this one (other takes precedence)
    ///
    /// A level-only entry keeps the options of the entry it overrides, as ESLint does.
    pub fn merge(&mut self, other: Self) {
        for (id, entry) in other.rules {
            let id = normalize_rule_id(&id).to_string();
            if entry.options.is_none() {
                if let Some(existing) = self.rules.get_mut(&id) {
                    existing.level = entry.level;
                    continue;
                }
            }
            self.rules.insert(id, entry);
        }
    }

    /// Check that every configured rule exists
    pub fn validate(&self) -> Result<(), ConfigError> {
        match self
            .rules
            .keys()
            .find(|id| !BUILTIN_RULES.contains(&id.as_str()))
        {
            Some(unknown) => Err(ConfigError::UnknownRule(unknown.clone())),
            None => Ok(()),
        }
    }
}
