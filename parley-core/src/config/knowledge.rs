//! Knowledge system configuration types.
//!
//! These types define the resolved (non-optional) settings used by
//! `parley-knowledge`. They are created from the user-facing TOML structs
//! via `From`.

use std::path::PathBuf;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::settings::{MatcherSettings, Settings};

/// Minimum token-overlap score a candidate must strictly exceed.
pub const MATCH_THRESHOLD: f64 = 0.3;

/// Flat bonus for a question that starts with the input (block format only).
pub const PREFIX_BOOST: f64 = 0.5;

/// Whether a containment hit between question and input wins immediately.
pub const SUBSTRING_SHORT_CIRCUIT: bool = true;

/// Layout of the backing knowledge file.
///
/// The two layouts conflict line by line (a line ending in `?` is a full
/// Q&A line in one and a question header in the other), so a deployment
/// picks exactly one.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum KnowledgeFormat {
    /// One entry per line, sorted into Q&A pairs, jokes and facts.
    #[default]
    Classified,
    /// Question header lines followed by answer lines. Q&A only.
    Blocks,
}

impl KnowledgeFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            KnowledgeFormat::Classified => "classified",
            KnowledgeFormat::Blocks => "blocks",
        }
    }

    /// Whether this layout carries joke and fact collections.
    pub fn has_categories(&self) -> bool {
        matches!(self, KnowledgeFormat::Classified)
    }
}

impl std::fmt::Display for KnowledgeFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for KnowledgeFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "classified" | "lines" => Ok(KnowledgeFormat::Classified),
            "blocks" | "block" => Ok(KnowledgeFormat::Blocks),
            _ => Err(format!("Unknown knowledge format: {}", s)),
        }
    }
}

/// Resolved matcher tuning knobs.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MatchOptions {
    /// Best score must be strictly greater than this to be accepted.
    #[serde(default = "default_threshold")]
    pub threshold: f64,
    #[serde(default = "default_substring_short_circuit")]
    pub substring_short_circuit: bool,
    /// Bonus added when the question starts with the input. `None` disables it.
    #[serde(default)]
    pub prefix_boost: Option<f64>,
}

impl Default for MatchOptions {
    fn default() -> Self {
        Self {
            threshold: default_threshold(),
            substring_short_circuit: default_substring_short_circuit(),
            prefix_boost: None,
        }
    }
}

impl MatchOptions {
    /// Defaults for a given layout: only the block layout applies the prefix boost.
    pub fn for_format(format: KnowledgeFormat) -> Self {
        let prefix_boost = match format {
            KnowledgeFormat::Classified => None,
            KnowledgeFormat::Blocks => Some(PREFIX_BOOST),
        };
        Self {
            prefix_boost,
            ..Self::default()
        }
    }
}

/// Resolved knowledge settings (all values filled with defaults).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct KnowledgeSettings {
    /// Backing text file.
    #[serde(default = "default_source_path")]
    pub source_path: PathBuf,
    #[serde(default)]
    pub format: KnowledgeFormat,
    #[serde(default)]
    pub matching: MatchOptions,
}

impl Default for KnowledgeSettings {
    fn default() -> Self {
        Self {
            source_path: default_source_path(),
            format: KnowledgeFormat::default(),
            matching: MatchOptions::default(),
        }
    }
}

fn default_source_path() -> PathBuf {
    PathBuf::from("data.txt")
}

fn default_threshold() -> f64 {
    MATCH_THRESHOLD
}

fn default_substring_short_circuit() -> bool {
    SUBSTRING_SHORT_CIRCUIT
}

impl From<&Settings> for KnowledgeSettings {
    fn from(value: &Settings) -> Self {
        let format = value.knowledge.format;
        let mut settings = KnowledgeSettings {
            format,
            matching: MatchOptions::for_format(format),
            ..KnowledgeSettings::default()
        };
        if let Some(path) = &value.knowledge.path {
            settings.source_path = PathBuf::from(path);
        }
        apply_matcher_overrides(&mut settings.matching, format, &value.matcher);
        settings
    }
}

fn apply_matcher_overrides(
    matching: &mut MatchOptions,
    format: KnowledgeFormat,
    overrides: &MatcherSettings,
) {
    if let Some(threshold) = overrides.threshold {
        matching.threshold = threshold;
    }
    if let Some(enabled) = overrides.substring_short_circuit {
        matching.substring_short_circuit = enabled;
    }
    // The boost belongs to the block layout; a configured value never turns it on elsewhere.
    if let (Some(boost), KnowledgeFormat::Blocks) = (overrides.prefix_boost, format) {
        matching.prefix_boost = Some(boost);
    }
}
