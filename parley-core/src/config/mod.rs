//! Configuration management for parley.
//!
//! Settings are non-sensitive and live in a single TOML file. The core
//! responder itself never reads the environment; only the front end resolves
//! where the file lives.
//!
//! # Settings (TOML File)
//! Located at `~/.config/parley/config.toml`:
//! ```toml
//! [knowledge]
//! path = "data.txt"
//! format = "classified"
//!
//! [matcher]
//! threshold = 0.3
//!
//! [responder]
//! seed = 42
//!
//! [logging]
//! level = "info"
//! ```

pub mod knowledge;
mod settings;

pub use knowledge::{
    KnowledgeFormat, KnowledgeSettings, MATCH_THRESHOLD, MatchOptions, PREFIX_BOOST,
    SUBSTRING_SHORT_CIRCUIT,
};
pub use settings::{
    KnowledgeSourceSettings, LoggingSettings, MatcherSettings, ResponderSettings, Settings,
    SettingsError,
};
