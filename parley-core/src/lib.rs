pub mod config;
pub mod message;

// Config re-exports
pub use config::{
    KnowledgeFormat, KnowledgeSettings, KnowledgeSourceSettings, LoggingSettings, MatchOptions,
    MatcherSettings, ResponderSettings, Settings, SettingsError,
};

// Message re-exports
pub use message::{ChatMessage, ConversationLog, MessageRole};
