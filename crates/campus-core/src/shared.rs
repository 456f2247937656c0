//! Shared types used across the campus assistant core.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::Path;

use crate::knowledge::TopicId;

/// Artificial "typing" delay applied before each reply, in milliseconds.
pub const DEFAULT_TYPING_DELAY_MS: u64 = 1_500;

/// Input boundary for the orchestrator: one submission per dispatch.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum Goal {
    /// Free-text submission from the input field.
    Submit { text: String },
    /// Quick-action trigger naming a topic id (e.g. "dining").
    QuickAction { topic: String },
}

/// Response object the UI renders verbatim, embedded display markers included.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Reply {
    pub text: String,
    /// Stable id of the topic that produced the text (e.g. "dining", "general").
    pub topic: String,
}

/// Assistant configuration. Load from TOML or env.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AssistantConfig {
    /// Display identity of the assistant (e.g. "Smart Campus Assistant").
    pub app_name: String,
    /// Presentation-only delay before each reply, in milliseconds.
    pub typing_delay_ms: u64,
    /// When true, a fixed greeting message seeds every new conversation.
    #[serde(default = "default_true")]
    pub greeting_enabled: bool,
    /// Display-label overrides for quick actions, keyed by topic id.
    #[serde(default)]
    pub topic_labels: HashMap<String, String>,
}

fn default_true() -> bool {
    true
}

impl AssistantConfig {
    /// Topic labels as `TopicId` -> label. Keys that are not known topic ids are skipped.
    pub fn topic_labels_map(&self) -> HashMap<TopicId, String> {
        self.topic_labels
            .iter()
            .filter_map(|(k, v)| TopicId::from_id(k).map(|t| (t, v.clone())))
            .collect()
    }

    /// Load config from file and environment. Precedence: env `CAMPUS_CONFIG` path > `config/assistant.toml` > defaults.
    pub fn load() -> Result<Self, config::ConfigError> {
        let config_path =
            std::env::var("CAMPUS_CONFIG").unwrap_or_else(|_| "config/assistant".to_string());
        let builder = config::Config::builder()
            .set_default("app_name", "Smart Campus Assistant")?
            .set_default("typing_delay_ms", DEFAULT_TYPING_DELAY_MS as i64)?
            .set_default("greeting_enabled", true)?;

        let path = Path::new(&config_path);
        let builder = if path.exists() {
            builder.add_source(config::File::from(path))
        } else {
            builder
        };

        let built = builder
            .add_source(config::Environment::with_prefix("CAMPUS").separator("__"))
            .build()?;

        built.try_deserialize()
    }
}

impl Default for AssistantConfig {
    fn default() -> Self {
        Self {
            app_name: "Smart Campus Assistant".to_string(),
            typing_delay_ms: DEFAULT_TYPING_DELAY_MS,
            greeting_enabled: true,
            topic_labels: HashMap::new(),
        }
    }
}
