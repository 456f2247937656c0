//! Topic table and first-match-wins keyword resolution.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Topic identifiers for the campus knowledge base.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TopicId {
    /// Class schedules and the academic calendar.
    Schedules,
    /// Campus facilities and locations.
    Facilities,
    /// Dining services and hours.
    Dining,
    /// Library resources and services.
    Library,
    /// Administrative offices and procedures.
    Administration,
    /// Sentinel topic for queries no keyword list covers.
    General,
}

impl TopicId {
    /// Returns the stable string id for this topic (e.g. "dining").
    pub fn id(&self) -> &'static str {
        match self {
            Self::Schedules => "schedules",
            Self::Facilities => "facilities",
            Self::Dining => "dining",
            Self::Library => "library",
            Self::Administration => "administration",
            Self::General => "general",
        }
    }

    /// Returns the human-readable label for this topic.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Schedules => "Class Schedules & Academic Calendar",
            Self::Facilities => "Campus Facilities & Locations",
            Self::Dining => "Dining Services & Hours",
            Self::Library => "Library Resources & Services",
            Self::Administration => "Administrative Procedures",
            Self::General => "General Assistance",
        }
    }

    /// Creates a TopicId from its string id. Returns None for unknown ids.
    pub fn from_id(id: &str) -> Option<Self> {
        match id {
            "schedules" => Some(Self::Schedules),
            "facilities" => Some(Self::Facilities),
            "dining" => Some(Self::Dining),
            "library" => Some(Self::Library),
            "administration" => Some(Self::Administration),
            "general" => Some(Self::General),
            _ => None,
        }
    }

    /// Returns the answerable topics in knowledge-base scan order.
    /// `General` is the fallback sentinel and is never scanned.
    pub fn all() -> [Self; 5] {
        [
            Self::Schedules,
            Self::Facilities,
            Self::Dining,
            Self::Library,
            Self::Administration,
        ]
    }
}

impl fmt::Display for TopicId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

/// One topic's trigger keywords and candidate responses.
#[derive(Debug, Clone)]
pub struct TopicEntry {
    pub topic: TopicId,
    /// Lowercase trigger keywords, tested by substring containment.
    pub keywords: Vec<String>,
    /// Candidate response texts; one is chosen per reply.
    pub responses: Vec<String>,
}

impl TopicEntry {
    pub fn new<K, R>(topic: TopicId, keywords: K, responses: R) -> Self
    where
        K: IntoIterator,
        K::Item: Into<String>,
        R: IntoIterator,
        R::Item: Into<String>,
    {
        Self {
            topic,
            keywords: keywords.into_iter().map(Into::into).collect(),
            responses: responses.into_iter().map(Into::into).collect(),
        }
    }
}

/// Invariant violation found while constructing a [`KnowledgeBase`].
#[derive(Debug, PartialEq, Eq)]
pub enum KnowledgeError {
    EmptyKeywords(TopicId),
    EmptyResponses(TopicId),
    DuplicateTopic(TopicId),
}

impl fmt::Display for KnowledgeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyKeywords(t) => write!(f, "topic '{}' has no keywords", t),
            Self::EmptyResponses(t) => write!(f, "topic '{}' has no responses", t),
            Self::DuplicateTopic(t) => write!(f, "topic '{}' appears more than once", t),
        }
    }
}

impl std::error::Error for KnowledgeError {}

/// Ordered, immutable topic table. Order is significant: the first entry
/// whose keyword list matches a query wins.
#[derive(Debug)]
pub struct KnowledgeBase {
    entries: Vec<TopicEntry>,
    fallback: TopicEntry,
}

impl KnowledgeBase {
    /// Builds a knowledge base from `entries` (scanned in the given order) and
    /// the single fallback response used when nothing matches.
    ///
    /// Keywords are normalized to lowercase. Every entry must carry at least
    /// one keyword and one response, and no topic may appear twice.
    pub fn new(
        mut entries: Vec<TopicEntry>,
        fallback_text: impl Into<String>,
    ) -> Result<Self, KnowledgeError> {
        let mut seen: Vec<TopicId> = Vec::with_capacity(entries.len());
        for entry in &mut entries {
            if entry.keywords.is_empty() {
                return Err(KnowledgeError::EmptyKeywords(entry.topic));
            }
            if entry.responses.is_empty() {
                return Err(KnowledgeError::EmptyResponses(entry.topic));
            }
            if seen.contains(&entry.topic) {
                return Err(KnowledgeError::DuplicateTopic(entry.topic));
            }
            seen.push(entry.topic);
            for keyword in &mut entry.keywords {
                *keyword = keyword.to_lowercase();
            }
        }

        let fallback = TopicEntry {
            topic: TopicId::General,
            keywords: Vec::new(),
            responses: vec![fallback_text.into()],
        };

        tracing::info!(
            target: "campus::knowledge",
            topics = entries.len(),
            keywords = entries.iter().map(|e| e.keywords.len()).sum::<usize>(),
            "knowledge base constructed"
        );

        Ok(Self { entries, fallback })
    }

    /// Resolves a free-text query to a topic entry: first entry (fixed order)
    /// with any keyword contained in the lowercased query, else the general
    /// fallback sentinel. Pure; deterministic for a given table order.
    pub fn resolve(&self, query: &str) -> &TopicEntry {
        let normalized = query.to_lowercase();
        for entry in &self.entries {
            if entry.keywords.iter().any(|k| normalized.contains(k.as_str())) {
                tracing::debug!(
                    target: "campus::knowledge",
                    topic = entry.topic.id(),
                    "query matched topic"
                );
                return entry;
            }
        }
        tracing::debug!(target: "campus::knowledge", "no keyword matched; using general fallback");
        &self.fallback
    }

    /// Returns the entry for a topic id, or None if the table does not carry it.
    /// The general sentinel is not addressable here.
    pub fn topic(&self, id: &str) -> Option<&TopicEntry> {
        self.entries.iter().find(|e| e.topic.id() == id)
    }

    /// The entry returned when no keyword matches.
    pub fn fallback(&self) -> &TopicEntry {
        &self.fallback
    }

    /// Topic ids in scan order.
    pub fn topics(&self) -> impl Iterator<Item = TopicId> + '_ {
        self.entries.iter().map(|e| e.topic)
    }

    /// Number of answerable topics (the fallback sentinel excluded).
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
