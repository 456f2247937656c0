//! Fixed campus knowledge base and topic resolution.
//!
//! ## Topic table
//!
//! The assistant answers from five canned topics, scanned in this order
//! (first keyword match wins):
//!
//! | Order | TopicId        | Covers                                  |
//! |-------|----------------|-----------------------------------------|
//! | 1     | Schedules      | Class schedules, academic calendar      |
//! | 2     | Facilities     | Buildings, locations, recreation        |
//! | 3     | Dining         | Dining halls, cafés, meal hours         |
//! | 4     | Library        | Research support, study spaces          |
//! | 5     | Administration | Registrar, financial aid, contacts      |
//!
//! Queries matching no topic fall through to the `General` sentinel, whose
//! single response lists the supported topics.

mod base;
mod campus;

pub use base::{KnowledgeBase, KnowledgeError, TopicEntry, TopicId};
pub use campus::{
    campus_knowledge, quick_actions, QuickAction, ASSISTANT_GREETING, GENERAL_FALLBACK,
};
