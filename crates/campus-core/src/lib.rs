//! campus-core: campus assistant core library (knowledge base, topic matcher,
//! response picker, and conversation orchestration).
//!
//! The rendering shell (chat surface, quick-action buttons, typing indicator)
//! is an external collaborator: it feeds submissions into
//! [`Assistant::dispatch`] and renders the [`Reply`] and log it gets back.

mod conversation;
mod knowledge;
mod orchestrator;
mod responder;
mod shared;

// Shared (config + dispatch boundary)
pub use shared::{AssistantConfig, Goal, Reply, DEFAULT_TYPING_DELAY_MS};

// Conversation log
pub use conversation::{ConversationLog, Message, Sender};

// Knowledge base
pub use knowledge::{
    campus_knowledge, quick_actions, KnowledgeBase, KnowledgeError, QuickAction, TopicEntry,
    TopicId, ASSISTANT_GREETING, GENERAL_FALLBACK,
};

// Responder
pub use responder::ResponsePicker;

// Orchestrator
pub use orchestrator::{Assistant, NoPacing, ResponsePacing, TokioPacing};
