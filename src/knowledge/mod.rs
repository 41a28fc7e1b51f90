//! Heuristic knowledge base.
//!
//! ## Components
//!
//! - **KnowledgeBase**: ordered language → command patterns mapping
//! - **KnowledgeStore**: JSON file persistence
//! - **infer**: first-discovery substring matching over build history
//! - **add_pattern / list**: editing and listing heuristics

mod base;
mod editor;
mod matcher;
mod store;

pub use base::{HeuristicEntry, KnowledgeBase};
pub use editor::{add_pattern, list, EditOutcome};
pub use matcher::{infer, InferenceResult};
pub use store::KnowledgeStore;
