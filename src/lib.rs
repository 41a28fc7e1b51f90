//! # podlang
//!
//! Guesses the programming language of an application running in a pod.
//!
//! The guess is not deterministic: the build history of the container image
//! is scanned for telling commands (`npm install`, `rustc`, ...) listed in a
//! user-maintained knowledge base of heuristics.
//!
//! ## Modules
//!
//! - [`knowledge`] - Knowledge base, persistence, matching and editing
//! - [`collectors`] - Pod discovery (Kubernetes) and image history (Docker)
//! - [`cli`] - Command line interface
//! - [`types`] - Shared types

#[cfg(feature = "cli")]
pub mod cli;
pub mod collectors;
pub mod knowledge;
pub mod types;

pub use knowledge::{EditOutcome, HeuristicEntry, InferenceResult, KnowledgeBase, KnowledgeStore};
pub use types::config::Config;
pub use types::errors::{PodlangError, PodlangResult};
pub use types::history::BuildHistoryEntry;
